use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use meds_catalog::catalog::{Catalog, RouteType};
use meds_catalog::config::{ExportConfig, OUTPUT_PATH_ENV};
use meds_catalog::export::CatalogExporter;
use meds_catalog::integrity::verify_export;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "meds-catalog",
    about = "Export the built-in medication catalog as CSV"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the catalog to a CSV file (the default when no command is given)
    Export {
        /// Output file path [default: ./meds.csv]
        #[arg(short, long, env = OUTPUT_PATH_ENV)]
        output: Option<PathBuf>,
    },
    /// Check an exported file against the built-in catalog
    Verify {
        /// File to check [default: ./meds.csv]
        #[arg(short, long, env = OUTPUT_PATH_ENV)]
        input: Option<PathBuf>,
    },
    /// Print the catalog grouped by route
    List {
        /// Only show one route (oral, injectable, topic, topicOftamologic,
        /// topicOtologic, nasal, inhalational)
        #[arg(long)]
        route: Option<RouteType>,
    },
    /// Print entry counts per route and shared titles
    Summary,
}

impl Commands {
    /// `export` with no flags, parsed so the environment still applies.
    ///
    /// # Errors
    ///
    /// Returns error if `MEDS_CSV_PATH` holds a value clap rejects.
    pub fn default_export() -> Result<Self> {
        Cli::try_parse_from(["meds-catalog", "export"])?
            .command
            .context("export subcommand missing")
    }
}

pub fn run_command(command: Commands) -> Result<()> {
    let catalog = Catalog::builtin();
    match command {
        Commands::Export { output } => handle_export(&catalog, output),
        Commands::Verify { input } => handle_verify(&catalog, input),
        Commands::List { route } => {
            print!("{}", render_list(&catalog, route));
            Ok(())
        }
        Commands::Summary => {
            handle_summary(&catalog);
            Ok(())
        }
    }
}

fn handle_export(catalog: &Catalog, output: Option<PathBuf>) -> Result<()> {
    let exporter = CatalogExporter::new(ExportConfig::resolve(output));
    let report = exporter.export(catalog).context("Export failed")?;

    println!(
        "Wrote {} entries ({} bytes) to {}",
        report.rows,
        report.bytes,
        report.path.display()
    );
    Ok(())
}

fn handle_verify(catalog: &Catalog, input: Option<PathBuf>) -> Result<()> {
    let path = ExportConfig::resolve(input).output;
    let result = verify_export(&path, catalog)
        .with_context(|| format!("Failed to verify {}", path.display()))?;

    println!("{}", result.format_cli());
    result.into_result()?;
    Ok(())
}

/// One `Uso <label>` section per non-empty route, entries numbered from 1.
fn render_list(catalog: &Catalog, route: Option<RouteType>) -> String {
    let routes: Vec<RouteType> = match route {
        Some(r) => vec![r],
        None => RouteType::ALL.to_vec(),
    };

    let mut sections = Vec::new();
    for route in routes {
        let entries: Vec<_> = catalog.by_route(route).collect();
        if entries.is_empty() {
            continue;
        }

        let mut section = format!("Uso {}\n", route.label());
        for (index, entry) in entries.iter().enumerate() {
            section.push_str(&format!("  {}. {}\n", index + 1, entry.title));
            if !entry.description.is_empty() {
                section.push_str(&format!("     {}\n", entry.description));
            }
        }
        sections.push(section);
    }
    sections.join("\n")
}

fn handle_summary(catalog: &Catalog) {
    println!("{} entries", catalog.len());
    for (route, count) in catalog.route_counts() {
        println!("  {:<20} {:<18} {count:>3}", route.label(), route.tag());
    }

    let collisions = catalog.title_collisions();
    if !collisions.is_empty() {
        println!();
        println!("Shared titles:");
        for collision in collisions {
            println!("  {}: {}", collision.title, collision.names.join(" | "));
        }
    }
}
