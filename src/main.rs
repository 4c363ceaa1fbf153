//! # meds-catalog
//!
//! Writes the built-in medication catalog to `./meds.csv`:
//!
//! ```bash
//! meds-catalog                       # same as `meds-catalog export`
//! meds-catalog export -o out/meds.csv
//! meds-catalog verify -i out/meds.csv
//! MEDS_CSV_PATH=out/meds.csv meds-catalog verify
//! meds-catalog list --route nasal
//! meds-catalog summary
//! ```
//!
//! Any failure is returned from `main`, so the process prints the error
//! chain and exits with a non-zero status.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // list/summary/verify print to stdout

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose)?;

    let command = match cli.command {
        Some(command) => command,
        None => cli::Commands::default_export()?,
    };
    cli::run_command(command)
}
