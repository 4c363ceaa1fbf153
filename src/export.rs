//! Catalog export to CSV.
//!
//! The table has a header row and one row per entry, columns in
//! `name,title,description,type` order, no index column. Fields are quoted
//! only when they contain a comma, a double quote or a line break; inner
//! quotes are doubled. Lines end with `\n` and text is written as UTF-8, so
//! identical input always produces identical bytes.
//!
//! Rows are first written to a temporary file next to the destination and
//! then renamed over it, so a failed export never leaves a truncated file
//! behind.

use crate::catalog::Catalog;
use crate::config::ExportConfig;
use crate::error::{CatalogError, Result};
use crate::integrity::hasher::compute_file_hash;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
    pub bytes: u64,
    pub sha256: String,
}

/// Serialize `catalog` as CSV into any writer.
///
/// # Errors
///
/// Returns error if the writer fails or an entry can't be encoded.
pub fn write_csv<W: Write>(catalog: &Catalog, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for entry in catalog {
        csv_writer.serialize(entry)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render `catalog` to an in-memory CSV buffer.
///
/// # Errors
///
/// Returns error if an entry can't be encoded.
pub fn to_csv_bytes(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(catalog, &mut buffer)?;
    Ok(buffer)
}

/// Writes a catalog to the configured output path.
#[derive(Debug, Clone)]
pub struct CatalogExporter {
    config: ExportConfig,
}

impl CatalogExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Create or overwrite the output file with `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCatalog`] for an empty catalog and
    /// [`CatalogError::Write`] naming the output path when the file can't be
    /// written (missing directory, permissions, disk full). Nothing is
    /// retried.
    pub fn export(&self, catalog: &Catalog) -> Result<ExportReport> {
        let path = self.output_path();

        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for collision in catalog.title_collisions() {
            tracing::warn!(
                title = %collision.title,
                names = ?collision.names,
                "Title shared by several entries"
            );
        }

        tracing::debug!("Writing {} entries to {}", catalog.len(), path.display());

        #[cfg_attr(not(unix), expect(unused_mut))]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        builder.permissions(target_permissions(path));
        let mut temp = builder
            .tempfile_in(parent_dir(path))
            .map_err(|source| write_error(path, source))?;

        write_csv(catalog, temp.as_file_mut()).map_err(|e| into_write_error(path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|source| write_error(path, source))?;

        // Temp file is removed on drop if the rename fails.
        temp.persist(path).map_err(|e| write_error(path, e.error))?;

        let bytes = std::fs::metadata(path)
            .map_err(|source| write_error(path, source))?
            .len();
        let sha256 = compute_file_hash(path)?;

        let report = ExportReport {
            path: path.to_path_buf(),
            rows: catalog.len(),
            bytes,
            sha256,
        };

        tracing::info!(
            rows = report.rows,
            bytes = report.bytes,
            sha256 = %report.sha256,
            "Exported catalog to {}",
            report.path.display()
        );

        Ok(report)
    }
}

/// Export `catalog` to `path` with default settings otherwise.
///
/// # Errors
///
/// See [`CatalogExporter::export`].
pub fn export_catalog(catalog: &Catalog, path: impl Into<PathBuf>) -> Result<ExportReport> {
    CatalogExporter::new(ExportConfig::with_output(path)).export(catalog)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Mode for the replacement file: the current file's, or `0o644` for a new
/// one. The process umask still applies.
#[cfg(unix)]
fn target_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt as _;

    let mode = std::fs::metadata(path).map_or(0o644, |meta| meta.permissions().mode() & 0o7777);
    std::fs::Permissions::from_mode(mode)
}

fn write_error(path: &Path, source: std::io::Error) -> CatalogError {
    CatalogError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn into_write_error(path: &Path, err: CatalogError) -> CatalogError {
    match err {
        CatalogError::Io(source) => write_error(path, source),
        other => other,
    }
}
