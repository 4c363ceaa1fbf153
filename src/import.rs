//! Reading an exported catalog back into entries.
//!
//! The header must be exactly `name,title,description,type`; every row must
//! have four fields and a known route tag.

use crate::catalog::{HEADER, MedicationEntry};
use crate::error::{CatalogError, Result, ResultExt as _};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read entries from a CSV file, in file order.
///
/// # Errors
///
/// Returns error if the file can't be opened, the header is wrong, or a row
/// can't be decoded.
pub fn read_catalog(path: &Path) -> Result<Vec<MedicationEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    read_catalog_from(file)
}

/// Read entries from any CSV source.
///
/// # Errors
///
/// Returns [`CatalogError::Header`] for a missing or different header and
/// [`CatalogError::Parse`] for a malformed row.
pub fn read_catalog_from<R: Read>(reader: R) -> Result<Vec<MedicationEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(CatalogError::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    csv_reader
        .deserialize()
        .map(|row| row.map_err(CatalogError::from))
        .collect()
}
