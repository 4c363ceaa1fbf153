//! Checking an exported file against the in-memory catalog.
//!
//! The file is parsed back and compared entry by entry, then its hash is
//! compared with the hash of a fresh in-memory render. Both must agree for
//! the check to pass.

use crate::catalog::{Catalog, MedicationEntry};
use crate::error::{CatalogError, Result, ResultExt as _};
use crate::export::to_csv_bytes;
use crate::import::read_catalog_from;
use crate::integrity::hasher::{HASH_ALGORITHM, hash_bytes};
use std::fs;
use std::path::Path;

/// Result of comparing an export with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub passed: bool,

    /// Human-readable message describing the result
    pub message: String,

    pub file_path: String,

    /// Data rows found in the file
    pub rows: usize,

    /// Hash of the catalog rendered in memory
    pub expected_hash: String,

    /// Hash of the file on disk
    pub actual_hash: String,

    /// Zero-based index of the first row that differs
    pub mismatch_row: Option<usize>,
}

impl VerificationResult {
    /// Format verification result for CLI display.
    pub fn format_cli(&self) -> String {
        if self.passed {
            format!(
                "✓ PASS: {}\n  \
                File: {}\n  \
                Rows: {}\n  \
                Hash: {} ({HASH_ALGORITHM})",
                self.message, self.file_path, self.rows, self.actual_hash
            )
        } else {
            let mut output = format!(
                "✗ FAIL: {}\n  \
                File: {}\n  \
                Expected: {}\n  \
                Actual:   {}",
                self.message, self.file_path, self.expected_hash, self.actual_hash
            );
            if let Some(row) = self.mismatch_row {
                output.push_str(&format!("\n  First differing row: {}", row + 1));
            }
            output
        }
    }

    /// Turn a failed check into [`CatalogError::Mismatch`].
    ///
    /// # Errors
    ///
    /// Returns error if the check did not pass.
    pub fn into_result(self) -> Result<Self> {
        if self.passed {
            Ok(self)
        } else {
            Err(CatalogError::Mismatch {
                row: self.mismatch_row.unwrap_or(self.rows),
                message: self.message,
            })
        }
    }
}

/// Compare the file at `path` with `catalog`.
///
/// Content differences produce a failing [`VerificationResult`], not an
/// error.
///
/// # Errors
///
/// Returns error if the file can't be read or isn't a well-formed catalog
/// export.
pub fn verify_export(path: &Path, catalog: &Catalog) -> Result<VerificationResult> {
    // Parse and hash the same bytes.
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read export: {}", path.display()))?;
    let entries = read_catalog_from(bytes.as_slice())?;
    let actual_hash = hash_bytes(&bytes);
    let expected_hash = hash_bytes(&to_csv_bytes(catalog)?);
    let file_path = path.display().to_string();

    let mismatch_row = first_difference(&entries, catalog.entries());
    let (passed, message) = match mismatch_row {
        Some(row) => (false, describe_difference(row, &entries, catalog.entries())),
        None if actual_hash != expected_hash => (
            false,
            "Entries match but file bytes differ (quoting or line endings)".to_owned(),
        ),
        None => (true, "Export matches catalog".to_owned()),
    };

    tracing::debug!(passed, rows = entries.len(), "Verified {file_path}");

    Ok(VerificationResult {
        passed,
        message,
        file_path,
        rows: entries.len(),
        expected_hash,
        actual_hash,
        mismatch_row,
    })
}

fn first_difference(found: &[MedicationEntry], expected: &[MedicationEntry]) -> Option<usize> {
    found
        .iter()
        .zip(expected)
        .position(|(a, b)| a != b)
        .or_else(|| (found.len() != expected.len()).then_some(found.len().min(expected.len())))
}

fn describe_difference(
    row: usize,
    found: &[MedicationEntry],
    expected: &[MedicationEntry],
) -> String {
    match (found.get(row), expected.get(row)) {
        (Some(f), Some(e)) => format!("'{}' found where '{}' was expected", f.name, e.name),
        (Some(f), None) => format!("unexpected extra entry '{}'", f.name),
        (None, Some(e)) => format!("missing entry '{}'", e.name),
        (None, None) => "row count differs".to_owned(),
    }
}
