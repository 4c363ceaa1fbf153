//! Centralized error handling for the catalog exporter.
//!
//! Library code returns [`CatalogError`] through the [`Result`] alias. The
//! binary wraps it in `anyhow` at the edge, so any failure ends the process
//! with a non-zero status and a message naming what failed.
//!
//! ```no_run
//! use meds_catalog::error::{CatalogError, Result};
//! use std::fs;
//!
//! fn read_export(path: &str) -> Result<String> {
//!     // std::io::Error converts to CatalogError::Io via From
//!     let content = fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! The [`ResultExt`] trait adds `.context()` to any result whose error
//! converts into [`CatalogError`].

use std::fmt;
use std::path::PathBuf;

/// Main error type for catalog operations.
#[derive(Debug)]
pub enum CatalogError {
    /// The output file could not be written (permissions, missing
    /// directory, disk full).
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Any other I/O error
    Io(std::io::Error),

    /// CSV encoding or decoding error not caused by I/O
    Csv(String),

    /// The header row of an exported file is not `name,title,description,type`
    Header { found: String },

    /// A data row could not be decoded into an entry
    Parse { line: u64, message: String },

    /// An exported file does not match the in-memory catalog
    Mismatch { row: usize, message: String },

    /// Export was asked to write a catalog with no entries
    EmptyCatalog,

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Header { found } => write!(
                f,
                "Unexpected header '{found}', expected '{}'",
                crate::catalog::HEADER.join(",")
            ),
            Self::Parse { line, message } => write!(f, "Invalid row at line {line}: {message}"),
            Self::Mismatch { row, message } => {
                write!(f, "Export does not match catalog at row {row}: {message}")
            }
            Self::EmptyCatalog => write!(f, "Refusing to export an empty catalog"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            csv::ErrorKind::Deserialize { pos, err } => Self::Parse {
                line: pos.map(|p| p.line()).or(line).unwrap_or_default(),
                message: err.to_string(),
            },
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Self::Parse {
                line: pos.map(|p| p.line()).or(line).unwrap_or_default(),
                message: format!("expected {expected_len} fields, found {len}"),
            },
            other => Self::Csv(format!("{other:?}")),
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CatalogError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_write_error_names_path() {
        let err = CatalogError::Write {
            path: PathBuf::from("/no/such/dir/meds.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/meds.csv"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_header_error_display() {
        let err = CatalogError::Header {
            found: "a,b".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected header 'a,b', expected 'name,title,description,type'"
        );
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "meds.csv",
        ));

        let result: Result<()> = result.context("Failed to read export");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Failed to read export: I/O error")
        );
    }
}
