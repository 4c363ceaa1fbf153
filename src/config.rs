//! Export settings.
//!
//! The only setting is the output path. The command line takes it from
//! `--output`/`--input` or the `MEDS_CSV_PATH` environment variable (clap
//! reads both, the flag wins); without either the exporter uses
//! [`DEFAULT_OUTPUT_PATH`].

use std::path::PathBuf;

/// Where the catalog is written when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "./meds.csv";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "MEDS_CSV_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExportConfig {
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Use `path` if one was given, [`DEFAULT_OUTPUT_PATH`] otherwise.
    pub fn resolve(path: Option<PathBuf>) -> Self {
        path.map_or_else(Self::default, Self::with_output)
    }
}
