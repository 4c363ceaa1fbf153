//! # meds-catalog
//!
//! A fixed, hand-authored catalog of medications and its CSV export.
//!
//! ## Quick Start
//!
//! ```no_run
//! use meds_catalog::catalog::Catalog;
//! use meds_catalog::export::export_catalog;
//!
//! # fn example() -> meds_catalog::error::Result<()> {
//! let report = export_catalog(&Catalog::builtin(), "./meds.csv")?;
//! println!("{} rows, sha256 {}", report.rows, report.sha256);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: entry types, route categories and the built-in list
//! - [`export`]: CSV serialization and the atomic file writer
//! - [`import`]: reading an export back into entries
//! - [`integrity`]: file hashing and export verification
//! - [`config`]: output path resolution
//! - [`error`]: error type and result helpers
//!
//! ## Output format
//!
//! ```text
//! name,title,description,type
//! Lactulose 667mg/mL,Lactulose 667mg/mL - 1 frasco,"Tomar 5mL 1x ao dia pela manhã ou à noite, todos os dias.",oral
//! ...
//! Espaçador,Espaçador - 1 unidade,,inhalational
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod integrity;
