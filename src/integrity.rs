//! Export integrity checks.
//!
//! - [`hasher`]: streaming SHA-256 of a written file
//! - [`verifier`]: parse an export back and compare it with the catalog
//!
//! The hash is sensitive to every byte, so converting line endings or
//! re-quoting fields in a spreadsheet makes verification fail even when the
//! entries themselves are unchanged.

pub mod hasher;
pub mod verifier;

pub use hasher::compute_file_hash;
pub use verifier::{VerificationResult, verify_export};
