//! Console logging for the exporter.
//!
//! Log lines go to stderr so stdout stays clean for `list` and `summary`
//! output. The level defaults to `info`; `RUST_LOG` overrides it and
//! `--verbose` forces `debug`.
//!
//! ```no_run
//! logging::init(false)?;
//! tracing::info!("Exporter started");
//! ```

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initializes the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns error if the filter can't be built or a subscriber is already set.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))
    }
    .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_line_number(verbose)
        .with_file(verbose)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::debug!("Logging initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_cleanly() {
        // Another test may have installed the subscriber already.
        let _first = init(false);
        assert!(init(true).is_err());
    }
}
