//! Runtime helpers shared across binaries.
//!
//! Centralizes logging setup and catalog selection so the CLI and the page
//! server subscribe to the same behavior instead of re-implementing it.

use crate::catalog::CatalogIndex;
use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "WELDSHEET_LOG";

/// Install a stderr `tracing` subscriber.
///
/// `WELDSHEET_LOG` wins when set and parseable; otherwise `default_directive`
/// applies. Calling twice is harmless.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Index the catalog file at `path`, or the built-in table when `None`.
pub fn load_index(path: Option<&Path>) -> Result<CatalogIndex> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using external catalog");
            CatalogIndex::load(path)
        }
        None => CatalogIndex::builtin(),
    }
}
