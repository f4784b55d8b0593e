//! Tracing subscriber setup.
//!
//! Library crates only emit events; the binary installs the subscriber.

use istsim_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used.
///
/// # Errors
///
/// Returns a `Config` error for an unparsable filter, or `Internal` if a
/// global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| Error::config(format!("log filter {default_filter:?}: {e}")))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}
