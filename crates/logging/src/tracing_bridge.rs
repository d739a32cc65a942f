//! crates/logging/src/tracing_bridge.rs
//! Installation of the process-wide tracing subscriber.
//!
//! The subscriber is a registry with two layers: an [`EnvFilter`] built from
//! the [`VerbosityConfig`] (replaced wholesale by `RUST_LOG` when that
//! variable is set) and a formatting layer writing to standard error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("field2")?;
//! init_tracing(&config)?;
//!
//! tracing::debug!(target: "facl::cmd", "spawning getfacl");
//! ```

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::VerbosityConfig;

/// Environment variable that overrides the configured filter.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Builds the filter for `config`, ignoring the environment.
pub fn build_filter(config: &VerbosityConfig) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(config.filter_directives())
}

/// Builds the filter from `RUST_LOG` when it is set and valid, falling back
/// to [`build_filter`].
pub fn filter_from_env(config: &VerbosityConfig) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_env(FILTER_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => build_filter(config),
    }
}

/// Installs the global subscriber for `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &VerbosityConfig) -> Result<(), TryInitError> {
    let filter = filter_from_env(config).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
}
