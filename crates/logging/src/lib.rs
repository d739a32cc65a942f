#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `logging` turns the `facl` command line's `-v` count and `--debug` flags
//! into a [`VerbosityConfig`], and (with the `tracing` feature) installs a
//! `tracing` subscriber that honours it.
//!
//! # Design
//!
//! Library crates emit events under fixed targets, one per [`DebugFlag`]:
//! `facl::parse`, `facl::field` and `facl::cmd`. The configuration maps each
//! flag's level onto a filter directive for its target, so enabling a flag
//! never needs cooperation from the crate that emits the events.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flags("parse,field2").unwrap();
//! assert_eq!(config.debug.get(DebugFlag::Field), 2);
//! assert_eq!(
//!     config.filter_directives(),
//!     "info,facl::parse=debug,facl::field=trace,facl::cmd=debug"
//! );
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{FILTER_ENV, build_filter, filter_from_env, init_tracing};
