#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `retrieve` runs the system `getfacl` program for a path and parses the
//! report into an [`acl::AclRecord`]. The raw report is kept alongside the
//! record in a [`GetfaclResult`].
//!
//! # Design
//!
//! - [`GetfaclCommand`] is a small builder over [`std::process::Command`];
//!   the program can be replaced, which is how tests substitute a scripted
//!   stand-in.
//! - [`getfacl`] and [`getfacl_raw`] cover the common case of the default
//!   program.
//! - [`AclPath`] bundles retrieval with [`filemode`] rendering of the path's
//!   Unix mode bits.
//!
//! # Errors
//!
//! Every operation returns [`RetrieveError`]. A program that cannot be
//! started, or that exits unsuccessfully, is distinguished from a report the
//! parser rejects ([`RetrieveError::is_parse`]).
//!
//! # Examples
//!
//! ```no_run
//! let result = retrieve::getfacl("/srv/share")?;
//! println!("{}", result.record().owning_user());
//! # Ok::<(), retrieve::RetrieveError>(())
//! ```

mod command;
mod debug_cmd;
mod error;
mod mode;
mod path;
mod result;

pub use crate::command::{
    DEFAULT_PROGRAM, END_OF_OPTIONS, GetfaclCommand, NO_EFFECTIVE_FLAG, getfacl, getfacl_raw,
};
pub use crate::error::{RetrieveError, RetrieveResult};
pub use crate::mode::filemode;
pub use crate::path::AclPath;
pub use crate::result::GetfaclResult;
