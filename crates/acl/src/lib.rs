#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `acl` turns the text printed by POSIX `getfacl` into a validated,
//! strongly-typed [`AclRecord`] and derives the effective permissions that
//! apply once the ACL mask is intersected with each maskable grant.
//!
//! # Design
//!
//! Parsing is split into three layers:
//!
//! - [`field`] holds the registry: an ordered table of plain [`FieldSpec`]
//!   records, one per line-shape of the report.
//! - [`extract`] applies the registry to the raw text, enforces each field's
//!   cardinality, and yields cardinality-tagged [`FieldValue`]s.
//! - [`AclRecord::from_fields`] assembles the record and checks that named
//!   entries are bounded by a mask.
//!
//! Permission and flag patterns share one generic [`BitPattern`] type; the two
//! flavours differ only in their reference patterns.
//!
//! # Invariants
//!
//! - Construction is all-or-nothing; errors never leave a partial record.
//! - An absent optional field is `None`, never an implied `---` pattern.
//! - Named entries keep report order.
//! - [`AclRecord`] is immutable and `Send + Sync`.
//!
//! # Examples
//!
//! ```
//! use acl::AclRecord;
//!
//! let report = "\
//! ## file: srv/share
//! ## owner: alice
//! ## group: devs
//! user::rwx
//! user:bob:rwx
//! group::r-x
//! mask::r-x
//! other::r-x
//! ";
//!
//! let record = AclRecord::from_report_text(report)?;
//! let effective = record.effective_permissions();
//! assert_eq!(effective.access().named_user("bob").unwrap().to_string(), "r-x");
//! # Ok::<(), acl::AclError>(())
//! ```

mod debug_parse;
mod effective;
mod entry;
mod error;
pub mod extract;
pub mod field;
mod record;
mod triad;

pub use crate::effective::{EffectiveAcl, EffectivePermissions};
pub use crate::entry::{NamedEntry, find_entry};
pub use crate::error::{AclError, AclResult, AclScope};
pub use crate::extract::{ExtractedFields, FieldValue, extract};
pub use crate::field::{Attribute, FieldSpec, LineRule, Setting, SettingKind, field_spec, field_specs};
pub use crate::record::{AclRecord, DefaultAcl};
pub use crate::triad::{
    BitPattern, FlagBits, FlagTriad, INACTIVE_MARKER, PATTERN_WIDTH, PatternKind, PermissionBits,
    PermissionTriad, effective,
};
