//! crates/acl/src/error.rs
//!
//! Error types for building an ACL model from getfacl output.

use std::fmt;

use thiserror::Error;

use crate::field::Attribute;

/// Result type for ACL model operations.
pub type AclResult<T> = Result<T, AclError>;

/// Which of the two ACLs carried by a report an entry belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AclScope {
    /// The ACL governing access to the file itself.
    Access,
    /// The inherited ACL a directory applies to new children.
    Default,
}

impl fmt::Display for AclScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Access => "access",
            Self::Default => "default",
        })
    }
}

/// Errors that can occur while parsing a getfacl report.
///
/// Every variant is deterministic: the same input always produces the same
/// error, and none leaves a partially built record behind.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum AclError {
    /// A permission or flag pattern failed validation.
    #[error(
        "invalid bit pattern '{value}': expected three characters, each '-' or the matching character of '{all_set}' (none set: '{none_set}')"
    )]
    InvalidBitPattern {
        /// Offending text.
        value: String,
        /// Rendering with every bit set.
        all_set: &'static str,
        /// Rendering with no bit set.
        none_set: &'static str,
    },
    /// More lines matched a field than it allows.
    #[error("field '{attribute}' matched {found} lines but allows at most {max}")]
    ExcessMatches {
        /// Field that overflowed.
        attribute: Attribute,
        /// Number of matching lines.
        found: usize,
        /// Maximum number of entries the field allows.
        max: usize,
    },
    /// A required field matched no line.
    #[error("required field '{attribute}' matched {found} lines")]
    InsufficientMatches {
        /// Missing field.
        attribute: Attribute,
        /// Number of matching lines.
        found: usize,
    },
    /// A named entry did not split into a name and a permission pattern.
    #[error("field '{attribute}' has malformed named entry '{line}': expected NAME:PERMISSIONS")]
    MalformedNamedEntry {
        /// Field the line belongs to.
        attribute: Attribute,
        /// Matched text after the field prefix.
        line: String,
    },
    /// Named entries are present but the mask that bounds them is not.
    #[error("{scope} ACL has named user or group entries but no mask entry")]
    MissingMask {
        /// ACL missing its mask.
        scope: AclScope,
    },
    /// A field value does not carry the setting kind the record expects.
    #[error("field '{attribute}' does not hold the expected kind of setting")]
    UnexpectedSetting {
        /// Field with the mismatched value.
        attribute: Attribute,
    },
    /// A named entry carries a name that cannot appear in a report line.
    #[error("invalid entry name '{name}': must be non-empty and contain no ':' or line break")]
    InvalidEntryName {
        /// Offending name.
        name: String,
    },
}

impl AclError {
    /// Returns the field the error is attributed to, if any.
    #[must_use]
    pub const fn attribute(&self) -> Option<Attribute> {
        match self {
            Self::ExcessMatches { attribute, .. }
            | Self::InsufficientMatches { attribute, .. }
            | Self::MalformedNamedEntry { attribute, .. }
            | Self::UnexpectedSetting { attribute } => Some(*attribute),
            Self::InvalidBitPattern { .. }
            | Self::MissingMask { .. }
            | Self::InvalidEntryName { .. } => None,
        }
    }
}
