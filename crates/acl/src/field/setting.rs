//! Value constructors applied to matched report text.

use crate::entry::NamedEntry;
use crate::error::{AclError, AclResult};
use crate::triad::{FlagTriad, PermissionTriad};

use super::Attribute;

/// Separator between the name and the permission pattern of a named entry.
pub const NAMED_ENTRY_SEPARATOR: char = ':';

/// Constructor a field applies to each matched line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingKind {
    /// Keep the matched text verbatim.
    Text,
    /// Parse a `rwx` permission pattern.
    Permissions,
    /// Parse an `sst` flag pattern.
    Flags,
    /// Split `NAME:PERMS` and parse the permission pattern.
    NamedPermissions,
}

impl SettingKind {
    /// Converts one matched line for `attribute` into a typed [`Setting`].
    pub fn convert(self, attribute: Attribute, text: &str) -> AclResult<Setting> {
        match self {
            Self::Text => Ok(Setting::Text(text.to_owned())),
            Self::Permissions => PermissionTriad::parse(text).map(Setting::Permissions),
            Self::Flags => FlagTriad::parse(text).map(Setting::Flags),
            Self::NamedPermissions => parse_named_entry(attribute, text).map(Setting::Named),
        }
    }
}

/// Typed value produced from one matched report line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Setting {
    /// Plain text such as an owner name.
    Text(String),
    /// Permission triad.
    Permissions(PermissionTriad),
    /// Special-bit triad.
    Flags(FlagTriad),
    /// Named user or group grant.
    Named(NamedEntry),
}

fn parse_named_entry(attribute: Attribute, text: &str) -> AclResult<NamedEntry> {
    let malformed = || AclError::MalformedNamedEntry {
        attribute,
        line: text.to_owned(),
    };

    let mut parts = text.split(NAMED_ENTRY_SEPARATOR);
    let (Some(name), Some(permissions), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    if name.is_empty() {
        return Err(malformed());
    }

    let permissions = PermissionTriad::parse(permissions)?;
    NamedEntry::new(name, permissions)
}
