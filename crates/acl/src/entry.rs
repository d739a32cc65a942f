//! Named user and group grants.

use std::fmt;

use crate::error::{AclError, AclResult};
use crate::field::NAMED_ENTRY_SEPARATOR;
use crate::triad::{PermissionTriad, effective};

/// Permission grant to a specific named user or group.
///
/// The name is an opaque token copied verbatim from the report; numeric ids
/// (as printed by `getfacl -n`) are kept as text. It is never empty and never
/// contains the `:` separator or a line break.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawNamedEntry"))]
pub struct NamedEntry {
    name: String,
    permissions: PermissionTriad,
}

impl NamedEntry {
    /// Creates a named grant.
    ///
    /// Fails with [`AclError::InvalidEntryName`] when `name` could not be
    /// written back as a report line.
    pub fn new(name: impl Into<String>, permissions: PermissionTriad) -> AclResult<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(AclError::InvalidEntryName { name });
        }
        Ok(Self { name, permissions })
    }

    /// Returns the user or group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the granted permissions.
    #[must_use]
    pub const fn permissions(&self) -> PermissionTriad {
        self.permissions
    }

    /// Returns a copy of the entry with its permissions intersected with `mask`.
    #[must_use]
    pub fn masked_by(&self, mask: PermissionTriad) -> Self {
        Self {
            name: self.name.clone(),
            permissions: effective(self.permissions, mask),
        }
    }
}

impl fmt::Display for NamedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAMED_ENTRY_SEPARATOR}{}", self.name, self.permissions)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([NAMED_ENTRY_SEPARATOR, '\n', '\r'])
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNamedEntry {
    name: String,
    permissions: PermissionTriad,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNamedEntry> for NamedEntry {
    type Error = AclError;

    fn try_from(raw: RawNamedEntry) -> AclResult<Self> {
        Self::new(raw.name, raw.permissions)
    }
}

/// Finds the entry for `name` in an ordered entry list.
#[must_use]
pub fn find_entry<'a>(entries: &'a [NamedEntry], name: &str) -> Option<&'a NamedEntry> {
    entries.iter().find(|entry| entry.name == name)
}
