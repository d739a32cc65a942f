//! Effective permissions derived from an [`AclRecord`](crate::AclRecord).
//!
//! The mask bounds every named-user and named-group entry and the owning
//! group; the owning user and other entries pass through unchanged. When the
//! relevant mask is absent the maskable values are absent too: nothing is
//! assumed about what an unmasked ACL would grant.

use crate::entry::{NamedEntry, find_entry};
use crate::triad::{PermissionTriad, effective};

/// Effective permissions of one ACL (access or default).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveAcl {
    user: Option<PermissionTriad>,
    group: Option<PermissionTriad>,
    other: Option<PermissionTriad>,
    named_users: Option<Vec<NamedEntry>>,
    named_groups: Option<Vec<NamedEntry>>,
}

impl EffectiveAcl {
    pub(crate) fn compute(
        user: Option<PermissionTriad>,
        group: Option<PermissionTriad>,
        other: Option<PermissionTriad>,
        mask: Option<PermissionTriad>,
        named_users: Option<&[NamedEntry]>,
        named_groups: Option<&[NamedEntry]>,
    ) -> Self {
        Self {
            user,
            group: mask.zip(group).map(|(mask, group)| effective(group, mask)),
            other,
            named_users: mask_entries(named_users, mask),
            named_groups: mask_entries(named_groups, mask),
        }
    }

    /// Owning-user permissions (never masked).
    #[must_use]
    pub const fn user(&self) -> Option<PermissionTriad> {
        self.user
    }

    /// Owning-group permissions after masking.
    #[must_use]
    pub const fn group(&self) -> Option<PermissionTriad> {
        self.group
    }

    /// Permissions for everyone else (never masked).
    #[must_use]
    pub const fn other(&self) -> Option<PermissionTriad> {
        self.other
    }

    /// Named-user permissions after masking, in report order.
    #[must_use]
    pub fn named_users(&self) -> Option<&[NamedEntry]> {
        self.named_users.as_deref()
    }

    /// Named-group permissions after masking, in report order.
    #[must_use]
    pub fn named_groups(&self) -> Option<&[NamedEntry]> {
        self.named_groups.as_deref()
    }

    /// Effective permissions of a named user.
    #[must_use]
    pub fn named_user(&self, name: &str) -> Option<PermissionTriad> {
        find_entry(self.named_users()?, name).map(NamedEntry::permissions)
    }

    /// Effective permissions of a named group.
    #[must_use]
    pub fn named_group(&self, name: &str) -> Option<PermissionTriad> {
        find_entry(self.named_groups()?, name).map(NamedEntry::permissions)
    }
}

fn mask_entries(
    entries: Option<&[NamedEntry]>,
    mask: Option<PermissionTriad>,
) -> Option<Vec<NamedEntry>> {
    let mask = mask?;
    entries.map(|entries| entries.iter().map(|entry| entry.masked_by(mask)).collect())
}

/// Effective permissions for both ACLs of a record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivePermissions {
    access: EffectiveAcl,
    default: EffectiveAcl,
}

impl EffectivePermissions {
    pub(crate) const fn new(access: EffectiveAcl, default: EffectiveAcl) -> Self {
        Self { access, default }
    }

    /// Effective permissions of the access ACL.
    #[must_use]
    pub const fn access(&self) -> &EffectiveAcl {
        &self.access
    }

    /// Effective permissions of the default ACL.
    #[must_use]
    pub const fn default_acl(&self) -> &EffectiveAcl {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triad(text: &str) -> PermissionTriad {
        PermissionTriad::parse(text).unwrap()
    }

    #[test]
    fn user_and_other_pass_through() {
        let acl = EffectiveAcl::compute(
            Some(triad("rwx")),
            Some(triad("rwx")),
            Some(triad("rw-")),
            Some(triad("---")),
            None,
            None,
        );
        assert_eq!(acl.user(), Some(triad("rwx")));
        assert_eq!(acl.other(), Some(triad("rw-")));
        assert_eq!(acl.group(), Some(triad("---")));
    }

    #[test]
    fn absent_mask_yields_absent_maskable_values() {
        let entries = [NamedEntry::new("bob", triad("rwx")).unwrap()];
        let acl = EffectiveAcl::compute(
            Some(triad("rwx")),
            Some(triad("r-x")),
            Some(triad("r--")),
            None,
            Some(&entries[..]),
            None,
        );
        assert_eq!(acl.group(), None);
        assert_eq!(acl.named_users(), None);
        assert_eq!(acl.named_user("bob"), None);
        assert_eq!(acl.user(), Some(triad("rwx")));
    }

    #[test]
    fn named_entries_are_masked_in_order() {
        let entries = [
            NamedEntry::new("alice", triad("rwx")).unwrap(),
            NamedEntry::new("bob", triad("-w-")).unwrap(),
        ];
        let acl = EffectiveAcl::compute(
            None,
            None,
            None,
            Some(triad("r-x")),
            Some(&entries[..]),
            None,
        );
        let masked: Vec<_> = acl
            .named_users()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(masked, ["alice:r-x", "bob:---"]);
        assert_eq!(acl.named_groups(), None);
    }

    #[test]
    fn empty_default_acl_is_all_absent() {
        let acl = EffectiveAcl::compute(None, None, None, None, None, None);
        assert_eq!(acl, EffectiveAcl::default());
    }
}
