//! crates/acl/src/field/mod.rs
//!
//! Declarative description of every line-shape a getfacl report can contain.
//!
//! The registry is plain data: one [`FieldSpec`] per line-shape naming the
//! destination [`Attribute`], the anchored [`LineRule`] that selects its lines,
//! whether the field is required, how many entries it may hold, and the
//! [`SettingKind`] constructor applied to each matched line. The extraction
//! engine recognises nothing the registry does not describe, so the table must
//! stay in sync with the report grammar:
//!
//! ```text
//! # owner: NAME              # group: NAME             # flags: sst
//! user::rwx                  user:NAME:rwx             group::rwx
//! group:NAME:rwx             mask::rwx                 other::rwx
//! default:user::rwx          default:user:NAME:rwx     default:group::rwx
//! default:group:NAME:rwx     default:mask::rwx         default:other::rwx
//! ```

mod rule;
mod setting;

use std::fmt;

pub use rule::LineRule;
pub use setting::{NAMED_ENTRY_SEPARATOR, Setting, SettingKind};

use crate::error::{AclError, AclResult};

/// Destination attribute of a report field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// `# owner:`
    OwningUser,
    /// `# group:`
    OwningGroup,
    /// `# flags:`
    Flags,
    /// `user::`
    UserPermissions,
    /// `group::`
    GroupPermissions,
    /// `other::`
    OtherPermissions,
    /// `mask::`
    Mask,
    /// `default:user::`
    DefaultUserPermissions,
    /// `default:group::`
    DefaultGroupPermissions,
    /// `default:other::`
    DefaultOtherPermissions,
    /// `user:NAME:`
    SpecialUsersPermissions,
    /// `group:NAME:`
    SpecialGroupsPermissions,
    /// `default:mask::`
    DefaultMask,
    /// `default:user:NAME:`
    DefaultSpecialUsersPermissions,
    /// `default:group:NAME:`
    DefaultSpecialGroupsPermissions,
}

impl Attribute {
    /// Returns the snake-case attribute name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwningUser => "owning_user",
            Self::OwningGroup => "owning_group",
            Self::Flags => "flags",
            Self::UserPermissions => "user_permissions",
            Self::GroupPermissions => "group_permissions",
            Self::OtherPermissions => "other_permissions",
            Self::Mask => "mask",
            Self::DefaultUserPermissions => "default_user_permissions",
            Self::DefaultGroupPermissions => "default_group_permissions",
            Self::DefaultOtherPermissions => "default_other_permissions",
            Self::SpecialUsersPermissions => "special_users_permissions",
            Self::SpecialGroupsPermissions => "special_groups_permissions",
            Self::DefaultMask => "default_mask",
            Self::DefaultSpecialUsersPermissions => "default_special_users_permissions",
            Self::DefaultSpecialGroupsPermissions => "default_special_groups_permissions",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specification of one piece of information carried by a getfacl report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    /// Destination attribute.
    pub attribute: Attribute,
    /// Rule selecting the field's lines.
    pub rule: LineRule,
    /// Whether at least one line must match.
    pub required: bool,
    /// Upper bound on matching lines; `None` is unbounded.
    pub max_entries: Option<usize>,
    /// Constructor applied to each matched line.
    pub setting: SettingKind,
}

impl FieldSpec {
    const fn singular(
        attribute: Attribute,
        prefix: &'static str,
        required: bool,
        setting: SettingKind,
    ) -> Self {
        Self {
            attribute,
            rule: LineRule::Value { prefix },
            required,
            max_entries: Some(1),
            setting,
        }
    }

    const fn named(attribute: Attribute, prefix: &'static str) -> Self {
        Self {
            attribute,
            rule: LineRule::Named { prefix },
            required: false,
            max_entries: None,
            setting: SettingKind::NamedPermissions,
        }
    }

    /// Returns `true` when the field holds at most one value.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(self.max_entries, Some(1))
    }

    /// Checks the number of matched lines against the field's bounds.
    pub fn validate_matches(&self, found: usize) -> AclResult<()> {
        if let Some(max) = self.max_entries {
            if found > max {
                return Err(AclError::ExcessMatches {
                    attribute: self.attribute,
                    found,
                    max,
                });
            }
        }

        if self.required && found < 1 {
            return Err(AclError::InsufficientMatches {
                attribute: self.attribute,
                found,
            });
        }

        Ok(())
    }
}

static FIELD_SPECS: [FieldSpec; 15] = [
    FieldSpec::singular(Attribute::OwningUser, "# owner:", true, SettingKind::Text),
    FieldSpec::singular(Attribute::OwningGroup, "# group:", true, SettingKind::Text),
    FieldSpec::singular(Attribute::Flags, "# flags:", false, SettingKind::Flags),
    FieldSpec::singular(
        Attribute::UserPermissions,
        "user::",
        true,
        SettingKind::Permissions,
    ),
    FieldSpec::singular(
        Attribute::GroupPermissions,
        "group::",
        true,
        SettingKind::Permissions,
    ),
    FieldSpec::singular(
        Attribute::OtherPermissions,
        "other::",
        true,
        SettingKind::Permissions,
    ),
    FieldSpec::singular(Attribute::Mask, "mask::", false, SettingKind::Permissions),
    FieldSpec::singular(
        Attribute::DefaultUserPermissions,
        "default:user::",
        false,
        SettingKind::Permissions,
    ),
    FieldSpec::singular(
        Attribute::DefaultGroupPermissions,
        "default:group::",
        false,
        SettingKind::Permissions,
    ),
    FieldSpec::singular(
        Attribute::DefaultOtherPermissions,
        "default:other::",
        false,
        SettingKind::Permissions,
    ),
    FieldSpec::named(Attribute::SpecialUsersPermissions, "user:"),
    FieldSpec::named(Attribute::SpecialGroupsPermissions, "group:"),
    FieldSpec::singular(
        Attribute::DefaultMask,
        "default:mask::",
        false,
        SettingKind::Permissions,
    ),
    FieldSpec::named(Attribute::DefaultSpecialUsersPermissions, "default:user:"),
    FieldSpec::named(Attribute::DefaultSpecialGroupsPermissions, "default:group:"),
];

/// Returns the registry of every field a getfacl report can carry.
#[must_use]
pub fn field_specs() -> &'static [FieldSpec] {
    &FIELD_SPECS
}

/// Looks up the registry entry for `attribute`.
#[must_use]
pub fn field_spec(attribute: Attribute) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.attribute == attribute)
}
