//! crates/acl/src/record.rs
//!
//! The assembled ACL record.
//!
//! [`AclRecord`] is built once from a single getfacl report and is immutable
//! afterwards. Construction is all-or-nothing: any extraction error, or a
//! named entry without the mask that bounds it, is returned to the caller and
//! no partial record exists.

use std::fmt;

use crate::debug_parse::trace_record_built;
use crate::effective::{EffectiveAcl, EffectivePermissions};
use crate::entry::{NamedEntry, find_entry};
use crate::error::{AclError, AclResult, AclScope};
use crate::extract::{ExtractedFields, extract};
use crate::field::{Attribute, field_specs};
use crate::triad::{FlagTriad, PermissionTriad};

/// Inherited ACL a directory applies to new children.
///
/// Every part may be absent independently; a plain file carries an entirely
/// empty default ACL.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDefaultAcl"))]
pub struct DefaultAcl {
    user: Option<PermissionTriad>,
    group: Option<PermissionTriad>,
    other: Option<PermissionTriad>,
    mask: Option<PermissionTriad>,
    named_users: Option<Vec<NamedEntry>>,
    named_groups: Option<Vec<NamedEntry>>,
}

impl DefaultAcl {
    /// Owning-user permissions granted to new children.
    #[must_use]
    pub const fn user(&self) -> Option<PermissionTriad> {
        self.user
    }

    /// Owning-group permissions granted to new children.
    #[must_use]
    pub const fn group(&self) -> Option<PermissionTriad> {
        self.group
    }

    /// Permissions for everyone else.
    #[must_use]
    pub const fn other(&self) -> Option<PermissionTriad> {
        self.other
    }

    /// Mask bounding named entries and the owning group.
    #[must_use]
    pub const fn mask(&self) -> Option<PermissionTriad> {
        self.mask
    }

    /// Named-user grants in report order.
    #[must_use]
    pub fn named_users(&self) -> Option<&[NamedEntry]> {
        self.named_users.as_deref()
    }

    /// Named-group grants in report order.
    #[must_use]
    pub fn named_groups(&self) -> Option<&[NamedEntry]> {
        self.named_groups.as_deref()
    }

    fn validate_mask(&self) -> AclResult<()> {
        check_mask(
            AclScope::Default,
            self.mask,
            self.named_users.as_deref(),
            self.named_groups.as_deref(),
        )
    }

    /// Returns `true` when the report carried no `default:` line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.group.is_none()
            && self.other.is_none()
            && self.mask.is_none()
            && self.named_users.is_none()
            && self.named_groups.is_none()
    }
}

/// Typed model of one getfacl report.
///
/// Deserializing a record (with the `serde` feature) applies the same mask
/// checks as parsing a report.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAclRecord"))]
pub struct AclRecord {
    owning_user: String,
    owning_group: String,
    flags: Option<FlagTriad>,
    user: PermissionTriad,
    group: PermissionTriad,
    other: PermissionTriad,
    mask: Option<PermissionTriad>,
    named_users: Option<Vec<NamedEntry>>,
    named_groups: Option<Vec<NamedEntry>>,
    default: DefaultAcl,
}

impl AclRecord {
    /// Parses the text printed by `getfacl`.
    ///
    /// # Examples
    ///
    /// ```
    /// use acl::AclRecord;
    ///
    /// let record = AclRecord::from_report_text(
    ///     "# owner: alice\n# group: devs\nuser::rwx\ngroup::r-x\nother::r--\n",
    /// )?;
    /// assert_eq!(record.owning_user(), "alice");
    /// assert_eq!(record.other().to_string(), "r--");
    /// assert!(record.named_users().is_none());
    /// # Ok::<(), acl::AclError>(())
    /// ```
    pub fn from_report_text(text: &str) -> AclResult<Self> {
        let fields = extract(text, field_specs())?;
        Self::from_fields(fields)
    }

    /// Assembles a record from extracted field values.
    ///
    /// Required fields missing from `fields` are reported as
    /// [`AclError::InsufficientMatches`]; values of the wrong kind as
    /// [`AclError::UnexpectedSetting`].
    pub fn from_fields(mut fields: ExtractedFields) -> AclResult<Self> {
        let default = DefaultAcl {
            user: fields.take_permissions(Attribute::DefaultUserPermissions)?,
            group: fields.take_permissions(Attribute::DefaultGroupPermissions)?,
            other: fields.take_permissions(Attribute::DefaultOtherPermissions)?,
            mask: fields.take_permissions(Attribute::DefaultMask)?,
            named_users: fields.take_named(Attribute::DefaultSpecialUsersPermissions)?,
            named_groups: fields.take_named(Attribute::DefaultSpecialGroupsPermissions)?,
        };

        let record = Self {
            owning_user: required(
                Attribute::OwningUser,
                fields.take_text(Attribute::OwningUser)?,
            )?,
            owning_group: required(
                Attribute::OwningGroup,
                fields.take_text(Attribute::OwningGroup)?,
            )?,
            flags: fields.take_flags(Attribute::Flags)?,
            user: required(
                Attribute::UserPermissions,
                fields.take_permissions(Attribute::UserPermissions)?,
            )?,
            group: required(
                Attribute::GroupPermissions,
                fields.take_permissions(Attribute::GroupPermissions)?,
            )?,
            other: required(
                Attribute::OtherPermissions,
                fields.take_permissions(Attribute::OtherPermissions)?,
            )?,
            mask: fields.take_permissions(Attribute::Mask)?,
            named_users: fields.take_named(Attribute::SpecialUsersPermissions)?,
            named_groups: fields.take_named(Attribute::SpecialGroupsPermissions)?,
            default,
        };

        record.validate_masks()?;
        trace_record_built(
            &record.owning_user,
            record.named_users.as_ref().map_or(0, Vec::len),
            record.named_groups.as_ref().map_or(0, Vec::len),
            !record.default.is_empty(),
        );
        Ok(record)
    }

    fn validate_masks(&self) -> AclResult<()> {
        check_mask(
            AclScope::Access,
            self.mask,
            self.named_users.as_deref(),
            self.named_groups.as_deref(),
        )?;
        self.default.validate_mask()
    }

    /// Name of the owning user.
    #[must_use]
    pub fn owning_user(&self) -> &str {
        &self.owning_user
    }

    /// Name of the owning group.
    #[must_use]
    pub fn owning_group(&self) -> &str {
        &self.owning_group
    }

    /// Setuid/setgid/sticky bits, present only when any is set.
    #[must_use]
    pub const fn flags(&self) -> Option<FlagTriad> {
        self.flags
    }

    /// Owning-user permissions.
    #[must_use]
    pub const fn user(&self) -> PermissionTriad {
        self.user
    }

    /// Owning-group permissions as granted (before masking).
    #[must_use]
    pub const fn group(&self) -> PermissionTriad {
        self.group
    }

    /// Permissions for everyone else.
    #[must_use]
    pub const fn other(&self) -> PermissionTriad {
        self.other
    }

    /// Mask bounding named entries and the owning group.
    #[must_use]
    pub const fn mask(&self) -> Option<PermissionTriad> {
        self.mask
    }

    /// Named-user grants in report order.
    #[must_use]
    pub fn named_users(&self) -> Option<&[NamedEntry]> {
        self.named_users.as_deref()
    }

    /// Named-group grants in report order.
    #[must_use]
    pub fn named_groups(&self) -> Option<&[NamedEntry]> {
        self.named_groups.as_deref()
    }

    /// Looks up the grant for a named user.
    #[must_use]
    pub fn named_user(&self, name: &str) -> Option<&NamedEntry> {
        find_entry(self.named_users()?, name)
    }

    /// Looks up the grant for a named group.
    #[must_use]
    pub fn named_group(&self, name: &str) -> Option<&NamedEntry> {
        find_entry(self.named_groups()?, name)
    }

    /// Inherited ACL for new children.
    #[must_use]
    pub const fn default_acl(&self) -> &DefaultAcl {
        &self.default
    }

    /// Returns `true` when the access ACL carries more than the three base
    /// entries.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.mask.is_some() || self.named_users.is_some() || self.named_groups.is_some()
    }

    /// Computes the permissions that apply once each maskable entry is
    /// intersected with its mask.
    #[must_use]
    pub fn effective_permissions(&self) -> EffectivePermissions {
        EffectivePermissions::new(
            EffectiveAcl::compute(
                Some(self.user),
                Some(self.group),
                Some(self.other),
                self.mask,
                self.named_users(),
                self.named_groups(),
            ),
            EffectiveAcl::compute(
                self.default.user,
                self.default.group,
                self.default.other,
                self.default.mask,
                self.default.named_users(),
                self.default.named_groups(),
            ),
        )
    }
}

fn check_mask(
    scope: AclScope,
    mask: Option<PermissionTriad>,
    named_users: Option<&[NamedEntry]>,
    named_groups: Option<&[NamedEntry]>,
) -> AclResult<()> {
    if (named_users.is_some() || named_groups.is_some()) && mask.is_none() {
        return Err(AclError::MissingMask { scope });
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDefaultAcl {
    user: Option<PermissionTriad>,
    group: Option<PermissionTriad>,
    other: Option<PermissionTriad>,
    mask: Option<PermissionTriad>,
    named_users: Option<Vec<NamedEntry>>,
    named_groups: Option<Vec<NamedEntry>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDefaultAcl> for DefaultAcl {
    type Error = AclError;

    fn try_from(raw: RawDefaultAcl) -> AclResult<Self> {
        let default = Self {
            user: raw.user,
            group: raw.group,
            other: raw.other,
            mask: raw.mask,
            named_users: raw.named_users,
            named_groups: raw.named_groups,
        };
        default.validate_mask()?;
        Ok(default)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAclRecord {
    owning_user: String,
    owning_group: String,
    flags: Option<FlagTriad>,
    user: PermissionTriad,
    group: PermissionTriad,
    other: PermissionTriad,
    mask: Option<PermissionTriad>,
    named_users: Option<Vec<NamedEntry>>,
    named_groups: Option<Vec<NamedEntry>>,
    #[serde(default)]
    default: DefaultAcl,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAclRecord> for AclRecord {
    type Error = AclError;

    fn try_from(raw: RawAclRecord) -> AclResult<Self> {
        let record = Self {
            owning_user: raw.owning_user,
            owning_group: raw.owning_group,
            flags: raw.flags,
            user: raw.user,
            group: raw.group,
            other: raw.other,
            mask: raw.mask,
            named_users: raw.named_users,
            named_groups: raw.named_groups,
            default: raw.default,
        };
        record.validate_masks()?;
        Ok(record)
    }
}

fn required<T>(attribute: Attribute, value: Option<T>) -> AclResult<T> {
    value.ok_or(AclError::InsufficientMatches {
        attribute,
        found: 0,
    })
}

/// Renders the record in getfacl's text format (without the `# file:` line).
impl fmt::Display for AclRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# owner: {}", self.owning_user)?;
        writeln!(f, "# group: {}", self.owning_group)?;
        if let Some(flags) = self.flags {
            writeln!(f, "# flags: {flags}")?;
        }

        writeln!(f, "user::{}", self.user)?;
        write_named(f, "user:", self.named_users())?;
        writeln!(f, "group::{}", self.group)?;
        write_named(f, "group:", self.named_groups())?;
        if let Some(mask) = self.mask {
            writeln!(f, "mask::{mask}")?;
        }
        writeln!(f, "other::{}", self.other)?;

        let default = &self.default;
        if let Some(user) = default.user {
            writeln!(f, "default:user::{user}")?;
        }
        write_named(f, "default:user:", default.named_users())?;
        if let Some(group) = default.group {
            writeln!(f, "default:group::{group}")?;
        }
        write_named(f, "default:group:", default.named_groups())?;
        if let Some(mask) = default.mask {
            writeln!(f, "default:mask::{mask}")?;
        }
        if let Some(other) = default.other {
            writeln!(f, "default:other::{other}")?;
        }

        Ok(())
    }
}

fn write_named(f: &mut fmt::Formatter<'_>, prefix: &str, entries: Option<&[NamedEntry]>) -> fmt::Result {
    for entry in entries.unwrap_or_default() {
        writeln!(f, "{prefix}{entry}")?;
    }
    Ok(())
}
