//! crates/acl/src/triad/mod.rs
//!
//! Fixed-width bit-pattern values used by POSIX ACL entries.
//!
//! getfacl renders every permission entry as a three character pattern such as
//! `rwx` or `r-x`, and the special-bit line (`# flags:`) uses the same shape
//! with `s`, `s`, `t` as the active characters. [`BitPattern`] models both with
//! a single generic value parameterized by a [`PatternKind`] that supplies the
//! two reference patterns (all bits set, no bits set).
//!
//! # Validation
//!
//! Each character position must equal either the all-set pattern's character
//! at that position or the inactive marker `-`. A plausible character in the
//! wrong slot (for example `x` in the read slot) is rejected.
//!
//! # Examples
//!
//! ```
//! use acl::{PermissionTriad, effective};
//!
//! let grant = PermissionTriad::parse("rwx").unwrap();
//! let mask = PermissionTriad::parse("r-x").unwrap();
//! assert_eq!(effective(grant, mask).to_string(), "r-x");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::BitAnd;
use std::str::FromStr;

use crate::error::AclError;

/// Number of characters (and bits) in every pattern.
pub const PATTERN_WIDTH: usize = 3;

/// Character used for an unset position in every pattern.
pub const INACTIVE_MARKER: char = '-';

/// Rendering shared by every pattern flavour when no bit is set.
const NONE_SET_PATTERN: &str = "---";

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::PermissionBits {}
    impl Sealed for super::FlagBits {}
}

/// Supplies the reference pattern for a [`BitPattern`] flavour.
///
/// Implemented only by [`PermissionBits`] and [`FlagBits`]; every `ALL_SET`
/// is exactly [`PATTERN_WIDTH`] ASCII characters.
pub trait PatternKind: sealed::Sealed + Copy + Eq + fmt::Debug + Default + 'static {
    /// Rendering of the pattern when every bit is set.
    const ALL_SET: &'static str;
}

/// Marker for read/write/execute permission patterns.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PermissionBits;

impl PatternKind for PermissionBits {
    const ALL_SET: &'static str = "rwx";
}

/// Marker for setuid/setgid/sticky flag patterns.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FlagBits;

impl PatternKind for FlagBits {
    const ALL_SET: &'static str = "sst";
}

/// Validated three-bit value rendered as a three character pattern.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct BitPattern<K: PatternKind> {
    bits: [bool; PATTERN_WIDTH],
    kind: PhantomData<K>,
}

/// Permission triad of an ACL entry (`r`, `w`, `x`).
pub type PermissionTriad = BitPattern<PermissionBits>;

/// Special-bit triad reported on the `# flags:` line (`s`, `s`, `t`).
pub type FlagTriad = BitPattern<FlagBits>;

impl<K: PatternKind> BitPattern<K> {
    /// Pattern with every bit set.
    pub const ALL_SET: Self = Self::from_array([true; PATTERN_WIDTH]);

    /// Pattern with no bit set.
    pub const NONE_SET: Self = Self::from_array([false; PATTERN_WIDTH]);

    const fn from_array(bits: [bool; PATTERN_WIDTH]) -> Self {
        Self {
            bits,
            kind: PhantomData,
        }
    }

    /// Parses a three character pattern.
    ///
    /// Fails with [`AclError::InvalidBitPattern`] when the text has the wrong
    /// length or any position holds something other than the slot's active
    /// character or `-`.
    pub fn parse(text: &str) -> Result<Self, AclError> {
        let bytes = text.as_bytes();
        if bytes.len() != PATTERN_WIDTH {
            return Err(Self::invalid(text));
        }

        let mut bits = [false; PATTERN_WIDTH];
        for ((bit, &byte), active) in bits.iter_mut().zip(bytes).zip(K::ALL_SET.bytes()) {
            if byte == active {
                *bit = true;
            } else if char::from(byte) != INACTIVE_MARKER {
                return Err(Self::invalid(text));
            }
        }

        Ok(Self::from_array(bits))
    }

    fn invalid(text: &str) -> AclError {
        AclError::InvalidBitPattern {
            value: text.to_owned(),
            all_set: K::ALL_SET,
            none_set: NONE_SET_PATTERN,
        }
    }

    /// Builds a pattern from the low three bits of `value`.
    ///
    /// The first slot maps to `0b100`, the last slot to `0b001`; higher bits
    /// are ignored.
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        Self::from_array([value & 0b100 != 0, value & 0b010 != 0, value & 0b001 != 0])
    }

    /// Returns the pattern as a three-bit value, first slot most significant.
    #[must_use]
    pub const fn bits(self) -> u8 {
        (self.bits[0] as u8) << 2 | (self.bits[1] as u8) << 1 | self.bits[2] as u8
    }

    /// Returns whether the bit at `slot` (0..3) is set.
    ///
    /// Out-of-range slots report `false`.
    #[must_use]
    pub const fn is_set(self, slot: usize) -> bool {
        slot < PATTERN_WIDTH && self.bits[slot]
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.bits[0] && !self.bits[1] && !self.bits[2]
    }

    /// Intersects this pattern with `mask`.
    #[must_use]
    pub const fn masked_by(self, mask: Self) -> Self {
        Self::from_array([
            self.bits[0] && mask.bits[0],
            self.bits[1] && mask.bits[1],
            self.bits[2] && mask.bits[2],
        ])
    }
}

impl PermissionTriad {
    /// Read permission.
    #[must_use]
    pub const fn read(self) -> bool {
        self.bits[0]
    }

    /// Write permission.
    #[must_use]
    pub const fn write(self) -> bool {
        self.bits[1]
    }

    /// Execute (search for directories) permission.
    #[must_use]
    pub const fn execute(self) -> bool {
        self.bits[2]
    }
}

impl FlagTriad {
    /// Set-user-ID bit.
    #[must_use]
    pub const fn setuid(self) -> bool {
        self.bits[0]
    }

    /// Set-group-ID bit.
    #[must_use]
    pub const fn setgid(self) -> bool {
        self.bits[1]
    }

    /// Sticky bit.
    #[must_use]
    pub const fn sticky(self) -> bool {
        self.bits[2]
    }
}

/// Returns the permission that survives `mask`: each bit is `base AND mask`.
///
/// Callers only invoke this when a mask entry exists; an absent mask is
/// modelled as an absent effective value rather than an implied pattern.
#[must_use]
pub const fn effective<K: PatternKind>(base: BitPattern<K>, mask: BitPattern<K>) -> BitPattern<K> {
    base.masked_by(mask)
}

impl<K: PatternKind> BitAnd for BitPattern<K> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.masked_by(rhs)
    }
}

impl<K: PatternKind> fmt::Display for BitPattern<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&set, active) in self.bits.iter().zip(K::ALL_SET.chars()) {
            let ch = if set { active } else { INACTIVE_MARKER };
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl<K: PatternKind> FromStr for BitPattern<K> {
    type Err = AclError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(feature = "serde")]
impl<K: PatternKind> serde::Serialize for BitPattern<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: PatternKind> serde::Deserialize<'de> for BitPattern<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
