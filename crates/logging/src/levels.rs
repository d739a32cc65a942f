//! crates/logging/src/levels.rs
//! Debug flag categories and their per-flag levels.

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DebugFlag {
    /// Report extraction and record assembly.
    Parse,
    /// Per-field matching and rejection.
    Field,
    /// External command execution.
    Cmd,
}

impl DebugFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 3] = [Self::Parse, Self::Field, Self::Cmd];

    /// Name accepted by `--debug`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Field => "field",
            Self::Cmd => "cmd",
        }
    }

    /// Tracing target the flag controls.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Parse => "facl::parse",
            Self::Field => "facl::field",
            Self::Cmd => "facl::cmd",
        }
    }

    /// Looks up a flag by its `--debug` name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Report extraction level.
    pub parse: u8,
    /// Field matching level.
    pub field: u8,
    /// Command execution level.
    pub cmd: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Parse => self.parse,
            DebugFlag::Field => self.field,
            DebugFlag::Cmd => self.cmd,
        }
    }

    /// Set the level for a specific flag.
    pub const fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Parse => self.parse = level,
            DebugFlag::Field => self.field = level,
            DebugFlag::Cmd => self.cmd = level,
        }
    }

    /// Set all flags to the specified level.
    pub const fn set_all(&mut self, level: u8) {
        self.parse = level;
        self.field = level;
        self.cmd = level;
    }
}
