//! crates/logging/src/config.rs
//! Verbosity configuration combining the `-v` count with debug flags.

use super::levels::{DebugFlag, DebugLevels};

/// Combined verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Number of `-v` flags given.
    pub verbose: u8,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level.
    ///
    /// Level 1 reports command execution, level 2 adds parsing, level 3 adds
    /// per-field matching and level 4 or more enables every flag at level 2.
    pub const fn from_verbose_level(level: u8) -> Self {
        let mut config = Self {
            verbose: level,
            debug: DebugLevels {
                parse: 0,
                field: 0,
                cmd: 0,
            },
        };

        match level {
            0 => {}
            1 => {
                config.debug.cmd = 1;
            }
            2 => {
                config.debug.cmd = 1;
                config.debug.parse = 1;
            }
            3 => {
                config.debug.cmd = 2;
                config.debug.parse = 1;
                config.debug.field = 1;
            }
            _ => {
                config.debug.set_all(2);
            }
        }

        config
    }

    /// Apply a single debug flag token (e.g., "field2", "cmd").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag = DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated list of debug flag tokens.
    pub fn apply_debug_flags(&mut self, list: &str) -> Result<(), String> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_debug_flag(token))
    }

    /// Renders the configuration as `tracing` filter directives.
    ///
    /// The default directive is `warn`, or `info` once any `-v` is given.
    /// Each enabled flag adds a directive for its target: `debug` at level 1
    /// and `trace` above.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = String::from(if self.verbose == 0 { "warn" } else { "info" });
        for flag in DebugFlag::ALL {
            if let Some(level) = directive_level(self.debug.get(flag)) {
                directives.push(',');
                directives.push_str(flag.target());
                directives.push('=');
                directives.push_str(level);
            }
        }
        directives
    }
}

const fn directive_level(level: u8) -> Option<&'static str> {
    match level {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse a flag token like "field2" into ("field", 2) or "cmd" into ("cmd", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_owned());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let (name, level) = token.split_at(pos);
            let level = level
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
