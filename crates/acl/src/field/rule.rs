//! Line-matching rules for report fields.

/// Annotation getfacl appends to masked entries unless `-E` is given.
const EFFECTIVE_ANNOTATION: &str = "#effective:";

/// Anchored rule selecting the report lines that belong to one field.
///
/// Both variants key on a literal prefix that must start the line; nothing
/// before the prefix is tolerated, so `user:` never matches a
/// `default:user:` line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineRule {
    /// Matches `PREFIX VALUE` and captures `VALUE`.
    Value {
        /// Literal line prefix, for example `user::`.
        prefix: &'static str,
    },
    /// Matches `PREFIX NAME:PERMS` where `NAME` does not begin with `:` and
    /// captures `NAME:PERMS`.
    Named {
        /// Literal line prefix, for example `user:`.
        prefix: &'static str,
    },
}

impl LineRule {
    /// Returns the literal prefix the rule is keyed on.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Value { prefix } | Self::Named { prefix } => prefix,
        }
    }

    /// Returns the captured text when `line` matches the rule.
    ///
    /// The capture is trimmed and any trailing `#effective:` annotation is
    /// dropped.
    #[must_use]
    pub fn capture(self, line: &str) -> Option<&str> {
        let rest = match self {
            Self::Value { prefix } => line.strip_prefix(prefix)?,
            Self::Named { prefix } => {
                let rest = line.strip_prefix(prefix)?;
                if rest.starts_with(':') {
                    return None;
                }
                rest
            }
        };

        Some(strip_effective_annotation(rest).trim())
    }
}

fn strip_effective_annotation(text: &str) -> &str {
    match text.find(EFFECTIVE_ANNOTATION) {
        Some(position) => &text[..position],
        None => text,
    }
}
