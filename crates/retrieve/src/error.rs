//! crates/retrieve/src/error.rs
//!
//! Error types for running `getfacl`.

use std::io;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

use acl::AclError;
use thiserror::Error;

/// Result type for retrieval operations.
pub type RetrieveResult<T> = Result<T, RetrieveError>;

/// Errors produced while running `getfacl` and parsing its output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RetrieveError {
    /// The program could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: io::Error,
    },
    /// The program ran but reported failure.
    #[error("'{program}' failed ({status}): {stderr}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Exit status of the program.
        status: ExitStatus,
        /// Trimmed standard error of the program.
        stderr: String,
    },
    /// Standard output was not valid UTF-8.
    #[error("getfacl output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    /// The report could not be parsed.
    #[error("failed to parse getfacl output: {0}")]
    Parse(#[from] AclError),
}

impl RetrieveError {
    /// Returns `true` when the program ran successfully but its report was
    /// rejected by the parser.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn spawn_error_names_program_and_keeps_source() {
        let error = RetrieveError::Spawn {
            program: "getfacl".to_owned(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "failed to run 'getfacl': not found");
        assert!(error.source().is_some());
        assert!(!error.is_parse());
    }

    #[test]
    fn parse_error_wraps_acl_error() {
        let error: RetrieveError = AclError::MissingMask {
            scope: acl::AclScope::Access,
        }
        .into();
        assert!(error.is_parse());
        assert!(error.to_string().starts_with("failed to parse getfacl output: "));
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_utf8_converts() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error: RetrieveError = utf8.into();
        assert!(matches!(error, RetrieveError::InvalidUtf8(_)));
        assert!(error.to_string().contains("not valid UTF-8"));
    }

    #[cfg(unix)]
    #[test]
    fn failed_error_includes_status_and_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let error = RetrieveError::Failed {
            program: "getfacl".to_owned(),
            status: ExitStatus::from_raw(1 << 8),
            stderr: "No such file or directory".to_owned(),
        };
        let rendered = error.to_string();
        assert!(rendered.starts_with("'getfacl' failed (exit status: 1)"));
        assert!(rendered.ends_with("No such file or directory"));
    }

    #[test]
    fn debug_names_variant() {
        let error = RetrieveError::Spawn {
            program: "getfacl".to_owned(),
            source: io::Error::other("boom"),
        };
        assert!(format!("{error:?}").contains("Spawn"));
    }
}
