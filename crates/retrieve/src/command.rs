//! crates/retrieve/src/command.rs
//!
//! Invocation of the external `getfacl` program.
//!
//! [`GetfaclCommand`] runs `<program> -E -- <path>`: `-E` suppresses the
//! `#effective:` comments so the report carries the configured entries only.
//! Standard output and standard error are captured; a non-zero exit status
//! becomes [`RetrieveError::Failed`] carrying the program's trimmed stderr.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use acl::AclRecord;

use crate::debug_cmd::{trace_exit, trace_spawn};
use crate::error::{RetrieveError, RetrieveResult};
use crate::result::GetfaclResult;

/// Program run when no override is configured.
pub const DEFAULT_PROGRAM: &str = "getfacl";

/// Flag asking getfacl to omit effective-rights comments.
pub const NO_EFFECTIVE_FLAG: &str = "-E";

/// Marks the end of options so a path starting with `-` is not read as one.
pub const END_OF_OPTIONS: &str = "--";

/// Builder for a single `getfacl` invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetfaclCommand {
    program: OsString,
    path: PathBuf,
}

impl GetfaclCommand {
    /// Creates a command reporting on `path` with the default program.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            path: path.into(),
        }
    }

    /// Replaces the program to run.
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the path to report on.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Program that will be run.
    #[must_use]
    pub fn program_name(&self) -> &OsStr {
        &self.program
    }

    /// Path that will be reported on.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.path
    }

    /// Runs the program and returns its standard output as text.
    pub fn run_raw(&self) -> RetrieveResult<String> {
        let output = self.output()?;
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Runs the program and parses its report.
    pub fn run(&self) -> RetrieveResult<GetfaclResult> {
        let raw_stdout = self.run_raw()?;
        let record = AclRecord::from_report_text(&raw_stdout)?;
        Ok(GetfaclResult::new(raw_stdout, record))
    }

    fn output(&self) -> RetrieveResult<Output> {
        trace_spawn(&self.program, &self.path);

        let output = Command::new(&self.program)
            .arg(NO_EFFECTIVE_FLAG)
            .arg(END_OF_OPTIONS)
            .arg(&self.path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RetrieveError::Spawn {
                program: self.display_program(),
                source,
            })?;

        trace_exit(
            &self.program,
            output.status.code(),
            output.stdout.len(),
            output.stderr.len(),
        );

        if !output.status.success() {
            return Err(RetrieveError::Failed {
                program: self.display_program(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(output)
    }

    fn display_program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Runs `getfacl -E -- <path>` and parses the report.
pub fn getfacl(path: impl AsRef<Path>) -> RetrieveResult<GetfaclResult> {
    GetfaclCommand::new(path.as_ref()).run()
}

/// Runs `getfacl -E -- <path>` and returns the unparsed report.
pub fn getfacl_raw(path: impl AsRef<Path>) -> RetrieveResult<String> {
    GetfaclCommand::new(path.as_ref()).run_raw()
}
