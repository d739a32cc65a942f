#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `facl` command: it parses getfacl reports, either
//! saved to files or produced on demand by running `getfacl` on live paths,
//! and prints the typed record, optionally with effective permissions or as
//! JSON.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the binary and the tests drive the same code.
//! A [`clap`](https://docs.rs/clap/) builder definition performs the parse;
//! the built-in help and version flags are disabled in favour of the fixed
//! [`HELP_TEXT`] and a one-line version banner.
//!
//! Inputs are processed in order (`--report` files first, then paths). A
//! failing input is reported on standard error and the remaining inputs are
//! still processed; the exit code is the most severe failure seen.
//!
//! # Errors
//!
//! | exit code | meaning |
//! |-----------|---------|
//! | [`EXIT_SUCCESS`] | every input parsed |
//! | [`EXIT_ERROR`] | bad usage, or a report the parser rejected |
//! | [`EXIT_RETRIEVAL`] | `getfacl` could not be run or failed, or a report file could not be read |
//!
//! Diagnostics take the form `facl error: <message>`.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["facl", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(stdout.starts_with(b"facl "));
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

mod frontend;

/// Name the command reports itself as.
pub const PROGRAM_NAME: &str = "facl";

/// Every input was parsed and printed.
pub const EXIT_SUCCESS: i32 = 0;

/// Usage error, or a report that failed to parse.
pub const EXIT_ERROR: i32 = 1;

/// `getfacl` could not be run or reported failure.
pub const EXIT_RETRIEVAL: i32 = 2;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Help text printed by `--help`.
pub const HELP_TEXT: &str = concat!(
    "facl - inspect POSIX access control lists\n",
    "\n",
    "Usage: facl [OPTIONS] [PATH]...\n",
    "\n",
    "Runs `getfacl -E` on each PATH and prints the parsed ACL record.\n",
    "\n",
    "Options:\n",
    "      --report FILE    Parse a saved getfacl report ('-' reads standard input).\n",
    "  -e, --effective      Also print the permissions left after applying each mask.\n",
    "      --json           Print the parsed records as JSON.\n",
    "      --getfacl PROGRAM  Run PROGRAM instead of getfacl (default: $FACL_GETFACL).\n",
    "  -v, --verbose        Increase diagnostic output on standard error.\n",
    "      --debug FLAGS    Enable debug categories: parse, field, cmd, all.\n",
    "                       Append a digit to raise the level (e.g. field2).\n",
    "  -h, --help           Show this help message and exit.\n",
    "  -V, --version        Output version information and exit.\n",
    "\n",
    "Exit status: 0 on success, 1 on usage or parse errors, 2 when getfacl fails.\n",
);

/// Runs the command line and returns its exit code.
///
/// Never panics; I/O failures on the output handles surface as
/// [`EXIT_ERROR`].
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match frontend::parse_args(arguments) {
        Ok(parsed) => frontend::execute(parsed, stdout, stderr),
        Err(error) => {
            write_error(stderr, &clap_message(&error));
            EXIT_ERROR
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn clap_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_owned()
}

pub(crate) fn write_error<Err: Write + ?Sized>(stderr: &mut Err, message: &str) {
    // Nothing useful remains to be done when stderr itself is broken.
    let _ = writeln!(stderr, "{PROGRAM_NAME} error: {message}");
}
