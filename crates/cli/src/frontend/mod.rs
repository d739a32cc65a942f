//! Execution of a parsed `facl` command line.

mod arguments;
mod command_builder;
mod render;

use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};
use std::path::Path;

use acl::AclRecord;
use logging::VerbosityConfig;
use retrieve::{GetfaclCommand, RetrieveError};

pub(crate) use arguments::{ParsedArgs, env_getfacl_program, parse_args};
use render::{RenderedReport, write_json, write_text};

use crate::{EXIT_ERROR, EXIT_RETRIEVAL, EXIT_SUCCESS, HELP_TEXT, write_error};

/// Operand naming standard input as the report source.
const STDIN_OPERAND: &str = "-";

/// Failure to load one input, with the exit code it maps to.
#[derive(Debug)]
struct InputFailure {
    message: String,
    exit_code: i32,
}

impl InputFailure {
    fn new(label: &str, error: impl std::fmt::Display, exit_code: i32) -> Self {
        Self {
            message: format!("{label}: {error}"),
            exit_code,
        }
    }
}

pub(crate) fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return write_or_fail(stdout.write_all(HELP_TEXT.as_bytes()), stderr);
    }

    if parsed.show_version {
        let banner = format!("{} {}\n", crate::PROGRAM_NAME, env!("CARGO_PKG_VERSION"));
        return write_or_fail(stdout.write_all(banner.as_bytes()), stderr);
    }

    let config = match verbosity_config(&parsed) {
        Ok(config) => config,
        Err(message) => {
            write_error(stderr, &message);
            return EXIT_ERROR;
        }
    };
    install_tracing(&config);

    if parsed.has_no_inputs() {
        write_error(stderr, "no PATH or --report given (see --help)");
        return EXIT_ERROR;
    }

    let program = parsed
        .getfacl
        .clone()
        .or_else(env_getfacl_program)
        .unwrap_or_else(|| OsString::from(retrieve::DEFAULT_PROGRAM));
    tracing::debug!(target: "facl::cmd", program = %program.to_string_lossy(), "cli: resolved getfacl program");

    let mut status = EXIT_SUCCESS;
    let mut reports = Vec::new();
    let loaded = parsed
        .reports
        .iter()
        .map(|report| load_report(report))
        .chain(parsed.paths.iter().map(|path| load_path(path, &program)));

    for outcome in loaded {
        match outcome {
            Ok((label, record)) => {
                let report = RenderedReport::new(label, record, parsed.effective);
                if parsed.json {
                    reports.push(report);
                } else if let Err(error) = write_text(stdout, &report) {
                    write_error(stderr, &format!("failed to write output: {error}"));
                    return EXIT_ERROR;
                }
            }
            Err(failure) => {
                write_error(stderr, &failure.message);
                status = status.max(failure.exit_code);
            }
        }
    }

    if parsed.json {
        if let Err(error) = write_json(stdout, &reports) {
            write_error(stderr, &format!("failed to write output: {error}"));
            return EXIT_ERROR;
        }
    }

    status
}

fn verbosity_config(parsed: &ParsedArgs) -> Result<VerbosityConfig, String> {
    let mut config = VerbosityConfig::from_verbose_level(parsed.verbose);
    for list in &parsed.debug {
        config.apply_debug_flags(list)?;
    }
    Ok(config)
}

fn install_tracing(config: &VerbosityConfig) {
    let requested = config.verbose > 0
        || *config != VerbosityConfig::from_verbose_level(config.verbose)
        || std::env::var_os(logging::FILTER_ENV).is_some();
    if requested {
        // A subscriber installed by an embedding process takes precedence.
        let _ = logging::init_tracing(config);
    }
}

fn load_report(operand: &OsStr) -> Result<(String, AclRecord), InputFailure> {
    let label = operand.to_string_lossy().into_owned();
    let text = read_report(operand).map_err(|error| InputFailure::new(&label, error, EXIT_RETRIEVAL))?;
    let record =
        AclRecord::from_report_text(&text).map_err(|error| InputFailure::new(&label, error, EXIT_ERROR))?;
    Ok((label, record))
}

fn read_report(operand: &OsStr) -> io::Result<String> {
    if operand == STDIN_OPERAND {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(Path::new(operand))
    }
}

fn load_path(path: &OsStr, program: &OsStr) -> Result<(String, AclRecord), InputFailure> {
    let label = path.to_string_lossy().into_owned();
    let result = GetfaclCommand::new(path)
        .program(program)
        .run()
        .map_err(|error| {
            let exit_code = retrieval_exit_code(&error);
            InputFailure::new(&label, error, exit_code)
        })?;
    Ok((label, result.into_record()))
}

const fn retrieval_exit_code(error: &RetrieveError) -> i32 {
    if error.is_parse() { EXIT_ERROR } else { EXIT_RETRIEVAL }
}

fn write_or_fail<Err: Write>(result: io::Result<()>, stderr: &mut Err) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            write_error(stderr, &format!("failed to write output: {error}"));
            EXIT_ERROR
        }
    }
}
