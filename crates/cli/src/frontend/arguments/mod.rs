//! Argument parsing for the `facl` command line.

mod env;
mod parsed_args;

use std::ffi::OsString;

pub(crate) use env::env_getfacl_program;
pub(crate) use parsed_args::ParsedArgs;

use super::command_builder::clap_command;
use crate::PROGRAM_NAME;

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        effective: matches.get_flag("effective"),
        json: matches.get_flag("json"),
        verbose: matches.get_count("verbose"),
        debug: matches
            .remove_many::<String>("debug")
            .map(Iterator::collect)
            .unwrap_or_default(),
        getfacl: matches.remove_one::<OsString>("getfacl"),
        reports: matches
            .remove_many::<OsString>("report")
            .map(Iterator::collect)
            .unwrap_or_default(),
        paths: matches
            .remove_many::<OsString>("paths")
            .map(Iterator::collect)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests;
