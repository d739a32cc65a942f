use clap::builder::{NonEmptyStringValueParser, OsStringValueParser};
use clap::{Arg, ArgAction, Command};

use crate::PROGRAM_NAME;

pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("effective")
                .long("effective")
                .short('e')
                .help("Also print the permissions left after applying each mask.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the parsed records as JSON.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output on standard error.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug categories (parse, field, cmd, all) with optional level digits.")
                .value_parser(NonEmptyStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("getfacl")
                .long("getfacl")
                .value_name("PROGRAM")
                .help("Run PROGRAM instead of getfacl.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FILE")
                .help("Parse a saved getfacl report ('-' reads standard input).")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        clap_command().debug_assert();
    }
}
