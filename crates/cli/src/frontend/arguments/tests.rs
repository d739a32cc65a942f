use super::*;

#[test]
fn parse_args_defaults() {
    let parsed = parse_args(["facl"]).expect("parse");
    assert_eq!(parsed, ParsedArgs::default());
    assert!(parsed.has_no_inputs());
}

#[test]
fn parse_args_empty_iterator_uses_program_name() {
    let parsed = parse_args(Vec::<OsString>::new()).expect("parse");
    assert!(parsed.has_no_inputs());
}

#[test]
fn parse_args_collects_paths_and_reports() {
    let parsed = parse_args([
        "facl",
        "--report",
        "saved.txt",
        "srv/share",
        "--report=-",
        "srv/projects",
    ])
    .expect("parse");

    assert_eq!(parsed.reports, ["saved.txt", "-"]);
    assert_eq!(parsed.paths, ["srv/share", "srv/projects"]);
    assert!(!parsed.has_no_inputs());
}

#[test]
fn parse_args_recognises_output_flags() {
    let parsed = parse_args(["facl", "-e", "--json", "x"]).expect("parse");
    assert!(parsed.effective);
    assert!(parsed.json);

    let parsed = parse_args(["facl", "--effective", "x"]).expect("parse");
    assert!(parsed.effective);
    assert!(!parsed.json);
}

#[test]
fn parse_args_counts_verbosity() {
    let parsed = parse_args(["facl", "-vv", "-v", "x"]).expect("parse");
    assert_eq!(parsed.verbose, 3);
}

#[test]
fn parse_args_collects_debug_lists() {
    let parsed = parse_args(["facl", "--debug", "parse,cmd2", "--debug=field", "x"]).expect("parse");
    assert_eq!(parsed.debug, ["parse,cmd2", "field"]);
}

#[test]
fn parse_args_accepts_getfacl_override() {
    let parsed = parse_args(["facl", "--getfacl", "/opt/bin/getfacl", "x"]).expect("parse");
    assert_eq!(parsed.getfacl, Some(OsString::from("/opt/bin/getfacl")));
}

#[test]
fn parse_args_recognises_help_and_version() {
    assert!(parse_args(["facl", "-h"]).expect("parse").show_help);
    assert!(parse_args(["facl", "--help"]).expect("parse").show_help);
    assert!(parse_args(["facl", "-V"]).expect("parse").show_version);
    assert!(parse_args(["facl", "--version"]).expect("parse").show_version);
}

#[test]
fn parse_args_rejects_unknown_option() {
    assert!(parse_args(["facl", "--bogus"]).is_err());
}

#[test]
fn parse_args_rejects_report_without_value() {
    assert!(parse_args(["facl", "--report"]).is_err());
}
