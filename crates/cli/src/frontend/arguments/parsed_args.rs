use std::ffi::OsString;

/// Options recognised on the command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) effective: bool,
    pub(crate) json: bool,
    pub(crate) verbose: u8,
    pub(crate) debug: Vec<String>,
    pub(crate) getfacl: Option<OsString>,
    pub(crate) reports: Vec<OsString>,
    pub(crate) paths: Vec<OsString>,
}

impl ParsedArgs {
    /// Returns `true` when no report file or path was given.
    pub(crate) fn has_no_inputs(&self) -> bool {
        self.reports.is_empty() && self.paths.is_empty()
    }
}
