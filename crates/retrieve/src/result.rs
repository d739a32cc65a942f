//! Output of a successful `getfacl` run.

use std::fmt;

use acl::AclRecord;

/// Raw report text together with the record parsed from it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetfaclResult {
    raw_stdout: String,
    record: AclRecord,
}

impl GetfaclResult {
    pub(crate) const fn new(raw_stdout: String, record: AclRecord) -> Self {
        Self { raw_stdout, record }
    }

    /// Report exactly as printed by the program.
    #[must_use]
    pub fn raw_stdout(&self) -> &str {
        &self.raw_stdout
    }

    /// Parsed record.
    #[must_use]
    pub const fn record(&self) -> &AclRecord {
        &self.record
    }

    /// Consumes the result, returning the parsed record.
    #[must_use]
    pub fn into_record(self) -> AclRecord {
        self.record
    }
}

/// Prints the raw report without surrounding whitespace.
impl fmt::Display for GetfaclResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_stdout.trim())
    }
}
