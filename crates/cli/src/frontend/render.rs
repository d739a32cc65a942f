//! Text and JSON rendering of parsed records.

use std::io::{self, Write};

use acl::{AclRecord, EffectiveAcl, EffectivePermissions};
use serde::Serialize;

/// One successfully parsed input.
#[derive(Debug, Serialize)]
pub(crate) struct RenderedReport {
    pub(crate) file: String,
    pub(crate) record: AclRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) effective: Option<EffectivePermissions>,
}

impl RenderedReport {
    pub(crate) fn new(file: String, record: AclRecord, with_effective: bool) -> Self {
        let effective = with_effective.then(|| record.effective_permissions());
        Self {
            file,
            record,
            effective,
        }
    }
}

/// Writes a record in getfacl's layout, followed by its effective
/// permissions when they were requested. Reports are separated by a blank
/// line.
pub(crate) fn write_text<W: Write + ?Sized>(
    out: &mut W,
    report: &RenderedReport,
) -> io::Result<()> {
    writeln!(out, "# file: {}", report.file)?;
    write!(out, "{}", report.record)?;
    if let Some(effective) = &report.effective {
        write_effective(out, effective)?;
    }
    writeln!(out)
}

fn write_effective<W: Write + ?Sized>(out: &mut W, effective: &EffectivePermissions) -> io::Result<()> {
    writeln!(out, "# effective:")?;
    write_effective_acl(out, "", effective.access())?;
    write_effective_acl(out, "default:", effective.default_acl())
}

fn write_effective_acl<W: Write + ?Sized>(
    out: &mut W,
    prefix: &str,
    acl: &EffectiveAcl,
) -> io::Result<()> {
    if let Some(user) = acl.user() {
        writeln!(out, "{prefix}user::{user}")?;
    }
    for entry in acl.named_users().unwrap_or_default() {
        writeln!(out, "{prefix}user:{entry}")?;
    }
    if let Some(group) = acl.group() {
        writeln!(out, "{prefix}group::{group}")?;
    }
    for entry in acl.named_groups().unwrap_or_default() {
        writeln!(out, "{prefix}group:{entry}")?;
    }
    if let Some(other) = acl.other() {
        writeln!(out, "{prefix}other::{other}")?;
    }
    Ok(())
}

/// Writes every report as one pretty-printed JSON array.
pub(crate) fn write_json<W: Write + ?Sized>(out: &mut W, reports: &[RenderedReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}
