#![deny(unsafe_code)]

//! Shared fixtures for the facl workspace tests.
//!
//! Sample getfacl reports cover the shapes the parser must accept, and
//! [`fake_getfacl`] stands in for the real program so retrieval can be tested
//! without ACL support on the host filesystem.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Report for a file with one named user and one named group under a mask.
pub const EXTENDED_REPORT: &str = "\
# file: srv/share
# owner: alice
# group: devs
user::rwx
user:bob:rwx
group::r-x
group:qa:rw-
mask::r-x
other::r-x
";

/// Report for a file carrying only the three base entries.
pub const MINIMAL_REPORT: &str = "\
# file: etc/hosts
# owner: root
# group: root
user::rw-
group::r--
other::r--
";

/// Report for a setgid directory with a full default ACL.
pub const DIRECTORY_REPORT: &str = "\
# file: srv/projects
# owner: alice
# group: devs
# flags: -s-
user::rwx
user:alice:rwx
user:bob:r--
group::r-x
group:ops:rwx
mask::rwx
other::---
default:user::rwx
default:user:bob:rwx
default:group::r-x
default:group:qa:rw-
default:mask::r-x
default:other::---
";

/// Report as printed without `-E`, with effective-rights annotations.
pub const ANNOTATED_REPORT: &str = "\
# file: srv/share
# owner: alice
# group: devs
user::rwx
user:bob:rwx\t\t\t#effective:r-x
group::r-x
group:qa:rw-\t\t\t#effective:r--
mask::r-x
other::r-x
";

/// Writes an executable `getfacl` replacement into a fresh temporary
/// directory.
///
/// The script prints `stdout` and exits with `status`. Its arguments are
/// appended to `args.log` next to the script, one invocation per line.
#[cfg(unix)]
pub fn fake_getfacl(stdout: &str, status: i32) -> io::Result<(TempDir, PathBuf)> {
    fake_getfacl_with_stderr(stdout, "", status)
}

/// Like [`fake_getfacl`], additionally printing `stderr` on standard error.
#[cfg(unix)]
pub fn fake_getfacl_with_stderr(
    stdout: &str,
    stderr: &str,
    status: i32,
) -> io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let stdout_path = dir.path().join("stdout.txt");
    let stderr_path = dir.path().join("stderr.txt");
    let log_path = dir.path().join("args.log");
    std::fs::write(&stdout_path, stdout)?;
    std::fs::write(&stderr_path, stderr)?;

    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{log}'\ncat '{out}'\ncat '{err}' >&2\nexit {status}\n",
        log = log_path.display(),
        out = stdout_path.display(),
        err = stderr_path.display(),
    );
    let script_path = dir.path().join("getfacl");
    write_executable_script(&script_path, &script)?;
    Ok((dir, script_path))
}

/// Returns the argument lines recorded by a fake `getfacl` script.
pub fn recorded_invocations(script: &Path) -> io::Result<Vec<String>> {
    let log_path = script.with_file_name("args.log");
    let contents = std::fs::read_to_string(log_path)?;
    Ok(contents.lines().map(str::to_owned).collect())
}

#[cfg(unix)]
fn write_executable_script(path: &Path, contents: &str) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents)?;
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions)
}
