//! Path wrapper bundling ACL retrieval with mode inspection.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::command::GetfaclCommand;
use crate::error::RetrieveResult;
use crate::result::GetfaclResult;

/// A filesystem path whose ACL can be retrieved.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AclPath {
    path: PathBuf,
}

impl AclPath {
    /// Wraps `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wrapped path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Runs the default `getfacl` on this path.
    pub fn getfacl(&self) -> RetrieveResult<GetfaclResult> {
        GetfaclCommand::new(&self.path).run()
    }

    /// Runs `command` with its target replaced by this path.
    pub fn getfacl_with(&self, command: &GetfaclCommand) -> RetrieveResult<GetfaclResult> {
        command.clone().path(&self.path).run()
    }

    /// Renders the path's mode bits as `ls -l` does, following symlinks.
    #[cfg(unix)]
    pub fn standard_filemode(&self) -> io::Result<String> {
        use std::os::unix::fs::MetadataExt;

        let metadata = std::fs::metadata(&self.path)?;
        Ok(crate::mode::filemode(metadata.mode()))
    }

    /// Mode strings are only available on Unix.
    #[cfg(not(unix))]
    pub fn standard_filemode(&self) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "file mode strings require a Unix platform",
        ))
    }
}

impl From<PathBuf> for AclPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for AclPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for AclPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for AclPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path.display(), f)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn standard_filemode_reads_metadata() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("data.txt");
        std::fs::write(&file, b"data").expect("write file");
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640))
            .expect("chmod");

        let path = AclPath::new(&file);
        assert_eq!(path.standard_filemode().expect("mode"), "-rw-r-----");
    }

    #[test]
    fn standard_filemode_of_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o750))
            .expect("chmod");
        let path = AclPath::from(dir.path());
        assert_eq!(path.standard_filemode().expect("mode"), "drwxr-x---");
    }

    #[test]
    fn standard_filemode_of_missing_path_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = AclPath::new(dir.path().join("missing"));
        let error = path.standard_filemode().unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn display_shows_path() {
        assert_eq!(AclPath::new("srv/share").to_string(), "srv/share");
    }
}
