use std::env;
use std::ffi::OsString;

/// Environment variable naming the program run in place of `getfacl`.
pub(crate) const GETFACL_ENV: &str = "FACL_GETFACL";

pub(crate) fn env_getfacl_program() -> Option<OsString> {
    let value = env::var_os(GETFACL_ENV)?;
    if value.to_string_lossy().trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
