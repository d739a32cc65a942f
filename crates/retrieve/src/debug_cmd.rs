//! Tracing hooks for external command invocation.
//!
//! All functions compile to no-op inline stubs unless the `tracing` feature
//! is enabled.

use std::ffi::OsStr;
use std::path::Path;

#[cfg(feature = "tracing")]
const CMD_TARGET: &str = "facl::cmd";

/// Traces a command about to be spawned.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_spawn(program: &OsStr, path: &Path) {
    tracing::debug!(
        target: CMD_TARGET,
        program = %program.to_string_lossy(),
        path = %path.display(),
        "cmd: spawning"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_spawn(_program: &OsStr, _path: &Path) {}

/// Traces a finished command.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_exit(program: &OsStr, code: Option<i32>, stdout_len: usize, stderr_len: usize) {
    tracing::debug!(
        target: CMD_TARGET,
        program = %program.to_string_lossy(),
        code = ?code,
        stdout_len = stdout_len,
        stderr_len = stderr_len,
        "cmd: exited"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_exit(_program: &OsStr, _code: Option<i32>, _stdout_len: usize, _stderr_len: usize) {}
