//! Tracing hooks for report extraction.
//!
//! All functions are compiled to no-op inline stubs unless the `tracing`
//! feature is enabled.

#[cfg(feature = "tracing")]
use crate::error::AclError;
use crate::field::Attribute;

#[cfg(feature = "tracing")]
const PARSE_TARGET: &str = "facl::parse";
#[cfg(feature = "tracing")]
const FIELD_TARGET: &str = "facl::field";

/// Traces the start of an extraction pass.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_extract_start(line_count: usize, field_count: usize) {
    tracing::debug!(
        target: PARSE_TARGET,
        line_count = line_count,
        field_count = field_count,
        "extract: starting"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_extract_start(_line_count: usize, _field_count: usize) {}

/// Traces the lines matched for one field.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_field_matched(attribute: Attribute, found: usize) {
    tracing::trace!(
        target: FIELD_TARGET,
        attribute = attribute.as_str(),
        found = found,
        "field: matched"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_field_matched(_attribute: Attribute, _found: usize) {}

/// Traces a field that failed validation or conversion.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_field_rejected(error: &AclError) {
    tracing::debug!(
        target: FIELD_TARGET,
        attribute = error.attribute().map(Attribute::as_str),
        error = %error,
        "field: rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_field_rejected<E>(_error: &E) {}

/// Traces a completed record.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_record_built(owner: &str, named_users: usize, named_groups: usize, has_default: bool) {
    tracing::debug!(
        target: PARSE_TARGET,
        owner = %owner,
        named_users = named_users,
        named_groups = named_groups,
        has_default = has_default,
        "record: built"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_record_built(
    _owner: &str,
    _named_users: usize,
    _named_groups: usize,
    _has_default: bool,
) {
}
