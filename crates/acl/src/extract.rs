//! crates/acl/src/extract.rs
//!
//! Extraction engine applying the field registry to raw report text.
//!
//! For every [`FieldSpec`] the engine collects the matching lines in order of
//! appearance, validates their count, and converts them into a [`FieldValue`]:
//!
//! - no match: [`FieldValue::Absent`], whether or not the field is required
//!   (required-ness is enforced before conversion, not encoded in the output);
//! - one match on a singular field: [`FieldValue::Scalar`];
//! - otherwise: [`FieldValue::Collection`] in textual order.
//!
//! The first failing field aborts the pass.

use std::collections::BTreeMap;

use crate::debug_parse::{trace_extract_start, trace_field_matched, trace_field_rejected};
use crate::entry::NamedEntry;
use crate::error::{AclError, AclResult};
use crate::field::{Attribute, FieldSpec, Setting};
use crate::triad::{FlagTriad, PermissionTriad};

/// Cardinality-tagged result for one field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FieldValue {
    /// No line matched.
    #[default]
    Absent,
    /// Exactly one line matched a singular field.
    Scalar(Setting),
    /// Values of an unbounded field, in report order.
    Collection(Vec<Setting>),
}

impl FieldValue {
    /// Returns `true` when no line matched.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the number of values carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Scalar(_) => 1,
            Self::Collection(values) => values.len(),
        }
    }

    /// Returns `true` when no value is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Field values keyed by attribute, as produced by [`extract`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtractedFields {
    values: BTreeMap<Attribute, FieldValue>,
}

impl ExtractedFields {
    /// Creates an empty set of field values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the value for `attribute`, replacing any previous value.
    pub fn insert(&mut self, attribute: Attribute, value: FieldValue) {
        self.values.insert(attribute, value);
    }

    /// Returns the value recorded for `attribute`.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&FieldValue> {
        self.values.get(&attribute)
    }

    /// Iterates over the recorded values in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &FieldValue)> {
        self.values.iter().map(|(attribute, value)| (*attribute, value))
    }

    /// Returns the number of recorded attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no attribute has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn take(&mut self, attribute: Attribute) -> FieldValue {
        self.values.remove(&attribute).unwrap_or_default()
    }

    fn take_scalar(&mut self, attribute: Attribute) -> AclResult<Option<Setting>> {
        match self.take(attribute) {
            FieldValue::Absent => Ok(None),
            FieldValue::Scalar(setting) => Ok(Some(setting)),
            FieldValue::Collection(_) => Err(AclError::UnexpectedSetting { attribute }),
        }
    }

    /// Removes and returns a text field.
    pub fn take_text(&mut self, attribute: Attribute) -> AclResult<Option<String>> {
        match self.take_scalar(attribute)? {
            None => Ok(None),
            Some(Setting::Text(text)) => Ok(Some(text)),
            Some(_) => Err(AclError::UnexpectedSetting { attribute }),
        }
    }

    /// Removes and returns a permission field.
    pub fn take_permissions(&mut self, attribute: Attribute) -> AclResult<Option<PermissionTriad>> {
        match self.take_scalar(attribute)? {
            None => Ok(None),
            Some(Setting::Permissions(triad)) => Ok(Some(triad)),
            Some(_) => Err(AclError::UnexpectedSetting { attribute }),
        }
    }

    /// Removes and returns a flag field.
    pub fn take_flags(&mut self, attribute: Attribute) -> AclResult<Option<FlagTriad>> {
        match self.take_scalar(attribute)? {
            None => Ok(None),
            Some(Setting::Flags(flags)) => Ok(Some(flags)),
            Some(_) => Err(AclError::UnexpectedSetting { attribute }),
        }
    }

    /// Removes and returns a named-entry family in report order.
    pub fn take_named(&mut self, attribute: Attribute) -> AclResult<Option<Vec<NamedEntry>>> {
        let settings = match self.take(attribute) {
            FieldValue::Absent => return Ok(None),
            FieldValue::Scalar(setting) => vec![setting],
            FieldValue::Collection(settings) => settings,
        };

        settings
            .into_iter()
            .map(|setting| match setting {
                Setting::Named(entry) => Ok(entry),
                _ => Err(AclError::UnexpectedSetting { attribute }),
            })
            .collect::<AclResult<Vec<_>>>()
            .map(Some)
    }
}

/// Applies every field in `specs` to `text`.
///
/// Lines are split on `\n` (a trailing `\r` is dropped). Lines no rule
/// recognises, such as `# file:` and blank lines, are ignored.
pub fn extract(text: &str, specs: &[FieldSpec]) -> AclResult<ExtractedFields> {
    let lines: Vec<&str> = text.lines().collect();
    trace_extract_start(lines.len(), specs.len());

    let mut fields = ExtractedFields::new();
    for spec in specs {
        let value = extract_field(&lines, spec).inspect_err(trace_field_rejected)?;
        fields.insert(spec.attribute, value);
    }

    Ok(fields)
}

fn extract_field(lines: &[&str], spec: &FieldSpec) -> AclResult<FieldValue> {
    let matched: Vec<&str> = lines
        .iter()
        .filter_map(|line| spec.rule.capture(*line))
        .collect();

    trace_field_matched(spec.attribute, matched.len());
    spec.validate_matches(matched.len())?;

    match matched.as_slice() {
        [] => Ok(FieldValue::Absent),
        [single] if spec.is_singular() => spec
            .setting
            .convert(spec.attribute, single)
            .map(FieldValue::Scalar),
        _ => matched
            .iter()
            .map(|text| spec.setting.convert(spec.attribute, text))
            .collect::<AclResult<Vec<_>>>()
            .map(FieldValue::Collection),
    }
}
