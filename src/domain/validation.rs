use crate::domain::features::{FEATURE_FIELDS, FeatureRecord, FieldSpec};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-field validation failures, keyed by input field name.
///
/// Each field carries its violation messages in the order the checks ran.
/// An empty report means the record passed. Serializes as the bare
/// `{field: [message, ...]}` object returned in the `detail` of a 400.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Messages recorded for one field, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }
}

/// Validates an untyped JSON object against the fixed input schema.
///
/// All four fields are checked independently and every failure is collected,
/// so a single response reports everything the caller must fix. Checks for
/// one field run in order (present, integer, in range) and stop at the first
/// failure for that field.
pub fn validate(raw: &Map<String, Value>) -> Result<FeatureRecord, ValidationReport> {
    let mut report = ValidationReport::default();
    let mut values = [0i64; FEATURE_FIELDS.len()];

    for (slot, spec) in values.iter_mut().zip(FEATURE_FIELDS.iter()) {
        match check_field(raw, spec) {
            Ok(value) => *slot = value,
            Err(message) => report.push(spec.name, message),
        }
    }

    if !report.is_empty() {
        warn!(
            "Validation FAILED: {} field(s) rejected: {:?}",
            report.len(),
            report.fields.keys().collect::<Vec<_>>()
        );
        return Err(report);
    }

    let [age, gender, education_level, years_experience] = values;
    Ok(FeatureRecord {
        age,
        gender,
        education_level,
        years_experience,
    })
}

fn check_field(raw: &Map<String, Value>, spec: &FieldSpec) -> Result<i64, String> {
    let Some(value) = raw.get(spec.name) else {
        return Err("Field required".to_string());
    };
    let Some(number) = coerce_integer(value) else {
        return Err("Input should be a valid integer".to_string());
    };
    if number < spec.min {
        return Err(format!(
            "Input should be greater than or equal to {}",
            spec.min
        ));
    }
    if number > spec.max {
        return Err(format!("Input should be less than or equal to {}", spec.max));
    }
    Ok(number)
}

/// Lax integer coercion: JSON integers, floats with zero fractional part,
/// and decimal strings are accepted. Booleans are not integers.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
