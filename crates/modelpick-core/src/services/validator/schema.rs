//! Descriptor schema checks over raw JSON.
//!
//! The validator reads descriptors back from JSON rather than trusting the
//! typed form, so it also catches artifacts written by older runs or edited
//! by hand.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::UNKNOWN;

/// Fields every descriptor must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "family", "arch", "format", "param_size"];

/// Fields where `"unknown"` means the packaging step needs manual input.
const SOFT_FIELDS: [&str; 2] = ["family", "param_size"];

/// Placeholder used when a descriptor has no readable `id`.
const MISSING_ID: &str = "<no id>";

/// Hard schema failure; fails the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("Expected a JSON array of descriptors, got {found}")]
    NotAnArray { found: &'static str },

    #[error("Descriptor {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Descriptor {index} ({model_id}) is missing required field '{field}'")]
    MissingField {
        index: usize,
        model_id: String,
        field: &'static str,
    },
}

/// Soft finding that does not fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// `family` or `param_size` is `"unknown"`.
    UnknownField {
        model_id: String,
        field: &'static str,
    },
    /// `size_gb` is missing, null or zero.
    SizeUnavailable { model_id: String },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { model_id, field } => {
                write!(f, "{model_id}: {field} is unknown (may need manual specification)")
            }
            Self::SizeUnavailable { model_id } => write!(f, "{model_id}: size_gb not available"),
        }
    }
}

/// One checked field with its display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: &'static str,
    pub value: String,
    /// The value is present but needs attention.
    pub warning: bool,
}

/// Per-descriptor check results.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCheck {
    pub index: usize,
    pub model_id: String,
    pub fields: Vec<FieldCheck>,
    /// `size_gb` when it is a positive number.
    pub size_gb: Option<f64>,
}

impl ModelCheck {
    /// Display value of a checked field.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|check| check.field == field)
            .map(|check| check.value.as_str())
    }
}

/// Result of a passing schema check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaReport {
    pub models: Vec<ModelCheck>,
    pub warnings: Vec<SchemaWarning>,
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn check_model(index: usize, object: &Map<String, Value>) -> Result<ModelCheck, SchemaViolation> {
    let model_id = object
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(MISSING_ID)
        .to_string();

    let mut fields = Vec::with_capacity(REQUIRED_FIELDS.len());
    for field in REQUIRED_FIELDS {
        let Some(value) = object.get(field) else {
            return Err(SchemaViolation::MissingField {
                index,
                model_id,
                field,
            });
        };
        let value = display_value(value);
        let warning = SOFT_FIELDS.contains(&field) && value == UNKNOWN;
        fields.push(FieldCheck {
            field,
            value,
            warning,
        });
    }

    let size_gb = object
        .get("size_gb")
        .and_then(Value::as_f64)
        .filter(|size| *size > 0.0);

    Ok(ModelCheck {
        index,
        model_id,
        fields,
        size_gb,
    })
}

/// Check a descriptor document.
///
/// The first descriptor missing a required field fails the whole batch,
/// even when every other descriptor is valid. Presence is what counts: a
/// field holding `null` is present.
pub fn check_schema(document: &Value) -> Result<SchemaReport, SchemaViolation> {
    let Some(items) = document.as_array() else {
        return Err(SchemaViolation::NotAnArray {
            found: json_kind(document),
        });
    };

    let mut report = SchemaReport::default();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(SchemaViolation::NotAnObject { index });
        };

        let check = check_model(index, object)?;

        report.warnings.extend(
            check
                .fields
                .iter()
                .filter(|f| f.warning)
                .map(|f| SchemaWarning::UnknownField {
                    model_id: check.model_id.clone(),
                    field: f.field,
                }),
        );
        if check.size_gb.is_none() {
            report.warnings.push(SchemaWarning::SizeUnavailable {
                model_id: check.model_id.clone(),
            });
        }

        report.models.push(check);
    }

    Ok(report)
}
