//! Candidate objects - the data passed to validation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A loosely-typed field value, as produced by form-like input.
///
/// Form fields arrive as text and are coerced on demand, so the coercion
/// rules here mirror what a text input would yield: an empty string is
/// falsy, text that does not parse as a number coerces to NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A text field value
    Text(String),
    /// A numeric field value
    Number(f64),
    /// A boolean field value
    Flag(bool),
    /// No value was supplied for the field
    Absent,
}

impl FieldValue {
    /// Truthiness of the value.
    ///
    /// Non-empty text, non-zero (and non-NaN) numbers, and `true` flags
    /// are truthy; everything else, including an absent value, is falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Flag(b) => *b,
            FieldValue::Absent => false,
        }
    }

    /// Coerce the value to a number for numeric comparisons.
    ///
    /// Text parses as f64, anything unparsable becomes NaN. Flags coerce
    /// to 1.0/0.0, and an absent value is NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            FieldValue::Number(n) => *n,
            FieldValue::Flag(true) => 1.0,
            FieldValue::Flag(false) => 0.0,
            FieldValue::Absent => f64::NAN,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// A record to be checked against the registry.
///
/// Carries a stable type identifier (the registry key) and a set of named
/// fields. The type identifier is passed explicitly rather than derived
/// from any runtime type name, so renaming a Rust type cannot silently
/// detach it from its declared rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable type identifier, the key into the registry
    pub type_id: String,

    /// Named field values
    pub fields: HashMap<String, FieldValue>,
}

impl Candidate {
    /// Create a candidate with no fields
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a field value (builder style)
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value; fields never set read as absent
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&FieldValue::Absent)
    }

    /// Build a candidate from a JSON object.
    ///
    /// # Arguments
    /// * `type_id` - Stable type identifier for registry lookup
    /// * `value` - A JSON object; string/number/bool members map to field
    ///   values, `null` maps to an absent value
    ///
    /// # Returns
    /// * `Ok(Candidate)` - The mapped candidate
    /// * `Err(String)` - If `value` is not a JSON object or a member is a
    ///   nested array/object
    pub fn from_json(
        type_id: impl Into<String>,
        value: &serde_json::Value,
    ) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| "Candidate JSON must be an object".to_string())?;

        let mut candidate = Candidate::new(type_id);
        for (name, member) in obj {
            let field = match member {
                serde_json::Value::String(s) => FieldValue::Text(s.clone()),
                serde_json::Value::Number(n) => {
                    FieldValue::Number(n.as_f64().unwrap_or(f64::NAN))
                }
                serde_json::Value::Bool(b) => FieldValue::Flag(*b),
                serde_json::Value::Null => FieldValue::Absent,
                other => {
                    return Err(format!(
                        "Field '{}' has unsupported JSON type: {}",
                        name, other
                    ));
                }
            };
            candidate.fields.insert(name.clone(), field);
        }

        Ok(candidate)
    }
}
