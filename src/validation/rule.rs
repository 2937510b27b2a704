//! Rule tags and their evaluation semantics

use crate::validation::FieldValue;
use serde::{Deserialize, Serialize};

/// A named validation check applicable to a single field.
///
/// Rules are declared per `(type id, field)` pair in the
/// [`ValidationRegistry`](crate::validation::ValidationRegistry) and
/// evaluated against the field's value at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Field must hold a truthy value (non-empty string, non-zero number).
    Required,
    /// Field must compare numerically strictly greater than zero.
    Positive,
}

impl Rule {
    /// Evaluate this rule against a single field value.
    ///
    /// # Arguments
    /// * `value` - The field value taken from the candidate
    ///
    /// # Returns
    /// * `true` - The value satisfies the rule
    /// * `false` - The value fails the rule (including absent values)
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Rule::Required => value.is_truthy(),
            // NaN comparisons are false, so unparsable text fails here
            Rule::Positive => value.as_number() > 0.0,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::Positive => write!(f, "positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_truthiness() {
        assert!(Rule::Required.check(&FieldValue::Text("Algebra".to_string())));
        assert!(Rule::Required.check(&FieldValue::Number(10.0)));
        assert!(Rule::Required.check(&FieldValue::Number(-5.0)));
        assert!(Rule::Required.check(&FieldValue::Flag(true)));

        assert!(!Rule::Required.check(&FieldValue::Text(String::new())));
        assert!(!Rule::Required.check(&FieldValue::Number(0.0)));
        assert!(!Rule::Required.check(&FieldValue::Number(f64::NAN)));
        assert!(!Rule::Required.check(&FieldValue::Flag(false)));
        assert!(!Rule::Required.check(&FieldValue::Absent));
    }

    #[test]
    fn test_positive_numeric_comparison() {
        assert!(Rule::Positive.check(&FieldValue::Number(10.0)));
        assert!(Rule::Positive.check(&FieldValue::Number(0.01)));
        assert!(Rule::Positive.check(&FieldValue::Text("19".to_string())));

        assert!(!Rule::Positive.check(&FieldValue::Number(0.0)));
        assert!(!Rule::Positive.check(&FieldValue::Number(-5.0)));
        assert!(!Rule::Positive.check(&FieldValue::Text("not a number".to_string())));
        assert!(!Rule::Positive.check(&FieldValue::Absent));
    }

    #[test]
    fn test_rule_names_round_trip() {
        let rule: Rule = serde_json::from_str("\"required\"").unwrap();
        assert_eq!(rule, Rule::Required);
        assert_eq!(rule.to_string(), "required");

        let rule: Rule = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(rule, Rule::Positive);
        assert_eq!(rule.to_string(), "positive");
    }

    #[test]
    fn test_unknown_rule_name_rejected() {
        let result: Result<Rule, _> = serde_json::from_str("\"uppercase\"");
        assert!(result.is_err());
    }
}
