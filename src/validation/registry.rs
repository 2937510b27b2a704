//! Validation registry - central store of declared field rules

use crate::validation::{Candidate, Rule};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Rules declared for a single type: field name to ordered rule list.
pub type RuleSet = HashMap<String, Vec<Rule>>;

/// Registry mapping type identifiers to per-field rule sets.
///
/// The registry is populated once at startup through [`declare`] calls
/// (one per rule, the explicit counterpart of attaching an annotation to
/// a field) and is read-only thereafter. Declaration never fails and
/// validation never errors, it only answers with a boolean.
///
/// [`declare`]: ValidationRegistry::declare
#[derive(Debug, Default)]
pub struct ValidationRegistry {
    /// Declared rules by type identifier
    rules: HashMap<String, RuleSet>,
}

impl ValidationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule for a field of a type.
    ///
    /// Appends to any rules already declared for the field; declaring the
    /// same rule twice is allowed and only costs a redundant re-check at
    /// validation time.
    pub fn declare(&mut self, type_id: impl Into<String>, field: impl Into<String>, rule: Rule) {
        let type_id = type_id.into();
        let field = field.into();
        debug!("Declaring rule '{}' on {}.{}", rule, type_id, field);

        self.rules
            .entry(type_id)
            .or_default()
            .entry(field)
            .or_default()
            .push(rule);
    }

    /// Validate a candidate against the rules declared for its type.
    ///
    /// A type identifier with no declared rules is vacuously valid; this
    /// is an open design choice, not an omission. Otherwise the result is
    /// the AND of every declared (field, rule) check. All rules are
    /// evaluated; the result is monotonic, so short-circuiting would not
    /// change it.
    pub fn validate(&self, candidate: &Candidate) -> bool {
        let ruleset = match self.rules.get(&candidate.type_id) {
            Some(ruleset) => ruleset,
            None => {
                trace!("No rules declared for type '{}'", candidate.type_id);
                return true;
            }
        };

        let mut is_valid = true;
        for (field, rules) in ruleset {
            let value = candidate.get(field);
            for rule in rules {
                let passed = rule.check(value);
                if !passed {
                    debug!(
                        "🚫 Rule '{}' failed on {}.{}",
                        rule, candidate.type_id, field
                    );
                }
                is_valid = is_valid && passed;
            }
        }

        is_valid
    }

    /// Get the rule set declared for a type, if any
    pub fn ruleset(&self, type_id: &str) -> Option<&RuleSet> {
        self.rules.get(type_id)
    }

    /// All type identifiers with declared rules
    pub fn type_ids(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Total number of declared rules across all types
    pub fn rule_count(&self) -> usize {
        self.rules
            .values()
            .flat_map(|ruleset| ruleset.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether any rules have been declared
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The process-wide registry.
///
/// Startup code takes the write lock to declare rules, everything after
/// that only reads. There is no interleaving of the two phases in this
/// design, the lock exists so the registry can be reached from anywhere.
pub fn global() -> &'static RwLock<ValidationRegistry> {
    static GLOBAL: OnceLock<RwLock<ValidationRegistry>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(ValidationRegistry::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_registry() -> ValidationRegistry {
        let mut registry = ValidationRegistry::new();
        registry.declare("Course", "title", Rule::Required);
        registry.declare("Course", "price", Rule::Positive);
        registry
    }

    #[test]
    fn test_unregistered_type_is_vacuously_valid() {
        let registry = course_registry();
        let candidate = Candidate::new("Unregistered")
            .field("title", "")
            .field("price", -5.0);

        assert!(registry.validate(&candidate));
    }

    #[test]
    fn test_valid_course_passes() {
        let registry = course_registry();
        let candidate = Candidate::new("Course")
            .field("title", "Algebra")
            .field("price", 10.0);

        assert!(registry.validate(&candidate));
    }

    #[test]
    fn test_empty_required_field_fails() {
        let registry = course_registry();
        let candidate = Candidate::new("Course")
            .field("title", "")
            .field("price", 10.0);

        assert!(!registry.validate(&candidate));
    }

    #[test]
    fn test_non_positive_price_fails() {
        let registry = course_registry();
        let candidate = Candidate::new("Course")
            .field("title", "Algebra")
            .field("price", -5.0);

        assert!(!registry.validate(&candidate));
    }

    #[test]
    fn test_absent_required_field_fails() {
        let registry = course_registry();
        let candidate = Candidate::new("Course").field("price", 10.0);

        assert!(!registry.validate(&candidate));
    }

    #[test]
    fn test_duplicate_declaration_is_idempotent_on_result() {
        let mut registry = course_registry();
        let valid = Candidate::new("Course")
            .field("title", "Algebra")
            .field("price", 10.0);
        let invalid = Candidate::new("Course")
            .field("title", "")
            .field("price", 10.0);

        assert!(registry.validate(&valid));
        assert!(!registry.validate(&invalid));

        registry.declare("Course", "title", Rule::Required);
        assert_eq!(registry.ruleset("Course").unwrap()["title"].len(), 2);

        // Same answers, just a redundant re-check
        assert!(registry.validate(&valid));
        assert!(!registry.validate(&invalid));
    }

    #[test]
    fn test_multiple_rules_on_one_field_all_must_pass() {
        let mut registry = ValidationRegistry::new();
        registry.declare("Order", "quantity", Rule::Required);
        registry.declare("Order", "quantity", Rule::Positive);

        assert!(registry.validate(&Candidate::new("Order").field("quantity", 3.0)));
        // Truthy but not positive
        assert!(!registry.validate(&Candidate::new("Order").field("quantity", -3.0)));
        // Zero fails both
        assert!(!registry.validate(&Candidate::new("Order").field("quantity", 0.0)));
    }

    #[test]
    fn test_rule_count() {
        let registry = course_registry();
        assert_eq!(registry.rule_count(), 2);
        assert!(!registry.is_empty());
        assert_eq!(ValidationRegistry::new().rule_count(), 0);
    }
}
