//! Rule-set configuration structures and loading.
//!
//! Rule sets can be declared in code (see [`crate::catalog`]) or loaded
//! from a TOML file. A file carries one `[[rulesets]]` table per type,
//! each with the fields and rule tags to declare. Unknown rule tags are
//! rejected at deserialization time, before anything reaches the registry.

use crate::validation::{Rule, ValidationRegistry};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rulesets: Vec<TypeRules>,
}

/// Rule declarations for a single type identifier (from TOML)
#[derive(Debug, Deserialize)]
pub struct TypeRules {
    /// Stable type identifier the rules are declared under
    pub type_id: String,

    #[serde(default)]
    pub fields: Vec<FieldRules>,
}

/// Rule declarations for a single field (from TOML)
#[derive(Debug, Deserialize)]
pub struct FieldRules {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is usable
    /// * `Err(String)` - A ruleset has an empty type id or field name
    pub fn validate(&self) -> Result<(), String> {
        for ruleset in &self.rulesets {
            if ruleset.type_id.is_empty() {
                return Err("Ruleset with empty type_id".to_string());
            }
            for field in &ruleset.fields {
                if field.name.is_empty() {
                    return Err(format!(
                        "Ruleset '{}' has a field with no name",
                        ruleset.type_id
                    ));
                }
            }
        }
        Ok(())
    }

    /// Declare every configured rule into a registry
    pub fn apply(&self, registry: &mut ValidationRegistry) {
        let mut declared = 0;
        for ruleset in &self.rulesets {
            for field in &ruleset.fields {
                for rule in &field.rules {
                    registry.declare(ruleset.type_id.clone(), field.name.clone(), *rule);
                    declared += 1;
                }
            }
        }
        info!("✅ Declared {} rule(s) from configuration", declared);
    }
}
