//! Configuration module for Proctor
//!
//! This module handles loading TOML-based rule-set files and applying
//! their declarations to a validation registry.

mod config;

pub use config::{Config, FieldRules, TypeRules};
