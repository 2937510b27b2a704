//! # Proctor - A Field-Rule Validation Registry
//!
//! Proctor keeps a process-wide registry of per-field validation rules.
//! Rules are declared once at startup, either in code or from a TOML
//! rule-set file, and any form-like record can then be checked against
//! the rules declared for its type identifier.
//!
//! ## Features
//! - Two rule tags: `required` (truthy value) and `positive` (> 0)
//! - Stable string type identifiers, no reliance on runtime type names
//! - TOML-based rule-set configuration
//! - Boolean-only validation: declaring and checking never error

pub mod catalog;
pub mod config;
pub mod validation;
