//! Field-rule validation for Proctor
//!
//! This module provides a process-wide registry of per-field validation
//! rules. Types declare rules once at startup, candidates are checked
//! against the rules declared for their type identifier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Validation Registry               │
//! ├─────────────────────────────────────────┤
//! │  • Declare rules per (type, field)      │
//! │  • Evaluate candidates to a boolean     │
//! └────────┬────────────────────────────────┘
//!          │
//!          ├──> required  (field must be truthy)
//!          └──> positive  (field must be > 0)
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use proctor::validation::{Candidate, Rule, ValidationRegistry};
//!
//! // Declarations run once at startup
//! let mut registry = ValidationRegistry::new();
//! registry.declare("Course", "title", Rule::Required);
//! registry.declare("Course", "price", Rule::Positive);
//!
//! // Validation only reads
//! let course = Candidate::new("Course")
//!     .field("title", "Algebra")
//!     .field("price", 10.0);
//! assert!(registry.validate(&course));
//! ```

pub mod candidate;
pub mod registry;
pub mod rule;

// Re-export commonly used types
pub use candidate::{Candidate, FieldValue};
pub use registry::{global, RuleSet, ValidationRegistry};
pub use rule::Rule;
