//! Rule evaluation.
//!
//! Individual rule predicates, the engine that runs them over a rule set and
//! the classifier that sorts failures by severity.

pub mod classifier;
pub mod engine;
pub mod rules;

pub use classifier::ViolationClassifier;
pub use engine::RuleEngine;
