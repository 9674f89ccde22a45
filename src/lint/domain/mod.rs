//! Domain types for description linting.
//!
//! Pure types with no infrastructure dependencies: the parsed message, the
//! rule catalog and the values produced by one evaluation.

mod case;
mod message;
mod report;
mod rule;
mod rule_set;

pub use case::TextCase;
pub use message::{HeaderParts, Message, is_trailer};
pub use report::{GateDecision, GateOutcome, LintRun, RuleOutcome, ViolationReport};
pub use rule::{
    DEFAULT_ALLOWED_TYPES, DEFAULT_FORBIDDEN_SUBJECT_CASES, DEFAULT_HEADER_MAX_LENGTH, Rule,
    RuleDefinition, RuleLevel, RuleName, Severity,
};
pub use rule_set::RuleSet;
