//! Per-invocation evaluation results: outcomes, violations and decisions.

use super::RuleName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// The evaluated rule.
    pub rule: RuleName,
    /// Whether the message satisfied the rule.
    pub passed: bool,
}

impl RuleOutcome {
    /// Creates an outcome.
    #[must_use]
    pub const fn new(rule: RuleName, passed: bool) -> Self {
        Self { rule, passed }
    }
}

/// Failed rules partitioned by severity, in rule-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// Failed rules with warning severity.
    pub warnings: Vec<RuleName>,
    /// Failed rules with error severity.
    pub errors: Vec<RuleName>,
}

impl ViolationReport {
    /// Returns `true` when at least one error-severity rule failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` when no rule failed at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Final pass/fail state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// The description may be merged.
    Pass,
    /// The description blocks the merge.
    Fail,
}

impl GateOutcome {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }

    /// Returns `true` for [`GateOutcome::Pass`].
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate outcome with the messages rendered for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Pass or fail.
    pub outcome: GateOutcome,
    /// Console lines, in display order.
    pub messages: Vec<String>,
    /// Short status line for a CI check, present when the gate fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl GateDecision {
    /// Returns `true` when the gate passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.is_pass()
    }
}

/// Everything produced by one linter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintRun {
    /// The gate decision.
    pub decision: GateDecision,
    /// One outcome per evaluated rule; empty when the rules never ran.
    pub outcomes: Vec<RuleOutcome>,
    /// Classified violations; empty when the rules never ran.
    pub report: ViolationReport,
}
