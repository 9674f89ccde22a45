//! Partitions rule outcomes into warnings and errors.

use crate::lint::{
    domain::{RuleOutcome, RuleSet, Severity, ViolationReport},
    error::GateError,
};

/// Classifies failed outcomes by the severity declared in the rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViolationClassifier;

impl ViolationClassifier {
    /// Builds a violation report from engine outcomes.
    ///
    /// Passed outcomes are dropped. Both lists follow rule-set declaration
    /// order regardless of the order the outcomes arrive in.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::UnknownRule`] when an outcome names a rule that
    /// is not part of `rule_set`.
    pub fn classify(
        rule_set: &RuleSet,
        outcomes: &[RuleOutcome],
    ) -> Result<ViolationReport, GateError> {
        if let Some(stray) = outcomes
            .iter()
            .find(|outcome| !rule_set.contains(outcome.rule))
        {
            return Err(GateError::UnknownRule(stray.rule));
        }

        let mut report = ViolationReport::default();
        for definition in rule_set {
            let failed = outcomes
                .iter()
                .any(|outcome| outcome.rule == definition.name() && !outcome.passed);
            if !failed {
                continue;
            }
            match definition.severity {
                Severity::Error => report.errors.push(definition.name()),
                Severity::Warning => report.warnings.push(definition.name()),
            }
        }
        Ok(report)
    }
}
