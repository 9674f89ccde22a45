//! Rule engine: evaluates a rule set against a parsed message.

use crate::lint::{
    domain::{Message, RuleOutcome, RuleSet},
    validation::rules,
};

/// Evaluates every rule of a rule set, independently and in order.
///
/// No rule short-circuits another: a failing rule does not stop evaluation,
/// and each outcome depends only on the message and the rule's parameters.
///
/// # Examples
///
/// ```
/// use prgate::lint::domain::{Message, RuleName, RuleSet};
/// use prgate::lint::validation::RuleEngine;
///
/// let outcomes = RuleEngine::evaluate(&RuleSet::canonical(), &Message::parse("fix:"));
/// assert_eq!(outcomes.len(), 7);
/// assert!(outcomes.iter().any(|o| o.rule == RuleName::SubjectEmpty && !o.passed));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Returns one outcome per rule, in rule-set order.
    #[must_use]
    pub fn evaluate(rule_set: &RuleSet, message: &Message) -> Vec<RuleOutcome> {
        rule_set
            .iter()
            .map(|definition| {
                let passed = rules::satisfies(&definition.rule, message);
                if !passed {
                    tracing::debug!(
                        rule = %definition.name(),
                        severity = %definition.severity,
                        "rule failed"
                    );
                }
                RuleOutcome::new(definition.name(), passed)
            })
            .collect()
    }
}
