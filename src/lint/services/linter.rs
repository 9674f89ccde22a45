//! Synchronous lint pipeline: parse, evaluate, classify, decide.

use std::sync::Arc;

use crate::lint::{
    domain::{GateDecision, LintRun, Message, RuleSet, ViolationReport},
    error::{GateError, RuleSetError},
    services::Gate,
    validation::{RuleEngine, ViolationClassifier},
};

/// Runs the rule set over a description and decides the gate.
///
/// The linter is immutable and cheap to clone; one instance can serve many
/// concurrent checks.
///
/// # Examples
///
/// ```
/// use prgate::lint::domain::{GateOutcome, RuleSet};
/// use prgate::lint::services::Linter;
///
/// let linter = Linter::new(RuleSet::canonical()).expect("canonical rules are valid");
/// let decision = linter.check(Some("chore: bump deps")).expect("known rules");
/// assert_eq!(decision.outcome, GateOutcome::Pass);
///
/// let missing = linter.check(None).expect("known rules");
/// assert_eq!(missing.outcome, GateOutcome::Fail);
/// assert_eq!(missing.messages.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Linter {
    rule_set: Arc<RuleSet>,
    gate: Gate,
}

impl Linter {
    /// Creates a linter for `rule_set`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError`] when a rule has no renderable description.
    pub fn new(rule_set: RuleSet) -> Result<Self, RuleSetError> {
        let gate = Gate::new(&rule_set)?;
        Ok(Self {
            rule_set: Arc::new(rule_set),
            gate,
        })
    }

    /// Creates a linter with the canonical catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError`] when a canonical description fails to render.
    pub fn canonical() -> Result<Self, RuleSetError> {
        Self::new(RuleSet::canonical())
    }

    /// Returns the active rule set.
    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Returns the gate used to render decisions.
    #[must_use]
    pub const fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Lints a description and returns every intermediate result.
    ///
    /// A `None` description counts as missing: the gate fails and no rule is
    /// evaluated. Empty or blank text is linted like any other description.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when outcomes and rule set disagree, which
    /// indicates a programming error rather than bad input.
    pub fn run(&self, description: Option<&str>) -> Result<LintRun, GateError> {
        let Some(text) = description else {
            tracing::info!(outcome = "fail", "pull request description is missing");
            return Ok(LintRun {
                decision: Gate::missing_input(),
                outcomes: Vec::new(),
                report: ViolationReport::default(),
            });
        };

        let message = Message::parse(text);
        let outcomes = RuleEngine::evaluate(&self.rule_set, &message);
        let report = ViolationClassifier::classify(&self.rule_set, &outcomes)?;
        let decision = self.gate.decide(true, &report)?;

        tracing::info!(
            outcome = %decision.outcome,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "pull request description checked"
        );
        Ok(LintRun {
            decision,
            outcomes,
            report,
        })
    }

    /// Lints a description and returns only the decision.
    ///
    /// # Errors
    ///
    /// See [`Linter::run`].
    pub fn check(&self, description: Option<&str>) -> Result<GateDecision, GateError> {
        self.run(description).map(|run| run.decision)
    }
}
