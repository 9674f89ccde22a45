//! Final pass/fail decision and console rendering.

use std::collections::BTreeMap;

use crate::lint::{
    domain::{GateDecision, GateOutcome, RuleName, RuleSet, ViolationReport},
    error::{GateError, RuleSetError},
    services::descriptions,
};

/// Banner printed before the list of error-severity violations.
pub const FAILURE_BANNER: &str = "❌ FAILURE. Found commit rules violations! Errors:";
/// Banner printed before the list of warning-severity violations.
pub const WARNING_BANNER: &str = "❗ Warnings:";
/// Prefix of each error line.
pub const ERROR_MARKER: &str = "❌";
/// Prefix of each warning line.
pub const WARNING_MARKER: &str = "❗";
/// Error line reporting a missing description.
pub const MISSING_DESCRIPTION_ERROR: &str = "❌ ERROR: PR needs to have description!";
/// The single message emitted when the description is missing: the failure
/// banner followed by [`MISSING_DESCRIPTION_ERROR`] on its own line.
pub const MISSING_DESCRIPTION_MESSAGE: &str =
    "❌ FAILURE. Found commit rules violations! Errors:\n❌ ERROR: PR needs to have description!";
/// CI status summary when the description is missing.
pub const MISSING_DESCRIPTION_SUMMARY: &str = "PR description needed";
/// CI status summary when error-severity rules failed.
pub const ERRORS_FOUND_SUMMARY: &str = "Errors found";

/// Turns a violation report into a [`GateDecision`].
///
/// Descriptions for every rule of the rule set are rendered up front, so a
/// rule without a description is a construction-time fault.
#[derive(Debug, Clone)]
pub struct Gate {
    descriptions: BTreeMap<RuleName, String>,
}

impl Gate {
    /// Creates a gate for the rules of `rule_set`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::MissingDescription`] when a rule's description
    /// cannot be rendered.
    pub fn new(rule_set: &RuleSet) -> Result<Self, RuleSetError> {
        let rendered = rule_set
            .iter()
            .map(|definition| {
                descriptions::render(&definition.rule).map(|text| (definition.name(), text))
            })
            .collect::<Result<BTreeMap<_, _>, RuleSetError>>()?;
        Ok(Self {
            descriptions: rendered,
        })
    }

    /// Returns the rendered description of a rule.
    #[must_use]
    pub fn description(&self, name: RuleName) -> Option<&str> {
        self.descriptions.get(&name).map(String::as_str)
    }

    /// Decides the gate outcome.
    ///
    /// A missing input fails immediately with a single message. Otherwise
    /// warnings are listed first, then errors; only errors fail the gate.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::UnknownRule`] when the report names a rule this
    /// gate has no description for.
    pub fn decide(
        &self,
        input_present: bool,
        report: &ViolationReport,
    ) -> Result<GateDecision, GateError> {
        if !input_present {
            return Ok(Self::missing_input());
        }

        let mut messages = Vec::new();
        if !report.warnings.is_empty() {
            messages.push(WARNING_BANNER.to_owned());
            messages.extend(self.render_lines(WARNING_MARKER, &report.warnings)?);
        }

        if !report.has_errors() {
            return Ok(GateDecision {
                outcome: GateOutcome::Pass,
                messages,
                summary: None,
            });
        }

        messages.push(FAILURE_BANNER.to_owned());
        messages.extend(self.render_lines(ERROR_MARKER, &report.errors)?);
        Ok(GateDecision {
            outcome: GateOutcome::Fail,
            messages,
            summary: Some(ERRORS_FOUND_SUMMARY.to_owned()),
        })
    }

    /// Returns the decision for a missing description.
    #[must_use]
    pub fn missing_input() -> GateDecision {
        GateDecision {
            outcome: GateOutcome::Fail,
            messages: vec![MISSING_DESCRIPTION_MESSAGE.to_owned()],
            summary: Some(MISSING_DESCRIPTION_SUMMARY.to_owned()),
        }
    }

    fn render_lines(&self, marker: &str, rules: &[RuleName]) -> Result<Vec<String>, GateError> {
        rules
            .iter()
            .map(|rule| {
                self.description(*rule)
                    .map(|description| format!("{marker} {description}"))
                    .ok_or(GateError::UnknownRule(*rule))
            })
            .collect()
    }
}
