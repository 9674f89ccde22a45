//! Ordered, immutable catalog of rule definitions.

use super::{Rule, RuleDefinition, RuleName, Severity};
use crate::lint::error::RuleSetError;
use std::collections::BTreeSet;

/// An ordered collection of uniquely named rule definitions.
///
/// Iteration follows insertion order, which is also the order violations are
/// reported in. A rule set is validated once on construction and never
/// changes afterwards, so it can be shared between concurrent evaluations.
///
/// # Examples
///
/// ```
/// use prgate::lint::domain::{RuleDefinition, RuleName, RuleSet};
///
/// let rule_set = RuleSet::canonical();
/// assert_eq!(rule_set.len(), 7);
///
/// let duplicate = RuleSet::new(vec![
///     RuleDefinition::canonical(RuleName::TypeEnum),
///     RuleDefinition::canonical(RuleName::TypeEnum),
/// ]);
/// assert!(duplicate.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    definitions: Vec<RuleDefinition>,
}

impl RuleSet {
    /// Creates a rule set from definitions in reporting order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::DuplicateRule`] when two definitions share a
    /// name, or [`RuleSetError::InvalidParameters`] when a rule's parameters
    /// cannot be evaluated.
    pub fn new(definitions: Vec<RuleDefinition>) -> Result<Self, RuleSetError> {
        let mut seen = BTreeSet::new();
        for definition in &definitions {
            if !seen.insert(definition.name()) {
                return Err(RuleSetError::DuplicateRule(definition.name()));
            }
            validate_parameters(&definition.rule)?;
        }
        Ok(Self { definitions })
    }

    /// Returns the canonical catalog with default severities and parameters.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            definitions: RuleName::ALL
                .into_iter()
                .map(RuleDefinition::canonical)
                .collect(),
        }
    }

    /// Iterates over definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleDefinition> {
        self.definitions.iter()
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: RuleName) -> Option<&RuleDefinition> {
        self.definitions.iter().find(|definition| definition.name() == name)
    }

    /// Returns the severity of `name`, if the rule is part of this set.
    #[must_use]
    pub fn severity_of(&self, name: RuleName) -> Option<Severity> {
        self.get(name).map(|definition| definition.severity)
    }

    /// Returns whether the set contains `name`.
    #[must_use]
    pub fn contains(&self, name: RuleName) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` when the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleDefinition;
    type IntoIter = std::slice::Iter<'a, RuleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_parameters(rule: &Rule) -> Result<(), RuleSetError> {
    match rule {
        Rule::HeaderMaxLength { max_length: 0 } => Err(RuleSetError::invalid_parameters(
            rule.name(),
            "max_length must be greater than zero",
        )),
        Rule::SubjectCase { forbidden } if forbidden.is_empty() => Err(
            RuleSetError::invalid_parameters(rule.name(), "at least one case must be forbidden"),
        ),
        Rule::TypeEnum { allowed } if allowed.is_empty() => Err(RuleSetError::invalid_parameters(
            rule.name(),
            "at least one type must be allowed",
        )),
        Rule::TypeEnum { allowed } if allowed.iter().any(|kind| kind.trim().is_empty()) => Err(
            RuleSetError::invalid_parameters(rule.name(), "allowed types must not be blank"),
        ),
        _ => Ok(()),
    }
}
