//! Rule names, severities and parameterised rule definitions.

use super::TextCase;
use crate::lint::error::{ParseRuleLevelError, ParseRuleNameError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum header length in characters.
pub const DEFAULT_HEADER_MAX_LENGTH: usize = 100;

/// Commit types accepted by `type-enum` unless configured otherwise.
pub const DEFAULT_ALLOWED_TYPES: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Case styles rejected by `subject-case` unless configured otherwise.
pub const DEFAULT_FORBIDDEN_SUBJECT_CASES: [TextCase; 4] = [
    TextCase::Sentence,
    TextCase::Start,
    TextCase::Pascal,
    TextCase::Upper,
];

/// The closed set of rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    /// A body must follow the header after exactly one blank line.
    BodyLeadingBlank,
    /// The header must not exceed a maximum length.
    HeaderMaxLength,
    /// The commit type must be written in a given case.
    TypeCase,
    /// A footer must follow the preceding text after exactly one blank line.
    FooterLeadingBlank,
    /// The subject must not be empty.
    SubjectEmpty,
    /// The subject must not be written in any forbidden case.
    SubjectCase,
    /// The commit type must be one of an allowed set.
    TypeEnum,
}

impl RuleName {
    /// Every rule name in canonical declaration order.
    pub const ALL: [Self; 7] = [
        Self::BodyLeadingBlank,
        Self::HeaderMaxLength,
        Self::TypeCase,
        Self::FooterLeadingBlank,
        Self::SubjectEmpty,
        Self::SubjectCase,
        Self::TypeEnum,
    ];

    /// Returns the canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BodyLeadingBlank => "body-leading-blank",
            Self::HeaderMaxLength => "header-max-length",
            Self::TypeCase => "type-case",
            Self::FooterLeadingBlank => "footer-leading-blank",
            Self::SubjectEmpty => "subject-empty",
            Self::SubjectCase => "subject-case",
            Self::TypeEnum => "type-enum",
        }
    }

    /// Returns the severity the canonical catalog assigns to this rule.
    #[must_use]
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::BodyLeadingBlank | Self::FooterLeadingBlank => Severity::Warning,
            Self::HeaderMaxLength
            | Self::TypeCase
            | Self::SubjectEmpty
            | Self::SubjectCase
            | Self::TypeEnum => Severity::Error,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RuleName {
    type Error = ParseRuleNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value.trim())
            .ok_or_else(|| ParseRuleNameError(value.to_owned()))
    }
}

/// How strongly a failed rule affects the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Reported, but never fails the gate on its own.
    Warning,
    /// Fails the gate.
    Error,
}

impl Severity {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured level of a rule: disabled or active with a severity.
///
/// Mirrors commitlint's `0 | 1 | 2` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleLevel {
    /// The rule is removed from the rule set.
    Off,
    /// The rule is active with the given severity.
    Active(Severity),
}

impl RuleLevel {
    /// Returns the active severity, or `None` when the rule is off.
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Active(severity) => Some(severity),
        }
    }
}

impl TryFrom<&str> for RuleLevel {
    type Error = ParseRuleLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(Self::Off),
            "warning" | "warn" | "1" => Ok(Self::Active(Severity::Warning)),
            "error" | "2" => Ok(Self::Active(Severity::Error)),
            _ => Err(ParseRuleLevelError(value.to_owned())),
        }
    }
}

impl TryFrom<i64> for RuleLevel {
    type Error = ParseRuleLevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Active(Severity::Warning)),
            2 => Ok(Self::Active(Severity::Error)),
            other => Err(ParseRuleLevelError(other.to_string())),
        }
    }
}

/// A rule together with its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Rule {
    /// See [`RuleName::BodyLeadingBlank`].
    BodyLeadingBlank,
    /// See [`RuleName::HeaderMaxLength`].
    HeaderMaxLength {
        /// Largest accepted header length in characters.
        max_length: usize,
    },
    /// See [`RuleName::TypeCase`].
    TypeCase {
        /// Required case of the type token.
        case: TextCase,
    },
    /// See [`RuleName::FooterLeadingBlank`].
    FooterLeadingBlank,
    /// See [`RuleName::SubjectEmpty`].
    SubjectEmpty,
    /// See [`RuleName::SubjectCase`].
    SubjectCase {
        /// Case styles the subject must not match.
        forbidden: Vec<TextCase>,
    },
    /// See [`RuleName::TypeEnum`].
    TypeEnum {
        /// Accepted type tokens, compared case-sensitively.
        allowed: Vec<String>,
    },
}

impl Rule {
    /// Returns the rule with its canonical parameters.
    #[must_use]
    pub fn canonical(name: RuleName) -> Self {
        match name {
            RuleName::BodyLeadingBlank => Self::BodyLeadingBlank,
            RuleName::HeaderMaxLength => Self::HeaderMaxLength {
                max_length: DEFAULT_HEADER_MAX_LENGTH,
            },
            RuleName::TypeCase => Self::TypeCase {
                case: TextCase::Lower,
            },
            RuleName::FooterLeadingBlank => Self::FooterLeadingBlank,
            RuleName::SubjectEmpty => Self::SubjectEmpty,
            RuleName::SubjectCase => Self::SubjectCase {
                forbidden: DEFAULT_FORBIDDEN_SUBJECT_CASES.to_vec(),
            },
            RuleName::TypeEnum => Self::TypeEnum {
                allowed: DEFAULT_ALLOWED_TYPES.iter().map(|kind| (*kind).to_owned()).collect(),
            },
        }
    }

    /// Returns the identifier of this rule.
    #[must_use]
    pub const fn name(&self) -> RuleName {
        match self {
            Self::BodyLeadingBlank => RuleName::BodyLeadingBlank,
            Self::HeaderMaxLength { .. } => RuleName::HeaderMaxLength,
            Self::TypeCase { .. } => RuleName::TypeCase,
            Self::FooterLeadingBlank => RuleName::FooterLeadingBlank,
            Self::SubjectEmpty => RuleName::SubjectEmpty,
            Self::SubjectCase { .. } => RuleName::SubjectCase,
            Self::TypeEnum { .. } => RuleName::TypeEnum,
        }
    }
}

/// A rule with the severity it reports at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// The rule and its parameters.
    #[serde(flatten)]
    pub rule: Rule,
    /// Severity of a failure.
    pub severity: Severity,
}

impl RuleDefinition {
    /// Creates a definition.
    #[must_use]
    pub const fn new(rule: Rule, severity: Severity) -> Self {
        Self { rule, severity }
    }

    /// Returns the canonical definition for `name`.
    #[must_use]
    pub fn canonical(name: RuleName) -> Self {
        Self::new(Rule::canonical(name), name.default_severity())
    }

    /// Returns the identifier of the wrapped rule.
    #[must_use]
    pub const fn name(&self) -> RuleName {
        self.rule.name()
    }
}
