//! Error types for rule-set construction, gate decisions and input sources.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Rule
//! violations are not errors: they are reported through
//! [`super::domain::ViolationReport`].

use super::domain::RuleName;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Configuration faults detected while building a rule set or gate.
///
/// Any of these aborts construction before a single message is evaluated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleSetError {
    /// Two definitions share the same rule name.
    #[error("duplicate rule '{0}' in rule set")]
    DuplicateRule(RuleName),

    /// A rule carries parameters that cannot be evaluated.
    #[error("invalid parameters for rule '{rule}': {reason}")]
    InvalidParameters {
        /// The offending rule.
        rule: RuleName,
        /// Why the parameters were rejected.
        reason: String,
    },

    /// A rule has no renderable human-readable description.
    #[error("rule '{rule}' has no description: {reason}")]
    MissingDescription {
        /// The rule lacking a description.
        rule: RuleName,
        /// Rendering failure detail.
        reason: String,
    },
}

impl RuleSetError {
    /// Creates an invalid-parameters fault.
    #[must_use]
    pub fn invalid_parameters(rule: RuleName, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            rule,
            reason: reason.into(),
        }
    }

    /// Creates a missing-description fault.
    #[must_use]
    pub fn missing_description(rule: RuleName, reason: impl Into<String>) -> Self {
        Self::MissingDescription {
            rule,
            reason: reason.into(),
        }
    }
}

/// Internal contract violations surfaced while classifying or rendering.
///
/// These never arise from message content; they indicate that outcomes and
/// rule set disagree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// An outcome or report names a rule the rule set does not contain.
    #[error("rule '{0}' is not part of the active rule set")]
    UnknownRule(RuleName),
}

/// Error returned while parsing rule names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rule name: {0}")]
pub struct ParseRuleNameError(pub String);

/// Error returned while parsing case-style names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown case style: {0}")]
pub struct ParseTextCaseError(pub String);

/// Error returned while parsing rule levels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rule level '{0}', expected off, warning or error (0, 1 or 2)")]
pub struct ParseRuleLevelError(pub String);

/// Errors raised while loading gate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema.
    #[error("failed to parse config '{path}': {message}")]
    Parse {
        /// Path of the configuration file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A `[rules.<name>]` table names an unknown rule.
    #[error(transparent)]
    UnknownRule(#[from] ParseRuleNameError),

    /// A case list contains an unknown case style.
    #[error(transparent)]
    UnknownCase(#[from] ParseTextCaseError),

    /// A rule level is not recognised.
    #[error(transparent)]
    UnknownLevel(#[from] ParseRuleLevelError),

    /// A parameter does not apply to the rule it was given for.
    #[error("parameter '{parameter}' does not apply to rule '{rule}'")]
    UnexpectedParameter {
        /// The rule being configured.
        rule: RuleName,
        /// The parameter that is not understood by the rule.
        parameter: &'static str,
    },

    /// The resulting rule set is invalid.
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
}

/// Errors produced by description sources.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Reading the underlying input failed.
    #[error("failed to read description from {origin}: {source}")]
    Io {
        /// Human-readable origin (file path, `stdin`, ...).
        origin: String,
        /// Underlying I/O failure.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A structured payload did not have the expected shape.
    #[error("malformed payload in {origin}: {reason}")]
    Payload {
        /// Human-readable origin of the payload.
        origin: String,
        /// Why the payload was rejected.
        reason: String,
    },

    /// The input was not valid UTF-8.
    #[error("description from {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

impl SourceError {
    /// Wraps an I/O error with its origin.
    #[must_use]
    pub fn io(origin: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            origin: origin.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a malformed-payload error.
    #[must_use]
    pub fn payload(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Payload {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from the asynchronous pull-request check.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// The description could not be fetched.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The fetch did not complete in time.
    #[error("description fetch timed out after {0:?}")]
    FetchTimeout(Duration),

    /// The gate hit an internal contract violation.
    #[error(transparent)]
    Gate(#[from] GateError),
}
