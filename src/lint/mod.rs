//! Pull-request description linting and CI gating.
//!
//! A description is parsed into header, body and footer, checked against an
//! ordered rule set, and the failed rules are split by severity. The gate
//! fails when any error-severity rule failed or when the description is
//! missing. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Rule predicates, evaluation and classification in [`validation`]
//! - The description-source port in [`ports`]
//! - Source adapters in [`adapters`]
//! - Gate, linter and asynchronous check in [`services`]
//! - TOML configuration in [`config`]
//!
//! # Examples
//!
//! ```
//! use prgate::lint::services::{Linter, FAILURE_BANNER};
//!
//! let linter = Linter::canonical().expect("canonical rules are valid");
//! let decision = linter.check(Some("Feat: add x")).expect("known rules");
//!
//! assert!(!decision.passed());
//! assert_eq!(decision.messages.first().map(String::as_str), Some(FAILURE_BANNER));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
