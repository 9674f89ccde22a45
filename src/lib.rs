//! prgate: conventional-commit style checks for pull-request descriptions.
//!
//! This crate validates a pull request's description against a configurable
//! set of commit-message rules and turns the result into a pass/fail
//! decision for a CI check.
//!
//! # Architecture
//!
//! prgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure parsing and rule logic with no I/O
//! - **Ports**: The asynchronous description-source boundary
//! - **Adapters**: Files, CI event payloads, environment variables, stdin
//!
//! # Modules
//!
//! - [`lint`]: Message parsing, rule evaluation and the CI gate

pub mod lint;
