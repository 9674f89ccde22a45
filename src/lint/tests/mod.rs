//! Unit tests for the lint module.
//!
//! Tests are organised by pipeline stage, covering happy paths, violation
//! ordering, configuration faults and the asynchronous fetch boundary.

mod check_tests;
mod linter_tests;
