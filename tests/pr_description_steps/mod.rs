//! Step definitions for pull-request description gate scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
