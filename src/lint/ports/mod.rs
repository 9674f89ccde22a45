//! Port trait definitions for the lint subsystem.
//!
//! Ports define what the core needs from the outside world. Adapters in
//! [`super::adapters`] implement them.

pub mod description_source;

pub use description_source::{DescriptionSource, SourceResult};
