//! Description source backed by an environment variable.

use async_trait::async_trait;
use std::env::{self, VarError};

use crate::lint::{
    error::SourceError,
    ports::{DescriptionSource, SourceResult},
};

/// Reads the description from a named environment variable.
///
/// An unset variable means the description is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDescriptionSource {
    variable: String,
}

impl EnvDescriptionSource {
    /// Creates a source reading `variable`.
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

#[async_trait]
impl DescriptionSource for EnvDescriptionSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        match env::var(&self.variable) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(SourceError::InvalidUtf8(self.origin())),
        }
    }

    fn origin(&self) -> String {
        format!("environment variable {}", self.variable)
    }
}
