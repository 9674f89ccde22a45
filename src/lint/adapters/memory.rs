//! In-memory description source for tests and embedding hosts.

use async_trait::async_trait;

use crate::lint::ports::{DescriptionSource, SourceResult};

/// Returns a fixed description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDescriptionSource {
    description: Option<String>,
}

impl StaticDescriptionSource {
    /// Creates a source that yields `description`.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Creates a source for a pull request without a description.
    #[must_use]
    pub const fn missing() -> Self {
        Self { description: None }
    }
}

#[async_trait]
impl DescriptionSource for StaticDescriptionSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        Ok(self.description.clone())
    }

    fn origin(&self) -> String {
        "memory".to_owned()
    }
}
