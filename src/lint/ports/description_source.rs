//! Port for obtaining the pull-request description.

use async_trait::async_trait;

use crate::lint::error::SourceError;

/// Result type for description sources.
pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies the description text to check.
///
/// Fetching is the only asynchronous step of a check and always completes
/// before any parsing starts. `Ok(None)` means the pull request has no
/// description, which the gate treats as a failure of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Fetches the description.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the underlying input cannot be read or
    /// has an unexpected shape.
    async fn fetch(&self) -> SourceResult<Option<String>>;

    /// Human-readable origin used in logs.
    fn origin(&self) -> String;
}
