//! Asynchronous pull-request check: fetch the description, then lint it.

use std::sync::Arc;
use std::time::Duration;

use crate::lint::{
    domain::LintRun,
    error::CheckError,
    ports::DescriptionSource,
    services::Linter,
};

/// Result type for pull-request checks.
pub type CheckResult<T> = Result<T, CheckError>;

/// Awaits a [`DescriptionSource`] and runs the [`Linter`] on its output.
///
/// The fetch is the only suspension point; everything after it runs
/// synchronously.
#[derive(Debug, Clone)]
pub struct PullRequestCheck<S>
where
    S: DescriptionSource,
{
    source: Arc<S>,
    linter: Linter,
    fetch_timeout: Option<Duration>,
}

impl<S> PullRequestCheck<S>
where
    S: DescriptionSource,
{
    /// Creates a check without a fetch timeout.
    #[must_use]
    pub const fn new(source: Arc<S>, linter: Linter) -> Self {
        Self {
            source,
            linter,
            fetch_timeout: None,
        }
    }

    /// Bounds the description fetch by `timeout`.
    #[must_use]
    pub const fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Returns the configured fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout
    }

    /// Returns the linter.
    #[must_use]
    pub const fn linter(&self) -> &Linter {
        &self.linter
    }

    /// Fetches the description and lints it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Source`] when the source fails,
    /// [`CheckError::FetchTimeout`] when the fetch exceeds the configured
    /// timeout and [`CheckError::Gate`] on an internal contract violation.
    pub async fn run(&self) -> CheckResult<LintRun> {
        let origin = self.source.origin();
        tracing::debug!(%origin, "fetching pull request description");

        let description = match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch())
                .await
                .map_err(|_| {
                    tracing::warn!(%origin, timeout = ?limit, "description fetch timed out");
                    CheckError::FetchTimeout(limit)
                })??,
            None => self.source.fetch().await?,
        };

        Ok(self.linter.run(description.as_deref())?)
    }
}
