//! Description source backed by a CI event payload file.
//!
//! CI runners such as GitHub Actions write the triggering webhook payload to
//! a local JSON file (`GITHUB_EVENT_PATH`). This adapter only reads that
//! file; it never talks to the hosting provider.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use super::file::read_blocking;
use crate::lint::{
    error::SourceError,
    ports::{DescriptionSource, SourceResult},
};

/// Environment variable pointing at the event payload on GitHub Actions.
pub const GITHUB_EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    body: Option<String>,
}

/// Reads `pull_request.body` from an event payload file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayloadDescriptionSource {
    path: Utf8PathBuf,
}

impl EventPayloadDescriptionSource {
    /// Creates a source reading the payload at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source from `GITHUB_EVENT_PATH`, if set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(GITHUB_EVENT_PATH_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Self::new)
    }

    /// Returns the payload path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Extracts the pull-request body from an event payload document.
///
/// # Errors
///
/// Returns [`SourceError::Payload`] when the document is not JSON or is not
/// a pull-request event.
pub fn parse_event_payload(origin: &str, payload: &str) -> SourceResult<Option<String>> {
    let event: EventPayload = serde_json::from_str(payload)
        .map_err(|error| SourceError::payload(origin, error.to_string()))?;
    let pull_request = event
        .pull_request
        .ok_or_else(|| SourceError::payload(origin, "event has no pull_request object"))?;
    Ok(pull_request.body)
}

#[async_trait]
impl DescriptionSource for EventPayloadDescriptionSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        let payload = read_blocking(self.path.clone()).await?;
        parse_event_payload(self.path.as_str(), &payload)
    }

    fn origin(&self) -> String {
        format!("event payload {}", self.path)
    }
}
