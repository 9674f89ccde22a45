//! Description source reading standard input.

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::lint::{
    error::SourceError,
    ports::{DescriptionSource, SourceResult},
};

/// Reads the whole of stdin; empty input is an empty description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdinDescriptionSource;

#[async_trait]
impl DescriptionSource for StdinDescriptionSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        let mut buffer = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buffer)
            .await
            .map_err(|error| SourceError::io(self.origin(), error))?;
        let text = String::from_utf8(buffer).map_err(|_| SourceError::InvalidUtf8(self.origin()))?;
        Ok(Some(text))
    }

    fn origin(&self) -> String {
        "stdin".to_owned()
    }
}
