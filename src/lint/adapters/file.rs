//! File-backed description source using capability-scoped filesystem access.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::lint::{
    error::SourceError,
    ports::{DescriptionSource, SourceResult},
};

/// Reads the description from a UTF-8 text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptionSource {
    path: Utf8PathBuf,
}

impl FileDescriptionSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[async_trait]
impl DescriptionSource for FileDescriptionSource {
    async fn fetch(&self) -> SourceResult<Option<String>> {
        let path = self.path.clone();
        let contents = read_blocking(path).await?;
        Ok(Some(contents))
    }

    fn origin(&self) -> String {
        self.path.to_string()
    }
}

/// Reads a UTF-8 file on the blocking thread pool.
pub(crate) async fn read_blocking(path: Utf8PathBuf) -> SourceResult<String> {
    let origin = path.to_string();
    tokio::task::spawn_blocking(move || read_utf8_file(&path))
        .await
        .map_err(|error| SourceError::io(origin, io::Error::other(error)))?
}

/// Reads a UTF-8 file through a directory capability for its parent.
///
/// # Errors
///
/// Returns [`SourceError::InvalidUtf8`] for non UTF-8 content and
/// [`SourceError::Io`] for any other read failure.
pub fn read_utf8_file(path: &Utf8Path) -> SourceResult<String> {
    let origin = path.to_string();
    let file_name = path.file_name().ok_or_else(|| {
        SourceError::io(origin.clone(), io::Error::other("path must include a file name"))
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| SourceError::io(origin.clone(), error))?;
    dir.read_to_string(file_name).map_err(|error| {
        if error.kind() == io::ErrorKind::InvalidData {
            SourceError::InvalidUtf8(origin)
        } else {
            SourceError::io(origin, error)
        }
    })
}
