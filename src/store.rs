//! Bookmark persistence
//!
//! Every operation goes back to disk; nothing is cached between calls.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::bookmark::{Bookmark, BookmarkDocument};

/// Storage interface for the bookmark list
pub trait BookmarkStore {
    /// Read the full list. A store that was never written yields an empty list.
    fn load(&self) -> Result<Vec<Bookmark>>;

    /// Replace the full list
    fn save(&self, bookmarks: &[Bookmark]) -> Result<()>;

    /// First bookmark whose name matches exactly
    fn find_by_name(&self, name: &str) -> Result<Option<Bookmark>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|bookmark| bookmark.name == name))
    }
}

/// Store backed by a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the whole document; a missing or blank file is an empty document
    fn read_document(&self) -> Result<BookmarkDocument> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BookmarkDocument::default())
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read bookmark file: {}", self.path.display())
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BookmarkDocument::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse bookmark file: {}", self.path.display()))
    }
}

impl BookmarkStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Bookmark>> {
        Ok(self.read_document()?.bookmarks)
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create bookmark directory: {}", parent.display())
            })?;
        }

        // Fields owned by other writers of the same file survive the rewrite
        let mut document = self.read_document()?;
        document.bookmarks = bookmarks.to_vec();
        let mut content =
            serde_json::to_string_pretty(&document).context("Failed to serialize bookmarks")?;
        content.push('\n');

        // Write beside the target and rename so a crash never leaves a truncated file
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write bookmark file: {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to replace bookmark file: {}", self.path.display())
        })?;

        Ok(())
    }
}
