//! Bookmark entity and path resolution
//!
//! A bookmark is a `(name, path)` pair. Paths are always stored in absolute,
//! lexically normalized form.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A named reference to a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub path: PathBuf,
}

impl Bookmark {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// On-disk document holding the bookmark list
///
/// Top-level fields other than `bookmarks` are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDocument {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Resolve the directory a new bookmark should point at
///
/// - `None` resolves to `cwd`
/// - Absolute input is used verbatim
/// - Relative input is joined onto `cwd` and normalized lexically
///
/// Absolute input keeps its `..` components: through a symlink, `link/..`
/// names the parent of the link target, which only the kernel can resolve.
#[must_use]
pub fn resolve_target_path(input: Option<&str>, cwd: &Path) -> PathBuf {
    let Some(raw) = input else {
        return cwd.to_path_buf();
    };

    let candidate = Path::new(raw);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        normalize_path_lexically(&cwd.join(candidate))
    }
}

/// Resolve `.` and `..` components without touching the filesystem
#[must_use]
pub fn normalize_path_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            // RootDir, Prefix or Normal
            _ => normalized.push(component),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(Component::CurDir);
    }
    normalized
}
