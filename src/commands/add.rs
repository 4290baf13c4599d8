//! Add command - Bookmark a directory under a name

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::color;
use crate::domain::bookmark::{resolve_target_path, Bookmark};
use crate::store::BookmarkStore;

/// Result of an add request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Bookmark stored
    Added(Bookmark),
    /// Name already taken; carries the existing bookmark
    Duplicate(Bookmark),
    /// Resolved path does not exist or cannot be inspected
    InvalidPath(PathBuf),
    /// Resolved path exists but is not a directory
    NotADirectory(PathBuf),
}

/// Validate and store a new bookmark
///
/// `path` defaults to `cwd`; relative paths are joined onto it.
/// Only `AddOutcome::Added` modifies the store.
///
/// # Errors
/// Returns an error if the store cannot be read or written
pub fn add_bookmark(
    store: &dyn BookmarkStore,
    name: &str,
    path: Option<&str>,
    cwd: &Path,
) -> Result<AddOutcome> {
    let target = resolve_target_path(path, cwd);

    if let Some(existing) = store.find_by_name(name)? {
        return Ok(AddOutcome::Duplicate(existing));
    }

    // Follows symlinks: a link to a directory is a valid target
    match std::fs::metadata(&target) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Ok(AddOutcome::NotADirectory(target)),
        Err(_) => return Ok(AddOutcome::InvalidPath(target)),
    }

    let bookmark = Bookmark::new(name, target);
    let mut bookmarks = store.load()?;
    bookmarks.push(bookmark.clone());
    store.save(&bookmarks)?;

    Ok(AddOutcome::Added(bookmark))
}

/// Create a bookmark and report the outcome
///
/// # Errors
/// Returns an error if:
/// - The current directory cannot be determined
/// - The store cannot be read or written
pub fn cmd_add(
    store: &dyn BookmarkStore,
    name: &str,
    path: Option<&str>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    match add_bookmark(store, name, path, &cwd)? {
        AddOutcome::Added(bookmark) => eprintln!(
            "{}",
            color::success(
                color_mode,
                format!("{} was created at {}", bookmark.name, bookmark.path.display())
            )
        ),
        AddOutcome::Duplicate(existing) => eprintln!(
            "{}",
            color::error(
                color_mode,
                format!(
                    "{} already exists at {}",
                    existing.name,
                    existing.path.display()
                )
            )
        ),
        AddOutcome::InvalidPath(target) => eprintln!(
            "{}",
            color::error(
                color_mode,
                format!("{} is not a valid path", target.display())
            )
        ),
        AddOutcome::NotADirectory(target) => eprintln!(
            "{}",
            color::error(
                color_mode,
                format!("{} is not a directory", target.display())
            )
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_add_appends_bookmark() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::default();

        let outcome = add_bookmark(&store, "proj", None, temp.path()).unwrap();

        let expected = Bookmark::new("proj", temp.path());
        assert_eq!(outcome, AddOutcome::Added(expected.clone()));
        assert_eq!(store.snapshot(), vec![expected]);
    }

    #[test]
    fn test_add_dot_resolves_to_cwd() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::default();

        add_bookmark(&store, "a", Some("."), temp.path()).unwrap();

        assert_eq!(store.snapshot()[0].path, temp.path());
    }

    #[test]
    fn test_add_relative_path() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        let store = MemoryStore::default();

        add_bookmark(&store, "sub", Some("sub"), temp.path()).unwrap();

        assert_eq!(store.snapshot()[0].path, temp.path().join("sub"));
    }

    #[test]
    fn test_add_absolute_path_used_verbatim() {
        let temp = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let store = MemoryStore::default();
        let raw = target.path().to_str().unwrap();

        add_bookmark(&store, "abs", Some(raw), temp.path()).unwrap();

        assert_eq!(store.snapshot()[0].path, target.path());
    }

    #[test]
    fn test_add_absolute_path_with_parent_component_stored_as_typed() {
        let cwd = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::fs::create_dir(target.path().join("inner")).unwrap();
        let typed = target.path().join("inner").join("..");
        let store = MemoryStore::default();

        let outcome =
            add_bookmark(&store, "p", Some(typed.to_str().unwrap()), cwd.path()).unwrap();

        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(store.snapshot()[0].path.as_os_str(), typed.as_os_str());
    }

    #[cfg(unix)]
    #[test]
    fn test_add_absolute_path_through_symlink_not_collapsed() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("real").join("inner")).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("real").join("inner"),
            temp.path().join("link"),
        )
        .unwrap();
        let typed = temp.path().join("link").join("..");
        let store = MemoryStore::default();

        add_bookmark(&store, "p", Some(typed.to_str().unwrap()), Path::new("/")).unwrap();

        let stored = &store.snapshot()[0].path;
        assert_eq!(stored.as_os_str(), typed.as_os_str());
        assert_eq!(
            stored.canonicalize().unwrap(),
            temp.path().join("real").canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_add_symlink_to_directory_is_accepted() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
        let store = MemoryStore::default();

        let outcome = add_bookmark(&store, "l", Some("link"), temp.path()).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Added(Bookmark::new("l", temp.path().join("link")))
        );
    }

    #[test]
    fn test_add_duplicate_leaves_store_unchanged() {
        let temp = TempDir::new().unwrap();
        let existing = Bookmark::new("proj", "/somewhere/else");
        let store = MemoryStore::with(vec![existing.clone()]);

        let outcome = add_bookmark(&store, "proj", None, temp.path()).unwrap();

        assert_eq!(outcome, AddOutcome::Duplicate(existing.clone()));
        assert_eq!(store.snapshot(), vec![existing]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_add_missing_path_is_invalid() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::default();

        let outcome = add_bookmark(&store, "gone", Some("missing"), temp.path()).unwrap();

        assert_eq!(outcome, AddOutcome::InvalidPath(temp.path().join("missing")));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_add_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("notes.txt"), "hi").unwrap();
        let store = MemoryStore::default();

        let outcome = add_bookmark(&store, "notes", Some("notes.txt"), temp.path()).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::NotADirectory(temp.path().join("notes.txt"))
        );
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let store = MemoryStore::default();

        add_bookmark(&store, "b", None, temp.path()).unwrap();
        add_bookmark(&store, "a", None, temp.path()).unwrap();

        let names: Vec<_> = store.snapshot().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
