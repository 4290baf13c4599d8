//! Remove command - Drop one or more bookmarks by name

use anyhow::Result;
use std::collections::HashSet;

use crate::color;
use crate::store::BookmarkStore;

/// Remove every bookmark whose name is in `names`
///
/// Unknown names are ignored. The filtered list is always written back.
/// Returns how many bookmarks were dropped.
///
/// # Errors
/// Returns an error if the store cannot be read or written
pub fn remove_bookmarks(store: &dyn BookmarkStore, names: &[String]) -> Result<usize> {
    let targets: HashSet<&str> = names.iter().map(String::as_str).collect();

    let mut bookmarks = store.load()?;
    let before = bookmarks.len();
    bookmarks.retain(|bookmark| !targets.contains(bookmark.name.as_str()));
    store.save(&bookmarks)?;

    Ok(before - bookmarks.len())
}

/// Remove bookmarks and report
///
/// # Errors
/// Returns an error if the store cannot be read or written
pub fn cmd_remove(
    store: &dyn BookmarkStore,
    names: &[String],
    color_mode: color::ColorMode,
) -> Result<()> {
    remove_bookmarks(store, names)?;
    eprintln!("{}", color::success(color_mode, "Bookmarks were removed"));
    Ok(())
}
