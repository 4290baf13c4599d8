//! View command - Print every bookmark in stored order

use anyhow::Result;

use crate::color;
use crate::domain::bookmark::Bookmark;
use crate::store::BookmarkStore;

pub const EMPTY_MESSAGE: &str = "You don't have any bookmarks yet";

/// Render bookmarks as `<index>. <name> - <path>`, 1-indexed
#[must_use]
pub fn format_bookmark_list(bookmarks: &[Bookmark], color_mode: color::ColorMode) -> Vec<String> {
    bookmarks
        .iter()
        .enumerate()
        .map(|(i, bookmark)| {
            color::list_line(color_mode, i + 1, &bookmark.name, &bookmark.path).to_string()
        })
        .collect()
}

/// List all bookmarks
///
/// Entries go to stdout; the empty-state notice goes to stderr.
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn cmd_view(store: &dyn BookmarkStore, color_mode: color::ColorMode) -> Result<()> {
    let bookmarks = store.load()?;

    if bookmarks.is_empty() {
        eprintln!("{}", color::info(color_mode, EMPTY_MESSAGE));
        return Ok(());
    }

    for line in format_bookmark_list(&bookmarks, color_mode) {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMode;

    #[test]
    fn test_format_empty() {
        assert!(format_bookmark_list(&[], ColorMode::Never).is_empty());
    }

    #[test]
    fn test_format_is_one_indexed_in_order() {
        let bookmarks = vec![
            Bookmark::new("web", "/srv/web"),
            Bookmark::new("api", "/srv/api"),
        ];
        assert_eq!(
            format_bookmark_list(&bookmarks, ColorMode::Never),
            vec!["1. web - /srv/web", "2. api - /srv/api"]
        );
    }
}
