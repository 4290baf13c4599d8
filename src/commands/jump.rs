//! Jump command - Open a shell at a bookmarked directory

use anyhow::Result;

use crate::color;
use crate::domain::bookmark::Bookmark;
use crate::integrations::shell::ShellLauncher;
use crate::store::BookmarkStore;

/// Result of a jump request
#[derive(Debug)]
pub enum JumpOutcome {
    /// Shell started at the bookmark's path
    Opened(Bookmark),
    /// No bookmark with that name; nothing was spawned
    Unknown,
    /// The launcher could not start the shell
    LaunchFailed(Bookmark, anyhow::Error),
}

/// Look up `name` and hand its path to `launcher`
///
/// Never modifies the store.
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn jump_to(
    store: &dyn BookmarkStore,
    launcher: &dyn ShellLauncher,
    name: &str,
) -> Result<JumpOutcome> {
    let Some(bookmark) = store.find_by_name(name)? else {
        return Ok(JumpOutcome::Unknown);
    };

    Ok(match launcher.open(&bookmark.path) {
        Ok(()) => JumpOutcome::Opened(bookmark),
        Err(err) => JumpOutcome::LaunchFailed(bookmark, err),
    })
}

/// Jump to a bookmark and report
///
/// Launch failures are reported but do not change the exit status.
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn cmd_jump(
    store: &dyn BookmarkStore,
    launcher: &dyn ShellLauncher,
    name: &str,
    color_mode: color::ColorMode,
) -> Result<()> {
    match jump_to(store, launcher, name)? {
        JumpOutcome::Opened(bookmark) => eprintln!(
            "{}",
            color::info(
                color_mode,
                format!("Opening shell at {}", bookmark.path.display())
            )
        ),
        JumpOutcome::Unknown => eprintln!(
            "{}",
            color::error(color_mode, format!("{name} does not exist"))
        ),
        JumpOutcome::LaunchFailed(_, err) => eprintln!(
            "{}",
            color::error(color_mode, format!("Failed to open shell: {err:#}"))
        ),
    }

    Ok(())
}
