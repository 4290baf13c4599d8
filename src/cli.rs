use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;

use crate::config::Config;
use crate::store::{BookmarkStore, JsonFileStore};

/// Bookmark directories by name and jump back to them
#[derive(Parser, Debug)]
#[command(name = "bm", author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a bookmark at a path. The path can be absolute or relative
    Add {
        /// Name of the bookmark
        name: String,
        /// Directory to bookmark. Defaults to the current directory
        #[arg(value_hint = clap::ValueHint::DirPath)]
        path: Option<String>,
    },
    /// Show all bookmarks
    #[command(visible_alias = "ls")]
    View,
    /// Remove one or more bookmarks
    #[command(visible_alias = "rm")]
    Remove {
        /// Bookmark name(s) to remove
        #[arg(required = true, num_args = 1.., value_name = "NAME", add = ArgValueCompleter::new(complete_bookmark_names))]
        names: Vec<String>,
    },
    /// Open a new shell at a bookmark
    Jump {
        /// Bookmark to jump to
        #[arg(add = ArgValueCompleter::new(complete_bookmark_names))]
        name: String,
    },
    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// Complete bookmark names for `remove` and `jump`
///
/// Returns an empty Vec when the store cannot be located or read
#[must_use]
pub fn complete_bookmark_names(current: &OsStr) -> Vec<CompletionCandidate> {
    let Ok(store_path) = Config::load().and_then(|config| config.store_path()) else {
        return Vec::new();
    };
    let Ok(bookmarks) = JsonFileStore::new(store_path).load() else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    bookmarks
        .into_iter()
        .filter(|bookmark| bookmark.name.starts_with(&*prefix))
        .map(|bookmark| {
            CompletionCandidate::new(bookmark.name)
                .help(Some(bookmark.path.display().to_string().into()))
        })
        .collect()
}
