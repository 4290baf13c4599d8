//! Terminal styling for status messages and list output

use std::env;
use std::fmt;

use owo_colors::OwoColorize;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Color only when stderr supports it
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }

        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }

        Self::Auto
    }

    /// Whether ANSI sequences should be written
    ///
    /// `Auto` asks `supports-color` about stderr, where status messages go.
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }
}

/// Kind of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Green ✓
    Success,
    /// Blue ℹ
    Info,
    /// Red ✗
    Error,
}

impl MessageStyle {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Error => "✗",
        }
    }

    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A status message prefixed by its symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if !self.mode.should_colorize() {
            return write!(f, "{symbol} {}", self.message);
        }
        match self.style {
            MessageStyle::Success => write!(f, "{} {}", symbol.bright_green().bold(), self.message),
            MessageStyle::Info => write!(f, "{} {}", symbol.bright_blue(), self.message),
            MessageStyle::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
        }
    }
}

pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Info.format(mode, message)
}

pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Error.format(mode, message)
}

/// One entry of `bm view`: `<index>. <name> - <path>`
pub struct ListLine<'a> {
    mode: ColorMode,
    index: usize,
    name: &'a str,
    path: &'a std::path::Path,
}

impl fmt::Display for ListLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        if self.mode.should_colorize() {
            write!(
                f,
                "{} {} {} {path}",
                format!("{}.", self.index).dimmed(),
                self.name.cyan(),
                "-".dimmed()
            )
        } else {
            write!(f, "{}. {} - {path}", self.index, self.name)
        }
    }
}

/// Format a 1-indexed list entry
#[allow(clippy::missing_const_for_fn)]
pub fn list_line<'a>(
    mode: ColorMode,
    index: usize,
    name: &'a str,
    path: &'a std::path::Path,
) -> ListLine<'a> {
    ListLine {
        mode,
        index,
        name,
        path,
    }
}
