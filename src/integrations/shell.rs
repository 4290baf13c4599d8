#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
//! Open an interactive shell rooted at a directory
//!
//! The spawned process is detached: it is not waited on and does not share
//! stdio with `bm`.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::JumpConfig;

const DEFAULT_TERMINAL: &str = "gnome-terminal";
const DEFAULT_SHELL: &str = "bash";

/// Shell launcher interface
pub trait ShellLauncher {
    /// Start an interactive shell whose working directory is `path`
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches a terminal emulator running `cd <path>; exec <shell>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLauncher {
    terminal: String,
    shell: String,
}

impl TerminalLauncher {
    pub fn new(terminal: impl Into<String>, shell: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            shell: shell.into(),
        }
    }

    /// Build from settings, falling back to `$SHELL` and `gnome-terminal`
    pub fn from_config(config: &JumpConfig) -> Self {
        let terminal = config
            .terminal
            .clone()
            .unwrap_or_else(|| DEFAULT_TERMINAL.to_string());
        let shell = config
            .shell
            .clone()
            .or_else(|| std::env::var("SHELL").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());
        Self::new(terminal, shell)
    }

    /// Program and arguments used to open `path`
    pub fn command_line(&self, path: &Path) -> (String, Vec<String>) {
        let script = format!(
            "cd {}; exec {}",
            posix_quote(&path.to_string_lossy()),
            self.shell
        );
        (
            self.terminal.clone(),
            vec![
                "--".to_string(),
                self.shell.clone(),
                "-c".to_string(),
                script,
            ],
        )
    }
}

impl ShellLauncher for TerminalLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = self.command_line(path);
        let mut cmd = Command::new(&program);
        cmd.args(&args);
        spawn_detached(&mut cmd).with_context(|| format!("Failed to launch {program}"))
    }
}

/// Launches a new PowerShell window with `Set-Location <path>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerShellLauncher;

impl PowerShellLauncher {
    /// Program and arguments used to open `path`
    pub fn command_line(path: &Path) -> (String, Vec<String>) {
        (
            "cmd".to_string(),
            vec![
                "/C".to_string(),
                "start".to_string(),
                "powershell.exe".to_string(),
                "-NoExit".to_string(),
                "-Command".to_string(),
                format!("Set-Location {}", powershell_quote(&path.to_string_lossy())),
            ],
        )
    }
}

impl ShellLauncher for PowerShellLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = Self::command_line(path);
        let mut cmd = Command::new(&program);
        cmd.args(&args);
        spawn_detached(&mut cmd).context("Failed to launch powershell.exe")
    }
}

/// Pick the launcher for the running platform
pub fn platform_launcher(config: &JumpConfig) -> Box<dyn ShellLauncher> {
    if cfg!(windows) {
        Box::new(PowerShellLauncher)
    } else {
        Box::new(TerminalLauncher::from_config(config))
    }
}

fn spawn_detached(cmd: &mut Command) -> Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group: Ctrl-C in the parent terminal must not reach the child
        cmd.process_group(0);
    }

    // Dropping the handle neither waits on nor kills the child
    let _child = cmd.spawn()?;
    Ok(())
}

/// Quote for POSIX shells: `it's` becomes `'it'\''s'`
pub fn posix_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Quote for PowerShell single-quoted strings: `it's` becomes `'it''s'`
pub fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
