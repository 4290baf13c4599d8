//! Completion command - Print shell completion setup instructions

use anyhow::Result;
use clap_complete::Shell;

/// Print the line to add to a shell's rc file
///
/// # Errors
/// Returns an error if the shell is not supported
pub fn cmd_completion(shell: &str) -> Result<()> {
    print!("{}", completion_instructions(shell)?);
    Ok(())
}

/// Setup snippet for `shell`
///
/// # Errors
/// Returns an error if the shell is not supported
pub fn completion_instructions(shell: &str) -> Result<&'static str> {
    let parsed = shell
        .parse::<Shell>()
        .map_err(|_| anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish"))?;

    Ok(match parsed {
        Shell::Bash => {
            r"# bm shell completion setup for Bash
# Add this to your ~/.bashrc:
source <(COMPLETE=bash bm)
"
        }
        Shell::Zsh => {
            r"# bm shell completion setup for Zsh
# Add this to your ~/.zshrc:
source <(COMPLETE=zsh bm)
"
        }
        Shell::Fish => {
            r"# bm shell completion setup for Fish
# Add this to your ~/.config/fish/config.fish:
source (COMPLETE=fish bm | psub)
"
        }
        _ => anyhow::bail!("Unsupported shell: {shell}"),
    })
}
