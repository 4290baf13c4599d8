use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use bm::cli::{Cli, Commands};
use bm::color::ColorMode;
use bm::commands;
use bm::config::Config;
use bm::integrations::shell::platform_launcher;
use bm::store::JsonFileStore;

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let color_mode = ColorMode::resolve(cli.color);

    if let Commands::Completion { shell } = &cli.command {
        return commands::completion::cmd_completion(shell);
    }

    let config = Config::load()?;
    let store = JsonFileStore::new(config.store_path()?);

    match cli.command {
        Commands::Add { name, path } => {
            commands::add::cmd_add(&store, &name, path.as_deref(), color_mode)
        }
        Commands::View => commands::view::cmd_view(&store, color_mode),
        Commands::Remove { names } => commands::remove::cmd_remove(&store, &names, color_mode),
        Commands::Jump { name } => {
            let launcher = platform_launcher(&config.jump);
            commands::jump::cmd_jump(&store, launcher.as_ref(), &name, color_mode)
        }
        Commands::Completion { .. } => Ok(()),
    }
}
