pub mod adopt;
pub mod animals;
pub mod auth;
pub mod config;
pub mod forms;
pub mod orgs;
pub mod pix;

use super::Commands;
use adote_cli::api::{ApiError, ClientManager};
use adote_cli::config::Config;
use anyhow::Result;
use is_terminal::IsTerminal;

/// Route a parsed command to its handler
pub async fn dispatch(command: Commands, config: &mut Config) -> Result<()> {
    let manager = ClientManager::from_config(config);
    log::debug!("Using API at {}", manager.base_url());

    match command {
        Commands::Auth(args) => auth::auth_command(args, &manager, config).await,
        Commands::Animals(args) => animals::animals_command(args, &manager).await,
        Commands::Orgs(args) => orgs::orgs_command(args, &manager).await,
        Commands::Adopt(args) => adopt::adopt_command(args, &manager).await,
        Commands::Forms(args) => forms::forms_command(args, &manager, config).await,
        Commands::Pix(args) => pix::pix_command(args, &manager).await,
        Commands::Config(args) => config::config_command(args, config),
    }
}

/// Map a backend failure to the message the user should see
pub fn backend_error(fallback: &'static str) -> impl FnOnce(ApiError) -> anyhow::Error {
    move |err| {
        log::error!("{}: {}", fallback, err);
        anyhow::anyhow!(err.user_message(fallback))
    }
}

/// Interactive flows refuse to run without a terminal
pub fn require_terminal(what: &str) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("{} needs an interactive terminal", what);
    }
    Ok(())
}
