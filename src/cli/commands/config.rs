use adote_cli::config::{Config, Settings};
use adote_cli::ui::prompts::prompt_confirmation;
use adote_cli::ui::render;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show,
    /// Print the config file location
    Path,
    /// Set the backend base URL
    SetUrl {
        /// e.g. https://api.adote.org
        url: String,
    },
    /// Set how many characters of a long answer are shown collapsed
    SetTruncate {
        length: usize,
    },
    /// Reset configuration to defaults, keeping the session
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub fn config_command(args: ConfigCommands, config: &mut Config) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            println!("  {} {}", "API base URL:".dimmed(), config.effective_base_url());
            if let Some(url) = &config.api_base_url {
                println!("  {} {}", "Configured URL:".dimmed(), url);
            }
            println!(
                "  {} {}",
                "Review truncation:".dimmed(),
                config.settings.review_truncate_at
            );
            let session = match config.active_session() {
                Some(s) => s.organizacao_name.clone().unwrap_or_else(|| "logged in".into()),
                None => "none".into(),
            };
            println!("  {} {}", "Session:".dimmed(), session);
            Ok(())
        }
        ConfigSubcommands::Path => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        ConfigSubcommands::SetUrl { url } => {
            config.set_api_base_url(&url)?;
            config.save()?;
            render::success(&format!("API base URL set to {}", url.trim().bright_green()));
            Ok(())
        }
        ConfigSubcommands::SetTruncate { length } => {
            if length == 0 {
                anyhow::bail!("Truncation length must be positive");
            }
            config.settings.review_truncate_at = length;
            config.save()?;
            render::success(&format!("Long answers collapse after {} characters", length));
            Ok(())
        }
        ConfigSubcommands::Reset { force } => {
            if !force && !prompt_confirmation("Reset all settings to defaults?", false)? {
                println!("Cancelled.");
                return Ok(());
            }
            config.api_base_url = None;
            config.settings = Settings::default();
            config.save()?;
            render::success("Configuration reset");
            Ok(())
        }
    }
}
