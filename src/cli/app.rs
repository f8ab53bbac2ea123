use super::commands::adopt::AdoptArgs;
use super::commands::animals::AnimalCommands;
use super::commands::auth::AuthCommands;
use super::commands::config::ConfigCommands;
use super::commands::forms::FormCommands;
use super::commands::orgs::OrgCommands;
use super::commands::pix::PixCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adote-cli")]
#[command(about = "Find animals to adopt and manage adoption forms on the Adote platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Organization login, registration and password reset
    Auth(AuthCommands),
    /// Browse animals and manage your organization's animals
    Animals(AnimalCommands),
    /// Browse partner organizations
    Orgs(OrgCommands),
    /// Fill in and send the adoption questionnaire for an animal
    Adopt(AdoptArgs),
    /// Review, accept and reject received adoption forms
    Forms(FormCommands),
    /// Organization PIX key and donation QR code
    Pix(PixCommands),
    /// Show or change local configuration
    Config(ConfigCommands),
}
