use super::backend_error;
use adote_cli::api::{AnimalFilters, ClientManager};
use adote_cli::ui::render;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

#[derive(Args)]
pub struct OrgCommands {
    #[command(subcommand)]
    pub command: OrgSubcommands,
}

#[derive(Subcommand)]
pub enum OrgSubcommands {
    /// List partner organizations
    List {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// State (UF), e.g. SP
        #[arg(long)]
        estado: Option<String>,
        #[arg(long)]
        cidade: Option<String>,
    },
    /// Show an organization with its first page of animals
    Show {
        /// Organization id
        id: i64,
    },
}

pub async fn orgs_command(args: OrgCommands, manager: &ClientManager) -> Result<()> {
    let client = manager.client();

    match args.command {
        OrgSubcommands::List {
            page,
            estado,
            cidade,
        } => {
            let page = client
                .list_organizations(page, estado.as_deref(), cidade.as_deref())
                .await
                .map_err(backend_error("Erro ao carregar organizações."))?;

            if page.content.is_empty() {
                render::notice("Nenhuma organização encontrada");
                return Ok(());
            }
            for org in &page.content {
                println!("  {}", render::organization_line(org));
            }
            if page.has_next() {
                println!();
                println!("  {}", format!("Next page: --page {}", page.number + 1).dimmed());
            }
            Ok(())
        }
        OrgSubcommands::Show { id } => {
            let org = client
                .get_organization(id)
                .await
                .map_err(backend_error("Erro ao carregar organização."))?;
            render::organization_details(&org);

            if let Some(key) = client
                .organization_pix_key(id)
                .await
                .map_err(backend_error("Erro ao carregar chave PIX."))?
            {
                println!("  {} {} ({})", "PIX:".dimmed(), key.chave, key.tipo);
            }

            let animals = client
                .organization_animals(id, 0, &AnimalFilters::default())
                .await
                .map_err(backend_error("Erro ao carregar animais."))?;
            render::heading(&format!("Animais ({})", animals.total_elements));
            for animal in &animals.content {
                println!("  {}", render::animal_line(animal));
            }
            Ok(())
        }
    }
}
