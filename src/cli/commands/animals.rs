//! Animal browsing and management commands

use super::backend_error;
use adote_cli::api::{Animal, AnimalData, AnimalFilters, ClientManager, PhotoChanges};
use adote_cli::ui::prompts::prompt_confirmation;
use adote_cli::ui::render;
use adote_cli::validation::animal::{AnimalDraft, SEXES, SIZES};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnimalCommands {
    #[command(subcommand)]
    pub command: AnimalSubcommands,
}

#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Page number, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Species, e.g. Cachorro or Gato
    #[arg(long)]
    pub tipo: Option<String>,
    /// Age range
    #[arg(long)]
    pub idade: Option<String>,
    /// Size: Pequeno, Medio or Grande
    #[arg(long)]
    pub porte: Option<String>,
    /// Sex: Macho or Femea
    #[arg(long)]
    pub sexo: Option<String>,
}

impl FilterArgs {
    fn filters(&self) -> AnimalFilters {
        AnimalFilters {
            tipo: self.tipo.clone(),
            idade: self.idade.clone(),
            porte: self.porte.clone(),
            sexo: self.sexo.clone(),
        }
    }
}

/// Animal fields; on update only the given ones change
#[derive(Args, Clone, Default)]
pub struct AnimalFields {
    #[arg(long)]
    pub nome: Option<String>,
    #[arg(long)]
    pub tipo: Option<String>,
    /// Macho or Femea
    #[arg(long)]
    pub sexo: Option<String>,
    /// Pequeno, Medio or Grande
    #[arg(long)]
    pub porte: Option<String>,
    #[arg(long)]
    pub idade: Option<String>,
    #[arg(long)]
    pub vacinado: Option<bool>,
    #[arg(long)]
    pub castrado: Option<bool>,
    #[arg(long)]
    pub vermifugado: Option<bool>,
    /// Mixed breed (sem raça definida)
    #[arg(long)]
    pub srd: Option<bool>,
    #[arg(long)]
    pub descricao: Option<String>,
}

impl AnimalFields {
    fn apply(self, draft: &mut AnimalDraft) {
        if let Some(value) = self.nome {
            draft.nome = value;
        }
        if let Some(value) = self.tipo {
            draft.tipo = value;
        }
        if let Some(value) = self.sexo {
            draft.sexo = value;
        }
        if let Some(value) = self.porte {
            draft.porte = value;
        }
        if let Some(value) = self.idade {
            draft.idade = value;
        }
        if let Some(value) = self.vacinado {
            draft.vacinado = value;
        }
        if let Some(value) = self.castrado {
            draft.castrado = value;
        }
        if let Some(value) = self.vermifugado {
            draft.vermifugado = value;
        }
        if let Some(value) = self.srd {
            draft.srd = value;
        }
        if let Some(value) = self.descricao {
            draft.descricao = value;
        }
    }
}

#[derive(Subcommand)]
pub enum AnimalSubcommands {
    /// List animals available for adoption
    List(FilterArgs),
    /// Show one animal's profile
    Show {
        /// Animal id
        id: i64,
    },
    /// List animals of an organization (yours when logged in)
    Org {
        /// Organization id; defaults to the logged-in organization
        #[arg(long)]
        organization_id: Option<i64>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Register a new animal for your organization
    Add {
        #[command(flatten)]
        fields: AnimalFields,
        /// Photo file; repeat for up to three photos
        #[arg(long = "foto", required = true)]
        fotos: Vec<PathBuf>,
    },
    /// Update one of your animals
    Update {
        /// Animal id
        id: i64,
        #[command(flatten)]
        fields: AnimalFields,
        /// Photo file to add
        #[arg(long = "add-foto")]
        add_fotos: Vec<PathBuf>,
        /// Photo id to remove
        #[arg(long = "remove-foto")]
        remove_fotos: Vec<i64>,
    },
    /// Delete one of your animals
    Delete {
        /// Animal id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn animals_command(args: AnimalCommands, manager: &ClientManager) -> Result<()> {
    match args.command {
        AnimalSubcommands::List(filters) => list_command(manager, filters).await,
        AnimalSubcommands::Show { id } => show_command(manager, id).await,
        AnimalSubcommands::Org {
            organization_id,
            filters,
        } => org_command(manager, organization_id, filters).await,
        AnimalSubcommands::Add { fields, fotos } => add_command(manager, fields, fotos).await,
        AnimalSubcommands::Update {
            id,
            fields,
            add_fotos,
            remove_fotos,
        } => update_command(manager, id, fields, add_fotos, remove_fotos).await,
        AnimalSubcommands::Delete { id, force } => delete_command(manager, id, force).await,
    }
}

async fn list_command(manager: &ClientManager, args: FilterArgs) -> Result<()> {
    let page = manager
        .client()
        .list_animals(args.page, &args.filters())
        .await
        .map_err(backend_error("Erro ao carregar animais."))?;

    print_page(&page.content, page.number, page.total_pages, page.has_next());
    Ok(())
}

fn print_page(animals: &[Animal], number: u32, total_pages: u32, has_next: bool) {
    if animals.is_empty() {
        render::notice("Nenhum animal encontrado");
        return;
    }
    for animal in animals {
        println!("  {}", render::animal_line(animal));
    }
    println!();
    println!(
        "  {}",
        format!("Page {} of {}", number + 1, total_pages.max(1)).dimmed()
    );
    if has_next {
        println!("  {}", format!("Next page: --page {}", number + 1).dimmed());
    }
}

async fn show_command(manager: &ClientManager, id: i64) -> Result<()> {
    let animal = manager
        .client()
        .get_animal(id)
        .await
        .map_err(backend_error("Erro ao carregar animal."))?;
    render::animal_details(&animal);
    println!();
    println!("  {}", format!("Adopt with: adote-cli adopt {}", animal.id).dimmed());
    Ok(())
}

async fn org_command(
    manager: &ClientManager,
    organization_id: Option<i64>,
    args: FilterArgs,
) -> Result<()> {
    let (client, organization_id) = match organization_id {
        Some(id) => (manager.client(), id),
        None => (manager.authenticated_client()?, manager.organization_id()?),
    };

    let page = client
        .organization_animals(organization_id, args.page, &args.filters())
        .await
        .map_err(backend_error("Erro ao carregar animais."))?;

    print_page(&page.content, page.number, page.total_pages, page.has_next());
    Ok(())
}

async fn add_command(manager: &ClientManager, fields: AnimalFields, fotos: Vec<PathBuf>) -> Result<()> {
    let client = manager.authenticated_client()?;

    let mut draft = AnimalDraft {
        fotos,
        ..Default::default()
    };
    fields.apply(&mut draft);
    if let Err(errors) = draft.validate() {
        render::field_errors(&errors);
        println!(
            "  {}",
            format!("sexo: {} · porte: {}", SEXES.join("/"), SIZES.join("/")).dimmed()
        );
        anyhow::bail!("Invalid animal data");
    }

    client
        .register_animal(&AnimalData::from(&draft), &draft.fotos)
        .await
        .map_err(backend_error("Erro ao cadastrar animal."))?;
    render::success(&format!("Animal {} registered", draft.nome.bright_green().bold()));
    Ok(())
}

async fn update_command(
    manager: &ClientManager,
    id: i64,
    fields: AnimalFields,
    add_fotos: Vec<PathBuf>,
    mut remove_fotos: Vec<i64>,
) -> Result<()> {
    let client = manager.authenticated_client()?;
    remove_fotos.sort_unstable();
    remove_fotos.dedup();
    let current = client
        .get_animal(id)
        .await
        .map_err(backend_error("Erro ao carregar animal."))?;

    for photo_id in &remove_fotos {
        if !current.fotos.iter().any(|p| p.id == *photo_id) {
            anyhow::bail!("Animal {} has no photo {}", id, photo_id);
        }
    }

    let mut draft = AnimalDraft {
        nome: current.nome.clone(),
        tipo: current.tipo.clone().unwrap_or_default(),
        sexo: current.sexo.clone().unwrap_or_default(),
        porte: current.porte.clone().unwrap_or_default(),
        idade: current.idade.clone().unwrap_or_default(),
        vacinado: current.vacinado,
        castrado: current.castrado,
        vermifugado: current.vermifugado,
        srd: current.srd,
        descricao: current.descricao.clone().unwrap_or_default(),
        fotos: add_fotos.clone(),
    };
    fields.apply(&mut draft);

    let photo_total = current.fotos.len() - remove_fotos.len() + add_fotos.len();
    if let Err(errors) = draft.validate_with_photo_count(photo_total) {
        render::field_errors(&errors);
        anyhow::bail!("Invalid animal data");
    }

    let changes = PhotoChanges {
        add: add_fotos,
        remove: remove_fotos,
    };
    client
        .update_animal(id, &AnimalData::from(&draft), &changes)
        .await
        .map_err(backend_error("Erro ao atualizar animal."))?;
    render::success(&format!("Animal {} updated", draft.nome.bright_green().bold()));
    Ok(())
}

async fn delete_command(manager: &ClientManager, id: i64, force: bool) -> Result<()> {
    let client = manager.authenticated_client()?;

    if !force && !prompt_confirmation(&format!("Delete animal {}?", id), false)? {
        println!("Cancelled.");
        return Ok(());
    }

    client
        .delete_animal(id)
        .await
        .map_err(backend_error("Erro ao excluir animal."))?;
    render::success(&format!("Animal {} deleted", id));
    Ok(())
}
