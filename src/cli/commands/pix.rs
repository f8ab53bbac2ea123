use super::backend_error;
use adote_cli::api::{ClientManager, QrCodeRequest};
use adote_cli::ui::render;
use adote_cli::validation::{PixKeyType, validate_pix_key};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use serde_json::Value;

#[derive(Args)]
pub struct PixCommands {
    #[command(subcommand)]
    pub command: PixSubcommands,
}

#[derive(Subcommand)]
pub enum PixSubcommands {
    /// Show an organization's PIX key
    Show {
        /// Organization id; defaults to the logged-in organization
        #[arg(long)]
        organization_id: Option<i64>,
    },
    /// Register or replace your organization's PIX key
    Set {
        /// Key type
        #[arg(long, value_enum)]
        tipo: PixKeyType,
        /// Key value
        #[arg(long)]
        chave: String,
    },
    /// Generate a donation QR code for an organization
    Qrcode {
        /// Organization id
        organization_id: i64,
    },
}

pub async fn pix_command(args: PixCommands, manager: &ClientManager) -> Result<()> {
    match args.command {
        PixSubcommands::Show { organization_id } => {
            let organization_id = match organization_id {
                Some(id) => id,
                None => manager.organization_id()?,
            };
            match manager
                .client()
                .organization_pix_key(organization_id)
                .await
                .map_err(backend_error("Erro ao carregar chave PIX."))?
            {
                Some(key) => println!("  {} {}", key.tipo.dimmed(), key.chave.bright_white().bold()),
                None => render::notice("Organização sem chave PIX cadastrada"),
            }
            Ok(())
        }
        PixSubcommands::Set { tipo, chave } => set_command(manager, tipo, chave.trim()).await,
        PixSubcommands::Qrcode { organization_id } => qrcode_command(manager, organization_id).await,
    }
}

async fn set_command(manager: &ClientManager, tipo: PixKeyType, chave: &str) -> Result<()> {
    if let Err(error) = validate_pix_key(tipo, chave) {
        render::field_errors(&[error]);
        anyhow::bail!("Invalid PIX key");
    }

    let client = manager.authenticated_client()?;
    let organization_id = manager.organization_id()?;

    let existing = client
        .organization_pix_key(organization_id)
        .await
        .map_err(backend_error("Erro ao carregar chave PIX."))?;

    match existing {
        Some(key) => {
            client
                .update_pix_key(key.id, tipo, chave)
                .await
                .map_err(backend_error("Erro ao atualizar chave PIX."))?;
            render::success("PIX key updated");
        }
        None => {
            client
                .register_pix_key(organization_id, tipo, chave)
                .await
                .map_err(backend_error("Erro ao cadastrar chave PIX."))?;
            render::success("PIX key registered");
        }
    }
    Ok(())
}

async fn qrcode_command(manager: &ClientManager, organization_id: i64) -> Result<()> {
    let client = manager.client();

    let org = client
        .get_organization(organization_id)
        .await
        .map_err(backend_error("Erro ao carregar organização."))?;
    let Some(key) = client
        .organization_pix_key(organization_id)
        .await
        .map_err(backend_error("Erro ao carregar chave PIX."))?
    else {
        anyhow::bail!("Organization {} has no PIX key", org.nome);
    };

    let tipo = PixKeyType::from_wire(&key.tipo)
        .ok_or_else(|| anyhow::anyhow!("Unknown PIX key type: {}", key.tipo))?;
    let request = QrCodeRequest {
        tipo,
        chave: key.chave.clone(),
        nome: org.nome.clone(),
        cidade: org.endereco.as_ref().map(|e| e.cidade.clone()).unwrap_or_default(),
    };

    let response = client
        .generate_pix_qr_code(&request)
        .await
        .map_err(backend_error("Erro ao gerar QR Code."))?;

    render::heading(&format!("Doe para {}", org.nome));
    println!("  {} {}", "Chave PIX:".dimmed(), key.chave);
    match response {
        Value::String(payload) => println!("  {}", payload),
        Value::Null => render::notice("Backend returned no QR code"),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }
    Ok(())
}
