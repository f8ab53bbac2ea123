//! Organization account commands

use super::{backend_error, require_terminal};
use adote_cli::api::{ClientManager, Endereco, RegisterRequest};
use adote_cli::config::{Config, Session};
use adote_cli::ui::prompts::{
    new_password_input, optional_input, password_input, prompt_confirmation, text_input,
};
use adote_cli::ui::render;
use adote_cli::validation::account::{Registration, validate_login};
use adote_cli::validation::format::{format_cep, format_cnpj, format_phone};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use log::info;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Log in as an organization
    Login {
        /// Organization e-mail
        #[arg(long)]
        email: Option<String>,
        /// Organization id, when the backend does not return it on login
        #[arg(long)]
        organization_id: Option<i64>,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Status,
    /// Register a new organization
    Register,
    /// Reset a forgotten password with an e-mailed code
    ResetPassword {
        /// Account e-mail
        #[arg(long)]
        email: Option<String>,
    },
}

pub async fn auth_command(
    args: AuthCommands,
    manager: &ClientManager,
    config: &mut Config,
) -> Result<()> {
    match args.command {
        AuthSubcommands::Login {
            email,
            organization_id,
        } => login_command(manager, config, email, organization_id).await,
        AuthSubcommands::Logout => logout_command(config),
        AuthSubcommands::Status => status_command(config),
        AuthSubcommands::Register => register_command(manager, config).await,
        AuthSubcommands::ResetPassword { email } => reset_password_command(manager, email).await,
    }
}

async fn login_command(
    manager: &ClientManager,
    config: &mut Config,
    email: Option<String>,
    organization_id: Option<i64>,
) -> Result<()> {
    require_terminal("Login")?;

    let email = match email {
        Some(email) => email,
        None => text_input("E-mail", None)?,
    };
    let password = password_input("Senha")?;

    if let Err(errors) = validate_login(email.trim(), &password) {
        render::field_errors(&errors);
        anyhow::bail!("Invalid login data");
    }

    let response = manager
        .client()
        .login(email.trim(), &password)
        .await
        .map_err(backend_error("Erro ao fazer login. Tente novamente."))?;

    let organization_id = response.organizacao_id.or(organization_id);
    if organization_id.is_none() {
        render::notice("Backend did not return an organization id; pass --organization-id to manage forms");
    }

    config.set_session(Session::new(
        response.token,
        organization_id,
        response.organizacao_name.clone(),
    ));
    config.save()?;

    info!("Logged in as {}", email.trim());
    render::success(&format!(
        "Logged in as {}",
        response
            .organizacao_name
            .as_deref()
            .unwrap_or(email.trim())
            .bright_green()
            .bold()
    ));
    Ok(())
}

fn logout_command(config: &mut Config) -> Result<()> {
    if config.clear_session().is_none() {
        println!("Not logged in.");
        return Ok(());
    }
    config.save()?;
    render::success("Logged out");
    Ok(())
}

fn status_command(config: &Config) -> Result<()> {
    println!("  {} {}", "API:".dimmed(), config.effective_base_url());

    match &config.session {
        None => {
            println!("  {}", "Not logged in".bright_yellow().bold());
            println!("  {}", "Run 'adote-cli auth login' to log in.".dimmed());
        }
        Some(session) if session.is_expired() => {
            println!(
                "  {} {}",
                "Session expired at".bright_red().bold(),
                session.expires_at.format("%d/%m/%Y %H:%M")
            );
        }
        Some(session) => {
            let name = session.organizacao_name.as_deref().unwrap_or("organization");
            let id = session
                .organizacao_id
                .map(|id| format!(" (#{})", id))
                .unwrap_or_default();
            println!("  {} {}{}", "●".bright_green(), name.bright_green().bold(), id);
            println!(
                "  {} {}",
                "Valid until".dimmed(),
                session.expires_at.format("%d/%m/%Y %H:%M")
            );
        }
    }
    Ok(())
}

async fn register_command(manager: &ClientManager, config: &mut Config) -> Result<()> {
    require_terminal("Registration")?;
    let client = manager.client();

    let organization_name = text_input("Nome da organização", None)?;
    let email = text_input("E-mail", None)?;
    let password = new_password_input()?;
    let phone = format_phone(&text_input("Telefone", None)?);
    let cnpj = format_cnpj(&text_input("CNPJ", None)?);
    let cep = format_cep(&text_input("CEP", None)?);

    let registration = Registration {
        organization_name: organization_name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        phone,
        cep,
        cnpj,
    };
    if let Err(errors) = registration.validate() {
        render::field_errors(&errors);
        anyhow::bail!("Invalid registration data");
    }

    let location = client
        .lookup_cep(&registration.cep)
        .await
        .context("CEP lookup failed")?;
    let Some(location) = location else {
        anyhow::bail!("CEP não encontrado: {}", registration.cep);
    };
    println!("  {} {} - {}", "Endereço:".dimmed(), location.cidade, location.estado);

    let rua = text_input("Rua", None)?;
    let numero = optional_input("Número")?.unwrap_or_default();

    let request = RegisterRequest {
        nome: registration.organization_name.clone(),
        numero: registration.phone.clone(),
        cnpj: registration.cnpj.clone(),
        endereco: Endereco {
            id: None,
            cep: registration.cep.clone(),
            rua,
            numero,
            cidade: location.cidade,
            estado: location.estado,
        },
        email: registration.email.clone(),
        senha: registration.password.clone(),
    };

    client
        .register_organization(&request)
        .await
        .map_err(backend_error("Erro ao cadastrar. Tente novamente."))?;
    render::success(&format!("Organization {} registered", request.nome.bright_green().bold()));

    if prompt_confirmation("Log in now?", true)? {
        login_command(manager, config, Some(registration.email), None).await?;
    }
    Ok(())
}

async fn reset_password_command(manager: &ClientManager, email: Option<String>) -> Result<()> {
    require_terminal("Password reset")?;
    let client = manager.client();

    let email = match email {
        Some(email) => email,
        None => text_input("E-mail", None)?,
    };
    let email = email.trim();

    client
        .request_reset_code(email)
        .await
        .map_err(backend_error("Erro ao enviar código. Tente novamente."))?;
    render::success(&format!("Reset code sent to {}", email));

    let code = text_input("Código", None)?;
    client
        .verify_reset_code(email, code.trim())
        .await
        .map_err(backend_error("Código inválido."))?;

    let new_password = new_password_input()?;
    client
        .reset_password(email, code.trim(), &new_password)
        .await
        .map_err(backend_error("Erro ao redefinir a senha."))?;
    render::success("Password changed");
    Ok(())
}
