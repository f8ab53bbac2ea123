//! Review of received adoption forms

use super::backend_error;
use adote_cli::api::{AdoteClient, ClientManager, SubmittedForm};
use adote_cli::config::Config;
use adote_cli::questionnaire::{
    ExpansionState, QuestionCatalog, ReviewRenderer, RuleTable, load_review_catalog,
};
use adote_cli::ui::prompts::{prompt_confirmation, prompt_justification, select_option};
use adote_cli::ui::render;
use adote_cli::validation::validate_justification;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use is_terminal::IsTerminal;

#[derive(Args)]
pub struct FormCommands {
    #[command(subcommand)]
    pub command: FormSubcommands,
}

#[derive(Subcommand)]
pub enum FormSubcommands {
    /// Count received forms per animal
    List,
    /// Show the forms received for one animal
    Show {
        /// Animal id
        animal_id: i64,
        /// Answer id to show in full; repeatable
        #[arg(long)]
        expand: Vec<i64>,
        /// Show every answer in full
        #[arg(long)]
        full: bool,
    },
    /// Accept a form
    Accept {
        /// Form id
        form_id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Reject a form with a justification of 100 to 300 characters
    Reject {
        /// Form id
        form_id: i64,
        /// Rejection reason; prompted for when omitted
        #[arg(long)]
        justificativa: Option<String>,
    },
}

pub async fn forms_command(args: FormCommands, manager: &ClientManager, config: &Config) -> Result<()> {
    let client = manager.authenticated_client()?;

    match args.command {
        FormSubcommands::List => {
            let organization_id = manager.organization_id()?;
            let summaries = client
                .organization_forms(organization_id)
                .await
                .map_err(backend_error("Erro ao carregar formulários."))?;

            if summaries.is_empty() {
                render::notice("Nenhum formulário recebido");
                return Ok(());
            }
            for summary in &summaries {
                println!("  {}", render::forms_summary_line(summary));
            }
            Ok(())
        }
        FormSubcommands::Show {
            animal_id,
            expand,
            full,
        } => show_command(&client, config, animal_id, expand, full).await,
        FormSubcommands::Accept { form_id, force } => {
            if !force && !prompt_confirmation(&format!("Accept form {}?", form_id), true)? {
                println!("Cancelled.");
                return Ok(());
            }
            client
                .accept_form(form_id)
                .await
                .map_err(backend_error("Erro ao aceitar formulário."))?;
            render::success(&format!("Form {} accepted", form_id));
            Ok(())
        }
        FormSubcommands::Reject {
            form_id,
            justificativa,
        } => {
            let justification = match justificativa {
                Some(text) => {
                    if let Err(errors) = validate_justification(&text) {
                        render::field_errors(&errors);
                        anyhow::bail!("Invalid justification");
                    }
                    text
                }
                None => {
                    super::require_terminal("Rejecting without --justificativa")?;
                    prompt_justification()?
                }
            };
            client
                .reject_form(form_id, &justification)
                .await
                .map_err(backend_error("Erro ao recusar formulário."))?;
            render::success(&format!("Form {} rejected", form_id));
            Ok(())
        }
    }
}

/// Load the catalog the review filter needs, offering a manual retry after each
/// failure. Answers are never shown without it.
async fn review_catalog(client: &AdoteClient) -> Result<QuestionCatalog> {
    loop {
        match load_review_catalog(client).await {
            Ok(catalog) => return Ok(catalog),
            Err(err) => {
                render::failure(&err.to_string());
                if !std::io::stdin().is_terminal()
                    || !prompt_confirmation("Tentar novamente?", true)?
                {
                    anyhow::bail!("Question catalog unavailable; forms not shown");
                }
            }
        }
    }
}

async fn show_command(
    client: &AdoteClient,
    config: &Config,
    animal_id: i64,
    expand: Vec<i64>,
    full: bool,
) -> Result<()> {
    let forms = client
        .animal_forms(animal_id)
        .await
        .map_err(backend_error("Erro ao carregar formulários."))?;
    if forms.is_empty() {
        render::notice("Nenhum formulário para este animal");
        return Ok(());
    }

    let catalog = review_catalog(client).await?;
    let rules = RuleTable::adoption_form();
    let renderer = ReviewRenderer::new(&catalog, &rules)
        .with_truncate_at(config.settings.review_truncate_at);

    let mut expansion = ExpansionState::new();
    for id in expand {
        expansion.toggle(id);
    }
    if full {
        for form in &forms {
            for answer in renderer.render(&form.respostas, &expansion) {
                if answer.is_long && !answer.expanded {
                    expansion.toggle(answer.id);
                }
            }
        }
    }

    print_forms(&renderer, &forms, &expansion);

    if full || !std::io::stdin().is_terminal() {
        return Ok(());
    }
    browse_long_answers(&renderer, &forms, &mut expansion)
}

fn print_forms(renderer: &ReviewRenderer<'_>, forms: &[SubmittedForm], expansion: &ExpansionState) {
    for form in forms {
        render::form_header(form);
        render::rendered_answers(&renderer.render(&form.respostas, expansion));
    }
}

/// Let the reviewer expand and collapse long answers one at a time
fn browse_long_answers(
    renderer: &ReviewRenderer<'_>,
    forms: &[SubmittedForm],
    expansion: &mut ExpansionState,
) -> Result<()> {
    loop {
        let long: Vec<(i64, String)> = forms
            .iter()
            .flat_map(|form| {
                renderer
                    .render(&form.respostas, &*expansion)
                    .into_iter()
                    .filter(|a| a.is_long)
                    .map(|a| {
                        let action = if a.expanded { "Recolher" } else { "Expandir" };
                        (a.id, format!("{} #{} {}", action, a.id, a.question))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        if long.is_empty() {
            return Ok(());
        }

        let mut items: Vec<String> = long.iter().map(|(_, label)| label.clone()).collect();
        items.push("Concluir".to_string());
        let choice = select_option("Respostas longas", &items, Some(items.len() - 1))?;
        let Some((answer_id, _)) = long.get(choice) else {
            return Ok(());
        };

        expansion.toggle(*answer_id);
        for form in forms {
            let rendered = renderer.render(&form.respostas, &*expansion);
            if let Some(answer) = rendered.iter().find(|a| a.id == *answer_id) {
                println!();
                println!("  {}", answer.question.bright_white());
                println!("    {}", answer.text);
            }
        }
    }
}
