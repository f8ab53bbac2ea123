//! Interactive adoption questionnaire

use super::{backend_error, require_terminal};
use adote_cli::api::{AdoteClient, ClientManager};
use adote_cli::questionnaire::{
    AdoptionTarget, QuestionId, Questionnaire, QuestionnaireSession, SessionError,
    question_of_field,
};
use adote_cli::ui::prompts::{ask_question, prompt_confirmation, prompt_contact_info};
use adote_cli::ui::render;
use adote_cli::validation::ContactInfo;
use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;
use std::collections::HashSet;

#[derive(Args)]
pub struct AdoptArgs {
    /// Animal id
    pub animal_id: i64,
    /// Organization id; looked up from the animal when omitted
    #[arg(long)]
    pub organization_id: Option<i64>,
}

pub async fn adopt_command(args: AdoptArgs, manager: &ClientManager) -> Result<()> {
    require_terminal("The adoption questionnaire")?;
    let client = manager.client();

    let animal = client
        .get_animal(args.animal_id)
        .await
        .map_err(backend_error("Erro ao carregar animal."))?;
    let organization_id = match args.organization_id {
        Some(id) => id,
        None => animal
            .organizacao
            .as_ref()
            .map(|o| o.id)
            .context("Animal has no organization; pass --organization-id")?,
    };

    render::heading(&format!("Formulário de adoção: {}", animal.nome));
    let target = AdoptionTarget {
        animal_id: animal.id,
        organization_id,
    };
    let mut session = QuestionnaireSession::new(client, target);

    if !open_with_retry(&mut session).await? {
        return Ok(());
    }

    if let Some(questionnaire) = session.questionnaire_mut() {
        answer_questions(questionnaire, None)?;
    }
    let mut contact = prompt_contact_info(None)?;

    loop {
        match session.submit(&contact).await {
            Ok(payload) => {
                info!(
                    "Form for animal {} sent with {} answers",
                    payload.id_animal,
                    payload.respostas.len()
                );
                render::success("Formulário enviado com sucesso!");
                return Ok(());
            }
            Err(SessionError::Validation(errors)) => {
                render::failure("Verifique os campos abaixo:");
                render::field_errors(&errors);
                contact = fix_invalid_fields(&mut session, &errors, contact)?;
            }
            Err(SessionError::SubmissionFailed(message)) => {
                render::failure(&message);
                if !prompt_confirmation("Try sending again?", true)? {
                    session.close();
                    return Ok(());
                }
            }
            Err(other) => return Err(other.into()),
        }
    }
}

/// Load the catalog, offering a manual retry after each failure.
/// Returns false when the user gives up.
async fn open_with_retry(session: &mut QuestionnaireSession<AdoteClient>) -> Result<bool> {
    let mut result = session.open().await;
    loop {
        match result {
            Ok(()) => return Ok(true),
            Err(err) => {
                render::failure(&err.to_string());
                if !prompt_confirmation("Tentar novamente?", true)? {
                    session.close();
                    return Ok(false);
                }
            }
        }
        result = session.retry().await;
    }
}

/// Ask visible questions in catalog order. Answering a controller can reveal
/// new questions, so visibility is re-read after every answer. With `only`
/// set, just those questions are asked again.
fn answer_questions(
    questionnaire: &mut Questionnaire,
    only: Option<&HashSet<QuestionId>>,
) -> Result<()> {
    let mut asked = HashSet::new();

    loop {
        let next = questionnaire
            .visible_questions()
            .into_iter()
            .find(|q| !asked.contains(&q.id) && only.is_none_or(|ids| ids.contains(&q.id)))
            .cloned();
        let Some(question) = next else {
            return Ok(());
        };

        let options = questionnaire.options(question.id).to_vec();
        let current = questionnaire.answer(question.id).cloned().unwrap_or_default();
        let answer = ask_question(&question, &options, &current)?;

        questionnaire.set_answer(question.id, answer);
        asked.insert(question.id);
    }
}

fn fix_invalid_fields(
    session: &mut QuestionnaireSession<AdoteClient>,
    errors: &[adote_cli::validation::FieldError],
    contact: ContactInfo,
) -> Result<ContactInfo> {
    let questions: HashSet<QuestionId> = errors
        .iter()
        .filter_map(|e| question_of_field(&e.field))
        .collect();
    let contact_invalid = errors.iter().any(|e| question_of_field(&e.field).is_none());

    if !questions.is_empty() {
        println!("  {}", "Responda novamente:".dimmed());
        if let Some(questionnaire) = session.questionnaire_mut() {
            answer_questions(questionnaire, Some(&questions))?;
        }
    }

    if contact_invalid {
        return prompt_contact_info(Some(&contact));
    }
    Ok(contact)
}
