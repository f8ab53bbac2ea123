use crate::questionnaire::{Answer, Question, QuestionKind};
use crate::validation::format::{format_cpf, format_phone};
use crate::validation::{ContactInfo, FieldError, validate_justification};
use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Simple text input prompt with optional default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new().with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact_text()?)
}

/// Text input that may be left blank
pub fn optional_input(prompt: &str) -> Result<Option<String>> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

pub fn password_input(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// New password typed twice
pub fn new_password_input() -> Result<String> {
    Ok(Password::new()
        .with_prompt("New password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?)
}

pub fn select_option<T: ToString>(prompt: &str, items: &[T], default: Option<usize>) -> Result<usize> {
    let mut select = Select::new().with_prompt(prompt).items(items);
    if let Some(default) = default {
        select = select.default(default);
    }
    Ok(select.interact()?)
}

/// Ask one questionnaire question and return the typed or chosen answer.
///
/// Multiple-choice questions with a known option list use a selection; anything
/// else is free text. The current answer, if any, is offered as the default.
pub fn ask_question(question: &Question, options: &[String], current: &Answer) -> Result<String> {
    let current_text = current.text().filter(|t| !t.is_empty());

    if question.kind == QuestionKind::MultipleChoice && !options.is_empty() {
        let default = current_text
            .and_then(|text| options.iter().position(|o| o == text))
            .unwrap_or(0);
        let index = select_option(&question.text, options, Some(default))?;
        return Ok(options[index].clone());
    }

    let mut input = Input::<String>::new().with_prompt(&question.text);
    if let Some(text) = current_text {
        input = input.with_initial_text(text);
    }
    Ok(input.interact_text()?.trim().to_string())
}

/// Adopter contact fields; CPF and phone are masked as they are typed in
pub fn prompt_contact_info(previous: Option<&ContactInfo>) -> Result<ContactInfo> {
    let previous = previous.cloned().unwrap_or_default();
    let field = |prompt: &str, value: &str| -> Result<String> {
        let default = (!value.is_empty()).then_some(value);
        text_input(prompt, default)
    };

    let nome = field("Nome completo", &previous.nome)?;
    let idade = field("Idade", &previous.idade)?;
    let cpf = format_cpf(&field("CPF", &previous.cpf)?);
    let telefone = format_phone(&field("Telefone", &previous.telefone)?);
    let email = field("E-mail", &previous.email)?;

    Ok(ContactInfo {
        nome: nome.trim().to_string(),
        idade,
        cpf,
        telefone,
        email: email.trim().to_string(),
    })
}

/// Rejection reason, re-asked until it passes the length rules
pub fn prompt_justification() -> Result<String> {
    let justification = Input::<String>::new()
        .with_prompt("Motivo da recusa")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_justification(input).map_err(|errors| join_messages(&errors))
        })
        .interact_text()?;
    Ok(justification.trim().to_string())
}

pub fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
