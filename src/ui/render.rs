//! Colored terminal output shared by the commands

use crate::api::{Animal, AnimalFormsSummary, Organizacao, SubmittedForm};
use crate::questionnaire::RenderedAnswer;
use crate::validation::FieldError;
use colored::*;

pub fn success(message: &str) {
    println!("{} {}", "✓".bright_green().bold(), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".bright_red().bold(), message);
}

pub fn notice(message: &str) {
    println!("  {}", message.bright_yellow().bold());
}

pub fn heading(title: &str) {
    println!();
    println!("  {}", title.bright_white().bold());
}

pub fn field_errors(errors: &[FieldError]) {
    for error in errors {
        eprintln!("  {} {}: {}", "•".bright_red(), error.field.dimmed(), error.message);
    }
}

fn flag(label: &str, on: bool) -> ColoredString {
    if on {
        label.bright_green()
    } else {
        label.dimmed()
    }
}

pub fn animal_line(animal: &Animal) -> String {
    let details: Vec<&str> = [&animal.tipo, &animal.sexo, &animal.porte, &animal.idade]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .filter(|v| !v.is_empty())
        .collect();
    format!(
        "{} {} {}",
        format!("#{}", animal.id).dimmed(),
        animal.nome.bright_cyan().bold(),
        details.join(" · ")
    )
}

pub fn animal_details(animal: &Animal) {
    heading(&animal.nome);
    println!("  {}", animal_line(animal));
    println!(
        "  {} {} {} {}",
        flag("vacinado", animal.vacinado),
        flag("castrado", animal.castrado),
        flag("vermifugado", animal.vermifugado),
        flag("SRD", animal.srd)
    );
    if let Some(descricao) = animal.descricao.as_deref().filter(|d| !d.is_empty()) {
        println!();
        println!("  {}", descricao);
    }
    if let Some(org) = &animal.organizacao {
        println!();
        println!("  {} {}", "Organização:".dimmed(), organization_line(org));
    }
    for photo in &animal.fotos {
        println!("  {} {}", "foto".dimmed(), photo.url);
    }
}

pub fn organization_line(org: &Organizacao) -> String {
    let location = org.location();
    format!(
        "{} {} {}",
        format!("#{}", org.id).dimmed(),
        org.nome.bright_cyan().bold(),
        location.dimmed()
    )
}

pub fn organization_details(org: &Organizacao) {
    heading(&org.nome);
    println!("  {}", organization_line(org));
    if !org.email.is_empty() {
        println!("  {} {}", "E-mail:".dimmed(), org.email);
    }
    if !org.numero.is_empty() {
        println!("  {} {}", "Telefone:".dimmed(), org.numero);
    }
    if !org.cnpj.is_empty() {
        println!("  {} {}", "CNPJ:".dimmed(), org.cnpj);
    }
}

pub fn forms_summary_line(summary: &AnimalFormsSummary) -> String {
    let count = summary.formularios_enviados;
    format!(
        "{} {} {} formulário{}",
        format!("#{}", summary.animal.id).dimmed(),
        summary.animal.nome.bright_cyan().bold(),
        count,
        if count > 1 { "s" } else { "" }
    )
}

pub fn form_status(form: &SubmittedForm) -> ColoredString {
    if form.is_approved() {
        form.status.bright_green().bold()
    } else if form.is_pending() {
        form.status.bright_yellow().bold()
    } else {
        form.status.bright_red().bold()
    }
}

pub fn form_header(form: &SubmittedForm) {
    let sent = form
        .sent_at()
        .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| form.data_envio.clone());
    println!();
    println!(
        "  {} {} {} {}",
        format!("#{}", form.id).dimmed(),
        form.nome_adotante.bright_white().bold(),
        form_status(form),
        sent.dimmed()
    );
    println!(
        "  {} · {} anos · {} · CPF {}",
        form.email, form.idade, form.telefone, form.cpf
    );
}

pub fn rendered_answers(answers: &[RenderedAnswer<'_>]) {
    for answer in answers {
        println!();
        println!("  {}", answer.question.bright_white());
        let marker = match (answer.is_long, answer.expanded) {
            (true, false) => format!(" [{}]", format!("expand {}", answer.id).dimmed()),
            _ => String::new(),
        };
        println!("    {}{}", answer.text, marker);
    }
}
