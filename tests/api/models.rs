use adote_cli::api::{Animal, AnimalFormsSummary, LoginResponse, Organizacao, Page, SubmittedForm};
use adote_cli::questionnaire::{
    ExpansionState, Question, QuestionCatalog, QuestionKind, ReviewRenderer, RuleTable,
};
use anyhow::Result;
use chrono::{Datelike, Timelike};
use serde_json::json;

#[test]
fn test_animal_page_from_backend() -> Result<()> {
    let body = json!({
        "content": [
            {
                "id": 42,
                "nome": "Rex",
                "tipo": "Cachorro",
                "sexo": "Macho",
                "porte": "Médio",
                "vacinado": true,
                "fotos": [{ "id": 1, "url": "http://img/rex-1.jpg" }, { "id": 2, "url": "http://img/rex-2.jpg" }],
                "organizacao": {
                    "id": 3,
                    "nome": "Patas Unidas",
                    "endereco": { "cep": "01001000", "cidade": "São Paulo", "estado": "SP" }
                }
            },
            { "id": 43, "nome": "Mia", "fotos": { "id": 7, "url": "http://img/mia.jpg" } }
        ],
        "totalPages": 3,
        "totalElements": 25,
        "number": 0
    });

    let page: Page<Animal> = serde_json::from_value(body)?;
    assert!(page.has_next());
    assert_eq!(page.content.len(), 2);

    let rex = &page.content[0];
    assert_eq!(rex.fotos.len(), 2);
    assert!(rex.vacinado && !rex.castrado);
    assert_eq!(rex.organizacao.as_ref().map(|o| o.id), Some(3));

    let mia = &page.content[1];
    assert_eq!(mia.fotos.len(), 1);
    assert_eq!(mia.fotos[0].id, 7);
    assert!(mia.organizacao.is_none());
    Ok(())
}

#[test]
fn test_last_page_has_no_next() -> Result<()> {
    let page: Page<Organizacao> =
        serde_json::from_value(json!({ "content": [], "totalPages": 2, "number": 1 }))?;
    assert!(!page.has_next());
    Ok(())
}

#[test]
fn test_login_response_without_organization() -> Result<()> {
    let login: LoginResponse = serde_json::from_value(json!({ "token": "jwt" }))?;
    assert_eq!(login.token, "jwt");
    assert!(login.organizacao_id.is_none());
    Ok(())
}

#[test]
fn test_forms_summary() -> Result<()> {
    let summaries: Vec<AnimalFormsSummary> = serde_json::from_value(json!([
        { "id": 1, "animal": { "id": 42, "nome": "Rex", "fotos": null }, "formulariosEnviados": 4 }
    ]))?;
    assert_eq!(summaries[0].formularios_enviados, 4);
    assert!(summaries[0].animal.fotos.is_empty());
    Ok(())
}

#[test]
fn test_received_form_review() -> Result<()> {
    let form: SubmittedForm = serde_json::from_value(json!({
        "id": 77,
        "nomeAdotante": "Maria Souza",
        "email": "maria@example.com",
        "idade": 34,
        "telefone": "(11) 98765-4321",
        "cpf": "123.456.789-09",
        "dataEnvio": "2024-05-10T14:32:05.123",
        "status": "PENDENTE",
        "respostas": [
            { "id": 1, "pergunta": "Por que você quer adotar?", "resposta": "Companhia" },
            { "id": 2, "pergunta": "Qual o tipo da sua residência?", "resposta": "Apartamento" },
            { "id": 3, "pergunta": "Sua casa possui quintal com muros e portões altos?", "resposta": "Não" }
        ]
    }))?;

    assert!(form.is_pending());
    let sent = form.sent_at().expect("timestamp parses");
    assert_eq!((sent.year(), sent.month(), sent.day()), (2024, 5, 10));
    assert_eq!(sent.hour(), 14);

    let catalog = QuestionCatalog::new(vec![
        Question::new(1, "Por que você quer adotar?", QuestionKind::FreeText),
        Question::new(5, "Qual o tipo da sua residência?", QuestionKind::MultipleChoice),
        Question::new(6, "Sua casa possui quintal com muros e portões altos?", QuestionKind::MultipleChoice),
    ]);
    let rules = RuleTable::adoption_form();
    let rendered = ReviewRenderer::new(&catalog, &rules)
        .with_truncate_at(5)
        .render(&form.respostas, &ExpansionState::new());

    let ids: Vec<i64> = rendered.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(rendered[0].is_long);
    assert_eq!(rendered[0].text, "Compa...");
    Ok(())
}
