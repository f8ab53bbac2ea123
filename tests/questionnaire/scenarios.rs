use super::{RESIDENCE, WHY_ADOPT, YARD, answer_all, catalog, questionnaire};
use adote_cli::questionnaire::{
    AdoptionTarget, Answer, AnswerEntry, ExpansionState, QuestionKind, Questionnaire,
    ReviewRenderer, RuleTable, SubmittedAnswer, answers_from_submission, format_answers,
    format_submission,
};
use adote_cli::validation::ContactInfo;

fn entry(id: i64, resposta: &str) -> AnswerEntry {
    AnswerEntry {
        id_pergunta: id,
        resposta: resposta.to_string(),
    }
}

#[test]
fn test_apartment_hides_yard_question() {
    let mut q = questionnaire();
    q.set_answer(5, "Apartamento");

    assert!(!q.is_visible(6));
    assert_eq!(q.answer(6), Some(&Answer::Hidden));
    assert_eq!(q.answer(6).map(Answer::wire_value), Some("Não"));
}

#[test]
fn test_house_reveals_yard_question_and_blocks_until_answered() {
    let mut q = questionnaire();
    q.set_answer(1, "Quero um companheiro");
    q.set_answer(5, "Casa");
    q.set_answer(8, "Não");

    assert!(q.is_visible(6));
    let errors = q.validate().unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["respostas.6"]);

    q.set_answer(6, "Sim");
    assert!(q.validate().is_ok());
}

#[test]
fn test_changing_residence_resets_yard_answer() {
    let mut q = questionnaire();
    q.set_answer(5, "Casa");
    q.set_answer(6, "Sim");
    q.set_answer(5, "Sítio");

    assert_eq!(q.answer(6), Some(&Answer::Hidden));
    assert!(q.visible_questions().iter().all(|question| question.id != 6));
}

#[test]
fn test_hidden_default_survives_formatting() {
    let mut q = Questionnaire::new(catalog(), RuleTable::adoption_form());
    q.set_answer(1, "Rex é ótimo");

    let contact = ContactInfo {
        nome: "Maria Souza".to_string(),
        idade: "34".to_string(),
        cpf: "123.456.789-09".to_string(),
        telefone: "(11) 98765-4321".to_string(),
        email: "maria@example.com".to_string(),
    };
    let target = AdoptionTarget {
        animal_id: 10,
        organization_id: 3,
    };
    let payload = format_submission(&q, &contact, target);

    assert_eq!(payload.id_animal, 10);
    assert_eq!(payload.id_organizacao, 3);
    assert!(payload.respostas.contains(&entry(1, "Rex é ótimo")));
    assert!(payload.respostas.contains(&entry(6, "Não")));
    // unanswered visible question 5 is dropped rather than sent empty
    assert!(payload.respostas.iter().all(|e| e.id_pergunta != 5));
}

#[test]
fn test_review_hides_what_submission_keeps() {
    let catalog = catalog();
    let rules = RuleTable::adoption_form();
    let mut q = Questionnaire::new(catalog.clone(), rules.clone());
    q.set_answer(1, "Rex é ótimo");
    q.set_answer(5, "Apartamento");

    let stored = format_answers(&q);
    assert!(stored.contains(&entry(6, "Não")));

    let submitted: Vec<SubmittedAnswer> = stored
        .iter()
        .enumerate()
        .map(|(i, e)| SubmittedAnswer {
            id: 100 + i as i64,
            pergunta: catalog.get(e.id_pergunta).map(|q| q.text.clone()).unwrap_or_default(),
            resposta: e.resposta.clone(),
        })
        .collect();

    let renderer = ReviewRenderer::new(&catalog, &rules);
    let shown: Vec<&str> = renderer
        .render(&submitted, &ExpansionState::new())
        .iter()
        .map(|a| a.question)
        .collect();
    assert!(shown.contains(&WHY_ADOPT));
    assert!(shown.contains(&RESIDENCE));
    assert!(!shown.contains(&YARD));
}

#[test]
fn test_review_suppresses_conditional_nao_when_controller_matches() {
    let catalog = catalog();
    let rules = RuleTable::adoption_form();
    let mut q = Questionnaire::new(catalog.clone(), rules.clone());
    q.set_answer(1, "Rex é ótimo");
    q.set_answer(5, "Casa");
    q.set_answer(6, "Não");
    q.set_answer(8, "Não");

    let stored = format_answers(&q);
    assert!(stored.contains(&entry(6, "Não")));

    let submitted = vec![
        SubmittedAnswer {
            id: 200,
            pergunta: WHY_ADOPT.to_string(),
            resposta: "Rex é ótimo".to_string(),
        },
        SubmittedAnswer {
            id: 201,
            pergunta: RESIDENCE.to_string(),
            resposta: "Casa".to_string(),
        },
        SubmittedAnswer {
            id: 202,
            pergunta: YARD.to_string(),
            resposta: "Não".to_string(),
        },
    ];

    let renderer = ReviewRenderer::new(&catalog, &rules);
    let shown: Vec<i64> = renderer.visible(&submitted).iter().map(|a| a.id).collect();
    assert_eq!(shown, vec![200, 201]);

    // a real answer to the same question is shown
    let mut with_yard = submitted.clone();
    with_yard[2].resposta = "Sim".to_string();
    assert_eq!(renderer.visible(&with_yard).len(), 3);
}

#[test]
fn test_three_level_cascade() {
    let mut q = questionnaire();
    q.set_answer(5, "Casa");
    q.set_answer(8, "Sim");
    q.set_answer(9, "Dois gatos");
    assert!(q.is_visible(9));

    q.set_answer(5, "Apartamento");
    assert_eq!(q.answer(8), Some(&Answer::Hidden));
    assert_eq!(q.answer(9), Some(&Answer::Hidden));
    assert!(!q.is_visible(9));

    q.set_answer(5, "Casa");
    assert!(q.is_visible(8));
    assert_eq!(q.answer(8), Some(&Answer::Unset));
    assert!(!q.is_visible(9));
}

#[test]
fn test_visibility_matches_controller_answer() {
    let rules = RuleTable::adoption_form();
    for value in ["Casa", "Apartamento", "Sítio", "casa", ""] {
        let mut q = questionnaire();
        q.set_answer(5, value);
        for rule in rules.iter().filter(|r| r.controller == 5) {
            assert_eq!(q.is_visible(rule.dependent), value == rule.required_value);
        }
    }

    // controller never answered
    let q = questionnaire();
    assert!(!q.is_visible(6));
    assert!(!q.is_visible(8));
}

#[test]
fn test_rule_less_questions_always_visible() {
    let mut q = questionnaire();
    assert!(q.is_visible(1));
    assert!(q.is_visible(5));
    q.set_answer(5, "Apartamento");
    assert!(q.is_visible(1));
    assert!(q.is_visible(5));
}

#[test]
fn test_repeated_answer_is_idempotent() {
    let mut once = questionnaire();
    once.set_answer(5, "Apartamento");

    let mut twice = questionnaire();
    twice.set_answer(5, "Apartamento");
    twice.set_answer(5, "Apartamento");

    assert_eq!(once.answers(), twice.answers());
}

#[test]
fn test_formatter_never_emits_empty_answers() {
    for residence in ["Casa", "Apartamento", "Sítio"] {
        let mut q = questionnaire();
        q.set_answer(5, residence);
        q.set_answer(1, "");
        assert!(format_answers(&q).iter().all(|e| !e.resposta.is_empty()));
    }
}

#[test]
fn test_round_trip_preserves_visible_answered_ids() {
    for residence in ["Casa", "Apartamento"] {
        let mut q = questionnaire();
        answer_all(&mut q, |question, options| match question.kind {
            QuestionKind::MultipleChoice if question.id == 5 => residence.to_string(),
            QuestionKind::MultipleChoice => options.first().cloned().unwrap_or_default(),
            QuestionKind::FreeText => "Resposta livre".to_string(),
        });
        assert!(q.validate().is_ok());

        let rebuilt = Questionnaire::with_answers(
            catalog(),
            RuleTable::adoption_form(),
            answers_from_submission(&format_answers(&q)),
        );
        assert_eq!(rebuilt.visible_answered_ids(), q.visible_answered_ids());
    }
}

#[test]
fn test_unknown_question_id_is_ignored() {
    let mut q = questionnaire();
    let before = q.answers().clone();
    q.set_answer(999, "Sim");
    assert_eq!(q.answers(), &before);
    assert!(q.try_set_answer(999, "Sim").is_err());
}
