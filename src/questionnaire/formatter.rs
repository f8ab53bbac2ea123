//! Submission payload for `POST /formulario`

use super::answers::{Answer, AnswerSet, HIDDEN_ANSWER};
use super::catalog::QuestionId;
use super::engine::Questionnaire;
use crate::validation::ContactInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub id_pergunta: QuestionId,
    pub resposta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub id_animal: i64,
    pub id_organizacao: i64,
    pub nome_adotante: String,
    pub email: String,
    pub idade: u32,
    pub telefone: String,
    pub cpf: String,
    pub respostas: Vec<AnswerEntry>,
}

/// Animal and organization a questionnaire is submitted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdoptionTarget {
    pub animal_id: i64,
    pub organization_id: i64,
}

/// Resolve every answer to its wire value and drop the empty ones.
///
/// Catalog questions without an answer become `""` when visible (never answered,
/// so filtered out) or "Não" when hidden. Entries come out in ascending id order.
pub fn format_answers(questionnaire: &Questionnaire) -> Vec<AnswerEntry> {
    let mut resolved: BTreeMap<QuestionId, String> = questionnaire
        .answers()
        .iter()
        .map(|(id, answer)| (id, answer.wire_value().to_string()))
        .collect();

    for question in questionnaire.catalog().iter() {
        let missing = match questionnaire.answer(question.id) {
            None | Some(Answer::Unset) => true,
            Some(Answer::Answered(text)) => text.is_empty(),
            Some(Answer::Hidden) => false,
        };
        if missing {
            let filler = if questionnaire.is_visible(question.id) {
                ""
            } else {
                HIDDEN_ANSWER
            };
            resolved.insert(question.id, filler.to_string());
        }
    }

    resolved
        .into_iter()
        .filter(|(_, resposta)| !resposta.is_empty())
        .map(|(id_pergunta, resposta)| AnswerEntry {
            id_pergunta,
            resposta,
        })
        .collect()
}

/// Build the payload sent on submit. Assumes contact and answers already validated.
pub fn format_submission(
    questionnaire: &Questionnaire,
    contact: &ContactInfo,
    target: AdoptionTarget,
) -> SubmissionPayload {
    SubmissionPayload {
        id_animal: target.animal_id,
        id_organizacao: target.organization_id,
        nome_adotante: contact.nome.trim().to_string(),
        email: contact.email.trim().to_string(),
        idade: contact.age().unwrap_or_default(),
        telefone: contact.telefone.clone(),
        cpf: contact.cpf.clone(),
        respostas: format_answers(questionnaire),
    }
}

/// Rebuild an answer set from a payload's `respostas`
pub fn answers_from_submission(respostas: &[AnswerEntry]) -> AnswerSet {
    respostas
        .iter()
        .map(|entry| (entry.id_pergunta, Answer::answered(entry.resposta.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::catalog::QuestionKind::{FreeText, MultipleChoice};
    use crate::questionnaire::catalog::{Question, QuestionCatalog};
    use crate::questionnaire::rules::RuleTable;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let catalog = QuestionCatalog::new(vec![Question::new(1, "Por que adotar?", FreeText)]);
        let mut q = Questionnaire::new(catalog, RuleTable::default());
        q.set_answer(1, "Amo cães");

        let contact = ContactInfo {
            nome: " Ana Lima ".to_string(),
            idade: "30".to_string(),
            cpf: "123.456.789-09".to_string(),
            telefone: "(11) 98765-4321".to_string(),
            email: "ana@example.com".to_string(),
        };
        let target = AdoptionTarget {
            animal_id: 10,
            organization_id: 3,
        };

        let payload = serde_json::to_value(format_submission(&q, &contact, target)).unwrap();
        assert_eq!(
            payload,
            json!({
                "idAnimal": 10,
                "idOrganizacao": 3,
                "nomeAdotante": "Ana Lima",
                "email": "ana@example.com",
                "idade": 30,
                "telefone": "(11) 98765-4321",
                "cpf": "123.456.789-09",
                "respostas": [{ "idPergunta": 1, "resposta": "Amo cães" }]
            })
        );
    }

    #[test]
    fn test_unanswered_visible_questions_are_dropped() {
        let catalog = QuestionCatalog::new(vec![
            Question::new(1, "Por que adotar?", FreeText),
            Question::new(5, "Residência", MultipleChoice),
            Question::new(6, "Quintal?", MultipleChoice),
        ]);
        let mut q = Questionnaire::new(catalog, RuleTable::adoption_form());
        q.set_answer(5, "Casa");

        let entries = format_answers(&q);
        assert_eq!(
            entries,
            vec![AnswerEntry {
                id_pergunta: 5,
                resposta: "Casa".to_string()
            }]
        );
    }
}
