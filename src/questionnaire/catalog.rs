//! Question catalog for one questionnaire session
//!
//! The backend serves questions as `{id, pergunta, tipo}` records. The catalog keeps
//! them in backend order, indexes them by id and by prompt text, and carries the
//! fixed option lists used by multiple-choice questions.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Numeric question identifier as assigned by the backend
pub type QuestionId = i64;

/// Wire tag the backend uses for multiple-choice questions
pub const MULTIPLE_CHOICE_TAG: &str = "ALTERNATIVA";

/// Wire tag used when serializing free-text questions
pub const FREE_TEXT_TAG: &str = "DISSERTATIVA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    FreeText,
    MultipleChoice,
}

impl QuestionKind {
    /// Any tag other than `ALTERNATIVA` is rendered as free text
    pub fn from_wire(tag: &str) -> Self {
        if tag == MULTIPLE_CHOICE_TAG {
            QuestionKind::MultipleChoice
        } else {
            QuestionKind::FreeText
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            QuestionKind::FreeText => FREE_TEXT_TAG,
            QuestionKind::MultipleChoice => MULTIPLE_CHOICE_TAG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
        }
    }
}

/// Question as served by `GET /pergunta`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub pergunta: String,
    pub tipo: String,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Question {
            id: record.id,
            kind: QuestionKind::from_wire(&record.tipo),
            text: record.pergunta,
        }
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        QuestionRecord {
            id: question.id,
            pergunta: question.text.clone(),
            tipo: question.kind.as_wire().to_string(),
        }
    }
}

/// Option lists of the adoption questionnaire's multiple-choice questions
pub fn adoption_form_options() -> HashMap<QuestionId, Vec<String>> {
    const YES_NO: &[&str] = &["Sim", "Não"];

    let table: &[(QuestionId, &[&str])] = &[
        (
            3,
            &["Trabalha", "Estuda", "Trabalha e estuda", "Desempregado", "Outros"],
        ),
        (4, YES_NO),
        (5, &["Casa", "Apartamento", "Sítio"]),
        (6, YES_NO),
        (7, &["Dentro de casa", "Solto no quintal", "Preso na corrente"]),
        (8, YES_NO),
        (11, YES_NO),
        (12, YES_NO),
        (14, YES_NO),
        (17, YES_NO),
        (18, YES_NO),
        (19, &["Sim"]),
    ];

    table
        .iter()
        .map(|(id, options)| (*id, options.iter().map(|o| o.to_string()).collect()))
        .collect()
}

/// Ordered, immutable set of questions for one session
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<QuestionId, usize>,
    options: HashMap<QuestionId, Vec<String>>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut catalog = Self::default();
        for question in questions {
            if catalog.by_id.contains_key(&question.id) {
                warn!("Ignoring duplicate question id {} in catalog", question.id);
                continue;
            }
            catalog.by_id.insert(question.id, catalog.questions.len());
            catalog.questions.push(question);
        }
        catalog
    }

    /// Build a catalog from backend records with the adoption form's option lists
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self::new(records.into_iter().map(Question::from).collect())
            .with_options(adoption_form_options())
    }

    pub fn with_options(mut self, options: HashMap<QuestionId, Vec<String>>) -> Self {
        self.options = options;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.by_id.get(&id).map(|&index| &self.questions[index])
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Resolve a prompt text back to its question (exact match)
    pub fn find_by_text(&self, text: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.text == text)
    }

    /// Options of a multiple-choice question; empty for free text or unknown ids
    pub fn options(&self, id: QuestionId) -> &[String] {
        self.options.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: QuestionId, text: &str, tipo: &str) -> QuestionRecord {
        QuestionRecord {
            id,
            pergunta: text.to_string(),
            tipo: tipo.to_string(),
        }
    }

    #[test]
    fn test_kind_from_wire_tag() {
        assert_eq!(QuestionKind::from_wire("ALTERNATIVA"), QuestionKind::MultipleChoice);
        assert_eq!(QuestionKind::from_wire("DISSERTATIVA"), QuestionKind::FreeText);
        assert_eq!(QuestionKind::from_wire("anything"), QuestionKind::FreeText);
    }

    #[test]
    fn test_catalog_keeps_backend_order_and_drops_duplicates() {
        let catalog = QuestionCatalog::from_records(vec![
            record(5, "Qual o tipo da sua residência?", "ALTERNATIVA"),
            record(1, "Por que você quer adotar?", "DISSERTATIVA"),
            record(5, "duplicate", "DISSERTATIVA"),
        ]);

        let ids: Vec<_> = catalog.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![5, 1]);
        assert_eq!(catalog.get(5).map(|q| q.text.as_str()), Some("Qual o tipo da sua residência?"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_lookup_by_text_and_options() {
        let catalog = QuestionCatalog::from_records(vec![record(
            5,
            "Qual o tipo da sua residência?",
            "ALTERNATIVA",
        )]);

        assert_eq!(catalog.find_by_text("Qual o tipo da sua residência?").map(|q| q.id), Some(5));
        assert!(catalog.find_by_text("qual o tipo da sua residência?").is_none());
        assert_eq!(catalog.options(5), ["Casa", "Apartamento", "Sítio"]);
        assert!(catalog.options(1).is_empty());
    }
}
