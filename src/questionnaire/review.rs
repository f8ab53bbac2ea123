//! Reviewer view of a submitted questionnaire
//!
//! Submitted answers arrive as `{id, pergunta, resposta}` records keyed by question
//! text. The renderer maps the text back to question ids through the catalog and
//! applies the same rule table the adopter-side engine uses.

use super::answers::HIDDEN_ANSWER;
use super::catalog::{QuestionCatalog, QuestionId};
use super::rules::RuleTable;
use super::session::{AdoptionBackend, SessionError};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Answers longer than this many characters are shown truncated
pub const DEFAULT_TRUNCATE_AT: usize = 120;

/// Fetch the catalog the review filter resolves question text with.
///
/// Without a catalog no conditional answer can be matched to its rule, so a failed
/// fetch or an empty catalog is a load failure rather than an unfiltered view.
pub async fn load_review_catalog<B: AdoptionBackend>(
    backend: &B,
) -> Result<QuestionCatalog, SessionError> {
    let records = backend.fetch_questions().await.map_err(|err| {
        warn!("Failed to load question catalog for review: {}", err);
        SessionError::CatalogUnavailable(err.user_message("Erro ao carregar perguntas."))
    })?;

    let catalog = QuestionCatalog::from_records(records);
    if catalog.is_empty() {
        warn!("Backend returned an empty question catalog");
        return Err(SessionError::CatalogUnavailable(
            "Nenhuma pergunta cadastrada.".to_string(),
        ));
    }
    info!("Loaded {} questions for review", catalog.len());
    Ok(catalog)
}

/// One answer of a form as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub id: i64,
    pub pergunta: String,
    pub resposta: String,
}

/// Which long answers the reviewer expanded, by answer id
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<i64>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an answer between collapsed and expanded; returns the new state
    pub fn toggle(&mut self, answer_id: i64) -> bool {
        if self.expanded.remove(&answer_id) {
            false
        } else {
            self.expanded.insert(answer_id);
            true
        }
    }

    pub fn is_expanded(&self, answer_id: i64) -> bool {
        self.expanded.contains(&answer_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnswer<'a> {
    pub id: i64,
    pub question: &'a str,
    pub text: Cow<'a, str>,
    /// Answer is long enough to offer an expand/collapse toggle
    pub is_long: bool,
    pub expanded: bool,
}

pub struct ReviewRenderer<'a> {
    catalog: &'a QuestionCatalog,
    rules: &'a RuleTable,
    truncate_at: usize,
}

impl<'a> ReviewRenderer<'a> {
    pub fn new(catalog: &'a QuestionCatalog, rules: &'a RuleTable) -> Self {
        Self {
            catalog,
            rules,
            truncate_at: DEFAULT_TRUNCATE_AT,
        }
    }

    pub fn with_truncate_at(mut self, truncate_at: usize) -> Self {
        self.truncate_at = truncate_at;
        self
    }

    fn question_id(&self, answer: &SubmittedAnswer) -> Option<QuestionId> {
        let id = self.catalog.find_by_text(&answer.pergunta).map(|q| q.id);
        if id.is_none() {
            warn!(
                "Question text {:?} not found in catalog, showing answer unconditionally",
                answer.pergunta
            );
        }
        id
    }

    /// Answers worth showing, in submission order.
    ///
    /// A conditional answer is shown only while its controller's recorded answer
    /// matches the rule, and never when it is exactly "Não".
    pub fn visible<'b>(&self, answers: &'b [SubmittedAnswer]) -> Vec<&'b SubmittedAnswer> {
        let resolved: Vec<(Option<QuestionId>, &SubmittedAnswer)> =
            answers.iter().map(|a| (self.question_id(a), a)).collect();

        let by_question: HashMap<QuestionId, &str> = resolved
            .iter()
            .filter_map(|&(id, a)| id.map(|id| (id, a.resposta.as_str())))
            .collect();

        resolved
            .into_iter()
            .filter(|&(id, answer)| {
                let Some(rule) = id.and_then(|id| self.rules.rule_for(id)) else {
                    return true;
                };
                let controller_matches =
                    by_question.get(&rule.controller).copied() == Some(rule.required_value.as_str());
                controller_matches && answer.resposta != HIDDEN_ANSWER
            })
            .map(|(_, answer)| answer)
            .collect()
    }

    pub fn render<'b>(
        &self,
        answers: &'b [SubmittedAnswer],
        expansion: &ExpansionState,
    ) -> Vec<RenderedAnswer<'b>> {
        self.visible(answers)
            .into_iter()
            .map(|answer| {
                let is_long = answer.resposta.chars().count() > self.truncate_at;
                let expanded = expansion.is_expanded(answer.id);
                let text = if is_long && !expanded {
                    let head: String = answer.resposta.chars().take(self.truncate_at).collect();
                    Cow::Owned(format!("{}...", head))
                } else {
                    Cow::Borrowed(answer.resposta.as_str())
                };

                RenderedAnswer {
                    id: answer.id,
                    question: &answer.pergunta,
                    text,
                    is_long,
                    expanded,
                }
            })
            .collect()
    }
}
