//! Conditional questionnaire engine
//!
//! Decides which catalog questions are visible for the current answers and keeps
//! dependent answers consistent when a controlling answer changes.

use super::answers::{Answer, AnswerSet};
use super::catalog::{Question, QuestionCatalog, QuestionId, QuestionKind};
use super::error::QuestionnaireError;
use super::rules::RuleTable;
use crate::validation::{FieldError, REQUIRED_ANSWER};
use log::{debug, warn};
use std::collections::BTreeSet;

/// One in-progress questionnaire: catalog, rules and the adopter's answers
#[derive(Debug, Clone)]
pub struct Questionnaire {
    catalog: QuestionCatalog,
    rules: RuleTable,
    answers: AnswerSet,
}

impl Questionnaire {
    pub fn new(catalog: QuestionCatalog, rules: RuleTable) -> Self {
        Self::with_answers(catalog, rules, AnswerSet::new())
    }

    /// Resume from existing answers; dependents without an entry start hidden
    pub fn with_answers(catalog: QuestionCatalog, rules: RuleTable, answers: AnswerSet) -> Self {
        let mut questionnaire = Self {
            catalog,
            rules,
            answers,
        };
        questionnaire.apply_initial_defaults();
        questionnaire
    }

    fn apply_initial_defaults(&mut self) {
        let defaulted: Vec<QuestionId> = self
            .catalog
            .iter()
            .map(|q| q.id)
            .filter(|&id| self.rules.is_conditional(id) && !self.answers.contains(id))
            .collect();

        for id in defaulted {
            self.answers.set(id, Answer::Hidden);
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(id)
    }

    pub fn options(&self, id: QuestionId) -> &[String] {
        self.catalog.options(id)
    }

    /// Unconditional questions are always visible; conditional ones only while
    /// their controller holds the required answer.
    pub fn is_visible(&self, id: QuestionId) -> bool {
        match self.rules.rule_for(id) {
            None => true,
            Some(rule) => self.answers.text(rule.controller) == Some(rule.required_value.as_str()),
        }
    }

    pub fn visible_questions(&self) -> Vec<&Question> {
        self.catalog.iter().filter(|q| self.is_visible(q.id)).collect()
    }

    /// Record an answer and cascade to its dependents.
    ///
    /// Unknown question ids are ignored with a warning; use [`Self::try_set_answer`]
    /// to get the error instead.
    pub fn set_answer(&mut self, id: QuestionId, value: impl Into<String>) {
        if let Err(err) = self.try_set_answer(id, value) {
            warn!("Ignoring answer: {}", err);
        }
    }

    pub fn try_set_answer(
        &mut self,
        id: QuestionId,
        value: impl Into<String>,
    ) -> Result<(), QuestionnaireError> {
        if !self.catalog.contains(id) {
            return Err(QuestionnaireError::UnknownQuestion(id));
        }

        let value = value.into();
        debug!("Answer for question {}: {:?}", id, value);
        self.answers.set(id, Answer::Answered(value));
        self.propagate(id);
        Ok(())
    }

    // Dependents come in topological order, so each visibility check already sees
    // the updated state of its controller.
    fn propagate(&mut self, changed: QuestionId) {
        for dependent in self.rules.downstream(changed) {
            if !self.catalog.contains(dependent) {
                continue;
            }

            let visible = self.is_visible(dependent);
            let hidden = matches!(self.answers.get(dependent), Some(Answer::Hidden));

            if !visible {
                debug!("Question {} hidden by answer to {}", dependent, changed);
                self.answers.set(dependent, Answer::Hidden);
            } else if hidden {
                debug!("Question {} revealed by answer to {}", dependent, changed);
                self.answers.set(dependent, Answer::Unset);
            }
        }
    }

    /// Every visible question needs a non-empty answer, and multiple-choice answers
    /// must be one of the question's options.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for question in self.visible_questions() {
            let field = answer_field(question.id);
            match self.answers.text(question.id) {
                Some(text) if !text.trim().is_empty() => {
                    let options = self.catalog.options(question.id);
                    if question.kind == QuestionKind::MultipleChoice
                        && !options.is_empty()
                        && !options.iter().any(|o| o == text)
                    {
                        errors.push(FieldError::new(field, "Selecione uma das opções disponíveis"));
                    }
                }
                _ => errors.push(FieldError::new(field, REQUIRED_ANSWER)),
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Ids of visible questions holding a non-empty answer
    pub fn visible_answered_ids(&self) -> BTreeSet<QuestionId> {
        self.catalog
            .iter()
            .filter(|q| self.is_visible(q.id))
            .filter(|q| self.answers.get(q.id).is_some_and(Answer::is_answered))
            .map(|q| q.id)
            .collect()
    }

    /// Drop all answers and start over with the initial defaults
    pub fn reset(&mut self) {
        self.answers.clear();
        self.apply_initial_defaults();
    }
}

/// Field name a validation error for question `id` is reported under
pub fn answer_field(id: QuestionId) -> String {
    format!("{}{}", ANSWER_FIELD_PREFIX, id)
}

/// Question id behind an `answer_field` name
pub fn question_of_field(field: &str) -> Option<QuestionId> {
    field.strip_prefix(ANSWER_FIELD_PREFIX)?.parse().ok()
}

const ANSWER_FIELD_PREFIX: &str = "respostas.";
