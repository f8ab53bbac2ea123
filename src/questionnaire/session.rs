//! Lifecycle of one adoption questionnaire
//!
//! A session fetches the question catalog once, hands out the engine while the
//! adopter answers, and submits exactly once. A failed submit keeps the answers so
//! the adopter can try again; a successful one discards them.

use super::catalog::{QuestionCatalog, QuestionRecord};
use super::engine::Questionnaire;
use super::formatter::{AdoptionTarget, SubmissionPayload, format_submission};
use super::rules::RuleTable;
use crate::api::ApiError;
use crate::validation::{ContactInfo, FieldError};
use async_trait::async_trait;
use log::{debug, info, warn};
use thiserror::Error;

/// Backend calls a questionnaire session depends on
#[async_trait]
pub trait AdoptionBackend: Send + Sync {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, ApiError>;
    async fn submit_form(&self, payload: &SubmissionPayload) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Catalog not fetched yet
    Loading,
    /// Catalog fetch failed; `retry` is the only way forward
    CatalogUnavailable(String),
    Ready,
    Submitting,
    /// Submitted successfully; answers were discarded
    Closed,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Oops! Erro ao carregar perguntas: {0}")]
    CatalogUnavailable(String),

    #[error("questionnaire is not ready (state: {0:?})")]
    NotReady(SessionState),

    #[error("{} campo(s) inválido(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Erro ao enviar formulário: {0}")]
    SubmissionFailed(String),
}

pub struct QuestionnaireSession<B> {
    backend: B,
    target: AdoptionTarget,
    rules: RuleTable,
    state: SessionState,
    questionnaire: Option<Questionnaire>,
}

impl<B: AdoptionBackend> QuestionnaireSession<B> {
    pub fn new(backend: B, target: AdoptionTarget) -> Self {
        Self::with_rules(backend, target, RuleTable::adoption_form())
    }

    pub fn with_rules(backend: B, target: AdoptionTarget, rules: RuleTable) -> Self {
        Self {
            backend,
            target,
            rules,
            state: SessionState::Loading,
            questionnaire: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn target(&self) -> AdoptionTarget {
        self.target
    }

    pub fn questionnaire(&self) -> Option<&Questionnaire> {
        self.questionnaire.as_ref()
    }

    pub fn questionnaire_mut(&mut self) -> Option<&mut Questionnaire> {
        self.questionnaire.as_mut()
    }

    /// Fetch the catalog and build the engine. No-op once the catalog is loaded.
    pub async fn open(&mut self) -> Result<(), SessionError> {
        if self.questionnaire.is_some() {
            return Ok(());
        }

        debug!("Fetching question catalog for animal {}", self.target.animal_id);
        match self.backend.fetch_questions().await {
            Ok(records) => {
                let catalog = QuestionCatalog::from_records(records);
                info!("Loaded {} questions", catalog.len());
                self.questionnaire = Some(Questionnaire::new(catalog, self.rules.clone()));
                self.state = SessionState::Ready;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to load question catalog: {}", err);
                let message = err.user_message("Erro ao carregar perguntas.");
                self.state = SessionState::CatalogUnavailable(message.clone());
                Err(SessionError::CatalogUnavailable(message))
            }
        }
    }

    /// Manual retry after a catalog failure
    pub async fn retry(&mut self) -> Result<(), SessionError> {
        match &self.state {
            SessionState::CatalogUnavailable(_) | SessionState::Loading => self.open().await,
            other => Err(SessionError::NotReady(other.clone())),
        }
    }

    /// Validate, format and send the form.
    ///
    /// On success the answers are discarded and the session closes. On failure the
    /// session returns to `Ready` with every answer intact.
    pub async fn submit(&mut self, contact: &ContactInfo) -> Result<SubmissionPayload, SessionError> {
        let questionnaire = match (&self.state, &self.questionnaire) {
            (SessionState::Ready, Some(questionnaire)) => questionnaire,
            (state, _) => return Err(SessionError::NotReady(state.clone())),
        };

        let mut errors = contact.validate().err().unwrap_or_default();
        errors.extend(questionnaire.validate().err().unwrap_or_default());
        if !errors.is_empty() {
            return Err(SessionError::Validation(errors));
        }

        let payload = format_submission(questionnaire, contact, self.target);
        self.state = SessionState::Submitting;
        info!(
            "Submitting adoption form for animal {} with {} answers",
            payload.id_animal,
            payload.respostas.len()
        );

        match self.backend.submit_form(&payload).await {
            Ok(()) => {
                self.questionnaire = None;
                self.state = SessionState::Closed;
                Ok(payload)
            }
            Err(err) => {
                warn!("Form submission failed: {}", err);
                self.state = SessionState::Ready;
                Err(SessionError::SubmissionFailed(
                    err.user_message("Erro ao enviar formulário. Tente novamente."),
                ))
            }
        }
    }

    /// Discard all in-memory state
    pub fn close(&mut self) {
        self.questionnaire = None;
        self.state = SessionState::Closed;
    }
}
