//! Adoption form endpoints
//!
//! Adopters fetch the question catalog and submit forms anonymously; reading,
//! accepting and rejecting forms requires an organization session.

use super::client::AdoteClient;
use super::constants;
use super::error::ApiError;
use super::models::{AnimalFormsSummary, SubmittedForm};
use crate::questionnaire::{AdoptionBackend, QuestionRecord, SubmissionPayload};
use async_trait::async_trait;
use log::info;
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RejectRequest<'a> {
    justificativa: &'a str,
}

impl AdoteClient {
    pub async fn fetch_question_catalog(&self) -> Result<Vec<QuestionRecord>, ApiError> {
        self.get_json(constants::questions_path(), &[], false).await
    }

    pub async fn submit_adoption_form(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        info!(
            "Sending adoption form for animal {} to organization {}",
            payload.id_animal, payload.id_organizacao
        );
        self.send_empty(Method::POST, constants::forms_path(), Some(payload), false)
            .await
    }

    pub async fn organization_forms(
        &self,
        organization_id: i64,
    ) -> Result<Vec<AnimalFormsSummary>, ApiError> {
        self.get_json(&constants::organization_forms_path(organization_id), &[], true)
            .await
    }

    pub async fn animal_forms(&self, animal_id: i64) -> Result<Vec<SubmittedForm>, ApiError> {
        self.get_json(&constants::animal_forms_path(animal_id), &[], true)
            .await
    }

    pub async fn accept_form(&self, form_id: i64) -> Result<(), ApiError> {
        info!("Accepting form {}", form_id);
        self.send_empty::<()>(Method::POST, &constants::accept_form_path(form_id), None, true)
            .await
    }

    /// Reject a form. The justification is expected to be validated already.
    pub async fn reject_form(&self, form_id: i64, justification: &str) -> Result<(), ApiError> {
        info!("Rejecting form {}", form_id);
        let body = RejectRequest {
            justificativa: justification.trim(),
        };
        self.send_empty(Method::POST, &constants::reject_form_path(form_id), Some(&body), true)
            .await
    }
}

#[async_trait]
impl AdoptionBackend for AdoteClient {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, ApiError> {
        self.fetch_question_catalog().await
    }

    async fn submit_form(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        self.submit_adoption_form(payload).await
    }
}
