use super::client::AdoteClient;
use super::error::ApiError;
use crate::config::{Config, Session};

/// Builds clients from the stored configuration and login session
pub struct ClientManager {
    base_url: String,
    session: Option<Session>,
}

impl ClientManager {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.effective_base_url(),
            session: config.session.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Anonymous client for the public endpoints
    pub fn client(&self) -> AdoteClient {
        AdoteClient::new(self.base_url.clone())
    }

    /// Client carrying the organization token
    pub fn authenticated_client(&self) -> Result<AdoteClient, ApiError> {
        let session = self.session.as_ref().ok_or(ApiError::NotAuthenticated)?;

        if session.is_expired() {
            log::warn!("Session expired at {}", session.expires_at);
            return Err(ApiError::NotAuthenticated);
        }

        Ok(self.client().with_token(session.token.clone()))
    }

    /// Organization id of the logged-in session
    pub fn organization_id(&self) -> Result<i64, ApiError> {
        self.session
            .as_ref()
            .and_then(|s| s.organizacao_id)
            .ok_or(ApiError::NotAuthenticated)
    }
}
