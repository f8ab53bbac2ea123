use super::constants::{self, headers};
use super::error::ApiError;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the Adote backend with connection pooling
#[derive(Clone)]
pub struct AdoteClient {
    base_url: String,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

impl AdoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(constants::USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self::with_custom_client(base_url, http_client)
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
            access_token: None,
        }
    }

    /// Attach an organization bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Get shared HTTP client for making requests (cheap clone)
    pub fn http_client(&self) -> reqwest::Client {
        self.http_client.clone()
    }

    pub fn url(&self, path: &str) -> String {
        constants::endpoint(&self.base_url, path)
    }

    /// Start a request against the backend. With `authenticated` set the bearer
    /// token is attached, and a missing token fails before anything is sent.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        authenticated: bool,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let builder = self.http_client.request(method, url);
        if !authenticated {
            return Ok(builder);
        }

        let token = self.access_token.as_ref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path, authenticated)?.query(query);
        decode(request.send().await?).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(method, path, authenticated)?
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(body);
        decode(request.send().await?).await
    }

    /// Send a request whose response body is irrelevant
    pub(crate) async fn send_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<(), ApiError> {
        let mut request = self.request(method, path, authenticated)?;
        if let Some(body) = body {
            request = request.json(body);
        }
        check(request.send().await?).await?;
        Ok(())
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let request = self.request(method, path, authenticated)?.multipart(form);
        decode(request.send().await?).await
    }
}

/// Turn a non-success response into `ApiError::Status`
pub(crate) async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    log::debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    log::warn!("Request failed with status {}: {}", status, error_text);
    Err(ApiError::from_body(status.as_u16(), &error_text))
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    let body = response.text().await?;
    let body = if body.trim().is_empty() { "null".to_string() } else { body };
    serde_json::from_str(&body).map_err(|err| {
        log::debug!("Failed to decode body: {}", body);
        ApiError::Decode(err.to_string())
    })
}
