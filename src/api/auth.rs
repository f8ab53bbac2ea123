//! Organization login, registration and password reset

use super::client::AdoteClient;
use super::constants;
use super::error::ApiError;
use super::models::{Endereco, LoginResponse};
use log::info;
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub numero: String,
    pub cnpj: String,
    pub endereco: Endereco,
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nova_senha: Option<&'a str>,
}

impl AdoteClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        info!("Logging in as {}", email);
        let body = LoginRequest {
            email,
            senha: password,
        };
        self.send_json(Method::POST, constants::login_path(), &body, false)
            .await
    }

    pub async fn register_organization(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        info!("Registering organization {}", request.nome);
        self.send_empty(Method::POST, constants::register_path(), Some(request), false)
            .await
    }

    /// Ask the backend to e-mail a reset code
    pub async fn request_reset_code(&self, email: &str) -> Result<(), ApiError> {
        let body = ResetPasswordRequest {
            email,
            token: None,
            nova_senha: None,
        };
        self.send_empty(
            Method::POST,
            &constants::reset_password_path("request"),
            Some(&body),
            false,
        )
        .await
    }

    pub async fn verify_reset_code(&self, email: &str, code: &str) -> Result<(), ApiError> {
        let body = ResetPasswordRequest {
            email,
            token: Some(code),
            nova_senha: None,
        };
        self.send_empty(
            Method::POST,
            &constants::reset_password_path("verify"),
            Some(&body),
            false,
        )
        .await
    }

    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = ResetPasswordRequest {
            email,
            token: Some(code),
            nova_senha: Some(new_password),
        };
        self.send_empty(
            Method::POST,
            &constants::reset_password_path("new-password"),
            Some(&body),
            false,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_body_omits_missing_fields() {
        let body = ResetPasswordRequest {
            email: "ong@example.com",
            token: None,
            nova_senha: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"email":"ong@example.com"}"#);

        let body = ResetPasswordRequest {
            email: "ong@example.com",
            token: Some("123456"),
            nova_senha: Some("segredo1"),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"email":"ong@example.com","token":"123456","novaSenha":"segredo1"}"#
        );
    }
}
