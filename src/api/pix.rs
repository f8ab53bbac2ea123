use super::client::AdoteClient;
use super::constants;
use super::error::ApiError;
use super::models::PixKey;
use crate::validation::PixKeyType;
use log::info;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct PixKeyRequest<'a> {
    tipo: PixKeyType,
    chave: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    organizacao_id: Option<i64>,
}

/// Data encoded into a PIX QR code
#[derive(Debug, Clone, Serialize)]
pub struct QrCodeRequest {
    pub tipo: PixKeyType,
    pub chave: String,
    pub nome: String,
    pub cidade: String,
}

impl AdoteClient {
    /// The organization's PIX key, or `None` when it has not registered one
    pub async fn organization_pix_key(&self, organization_id: i64) -> Result<Option<PixKey>, ApiError> {
        let result = self
            .get_json(&constants::organization_pix_key_path(organization_id), &[], false)
            .await;
        match result {
            Ok(key) => Ok(key),
            Err(err) if err.status() == Some(404) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn register_pix_key(
        &self,
        organization_id: i64,
        tipo: PixKeyType,
        chave: &str,
    ) -> Result<Value, ApiError> {
        info!("Registering {} PIX key for organization {}", tipo, organization_id);
        let body = PixKeyRequest {
            tipo,
            chave,
            organizacao_id: Some(organization_id),
        };
        self.send_json(Method::POST, constants::pix_keys_path(), &body, true)
            .await
    }

    pub async fn update_pix_key(
        &self,
        pix_id: i64,
        tipo: PixKeyType,
        chave: &str,
    ) -> Result<Value, ApiError> {
        info!("Updating PIX key {}", pix_id);
        let body = PixKeyRequest {
            tipo,
            chave,
            organizacao_id: None,
        };
        self.send_json(Method::PATCH, &constants::pix_key_path(pix_id), &body, true)
            .await
    }

    /// Ask the backend for a PIX QR code. The response shape is passed through.
    pub async fn generate_pix_qr_code(&self, request: &QrCodeRequest) -> Result<Value, ApiError> {
        self.send_json(Method::POST, constants::pix_qr_code_path(), request, false)
            .await
    }
}
