use super::client::{AdoteClient, decode};
use super::constants;
use super::error::ApiError;
use super::models::{CepInfo, ViaCepResponse};
use crate::validation::digits;
use log::debug;

impl AdoteClient {
    /// Resolve a CEP to city and state through viacep.com.br.
    ///
    /// Returns `Ok(None)` when the CEP is malformed or unknown.
    pub async fn lookup_cep(&self, cep: &str) -> Result<Option<CepInfo>, ApiError> {
        let cep = digits(cep);
        if cep.len() != 8 {
            debug!("Skipping lookup of malformed CEP {:?}", cep);
            return Ok(None);
        }

        let response = self
            .http_client()
            .get(constants::cep_endpoint(&cep))
            .send()
            .await?;
        let body: ViaCepResponse = decode(response).await?;
        Ok(body.into_cep_info())
    }
}
