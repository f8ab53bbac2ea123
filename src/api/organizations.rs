use super::client::AdoteClient;
use super::constants;
use super::error::ApiError;
use super::models::{Organizacao, Page};

impl AdoteClient {
    /// List organizations, optionally narrowed to a state and city
    pub async fn list_organizations(
        &self,
        page: u32,
        estado: Option<&str>,
        cidade: Option<&str>,
    ) -> Result<Page<Organizacao>, ApiError> {
        self.get_json(
            constants::organizations_path(),
            &organization_query(page, estado, cidade),
            false,
        )
        .await
    }

    pub async fn get_organization(&self, organization_id: i64) -> Result<Organizacao, ApiError> {
        self.get_json(&constants::organization_path(organization_id), &[], false)
            .await
    }
}

fn organization_query(
    page: u32,
    estado: Option<&str>,
    cidade: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.to_string())];
    if let Some(estado) = estado.filter(|s| !s.is_empty()) {
        query.push(("estado", estado.to_string()));
    }
    if let Some(cidade) = cidade.filter(|s| !s.is_empty()) {
        query.push(("cidade", cidade.to_string()));
    }
    query
}
