//! Animal listing and management

use super::client::AdoteClient;
use super::constants::{self, headers, parts};
use super::error::ApiError;
use super::models::{Animal, AnimalData, Page};
use log::{debug, info};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Listing filters; empty ones are left out of the query string
#[derive(Debug, Clone, Default)]
pub struct AnimalFilters {
    pub tipo: Option<String>,
    pub idade: Option<String>,
    pub porte: Option<String>,
    pub sexo: Option<String>,
}

impl AnimalFilters {
    pub fn query(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", page.to_string())];
        let filters = [
            ("tipo", &self.tipo),
            ("idade", &self.idade),
            ("porte", &self.porte),
            ("sexo", &self.sexo),
        ];
        for (name, value) in filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                query.push((name, value.to_string()));
            }
        }
        query
    }
}

/// Photos to add and remove when updating an animal
#[derive(Debug, Clone, Default)]
pub struct PhotoChanges {
    pub add: Vec<PathBuf>,
    pub remove: Vec<i64>,
}

impl AdoteClient {
    pub async fn list_animals(
        &self,
        page: u32,
        filters: &AnimalFilters,
    ) -> Result<Page<Animal>, ApiError> {
        self.get_json(constants::animals_path(), &filters.query(page), false)
            .await
    }

    pub async fn get_animal(&self, animal_id: i64) -> Result<Animal, ApiError> {
        self.get_json(&constants::animal_path(animal_id), &[], false).await
    }

    pub async fn organization_animals(
        &self,
        organization_id: i64,
        page: u32,
        filters: &AnimalFilters,
    ) -> Result<Page<Animal>, ApiError> {
        self.get_json(
            &constants::organization_animals_path(organization_id),
            &filters.query(page),
            self.is_authenticated(),
        )
        .await
    }

    pub async fn register_animal(
        &self,
        data: &AnimalData,
        photos: &[PathBuf],
    ) -> Result<Value, ApiError> {
        info!("Registering animal {} with {} photos", data.nome, photos.len());
        let mut form = Form::new().part(parts::DATA, json_part(data)?);
        for path in photos {
            form = form.part(parts::PHOTOS, photo_part(path).await?);
        }
        self.send_multipart(Method::POST, constants::animals_path(), form, true)
            .await
    }

    pub async fn update_animal(
        &self,
        animal_id: i64,
        data: &AnimalData,
        photos: &PhotoChanges,
    ) -> Result<Value, ApiError> {
        info!(
            "Updating animal {} (+{} / -{} photos)",
            animal_id,
            photos.add.len(),
            photos.remove.len()
        );
        let mut form = Form::new().part(parts::DATA, json_part(data)?);
        for path in &photos.add {
            form = form.part(parts::NEW_PHOTOS, photo_part(path).await?);
        }
        for photo_id in &photos.remove {
            form = form.text(parts::PHOTOS_TO_REMOVE, photo_id.to_string());
        }
        self.send_multipart(Method::PATCH, &constants::animal_path(animal_id), form, true)
            .await
    }

    pub async fn delete_animal(&self, animal_id: i64) -> Result<(), ApiError> {
        info!("Deleting animal {}", animal_id);
        self.send_empty::<()>(Method::DELETE, &constants::animal_path(animal_id), None, true)
            .await
    }
}

fn json_part(data: &AnimalData) -> Result<Part, ApiError> {
    let json = serde_json::to_string(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Part::text(json).mime_str(headers::CONTENT_TYPE_JSON)?)
}

async fn photo_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::File {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "foto".to_string());
    debug!("Attaching photo {} ({} bytes)", file_name, bytes.len());

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(image_mime(path))?)
}

pub fn image_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
