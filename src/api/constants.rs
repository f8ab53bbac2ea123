//! API constants and endpoint builders for the Adote backend

/// Backend used when neither config nor environment name one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the configured base URL
pub const API_BASE_URL_ENV: &str = "ADOTE_API_BASE_URL";

pub const USER_AGENT: &str = "adote-cli/0.1";

/// Third-party CEP lookup service
pub const VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// Standard headers for backend requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Multipart part names used by the animal endpoints
pub mod parts {
    pub const DATA: &str = "dados";
    pub const PHOTOS: &str = "fotos";
    pub const NEW_PHOTOS: &str = "novasFotos";
    pub const PHOTOS_TO_REMOVE: &str = "fotosParaRemover";
}

/// Join a base URL and a path with exactly one slash between them
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn login_path() -> &'static str {
    "auth/login"
}

pub fn register_path() -> &'static str {
    "auth/register"
}

pub fn reset_password_path(step: &str) -> String {
    format!("reset-password/{}", step)
}

pub fn questions_path() -> &'static str {
    "pergunta"
}

pub fn forms_path() -> &'static str {
    "formulario"
}

pub fn organization_forms_path(organization_id: i64) -> String {
    format!("formulario/organizacao/{}", organization_id)
}

pub fn animal_forms_path(animal_id: i64) -> String {
    format!("formulario/animal/{}", animal_id)
}

pub fn accept_form_path(form_id: i64) -> String {
    format!("formulario/{}/aceitar", form_id)
}

pub fn reject_form_path(form_id: i64) -> String {
    format!("formulario/{}/recusar", form_id)
}

pub fn animals_path() -> &'static str {
    "animal"
}

pub fn animal_path(animal_id: i64) -> String {
    format!("animal/{}", animal_id)
}

pub fn organization_animals_path(organization_id: i64) -> String {
    format!("animal/organizacao/{}", organization_id)
}

pub fn organizations_path() -> &'static str {
    "organizacao"
}

pub fn organization_path(organization_id: i64) -> String {
    format!("organizacao/{}", organization_id)
}

pub fn pix_keys_path() -> &'static str {
    "chavepix"
}

pub fn pix_key_path(pix_id: i64) -> String {
    format!("chavepix/{}", pix_id)
}

pub fn organization_pix_key_path(organization_id: i64) -> String {
    format!("chavepix/organizacao/{}", organization_id)
}

pub fn pix_qr_code_path() -> &'static str {
    "qrcodepix"
}

pub fn cep_endpoint(cep: &str) -> String {
    format!("{}/{}/json/", VIACEP_BASE_URL, cep)
}
