//! Adote backend API
//!
//! A pooled reqwest client plus one module per backend area. Every operation is
//! an inherent method on [`AdoteClient`] returning a typed [`ApiError`].

pub mod animals;
pub mod auth;
pub mod cep;
pub mod client;
pub mod constants;
pub mod error;
pub mod forms;
pub mod manager;
pub mod models;
pub mod organizations;
pub mod pix;

pub use animals::{AnimalFilters, PhotoChanges};
pub use auth::RegisterRequest;
pub use client::AdoteClient;
pub use error::ApiError;
pub use manager::ClientManager;
pub use models::{
    Animal, AnimalData, AnimalFormsSummary, CepInfo, Endereco, LoginResponse, Organizacao, Page,
    Photo, PixKey, SubmittedForm,
};
pub use pix::QrCodeRequest;
