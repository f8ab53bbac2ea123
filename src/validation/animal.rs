use super::{Checks, FieldError};
use std::path::PathBuf;

pub const MAX_PHOTOS: usize = 3;

pub const SEXES: &[&str] = &["Macho", "Femea"];
pub const SIZES: &[&str] = &["Pequeno", "Medio", "Grande"];

/// Animal registration form as filled in by an organization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalDraft {
    pub nome: String,
    pub tipo: String,
    pub sexo: String,
    pub porte: String,
    pub idade: String,
    pub vacinado: bool,
    pub castrado: bool,
    pub vermifugado: bool,
    pub srd: bool,
    pub descricao: String,
    pub fotos: Vec<PathBuf>,
}

impl AnimalDraft {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        self.validate_with_photo_count(self.fotos.len())
    }

    /// Same rules, for an update where the photo total is existing photos
    /// kept plus new uploads
    pub fn validate_with_photo_count(&self, photos: usize) -> Result<(), Vec<FieldError>> {
        let mut checks = Checks::default();
        checks
            .check("nome", !self.nome.trim().is_empty(), "O nome é obrigatório")
            .check("sexo", SEXES.contains(&self.sexo.as_str()), "O sexo é obrigatório")
            .check("porte", SIZES.contains(&self.porte.as_str()), "O porte é obrigatório")
            .check("fotos", photos > 0, "Pelo menos uma foto é obrigatória")
            .check(
                "fotos",
                photos <= MAX_PHOTOS,
                "No máximo 3 fotos são permitidas",
            );
        checks.finish()
    }
}
