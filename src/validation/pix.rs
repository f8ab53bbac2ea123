use super::{FieldError, is_valid_email};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum PixKeyType {
    Telefone,
    Email,
    Cpf,
    Cnpj,
    /// Random key (UUID)
    Outro,
}

impl PixKeyType {
    pub fn from_wire(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "TELEFONE" => Some(PixKeyType::Telefone),
            "EMAIL" => Some(PixKeyType::Email),
            "CPF" => Some(PixKeyType::Cpf),
            "CNPJ" => Some(PixKeyType::Cnpj),
            "OUTRO" => Some(PixKeyType::Outro),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            PixKeyType::Telefone => "TELEFONE",
            PixKeyType::Email => "EMAIL",
            PixKeyType::Cpf => "CPF",
            PixKeyType::Cnpj => "CNPJ",
            PixKeyType::Outro => "OUTRO",
        }
    }
}

impl fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Validate a PIX key against the rules of its type
pub fn validate_pix_key(kind: PixKeyType, key: &str) -> Result<(), FieldError> {
    let valid = match kind {
        PixKeyType::Telefone => all_digits(key, 11),
        PixKeyType::Email => is_valid_email(key),
        PixKeyType::Cpf => all_digits(key, 11),
        PixKeyType::Cnpj => all_digits(key, 14),
        PixKeyType::Outro => key.len() == 36 && uuid::Uuid::parse_str(key).is_ok(),
    };

    if valid {
        Ok(())
    } else {
        Err(FieldError::new("chave", "Chave PIX inválida"))
    }
}
