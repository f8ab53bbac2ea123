use super::{Checks, FieldError, char_len, digits, is_valid_email};
use serde::{Deserialize, Serialize};

/// Adopter contact fields, validated independently of the questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub nome: String,
    /// Age as typed; parsed on submission
    pub idade: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
}

impl ContactInfo {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let nome_len = char_len(self.nome.trim());
        let email_len = char_len(&self.email);

        let mut checks = Checks::default();
        checks
            .check("nome", nome_len >= 3, "Nome deve conter no mínimo 3 caracteres")
            .check("nome", nome_len <= 100, "Nome não pode exceder 100 caracteres")
            .check(
                "idade",
                self.age().is_some_and(|age| (18..=80).contains(&age)),
                "Idade deve ser um número válido entre 18 e 80",
            )
            .check("cpf", char_len(&self.cpf) >= 14, "CPF deve estar no formato correto")
            .check("cpf", digits(&self.cpf).len() == 11, "CPF deve conter 11 dígitos numéricos")
            .check(
                "telefone",
                char_len(&self.telefone) >= 15,
                "Telefone deve estar no formato correto",
            )
            .check(
                "telefone",
                digits(&self.telefone).len() == 11,
                "Telefone deve conter 11 dígitos numéricos",
            )
            .check("email", is_valid_email(&self.email), "E-mail inválido")
            .check("email", email_len >= 5, "E-mail deve ter pelo menos 5 caracteres")
            .check("email", email_len <= 100, "E-mail não pode exceder 100 caracteres");
        checks.finish()
    }

    pub fn age(&self) -> Option<u32> {
        self.idade.trim().parse().ok()
    }
}
