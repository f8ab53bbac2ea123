use super::{Checks, FieldError, char_len, is_valid_email};

pub const MIN_PASSWORD_LEN: usize = 6;

fn check_credentials(checks: &mut Checks, email: &str, password: &str) {
    checks
        .check("email", !email.is_empty(), "O e-mail é obrigatório")
        .check("email", is_valid_email(email), "O e-mail precisa ser válido")
        .check("password", !password.is_empty(), "A senha é obrigatória")
        .check(
            "password",
            char_len(password) >= MIN_PASSWORD_LEN,
            "A senha precisa ter pelo menos 6 caracteres",
        );
}

pub fn validate_login(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    check_credentials(&mut checks, email, password);
    checks.finish()
}

/// Organization sign-up form, with masked phone, CEP and CNPJ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub organization_name: String,
    pub email: String,
    pub password: String,
    /// `(00) 00000-0000`
    pub phone: String,
    /// `00000-000`
    pub cep: String,
    /// `00.000.000/0000-00`
    pub cnpj: String,
}

impl Registration {
    /// Shape checks only; whether the CEP exists is a separate lookup
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut checks = Checks::default();
        check_credentials(&mut checks, &self.email, &self.password);
        checks
            .check(
                "organizationName",
                !self.organization_name.trim().is_empty(),
                "O nome da organização é obrigatório",
            )
            .check("phone", char_len(&self.phone) == 15, "O telefone precisa ser válido")
            .check("cep", char_len(&self.cep) == 9, "O CEP precisa ser válido")
            .check("cnpj", char_len(&self.cnpj) == 18, "O CNPJ precisa ser válido");
        checks.finish()
    }
}
