//! Display formatters for Brazilian document and contact numbers

use super::digits;
use once_cell::sync::Lazy;
use regex::Regex;

static CNPJ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})$").expect("valid CNPJ regex"));
static CPF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{3})(\d{3})(\d{2})$").expect("valid CPF regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{5})(\d{4})$").expect("valid phone regex"));
static CEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{5})(\d{3})$").expect("valid CEP regex"));

// Values that don't have the expected digit count are returned unchanged.
fn reformat(re: &Regex, value: &str, template: &str) -> String {
    let raw = digits(value);
    if re.is_match(&raw) {
        re.replace(&raw, template).into_owned()
    } else {
        value.to_string()
    }
}

/// `12345678000199` -> `12.345.678/0001-99`
pub fn format_cnpj(cnpj: &str) -> String {
    reformat(&CNPJ_RE, cnpj, "$1.$2.$3/$4-$5")
}

/// `12345678909` -> `123.456.789-09`
pub fn format_cpf(cpf: &str) -> String {
    reformat(&CPF_RE, cpf, "$1.$2.$3-$4")
}

/// `11987654321` -> `(11) 98765-4321`
pub fn format_phone(phone: &str) -> String {
    reformat(&PHONE_RE, phone, "($1) $2-$3")
}

/// `01310100` -> `01310-100`
pub fn format_cep(cep: &str) -> String {
    reformat(&CEP_RE, cep, "$1-$2")
}
