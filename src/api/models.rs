//! Wire models for the Adote backend

use crate::questionnaire::SubmittedAnswer;
use crate::validation::animal::AnimalDraft;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Spring-style page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    /// Zero-based index of this page
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endereco {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub cep: String,
    #[serde(default)]
    pub rua: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizacao {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub endereco: Option<Endereco>,
    #[serde(default)]
    pub email: String,
}

impl Organizacao {
    /// "Cidade - UF", or whatever part of it is known
    pub fn location(&self) -> String {
        match &self.endereco {
            Some(e) if !e.cidade.is_empty() && !e.estado.is_empty() => {
                format!("{} - {}", e.cidade, e.estado)
            }
            Some(e) if !e.cidade.is_empty() => e.cidade.clone(),
            Some(e) => e.estado.clone(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub sexo: Option<String>,
    #[serde(default)]
    pub porte: Option<String>,
    #[serde(default)]
    pub idade: Option<String>,
    #[serde(default)]
    pub vacinado: bool,
    #[serde(default)]
    pub castrado: bool,
    #[serde(default)]
    pub vermifugado: bool,
    #[serde(default)]
    pub srd: bool,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub fotos: Vec<Photo>,
    #[serde(default)]
    pub organizacao: Option<Organizacao>,
}

/// JSON sent in the `dados` part when registering or updating an animal
#[derive(Debug, Clone, Serialize)]
pub struct AnimalData {
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
}

impl From<&AnimalDraft> for AnimalData {
    fn from(draft: &AnimalDraft) -> Self {
        Self {
            nome: draft.nome.trim().to_string(),
            tipo: draft.tipo.trim().to_string(),
            sexo: draft.sexo.clone(),
            porte: draft.porte.clone(),
            idade: draft.idade.trim().to_string(),
            vacinado: draft.vacinado,
            castrado: draft.castrado,
            vermifugado: draft.vermifugado,
            srd: draft.srd,
            descricao: draft.descricao.trim().to_string(),
        }
    }
}

/// A submitted adoption form as an organization sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedForm {
    pub id: i64,
    pub nome_adotante: String,
    pub email: String,
    #[serde(default)]
    pub idade: u32,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub data_envio: String,
    #[serde(default)]
    pub respostas: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub status: String,
}

pub const STATUS_PENDING: &str = "PENDENTE";
pub const STATUS_APPROVED: &str = "APROVADO";

impl SubmittedForm {
    /// Parse `dataEnvio`, which the backend sends as an ISO local timestamp
    pub fn sent_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.data_envio, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.data_envio, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }

    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    pub fn is_approved(&self) -> bool {
        self.status == STATUS_APPROVED
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormAnimal {
    pub id: i64,
    pub nome: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub fotos: Vec<Photo>,
}

/// Per-animal count of received forms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalFormsSummary {
    pub id: i64,
    pub animal: FormAnimal,
    #[serde(default)]
    pub formularios_enviados: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixKey {
    pub id: i64,
    pub tipo: String,
    pub chave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub organizacao_id: Option<i64>,
    #[serde(default)]
    pub organizacao_name: Option<String>,
}

/// City and state resolved from a CEP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepInfo {
    pub cidade: String,
    pub estado: String,
}

/// Raw viacep.com.br response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ViaCepResponse {
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
}

impl ViaCepResponse {
    pub fn into_cep_info(self) -> Option<CepInfo> {
        let not_found = match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            Some(_) => true,
            None => false,
        };
        (!not_found).then(|| CepInfo {
            cidade: self.localidade,
            estado: self.uf,
        })
    }
}

/// Accept either a single object or an array of them
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
        OneOrMany::Null(()) => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_next() {
        let page: Page<Photo> = serde_json::from_str(
            r#"{"content":[{"id":1,"url":"a.png"}],"totalPages":3,"totalElements":25,"number":1}"#,
        )
        .unwrap();
        assert_eq!(page.content.len(), 1);
        assert!(page.has_next());

        let last: Page<Photo> = serde_json::from_str(r#"{"content":[],"totalPages":3,"number":2}"#).unwrap();
        assert!(!last.has_next());
    }

    #[test]
    fn test_summary_accepts_single_photo_object() {
        let json = r#"{"id":4,"animal":{"id":9,"nome":"Thor","fotos":{"id":1,"url":"thor.jpg"}},"formulariosEnviados":2}"#;
        let summary: AnimalFormsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.animal.fotos.len(), 1);
        assert_eq!(summary.formularios_enviados, 2);
    }

    #[test]
    fn test_submitted_form_timestamp() {
        let json = r#"{
            "id": 3, "nomeAdotante": "Ana Souza", "email": "ana@example.com", "idade": 30,
            "telefone": "(11) 98765-4321", "cpf": "123.456.789-09",
            "dataEnvio": "2024-05-02T14:30:00.123",
            "respostas": [{"id": 1, "pergunta": "Por que adotar?", "resposta": "Companhia"}],
            "status": "PENDENTE"
        }"#;
        let form: SubmittedForm = serde_json::from_str(json).unwrap();
        assert!(form.is_pending());
        let sent = form.sent_at().unwrap();
        assert_eq!(sent.format("%d/%m/%Y %H:%M").to_string(), "02/05/2024 14:30");
    }

    #[test]
    fn test_viacep_error_flag() {
        let found: ViaCepResponse =
            serde_json::from_str(r#"{"cep":"01310-100","localidade":"São Paulo","uf":"SP"}"#).unwrap();
        assert_eq!(
            found.into_cep_info(),
            Some(CepInfo { cidade: "São Paulo".into(), estado: "SP".into() })
        );

        let missing: ViaCepResponse = serde_json::from_str(r#"{"erro":true}"#).unwrap();
        assert_eq!(missing.into_cep_info(), None);

        let missing: ViaCepResponse = serde_json::from_str(r#"{"erro":"true"}"#).unwrap();
        assert_eq!(missing.into_cep_info(), None);
    }
}
