use super::records;
use adote_cli::api::ApiError;
use adote_cli::questionnaire::{
    AdoptionBackend, AdoptionTarget, QuestionRecord, QuestionnaireSession, SessionError,
    SessionState, SubmissionPayload, load_review_catalog,
};
use adote_cli::validation::ContactInfo;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct BackendState {
    catalog_failures_left: usize,
    fetch_calls: usize,
    empty_catalog: bool,
    fail_submit: bool,
    submitted: Vec<SubmissionPayload>,
}

#[derive(Clone, Default)]
struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    fn failing_catalog(times: usize) -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().catalog_failures_left = times;
        backend
    }

    fn failing_submit() -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().fail_submit = true;
        backend
    }
}

#[async_trait]
impl AdoptionBackend for FakeBackend {
    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.fetch_calls += 1;
        if state.catalog_failures_left > 0 {
            state.catalog_failures_left -= 1;
            return Err(ApiError::Status {
                status: 503,
                message: Some("Serviço indisponível".to_string()),
            });
        }
        if state.empty_catalog {
            return Ok(Vec::new());
        }
        Ok(records())
    }

    async fn submit_form(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_submit {
            return Err(ApiError::Status {
                status: 500,
                message: None,
            });
        }
        state.submitted.push(payload.clone());
        Ok(())
    }
}

const TARGET: AdoptionTarget = AdoptionTarget {
    animal_id: 10,
    organization_id: 3,
};

fn contact() -> ContactInfo {
    ContactInfo {
        nome: "Maria Souza".to_string(),
        idade: "34".to_string(),
        cpf: "123.456.789-09".to_string(),
        telefone: "(11) 98765-4321".to_string(),
        email: "maria@example.com".to_string(),
    }
}

fn answer_apartment_path(session: &mut QuestionnaireSession<FakeBackend>) {
    let questionnaire = session.questionnaire_mut().unwrap();
    questionnaire.set_answer(1, "Rex é ótimo");
    questionnaire.set_answer(5, "Apartamento");
}

#[tokio::test]
async fn test_catalog_failure_then_manual_retry() {
    let backend = FakeBackend::failing_catalog(1);
    let mut session = QuestionnaireSession::new(backend.clone(), TARGET);

    match session.open().await {
        Err(SessionError::CatalogUnavailable(message)) => {
            assert_eq!(message, "Serviço indisponível")
        }
        other => panic!("expected catalog failure, got {:?}", other),
    }
    assert!(matches!(session.state(), SessionState::CatalogUnavailable(_)));
    assert!(session.questionnaire().is_none());

    session.retry().await.unwrap();
    assert_eq!(session.state(), &SessionState::Ready);
    assert_eq!(session.questionnaire().unwrap().catalog().len(), 5);
    assert_eq!(backend.state.lock().unwrap().fetch_calls, 2);
}

#[tokio::test]
async fn test_retry_only_after_failure() {
    let mut session = QuestionnaireSession::new(FakeBackend::default(), TARGET);
    session.open().await.unwrap();

    let err = session.retry().await.unwrap_err();
    assert!(matches!(err, SessionError::NotReady(SessionState::Ready)));
}

#[tokio::test]
async fn test_submit_before_open_is_rejected() {
    let mut session = QuestionnaireSession::new(FakeBackend::default(), TARGET);

    let err = session.submit(&contact()).await.unwrap_err();
    assert!(matches!(err, SessionError::NotReady(SessionState::Loading)));
}

#[tokio::test]
async fn test_validation_errors_keep_session_ready() {
    let backend = FakeBackend::default();
    let mut session = QuestionnaireSession::new(backend.clone(), TARGET);
    session.open().await.unwrap();
    session.questionnaire_mut().unwrap().set_answer(5, "Casa");

    let mut invalid = contact();
    invalid.email = "maria".to_string();

    match session.submit(&invalid).await {
        Err(SessionError::Validation(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert!(fields.contains(&"email"));
            assert!(fields.contains(&"respostas.1"));
            assert!(fields.contains(&"respostas.6"));
        }
        other => panic!("expected validation errors, got {:?}", other),
    }
    assert_eq!(session.state(), &SessionState::Ready);
    assert!(backend.state.lock().unwrap().submitted.is_empty());
}

#[tokio::test]
async fn test_submit_failure_keeps_answers() {
    let mut session = QuestionnaireSession::new(FakeBackend::failing_submit(), TARGET);
    session.open().await.unwrap();
    answer_apartment_path(&mut session);

    match session.submit(&contact()).await {
        Err(SessionError::SubmissionFailed(message)) => {
            assert_eq!(message, "Erro ao enviar formulário. Tente novamente.")
        }
        other => panic!("expected submission failure, got {:?}", other),
    }
    assert_eq!(session.state(), &SessionState::Ready);

    let questionnaire = session.questionnaire().unwrap();
    assert_eq!(
        questionnaire.answer(1).and_then(|a| a.text()),
        Some("Rex é ótimo")
    );
    assert_eq!(
        questionnaire.answer(5).and_then(|a| a.text()),
        Some("Apartamento")
    );
}

#[tokio::test]
async fn test_successful_submit_closes_session() {
    let backend = FakeBackend::default();
    let mut session = QuestionnaireSession::new(backend.clone(), TARGET);
    session.open().await.unwrap();
    answer_apartment_path(&mut session);

    let payload = session.submit(&contact()).await.unwrap();
    assert_eq!(payload.id_animal, 10);
    assert_eq!(payload.id_organizacao, 3);
    assert_eq!(payload.idade, 34);

    assert_eq!(session.state(), &SessionState::Closed);
    assert!(session.questionnaire().is_none());

    {
        let state = backend.state.lock().unwrap();
        assert_eq!(state.submitted.len(), 1);
        assert_eq!(state.submitted[0], payload);
    }

    let err = session.submit(&contact()).await.unwrap_err();
    assert!(matches!(err, SessionError::NotReady(SessionState::Closed)));
}

#[tokio::test]
async fn test_review_catalog_failure_is_reported() {
    let backend = FakeBackend::failing_catalog(1);

    match load_review_catalog(&backend).await {
        Err(SessionError::CatalogUnavailable(message)) => {
            assert_eq!(message, "Serviço indisponível")
        }
        other => panic!("expected catalog failure, got {:?}", other.map(|c| c.len())),
    }

    let catalog = load_review_catalog(&backend).await.unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(backend.state.lock().unwrap().fetch_calls, 2);
}

#[tokio::test]
async fn test_empty_review_catalog_is_unavailable() {
    let backend = FakeBackend::default();
    backend.state.lock().unwrap().empty_catalog = true;

    let err = load_review_catalog(&backend).await.unwrap_err();
    assert!(matches!(err, SessionError::CatalogUnavailable(_)));
}
