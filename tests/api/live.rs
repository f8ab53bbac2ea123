use adote_cli::api::{AdoteClient, AnimalFilters};
use adote_cli::api::constants::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use adote_cli::questionnaire::QuestionCatalog;
use anyhow::Result;

fn live_client() -> AdoteClient {
    dotenvy::dotenv().ok();
    let base_url =
        std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    AdoteClient::new(base_url)
}

#[tokio::test]
#[ignore] // Requires a running backend
async fn test_fetch_question_catalog() -> Result<()> {
    let records = live_client().fetch_question_catalog().await?;
    let catalog = QuestionCatalog::from_records(records);
    assert!(!catalog.is_empty());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires a running backend
async fn test_list_animals_first_page() -> Result<()> {
    let page = live_client().list_animals(0, &AnimalFilters::default()).await?;
    assert_eq!(page.number, 0);
    Ok(())
}
