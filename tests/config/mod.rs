use adote_cli::config::{Config, Session};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let config = Config::load_from(&dir.path().join("config.toml"))?;

    assert!(config.api_base_url.is_none());
    assert!(config.session.is_none());
    assert_eq!(
        config.settings.review_truncate_at,
        Config::default().settings.review_truncate_at
    );
    Ok(())
}

#[test]
fn test_config_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set_api_base_url("https://api.adote.example/")?;
    config.set_session(Session::new("jwt-token", Some(3), Some("Patas Unidas".to_string())));
    config.settings.review_truncate_at = 80;
    config.save_to(&path)?;

    let loaded = Config::load_from(&path)?;
    assert_eq!(loaded.api_base_url.as_deref(), Some("https://api.adote.example"));
    assert_eq!(loaded.session, config.session);
    assert!(loaded.active_session().is_some());
    assert_eq!(loaded.settings.review_truncate_at, 80);
    Ok(())
}

#[test]
fn test_logout_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set_session(Session::new("jwt-token", Some(3), None));
    config.save_to(&path)?;

    let mut loaded = Config::load_from(&path)?;
    assert!(loaded.clear_session().is_some());
    loaded.save_to(&path)?;

    assert!(Config::load_from(&path)?.session.is_none());
    Ok(())
}

#[test]
fn test_settings_section_is_optional() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_base_url = \"http://localhost:9000\"\n")?;

    let config = Config::load_from(&path)?;
    assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(
        config.settings.review_truncate_at,
        Config::default().settings.review_truncate_at
    );
    Ok(())
}

#[test]
fn test_corrupt_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is = = not toml")?;

    assert!(Config::load_from(&path).is_err());
    Ok(())
}
