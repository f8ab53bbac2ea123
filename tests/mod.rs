/// Test modules for adote-cli
///
/// Tests are organized into logical groupings:
/// - api: wire models and live backend checks
/// - config: configuration persistence
/// - questionnaire: conditional questionnaire engine and session lifecycle
mod api;
mod config;
mod questionnaire;
