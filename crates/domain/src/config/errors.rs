/// Failures while loading `ferrous-responder.toml` or checking its values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    FileRead(String, String),

    #[error("Invalid TOML: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
