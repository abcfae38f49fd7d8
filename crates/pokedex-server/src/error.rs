use thiserror::Error;

/// Startup and runtime errors for the server binary.
///
/// Request-level failures never surface here; handlers map those to
/// HTTP statuses directly.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] pokedex_config::ConfigError),

    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] pokedex_api::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
