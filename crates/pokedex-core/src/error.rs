// ── Core error types ──
//
// Domain-level errors from pokedex-core. The boundary maps these onto
// HTTP statuses -- consumers never see reqwest errors or JSON parse
// failures directly. The `From<pokedex_api::Error>` impl translates
// transport-layer errors into the two kinds the boundary cares about.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The named resource does not exist upstream.
    #[error("Pokémon not found: {identifier}")]
    NotFound { identifier: String },

    /// Any other upstream failure: transport, non-2xx status, bad JSON.
    #[error("Upstream request failed: {message}")]
    Upstream {
        message: String,
        /// HTTP status code (if one was received).
        status: Option<u16>,
    },
}

impl CoreError {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pokedex_api::Error> for CoreError {
    fn from(err: pokedex_api::Error) -> Self {
        match err {
            pokedex_api::Error::NotFound { url } => Self::NotFound { identifier: url },
            other => Self::Upstream {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}
