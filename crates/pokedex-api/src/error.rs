use thiserror::Error;

/// Top-level error type for the `pokedex-api` crate.
///
/// Covers every failure mode of an upstream call: transport, non-2xx
/// statuses, and response decoding. `pokedex-core` maps these into
/// domain-level errors before they reach the HTTP boundary.
#[derive(Debug, Error)]
pub enum Error {
    // ── Upstream status ─────────────────────────────────────────────
    /// Upstream returned 404 for the requested resource.
    ///
    /// Kept separate from [`Error::Status`] so callers can map a missing
    /// named resource to "not found" instead of "internal error".
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx response.
    #[error("Upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The upstream HTTP status, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
