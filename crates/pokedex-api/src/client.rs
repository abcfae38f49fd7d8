// PokeAPI HTTP client
//
// Wraps `reqwest::Client` with PokeAPI-specific URL construction and
// status mapping. All methods return decoded payloads; callers never see
// a raw `reqwest::Response`.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::types::{EvolutionChain, Pokemon, ResourceList, Species};

/// Typed client for the PokeAPI REST surface.
///
/// Holds a single `reqwest::Client`, so connections are pooled and reused
/// across calls for free. The client carries no state beyond the base URL;
/// it is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeClient {
    /// Create a new client against `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Used by tests that want to point at a mock server without going
    /// through the builder.
    pub fn from_reqwest(base_url: Url, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an upstream path relative to the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch one page of the Pokémon collection.
    pub async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<ResourceList, Error> {
        let mut url = self.endpoint("pokemon")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        self.get_json(url).await
    }

    /// Fetch a full Pokémon resource by name. The caller is responsible
    /// for lower-casing; upstream names are all lowercase.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon, Error> {
        let url = self.endpoint(&format!("pokemon/{name}"))?;
        self.get_json(url).await
    }

    /// Fetch a full Pokémon resource at a URL taken from a collection entry.
    pub async fn get_pokemon_at(&self, url: &str) -> Result<Pokemon, Error> {
        self.get_json(Url::parse(url)?).await
    }

    /// Fetch a species resource at a URL taken from a Pokémon's species ref.
    pub async fn get_species_at(&self, url: &str) -> Result<Species, Error> {
        self.get_json(Url::parse(url)?).await
    }

    /// Fetch an evolution chain resource at a URL taken from a species.
    pub async fn get_evolution_chain_at(&self, url: &str) -> Result<EvolutionChain, Error> {
        self.get_json(Url::parse(url)?).await
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    ///
    /// Maps 404 to [`Error::NotFound`] and any other non-2xx status to
    /// [`Error::Status`] before attempting to decode.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = truncate_to_char_boundary(&body, 200);
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

/// Truncate to at most `max` bytes without splitting a multi-byte
/// character. Upstream bodies carry non-ASCII text ("Pokémon"), so a
/// fixed byte index is not safe to slice at.
fn truncate_to_char_boundary(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
