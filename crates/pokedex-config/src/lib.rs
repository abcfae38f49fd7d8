//! Configuration for the Pokemon Explorer backend.
//!
//! Settings are composed from three layers, later layers winning:
//! built-in defaults, an optional `pokedex.toml` file, and `POKEDEX_*`
//! environment variables. The server binary adds CLI flags on top.

use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Runtime settings for the server and its upstream client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the upstream Pokémon API.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Page size used when a request carries no usable `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    5001
}
fn default_upstream_url() -> String {
    "https://pokeapi.co/api/v2".into()
}
fn default_limit() -> u32 {
    20
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upstream_url: default_upstream_url(),
            default_limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings: defaults, then an optional TOML file, then
    /// `POKEDEX_*` environment variables.
    ///
    /// With an explicit `path` the file must exist; without one,
    /// `pokedex.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let figment = match path {
            Some(p) => figment.merge(Toml::file_exact(p)),
            None => figment.merge(Toml::file("pokedex.toml")),
        };
        let settings: Self = figment.merge(Env::prefixed("POKEDEX_")).extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Validation {
                field: "default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if let Err(e) = Url::parse(&self.upstream_url) {
            return Err(ConfigError::Validation {
                field: "upstream_url".into(),
                reason: e.to_string(),
            });
        }
        Ok(())
    }

    /// The upstream base URL, parsed. `validate` has already checked it.
    pub fn upstream_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.upstream_url).map_err(|e| ConfigError::Validation {
            field: "upstream_url".into(),
            reason: e.to_string(),
        })
    }

    /// Upstream request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The `host:port` pair the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5001);
        assert_eq!(settings.default_limit, 20);
        assert_eq!(settings.upstream_url, "https://pokeapi.co/api/v2");
        assert_eq!(settings.listen_addr(), "127.0.0.1:5001");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("POKEDEX_PORT", "8080");
            jail.set_env("POKEDEX_UPSTREAM_URL", "http://localhost:9999/api/v2");

            let settings = Settings::load(None).expect("load");
            assert_eq!(settings.port, 8080);
            assert_eq!(settings.upstream_url, "http://localhost:9999/api/v2");
            // Untouched values keep their defaults.
            assert_eq!(settings.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn toml_file_sits_between_defaults_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "pokedex.toml",
                r#"
                port = 3000
                default_limit = 50
                "#,
            )?;
            jail.set_env("POKEDEX_PORT", "4000");

            let settings = Settings::load(None).expect("load");
            assert_eq!(settings.port, 4000);
            assert_eq!(settings.default_limit, 50);
            Ok(())
        });
    }

    #[test]
    fn zero_default_limit_is_rejected() {
        let settings = Settings {
            default_limit: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn bad_upstream_url_is_rejected() {
        let settings = Settings {
            upstream_url: "not a url".into(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }
}
