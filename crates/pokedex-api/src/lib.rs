// pokedex-api: Async Rust client for the PokeAPI REST surface

pub mod client;
pub mod error;
pub mod types;

pub use client::PokeClient;
pub use error::Error;
