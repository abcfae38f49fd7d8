//! Aggregation core for the Pokemon Explorer backend.
//!
//! Sits between the HTTP boundary and the raw [`pokedex_api`] client.
//! Fans out to dependent upstream endpoints, resolves evolution chains,
//! and assembles the denormalized records the frontend consumes. All
//! values are request-scoped; nothing is cached or shared across requests.

pub mod error;
pub mod explorer;
pub mod model;

pub use error::CoreError;
pub use explorer::Explorer;
pub use model::{Ability, EvolutionStage, Move, PokemonDetail, PokemonPage, PokemonSummary};
