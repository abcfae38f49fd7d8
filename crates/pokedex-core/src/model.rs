//! Domain model served to the frontend.
//!
//! Field names serialize as camelCase to match the wire shape the
//! frontend expects (`hasMore`, `isHidden`, `evolutionChain`). Every
//! value here is built fresh per request from upstream responses and
//! discarded after serialization.

use serde::{Deserialize, Serialize};

/// One row in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub name: String,
    /// Default sprite URL; `None` when upstream provides no sprite.
    pub image: Option<String>,
    /// Type names in upstream slot order.
    pub types: Vec<String>,
}

/// One page of summaries plus the paging window it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPage {
    pub results: Vec<PokemonSummary>,
    /// Whether the upstream collection has entries beyond `offset + limit`.
    pub has_more: bool,
    pub offset: u32,
    pub limit: u32,
}

/// A flattened ability record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// A move; `level` is present only for level-up moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

/// One member of a flattened evolution sequence, in pre-order
/// position of the source branching tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionStage {
    pub name: String,
    pub image: Option<String>,
}

/// The denormalized detail record for a single Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
    /// Decimeters, verbatim from upstream. Unit display is a frontend concern.
    pub height: u32,
    /// Hectograms, verbatim from upstream.
    pub weight: u32,
    pub abilities: Vec<Ability>,
    pub moves: Vec<Move>,
    /// May be empty: evolution data is best-effort.
    pub evolution_chain: Vec<EvolutionStage>,
}
