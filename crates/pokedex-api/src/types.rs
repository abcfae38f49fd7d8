//! Response types for the PokeAPI REST endpoints this client consumes.
//!
//! All types match the JSON returned by `/api/v2/` resources. Only the
//! fields the aggregation layer reads are modeled; serde skips the rest.

use serde::{Deserialize, Serialize};

// ── Common ───────────────────────────────────────────────────────────

/// A `{name, url}` reference to another resource.
///
/// The `url` is fully qualified and can be fetched verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// An anonymous `{url}` reference (e.g. a species' evolution chain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUrl {
    pub url: String,
}

/// One page of a paginated collection — from `GET /pokemon?limit=&offset=`.
///
/// `next` is null on the last page; that is the only pagination signal
/// the aggregation layer uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

// ── Pokémon ──────────────────────────────────────────────────────────

/// Sprite URLs for a Pokémon. Upstream sends null when no artwork exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// One slotted type entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One ability entry with its hidden-ability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

/// How a move is learned in one version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
}

/// One move entry with its per-version learn details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// A full Pokémon resource — from `GET /pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Decimeters, passed through untouched.
    pub height: u32,
    /// Hectograms, passed through untouched.
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<MoveEntry>,
    pub species: NamedResource,
}

// ── Species & evolution ──────────────────────────────────────────────

/// A species resource — only the evolution chain reference is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub evolution_chain: ResourceUrl,
}

/// One node of the evolution tree. A species may evolve into zero, one,
/// or several forms, so `evolves_to` is an ordered list of subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
}

/// An evolution chain resource — from `GET /evolution-chain/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}
