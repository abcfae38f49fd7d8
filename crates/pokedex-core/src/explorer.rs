// ── Explorer service ──
//
// The aggregation entry point. One Explorer wraps one PokeClient and
// exposes the three operations the boundary serves: a summary page, a
// denormalized detail record, and (internally) the evolution chain.
//
// Concurrency model: per-request fan-out/fan-in over independent upstream
// calls. Fanned-out results are re-joined in request order, never in
// completion order. No retries, no caching, no cancellation propagation.

use futures::future;
use tracing::debug;

use pokedex_api::types::{ChainLink, MoveEntry};
use pokedex_api::{Error as ApiError, PokeClient};

use crate::error::CoreError;
use crate::model::{Ability, EvolutionStage, Move, PokemonDetail, PokemonPage, PokemonSummary};

/// How moves are filtered: only details with this learn method carry a level.
const LEVEL_UP_METHOD: &str = "level-up";

/// When a Pokémon has no level-up moves at all, fall back to this many
/// entries of the full move list.
const MOVE_FALLBACK_COUNT: usize = 20;

/// Aggregates upstream resources into frontend-facing records.
///
/// Holds no per-request state; cheap to clone and safe to share.
#[derive(Debug, Clone)]
pub struct Explorer {
    client: PokeClient,
}

impl Explorer {
    pub fn new(client: PokeClient) -> Self {
        Self { client }
    }

    // ── List aggregation ─────────────────────────────────────────────

    /// Fetch one page of the collection and resolve each entry's sprite
    /// and types via a parallel fan-out of detail fetches.
    ///
    /// The page preserves the upstream collection order: fan-out futures
    /// are indexed by position and `try_join_all` re-joins them in input
    /// order regardless of completion order.
    ///
    /// A failed collection fetch fails the page. So does any single failed
    /// detail fetch -- there is deliberately no partial-page fallback here,
    /// unlike the evolution resolver's per-node tolerance.
    pub async fn list_page(&self, limit: u32, offset: u32) -> Result<PokemonPage, CoreError> {
        let list = self.client.list_pokemon(limit, offset).await?;
        let has_more = list.next.is_some();

        let fetches = list.results.iter().map(|entry| async move {
            let pokemon = self.client.get_pokemon_at(&entry.url).await?;
            Ok::<_, ApiError>(PokemonSummary {
                name: entry.name.clone(),
                image: pokemon.sprites.front_default,
                types: pokemon.types.into_iter().map(|t| t.type_ref.name).collect(),
            })
        });
        let results = future::try_join_all(fetches).await?;

        Ok(PokemonPage {
            results,
            has_more,
            offset,
            limit,
        })
    }

    // ── Detail aggregation ───────────────────────────────────────────

    /// Build the full detail record for a named Pokémon.
    ///
    /// Fails with [`CoreError::NotFound`] when upstream reports no such
    /// resource; the embedded evolution chain is best-effort and may be
    /// empty even on success.
    pub async fn get_detail(&self, name: &str) -> Result<PokemonDetail, CoreError> {
        let lookup = name.to_lowercase();
        let pokemon = self.client.get_pokemon(&lookup).await.map_err(|err| {
            if err.is_not_found() {
                CoreError::NotFound {
                    identifier: lookup.clone(),
                }
            } else {
                err.into()
            }
        })?;

        let moves = derive_moves(&pokemon.moves);
        let abilities = pokemon
            .abilities
            .into_iter()
            .map(|slot| Ability {
                name: slot.ability.name,
                is_hidden: slot.is_hidden,
            })
            .collect();
        let types = pokemon
            .types
            .into_iter()
            .map(|t| t.type_ref.name)
            .collect();

        let evolution_chain = self.evolution_chain(&pokemon.species.url).await;

        Ok(PokemonDetail {
            name: pokemon.name,
            image: pokemon.sprites.front_default,
            types,
            height: pokemon.height,
            weight: pokemon.weight,
            abilities,
            moves,
            evolution_chain,
        })
    }

    // ── Evolution resolution ─────────────────────────────────────────

    /// Resolve the evolution chain reachable from a species URL into a
    /// flattened pre-order sequence.
    ///
    /// Never fails the caller: if the species or chain lookup fails the
    /// result is empty, and a failed per-stage sprite lookup degrades that
    /// stage to a null image instead of aborting the traversal.
    pub async fn evolution_chain(&self, species_url: &str) -> Vec<EvolutionStage> {
        let chain = match self.fetch_chain(species_url).await {
            Ok(chain) => chain,
            Err(err) => {
                debug!("evolution chain unavailable for {species_url}: {err}");
                return Vec::new();
            }
        };

        let names = flatten_chain(&chain);
        let lookups = names.into_iter().map(|name| async move {
            let image = match self.client.get_pokemon(&name).await {
                Ok(pokemon) => pokemon.sprites.front_default,
                Err(err) => {
                    debug!("sprite lookup failed for {name}: {err}");
                    None
                }
            };
            EvolutionStage { name, image }
        });

        future::join_all(lookups).await
    }

    /// Species lookup followed by the chain lookup it references.
    async fn fetch_chain(&self, species_url: &str) -> Result<ChainLink, ApiError> {
        let species = self.client.get_species_at(species_url).await?;
        let chain = self
            .client
            .get_evolution_chain_at(&species.evolution_chain.url)
            .await?;
        Ok(chain.chain)
    }
}

// ── Pure derivations ─────────────────────────────────────────────────

/// Flatten the branching evolution tree into pre-order: each node before
/// its children, children in listed order.
///
/// Upstream guarantees the chain is a finite tree, so no cycle guard is
/// needed here.
fn flatten_chain(root: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        names.push(node.species.name.clone());
        // Push children reversed so the first-listed branch is visited first.
        for child in node.evolves_to.iter().rev() {
            stack.push(child);
        }
    }
    names
}

/// Derive the display move list from the raw upstream entries.
///
/// Level-up moves win: each entry's first `level-up` learn detail supplies
/// its level, and the filtered list is stable-sorted ascending by level so
/// ties keep their upstream relative order. When no entry has a level-up
/// detail at all, fall back to the first [`MOVE_FALLBACK_COUNT`] entries
/// of the full list, each without a level.
fn derive_moves(entries: &[MoveEntry]) -> Vec<Move> {
    let mut level_up: Vec<Move> = entries
        .iter()
        .filter_map(|entry| {
            entry
                .version_group_details
                .iter()
                .find(|d| d.move_learn_method.name == LEVEL_UP_METHOD)
                .map(|d| Move {
                    name: entry.move_ref.name.clone(),
                    level: Some(d.level_learned_at),
                })
        })
        .collect();

    if level_up.is_empty() {
        return entries
            .iter()
            .take(MOVE_FALLBACK_COUNT)
            .map(|entry| Move {
                name: entry.move_ref.name.clone(),
                level: None,
            })
            .collect();
    }

    level_up.sort_by_key(|m| m.level);
    level_up
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pokedex_api::types::{NamedResource, VersionGroupDetail};

    use super::*;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.into(),
            url: format!("https://x/{name}/"),
        }
    }

    fn level_up_move(name: &str, level: u32) -> MoveEntry {
        MoveEntry {
            move_ref: named(name),
            version_group_details: vec![VersionGroupDetail {
                level_learned_at: level,
                move_learn_method: named("level-up"),
            }],
        }
    }

    fn machine_move(name: &str) -> MoveEntry {
        MoveEntry {
            move_ref: named(name),
            version_group_details: vec![VersionGroupDetail {
                level_learned_at: 0,
                move_learn_method: named("machine"),
            }],
        }
    }

    fn link(name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: named(name),
            evolves_to,
        }
    }

    #[test]
    fn level_up_moves_sorted_ascending() {
        let entries = vec![
            level_up_move("razor-leaf", 12),
            level_up_move("tackle", 1),
            machine_move("cut"),
            level_up_move("vine-whip", 7),
            machine_move("strength"),
        ];

        let moves = derive_moves(&entries);

        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].name, "tackle");
        assert_eq!(moves[0].level, Some(1));
        assert_eq!(moves[1].name, "vine-whip");
        assert_eq!(moves[1].level, Some(7));
        assert_eq!(moves[2].name, "razor-leaf");
        assert_eq!(moves[2].level, Some(12));
    }

    #[test]
    fn equal_levels_keep_upstream_order() {
        let entries = vec![
            level_up_move("growl", 1),
            level_up_move("tackle", 1),
            level_up_move("leech-seed", 7),
        ];

        let moves = derive_moves(&entries);

        assert_eq!(moves[0].name, "growl");
        assert_eq!(moves[1].name, "tackle");
        assert_eq!(moves[2].name, "leech-seed");
    }

    #[test]
    fn first_level_up_detail_wins_per_entry() {
        let entries = vec![MoveEntry {
            move_ref: named("tackle"),
            version_group_details: vec![
                VersionGroupDetail {
                    level_learned_at: 0,
                    move_learn_method: named("machine"),
                },
                VersionGroupDetail {
                    level_learned_at: 3,
                    move_learn_method: named("level-up"),
                },
                VersionGroupDetail {
                    level_learned_at: 5,
                    move_learn_method: named("level-up"),
                },
            ],
        }];

        let moves = derive_moves(&entries);
        assert_eq!(moves[0].level, Some(3));
    }

    #[test]
    fn no_level_up_moves_falls_back_to_first_twenty() {
        let entries: Vec<MoveEntry> = (0..30)
            .map(|i| machine_move(&format!("move-{i}")))
            .collect();

        let moves = derive_moves(&entries);

        assert_eq!(moves.len(), 20);
        assert_eq!(moves[0].name, "move-0");
        assert_eq!(moves[19].name, "move-19");
        assert!(moves.iter().all(|m| m.level.is_none()));
    }

    #[test]
    fn empty_move_list_yields_empty_result() {
        assert!(derive_moves(&[]).is_empty());
    }

    #[test]
    fn flatten_single_node_chain() {
        let root = link("tauros", Vec::new());
        assert_eq!(flatten_chain(&root), ["tauros"]);
    }

    #[test]
    fn flatten_linear_chain_in_stage_order() {
        let root = link(
            "bulbasaur",
            vec![link("ivysaur", vec![link("venusaur", Vec::new())])],
        );
        assert_eq!(flatten_chain(&root), ["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn flatten_branching_chain_preorder() {
        // One base form with two branches, the first branch one stage deeper.
        let root = link(
            "oddish",
            vec![
                link("gloom", vec![link("vileplume", Vec::new())]),
                link("bellossom", Vec::new()),
            ],
        );
        assert_eq!(
            flatten_chain(&root),
            ["oddish", "gloom", "vileplume", "bellossom"]
        );
    }
}
