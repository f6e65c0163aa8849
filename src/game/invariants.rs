//! Structural invariants - sanity checks that detect engine bugs.
//!
//! In a correctly implemented engine these never trigger. They are not
//! rules enforcement; move legality lives with the boundary layer.

use std::collections::BTreeMap;

use crate::game::board::Coord;
use crate::game::kingdom::components;
use crate::game::player::PLAYER_TILE_CAPACITY;
use crate::game::state::GameState;
use crate::game::tile::CivType;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all structural invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Kingdoms partition their members: no coordinate in two kingdoms,
    // every member occupied and monument-free, every kingdom connected.
    let mut seen: BTreeMap<Coord, u32> = BTreeMap::new();
    for kingdom in state.kingdoms.iter() {
        if kingdom.spaces.is_empty() {
            violations.push(InvariantViolation {
                message: format!("kingdom {:?} has no members", kingdom.id),
            });
        }
        for &coord in &kingdom.spaces {
            if let Some(prev) = seen.insert(coord, kingdom.id.0) {
                violations.push(InvariantViolation {
                    message: format!(
                        "space {coord} belongs to kingdoms {prev} and {}",
                        kingdom.id.0
                    ),
                });
            }
            match state.board.get(coord) {
                None => violations.push(InvariantViolation {
                    message: format!("kingdom member {coord} is off the board"),
                }),
                Some(space) if !space.supports_kingdom() => {
                    violations.push(InvariantViolation {
                        message: format!(
                            "kingdom member {coord} cannot support membership"
                        ),
                    });
                }
                Some(_) => {}
            }
        }
        if components(&kingdom.spaces).len() > 1 {
            violations.push(InvariantViolation {
                message: format!("kingdom {:?} is not connected", kingdom.id),
            });
        }
    }

    // Leader conservation: each seated dynasty has exactly four leaders
    // split between supply and board, at most one per civilization.
    for (idx, player) in state.players.iter().enumerate() {
        let mut civs = Vec::new();
        for leader in &player.leaders {
            if leader.dynasty != player.dynasty {
                violations.push(InvariantViolation {
                    message: format!(
                        "player {idx} holds a foreign {:?} leader in supply",
                        leader.dynasty
                    ),
                });
            }
            civs.push(leader.civ);
        }
        for (_, space) in state.board.iter() {
            if let Some(leader) = space.leader {
                if leader.dynasty == player.dynasty {
                    civs.push(leader.civ);
                }
            }
        }
        if civs.len() != 4 {
            violations.push(InvariantViolation {
                message: format!("player {idx} has {} leaders, expected 4", civs.len()),
            });
        }
        let duplicated = CivType::ALL
            .into_iter()
            .any(|civ| civs.iter().filter(|&&c| c == civ).count() > 1);
        if duplicated {
            violations.push(InvariantViolation {
                message: format!("player {idx} has duplicate leaders of one civilization"),
            });
        }

        if player.hand.len() > PLAYER_TILE_CAPACITY {
            violations.push(InvariantViolation {
                message: format!(
                    "player {idx} holds {} tiles, capacity is {PLAYER_TILE_CAPACITY}",
                    player.hand.len()
                ),
            });
        }
    }

    // Revolt consistency: a defender implies an attacker, recorded ids
    // are seated, and idle games carry no per-player stakes.
    if state.revolt.defender.is_some() && state.revolt.attacker.is_none() {
        violations.push(InvariantViolation {
            message: "revolt has a defender but no attacker".to_string(),
        });
    }
    for id in [state.revolt.attacker, state.revolt.defender]
        .into_iter()
        .flatten()
    {
        if usize::from(id) >= state.players.len() {
            violations.push(InvariantViolation {
                message: format!("revolt references unseated player {id}"),
            });
        }
    }
    if state.revolt.attacker.is_none() {
        for (idx, player) in state.players.iter().enumerate() {
            if !player.revolt.is_clear() {
                violations.push(InvariantViolation {
                    message: format!("player {idx} has a revolt stake with no revolt"),
                });
            }
        }
    }

    violations
}

/// Assert all structural invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
