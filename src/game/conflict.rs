//! The revolt state machine: waging temple tiles and resolving the attack.
//!
//! A revolt starts when a leader placement puts two same-civilization
//! leaders in one kingdom. The attacker wages first, then the defender
//! wages with `is_opposing` set, which resolves the attack in the same
//! call. Strengths compare attacker-strictly: the defender wins ties.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::board::{Board, Coord};
use crate::game::player::{PlayerId, PlayerRevolt};
use crate::game::state::GameState;

/// Where the conflict machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPhase {
    /// No conflict in progress.
    Idle,
    /// The attacker has waged; the defender's wage will resolve.
    WageInProgress,
}

/// The revolt currently being fought, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revolt {
    /// The player whose leader placement started the revolt.
    pub attacker: Option<PlayerId>,
    /// The player whose leader is being attacked.
    pub defender: Option<PlayerId>,
}

impl Revolt {
    /// Derive the machine phase from the record.
    #[must_use]
    pub const fn phase(self) -> ConflictPhase {
        if self.attacker.is_some() {
            ConflictPhase::WageInProgress
        } else {
            ConflictPhase::Idle
        }
    }
}

/// Wage temple tiles for one side of the revolt.
///
/// Withdraws `number_of_tiles` face-up temple tiles from the player's hand
/// and records a strength of the wager plus the face-up temples adjacent to
/// the contested leader at `leader_coord`. With `is_opposing` set this is
/// the defender's wage and the attack resolves before returning.
///
/// # Errors
///
/// Fails without mutating on an unknown player, an out-of-bounds leader
/// coordinate, a hand short of temple tiles, or an opposing wage with no
/// attacker recorded.
pub fn wage_temple_tiles(
    state: &mut GameState,
    player: PlayerId,
    number_of_tiles: usize,
    is_opposing: bool,
    leader_coord: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(leader_coord) {
        return Err(GameError::SpaceOutOfBounds(leader_coord));
    }
    if is_opposing && state.revolt.attacker.is_none() {
        return Err(GameError::NoActiveConflict);
    }

    let available = state
        .player(player)?
        .hand
        .iter()
        .filter(|tile| tile.is_faceup_temple())
        .count();
    if available < number_of_tiles {
        return Err(GameError::InsufficientTempleTiles {
            requested: number_of_tiles,
            available,
        });
    }

    let adjacent_temples = {
        let (adj, count) = leader_coord.adjacent();
        adj[..count as usize]
            .iter()
            .filter(|&&coord| {
                state
                    .board
                    .get(coord)
                    .is_some_and(super::board::Space::has_faceup_temple)
            })
            .count()
    };

    let player_state = state.player_mut(player)?;
    let mut waged_tiles = Vec::with_capacity(number_of_tiles);
    while waged_tiles.len() < number_of_tiles {
        let pos = player_state
            .hand
            .iter()
            .position(|tile| tile.is_faceup_temple())
            .ok_or(GameError::InsufficientTempleTiles {
                requested: number_of_tiles,
                available,
            })?;
        waged_tiles.push(player_state.hand.remove(pos));
    }

    #[allow(clippy::cast_possible_truncation)]
    let strength = (waged_tiles.len() + adjacent_temples) as u32;
    player_state.revolt = PlayerRevolt {
        strength,
        waged_tiles,
        leader_coord: Some(leader_coord),
    };

    if is_opposing {
        state.revolt.defender = Some(player);
        resolve_attack(state)
    } else {
        state.revolt.attacker = Some(player);
        Ok(())
    }
}

/// Resolve the revolt from both recorded wages.
///
/// The attacker wins only with strictly greater strength. The loser's
/// leader leaves the board for the loser's supply, the winner scores one
/// temple point, the waged tiles are discarded, and all revolt records
/// reset to idle.
///
/// # Errors
///
/// Returns [`GameError::NoActiveConflict`] unless both sides have waged.
pub fn resolve_attack(state: &mut GameState) -> GameResult<()> {
    let attacker = state.revolt.attacker.ok_or(GameError::NoActiveConflict)?;
    let defender = state.revolt.defender.ok_or(GameError::NoActiveConflict)?;

    let attacker_strength = state.player(attacker)?.revolt.strength;
    let defender_strength = state.player(defender)?.revolt.strength;
    let (winner, loser) = if attacker_strength > defender_strength {
        (attacker, defender)
    } else {
        (defender, attacker)
    };

    if let Some(coord) = state.player(loser)?.revolt.leader_coord {
        let evicted = state
            .board
            .get_mut(coord)
            .and_then(|space| space.leader.take());
        if let Some(leader) = evicted {
            state.player_mut(loser)?.leaders.push(leader);
        }
        let vacated = state
            .board
            .get(coord)
            .is_some_and(|space| !space.supports_kingdom());
        if vacated {
            state.kingdoms.detach(coord);
        }
    }

    state.player_mut(winner)?.points.temple += 1;
    state.player_mut(attacker)?.revolt = PlayerRevolt::default();
    state.player_mut(defender)?.revolt = PlayerRevolt::default();
    state.revolt = Revolt::default();
    Ok(())
}
