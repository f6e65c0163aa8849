//! Move handlers.
//!
//! Each handler assumes move legality (turn order, river compatibility,
//! target emptiness) was validated by the boundary layer and only checks
//! the preconditions it cannot survive without. Checks run before the
//! first mutation, so an `Err` return leaves the state untouched.

use std::collections::BTreeSet;

use crate::error::{GameError, GameResult};
use crate::game::board::{Board, Coord};
use crate::game::kingdom::KingdomId;
use crate::game::player::{Leader, PlayerId};
use crate::game::state::GameState;
use crate::game::tile::{CivType, Monument, Tile};
use crate::host::{Host, StageRequest};

/// Discard the indexed hand tiles, reshuffle the bag, and redraw
/// one-for-one.
///
/// Duplicate indices collapse to one discard. If the bag holds fewer
/// tiles than the distinct indices, the host is told to end the game
/// exactly once and nothing is mutated. Discarded tiles leave the game;
/// they do not return to the bag.
///
/// # Errors
///
/// Returns [`GameError::BadTileIndex`] if any index is out of range.
pub fn swap_tiles(
    state: &mut GameState,
    host: &mut dyn Host,
    player: PlayerId,
    tile_indices: &[usize],
) -> GameResult<()> {
    let hand_len = state.player(player)?.hand.len();
    for &index in tile_indices {
        if index >= hand_len {
            return Err(GameError::BadTileIndex { index, hand_len });
        }
    }

    let mut indices: Vec<usize> = tile_indices.to_vec();
    indices.sort_unstable();
    indices.dedup();
    if state.tile_bag.len() < indices.len() {
        host.end_game();
        return Ok(());
    }

    let player_state = state.player_mut(player)?;
    for index in indices.iter().rev() {
        player_state.hand.remove(*index);
    }

    host.shuffle(&mut state.tile_bag);
    for _ in 0..indices.len() {
        state.draw_tile(player);
    }
    Ok(())
}

/// Place a catastrophe tile from hand. The space leaves its kingdom and
/// the kingdom is recomputed, splitting into components as needed.
///
/// # Errors
///
/// Fails on an out-of-bounds target, a bad hand index, or a hand tile
/// that is not a catastrophe.
pub fn place_catastrophe_tile(
    state: &mut GameState,
    player: PlayerId,
    tile_index: usize,
    to: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(to) {
        return Err(GameError::SpaceOutOfBounds(to));
    }
    let player_state = state.player(player)?;
    match player_state.hand.get(tile_index) {
        None => {
            return Err(GameError::BadTileIndex {
                index: tile_index,
                hand_len: player_state.hand.len(),
            });
        }
        Some(Tile::Catastrophe) => {}
        Some(_) => return Err(GameError::WrongTileKind { index: tile_index }),
    }

    let tile = state.player_mut(player)?.hand.remove(tile_index);
    if let Some(space) = state.board.get_mut(to) {
        space.tile = Some(tile);
    }
    state.kingdoms.detach(to);
    Ok(())
}

/// Place a civilization tile from hand.
///
/// Adjacent to exactly one kingdom: the space joins it and the matching
/// leader (or failing that the settlement leader) scores one point of the
/// tile's color. Adjacent to two or more: no merge, no points; the host is
/// asked once to run the unification conflict. Adjacent to none: the tile
/// stays kingdom-less unless a kingdom-less leader stands next to it, in
/// which case a new kingdom forms around them and scores normally.
///
/// # Errors
///
/// Fails on an out-of-bounds target, a bad hand index, or a hand tile
/// that is not a civilization tile.
pub fn place_civilization_tile(
    state: &mut GameState,
    host: &mut dyn Host,
    player: PlayerId,
    tile_index: usize,
    to: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(to) {
        return Err(GameError::SpaceOutOfBounds(to));
    }
    let player_state = state.player(player)?;
    let civ = match player_state.hand.get(tile_index) {
        None => {
            return Err(GameError::BadTileIndex {
                index: tile_index,
                hand_len: player_state.hand.len(),
            });
        }
        Some(Tile::Civilization(civ_tile)) => civ_tile.civ,
        Some(_) => return Err(GameError::WrongTileKind { index: tile_index }),
    };

    let tile = state.player_mut(player)?.hand.remove(tile_index);
    if let Some(space) = state.board.get_mut(to) {
        space.tile = Some(tile);
    }

    let neighbors = adjacent_kingdom_ids(state, to);
    match neighbors.as_slice() {
        [] => {
            let loose = adjacent_loose_spaces(state, to);
            let has_leader = loose.iter().any(|&coord| {
                state
                    .board
                    .get(coord)
                    .is_some_and(|space| space.leader.is_some())
            });
            if has_leader {
                let mut spaces: BTreeSet<Coord> = loose.into_iter().collect();
                spaces.insert(to);
                if let Some(id) = state.kingdoms.create(spaces) {
                    award_tile_point(state, id, civ)?;
                }
            }
        }
        [id] => {
            let id = *id;
            state.kingdoms.add_member(id, to);
            award_tile_point(state, id, civ)?;
        }
        _ => host.activate_stage(StageRequest::UnificationConflict),
    }
    Ok(())
}

/// Place a leader from the acting player's supply.
///
/// # Errors
///
/// Fails on an out-of-bounds target or a supply with no leader of the
/// given civilization.
pub fn move_leader_from_hand(
    state: &mut GameState,
    host: &mut dyn Host,
    player: PlayerId,
    civ: CivType,
    to: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(to) {
        return Err(GameError::SpaceOutOfBounds(to));
    }
    if !state.player(player)?.leaders.iter().any(|l| l.civ == civ) {
        return Err(GameError::LeaderNotInSupply(civ));
    }

    let leader = state
        .player_mut(player)?
        .take_leader(civ)
        .ok_or(GameError::LeaderNotInSupply(civ))?;
    place_leader(state, host, to, leader);
    Ok(())
}

/// Move a leader already on the board to another space.
///
/// The vacated space is removed from its kingdom with a recompute before
/// the leader lands, exactly as a catastrophe removal would.
///
/// # Errors
///
/// Fails on out-of-bounds coordinates or a source space with no leader.
pub fn move_leader_on_board(
    state: &mut GameState,
    host: &mut dyn Host,
    from: Coord,
    to: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(from) {
        return Err(GameError::SpaceOutOfBounds(from));
    }
    if !Board::in_bounds(to) {
        return Err(GameError::SpaceOutOfBounds(to));
    }

    let leader = lift_leader(state, from)?;
    place_leader(state, host, to, leader);
    Ok(())
}

/// Retract a leader from the board to its owner's supply.
///
/// # Errors
///
/// Fails on an out-of-bounds coordinate or a space with no leader.
pub fn move_leader_to_hand(
    state: &mut GameState,
    player: PlayerId,
    from: Coord,
) -> GameResult<()> {
    if !Board::in_bounds(from) {
        return Err(GameError::SpaceOutOfBounds(from));
    }
    let leader = lift_leader(state, from)?;
    let owner = state.player_by_dynasty(leader.dynasty).unwrap_or(player);
    state.player_mut(owner)?.leaders.push(leader);
    Ok(())
}

/// Build a monument on a 2x2 block of spaces.
///
/// The tiles under the block flip face-down, the block leaves kingdom
/// membership (recomputing and possibly splitting the kingdoms involved),
/// and the monument is retired from the remaining inventory.
///
/// # Errors
///
/// Fails on an out-of-bounds coordinate, an unknown player, or a monument
/// already built this game.
pub fn form_monument(
    state: &mut GameState,
    player: PlayerId,
    coords: [Coord; 4],
    monument: Monument,
) -> GameResult<()> {
    state.player(player)?;
    for coord in coords {
        if !Board::in_bounds(coord) {
            return Err(GameError::SpaceOutOfBounds(coord));
        }
    }
    let Some(pos) = state
        .monuments_remaining
        .iter()
        .position(|&m| m == monument)
    else {
        return Err(GameError::MonumentUnavailable(monument));
    };
    state.monuments_remaining.remove(pos);

    for coord in coords {
        if let Some(space) = state.board.get_mut(coord) {
            space.monument = Some(monument);
            if let Some(Tile::Civilization(civ_tile)) = &mut space.tile {
                civ_tile.facedown = true;
            }
        }
    }
    for coord in coords {
        state.kingdoms.detach(coord);
    }
    Ok(())
}

/// Whether the four tiles of some 2x2 window through this space are all
/// face-up civilization tiles of one color, making a monument buildable.
#[must_use]
pub fn can_form_monument(state: &GameState, coord: Coord) -> bool {
    monument_window(state, coord).is_some()
}

/// The first eligible 2x2 window through this space, with its color.
#[must_use]
pub fn monument_window(state: &GameState, coord: Coord) -> Option<([Coord; 4], CivType)> {
    let civ = state.board.get(coord)?.tile?.faceup_civ()?;
    let x = i16::from(coord.x);
    let y = i16::from(coord.y);
    for (dx, dy) in [(0, 0), (-1, 0), (0, -1), (-1, -1)] {
        let window = [
            (x + dx, y + dy),
            (x + dx + 1, y + dy),
            (x + dx, y + dy + 1),
            (x + dx + 1, y + dy + 1),
        ];
        let coords: Option<Vec<Coord>> = window
            .iter()
            .map(|&(wx, wy)| {
                let (wx, wy) = (u8::try_from(wx).ok()?, u8::try_from(wy).ok()?);
                let candidate = Coord::new(wx, wy);
                Board::in_bounds(candidate).then_some(candidate)
            })
            .collect();
        let Some(coords) = coords else { continue };
        let uniform = coords.iter().all(|&c| {
            state
                .board
                .get(c)
                .and_then(|space| space.tile)
                .and_then(Tile::faceup_civ)
                == Some(civ)
        });
        if uniform {
            return Some(([coords[0], coords[1], coords[2], coords[3]], civ));
        }
    }
    None
}

/// Distinct ids of kingdoms with a member adjacent to this coordinate.
fn adjacent_kingdom_ids(state: &GameState, coord: Coord) -> Vec<KingdomId> {
    let (adj, count) = coord.adjacent();
    let mut ids = Vec::new();
    for &next in &adj[..count as usize] {
        if let Some(id) = state.kingdoms.id_containing(next) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Adjacent spaces that could belong to a kingdom but do not.
fn adjacent_loose_spaces(state: &GameState, coord: Coord) -> Vec<Coord> {
    let (adj, count) = coord.adjacent();
    adj[..count as usize]
        .iter()
        .copied()
        .filter(|&next| {
            state
                .board
                .get(next)
                .is_some_and(super::board::Space::supports_kingdom)
                && state.kingdoms.id_containing(next).is_none()
        })
        .collect()
}

/// Take the leader off a space, recomputing its kingdom if the space no
/// longer supports membership.
fn lift_leader(state: &mut GameState, from: Coord) -> GameResult<Leader> {
    let leader = state
        .board
        .get_mut(from)
        .and_then(|space| space.leader.take())
        .ok_or(GameError::NoLeaderAt(from))?;
    let vacated = state
        .board
        .get(from)
        .is_some_and(|space| !space.supports_kingdom());
    if vacated {
        state.kingdoms.detach(from);
    }
    Ok(leader)
}

/// Put a leader down and resolve the kingdom consequences.
///
/// Adjacent to a kingdom: the target and any adjacent kingdom-less
/// occupied spaces join it, and a second same-civilization leader in the
/// joined kingdom triggers the attack stage against its owner. Adjacent
/// only to kingdom-less occupied spaces: a new kingdom forms from them and
/// the target. Isolated: the leader stands alone with no kingdom.
fn place_leader(state: &mut GameState, host: &mut dyn Host, to: Coord, leader: Leader) {
    if let Some(space) = state.board.get_mut(to) {
        space.leader = Some(leader);
    }

    let neighbors = adjacent_kingdom_ids(state, to);
    if let Some(&id) = neighbors.first() {
        state.kingdoms.add_member(id, to);
        for coord in adjacent_loose_spaces(state, to) {
            state.kingdoms.add_member(id, coord);
        }
        if let Some(defender) = contested_defender(state, id, leader) {
            host.activate_stage(StageRequest::AttackLeader { defender });
        }
        return;
    }

    let loose = adjacent_loose_spaces(state, to);
    if !loose.is_empty() {
        let mut spaces: BTreeSet<Coord> = loose.into_iter().collect();
        spaces.insert(to);
        state.kingdoms.create(spaces);
    }
}

/// The owner of a rival leader sharing this kingdom and civilization.
fn contested_defender(state: &GameState, id: KingdomId, placed: Leader) -> Option<PlayerId> {
    let kingdom = state.kingdoms.get(id)?;
    for &coord in &kingdom.spaces {
        let Some(other) = state.board.get(coord).and_then(|space| space.leader) else {
            continue;
        };
        if other.civ == placed.civ && other.dynasty != placed.dynasty {
            return state.player_by_dynasty(other.dynasty);
        }
    }
    None
}

/// Credit one point of the tile's color to the kingdom's matching leader,
/// falling back to the settlement leader, or to nobody.
fn award_tile_point(state: &mut GameState, id: KingdomId, civ: CivType) -> GameResult<()> {
    let Some(kingdom) = state.kingdoms.get(id) else {
        return Ok(());
    };
    let mut matching = None;
    let mut settlement = None;
    for &coord in &kingdom.spaces {
        let Some(leader) = state.board.get(coord).and_then(|space| space.leader) else {
            continue;
        };
        if leader.civ == civ {
            matching = Some(leader);
            break;
        }
        if leader.civ == CivType::Settlement && settlement.is_none() {
            settlement = Some(leader);
        }
    }
    let Some(scorer) = matching.or(settlement) else {
        return Ok(());
    };
    let Some(owner) = state.player_by_dynasty(scorer.dynasty) else {
        return Ok(());
    };
    *state.player_mut(owner)?.points.for_civ_mut(civ) += 1;
    Ok(())
}
