//! Integration tests for the move handlers over the public API.
//!
//! Each scenario drives a real game state through the crate root exports
//! the way a host would, and checks the board, kingdoms, points, and host
//! callbacks afterwards.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use eridu::game::{
    assert_invariants, check_invariants, form_monument, move_leader_from_hand,
    move_leader_on_board, move_leader_to_hand, place_catastrophe_tile,
    place_civilization_tile, resolve_attack, swap_tiles, wage_temple_tiles, ConflictPhase,
    GameState, Monument, PLAYER_TILE_CAPACITY,
};
use eridu::{CivType, Coord, GameError, SeededHost, StageRequest, Tile};

fn fresh_game(seed: u64) -> (GameState, SeededHost) {
    let mut state = GameState::new(3).unwrap();
    let mut host = SeededHost::new(seed);
    state.setup(&mut host);
    (state, host)
}

/// Put a known tile at the end of the player's hand, returning its index.
fn give(state: &mut GameState, player: usize, tile: Tile) -> usize {
    state.players[player].hand.push(tile);
    state.players[player].hand.len() - 1
}

#[test]
fn test_setup_invariants_hold() {
    let (state, _) = fresh_game(5);
    assert_invariants(&state);
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_isolated_leader_then_tile_forms_kingdom_and_scores() {
    let (mut state, mut host) = fresh_game(5);

    // An isolated leader creates no kingdom.
    move_leader_from_hand(&mut state, &mut host, 0, CivType::Temple, Coord::new(7, 5))
        .unwrap();
    assert!(state.kingdoms.is_empty());
    assert!(host.stage_requests.is_empty());

    // A temple tile placed next to it seeds a kingdom around the pair and
    // the leader's owner scores one red point.
    let index = give(&mut state, 0, Tile::civilization(CivType::Temple));
    place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(7, 6)).unwrap();

    assert_eq!(state.kingdoms.len(), 1);
    let kingdom = state.kingdoms.iter().next().unwrap();
    assert!(kingdom.contains(Coord::new(7, 5)));
    assert!(kingdom.contains(Coord::new(7, 6)));
    assert_eq!(state.players[0].points.temple, 1);
    assert_invariants(&state);
}

#[test]
fn test_growing_kingdom_scores_per_tile() {
    let (mut state, mut host) = fresh_game(5);
    move_leader_from_hand(&mut state, &mut host, 1, CivType::Market, Coord::new(2, 8))
        .unwrap();

    let index = give(&mut state, 0, Tile::civilization(CivType::Market));
    place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(2, 9)).unwrap();
    let index = give(&mut state, 0, Tile::civilization(CivType::Market));
    place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(3, 9)).unwrap();

    // The trader's owner scores for each green tile, whoever placed it.
    assert_eq!(state.players[1].points.market, 2);
    assert_eq!(state.players[0].points.market, 0);
    assert_eq!(state.kingdoms.len(), 1);
    assert_invariants(&state);
}

#[test]
fn test_unification_is_requested_exactly_once() {
    let (mut state, mut host) = fresh_game(5);
    move_leader_from_hand(&mut state, &mut host, 0, CivType::Temple, Coord::new(4, 5))
        .unwrap();
    move_leader_from_hand(&mut state, &mut host, 1, CivType::Market, Coord::new(6, 5))
        .unwrap();
    // The leaders start isolated, so grow each into a kingdom with one
    // tile first.
    let index = give(&mut state, 0, Tile::civilization(CivType::Temple));
    place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(4, 4)).unwrap();
    let index = give(&mut state, 1, Tile::civilization(CivType::Market));
    place_civilization_tile(&mut state, &mut host, 1, index, Coord::new(6, 4)).unwrap();
    assert_eq!(state.kingdoms.len(), 2);
    assert!(host.stage_requests.is_empty());

    let points_before: Vec<_> = state.players.iter().map(|p| p.points).collect();
    let index = give(&mut state, 0, Tile::civilization(CivType::Settlement));
    place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(5, 5)).unwrap();

    assert_eq!(host.stage_requests, vec![StageRequest::UnificationConflict]);
    assert_eq!(state.kingdoms.len(), 2, "kingdoms stay separate");
    assert!(state.kingdoms.id_containing(Coord::new(5, 5)).is_none());
    let points_after: Vec<_> = state.players.iter().map(|p| p.points).collect();
    assert_eq!(points_before, points_after, "no points until the conflict");
}

#[test]
fn test_catastrophe_splits_kingdom_in_four() {
    let (mut state, mut host) = fresh_game(5);
    // A T-shaped kingdom around a leader.
    move_leader_from_hand(&mut state, &mut host, 0, CivType::Settlement, Coord::new(8, 4))
        .unwrap();
    for (x, y) in [(8, 3), (8, 2), (7, 3), (9, 3)] {
        let index = give(&mut state, 0, Tile::civilization(CivType::Settlement));
        place_civilization_tile(&mut state, &mut host, 0, index, Coord::new(x, y)).unwrap();
    }
    assert_eq!(state.kingdoms.len(), 1);

    let index = give(&mut state, 0, Tile::Catastrophe);
    place_catastrophe_tile(&mut state, 0, index, Coord::new(8, 3)).unwrap();

    // The junction is gone; the leader arm, top arm, left arm, and right
    // arm separate into three fragments plus the leader's.
    assert_eq!(state.kingdoms.len(), 4);
    assert!(state.kingdoms.id_containing(Coord::new(8, 3)).is_none());
    assert_invariants(&state);
}

#[test]
fn test_swap_refills_hand_and_preserves_capacity() {
    let (mut state, mut host) = fresh_game(9);
    let before: Vec<Tile> = state.players[2].hand.clone();
    assert_eq!(before.len(), PLAYER_TILE_CAPACITY);

    swap_tiles(&mut state, &mut host, 2, &[4, 5]).unwrap();
    assert_eq!(state.players[2].hand.len(), PLAYER_TILE_CAPACITY);
    assert_eq!(host.end_game_calls, 0);
    assert_invariants(&state);
}

#[test]
fn test_swap_on_short_bag_signals_end_exactly_once() {
    let (mut state, mut host) = fresh_game(9);
    state.tile_bag.truncate(2);

    let before = state.clone();
    swap_tiles(&mut state, &mut host, 0, &[0, 1, 2]).unwrap();
    assert_eq!(host.end_game_calls, 1);
    assert_eq!(state, before, "short-bag swap must not mutate");

    // A later, smaller swap still works.
    swap_tiles(&mut state, &mut host, 0, &[0]).unwrap();
    assert_eq!(host.end_game_calls, 1);
}

#[test]
fn test_revolt_full_cycle_attacker_wins() {
    let (mut state, mut host) = fresh_game(13);

    // Player 1 holds a temple kingdom; player 0 invades it.
    move_leader_from_hand(&mut state, &mut host, 1, CivType::Temple, Coord::new(3, 9))
        .unwrap();
    let index = give(&mut state, 1, Tile::civilization(CivType::Settlement));
    place_civilization_tile(&mut state, &mut host, 1, index, Coord::new(4, 9)).unwrap();
    assert_eq!(state.kingdoms.len(), 1);

    move_leader_from_hand(&mut state, &mut host, 0, CivType::Temple, Coord::new(6, 9))
        .unwrap();
    assert_eq!(
        host.stage_requests,
        vec![StageRequest::AttackLeader { defender: 1 }]
    );

    for _ in 0..2 {
        give(&mut state, 0, Tile::civilization(CivType::Temple));
    }
    wage_temple_tiles(&mut state, 0, 2, false, Coord::new(6, 9)).unwrap();
    assert_eq!(state.revolt.phase(), ConflictPhase::WageInProgress);
    wage_temple_tiles(&mut state, 1, 0, true, Coord::new(3, 9)).unwrap();

    // Attacker won strictly: defender's leader is back in supply, the
    // attacker scored one red point, and the machine is idle again.
    assert!(state.board.get(Coord::new(3, 9)).unwrap().leader.is_none());
    assert!(state.board.get(Coord::new(6, 9)).unwrap().leader.is_some());
    assert!(
        state.players[1]
            .leaders
            .iter()
            .any(|l| l.civ == CivType::Temple)
    );
    assert_eq!(state.players[0].points.temple, 1);
    assert_eq!(state.revolt.phase(), ConflictPhase::Idle);
    assert!(resolve_attack(&mut state).is_err());
    assert_invariants(&state);
}

#[test]
fn test_revolt_defender_wins_tie_with_board_support() {
    let (mut state, mut host) = fresh_game(13);

    // A loose temple tile first, so the leader placement forms the
    // kingdom without scoring.
    let index = give(&mut state, 1, Tile::civilization(CivType::Temple));
    place_civilization_tile(&mut state, &mut host, 1, index, Coord::new(3, 8)).unwrap();
    move_leader_from_hand(&mut state, &mut host, 1, CivType::Temple, Coord::new(3, 9))
        .unwrap();

    move_leader_from_hand(&mut state, &mut host, 0, CivType::Temple, Coord::new(2, 8))
        .unwrap();
    assert_eq!(
        host.stage_requests,
        vec![StageRequest::AttackLeader { defender: 1 }]
    );

    // Both leaders flank the same temple tile: 1 vs 1, defender holds.
    wage_temple_tiles(&mut state, 0, 0, false, Coord::new(2, 8)).unwrap();
    wage_temple_tiles(&mut state, 1, 0, true, Coord::new(3, 9)).unwrap();

    assert!(state.board.get(Coord::new(2, 8)).unwrap().leader.is_none());
    assert!(state.board.get(Coord::new(3, 9)).unwrap().leader.is_some());
    assert_eq!(state.players[1].points.temple, 1);
    assert_invariants(&state);
}

#[test]
fn test_leader_moves_between_spaces_and_back_to_hand() {
    let (mut state, mut host) = fresh_game(21);
    move_leader_from_hand(&mut state, &mut host, 2, CivType::Market, Coord::new(9, 2))
        .unwrap();
    let index = give(&mut state, 2, Tile::civilization(CivType::Market));
    place_civilization_tile(&mut state, &mut host, 2, index, Coord::new(9, 3)).unwrap();
    assert_eq!(state.players[2].points.market, 1);

    move_leader_on_board(&mut state, &mut host, Coord::new(9, 2), Coord::new(8, 3))
        .unwrap();
    assert!(state.board.get(Coord::new(9, 2)).unwrap().leader.is_none());
    assert!(state.kingdoms.id_containing(Coord::new(8, 3)).is_some());

    move_leader_to_hand(&mut state, 2, Coord::new(8, 3)).unwrap();
    assert_eq!(state.players[2].leaders.len(), 4);
    assert_invariants(&state);
}

#[test]
fn test_form_monument_detaches_block() {
    let (mut state, mut host) = fresh_game(21);
    move_leader_from_hand(&mut state, &mut host, 0, CivType::Market, Coord::new(7, 2))
        .unwrap();
    let block = [
        Coord::new(7, 3),
        Coord::new(6, 3),
        Coord::new(6, 4),
        Coord::new(7, 4),
    ];
    for coord in block {
        let index = give(&mut state, 0, Tile::civilization(CivType::Market));
        place_civilization_tile(&mut state, &mut host, 0, index, coord).unwrap();
    }
    assert_eq!(state.kingdoms.len(), 1);

    form_monument(&mut state, 0, block, Monument::FarmMarket).unwrap();

    // The whole block leaves the kingdom; only the leader's space remains.
    let kingdom = state.kingdoms.iter().next().unwrap();
    assert_eq!(kingdom.spaces.len(), 1);
    assert!(kingdom.contains(Coord::new(7, 2)));
    for coord in block {
        assert!(state.kingdoms.id_containing(coord).is_none());
        assert!(!state.board.get(coord).unwrap().supports_kingdom());
    }
    assert!(!state.monuments_remaining.contains(&Monument::FarmMarket));
    assert_invariants(&state);
}

#[test]
fn test_handlers_fail_fast_without_mutation() {
    let (mut state, mut host) = fresh_game(33);
    let before = state.clone();

    assert_eq!(
        place_civilization_tile(&mut state, &mut host, 0, 99, Coord::new(5, 5)),
        Err(GameError::BadTileIndex {
            index: 99,
            hand_len: PLAYER_TILE_CAPACITY
        })
    );
    assert_eq!(
        place_catastrophe_tile(&mut state, 0, 0, Coord::new(20, 5)),
        Err(GameError::SpaceOutOfBounds(Coord::new(20, 5)))
    );
    assert_eq!(
        move_leader_to_hand(&mut state, 0, Coord::new(5, 5)),
        Err(GameError::NoLeaderAt(Coord::new(5, 5)))
    );
    assert_eq!(
        wage_temple_tiles(&mut state, 1, 0, true, Coord::new(5, 5)),
        Err(GameError::NoActiveConflict)
    );
    assert_eq!(state, before);
    assert!(host.stage_requests.is_empty());
}
