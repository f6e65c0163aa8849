//! Game layer: the rules engine proper.
//!
//! - Board with spaces (river, treasures, monuments)
//! - Tiles, leaders, and per-player state
//! - Kingdom connectivity and recomputation
//! - Move handlers and the revolt state machine
//! - Structural invariant checks

mod board;
mod conflict;
mod invariants;
mod kingdom;
mod moves;
mod player;
mod state;
mod tile;

pub use board::{Board, Coord, Space, BOARD_HEIGHT, BOARD_WIDTH, TREASURE_SPACE_COUNT};
pub use conflict::{resolve_attack, wage_temple_tiles, ConflictPhase, Revolt};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use kingdom::{components, Kingdom, KingdomId, Kingdoms};
pub use moves::{
    can_form_monument, form_monument, monument_window, move_leader_from_hand,
    move_leader_on_board, move_leader_to_hand, place_catastrophe_tile,
    place_civilization_tile, swap_tiles,
};
pub use player::{
    Dynasty, Leader, PlayerId, PlayerRevolt, PlayerState, VictoryPoints,
    PLAYER_TILE_CAPACITY,
};
pub use state::{GameState, MAX_PLAYERS, MIN_PLAYERS, TREASURE_END_THRESHOLD};
pub use tile::{
    initial_tile_bag, CivTile, CivType, Monument, Tile, CATASTROPHE_TILES_PER_PLAYER,
    FARM_TILE_COUNT, MARKET_TILE_COUNT, SETTLEMENT_TILE_COUNT, TEMPLE_TILE_COUNT,
};
