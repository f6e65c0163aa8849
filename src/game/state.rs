//! The full game state aggregate and setup.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::board::{Board, TREASURE_SPACE_COUNT};
use crate::game::conflict::Revolt;
use crate::game::kingdom::Kingdoms;
use crate::game::player::{Dynasty, PlayerId, PlayerState, PLAYER_TILE_CAPACITY};
use crate::game::tile::{self, Monument, Tile, CATASTROPHE_TILES_PER_PLAYER};
use crate::host::Host;

/// Minimum players in a game.
pub const MIN_PLAYERS: usize = 3;
/// Maximum players in a game.
pub const MAX_PLAYERS: usize = 4;
/// The game ends when fewer than this many treasures remain on the board.
pub const TREASURE_END_THRESHOLD: usize = 3;

/// Complete game state: the serializable aggregate every operation
/// mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,
    /// All kingdoms currently on the board.
    pub kingdoms: Kingdoms,
    /// The face-down draw bag. Tiles are drawn from the end.
    pub tile_bag: Vec<Tile>,
    /// Players in seat order; `PlayerId` indexes this vector.
    pub players: Vec<PlayerState>,
    /// The revolt currently being fought, if any.
    pub revolt: Revolt,
    /// Monuments not yet built.
    pub monuments_remaining: Vec<Monument>,
}

impl GameState {
    /// Create a game for the given player count with an unshuffled bag and
    /// empty hands. Call [`GameState::setup`] to shuffle and deal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] outside 3..=4.
    pub fn new(player_count: usize) -> GameResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }
        let players = Dynasty::ALL[..player_count]
            .iter()
            .map(|&dynasty| PlayerState::new(dynasty))
            .collect();
        Ok(Self {
            board: Board::new(),
            kingdoms: Kingdoms::new(),
            tile_bag: tile::initial_tile_bag(TREASURE_SPACE_COUNT),
            players,
            revolt: Revolt::default(),
            monuments_remaining: Monument::ALL.to_vec(),
        })
    }

    /// Shuffle the bag and deal starting hands: two catastrophe tiles plus
    /// drawn civilization tiles up to hand capacity.
    pub fn setup(&mut self, host: &mut dyn Host) {
        host.shuffle(&mut self.tile_bag);
        #[allow(clippy::cast_possible_truncation)]
        let player_count = self.players.len() as PlayerId;
        for player in 0..player_count {
            if let Some(state) = self.players.get_mut(usize::from(player)) {
                for _ in 0..CATASTROPHE_TILES_PER_PLAYER {
                    state.hand.push(Tile::Catastrophe);
                }
            }
            for _ in 0..PLAYER_TILE_CAPACITY - CATASTROPHE_TILES_PER_PLAYER {
                self.draw_tile(player);
            }
        }
    }

    /// Draw one tile from the bag into the player's hand.
    ///
    /// Returns `false` without drawing if the bag is empty, the hand is
    /// full, or the player id is unknown.
    pub fn draw_tile(&mut self, player: PlayerId) -> bool {
        let Some(state) = self.players.get_mut(usize::from(player)) else {
            return false;
        };
        if state.hand.len() >= PLAYER_TILE_CAPACITY {
            return false;
        }
        match self.tile_bag.pop() {
            Some(tile) => {
                state.hand.push(tile);
                true
            }
            None => false,
        }
    }

    /// Get a player by id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] for an out-of-range id.
    pub fn player(&self, id: PlayerId) -> GameResult<&PlayerState> {
        self.players
            .get(usize::from(id))
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Get a player mutably by id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] for an out-of-range id.
    pub fn player_mut(&mut self, id: PlayerId) -> GameResult<&mut PlayerState> {
        self.players
            .get_mut(usize::from(id))
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// The player holding this dynasty, if seated.
    #[must_use]
    pub fn player_by_dynasty(&self, dynasty: Dynasty) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|player| player.dynasty == dynasty)
            .and_then(|idx| PlayerId::try_from(idx).ok())
    }

    /// Whether the treasure end condition has been reached.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.treasure_count() < TREASURE_END_THRESHOLD
    }
}
