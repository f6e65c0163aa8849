//! Error types for the rules engine.
//!
//! Every variant is a contract breach by the boundary layer that dispatches
//! moves, not a bad play by a player: move legality is validated upstream, so
//! handlers only check the preconditions they cannot survive without.
//! Game-terminal conditions (bag exhaustion, treasure count) are never
//! errors; they are signaled through the host callbacks.

use std::fmt;

use crate::game::{CivType, Coord, Monument, PlayerId};

/// Errors raised by move handlers and conflict steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate outside the fixed board grid.
    SpaceOutOfBounds(Coord),
    /// A player id with no matching player in this game.
    UnknownPlayer(PlayerId),
    /// Game creation with an unsupported player count.
    InvalidPlayerCount(usize),
    /// A hand index past the end of the acting player's hand.
    BadTileIndex {
        /// The offending index.
        index: usize,
        /// Size of the hand it indexed into.
        hand_len: usize,
    },
    /// The indexed hand tile is not the variant the move requires.
    WrongTileKind {
        /// The offending index.
        index: usize,
    },
    /// The acting player has no supply leader of this civilization.
    LeaderNotInSupply(CivType),
    /// No leader occupies the named space.
    NoLeaderAt(Coord),
    /// A wage requested more temple tiles than the hand holds.
    InsufficientTempleTiles {
        /// Tiles requested for the wage.
        requested: usize,
        /// Matching tiles actually in hand.
        available: usize,
    },
    /// A conflict step was invoked with no conflict in progress.
    NoActiveConflict,
    /// The monument has already been built this game.
    MonumentUnavailable(Monument),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SpaceOutOfBounds(coord) => {
                write!(f, "space {coord} is outside the board")
            }
            GameError::UnknownPlayer(id) => write!(f, "no player with id {id}"),
            GameError::InvalidPlayerCount(count) => {
                write!(f, "unsupported player count: {count}")
            }
            GameError::BadTileIndex { index, hand_len } => {
                write!(f, "tile index {index} out of range for hand of {hand_len}")
            }
            GameError::WrongTileKind { index } => {
                write!(f, "hand tile {index} is not the required kind")
            }
            GameError::LeaderNotInSupply(civ) => {
                write!(f, "no {civ:?} leader in supply")
            }
            GameError::NoLeaderAt(coord) => write!(f, "no leader at {coord}"),
            GameError::InsufficientTempleTiles {
                requested,
                available,
            } => {
                write!(
                    f,
                    "wage of {requested} temple tiles requested, only {available} in hand"
                )
            }
            GameError::NoActiveConflict => write!(f, "no conflict in progress"),
            GameError::MonumentUnavailable(monument) => {
                write!(f, "monument {monument:?} has already been built")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
