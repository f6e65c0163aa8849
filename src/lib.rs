// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Eridu: a deterministic rules engine for a tile-laying kingdom game.
//!
//! The engine owns the board, kingdoms, players, and conflict state, and
//! exposes move handlers that mutate a [`GameState`]. Everything
//! interactive or random is delegated to a [`Host`]: shuffling the draw
//! bag, scheduling conflict stages, and ending the game. This keeps the
//! engine bit-exact deterministic and trivially testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Host (turn order, stages)       │
//! ├─────────────────────────────────────┤
//! │   Move handlers / conflict machine  │
//! ├─────────────────────────────────────┤
//! │   Board + kingdoms + players        │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod host;
pub mod persistence;
pub mod render;

pub use error::{GameError, GameResult};
pub use host::{Host, SeededHost, StageRequest};

// Re-export key game types at crate root for convenience
pub use game::{
    CivType, Coord, Dynasty, GameState, Kingdom, KingdomId, Leader, Monument, PlayerId,
    PlayerState, Tile,
};
