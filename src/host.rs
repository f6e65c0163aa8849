//! The capability surface the engine expects from its host.
//!
//! The engine owns rules and state; randomness, stage scheduling, and the
//! end-of-game signal belong to whatever drives it. Handlers call these
//! capabilities at most once per decision, so a recording host can assert
//! exactly-once behavior.

use serde::{Deserialize, Serialize};

use crate::game::{PlayerId, Tile};

/// A stage the host is asked to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageRequest {
    /// Run the revolt: the placing player attacks this defender's leader.
    AttackLeader {
        /// Owner of the leader under attack.
        defender: PlayerId,
    },
    /// Run the unification conflict for a tile joining two kingdoms.
    UnificationConflict,
}

/// Capabilities the engine borrows from its host.
pub trait Host {
    /// Shuffle the draw bag in place.
    fn shuffle(&mut self, tiles: &mut Vec<Tile>);

    /// Schedule an interactive stage.
    fn activate_stage(&mut self, request: StageRequest);

    /// End the game at the next opportunity.
    fn end_game(&mut self);
}

/// xorshift64 PRNG. Deterministic across platforms, seed 0 is remapped.
#[derive(Debug, Clone, Copy)]
struct Rng {
    state: u64,
}

impl Rng {
    const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-enough value in 0..bound for shuffling.
    #[allow(clippy::cast_possible_truncation)]
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// A deterministic host for the CLI and tests.
///
/// Shuffles with a seeded PRNG and records every stage request and
/// end-game call for later assertions.
#[derive(Debug, Clone)]
pub struct SeededHost {
    rng: Rng,
    /// Stage requests in the order they were made.
    pub stage_requests: Vec<StageRequest>,
    /// How many times the engine asked to end the game.
    pub end_game_calls: u32,
}

impl SeededHost {
    /// Create a host from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            stage_requests: Vec::new(),
            end_game_calls: 0,
        }
    }
}

impl Host for SeededHost {
    fn shuffle(&mut self, tiles: &mut Vec<Tile>) {
        // Fisher-Yates.
        for i in (1..tiles.len()).rev() {
            let j = self.rng.next_below(i + 1);
            tiles.swap(i, j);
        }
    }

    fn activate_stage(&mut self, request: StageRequest) {
        self.stage_requests.push(request);
    }

    fn end_game(&mut self) {
        self.end_game_calls += 1;
    }
}
