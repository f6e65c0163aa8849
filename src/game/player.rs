//! Player state: dynasties, leaders, hands, and scoring.

use serde::{Deserialize, Serialize};

use crate::game::board::Coord;
use crate::game::tile::{CivType, Tile};

/// Unique identifier for a player. Also the player's seat index.
pub type PlayerId = u8;

/// Maximum tiles a player may hold in hand.
pub const PLAYER_TILE_CAPACITY: usize = 6;

/// The four dynasties, in seat assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dynasty {
    /// The bow emblem.
    Archer,
    /// The bull emblem.
    Bull,
    /// The lion emblem.
    Lion,
    /// The vessel emblem.
    Urn,
}

impl Dynasty {
    /// Dynasties in the order seats are assigned at setup.
    pub const ALL: [Dynasty; 4] = [Dynasty::Archer, Dynasty::Bull, Dynasty::Lion, Dynasty::Urn];
}

/// A leader token: one dynasty, one civilization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Owning dynasty.
    pub dynasty: Dynasty,
    /// The civilization this leader scores and fights for.
    pub civ: CivType,
}

impl Leader {
    /// Create a leader token.
    #[must_use]
    pub const fn new(dynasty: Dynasty, civ: CivType) -> Self {
        Self { dynasty, civ }
    }
}

/// Victory points by color, plus collected treasures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryPoints {
    /// Red points.
    pub temple: u32,
    /// Blue points.
    pub farm: u32,
    /// Green points.
    pub market: u32,
    /// Black points.
    pub settlement: u32,
    /// Treasures collected. Spend as any color at final scoring.
    pub treasure: u32,
}

impl VictoryPoints {
    /// Mutable access to the counter for a color.
    pub fn for_civ_mut(&mut self, civ: CivType) -> &mut u32 {
        match civ {
            CivType::Temple => &mut self.temple,
            CivType::Farm => &mut self.farm,
            CivType::Market => &mut self.market,
            CivType::Settlement => &mut self.settlement,
        }
    }

    /// Read the counter for a color.
    #[must_use]
    pub const fn for_civ(&self, civ: CivType) -> u32 {
        match civ {
            CivType::Temple => self.temple,
            CivType::Farm => self.farm,
            CivType::Market => self.market,
            CivType::Settlement => self.settlement,
        }
    }
}

/// A player's stake in the revolt currently being fought.
///
/// Empty (`strength` 0, no tiles, no coord) whenever no conflict involves
/// this player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRevolt {
    /// Temple tiles withdrawn from hand as the wager.
    pub waged_tiles: Vec<Tile>,
    /// Wager size plus face-up temples adjacent to the contested leader.
    pub strength: u32,
    /// Where this player's contested leader stands.
    pub leader_coord: Option<Coord>,
}

impl PlayerRevolt {
    /// Whether this record holds no stake.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.waged_tiles.is_empty() && self.strength == 0 && self.leader_coord.is_none()
    }
}

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// This player's dynasty.
    pub dynasty: Dynasty,
    /// Tiles in hand, at most [`PLAYER_TILE_CAPACITY`].
    pub hand: Vec<Tile>,
    /// Leaders still in supply (not on the board).
    pub leaders: Vec<Leader>,
    /// Points scored so far.
    pub points: VictoryPoints,
    /// This player's stake in the active revolt, if any.
    pub revolt: PlayerRevolt,
}

impl PlayerState {
    /// Create a player with a full leader supply and an empty hand.
    #[must_use]
    pub fn new(dynasty: Dynasty) -> Self {
        let leaders = CivType::ALL
            .into_iter()
            .map(|civ| Leader::new(dynasty, civ))
            .collect();
        Self {
            dynasty,
            hand: Vec::new(),
            leaders,
            points: VictoryPoints::default(),
            revolt: PlayerRevolt::default(),
        }
    }

    /// Take the supply leader of the given civilization, if present.
    pub fn take_leader(&mut self, civ: CivType) -> Option<Leader> {
        let pos = self.leaders.iter().position(|leader| leader.civ == civ)?;
        Some(self.leaders.swap_remove(pos))
    }
}
