//! Tile taxonomy, monuments, and the draw bag composition.

use serde::{Deserialize, Serialize};

use crate::game::player::Dynasty;

/// Temple tiles printed for the game, including the ten pre-placed on
/// treasure spaces.
pub const TEMPLE_TILE_COUNT: usize = 57;
/// Farm tiles in the bag. Farms are the only river-compatible tiles.
pub const FARM_TILE_COUNT: usize = 36;
/// Market tiles in the bag.
pub const MARKET_TILE_COUNT: usize = 30;
/// Settlement tiles in the bag.
pub const SETTLEMENT_TILE_COUNT: usize = 30;
/// Catastrophe tiles dealt to each player at setup.
pub const CATASTROPHE_TILES_PER_PLAYER: usize = 2;

/// The four civilization colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivType {
    /// Red tiles and priest leaders.
    Temple,
    /// Blue tiles and farmer leaders.
    Farm,
    /// Green tiles and trader leaders.
    Market,
    /// Black tiles and king leaders.
    Settlement,
}

impl CivType {
    /// All four colors, in scoring display order.
    pub const ALL: [CivType; 4] = [
        CivType::Temple,
        CivType::Farm,
        CivType::Market,
        CivType::Settlement,
    ];
}

/// A civilization tile, face-up or face-down.
///
/// Face-down tiles (flipped under a monument) still occupy their space but
/// no longer support kingdoms, count as temples, or score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivTile {
    /// Color of the tile.
    pub civ: CivType,
    /// Whether this tile may be placed on river spaces.
    pub river: bool,
    /// Whether the tile has been flipped face-down.
    pub facedown: bool,
}

impl CivTile {
    /// Create a face-up tile of the given color.
    #[must_use]
    pub const fn new(civ: CivType) -> Self {
        Self {
            civ,
            river: matches!(civ, CivType::Farm),
            facedown: false,
        }
    }
}

/// Everything that can be drawn from the bag or sit on a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// A colored civilization tile.
    Civilization(CivTile),
    /// A catastrophe marker. Permanently blocks its space.
    Catastrophe,
    /// The marker placed on the joining tile of a unification conflict.
    Unification,
    /// A dynasty marker tile.
    Dynasty(Dynasty),
}

impl Tile {
    /// Shorthand for a face-up civilization tile.
    #[must_use]
    pub const fn civilization(civ: CivType) -> Self {
        Tile::Civilization(CivTile::new(civ))
    }

    /// The color of this tile, if it is a face-up civilization tile.
    #[must_use]
    pub const fn faceup_civ(self) -> Option<CivType> {
        match self {
            Tile::Civilization(civ_tile) if !civ_tile.facedown => Some(civ_tile.civ),
            _ => None,
        }
    }

    /// Whether this is a face-up temple tile.
    #[must_use]
    pub fn is_faceup_temple(self) -> bool {
        self.faceup_civ() == Some(CivType::Temple)
    }
}

/// The six buildable monuments, one per pair of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Monument {
    /// Red and blue.
    TempleFarm,
    /// Red and green.
    TempleMarket,
    /// Red and black.
    TempleSettlement,
    /// Blue and green.
    FarmMarket,
    /// Blue and black.
    FarmSettlement,
    /// Green and black.
    MarketSettlement,
}

impl Monument {
    /// All six monuments, the initial inventory.
    pub const ALL: [Monument; 6] = [
        Monument::TempleFarm,
        Monument::TempleMarket,
        Monument::TempleSettlement,
        Monument::FarmMarket,
        Monument::FarmSettlement,
        Monument::MarketSettlement,
    ];

    /// The two colors this monument scores for.
    #[must_use]
    pub const fn colors(self) -> (CivType, CivType) {
        match self {
            Monument::TempleFarm => (CivType::Temple, CivType::Farm),
            Monument::TempleMarket => (CivType::Temple, CivType::Market),
            Monument::TempleSettlement => (CivType::Temple, CivType::Settlement),
            Monument::FarmMarket => (CivType::Farm, CivType::Market),
            Monument::FarmSettlement => (CivType::Farm, CivType::Settlement),
            Monument::MarketSettlement => (CivType::Market, CivType::Settlement),
        }
    }
}

/// Build the unshuffled draw bag.
///
/// The ten temple tiles pre-placed on treasure spaces at board construction
/// are excluded, so temple count here is 57 minus 10.
#[must_use]
pub fn initial_tile_bag(pre_placed_temples: usize) -> Vec<Tile> {
    let mut bag = Vec::with_capacity(
        TEMPLE_TILE_COUNT + FARM_TILE_COUNT + MARKET_TILE_COUNT + SETTLEMENT_TILE_COUNT
            - pre_placed_temples,
    );
    for _ in 0..TEMPLE_TILE_COUNT - pre_placed_temples {
        bag.push(Tile::civilization(CivType::Temple));
    }
    for _ in 0..FARM_TILE_COUNT {
        bag.push(Tile::civilization(CivType::Farm));
    }
    for _ in 0..MARKET_TILE_COUNT {
        bag.push(Tile::civilization(CivType::Market));
    }
    for _ in 0..SETTLEMENT_TILE_COUNT {
        bag.push(Tile::civilization(CivType::Settlement));
    }
    bag
}
