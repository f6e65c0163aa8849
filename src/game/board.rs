//! Board geometry: coordinates, spaces, and the fixed 16x11 grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::player::Leader;
use crate::game::tile::{CivTile, CivType, Monument, Tile};

/// Board width in spaces (columns).
pub const BOARD_WIDTH: u8 = 16;
/// Board height in spaces (rows).
pub const BOARD_HEIGHT: u8 = 11;

/// The river path across the board. Only river-compatible tiles may be
/// placed here.
const RIVER_SPACES: [(u8, u8); 42] = [
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 2),
    (4, 2),
    (4, 1),
    (4, 0),
    (5, 0),
    (6, 0),
    (7, 0),
    (8, 0),
    (0, 5),
    (0, 6),
    (1, 6),
    (2, 6),
    (3, 6),
    (3, 7),
    (4, 7),
    (5, 7),
    (6, 7),
    (6, 8),
    (7, 8),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 8),
    (12, 8),
    (12, 7),
    (12, 6),
    (13, 6),
    (14, 6),
    (14, 5),
    (14, 4),
    (15, 4),
    (15, 3),
    (14, 3),
    (13, 3),
    (13, 2),
    (12, 2),
    (12, 1),
    (12, 0),
];

/// Spaces that start with a treasure and a face-up temple tile.
const TREASURE_SPACES: [(u8, u8); 10] = [
    (1, 1),
    (1, 7),
    (5, 2),
    (5, 9),
    (8, 6),
    (10, 0),
    (10, 10),
    (13, 4),
    (15, 1),
    (14, 8),
];

/// Number of treasure spaces, and so of pre-placed temple tiles.
pub const TREASURE_SPACE_COUNT: usize = TREASURE_SPACES.len();

/// A coordinate on the board.
///
/// The canonical text form is `"x,y"`, used by the renderer and save files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u8,
    /// Y coordinate (row).
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Get orthogonally adjacent coordinates within the board.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(self) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.y > 0 {
            result[count as usize] = Coord::new(self.x, self.y - 1); // up
            count += 1;
        }
        if self.y + 1 < BOARD_HEIGHT {
            result[count as usize] = Coord::new(self.x, self.y + 1); // down
            count += 1;
        }
        if self.x > 0 {
            result[count as usize] = Coord::new(self.x - 1, self.y); // left
            count += 1;
        }
        if self.x + 1 < BOARD_WIDTH {
            result[count as usize] = Coord::new(self.x + 1, self.y); // right
            count += 1;
        }

        (result, count)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A single space on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Tile occupying this space, if any.
    pub tile: Option<Tile>,
    /// Leader standing on this space, if any.
    pub leader: Option<Leader>,
    /// Whether this space lies on the river.
    pub river: bool,
    /// Whether an uncollected treasure sits here.
    pub treasure: bool,
    /// Monument covering this space, if any.
    pub monument: Option<Monument>,
}

impl Space {
    /// A space with no tile, leader, or monument.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tile.is_none() && self.leader.is_none() && self.monument.is_none()
    }

    /// Whether this space can belong to a kingdom.
    ///
    /// Monument spaces never do. Otherwise the space must hold a leader or
    /// a face-up civilization tile; catastrophe markers and face-down tiles
    /// occupy the space without supporting membership.
    #[must_use]
    pub fn supports_kingdom(&self) -> bool {
        if self.monument.is_some() {
            return false;
        }
        self.leader.is_some()
            || self
                .tile
                .is_some_and(|tile| tile.faceup_civ().is_some())
    }

    /// Whether a face-up temple tile sits here. Used for wage strength.
    #[must_use]
    pub fn has_faceup_temple(&self) -> bool {
        self.tile.is_some_and(Tile::is_faceup_temple)
    }
}

/// The fixed game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Spaces stored in row-major order.
    spaces: Vec<Space>,
}

impl Board {
    /// Create the starting board: river spaces stamped, treasure spaces
    /// loaded with a treasure and a face-up temple tile.
    #[must_use]
    pub fn new() -> Self {
        let size = usize::from(BOARD_WIDTH) * usize::from(BOARD_HEIGHT);
        let mut spaces = vec![Space::default(); size];

        for (x, y) in RIVER_SPACES {
            let idx = usize::from(y) * usize::from(BOARD_WIDTH) + usize::from(x);
            spaces[idx].river = true;
        }
        for (x, y) in TREASURE_SPACES {
            let idx = usize::from(y) * usize::from(BOARD_WIDTH) + usize::from(x);
            spaces[idx].treasure = true;
            spaces[idx].tile = Some(Tile::Civilization(CivTile::new(CivType::Temple)));
        }

        Self { spaces }
    }

    /// Check if a coordinate is within the board.
    #[must_use]
    pub const fn in_bounds(coord: Coord) -> bool {
        coord.x < BOARD_WIDTH && coord.y < BOARD_HEIGHT
    }

    /// Convert a coordinate to an index into the spaces array.
    fn coord_to_index(coord: Coord) -> Option<usize> {
        if Self::in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(BOARD_WIDTH) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get a reference to the space at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Space> {
        Self::coord_to_index(coord).map(|idx| &self.spaces[idx])
    }

    /// Get a mutable reference to the space at the given coordinate.
    #[must_use]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Space> {
        Self::coord_to_index(coord).map(|idx| &mut self.spaces[idx])
    }

    /// Iterate over all coordinates and spaces.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Space)> {
        self.spaces.iter().enumerate().map(|(idx, space)| {
            let x = (idx % usize::from(BOARD_WIDTH)) as u8;
            let y = (idx / usize::from(BOARD_WIDTH)) as u8;
            (Coord::new(x, y), space)
        })
    }

    /// Count spaces whose treasure has not been collected.
    #[must_use]
    pub fn treasure_count(&self) -> usize {
        self.spaces.iter().filter(|space| space.treasure).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
