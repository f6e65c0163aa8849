//! Kingdoms: identified connected regions of the board and their
//! recomputation after a space is removed from play.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::board::Coord;

/// Stable identifier for a kingdom, issued by a monotonic counter.
///
/// Ids are never reused within a game; a split always mints fresh ids for
/// the surviving fragments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct KingdomId(pub u32);

/// A maximal 4-connected region of occupied spaces containing at least one
/// leader somewhere in its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdom {
    /// This kingdom's stable id.
    pub id: KingdomId,
    /// Member coordinates. Sorted for deterministic iteration.
    pub spaces: BTreeSet<Coord>,
}

impl Kingdom {
    /// Whether the coordinate is a member of this kingdom.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.spaces.contains(&coord)
    }
}

/// The registry of all kingdoms currently on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdoms {
    kingdoms: Vec<Kingdom>,
    next_id: u32,
}

impl Kingdoms {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of kingdoms on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kingdoms.len()
    }

    /// Whether no kingdoms exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kingdoms.is_empty()
    }

    /// Iterate over all kingdoms.
    pub fn iter(&self) -> impl Iterator<Item = &Kingdom> {
        self.kingdoms.iter()
    }

    /// Mint a new kingdom from the given member set.
    ///
    /// Empty member sets are dropped without minting an id.
    pub fn create(&mut self, spaces: BTreeSet<Coord>) -> Option<KingdomId> {
        if spaces.is_empty() {
            return None;
        }
        let id = KingdomId(self.next_id);
        self.next_id += 1;
        self.kingdoms.push(Kingdom { id, spaces });
        Some(id)
    }

    /// Look up a kingdom by id.
    #[must_use]
    pub fn get(&self, id: KingdomId) -> Option<&Kingdom> {
        self.kingdoms.iter().find(|kingdom| kingdom.id == id)
    }

    /// Look up a kingdom mutably by id.
    #[must_use]
    pub fn get_mut(&mut self, id: KingdomId) -> Option<&mut Kingdom> {
        self.kingdoms.iter_mut().find(|kingdom| kingdom.id == id)
    }

    /// The kingdom containing this coordinate, if any.
    #[must_use]
    pub fn containing(&self, coord: Coord) -> Option<&Kingdom> {
        self.kingdoms.iter().find(|kingdom| kingdom.contains(coord))
    }

    /// The id of the kingdom containing this coordinate, if any.
    #[must_use]
    pub fn id_containing(&self, coord: Coord) -> Option<KingdomId> {
        self.containing(coord).map(|kingdom| kingdom.id)
    }

    /// Append a coordinate to an existing kingdom's member set.
    ///
    /// Returns `false` if the id is unknown.
    pub fn add_member(&mut self, id: KingdomId, coord: Coord) -> bool {
        match self.get_mut(id) {
            Some(kingdom) => {
                kingdom.spaces.insert(coord);
                true
            }
            None => false,
        }
    }

    /// Remove a coordinate from play and recompute its kingdom.
    ///
    /// If the coordinate belongs to a kingdom, that kingdom is dissolved
    /// and each connected component of the remaining members becomes a new
    /// kingdom with a fresh id. No-op if the coordinate is kingdom-less.
    pub fn detach(&mut self, coord: Coord) {
        let Some(pos) = self
            .kingdoms
            .iter()
            .position(|kingdom| kingdom.contains(coord))
        else {
            return;
        };
        let mut spaces = self.kingdoms.swap_remove(pos).spaces;
        spaces.remove(&coord);
        for component in components(&spaces) {
            self.create(component);
        }
    }
}

/// Partition a member set into its 4-connected components.
///
/// Iterative worklist flood fill over the member set only; board contents
/// are irrelevant here because membership is the input.
#[must_use]
pub fn components(spaces: &BTreeSet<Coord>) -> Vec<BTreeSet<Coord>> {
    let mut unvisited = spaces.clone();
    let mut result = Vec::new();

    while let Some(&seed) = unvisited.iter().next() {
        unvisited.remove(&seed);
        let mut component = BTreeSet::new();
        component.insert(seed);
        let mut worklist = vec![seed];

        while let Some(coord) = worklist.pop() {
            let (adj, count) = coord.adjacent();
            for &next in &adj[..count as usize] {
                if unvisited.remove(&next) {
                    component.insert(next);
                    worklist.push(next);
                }
            }
        }
        result.push(component);
    }
    result
}
