//! Tiles and the fixed 28-tile double-six set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::GameRng;

/// Highest pip value on a face.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in the double-six set.
pub const SET_SIZE: usize = 28;

/// An unordered pair of pip values.
///
/// Stored normalized (`low <= high`), so `Tile::new(5, 2) == Tile::new(2, 5)`.
/// Each tile appears exactly once in a set, which makes the tile its own
/// identity inside hands and the boneyard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    low: u8,
    high: u8,
}

impl Tile {
    /// Create a tile from two faces in either order.
    ///
    /// Panics if a face exceeds [`MAX_PIP`]; use [`Tile::try_new`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "Pip value out of range");
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Create a tile from untrusted faces.
    pub fn try_new(a: u8, b: u8) -> Result<Self> {
        for face in [a, b] {
            if face > MAX_PIP {
                return Err(EngineError::InvalidPip(face));
            }
        }
        Ok(Self::new(a, b))
    }

    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.low == self.high
    }

    /// Sum of both faces.
    #[must_use]
    pub const fn pips(self) -> u32 {
        self.low as u32 + self.high as u32
    }

    /// Does either face show `value`?
    #[must_use]
    pub const fn has_face(self, value: u8) -> bool {
        self.low == value || self.high == value
    }

    /// The face opposite `value`, if the tile has a `value` face.
    #[must_use]
    pub const fn other_face(self, value: u8) -> Option<u8> {
        if self.low == value {
            Some(self.high)
        } else if self.high == value {
            Some(self.low)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}

/// A tile as laid on the chain: `left` touches the tile before it,
/// `right` touches the tile after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub left: u8,
    pub right: u8,
}

impl PlacedTile {
    /// The unordered tile this placement came from.
    #[must_use]
    pub const fn tile(self) -> Tile {
        Tile::new(self.left, self.right)
    }
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// The double-six set.
pub struct TileSet;

impl TileSet {
    /// All 28 tiles `(i, j)` with `0 <= i <= j <= 6`, each exactly once,
    /// in ascending order.
    #[must_use]
    pub fn generate() -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(SET_SIZE);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                tiles.push(Tile::new(i, j));
            }
        }
        tiles
    }

    /// A uniformly random permutation of the full set.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Vec<Tile> {
        let mut tiles = Self::generate();
        Self::shuffle(&mut tiles, rng);
        tiles
    }

    /// Shuffle tiles in place without adding or losing any.
    pub fn shuffle(tiles: &mut [Tile], rng: &mut GameRng) {
        rng.shuffle(tiles);
    }

    /// Check that `tiles` is exactly the double-six set: 28 distinct tiles.
    #[must_use]
    pub fn is_complete<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> bool {
        let mut seen = FxHashSet::default();
        for tile in tiles {
            if !seen.insert(*tile) {
                return false;
            }
        }
        seen.len() == SET_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_normalized() {
        let a = Tile::new(5, 2);
        assert_eq!(a, Tile::new(2, 5));
        assert_eq!(a.low(), 2);
        assert_eq!(a.high(), 5);
        assert_eq!(a.pips(), 7);
        assert_eq!(a.to_string(), "[2|5]");
    }

    #[test]
    fn test_tile_faces() {
        let tile = Tile::new(1, 4);
        assert!(tile.has_face(1));
        assert!(tile.has_face(4));
        assert!(!tile.has_face(3));
        assert_eq!(tile.other_face(1), Some(4));
        assert_eq!(tile.other_face(4), Some(1));
        assert_eq!(tile.other_face(6), None);

        let double = Tile::new(3, 3);
        assert!(double.is_double());
        assert_eq!(double.other_face(3), Some(3));
    }

    #[test]
    fn test_try_new_rejects_big_pips() {
        assert_eq!(Tile::try_new(7, 1), Err(EngineError::InvalidPip(7)));
        assert_eq!(Tile::try_new(6, 6), Ok(Tile::new(6, 6)));
    }

    #[test]
    fn test_generate_full_set() {
        let tiles = TileSet::generate();
        assert_eq!(tiles.len(), SET_SIZE);
        assert!(TileSet::is_complete(&tiles));
        assert_eq!(tiles.iter().filter(|t| t.is_double()).count(), 7);
        assert_eq!(tiles.iter().map(|t| t.pips()).sum::<u32>(), 168);
    }

    #[test]
    fn test_shuffle_preserves_set() {
        let mut rng = GameRng::new(9);
        let shuffled = TileSet::shuffled(&mut rng);

        assert_ne!(shuffled, TileSet::generate());
        assert!(TileSet::is_complete(&shuffled));
    }

    #[test]
    fn test_is_complete_detects_duplicates() {
        let mut tiles = TileSet::generate();
        tiles[0] = tiles[1];
        assert!(!TileSet::is_complete(&tiles));

        let short = &TileSet::generate()[..27];
        assert!(!TileSet::is_complete(short));
    }

    #[test]
    fn test_placed_tile_roundtrip() {
        let placed = PlacedTile { left: 6, right: 1 };
        assert_eq!(placed.tile(), Tile::new(1, 6));
        assert_eq!(placed.to_string(), "[6|1]");
    }
}
