//! The line of play.
//!
//! The chain is an ordered sequence of oriented tiles with two open ends.
//! Every placement keeps two invariants:
//! - at each interior junction the touching faces are equal
//! - `head` is the left face of the first tile and `tail` the right face
//!   of the last tile
//!
//! Backed by `im::Vector` so tiles can be added at either end cheaply and
//! the chain can be cloned into snapshots in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{PlacedTile, Tile};
use crate::core::action::End;
use crate::core::error::{EngineError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: Vector<PlacedTile>,
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Open value at the head, or `None` while the chain is empty.
    #[must_use]
    pub fn head(&self) -> Option<u8> {
        self.tiles.front().map(|t| t.left)
    }

    /// Open value at the tail, or `None` while the chain is empty.
    #[must_use]
    pub fn tail(&self) -> Option<u8> {
        self.tiles.back().map(|t| t.right)
    }

    /// Open value at `end`.
    #[must_use]
    pub fn open_value(&self, end: End) -> Option<u8> {
        match end {
            End::Head => self.head(),
            End::Tail => self.tail(),
        }
    }

    /// Can `tile` be laid at `end`? Always true for an empty chain.
    #[must_use]
    pub fn accepts(&self, tile: Tile, end: End) -> bool {
        self.open_value(end).map_or(true, |open| tile.has_face(open))
    }

    /// Can `tile` be laid anywhere?
    #[must_use]
    pub fn accepts_anywhere(&self, tile: Tile) -> bool {
        self.accepts(tile, End::Head) || self.accepts(tile, End::Tail)
    }

    /// Lay `tile` at `end`, orienting it so the matching face touches the
    /// chain and the other face becomes the new open value.
    ///
    /// On an empty chain `end` is ignored and the tile is laid low face
    /// first, so `head = low` and `tail = high`.
    ///
    /// ```
    /// use rust_dominoes::core::End;
    /// use rust_dominoes::zones::{Chain, Tile};
    ///
    /// let mut chain = Chain::new();
    /// chain.place(Tile::new(2, 1), End::Tail).unwrap();
    /// chain.place(Tile::new(2, 3), End::Tail).unwrap();
    /// chain.place(Tile::new(1, 6), End::Head).unwrap();
    ///
    /// assert_eq!(chain.to_string(), "[6|1][1|2][2|3]");
    /// assert_eq!((chain.head(), chain.tail()), (Some(6), Some(3)));
    /// ```
    pub fn place(&mut self, tile: Tile, end: End) -> Result<PlacedTile> {
        let Some(open) = self.open_value(end) else {
            let placed = PlacedTile {
                left: tile.low(),
                right: tile.high(),
            };
            self.tiles.push_back(placed);
            return Ok(placed);
        };

        let other = tile
            .other_face(open)
            .ok_or(EngineError::IllegalMove { tile, end: Some(end) })?;

        let placed = match end {
            End::Head => {
                let placed = PlacedTile { left: other, right: open };
                self.tiles.push_front(placed);
                placed
            }
            End::Tail => {
                let placed = PlacedTile { left: open, right: other };
                self.tiles.push_back(placed);
                placed
            }
        };
        Ok(placed)
    }

    /// Tiles in chain order with their final orientation.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    /// Sum of pips over every placed tile.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.tiles.iter().map(|t| t.left as u32 + t.right as u32).sum()
    }

    /// Check the junction and open-end invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right == b.left)
    }
}

impl std::fmt::Display for Chain {
    /// `[a|b][c|d]...` in chain order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for placed in &self.tiles {
            write!(f, "{placed}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_open() {
        let chain = Chain::new();
        assert_eq!(chain.head(), None);
        assert_eq!(chain.tail(), None);
        assert!(chain.accepts(Tile::new(4, 5), End::Head));
        assert_eq!(chain.to_string(), "");
    }

    #[test]
    fn test_first_tile_low_face_first() {
        let mut chain = Chain::new();
        let placed = chain.place(Tile::new(5, 2), End::Head).unwrap();

        assert_eq!(placed, PlacedTile { left: 2, right: 5 });
        assert_eq!(chain.head(), Some(2));
        assert_eq!(chain.tail(), Some(5));
    }

    #[test]
    fn test_orientation_at_each_end() {
        let mut chain = Chain::new();
        chain.place(Tile::new(3, 4), End::Tail).unwrap();

        // Tail is 4: [4|6] keeps its faces, 6 becomes the tail.
        let placed = chain.place(Tile::new(6, 4), End::Tail).unwrap();
        assert_eq!(placed, PlacedTile { left: 4, right: 6 });

        // Head is 3: [0|3] goes on as [0|3], 0 becomes the head.
        let placed = chain.place(Tile::new(3, 0), End::Head).unwrap();
        assert_eq!(placed, PlacedTile { left: 0, right: 3 });

        assert_eq!(chain.to_string(), "[0|3][3|4][4|6]");
        assert_eq!((chain.head(), chain.tail()), (Some(0), Some(6)));
        assert!(chain.is_consistent());
    }

    #[test]
    fn test_double_keeps_open_value() {
        let mut chain = Chain::new();
        chain.place(Tile::new(1, 2), End::Tail).unwrap();
        chain.place(Tile::new(2, 2), End::Tail).unwrap();

        assert_eq!(chain.tail(), Some(2));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_mismatch_is_rejected_unchanged() {
        let mut chain = Chain::new();
        chain.place(Tile::new(1, 2), End::Tail).unwrap();

        let err = chain.place(Tile::new(5, 6), End::Head).unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalMove { tile: Tile::new(5, 6), end: Some(End::Head) }
        );
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.to_string(), "[1|2]");
    }

    #[test]
    fn test_total_pips() {
        let mut chain = Chain::new();
        chain.place(Tile::new(1, 2), End::Tail).unwrap();
        chain.place(Tile::new(2, 6), End::Tail).unwrap();
        assert_eq!(chain.total_pips(), 11);
    }
}
