//! A player's hand.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::error::{EngineError, Result};

/// A player's tiles, in the order they were received.
///
/// Order is deal order followed by draw order unless the hand was sorted
/// with [`Hand::sort_for_display`]. Legal-move queries preserve it, which is
/// what the default computer strategy relies on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tiles to the hand.
    pub fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Append one tile to the hand.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove a tile, failing if it is not held.
    pub fn remove_tile(&mut self, tile: Tile) -> Result<()> {
        let pos = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .ok_or(EngineError::TileNotInHand { tile })?;
        self.tiles.remove(pos);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Tiles with a face equal to `open`, in hand order.
    pub fn find_matches(&self, open: u8) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied().filter(move |t| t.has_face(open))
    }

    /// Sum of both faces of every tile held.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.tiles.iter().map(|t| t.pips()).sum()
    }

    /// Sort ascending by low face, then high face.
    pub fn sort_for_display(&mut self) {
        self.tiles.sort_unstable();
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
