//! Undealt tile reserve.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::error::{EngineError, Result};

/// Remaining undealt tiles. Only ever shrinks during a round.
///
/// Drawing takes from the front of the dealt order (top = index 0 of the
/// original order; stored reversed so draws pop from the end of the vec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boneyard {
    tiles: Vec<Tile>,
}

impl Boneyard {
    /// Build a boneyard whose first draw is `tiles[0]`.
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut tiles: Vec<Tile> = tiles.into_iter().collect();
        tiles.reverse();
        Self { tiles }
    }

    /// Take the top tile.
    pub fn draw(&mut self) -> Result<Tile> {
        self.tiles.pop().ok_or(EngineError::EmptyBoneyard)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sum of pips over all remaining tiles.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.tiles.iter().map(|t| t.pips()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order_and_exhaustion() {
        let mut boneyard = Boneyard::new([Tile::new(0, 1), Tile::new(2, 3)]);
        assert_eq!(boneyard.len(), 2);
        assert_eq!(boneyard.total_pips(), 6);

        assert_eq!(boneyard.draw(), Ok(Tile::new(0, 1)));
        assert_eq!(boneyard.draw(), Ok(Tile::new(2, 3)));
        assert!(boneyard.is_empty());
        assert_eq!(boneyard.draw(), Err(EngineError::EmptyBoneyard));
    }
}
