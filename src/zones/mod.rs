//! Where tiles live during a round.
//!
//! Every tile of the set is in exactly one zone at a time:
//! - a player's `Hand`
//! - the `Boneyard` (undealt reserve)
//! - the `Chain` (line of play)
//!
//! ## Key Types
//!
//! - `Tile`, `PlacedTile`: unordered piece and its oriented placement
//! - `TileSet`: generation and shuffling of the 28-tile set

pub mod boneyard;
pub mod chain;
pub mod hand;
pub mod tile;

pub use boneyard::Boneyard;
pub use chain::Chain;
pub use hand::Hand;
pub use tile::{PlacedTile, Tile, TileSet, MAX_PIP, SET_SIZE};
