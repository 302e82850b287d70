//! Pluggable computer move selection.

pub mod policy;

pub use policy::{FirstLegal, HeaviestFirst, MoveStrategy, RandomLegal};
