//! Hand model.
//!
//! A hand is an ordered mix of held tiles and hint markers. See
//! `Hand::apply_hint` and `Hand::remove` for how markers enter and leave.

pub mod model;

pub use model::{draw_tiles, matches_hint, Hand, HandItem, TileHints};
