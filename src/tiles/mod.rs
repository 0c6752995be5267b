//! Tiles and the deck.
//!
//! A deck holds 60 tiles: for each of the six colors, three 1s, two each of
//! 2-4, and a single 5.

pub mod tile;
pub mod deck;

pub use tile::{Color, Hint, Rank, Tile};
pub use deck::{full_deck, generate_deck, hand_size, DECK_SIZE};
