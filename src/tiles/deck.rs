//! Deck composition and per-player hand sizes.

use im::Vector;

use super::tile::{Color, Rank, Tile};
use crate::core::GameRng;
use crate::rules::Rejection;

/// Number of tiles in a full deck.
pub const DECK_SIZE: usize = 60;

/// Every tile of a full deck, in color-then-rank order.
#[must_use]
pub fn full_deck() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for rank in Rank::ALL {
            for _ in 0..rank.copies() {
                tiles.push(Tile::new(color, rank));
            }
        }
    }
    tiles
}

/// A uniformly shuffled full deck. The front of the result is the top.
#[must_use]
pub fn generate_deck(rng: &mut GameRng) -> Vector<Tile> {
    let mut tiles = full_deck();
    rng.shuffle(&mut tiles);
    tiles.into_iter().collect()
}

/// Tiles dealt to each player for a given player count.
///
/// Only 2 to 5 players are supported.
pub fn hand_size(player_count: usize) -> Result<usize, Rejection> {
    match player_count {
        2 => Ok(6),
        3 => Ok(5),
        4 | 5 => Ok(4),
        n => Err(Rejection::UnsupportedPlayerCount(n)),
    }
}
