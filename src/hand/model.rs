//! A player's hand: held tiles interleaved with hint markers.
//!
//! Position is the only identity a tile has inside a hand. Hint markers
//! record that a hint was given at a point in the hand's history; they are
//! appended at the end and dropped once they reach the front.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::{Color, Hint, Rank, Tile};

/// Hints accumulated by a single held tile, in the order received.
pub type TileHints = SmallVec<[Hint; 2]>;

/// One entry of a hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandItem {
    /// A held tile and the hints that have matched it so far.
    Tile { tile: Tile, hints: TileHints },
    /// A hint marker with no tile attached.
    Marker(Hint),
}

impl HandItem {
    /// A freshly drawn tile with no hints.
    #[must_use]
    pub fn fresh(tile: Tile) -> Self {
        HandItem::Tile {
            tile,
            hints: SmallVec::new(),
        }
    }

    /// The held tile, if this item is one.
    #[must_use]
    pub fn tile(&self) -> Option<Tile> {
        match self {
            HandItem::Tile { tile, .. } => Some(*tile),
            HandItem::Marker(_) => None,
        }
    }

    /// Hints attached to a held tile. Markers have none.
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        match self {
            HandItem::Tile { hints, .. } => hints,
            HandItem::Marker(_) => &[],
        }
    }

    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self, HandItem::Marker(_))
    }

    /// First color hint received, if any.
    #[must_use]
    pub fn known_color(&self) -> Option<Color> {
        self.hints().iter().find_map(|h| match h {
            Hint::Color(c) => Some(*c),
            Hint::Rank(_) => None,
        })
    }

    /// First rank hint received, if any.
    #[must_use]
    pub fn known_rank(&self) -> Option<Rank> {
        self.hints().iter().find_map(|h| match h {
            Hint::Rank(r) => Some(*r),
            Hint::Color(_) => None,
        })
    }
}

/// Does the hint describe the tile's color or rank?
#[must_use]
pub fn matches_hint(tile: Tile, hint: Hint) -> bool {
    hint.matches(tile)
}

/// Ordered hand items.
///
/// Backed by `im::Vector` so game states clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    items: Vector<HandItem>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items, markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HandItem> {
        self.items.get(index)
    }

    /// Tile held at a position, `None` for markers and out-of-range indices.
    #[must_use]
    pub fn tile_at(&self, index: usize) -> Option<Tile> {
        self.items.get(index).and_then(HandItem::tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandItem> {
        self.items.iter()
    }

    /// Held tiles in hand order, markers skipped.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.items.iter().filter_map(HandItem::tile)
    }

    /// Number of held tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Append a freshly drawn tile at the end.
    pub fn push_tile(&mut self, tile: Tile) {
        self.items.push_back(HandItem::fresh(tile));
    }

    /// Record a hint on every matching held tile, then append a marker.
    ///
    /// Hints are appended even if the tile already carries the same one.
    pub fn apply_hint(&mut self, hint: Hint) {
        for item in self.items.iter_mut() {
            if let HandItem::Tile { tile, hints } = item {
                if hint.matches(*tile) {
                    hints.push(hint);
                }
            }
        }
        self.items.push_back(HandItem::Marker(hint));
    }

    /// Remove the item at `index`, then drop any markers left at the front.
    ///
    /// Returns `None` and leaves the hand untouched if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<HandItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        while self.items.front().is_some_and(HandItem::is_marker) {
            self.items.pop_front();
        }
        Some(removed)
    }
}

impl FromIterator<HandItem> for Hand {
    fn from_iter<I: IntoIterator<Item = HandItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Take up to `count` tiles from the top (front) of the deck as a new hand.
pub fn draw_tiles(deck: &mut Vector<Tile>, count: usize) -> Hand {
    let mut hand = Hand::new();
    for _ in 0..count {
        match deck.pop_front() {
            Some(tile) => hand.push_tile(tile),
            None => break,
        }
    }
    hand
}
