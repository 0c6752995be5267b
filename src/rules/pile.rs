//! Play-pile summary and play legality.

use serde::{Deserialize, Serialize};

use crate::tiles::{Color, Rank, Tile};

/// Highest played rank per color (0 when nothing of that color is played).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileSummary {
    highest: [u8; 6],
}

impl PileSummary {
    /// Summarize a play pile.
    pub fn from_pile<'a>(pile: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut summary = Self::default();
        for tile in pile {
            let slot = &mut summary.highest[tile.color.index()];
            *slot = (*slot).max(tile.rank.value());
        }
        summary
    }

    #[must_use]
    pub fn highest(&self, color: Color) -> u8 {
        self.highest[color.index()]
    }

    /// The rank that may be played next on a color, `None` once it reached 5.
    #[must_use]
    pub fn next_rank(&self, color: Color) -> Option<Rank> {
        Rank::from_value(self.highest(color) + 1)
    }

    /// Is the tile the next one in its color's run?
    #[must_use]
    pub fn allows(&self, tile: Tile) -> bool {
        tile.rank.value() == self.highest(tile.color) + 1
    }

    /// Sum of the highest ranks, 0 through 30.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.highest.iter().map(|&r| u32::from(r)).sum()
    }

    /// Every color played up to 5.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.highest.iter().all(|&r| r == Rank::Five.value())
    }

    /// (color, highest rank) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        Color::ALL.into_iter().map(|c| (c, self.highest(c)))
    }
}

/// Can `tile` be played on top of `pile`?
///
/// ```
/// use hanabi_engine::rules::is_legal_play;
/// use hanabi_engine::tiles::{Color, Rank, Tile};
///
/// let pile = [Tile::new(Color::Red, Rank::One)];
/// assert!(is_legal_play(&pile, Tile::new(Color::Red, Rank::Two)));
/// assert!(!is_legal_play(&pile, Tile::new(Color::Red, Rank::Three)));
/// assert!(is_legal_play(&pile, Tile::new(Color::Blue, Rank::One)));
/// ```
pub fn is_legal_play<'a>(pile: impl IntoIterator<Item = &'a Tile>, tile: Tile) -> bool {
    PileSummary::from_pile(pile).allows(tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(color: Color, rank: Rank) -> Tile {
        Tile::new(color, rank)
    }

    #[test]
    fn test_empty_summary() {
        let summary = PileSummary::from_pile(&[]);
        for color in Color::ALL {
            assert_eq!(summary.highest(color), 0);
            assert_eq!(summary.next_rank(color), Some(Rank::One));
        }
        assert_eq!(summary.score(), 0);
    }

    #[test]
    fn test_summary_tracks_max_per_color() {
        let pile = [
            t(Color::Red, Rank::One),
            t(Color::Red, Rank::Two),
            t(Color::Green, Rank::One),
            t(Color::Red, Rank::Three),
        ];
        let summary = PileSummary::from_pile(&pile);

        assert_eq!(summary.highest(Color::Red), 3);
        assert_eq!(summary.highest(Color::Green), 1);
        assert_eq!(summary.highest(Color::Purple), 0);
        assert_eq!(summary.next_rank(Color::Red), Some(Rank::Four));
        assert_eq!(summary.score(), 4);
    }

    #[test]
    fn test_legality() {
        let pile = [t(Color::Blue, Rank::One), t(Color::Blue, Rank::Two)];

        assert!(is_legal_play(&pile, t(Color::Blue, Rank::Three)));
        assert!(!is_legal_play(&pile, t(Color::Blue, Rank::Two)));
        assert!(!is_legal_play(&pile, t(Color::Blue, Rank::Four)));
        assert!(is_legal_play(&pile, t(Color::White, Rank::One)));
        assert!(!is_legal_play(&pile, t(Color::White, Rank::Three)));
    }

    #[test]
    fn test_complete_pile() {
        let pile: Vec<Tile> = Color::ALL
            .into_iter()
            .flat_map(|c| Rank::ALL.into_iter().map(move |r| t(c, r)))
            .collect();
        let summary = PileSummary::from_pile(&pile);

        assert!(summary.is_complete());
        assert_eq!(summary.score(), 30);
        assert_eq!(summary.next_rank(Color::Yellow), None);
        assert!(!summary.allows(t(Color::Yellow, Rank::Five)));
    }
}
