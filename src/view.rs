//! Presentation data for one viewer.
//!
//! A viewer sees every hand except their own in full. Their own tiles are
//! hidden, but the hints those tiles have collected stay visible. Players
//! are listed starting after the viewer, so the viewer comes last.

use serde::{Deserialize, Serialize};

use crate::core::{Game, ParticipantId};
use crate::hand::{matches_hint, HandItem};
use crate::rules::PileSummary;
use crate::tiles::{Color, Hint, Rank, Tile};

/// One hand item as shown to a viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemView {
    /// A held tile. `tile` is `None` when it belongs to the viewer.
    Tile {
        tile: Option<Tile>,
        known_color: Option<Color>,
        known_rank: Option<Rank>,
    },
    Marker(Hint),
}

impl ItemView {
    fn from_item(item: &HandItem, redact: bool) -> Self {
        match item {
            HandItem::Tile { tile, .. } => ItemView::Tile {
                tile: (!redact).then_some(*tile),
                known_color: item.known_color(),
                known_rank: item.known_rank(),
            },
            HandItem::Marker(hint) => ItemView::Marker(*hint),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub participant: ParticipantId,
    pub name: String,
    pub is_current: bool,
    pub is_viewer: bool,
    pub items: Vec<ItemView>,
}

/// Everything a client needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub players: Vec<PlayerView>,
    pub draws_remaining: usize,
    pub hints: u8,
    pub errors: u32,
    pub play_summary: PileSummary,
    pub score: u32,
    pub discards_by_color: Vec<(Color, Vec<Tile>)>,
}

impl GameView {
    #[must_use]
    pub fn for_viewer(game: &Game, viewer: &ParticipantId) -> Self {
        let players = rotate_to_last(&game.participants, viewer)
            .into_iter()
            .filter_map(|participant| {
                let seat = game.seat_of(&participant)?;
                let is_viewer = participant == *viewer;
                let items = game
                    .hand(seat)
                    .iter()
                    .map(|item| ItemView::from_item(item, is_viewer))
                    .collect();
                Some(PlayerView {
                    name: game.display_name(&participant).to_string(),
                    is_current: seat == game.turn,
                    is_viewer,
                    items,
                    participant,
                })
            })
            .collect();

        let play_summary = game.play_summary();

        Self {
            players,
            draws_remaining: game.draw_pile.len(),
            hints: game.hints,
            errors: game.errors,
            score: play_summary.score(),
            play_summary,
            discards_by_color: discards_by_color(game.discard_pile.iter().copied()),
        }
    }

    /// The viewer's own entry, if they hold a seat.
    #[must_use]
    pub fn own(&self) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.is_viewer)
    }
}

/// Rotate `xs` so that `x` ends up last. Unchanged if `x` is absent.
///
/// ```
/// use hanabi_engine::view::rotate_to_last;
///
/// assert_eq!(rotate_to_last(&[1, 2, 3, 4], &2), vec![3, 4, 1, 2]);
/// assert_eq!(rotate_to_last(&[1, 2, 3], &9), vec![1, 2, 3]);
/// ```
pub fn rotate_to_last<T: PartialEq + Clone>(xs: &[T], x: &T) -> Vec<T> {
    match xs.iter().position(|v| v == x) {
        Some(idx) => xs[idx + 1..].iter().chain(&xs[..=idx]).cloned().collect(),
        None => xs.to_vec(),
    }
}

/// Discarded tiles grouped by color, each group sorted by rank.
pub fn discards_by_color(pile: impl IntoIterator<Item = Tile>) -> Vec<(Color, Vec<Tile>)> {
    let pile: Vec<Tile> = pile.into_iter().collect();
    Color::ALL
        .into_iter()
        .map(|color| {
            let mut tiles: Vec<Tile> = pile
                .iter()
                .copied()
                .filter(|&t| matches_hint(t, Hint::Color(color)))
                .collect();
            tiles.sort();
            (color, tiles)
        })
        .collect()
}
