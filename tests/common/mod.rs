//! Shared helpers for integration tests.

#![allow(dead_code)]

use hanabi_engine::core::Names;
use hanabi_engine::{Color, Game, Hand, HandItem, ParticipantId, PlayerId, PlayerMap, Rank, Tile};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn id(s: &str) -> ParticipantId {
    ParticipantId::from(s)
}

pub fn t(color: Color, rank: Rank) -> Tile {
    Tile::new(color, rank)
}

pub fn hand(tiles: &[Tile]) -> Hand {
    tiles.iter().copied().map(HandItem::fresh).collect()
}

/// Game with hand-picked hands (seat order follows `players`) and draw pile.
/// Hints start at 8, errors at 0, first seat to act.
pub fn fixed_game(players: &[(&str, Vec<Tile>)], draw: &[Tile]) -> Game {
    let hands: Vec<Hand> = players.iter().map(|(_, tiles)| hand(tiles)).collect();
    Game {
        participants: players.iter().map(|(name, _)| id(name)).collect(),
        names: Names::default(),
        turn: PlayerId::new(0),
        draw_pile: draw.iter().copied().collect(),
        play_pile: Default::default(),
        discard_pile: Default::default(),
        hints: 8,
        errors: 0,
        hands: PlayerMap::new(players.len(), |p| hands[p.index()].clone()),
    }
}
