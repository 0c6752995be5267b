//! The room document: a waiting room before start, a game afterwards.
//!
//! ## WaitingRoom
//!
//! Participants who have joined, plus their display names.
//!
//! ## Game
//!
//! Complete game state:
//! - Seat order and display names
//! - Current turn
//! - Draw, play and discard piles
//! - Hint and error counters
//! - One hand per seat
//!
//! Piles and hands use `im` persistent vectors, so producing the next state
//! from a clone of the current one is cheap.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::{ParticipantId, PlayerId, PlayerMap};
use crate::hand::Hand;
use crate::rules::{PileSummary, Rejection};
use crate::tiles::{hand_size, Tile};

/// Display names keyed by participant.
pub type Names = FxHashMap<ParticipantId, String>;

fn lookup_name<'a>(names: &'a Names, id: &'a ParticipantId) -> &'a str {
    names.get(id).map_or(id.as_str(), String::as_str)
}

/// The persisted room document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomState {
    /// Gathering participants; no tiles dealt yet.
    Waiting(WaitingRoom),
    /// A started game.
    InProgress(Game),
}

impl Default for RoomState {
    fn default() -> Self {
        RoomState::Waiting(WaitingRoom::new())
    }
}

impl RoomState {
    /// Participants in join order (waiting) or seat order (in progress).
    #[must_use]
    pub fn participants(&self) -> &[ParticipantId] {
        match self {
            RoomState::Waiting(room) => &room.participants,
            RoomState::InProgress(game) => &game.participants,
        }
    }

    #[must_use]
    pub fn names(&self) -> &Names {
        match self {
            RoomState::Waiting(room) => &room.names,
            RoomState::InProgress(game) => &game.names,
        }
    }

    /// Display name, falling back to the raw identifier.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        lookup_name(self.names(), id)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, RoomState::InProgress(_))
    }

    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        match self {
            RoomState::Waiting(_) => None,
            RoomState::InProgress(game) => Some(game),
        }
    }
}

/// Participants gathered before the game starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingRoom {
    pub participants: Vec<ParticipantId>,
    pub names: Names,
}

impl WaitingRoom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waiting room with the given participants in order, duplicates dropped.
    pub fn with_participants(ids: impl IntoIterator<Item = ParticipantId>) -> Self {
        let mut room = Self::new();
        for id in ids {
            room.join(id);
        }
        room
    }

    /// Add a participant. Returns false if they were already present.
    pub fn join(&mut self, id: ParticipantId) -> bool {
        if self.participants.contains(&id) {
            return false;
        }
        self.participants.push(id);
        true
    }

    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        lookup_name(&self.names, id)
    }
}

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Participants in seat order. Fixed once the game starts.
    pub participants: Vec<ParticipantId>,

    pub names: Names,

    /// Seat whose turn it is.
    pub turn: PlayerId,

    /// Undealt tiles; the front is the top.
    pub draw_pile: Vector<Tile>,

    /// Successfully played tiles, in play order.
    pub play_pile: Vector<Tile>,

    /// Discarded and misplayed tiles.
    pub discard_pile: Vector<Tile>,

    /// Hint tokens remaining.
    pub hints: u8,

    /// Misplays so far.
    pub errors: u32,

    /// One hand per seat.
    pub hands: PlayerMap<Hand>,
}

impl Game {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.participants.len()
    }

    /// Seat held by a participant.
    #[must_use]
    pub fn seat_of(&self, id: &ParticipantId) -> Option<PlayerId> {
        self.participants
            .iter()
            .position(|p| p == id)
            .map(|i| PlayerId::new(i as u8))
    }

    #[must_use]
    pub fn participant(&self, seat: PlayerId) -> &ParticipantId {
        &self.participants[seat.index()]
    }

    /// Participant whose turn it is.
    #[must_use]
    pub fn current_participant(&self) -> &ParticipantId {
        self.participant(self.turn)
    }

    /// Is it this participant's turn?
    #[must_use]
    pub fn is_turn_of(&self, id: &ParticipantId) -> bool {
        self.current_participant() == id
    }

    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        lookup_name(&self.names, id)
    }

    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &Hand {
        &self.hands[seat]
    }

    /// Hand of a participant, if they hold a seat.
    #[must_use]
    pub fn hand_of(&self, id: &ParticipantId) -> Option<&Hand> {
        self.seat_of(id).map(|seat| self.hand(seat))
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.next(self.player_count());
    }

    /// Highest played rank per color.
    #[must_use]
    pub fn play_summary(&self) -> PileSummary {
        PileSummary::from_pile(self.play_pile.iter())
    }

    /// Tiles across all piles and hands. Always the full deck size.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(|(_, h)| h.tile_count()).sum();
        self.draw_pile.len() + self.play_pile.len() + self.discard_pile.len() + in_hands
    }

    /// Check the seating invariants every seat lookup relies on: a supported
    /// player count, distinct participants, one hand per seat, and a turn
    /// that names a seat.
    pub fn validate(&self) -> Result<(), Rejection> {
        let count = self.player_count();
        if hand_size(count).is_err() {
            return Err(Rejection::CorruptGame(format!("{count} participants")));
        }
        if let Some((_, dup)) = self
            .participants
            .iter()
            .enumerate()
            .find(|&(i, p)| self.participants[..i].contains(p))
        {
            return Err(Rejection::CorruptGame(format!("{dup} is seated twice")));
        }
        if self.hands.player_count() != count {
            return Err(Rejection::CorruptGame(format!(
                "{} hands for {count} participants",
                self.hands.player_count()
            )));
        }
        if self.turn.index() >= count {
            return Err(Rejection::CorruptGame(format!("turn is {}", self.turn)));
        }
        Ok(())
    }
}
