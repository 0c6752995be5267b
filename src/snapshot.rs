//! Compact binary encoding of the room document.
//!
//! The persistence collaborator may store `RoomState` however it likes; this
//! is the encoding used when it wants bytes.

use thiserror::Error;

use crate::core::RoomState;
use crate::rules::Rejection;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode room state: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode room state: {0}")]
    Decode(#[source] bincode::Error),
    #[error("decoded room state is unusable: {0}")]
    Invalid(#[source] Rejection),
}

/// Encode a room document.
pub fn encode(state: &RoomState) -> Result<Vec<u8>, SnapshotError> {
    bincode::serialize(state).map_err(SnapshotError::Encode)
}

/// Decode a room document produced by `encode`.
///
/// A started game must also pass `Game::validate`, so a document that
/// decodes cleanly but names a missing seat is refused here rather than
/// reaching the engine.
pub fn decode(bytes: &[u8]) -> Result<RoomState, SnapshotError> {
    let state: RoomState = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
    if let RoomState::InProgress(game) = &state {
        game.validate().map_err(SnapshotError::Invalid)?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameRng, ParticipantId, PlayerId, WaitingRoom};
    use crate::rules::HanabiRules;

    #[test]
    fn test_started_game_survives_encoding() {
        let rules = HanabiRules::default();
        let mut rng = GameRng::new(21);
        let a = ParticipantId::from("a");
        let waiting = RoomState::Waiting(WaitingRoom::with_participants([
            a.clone(),
            ParticipantId::from("b"),
        ]));

        let started = rules.apply(&waiting, &a, &Action::Start, &mut rng).unwrap().state;
        let hinted = rules
            .apply(&started, &a, &Action::hint("b", "1"), &mut rng)
            .unwrap()
            .state;

        let bytes = encode(&hinted).unwrap();
        assert_eq!(decode(&bytes).unwrap(), hinted);
    }

    fn started_pair() -> RoomState {
        let a = ParticipantId::from("a");
        let waiting = RoomState::Waiting(WaitingRoom::with_participants([
            a.clone(),
            ParticipantId::from("b"),
        ]));
        HanabiRules::default()
            .apply(&waiting, &a, &Action::Start, &mut GameRng::new(3))
            .unwrap()
            .state
    }

    #[test]
    fn test_out_of_range_turn_is_refused() {
        let RoomState::InProgress(mut game) = started_pair() else {
            panic!("expected a started game");
        };
        game.turn = PlayerId::new(7);

        let bytes = encode(&RoomState::InProgress(game.clone())).unwrap();
        assert!(matches!(
            decode(&bytes),
            Err(SnapshotError::Invalid(Rejection::CorruptGame(_)))
        ));

        // A document handed straight to the engine is refused, not indexed.
        let rejected = HanabiRules::default().apply(
            &RoomState::InProgress(game),
            &ParticipantId::from("a"),
            &Action::Discard { index: 0 },
            &mut GameRng::new(0),
        );
        assert!(matches!(rejected, Err(Rejection::CorruptGame(_))));
    }

    #[test]
    fn test_hand_count_mismatch_is_refused() {
        let RoomState::InProgress(mut game) = started_pair() else {
            panic!("expected a started game");
        };
        game.participants.push(ParticipantId::from("c"));

        let bytes = encode(&RoomState::InProgress(game)).unwrap();
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().starts_with("decoded room state is unusable"));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = decode(&[0xff, 0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode room state"));
    }
}
