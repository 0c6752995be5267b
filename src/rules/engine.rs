//! Turn/action engine.
//!
//! Every operation takes the current state by reference and returns either
//! the next state plus one log line, or a `Rejection`. Nothing is mutated in
//! place, so a rejected action leaves the caller's state exactly as it was.
//!
//! Turn-gated actions (discard, play, hint) check the turn before any other
//! precondition.

use tracing::{debug, info};

use super::rejection::Rejection;
use crate::core::{
    Action, Game, GameRng, LogEntry, ParticipantId, PlayerId, PlayerMap, RoomState, RulesConfig,
    WaitingRoom,
};
use crate::hand::draw_tiles;
use crate::tiles::{generate_deck, hand_size, Color, Hint, Rank, Tile};

/// Next state produced by an applied action, with its log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S = RoomState> {
    pub state: S,
    pub log: LogEntry,
}

impl<S> Transition<S> {
    fn new(state: S, log: impl Into<String>) -> Self {
        Self {
            state,
            log: LogEntry::new(log),
        }
    }

    fn map<T>(self, f: impl FnOnce(S) -> T) -> Transition<T> {
        Transition {
            state: f(self.state),
            log: self.log,
        }
    }
}

/// Hanabi rules.
#[derive(Clone, Debug, Default)]
pub struct HanabiRules {
    config: RulesConfig,
}

impl HanabiRules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Apply a parsed action on behalf of `actor`.
    ///
    /// `rng` is only consumed by `Action::Start`.
    pub fn apply(
        &self,
        state: &RoomState,
        actor: &ParticipantId,
        action: &Action,
        rng: &mut GameRng,
    ) -> Result<Transition, Rejection> {
        let result = self.dispatch(state, actor, action, rng);

        match &result {
            Ok(transition) => info!(
                actor = %actor,
                action = action.verb(),
                log = %transition.log,
                "Action applied"
            ),
            Err(reason) => debug!(
                actor = %actor,
                action = action.verb(),
                reason = %reason,
                "Action rejected"
            ),
        }

        result
    }

    fn dispatch(
        &self,
        state: &RoomState,
        actor: &ParticipantId,
        action: &Action,
        rng: &mut GameRng,
    ) -> Result<Transition, Rejection> {
        if let RoomState::InProgress(game) = state {
            game.validate()?;
        }

        match (state, action) {
            (_, Action::Rename { name }) => self.rename(state, actor, name),
            (RoomState::Waiting(room), Action::Join) => {
                Ok(self.join(room, actor)?.map(RoomState::Waiting))
            }
            (RoomState::Waiting(room), Action::Start) => {
                Ok(self.start(room, rng)?.map(RoomState::InProgress))
            }
            (RoomState::Waiting(_), _) => Err(Rejection::NotStarted),
            (RoomState::InProgress(_), Action::Join | Action::Start) => {
                Err(Rejection::AlreadyStarted)
            }
            (RoomState::InProgress(game), Action::Discard { index }) => {
                Ok(self.discard(game, actor, *index)?.map(RoomState::InProgress))
            }
            (RoomState::InProgress(game), Action::Play { index }) => {
                Ok(self.play(game, actor, *index)?.map(RoomState::InProgress))
            }
            (RoomState::InProgress(game), Action::Hint { target, hint }) => {
                Ok(self.hint(game, actor, target, hint)?.map(RoomState::InProgress))
            }
        }
    }

    /// Add a participant to the waiting room.
    pub fn join(
        &self,
        room: &WaitingRoom,
        actor: &ParticipantId,
    ) -> Result<Transition<WaitingRoom>, Rejection> {
        let mut next = room.clone();
        next.join(actor.clone());
        let log = format!("{} joined", next.display_name(actor));
        Ok(Transition::new(next, log))
    }

    /// Deal a fresh deck and start the game.
    ///
    /// The first participant to have joined takes the first turn.
    pub fn start(
        &self,
        room: &WaitingRoom,
        rng: &mut GameRng,
    ) -> Result<Transition<Game>, Rejection> {
        let player_count = room.participants.len();
        let size = hand_size(player_count)?;

        let mut draw_pile = generate_deck(rng);
        let hands = PlayerMap::new(player_count, |_| draw_tiles(&mut draw_pile, size));

        let game = Game {
            participants: room.participants.clone(),
            names: room.names.clone(),
            turn: PlayerId::new(0),
            draw_pile,
            play_pile: Default::default(),
            discard_pile: Default::default(),
            hints: self.config.max_hints,
            errors: 0,
            hands,
        };

        Ok(Transition::new(game, "game has begun!"))
    }

    /// Discard a tile, regaining a hint token.
    pub fn discard(
        &self,
        game: &Game,
        actor: &ParticipantId,
        index: usize,
    ) -> Result<Transition<Game>, Rejection> {
        let (mut next, seat, tile) = take_tile(game, actor, index, "discard")?;

        next.discard_pile.push_back(tile);
        next.hints = self.config.refill_after_discard(next.hints);
        finish_turn(&mut next, seat);

        let log = format!("{} discarded {}", game.display_name(actor), tile);
        Ok(Transition::new(next, log))
    }

    /// Play a tile. An illegal play is accepted as a misplay: the tile is
    /// discarded and the error counter goes up.
    pub fn play(
        &self,
        game: &Game,
        actor: &ParticipantId,
        index: usize,
    ) -> Result<Transition<Game>, Rejection> {
        let (mut next, seat, tile) = take_tile(game, actor, index, "play")?;
        let name = game.display_name(actor);

        let log = if game.play_summary().allows(tile) {
            next.play_pile.push_back(tile);
            if tile.rank == Rank::Five {
                next.hints = self.config.refill_after_five(next.hints);
            }
            format!("{name} played {tile}")
        } else {
            debug!(actor = %actor, tile = %tile, "Misplay");
            next.discard_pile.push_back(tile);
            next.errors += 1;
            format!("{name} tried to play {tile}")
        };

        finish_turn(&mut next, seat);
        Ok(Transition::new(next, log))
    }

    /// Give a hint to the one other player whose name starts with
    /// `target_prefix` (case-insensitive).
    pub fn hint(
        &self,
        game: &Game,
        actor: &ParticipantId,
        target_prefix: &str,
        token: &str,
    ) -> Result<Transition<Game>, Rejection> {
        require_turn(game, actor)?;
        if game.hints == 0 {
            return Err(Rejection::NoHintsLeft);
        }
        let target = resolve_target(game, actor, target_prefix)?;
        let hint = Hint::parse(token).ok_or_else(|| Rejection::InvalidHint(token.to_string()))?;

        let mut next = game.clone();
        next.hints -= 1;
        next.hands[target].apply_hint(hint);
        next.advance_turn();

        let log = format!(
            "{} told {} about {}",
            game.display_name(actor),
            game.display_name(game.participant(target)),
            hint
        );
        Ok(Transition::new(next, log))
    }

    /// Set the actor's display name. Allowed at any time, by anyone.
    pub fn rename(
        &self,
        state: &RoomState,
        actor: &ParticipantId,
        name: &str,
    ) -> Result<Transition, Rejection> {
        if !name.chars().any(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Rejection::InvalidName(name.to_string()));
        }

        let log = format!("{} set name to {}", state.display_name(actor), name);
        let mut next = state.clone();
        let names = match &mut next {
            RoomState::Waiting(room) => &mut room.names,
            RoomState::InProgress(game) => &mut game.names,
        };
        names.insert(actor.clone(), name.to_string());

        Ok(Transition::new(next, log))
    }

    /// Every turn-gated action the current player could take right now.
    ///
    /// Hints are listed once per other player and per color/rank token,
    /// addressed by full display name.
    #[must_use]
    pub fn legal_actions(&self, game: &Game) -> Vec<Action> {
        let hand = game.hand(game.turn);
        let mut actions = Vec::new();

        for (index, item) in hand.iter().enumerate() {
            if item.tile().is_some() {
                actions.push(Action::Discard { index });
                actions.push(Action::Play { index });
            }
        }

        if game.hints > 0 {
            let tokens: Vec<Hint> = Color::ALL
                .into_iter()
                .map(Hint::Color)
                .chain(Rank::ALL.into_iter().map(Hint::Rank))
                .collect();
            let actor = game.current_participant();
            for other in game.participants.iter().filter(|p| *p != actor) {
                if resolve_target(game, actor, game.display_name(other)).is_err() {
                    continue;
                }
                for hint in &tokens {
                    actions.push(Action::hint(game.display_name(other), hint.to_string()));
                }
            }
        }

        actions
    }
}

fn require_turn(game: &Game, actor: &ParticipantId) -> Result<PlayerId, Rejection> {
    if game.is_turn_of(actor) {
        Ok(game.turn)
    } else {
        Err(Rejection::NotYourTurn)
    }
}

/// Turn check, then lift the tile at `index` out of the actor's hand.
fn take_tile(
    game: &Game,
    actor: &ParticipantId,
    index: usize,
    verb: &'static str,
) -> Result<(Game, PlayerId, Tile), Rejection> {
    let seat = require_turn(game, actor)?;
    let tile = game
        .hand(seat)
        .tile_at(index)
        .ok_or(Rejection::NoTileAt { verb, index })?;

    let mut next = game.clone();
    next.hands[seat].remove(index);
    Ok((next, seat, tile))
}

/// Replacement draw (if any tiles remain), then pass the turn.
fn finish_turn(next: &mut Game, seat: PlayerId) {
    if let Some(tile) = next.draw_pile.pop_front() {
        next.hands[seat].push_tile(tile);
    }
    next.advance_turn();
}

fn resolve_target(game: &Game, actor: &ParticipantId, prefix: &str) -> Result<PlayerId, Rejection> {
    let prefix_lower = prefix.to_lowercase();
    let matches: Vec<PlayerId> = game
        .participants
        .iter()
        .enumerate()
        .filter(|(_, p)| *p != actor)
        .filter(|(_, p)| game.display_name(p).to_lowercase().starts_with(&prefix_lower))
        .map(|(i, _)| PlayerId::new(i as u8))
        .collect();

    match matches.as_slice() {
        [] => Err(Rejection::NoMatchingPlayer(prefix.to_string())),
        [seat] => Ok(*seat),
        _ => Err(Rejection::AmbiguousPlayer {
            prefix: prefix.to_string(),
            matches: matches.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Names;
    use crate::hand::{Hand, HandItem};
    use im::Vector;

    fn id(s: &str) -> ParticipantId {
        ParticipantId::from(s)
    }

    fn t(color: Color, rank: Rank) -> Tile {
        Tile::new(color, rank)
    }

    fn hand(tiles: &[Tile]) -> Hand {
        tiles.iter().copied().map(HandItem::fresh).collect()
    }

    /// Two-seat game with hand-picked tiles.
    fn fixed_game(a: &[Tile], b: &[Tile], draw: &[Tile]) -> Game {
        let hands = vec![hand(a), hand(b)];
        Game {
            participants: vec![id("alice"), id("bob")],
            names: Names::default(),
            turn: PlayerId::new(0),
            draw_pile: draw.iter().copied().collect(),
            play_pile: Vector::new(),
            discard_pile: Vector::new(),
            hints: 8,
            errors: 0,
            hands: PlayerMap::new(2, |p| hands[p.index()].clone()),
        }
    }

    #[test]
    fn test_start_deals_hands() {
        let rules = HanabiRules::default();
        let room = WaitingRoom::with_participants([id("a"), id("b"), id("c")]);

        let game = rules.start(&room, &mut GameRng::new(1)).unwrap().state;

        assert_eq!(game.draw_pile.len(), 60 - 15);
        for (_, h) in game.hands.iter() {
            assert_eq!(h.len(), 5);
        }
        assert_eq!(game.hints, 8);
        assert_eq!(game.errors, 0);
        assert_eq!(game.turn, PlayerId::new(0));
        assert_eq!(game.tile_count(), 60);
    }

    #[test]
    fn test_start_rejects_bad_player_count() {
        let rules = HanabiRules::default();
        let room = WaitingRoom::with_participants([id("solo")]);
        assert_eq!(
            rules.start(&room, &mut GameRng::new(1)),
            Err(Rejection::UnsupportedPlayerCount(1))
        );
    }

    #[test]
    fn test_discard_refills_hint_and_draws() {
        let rules = HanabiRules::default();
        let mut game = fixed_game(
            &[t(Color::Red, Rank::One), t(Color::Blue, Rank::Two)],
            &[t(Color::Green, Rank::One)],
            &[t(Color::White, Rank::Four)],
        );
        game.hints = 5;

        let Transition { state, log } = rules.discard(&game, &id("alice"), 0).unwrap();

        assert_eq!(state.hints, 6);
        assert_eq!(state.discard_pile, Vector::unit(t(Color::Red, Rank::One)));
        assert_eq!(
            state.hand(PlayerId::new(0)).tiles().collect::<Vec<_>>(),
            vec![t(Color::Blue, Rank::Two), t(Color::White, Rank::Four)]
        );
        assert!(state.draw_pile.is_empty());
        assert_eq!(state.turn, PlayerId::new(1));
        assert_eq!(log.text, "alice discarded R1");
    }

    #[test]
    fn test_discard_marker_slot_rejected() {
        let rules = HanabiRules::default();
        let mut game = fixed_game(&[t(Color::Red, Rank::One)], &[], &[]);
        game.hands[PlayerId::new(0)].apply_hint(Hint::Color(Color::Red));

        assert_eq!(
            rules.discard(&game, &id("alice"), 1),
            Err(Rejection::NoTileAt { verb: "discard", index: 1 })
        );
        assert_eq!(
            rules.play(&game, &id("alice"), 7),
            Err(Rejection::NoTileAt { verb: "play", index: 7 })
        );
    }

    #[test]
    fn test_play_five_refills_uncapped() {
        let rules = HanabiRules::default();
        let mut game = fixed_game(&[t(Color::Red, Rank::Five)], &[], &[]);
        game.play_pile = Rank::ALL[..4].iter().map(|&r| t(Color::Red, r)).collect();

        let next = rules.play(&game, &id("alice"), 0).unwrap().state;
        assert_eq!(next.hints, 9);
        assert_eq!(next.play_summary().highest(Color::Red), 5);

        let capped = HanabiRules::new(RulesConfig::new().capped_rank_five_refill());
        assert_eq!(capped.play(&game, &id("alice"), 0).unwrap().state.hints, 8);
    }

    #[test]
    fn test_play_with_empty_draw_pile_still_removes_tile() {
        let rules = HanabiRules::default();
        let game = fixed_game(
            &[t(Color::Red, Rank::One), t(Color::Red, Rank::Three)],
            &[],
            &[],
        );

        let next = rules.play(&game, &id("alice"), 1).unwrap().state;

        assert_eq!(next.hand(PlayerId::new(0)).len(), 1);
        assert_eq!(next.errors, 1);
        assert_eq!(next.tile_count(), game.tile_count());
    }

    #[test]
    fn test_hint_applies_to_target() {
        let rules = HanabiRules::default();
        let game = fixed_game(
            &[t(Color::Red, Rank::One)],
            &[t(Color::Red, Rank::Two), t(Color::Blue, Rank::Two)],
            &[],
        );

        let Transition { state, log } = rules.hint(&game, &id("alice"), "BO", "r").unwrap();

        assert_eq!(state.hints, 7);
        assert_eq!(state.turn, PlayerId::new(1));
        let bob = state.hand(PlayerId::new(1));
        assert_eq!(bob.get(0).unwrap().hints(), &[Hint::Color(Color::Red)]);
        assert!(bob.get(1).unwrap().hints().is_empty());
        assert_eq!(bob.get(2), Some(&HandItem::Marker(Hint::Color(Color::Red))));
        assert_eq!(state.hand(PlayerId::new(0)), game.hand(PlayerId::new(0)));
        assert_eq!(log.text, "alice told bob about R");
    }

    #[test]
    fn test_hint_never_targets_self() {
        let rules = HanabiRules::default();
        let game = fixed_game(&[], &[], &[]);
        assert_eq!(
            rules.hint(&game, &id("alice"), "ali", "1"),
            Err(Rejection::NoMatchingPlayer("ali".to_string()))
        );
    }

    #[test]
    fn test_hint_precondition_order() {
        let rules = HanabiRules::default();
        let mut game = fixed_game(&[], &[], &[]);

        assert_eq!(
            rules.hint(&game, &id("bob"), "zzz", "Q"),
            Err(Rejection::NotYourTurn)
        );
        assert_eq!(
            rules.hint(&game, &id("alice"), "bob", "Q"),
            Err(Rejection::InvalidHint("Q".to_string()))
        );

        game.hints = 0;
        assert_eq!(
            rules.hint(&game, &id("alice"), "zzz", "Q"),
            Err(Rejection::NoHintsLeft)
        );
    }

    #[test]
    fn test_rename_validation() {
        let rules = HanabiRules::default();
        let state = RoomState::default();

        assert_eq!(
            rules.rename(&state, &id("a"), "!!!"),
            Err(Rejection::InvalidName("!!!".to_string()))
        );

        let Transition { state, log } = rules.rename(&state, &id("a"), "Ann").unwrap();
        assert_eq!(state.display_name(&id("a")), "Ann");
        assert_eq!(log.text, "a set name to Ann");
    }

    #[test]
    fn test_rename_needs_ascii_word_character() {
        let rules = HanabiRules::default();
        let state = RoomState::Waiting(WaitingRoom::with_participants([id("a")]));

        assert_eq!(
            rules.rename(&state, &id("a"), "é").map(|t| t.log),
            Err(Rejection::InvalidName("é".to_string()))
        );
        assert!(rules.rename(&state, &id("a"), "_").is_ok());
        assert!(rules.rename(&state, &id("a"), "José").is_ok());
    }

    #[test]
    fn test_legal_actions() {
        let rules = HanabiRules::default();
        let mut game = fixed_game(
            &[t(Color::Red, Rank::One), t(Color::Blue, Rank::One)],
            &[t(Color::Green, Rank::One)],
            &[],
        );

        let actions = rules.legal_actions(&game);
        assert_eq!(actions.len(), 4 + 11);
        assert!(actions.contains(&Action::Play { index: 1 }));
        assert!(actions.contains(&Action::hint("bob", "5")));

        game.hints = 0;
        assert_eq!(rules.legal_actions(&game).len(), 4);
    }

    #[test]
    fn test_apply_dispatch_by_lifecycle() {
        let rules = HanabiRules::default();
        let mut rng = GameRng::new(3);
        let waiting = RoomState::Waiting(WaitingRoom::with_participants([id("a"), id("b")]));

        assert_eq!(
            rules.apply(&waiting, &id("a"), &Action::Play { index: 0 }, &mut rng),
            Err(Rejection::NotStarted)
        );

        let started = rules.apply(&waiting, &id("a"), &Action::Start, &mut rng).unwrap();
        assert!(started.state.is_started());

        assert_eq!(
            rules.apply(&started.state, &id("a"), &Action::Start, &mut rng),
            Err(Rejection::AlreadyStarted)
        );
        assert_eq!(
            rules.apply(&started.state, &id("c"), &Action::Join, &mut rng),
            Err(Rejection::AlreadyStarted)
        );
    }
}
