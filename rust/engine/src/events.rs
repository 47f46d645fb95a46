//! Lifecycle notifications emitted by [`crate::game::GameState`].
//!
//! The engine calls the handler in a fixed order each turn:
//!
//! 1. `on_game_start` (first turn only), `on_new_turn`
//! 2. `on_player_selected`
//! 3. `on_guess_made`
//! 4. `on_guess_matched` if any seat matched
//! 5. `on_guess_is_solution` if none did
//! 6. `on_turn_end`, or `on_game_end` once solved
//!
//! Handlers only observe; nothing they do feeds back into the game.

use serde::Serialize;
use tracing::{debug, info};

use crate::cards::Card;
use crate::guess::Guess;
use crate::player::{Player, Seat};

pub trait EventHandler {
    fn on_game_start(&mut self) {}

    fn on_game_end(&mut self, _turn: u32) {}

    fn on_player_selected(&mut self, _player: &dyn Player) {}

    fn on_new_turn(&mut self, _turn: u32) {}

    fn on_turn_end(&mut self, _turn: u32) {}

    fn on_guess_made(&mut self, _guess: &Guess) {}

    /// `shown` is `None` when the guesser matched their own hand.
    fn on_guess_matched(&mut self, _guess: &Guess, _shown: Option<&Card>) {}

    fn on_guess_is_solution(&mut self, _guess: &Guess) {}
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventHandler;

impl EventHandler for NullEventHandler {}

/// A notification as data, for recording and replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStart,
    GameEnd {
        turn: u32,
    },
    NewTurn {
        turn: u32,
    },
    PlayerSelected {
        seat: Seat,
    },
    GuessMade {
        turn: u32,
        guesser: Seat,
    },
    GuessMatched {
        turn: u32,
        responder: Option<Seat>,
        shown: Option<Card>,
    },
    GuessIsSolution {
        turn: u32,
        guesser: Seat,
    },
    TurnEnd {
        turn: u32,
    },
}

/// Records every notification in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

impl EventHandler for EventLog {
    fn on_game_start(&mut self) {
        self.events.push(GameEvent::GameStart);
    }

    fn on_game_end(&mut self, turn: u32) {
        self.events.push(GameEvent::GameEnd { turn });
    }

    fn on_player_selected(&mut self, player: &dyn Player) {
        self.events.push(GameEvent::PlayerSelected {
            seat: player.seat(),
        });
    }

    fn on_new_turn(&mut self, turn: u32) {
        self.events.push(GameEvent::NewTurn { turn });
    }

    fn on_turn_end(&mut self, turn: u32) {
        self.events.push(GameEvent::TurnEnd { turn });
    }

    fn on_guess_made(&mut self, guess: &Guess) {
        self.events.push(GameEvent::GuessMade {
            turn: guess.turn(),
            guesser: guess.guesser(),
        });
    }

    fn on_guess_matched(&mut self, guess: &Guess, shown: Option<&Card>) {
        self.events.push(GameEvent::GuessMatched {
            turn: guess.turn(),
            responder: guess.responder(),
            shown: shown.cloned(),
        });
    }

    fn on_guess_is_solution(&mut self, guess: &Guess) {
        self.events.push(GameEvent::GuessIsSolution {
            turn: guess.turn(),
            guesser: guess.guesser(),
        });
    }
}

/// Forwards notifications to `tracing`.
///
/// Revealed cards are logged at debug level only, since they are private to
/// the guesser.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventHandler;

impl EventHandler for TracingEventHandler {
    fn on_game_start(&mut self) {
        info!("game started");
    }

    fn on_game_end(&mut self, turn: u32) {
        info!(turn, "game over");
    }

    fn on_player_selected(&mut self, player: &dyn Player) {
        debug!(seat = %player.seat(), name = player.name(), "player selected");
    }

    fn on_new_turn(&mut self, turn: u32) {
        debug!(turn, "turn started");
    }

    fn on_turn_end(&mut self, turn: u32) {
        debug!(turn, "turn ended");
    }

    fn on_guess_made(&mut self, guess: &Guess) {
        info!(turn = guess.turn(), guesser = %guess.guesser(), "guess {}", guess);
    }

    fn on_guess_matched(&mut self, guess: &Guess, shown: Option<&Card>) {
        match guess.responder() {
            Some(responder) if responder != guess.guesser() => {
                info!(turn = guess.turn(), responder = %responder, "guess answered");
                if let Some(card) = shown {
                    debug!(turn = guess.turn(), card = card.name(), "card shown");
                }
            }
            _ => info!(turn = guess.turn(), "guess answered by the guesser"),
        }
    }

    fn on_guess_is_solution(&mut self, guess: &Guess) {
        info!(turn = guess.turn(), guesser = %guess.guesser(), "case solved: {}", guess);
    }
}
