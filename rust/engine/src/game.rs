use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::builder::PlayerBuilder;
use crate::cards::Card;
use crate::deck::{Deck, DeckBuilder};
use crate::errors::GameError;
use crate::events::EventHandler;
use crate::guess::Guess;
use crate::player::{GuessContext, Player, Seat};
use crate::solution::CrimeSolution;

/// Where a [`GameState`] is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Finished,
    /// A turn failed; the game accepts no further turns.
    Failed,
}

/// Public facts about a seated player, safe to show to anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub seat: Seat,
    pub name: String,
    pub character: Option<String>,
    pub strategy: String,
}

/// The turn engine for one game.
///
/// Owns the seating order and the guess history. [`GameState::setup`] runs
/// once; afterwards the caller invokes [`GameState::execute_turn`] until it
/// returns `false`. The engine never loops on its own.
pub struct GameState<'a> {
    /// Current turn number, starting at 0
    turns: u32,
    guesses: Vec<Guess>,
    cards: Vec<Card>,
    players: Vec<Box<dyn Player + 'a>>,
    solution: Option<CrimeSolution>,
    /// Index of the acting seat
    current: usize,
    phase: Phase,
    winner: Option<Seat>,
}

impl Default for GameState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GameState<'a> {
    pub fn new() -> Self {
        Self {
            turns: 0,
            guesses: Vec::new(),
            cards: Vec::new(),
            players: Vec::new(),
            solution: None,
            current: 0,
            phase: Phase::Uninitialized,
            winner: None,
        }
    }

    /// Builds the deck and players and readies the game.
    ///
    /// Fails with [`GameError::AlreadySetup`] on a second call, leaving the
    /// existing game untouched.
    pub fn setup<R: Rng + ?Sized>(
        &mut self,
        player_count: usize,
        deck_builder: &DeckBuilder,
        player_builder: &mut PlayerBuilder<'a>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Uninitialized {
            return Err(GameError::AlreadySetup);
        }
        let deck = deck_builder.build(rng)?;
        let players = player_builder.build(player_count, &deck.player_cards, rng)?;
        self.setup_with(deck, players)
    }

    /// Readies the game from an already built deck and seated players.
    ///
    /// `players[i]` must sit at seat `i` and be ready.
    pub fn setup_with(
        &mut self,
        deck: Deck,
        players: Vec<Box<dyn Player + 'a>>,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Uninitialized {
            return Err(GameError::AlreadySetup);
        }
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        for (i, player) in players.iter().enumerate() {
            if player.seat() != Seat(i) {
                return Err(GameError::SeatMismatch {
                    expected: Seat(i),
                    actual: player.seat(),
                });
            }
            if !player.is_ready() {
                return Err(GameError::PlayerIncomplete(player.seat()));
            }
        }

        self.cards = deck.cards;
        self.solution = Some(deck.solution);
        self.players = players;
        self.turns = 0;
        self.current = 0;
        self.phase = Phase::Ready;
        debug!(players = self.players.len(), "game ready");
        Ok(())
    }

    /// Plays one full turn. Returns whether another turn follows.
    ///
    /// Any error ends the game: the phase becomes [`Phase::Failed`] and later
    /// calls fail with [`GameError::GameAborted`].
    pub fn execute_turn(&mut self, events: &mut dyn EventHandler) -> Result<bool, GameError> {
        match self.phase {
            Phase::Uninitialized => return Err(GameError::NotReady),
            Phase::Finished => return Err(GameError::GameFinished),
            Phase::Failed => return Err(GameError::GameAborted),
            Phase::Ready => {}
        }

        let result = self.play_turn(events);
        if let Err(e) = &result {
            warn!(turn = self.turns, error = %e, "turn failed, game aborted");
            self.phase = Phase::Failed;
        }
        result
    }

    fn play_turn(&mut self, events: &mut dyn EventHandler) -> Result<bool, GameError> {
        if self.turns == 0 {
            info!(players = self.players.len(), "game started");
            events.on_game_start();
        }
        events.on_new_turn(self.turns);

        let seat = Seat(self.current);
        events.on_player_selected(self.players[self.current].as_ref());

        self.make_guess(seat)?;
        if let Some(guess) = self.guesses.last() {
            events.on_guess_made(guess);
        }

        if self.resolve_guess(seat, events)?.is_none() {
            self.check_solution(seat, events)?;
        }

        if self.phase == Phase::Finished {
            events.on_game_end(self.turns);
            return Ok(false);
        }
        self.current = seat.next(self.players.len()).index();
        events.on_turn_end(self.turns);
        self.turns += 1;
        Ok(true)
    }

    fn make_guess(&mut self, seat: Seat) -> Result<(), GameError> {
        let ctx = GuessContext {
            turn: self.turns,
            next_seat: seat.next(self.players.len()),
            cards: &self.cards,
            history: &self.guesses,
        };
        let guess = self.players[seat.index()].make_guess(&ctx)?;

        if guess.turn() != self.turns {
            return Err(GameError::TurnMismatch {
                seat,
                expected: self.turns,
                actual: guess.turn(),
            });
        }
        if guess.guesser() != seat {
            return Err(GameError::GuesserMismatch {
                seat,
                guesser: guess.guesser(),
            });
        }

        debug!(turn = self.turns, seat = %seat, "guess {}", guess);
        self.guesses.push(guess);
        Ok(())
    }

    /// Asks each seat after the guesser, wrapping around to the guesser last.
    /// The first match answers; a responder other than the guesser privately
    /// shows one card.
    fn resolve_guess(
        &mut self,
        seat: Seat,
        events: &mut dyn EventHandler,
    ) -> Result<Option<Seat>, GameError> {
        let last = self.guesses.len() - 1;
        let Some(responder) = self.find_responder(&self.guesses[last]) else {
            debug!(turn = self.turns, "no player matched");
            return Ok(None);
        };
        self.guesses[last].set_responder(responder)?;

        let guess = &self.guesses[last];
        let shown = if responder != seat {
            let card = self.players[responder.index()].show_matched_card(guess)?;
            if !guess.contains(&card) || !self.players[responder.index()].core().owns(&card) {
                return Err(GameError::InvalidReveal {
                    seat: responder,
                    card: card.name().to_string(),
                });
            }
            self.players[seat.index()].read_matched_card(guess, &card)?;
            Some(card)
        } else {
            None
        };

        debug!(turn = self.turns, responder = %responder, "guess matched");
        events.on_guess_matched(guess, shown.as_ref());
        Ok(Some(responder))
    }

    fn check_solution(&mut self, seat: Seat, events: &mut dyn EventHandler) -> Result<(), GameError> {
        let guess = &self.guesses[self.guesses.len() - 1];
        let solution = self.solution.as_ref().ok_or(GameError::NotReady)?;
        if !solution.matches_guess(guess) {
            return Err(GameError::UnmatchedGuess { turn: self.turns });
        }

        info!(turn = self.turns, seat = %seat, "case solved");
        events.on_guess_is_solution(guess);
        self.phase = Phase::Finished;
        self.winner = Some(seat);
        Ok(())
    }

    /// First seat after the guesser, in seating order, whose hand intersects
    /// the guess. The guesser is asked last.
    pub fn find_responder(&self, guess: &Guess) -> Option<Seat> {
        let count = self.players.len();
        let from = guess.guesser().index();
        (1..=count)
            .map(|offset| (from + offset) % count)
            .find(|&i| self.players[i].matches_guess(guess))
            .map(Seat)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn has_next_turn(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Current turn number.
    pub fn turn(&self) -> u32 {
        self.turns
    }

    /// Turns played so far, including one in which the game was solved.
    pub fn turns_played(&self) -> usize {
        self.guesses.len()
    }

    pub fn current_seat(&self) -> Seat {
        Seat(self.current)
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn players(&self) -> &[Box<dyn Player + 'a>] {
        &self.players
    }

    pub fn solution(&self) -> Option<&CrimeSolution> {
        self.solution.as_ref()
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn roster(&self) -> Vec<PlayerInfo> {
        self.players
            .iter()
            .map(|p| PlayerInfo {
                seat: p.seat(),
                name: p.name().to_string(),
                character: p.character().map(str::to_string),
                strategy: p.strategy().to_string(),
            })
            .collect()
    }
}
