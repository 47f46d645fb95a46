use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::errors::GameError;
use crate::guess::Guess;

/// A player's place in the fixed seating order.
/// Seats double as player references: two references are the same player iff
/// they name the same seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Seat(pub usize);

impl Seat {
    pub fn index(self) -> usize {
        self.0
    }

    /// The seat after this one around a table of `count` players.
    pub fn next(self, count: usize) -> Seat {
        Seat((self.0 + 1) % count)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Hand and memory shared by every strategy.
///
/// Mutable (character, cards) until [`PlayerCore::set_ready`]; afterwards only
/// the seen-card memory grows.
#[derive(Debug, Clone)]
pub struct PlayerCore {
    seat: Seat,
    name: String,
    character: Option<String>,
    cards: Vec<Card>,
    /// Card -> the seat known to hold it (own cards map to our own seat)
    seen: HashMap<Card, Seat>,
    ready: bool,
}

impl PlayerCore {
    pub fn new(seat: Seat) -> Self {
        Self::with_name(seat, seat.to_string())
    }

    pub fn with_name(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            character: None,
            cards: Vec::new(),
            seen: HashMap::new(),
            ready: false,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn character(&self) -> Option<&str> {
        self.character.as_deref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn seen_cards(&self) -> &HashMap<Card, Seat> {
        &self.seen
    }

    pub fn has_seen(&self, card: &Card) -> bool {
        self.seen.contains_key(card)
    }

    pub fn owns(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn set_character(&mut self, character: impl Into<String>) -> Result<(), GameError> {
        if self.ready {
            return Err(GameError::PlayerAlreadyReady(self.seat));
        }
        if self.character.is_some() {
            return Err(GameError::CharacterAlreadySet(self.seat));
        }
        self.character = Some(character.into());
        Ok(())
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        if self.ready {
            return Err(GameError::PlayerAlreadyReady(self.seat));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Locks the hand and seeds the seen-card memory with it.
    pub fn set_ready(&mut self) -> Result<(), GameError> {
        if self.ready {
            return Err(GameError::PlayerAlreadyReady(self.seat));
        }
        if self.character.is_none() || self.cards.is_empty() {
            return Err(GameError::PlayerIncomplete(self.seat));
        }
        for card in &self.cards {
            self.seen.insert(card.clone(), self.seat);
        }
        self.ready = true;
        Ok(())
    }

    /// Cards in hand that appear in the guess, in hand order.
    pub fn matched_cards(&self, guess: &Guess) -> Vec<&Card> {
        self.cards.iter().filter(|c| guess.contains(c)).collect()
    }

    pub fn matches_guess(&self, guess: &Guess) -> bool {
        self.cards.iter().any(|c| guess.contains(c))
    }

    /// Cards of `kind` from `cards` that this player has neither held nor been shown.
    pub fn unseen<'a>(
        &'a self,
        cards: &'a [Card],
        kind: CardType,
    ) -> impl Iterator<Item = &'a Card> + 'a {
        cards
            .iter()
            .filter(move |c| c.kind() == kind && !self.seen.contains_key(*c))
    }

    pub fn record_seen(&mut self, guess: &Guess, card: &Card) -> Result<(), GameError> {
        let responder = guess
            .responder()
            .ok_or(GameError::NoResponder { turn: guess.turn() })?;
        self.seen.insert(card.clone(), responder);
        Ok(())
    }
}

/// What the engine hands a player when asking for a guess.
#[derive(Debug, Clone, Copy)]
pub struct GuessContext<'a> {
    /// Turn number the guess must carry
    pub turn: u32,
    /// Seat that resolves the guess first
    pub next_seat: Seat,
    /// The full deck, solution included
    pub cards: &'a [Card],
    /// Every earlier guess, oldest first
    pub history: &'a [Guess],
}

/// A seat's decision-maker.
///
/// Implementations embed a [`PlayerCore`] and supply the two decisions that
/// differ between strategies. The engine only ever holds `Box<dyn Player>`.
pub trait Player {
    fn core(&self) -> &PlayerCore;

    fn core_mut(&mut self) -> &mut PlayerCore;

    /// Short identifier of the strategy, e.g. `"random"`.
    fn strategy(&self) -> &'static str;

    /// Produce this turn's guess. It must carry `ctx.turn` and our seat.
    fn make_guess(&mut self, ctx: &GuessContext<'_>) -> Result<Guess, GameError>;

    /// Pick exactly one card from our hand that appears in `guess`.
    fn show_matched_card(&mut self, guess: &Guess) -> Result<Card, GameError>;

    /// Learn the card the responder showed us.
    fn read_matched_card(&mut self, guess: &Guess, card: &Card) -> Result<(), GameError> {
        self.core_mut().record_seen(guess, card)
    }

    fn matches_guess(&self, guess: &Guess) -> bool {
        self.core().matches_guess(guess)
    }

    fn seat(&self) -> Seat {
        self.core().seat()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn character(&self) -> Option<&str> {
        self.core().character()
    }

    fn cards(&self) -> &[Card] {
        self.core().cards()
    }

    fn is_ready(&self) -> bool {
        self.core().is_ready()
    }

    fn set_character(&mut self, character: &str) -> Result<(), GameError> {
        self.core_mut().set_character(character)
    }

    fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        self.core_mut().give_card(card)
    }

    fn set_ready(&mut self) -> Result<(), GameError> {
        self.core_mut().set_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_core() -> PlayerCore {
        let mut core = PlayerCore::new(Seat(1));
        core.set_character("Green").unwrap();
        core.give_card(Card::weapon("Rope")).unwrap();
        core.give_card(Card::location("Hall")).unwrap();
        core.set_ready().unwrap();
        core
    }

    fn guess(responder: Option<usize>) -> Guess {
        let mut g = Guess::new(
            0,
            Seat(0),
            Card::character("Plum"),
            Card::location("Hall"),
            Card::weapon("Knife"),
        )
        .unwrap();
        if let Some(r) = responder {
            g.set_responder(Seat(r)).unwrap();
        }
        g
    }

    #[test]
    fn seat_wraps_around_the_table() {
        assert_eq!(Seat(1).next(3), Seat(2));
        assert_eq!(Seat(2).next(3), Seat(0));
        assert_eq!(Seat(4).to_string(), "P4");
    }

    #[test]
    fn ready_seeds_memory_with_own_hand() {
        let core = ready_core();
        assert_eq!(core.name(), "P1");
        assert_eq!(core.seen_cards().get(&Card::weapon("rope")), Some(&Seat(1)));
        assert!(core.has_seen(&Card::location("Hall")));
        assert_eq!(core.seen_cards().len(), 2);
    }

    #[test]
    fn mutation_after_ready_is_rejected() {
        let mut core = ready_core();
        assert_eq!(
            core.give_card(Card::weapon("Knife")),
            Err(GameError::PlayerAlreadyReady(Seat(1)))
        );
        assert_eq!(
            core.set_character("Plum"),
            Err(GameError::PlayerAlreadyReady(Seat(1)))
        );
        assert_eq!(
            core.set_ready(),
            Err(GameError::PlayerAlreadyReady(Seat(1)))
        );
        assert_eq!(core.cards().len(), 2);
    }

    #[test]
    fn character_is_set_once() {
        let mut core = PlayerCore::new(Seat(0));
        core.set_character("Plum").unwrap();
        assert_eq!(
            core.set_character("Green"),
            Err(GameError::CharacterAlreadySet(Seat(0)))
        );
        assert_eq!(core.character(), Some("Plum"));
    }

    #[test]
    fn ready_needs_character_and_cards() {
        let mut core = PlayerCore::new(Seat(3));
        core.give_card(Card::weapon("Rope")).unwrap();
        assert_eq!(core.set_ready(), Err(GameError::PlayerIncomplete(Seat(3))));
        assert!(!core.is_ready());
    }

    #[test]
    fn matching_is_stable() {
        let core = ready_core();
        let g = guess(None);
        assert!(core.matches_guess(&g));
        assert!(core.matches_guess(&g));
        assert_eq!(core.matched_cards(&g), vec![&Card::location("Hall")]);
    }

    #[test]
    fn record_seen_needs_a_responder() {
        let mut core = ready_core();
        assert_eq!(
            core.record_seen(&guess(None), &Card::character("Plum")),
            Err(GameError::NoResponder { turn: 0 })
        );
        core.record_seen(&guess(Some(2)), &Card::character("Plum"))
            .unwrap();
        assert_eq!(
            core.seen_cards().get(&Card::character("Plum")),
            Some(&Seat(2))
        );
    }

    #[test]
    fn unseen_filters_category_and_memory() {
        let core = ready_core();
        let deck = vec![
            Card::weapon("Rope"),
            Card::weapon("Knife"),
            Card::location("Hall"),
        ];
        let weapons: Vec<&Card> = core.unseen(&deck, CardType::Weapon).collect();
        assert_eq!(weapons, vec![&Card::weapon("Knife")]);
        assert_eq!(core.unseen(&deck, CardType::Location).count(), 0);
    }
}
