use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::errors::GameError;
use crate::player::Seat;

/// One player's claim of a character, location and weapon on their turn.
///
/// Everything but the responder is fixed at construction. The responder is
/// write-once: [`Guess::set_responder`] fails the second time.
///
/// Guesses are identified by `(turn, guesser)`; a player makes exactly one
/// guess per turn, so the cards are not part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guess {
    turn: u32,
    guesser: Seat,
    character: Card,
    location: Card,
    weapon: Card,
    responder: Option<Seat>,
}

impl Guess {
    pub fn new(
        turn: u32,
        guesser: Seat,
        character: Card,
        location: Card,
        weapon: Card,
    ) -> Result<Self, GameError> {
        character.expect_kind(CardType::Character)?;
        location.expect_kind(CardType::Location)?;
        weapon.expect_kind(CardType::Weapon)?;
        Ok(Self {
            turn,
            guesser,
            character,
            location,
            weapon,
            responder: None,
        })
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn guesser(&self) -> Seat {
        self.guesser
    }

    pub fn character(&self) -> &Card {
        &self.character
    }

    pub fn location(&self) -> &Card {
        &self.location
    }

    pub fn weapon(&self) -> &Card {
        &self.weapon
    }

    pub fn cards(&self) -> [&Card; 3] {
        [&self.character, &self.location, &self.weapon]
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards().contains(&card)
    }

    pub fn responder(&self) -> Option<Seat> {
        self.responder
    }

    pub fn is_resolved(&self) -> bool {
        self.responder.is_some()
    }

    pub fn set_responder(&mut self, seat: Seat) -> Result<(), GameError> {
        if self.responder.is_some() {
            return Err(GameError::ResponderAlreadySet { turn: self.turn });
        }
        self.responder = Some(seat);
        Ok(())
    }
}

impl PartialEq for Guess {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.guesser == other.guesser
    }
}

impl Eq for Guess {}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' with '{}' at '{}'",
            self.character, self.weapon, self.location
        )
    }
}
