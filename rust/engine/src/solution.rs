use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::errors::GameError;
use crate::guess::Guess;

/// The hidden answer: one card per category, drawn once per game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CrimeSolution {
    character: Card,
    location: Card,
    weapon: Card,
}

impl CrimeSolution {
    pub fn new(character: Card, location: Card, weapon: Card) -> Result<Self, GameError> {
        character.expect_kind(CardType::Character)?;
        location.expect_kind(CardType::Location)?;
        weapon.expect_kind(CardType::Weapon)?;
        Ok(Self {
            character,
            location,
            weapon,
        })
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

    /// Category-for-category equality with the guessed cards.
    pub fn matches_guess(&self, guess: &Guess) -> bool {
        self.character == *guess.character()
            && self.location == *guess.location()
            && self.weapon == *guess.weapon()
    }
}

impl fmt::Display for CrimeSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' with '{}' at '{}'",
            self.character, self.weapon, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Seat;

    fn solution() -> CrimeSolution {
        CrimeSolution::new(
            Card::character("Plum"),
            Card::location("Kitchen"),
            Card::weapon("Knife"),
        )
        .unwrap()
    }

    #[test]
    fn matches_only_the_exact_triple() {
        let s = solution();
        let hit = Guess::new(
            0,
            Seat(0),
            Card::character("plum"),
            Card::location("Kitchen"),
            Card::weapon("knife"),
        )
        .unwrap();
        let miss = Guess::new(
            0,
            Seat(0),
            Card::character("Plum"),
            Card::location("Hall"),
            Card::weapon("Knife"),
        )
        .unwrap();
        assert!(s.matches_guess(&hit));
        assert!(!s.matches_guess(&miss));
    }

    #[test]
    fn slots_are_checked() {
        let err = CrimeSolution::new(
            Card::character("Plum"),
            Card::weapon("Rope"),
            Card::weapon("Knife"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GameError::CategoryMismatch {
                expected: CardType::Location,
                actual: CardType::Weapon,
                ..
            }
        ));
    }

    #[test]
    fn display_reads_like_an_accusation() {
        assert_eq!(
            solution().to_string(),
            "'Plum' with 'Knife' at 'Kitchen'"
        );
    }
}
