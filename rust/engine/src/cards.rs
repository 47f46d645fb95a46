use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The fixed category of a card.
/// Every solution and every guess holds exactly one card of each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardType {
    /// A suspect; also the identity a player takes on
    Character,
    /// A room
    Location,
    /// A weapon
    Weapon,
}

impl CardType {
    pub const ALL: [CardType; 3] = [CardType::Character, CardType::Location, CardType::Weapon];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Character => "character",
            CardType::Location => "location",
            CardType::Weapon => "weapon",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named card.
///
/// Two cards are equal when they share a category and their names match
/// ignoring case. Cards sort by name first; the category only breaks ties
/// between same-named cards of different categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    kind: CardType,
    name: String,
}

impl Card {
    pub fn new(kind: CardType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn character(name: impl Into<String>) -> Self {
        Self::new(CardType::Character, name)
    }

    pub fn location(name: impl Into<String>) -> Self {
        Self::new(CardType::Location, name)
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self::new(CardType::Weapon, name)
    }

    pub fn kind(&self) -> CardType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_character(&self) -> bool {
        self.kind == CardType::Character
    }

    pub fn is_location(&self) -> bool {
        self.kind == CardType::Location
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == CardType::Weapon
    }

    /// Fails with [`GameError::CategoryMismatch`] unless this card is a `kind`.
    pub fn expect_kind(&self, kind: CardType) -> Result<(), GameError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(GameError::CategoryMismatch {
                card: self.name.clone(),
                expected: kind,
                actual: self.kind,
            })
        }
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.name.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.folded().eq(other.folded())
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded()
            .cmp(other.folded())
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Cards of one category, in their original order.
pub fn of_kind(cards: &[Card], kind: CardType) -> impl Iterator<Item = &Card> {
    cards.iter().filter(move |c| c.kind == kind)
}
