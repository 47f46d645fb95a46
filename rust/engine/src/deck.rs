use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::cards::{of_kind, Card, CardType};
use crate::errors::GameError;
use crate::solution::CrimeSolution;

/// Supplies the card names of one category.
///
/// Names are expected to be unique within the category; the deck builder
/// does not deduplicate.
pub trait CardSource {
    fn kind(&self) -> CardType;

    fn names(&self) -> Vec<String>;
}

/// A card source backed by an in-memory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCardSource {
    kind: CardType,
    names: Vec<String>,
}

impl StaticCardSource {
    pub fn new<I, S>(kind: CardType, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CardSource for StaticCardSource {
    fn kind(&self) -> CardType {
        self.kind
    }

    fn names(&self) -> Vec<String> {
        self.names.clone()
    }
}

pub const CLASSIC_CHARACTERS: [&str; 6] = [
    "Miss Scarlett",
    "Colonel Mustard",
    "Mrs. White",
    "Reverend Green",
    "Mrs. Peacock",
    "Professor Plum",
];

pub const CLASSIC_LOCATIONS: [&str; 9] = [
    "Kitchen",
    "Ballroom",
    "Conservatory",
    "Dining Room",
    "Billiard Room",
    "Library",
    "Lounge",
    "Hall",
    "Study",
];

pub const CLASSIC_WEAPONS: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Wrench",
];

/// One source per category with the classic board-game cards.
pub fn classic_sources() -> Vec<Box<dyn CardSource>> {
    vec![
        Box::new(StaticCardSource::new(
            CardType::Character,
            CLASSIC_CHARACTERS,
        )),
        Box::new(StaticCardSource::new(CardType::Location, CLASSIC_LOCATIONS)),
        Box::new(StaticCardSource::new(CardType::Weapon, CLASSIC_WEAPONS)),
    ]
}

/// Result of a deck build.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Every card, solution included, in source order
    pub cards: Vec<Card>,
    pub solution: CrimeSolution,
    /// `cards` minus the three solution cards
    pub player_cards: Vec<Card>,
}

/// Builds the deck and isolates the solution from the dealable pool.
pub struct DeckBuilder {
    sources: Vec<Box<dyn CardSource>>,
}

impl DeckBuilder {
    /// Fails unless `sources` covers every category exactly once.
    pub fn new(sources: Vec<Box<dyn CardSource>>) -> Result<Self, GameError> {
        for kind in CardType::ALL {
            match sources.iter().filter(|s| s.kind() == kind).count() {
                0 => return Err(GameError::MissingCategory(kind)),
                1 => {}
                _ => return Err(GameError::DuplicateCategory(kind)),
            }
        }
        Ok(Self { sources })
    }

    pub fn classic() -> Self {
        Self {
            sources: classic_sources(),
        }
    }

    /// Loads every source, draws one solution card per category with `rng`
    /// and returns the remaining cards as the dealable pool.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deck, GameError> {
        let cards = self.load()?;

        let character = draw(&cards, CardType::Character, rng)?;
        let location = draw(&cards, CardType::Location, rng)?;
        let weapon = draw(&cards, CardType::Weapon, rng)?;
        let solution = CrimeSolution::new(character, location, weapon)?;

        let player_cards: Vec<Card> = cards
            .iter()
            .filter(|c| !solution.contains(c))
            .cloned()
            .collect();
        if player_cards.is_empty() {
            return Err(GameError::EmptyPool);
        }

        debug!(
            cards = cards.len(),
            dealable = player_cards.len(),
            "deck built"
        );
        Ok(Deck {
            cards,
            solution,
            player_cards,
        })
    }

    fn load(&self) -> Result<Vec<Card>, GameError> {
        let mut cards = Vec::new();
        for source in &self.sources {
            let kind = source.kind();
            let names = source.names();
            if names.is_empty() {
                return Err(GameError::EmptyCategory(kind));
            }
            for name in names {
                if name.trim().is_empty() {
                    return Err(GameError::EmptyCardName(kind));
                }
                cards.push(Card::new(kind, name));
            }
        }
        Ok(cards)
    }
}

fn draw<R: Rng + ?Sized>(cards: &[Card], kind: CardType, rng: &mut R) -> Result<Card, GameError> {
    let pool: Vec<&Card> = of_kind(cards, kind).collect();
    pool.choose(rng)
        .map(|c| (*c).clone())
        .ok_or(GameError::EmptyCategory(kind))
}
