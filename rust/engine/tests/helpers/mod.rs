//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::deck::Deck;
use whodunit_engine::errors::GameError;
use whodunit_engine::guess::Guess;
use whodunit_engine::player::{GuessContext, Player, PlayerCore, Seat};
use whodunit_engine::solution::CrimeSolution;

/// Plays queued guesses first, then the alphabetically first unseen card per
/// category. Always shows its alphabetically first matching card.
pub struct ScriptedPlayer {
    core: PlayerCore,
    script: VecDeque<[Card; 3]>,
    pub turn_offset: u32,
    pub guess_as: Option<Seat>,
    pub reveal: Option<Card>,
}

impl ScriptedPlayer {
    pub fn new(seat: Seat) -> Self {
        Self {
            core: PlayerCore::new(seat),
            script: VecDeque::new(),
            turn_offset: 0,
            guess_as: None,
            reveal: None,
        }
    }

    pub fn dealt(seat: usize, character: &str, hand: &[Card]) -> Self {
        let mut p = Self::new(Seat(seat));
        p.core.set_character(character).unwrap();
        for c in hand {
            p.core.give_card(c.clone()).unwrap();
        }
        p.core.set_ready().unwrap();
        p
    }

    pub fn will_guess(mut self, character: &str, location: &str, weapon: &str) -> Self {
        self.script.push_back([
            Card::character(character),
            Card::location(location),
            Card::weapon(weapon),
        ]);
        self
    }
}

impl Player for ScriptedPlayer {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn strategy(&self) -> &'static str {
        "scripted"
    }

    fn make_guess(&mut self, ctx: &GuessContext<'_>) -> Result<Guess, GameError> {
        let [character, location, weapon] = match self.script.pop_front() {
            Some(cards) => cards,
            None => {
                let first = |kind| {
                    self.core
                        .unseen(ctx.cards, kind)
                        .min()
                        .cloned()
                        .expect("an unseen card in every category")
                };
                [
                    first(CardType::Character),
                    first(CardType::Location),
                    first(CardType::Weapon),
                ]
            }
        };
        Guess::new(
            ctx.turn + self.turn_offset,
            self.guess_as.unwrap_or(self.core.seat()),
            character,
            location,
            weapon,
        )
    }

    fn show_matched_card(&mut self, guess: &Guess) -> Result<Card, GameError> {
        if let Some(card) = self.reveal.clone() {
            return Ok(card);
        }
        let mut matched = self.core.matched_cards(guess);
        matched.sort();
        Ok(matched[0].clone())
    }
}

pub fn solution(character: &str, location: &str, weapon: &str) -> CrimeSolution {
    CrimeSolution::new(
        Card::character(character),
        Card::location(location),
        Card::weapon(weapon),
    )
    .unwrap()
}

/// A deck whose dealable pool is exactly the union of `hands`.
pub fn deck_for(solution: &CrimeSolution, hands: &[&[Card]]) -> Deck {
    let player_cards: Vec<Card> = hands.iter().flat_map(|h| h.iter().cloned()).collect();
    let mut cards: Vec<Card> = solution.cards().into_iter().cloned().collect();
    cards.extend(player_cards.iter().cloned());
    Deck {
        cards,
        solution: solution.clone(),
        player_cards,
    }
}

pub fn boxed(players: Vec<ScriptedPlayer>) -> Vec<Box<dyn Player>> {
    players
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn Player>)
        .collect()
}
