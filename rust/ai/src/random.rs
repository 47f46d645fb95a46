//! Strategy that guesses uniformly among unseen cards.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;
use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::errors::GameError;
use whodunit_engine::guess::Guess;
use whodunit_engine::player::{GuessContext, Player, PlayerCore, Seat};

/// Picks one unseen card per category at random, and shows a random matching
/// card when asked.
///
/// Owns its generator so its choices never disturb the deal.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    core: PlayerCore,
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new(seat: Seat, seed: u64) -> Self {
        Self {
            core: PlayerCore::new(seat),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, cards: &[Card], kind: CardType) -> Result<Card, GameError> {
        let candidates: Vec<&Card> = self.core.unseen(cards, kind).collect();
        candidates
            .choose(&mut self.rng)
            .map(|c| (*c).clone())
            .ok_or_else(|| GameError::Strategy {
                seat: self.core.seat(),
                reason: format!("no unseen {} left", kind),
            })
    }
}

impl Player for RandomPlayer {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn strategy(&self) -> &'static str {
        "random"
    }

    fn make_guess(&mut self, ctx: &GuessContext<'_>) -> Result<Guess, GameError> {
        let character = self.pick(ctx.cards, CardType::Character)?;
        let location = self.pick(ctx.cards, CardType::Location)?;
        let weapon = self.pick(ctx.cards, CardType::Weapon)?;
        Guess::new(ctx.turn, self.core.seat(), character, location, weapon)
    }

    fn show_matched_card(&mut self, guess: &Guess) -> Result<Card, GameError> {
        let matched = self.core.matched_cards(guess);
        matched
            .choose(&mut self.rng)
            .map(|c| (*c).clone())
            .ok_or_else(|| GameError::Strategy {
                seat: self.core.seat(),
                reason: format!("asked to show a card for '{}' without a match", guess),
            })
    }
}
