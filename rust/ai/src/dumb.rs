//! Deterministic strategy: always the alphabetically first option.

use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::errors::GameError;
use whodunit_engine::guess::Guess;
use whodunit_engine::player::{GuessContext, Player, PlayerCore, Seat};

/// Guesses the first unseen card of each category in card order and shows
/// its first matching card.
#[derive(Debug, Clone)]
pub struct DumbPlayer {
    core: PlayerCore,
}

impl DumbPlayer {
    pub fn new(seat: Seat) -> Self {
        Self {
            core: PlayerCore::new(seat),
        }
    }

    fn first(&self, cards: &[Card], kind: CardType) -> Result<Card, GameError> {
        self.core
            .unseen(cards, kind)
            .min()
            .cloned()
            .ok_or_else(|| GameError::Strategy {
                seat: self.core.seat(),
                reason: format!("no unseen {} left", kind),
            })
    }
}

impl Player for DumbPlayer {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn strategy(&self) -> &'static str {
        "dumb"
    }

    fn make_guess(&mut self, ctx: &GuessContext<'_>) -> Result<Guess, GameError> {
        Guess::new(
            ctx.turn,
            self.core.seat(),
            self.first(ctx.cards, CardType::Character)?,
            self.first(ctx.cards, CardType::Location)?,
            self.first(ctx.cards, CardType::Weapon)?,
        )
    }

    fn show_matched_card(&mut self, guess: &Guess) -> Result<Card, GameError> {
        self.core
            .matched_cards(guess)
            .into_iter()
            .min()
            .cloned()
            .ok_or_else(|| GameError::Strategy {
                seat: self.core.seat(),
                reason: format!("asked to show a card for '{}' without a match", guess),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_first_unseen_in_order() {
        let cards = vec![
            Card::weapon("Rope"),
            Card::character("Scarlett"),
            Card::location("study"),
            Card::character("green"),
            Card::location("Hall"),
            Card::weapon("Knife"),
            Card::character("Plum"),
        ];
        let mut p = DumbPlayer::new(Seat(2));
        p.set_character("Plum").unwrap();
        p.give_card(Card::character("Green")).unwrap();
        p.set_ready().unwrap();

        let ctx = GuessContext {
            turn: 7,
            next_seat: Seat(0),
            cards: &cards,
            history: &[],
        };
        let g = p.make_guess(&ctx).unwrap();
        assert_eq!(g.character(), &Card::character("Plum"));
        assert_eq!(g.location(), &Card::location("Hall"));
        assert_eq!(g.weapon(), &Card::weapon("Knife"));
        assert_eq!(g.turn(), 7);
        assert_eq!(g.guesser(), Seat(2));
    }

    #[test]
    fn shows_lowest_matching_card() {
        let mut p = DumbPlayer::new(Seat(1));
        p.set_character("Plum").unwrap();
        p.give_card(Card::weapon("Rope")).unwrap();
        p.give_card(Card::location("Hall")).unwrap();
        p.set_ready().unwrap();

        let guess = Guess::new(
            0,
            Seat(0),
            Card::character("Green"),
            Card::location("Hall"),
            Card::weapon("Rope"),
        )
        .unwrap();
        assert_eq!(p.show_matched_card(&guess).unwrap(), Card::location("Hall"));
    }

    #[test]
    fn no_match_is_a_strategy_error() {
        let mut p = DumbPlayer::new(Seat(1));
        p.set_character("Plum").unwrap();
        p.give_card(Card::weapon("Wrench")).unwrap();
        p.set_ready().unwrap();

        let guess = Guess::new(
            0,
            Seat(0),
            Card::character("Green"),
            Card::location("Hall"),
            Card::weapon("Rope"),
        )
        .unwrap();
        assert!(matches!(
            p.show_matched_card(&guess),
            Err(GameError::Strategy { seat: Seat(1), .. })
        ));
    }
}
