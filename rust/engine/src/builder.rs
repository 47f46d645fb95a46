use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::cards::{of_kind, Card, CardType};
use crate::errors::GameError;
use crate::player::{Player, Seat};

/// Creates the strategy for a seat.
///
/// The lifetime lets a strategy borrow from its caller, e.g. an interactive
/// player holding the terminal streams.
pub type PlayerFactory<'a> = Box<dyn FnMut(Seat) -> Box<dyn Player + 'a> + 'a>;

/// Seats players, hands out characters and deals the dealable pool.
pub struct PlayerBuilder<'a> {
    factory: PlayerFactory<'a>,
}

impl<'a> PlayerBuilder<'a> {
    pub fn new(factory: PlayerFactory<'a>) -> Self {
        Self { factory }
    }

    /// Builds `player_count` ready players from the dealable `cards`.
    ///
    /// Characters are drawn without replacement from the character cards in
    /// `cards`. The pool is shuffled and dealt one card at a time around the
    /// table, so hand sizes differ by at most one. Counts are validated before
    /// any player is created.
    pub fn build<R: Rng + ?Sized>(
        &mut self,
        player_count: usize,
        cards: &[Card],
        rng: &mut R,
    ) -> Result<Vec<Box<dyn Player + 'a>>, GameError> {
        let mut characters: Vec<&Card> = of_kind(cards, CardType::Character).collect();
        if player_count == 0 {
            return Err(GameError::NoPlayers);
        }
        if player_count > characters.len() {
            return Err(GameError::TooManyPlayers {
                requested: player_count,
                available: characters.len(),
            });
        }
        if player_count > cards.len() {
            return Err(GameError::NotEnoughCards {
                players: player_count,
                cards: cards.len(),
            });
        }

        let mut players: Vec<Box<dyn Player + 'a>> =
            (0..player_count).map(|i| (self.factory)(Seat(i))).collect();

        characters.shuffle(rng);
        for (player, character) in players.iter_mut().zip(&characters) {
            player.set_character(character.name())?;
        }

        let mut pool = cards.to_vec();
        pool.shuffle(rng);
        for (i, card) in pool.into_iter().enumerate() {
            players[i % player_count].give_card(card)?;
        }

        for player in players.iter_mut() {
            player.set_ready()?;
            debug!(
                seat = %player.seat(),
                character = player.character().unwrap_or_default(),
                hand = player.cards().len(),
                "player ready"
            );
        }
        Ok(players)
    }
}
