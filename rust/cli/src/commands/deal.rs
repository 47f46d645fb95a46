//! Deal command: set up a game and print everything hidden in it.
//!
//! A debugging aid. The same seed deals the same solution and hands as
//! `play` does.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use whodunit_engine::builder::PlayerBuilder;
use whodunit_engine::game::GameState;

use super::{GameOptions, automated_factory};
use crate::config::Overrides;
use crate::error::CliError;
use crate::formatters::{format_cards, format_player};

pub fn handle_deal_command(overrides: Overrides, out: &mut dyn Write) -> Result<(), CliError> {
    let opts = GameOptions::resolve(overrides)?;
    let mut rng = ChaCha20Rng::seed_from_u64(opts.seed);
    let mut builder = PlayerBuilder::new(automated_factory(opts.strategy, opts.seed));
    let mut game = GameState::new();
    game.setup(opts.players, &opts.deck, &mut builder, &mut rng)?;

    writeln!(out, "Seed: {}", opts.seed)?;
    if let Some(solution) = game.solution() {
        writeln!(out, "Solution: {}", solution)?;
    }
    for (info, player) in game.roster().iter().zip(game.players()) {
        writeln!(out, "{}: {}", format_player(info), format_cards(player.cards()))?;
    }
    Ok(())
}
