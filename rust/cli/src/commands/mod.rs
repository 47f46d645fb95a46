//! Command handler modules for the whodunit CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors propagated via `CliError`; `run` prints them
//!
//! The helpers below resolve the shared game options and drive the turn loop.

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use whodunit_ai::{StrategyKind, create_player};
use whodunit_engine::builder::PlayerFactory;
use whodunit_engine::deck::DeckBuilder;
use whodunit_engine::events::EventHandler;
use whodunit_engine::game::GameState;

use crate::card_data;
use crate::config::{self, Overrides};
use crate::error::CliError;

/// Everything needed to set up a game, after config layering.
pub(crate) struct GameOptions {
    pub seed: u64,
    pub players: usize,
    pub strategy: StrategyKind,
    pub max_turns: u32,
    pub deck: DeckBuilder,
}

impl GameOptions {
    /// Without a configured seed a random one is drawn; callers print it so
    /// the game can be replayed.
    pub(crate) fn resolve(overrides: Overrides) -> Result<Self, CliError> {
        let config = config::resolve(overrides)?.config;
        Ok(Self {
            seed: config.seed.unwrap_or_else(rand::random),
            players: config.players,
            strategy: config.strategy_kind()?,
            max_turns: config.max_turns,
            deck: card_data::deck_builder(config.cards_file.as_deref())?,
        })
    }
}

/// Every seat played by the same automated strategy.
pub(crate) fn automated_factory(kind: StrategyKind, seed: u64) -> PlayerFactory<'static> {
    Box::new(move |seat| create_player(kind, seat, Some(seed)))
}

/// Runs turns until the case is solved, giving up after `max_turns`.
pub(crate) fn play_out(
    game: &mut GameState<'_>,
    events: &mut dyn EventHandler,
    max_turns: u32,
) -> Result<(), CliError> {
    while game.execute_turn(events)? {
        if game.turns_played() >= max_turns as usize {
            return Err(CliError::Config(format!(
                "case not solved within max_turns={}",
                max_turns
            )));
        }
    }
    Ok(())
}
