//! Simulation command: many automated games and a summary.
//!
//! Game `i` is seeded with `seed + i`, so any single game from a run can be
//! replayed with `play --seed`.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info_span;
use whodunit_engine::builder::PlayerBuilder;
use whodunit_engine::events::TracingEventHandler;
use whodunit_engine::game::GameState;
use whodunit_engine::logger::{GameLogger, GameRecord};

use super::{GameOptions, automated_factory, play_out};
use crate::config::Overrides;
use crate::error::CliError;

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `overrides` - Players, strategy, seed and card file from the command line
/// * `output` - Optional JSONL file receiving one `GameRecord` per game
/// * `out` - Summary output
pub fn handle_sim_command(
    games: u32,
    overrides: Overrides,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let opts = GameOptions::resolve(overrides)?;
    let mut logger = match &output {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    let mut wins = vec![0u32; opts.players];
    let mut total_turns = 0usize;
    for i in 0..games {
        let seed = opts.seed.wrapping_add(u64::from(i));
        let _span = info_span!("game", index = i, seed).entered();

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut builder = PlayerBuilder::new(automated_factory(opts.strategy, seed));
        let mut game = GameState::new();
        game.setup(opts.players, &opts.deck, &mut builder, &mut rng)?;
        play_out(&mut game, &mut TracingEventHandler, opts.max_turns)?;

        total_turns += game.turns_played();
        if let Some(winner) = game.winner() {
            wins[winner.index()] += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let record = GameRecord::from_game(logger.next_id(), Some(seed), &game);
            logger.write(&record)?;
        }
    }

    writeln!(
        out,
        "sim: games={} players={} strategy={} seed={}",
        games, opts.players, opts.strategy, opts.seed
    )?;
    writeln!(out, "Simulated: {} games", games)?;
    writeln!(
        out,
        "Average turns: {:.2}",
        total_turns as f64 / f64::from(games)
    )?;
    writeln!(out, "Wins by seat:")?;
    for (seat, count) in wins.iter().enumerate() {
        writeln!(out, "  P{}: {}", seat, count)?;
    }
    if let Some(path) = output {
        writeln!(out, "Records: {}", path)?;
    }
    Ok(())
}
