//! # Play Command
//!
//! One game, narrated on stdout.
//!
//! - **AI**: every seat uses the configured automated strategy
//! - **Human**: seat 0 is played interactively through stdin, the other
//!   seats are automated
//!
//! Closing the input mid-game ends the session as interrupted. In human mode
//! the seed is only printed after the game ends.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use whodunit_ai::{StrategyKind, create_player};
use whodunit_engine::builder::{PlayerBuilder, PlayerFactory};
use whodunit_engine::errors::GameError;
use whodunit_engine::game::GameState;
use whodunit_engine::player::{Player, Seat};

use super::{GameOptions, play_out};
use crate::cli::Vs;
use crate::config::Overrides;
use crate::console::{ConsoleEventHandler, SharedWriter};
use crate::error::CliError;
use crate::formatters::{format_cards, format_player};
use crate::human::{ConsoleOperator, HumanPlayer};

const HUMAN_SEAT: Seat = Seat(0);

/// Handle the play command: one game against automated opponents.
///
/// # Arguments
///
/// * `vs` - Whether seat 0 is interactive (`Human`) or automated (`Ai`)
/// * `overrides` - Players, strategy, seed and card file from the command line
/// * `out` - Game narration and prompts
/// * `stdin` - Answers for the interactive seat
///
/// # Returns
///
/// * `Ok(())` once the case is solved
/// * `Err(CliError::Interrupted)` if the input closes mid-game
/// * `Err(CliError)` for configuration, engine or I/O failures
pub fn handle_play_command<'a>(
    vs: Vs,
    overrides: Overrides,
    out: &'a mut dyn Write,
    stdin: &'a mut dyn BufRead,
) -> Result<(), CliError> {
    let opts = GameOptions::resolve(overrides)?;
    let mut shared = SharedWriter::new(out);

    // The seed reproduces the deal, so a human only learns it once the game is over.
    match vs {
        Vs::Human => writeln!(
            shared,
            "play: vs={} players={} strategy={}",
            vs.as_str(),
            opts.players,
            opts.strategy
        )?,
        Vs::Ai => writeln!(
            shared,
            "play: vs={} players={} strategy={} seed={}",
            vs.as_str(),
            opts.players,
            opts.strategy,
            opts.seed
        )?,
    }

    let human = match vs {
        Vs::Human => Some((stdin, shared.clone())),
        Vs::Ai => None,
    };
    let is_human = human.is_some();
    let mut builder = PlayerBuilder::new(seat_factory(opts.strategy, opts.seed, human));
    let mut rng = ChaCha20Rng::seed_from_u64(opts.seed);
    let mut game = GameState::new();
    game.setup(opts.players, &opts.deck, &mut builder, &mut rng)?;

    if is_human {
        let me = &game.players()[HUMAN_SEAT.index()];
        writeln!(
            shared,
            "You are {} playing {}. Your cards: {}",
            me.name(),
            me.character().unwrap_or_default(),
            format_cards(me.cards())
        )?;
    }

    let mut events = ConsoleEventHandler::new(shared.clone(), game.roster());
    let outcome = play_out(&mut game, &mut events, opts.max_turns);
    if let Some(e) = events.take_error() {
        return Err(e.into());
    }
    outcome.map_err(|e| interrupt_on_withdrawal(e, is_human))?;

    let roster = game.roster();
    if let Some(winner) = game.winner() {
        writeln!(
            shared,
            "Winner: {} after {} turns",
            format_player(&roster[winner.index()]),
            game.turns_played()
        )?;
        if is_human && winner == HUMAN_SEAT {
            writeln!(shared, "You cracked the case!")?;
        }
    }
    if let Some(solution) = game.solution() {
        writeln!(shared, "Solution: {}", solution)?;
    }
    if is_human {
        writeln!(shared, "Seed: {}", opts.seed)?;
    }
    Ok(())
}

/// The human seat running out of input interrupts the session. Every other
/// failure, the human's included, stays an engine error.
fn interrupt_on_withdrawal(e: CliError, is_human: bool) -> CliError {
    match e {
        CliError::Engine(GameError::Withdrawn(seat)) if is_human && seat == HUMAN_SEAT => {
            CliError::Interrupted("input closed".into())
        }
        other => other,
    }
}

/// Seat 0 gets the interactive player when `human` is given; every other
/// seat gets the automated strategy.
fn seat_factory<'a>(
    kind: StrategyKind,
    seed: u64,
    human: Option<(&'a mut dyn BufRead, SharedWriter<'a>)>,
) -> PlayerFactory<'a> {
    let mut human = human;
    Box::new(move |seat| -> Box<dyn Player + 'a> {
        if seat == HUMAN_SEAT
            && let Some((input, output)) = human.take()
        {
            return Box::new(HumanPlayer::new(seat, ConsoleOperator::new(input, output)));
        }
        create_player(kind, seat, Some(seed))
    })
}
