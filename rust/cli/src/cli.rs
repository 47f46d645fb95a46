//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use whodunit_ai::StrategyKind;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "whodunit",
    version,
    about = "Whodunit: a deduction card game",
    long_about = None
)]
pub struct WhodunitCli {
    /// Log engine internals at debug level (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

/// Flags shared by every command that sets up a game.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Number of players
    #[arg(long)]
    pub players: Option<usize>,
    /// Automated strategy (random or dumb)
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<StrategyKind>,
    /// RNG seed; a random one is chosen and printed when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file with custom character, location and weapon lists
    #[arg(long)]
    pub cards: Option<String>,
}

impl From<GameArgs> for Overrides {
    fn from(args: GameArgs) -> Self {
        Overrides {
            players: args.players,
            strategy: args.strategy,
            seed: args.seed,
            cards_file: args.cards,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play many automated games and summarize the results
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[command(flatten)]
        game: GameArgs,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal a game and print the solution and every hand
    Deal {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Show the resolved configuration
    Cfg,
}

/// Who sits at seat 0 in `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Seat 0 is played interactively through stdin.
    Human,
    /// Every seat is automated.
    Ai,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use whodunit_cli::Vs;
    /// assert_eq!(Vs::Human.as_str(), "human");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

fn parse_strategy(s: &str) -> Result<StrategyKind, String> {
    s.parse().map_err(|e: whodunit_ai::UnknownStrategy| e.to_string())
}
