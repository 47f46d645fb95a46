//! # whodunit-ai: Automated Strategies
//!
//! Reference [`Player`] implementations for the deduction game. Neither
//! strategy reasons about past guesses; both only avoid cards they have
//! already seen, which is enough to guarantee a game terminates.
//!
//! ## Core Components
//!
//! - [`random`] - Picks uniformly among unseen cards
//! - [`dumb`] - Picks the alphabetically first unseen card
//! - [`StrategyKind`] - Names of the available strategies
//! - [`create_player`] - Factory used by the player builder
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use whodunit_ai::{create_player, StrategyKind};
//! use whodunit_engine::builder::PlayerBuilder;
//! use whodunit_engine::deck::DeckBuilder;
//! use whodunit_engine::events::NullEventHandler;
//! use whodunit_engine::game::GameState;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let mut builder = PlayerBuilder::new(Box::new(|seat| {
//!     create_player(StrategyKind::Random, seat, Some(7))
//! }));
//! let mut game = GameState::new();
//! game.setup(3, &DeckBuilder::classic(), &mut builder, &mut rng).unwrap();
//! while game.execute_turn(&mut NullEventHandler).unwrap() {}
//! assert!(game.winner().is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use whodunit_engine::player::{Player, Seat};

pub mod dumb;
pub mod random;

/// Available automated strategies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StrategyKind {
    Random,
    Dumb,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Dumb];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Dumb => "dumb",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}' (expected one of: {})",
            self.0,
            StrategyKind::ALL.map(|k| k.as_str()).join(", ")
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "dumb" => Ok(StrategyKind::Dumb),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Derives a per-seat seed so each strategy gets an independent stream.
pub fn seat_seed(game_seed: u64, seat: Seat) -> u64 {
    (seat.index() as u64 + 1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .rotate_left(17)
        ^ game_seed
}

/// Creates a boxed strategy for `seat`.
///
/// With a `game_seed` the strategy's own generator is derived from it and the
/// seat, so the whole game replays exactly. Without one the generator is
/// seeded randomly.
///
/// # Example
///
/// ```rust
/// use whodunit_ai::{create_player, StrategyKind};
/// use whodunit_engine::player::Seat;
///
/// let p = create_player(StrategyKind::Dumb, Seat(1), None);
/// assert_eq!(p.strategy(), "dumb");
/// assert_eq!(p.name(), "P1");
/// ```
pub fn create_player(kind: StrategyKind, seat: Seat, game_seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        StrategyKind::Random => {
            let seed = game_seed
                .map(|s| seat_seed(s, seat))
                .unwrap_or_else(rand::random);
            Box::new(random::RandomPlayer::new(seat, seed))
        }
        StrategyKind::Dumb => Box::new(dumb::DumbPlayer::new(seat)),
    }
}
