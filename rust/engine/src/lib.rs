//! # whodunit-engine: Deduction Card Game Core
//!
//! A hidden-information deduction game in the style of Clue. One character,
//! one location and one weapon are drawn as the secret solution; the rest of
//! the deck is dealt to the players, who take turns guessing until someone
//! names the solution exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card and category representation
//! - [`deck`] - Card sources, solution draw and the dealable pool
//! - [`builder`] - Seating players, assigning characters and dealing
//! - [`guess`] - Guess record with its write-once responder
//! - [`solution`] - The hidden crime solution
//! - [`player`] - Strategy trait and the shared hand/memory core
//! - [`game`] - The turn engine
//! - [`events`] - Lifecycle notifications for presenters
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use whodunit_engine::deck::DeckBuilder;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let deck = DeckBuilder::classic().build(&mut rng).unwrap();
//! assert_eq!(deck.cards.len(), deck.player_cards.len() + 3);
//! assert!(deck.solution.cards().iter().all(|c| !deck.player_cards.contains(c)));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every random choice takes an explicit `rand::Rng`, so a seeded
//! `ChaCha20Rng` reproduces the same solution, seating and deal.

pub mod builder;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod guess;
pub mod logger;
pub mod player;
pub mod solution;
