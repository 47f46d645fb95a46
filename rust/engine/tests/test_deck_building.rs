use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::deck::{classic_sources, DeckBuilder, StaticCardSource};

#[test]
fn solution_is_isolated_from_dealable_pool() {
    let builder = DeckBuilder::new(classic_sources()).unwrap();
    for seed in 0..200u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let deck = builder.build(&mut rng).unwrap();

        for card in deck.solution.cards() {
            assert!(
                !deck.player_cards.contains(card),
                "seed {}: solution card {} was dealable",
                seed,
                card
            );
        }

        let all: HashSet<&Card> = deck.cards.iter().collect();
        assert_eq!(all.len(), deck.cards.len(), "deck has duplicates");

        let mut rebuilt: HashSet<&Card> = deck.player_cards.iter().collect();
        rebuilt.extend(deck.solution.cards());
        assert_eq!(rebuilt, all);
        assert_eq!(deck.player_cards.len() + 3, deck.cards.len());
    }
}

#[test]
fn solution_has_one_card_per_category() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let deck = DeckBuilder::classic().build(&mut rng).unwrap();
    assert_eq!(deck.solution.character().kind(), CardType::Character);
    assert_eq!(deck.solution.location().kind(), CardType::Location);
    assert_eq!(deck.solution.weapon().kind(), CardType::Weapon);
}

#[test]
fn same_seed_draws_same_solution() {
    let builder = DeckBuilder::classic();
    let a = builder.build(&mut ChaCha20Rng::seed_from_u64(77)).unwrap();
    let b = builder.build(&mut ChaCha20Rng::seed_from_u64(77)).unwrap();
    assert_eq!(a.solution, b.solution);
    assert_eq!(a.player_cards, b.player_cards);
}

#[test]
fn every_card_can_be_drawn() {
    // 6 weapons over 600 draws: each should turn up many times
    let builder = DeckBuilder::classic();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..600 {
        let deck = builder.build(&mut rng).unwrap();
        *counts
            .entry(deck.solution.weapon().name().to_string())
            .or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&n| n > 50), "skewed draw: {:?}", counts);
}

#[test]
fn custom_sources_keep_source_order() {
    let builder = DeckBuilder::new(vec![
        Box::new(StaticCardSource::new(CardType::Weapon, ["Rope", "Knife"])),
        Box::new(StaticCardSource::new(CardType::Character, ["Plum", "Green"])),
        Box::new(StaticCardSource::new(CardType::Location, ["Hall", "Study"])),
    ])
    .unwrap();
    let deck = builder.build(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
    let names: Vec<&str> = deck.cards.iter().map(Card::name).collect();
    assert_eq!(names, vec!["Rope", "Knife", "Plum", "Green", "Hall", "Study"]);
    assert_eq!(deck.player_cards.len(), 3);
}
