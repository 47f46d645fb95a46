//! Plain-text rendering of cards, hands and results.

use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::game::PlayerInfo;

/// Cards sorted by name and joined with commas.
pub fn format_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut sorted: Vec<&Card> = cards.into_iter().collect();
    sorted.sort();
    sorted
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `P1 (Plum)`, or just the name when no character was assigned.
pub fn format_player(info: &PlayerInfo) -> String {
    match &info.character {
        Some(c) => format!("{} ({})", info.name, c),
        None => info.name.clone(),
    }
}

/// Category heading used in card listings.
pub fn category_title(kind: CardType) -> &'static str {
    match kind {
        CardType::Character => "Characters",
        CardType::Location => "Locations",
        CardType::Weapon => "Weapons",
    }
}
