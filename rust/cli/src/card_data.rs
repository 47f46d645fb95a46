//! Custom card lists loaded from JSON.
//!
//! ```json
//! {
//!   "characters": ["Plum", "Green"],
//!   "locations": ["Hall", "Study"],
//!   "weapons": ["Rope", "Knife"]
//! }
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use whodunit_engine::cards::CardType;
use whodunit_engine::deck::{CardSource, DeckBuilder, StaticCardSource};

use crate::error::CliError;
use crate::io_utils::read_text;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardFile {
    pub characters: Vec<String>,
    pub locations: Vec<String>,
    pub weapons: Vec<String>,
}

impl CardFile {
    pub fn parse(json: &str) -> Result<Self, String> {
        let file: CardFile =
            serde_json::from_str(json).map_err(|e| format!("malformed card file: {}", e))?;
        file.validate()?;
        Ok(file)
    }

    fn lists(&self) -> [(CardType, &[String]); 3] {
        [
            (CardType::Character, &self.characters),
            (CardType::Location, &self.locations),
            (CardType::Weapon, &self.weapons),
        ]
    }

    /// Each list must be non-empty, without blank names or case-insensitive
    /// duplicates.
    pub fn validate(&self) -> Result<(), String> {
        for (kind, names) in self.lists() {
            if names.is_empty() {
                return Err(format!("no {} cards", kind));
            }
            let mut seen = HashSet::new();
            for name in names {
                if name.trim().is_empty() {
                    return Err(format!("blank {} name", kind));
                }
                if !seen.insert(name.trim().to_lowercase()) {
                    return Err(format!("duplicate {} '{}'", kind, name.trim()));
                }
            }
        }
        Ok(())
    }

    pub fn into_sources(self) -> Vec<Box<dyn CardSource>> {
        let trim = |names: Vec<String>| -> Vec<String> {
            names.into_iter().map(|n| n.trim().to_string()).collect()
        };
        vec![
            Box::new(StaticCardSource::new(CardType::Character, trim(self.characters))),
            Box::new(StaticCardSource::new(CardType::Location, trim(self.locations))),
            Box::new(StaticCardSource::new(CardType::Weapon, trim(self.weapons))),
        ]
    }
}

/// The classic deck, or the one described by `path`.
pub fn deck_builder(path: Option<&str>) -> Result<DeckBuilder, CliError> {
    let Some(path) = path else {
        return Ok(DeckBuilder::classic());
    };
    let text = read_text(path).map_err(CliError::InvalidInput)?;
    let file = CardFile::parse(&text).map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))?;
    Ok(DeckBuilder::new(file.into_sources())?)
}
