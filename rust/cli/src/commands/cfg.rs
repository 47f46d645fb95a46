//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value
//! (default, file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;

    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "max_turns": {
            "value": config.max_turns,
            "source": sources.max_turns,
        },
        "cards_file": {
            "value": config.cards_file,
            "source": sources.cards_file,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
