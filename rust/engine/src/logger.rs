use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, PlayerInfo};
use crate::guess::Guess;
use crate::player::Seat;
use crate::solution::CrimeSolution;

/// A seated player together with the hand they were dealt.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    #[serde(flatten)]
    pub info: PlayerInfo,
    pub hand: Vec<Card>,
}

/// Complete record of a finished (or aborted) game.
/// Serialized to JSONL, one game per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed the game's generators were derived from
    pub seed: Option<u64>,
    pub players: Vec<SeatRecord>,
    pub solution: Option<CrimeSolution>,
    /// Every guess in turn order, with its responder
    pub guesses: Vec<Guess>,
    pub winner: Option<Seat>,
    pub turns: usize,
    /// Timestamp when the game was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    pub fn from_game(game_id: String, seed: Option<u64>, game: &GameState<'_>) -> Self {
        let players = game
            .roster()
            .into_iter()
            .zip(game.players())
            .map(|(info, p)| SeatRecord {
                info,
                hand: p.cards().to_vec(),
            })
            .collect();
        Self {
            game_id,
            seed,
            players,
            solution: game.solution().cloned(),
            guesses: game.guesses().to_vec(),
            winner: game.winner(),
            turns: game.turns_played(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
