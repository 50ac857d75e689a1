use serde::{Deserialize, Serialize};

use crate::cards::PlayingCard;
use crate::engine::RoundEngine;
use crate::game::GameState;
use crate::player::{GameOutcome, PlayerId};

/// Final state of one seat in a settled round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub player_id: PlayerId,
    pub cards: Vec<PlayingCard>,
    pub score: u32,
    pub bet: u32,
    pub outcome: GameOutcome,
    /// Chips won or lost on `bet`
    pub net_result: i64,
}

/// Complete record of a settled round, serialized one per line (JSONL).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the shoe's shuffle generator
    pub seed: Option<u64>,
    pub round_number: u64,
    pub decks: usize,
    pub dealer_cards: Vec<PlayingCard>,
    pub dealer_score: u32,
    /// Seats in turn order
    pub seats: Vec<SeatRecord>,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Captures the table once the round is over; `None` before that.
    pub fn from_engine(engine: &RoundEngine, round_id: String) -> Option<Self> {
        if engine.game_state() != &GameState::RoundOver {
            return None;
        }
        let seats = engine
            .active_player_ids()
            .iter()
            .filter_map(|id| {
                let hand = engine.player_hand(id)?;
                let outcome = engine.player_outcome(id)?;
                let bet = engine.player_bet(id);
                Some(SeatRecord {
                    player_id: id.clone(),
                    cards: hand.cards().to_vec(),
                    score: hand.score(),
                    bet,
                    outcome,
                    net_result: outcome.net_result(bet),
                })
            })
            .collect();
        Some(Self {
            round_id,
            seed: Some(engine.seed()),
            round_number: engine.round_number(),
            decks: engine.number_of_decks(),
            dealer_cards: engine.dealer_hand().cards().to_vec(),
            dealer_score: engine.dealer_hand().score(),
            seats,
            ts: None,
        })
    }

    pub fn net_total(&self) -> i64 {
        self.seats.iter().map(|s| s.net_result).sum()
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file and hands out round ids.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
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

    /// Logger that only numbers rounds and writes nowhere.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
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
