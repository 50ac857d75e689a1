//! Simulation command: bot-only rounds with a results summary.
//!
//! Every seat plays the same policy and bets the same amount. With
//! `--output`, one [`RoundRecord`] per round is appended as JSONL.
//!
//! # Environment Variables
//!
//! - `HOLECARD_SIM_BREAK_AFTER`: Stop after N rounds as if interrupted (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//!
//! let code = holecard_cli::run(
//!     ["holecard", "sim", "--rounds", "1000", "--seats", "3", "--output", "data/sim.jsonl"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use holecard_ai::create_ai;
use holecard_engine::engine::RoundEngine;
use holecard_engine::logger::{RoundLogger, RoundRecord};
use holecard_engine::player::GameOutcome;

use super::resolve_table;
use crate::error::CliError;
use crate::formatters::format_net;
use crate::validation::validate_count;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct SimSummary {
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    blackjacks: u64,
    net: i64,
}

impl SimSummary {
    fn record(&mut self, outcome: GameOutcome, bet: u32) {
        if outcome.is_player_win() {
            self.wins += 1;
        } else if outcome.is_player_loss() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
        if outcome == GameOutcome::PlayerBlackjack {
            self.blackjacks += 1;
        }
        self.net += outcome.net_result(bet);
    }

    fn write(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Simulated: {} rounds", self.rounds)?;
        writeln!(out, "Wins: {}", self.wins)?;
        writeln!(out, "Losses: {}", self.losses)?;
        writeln!(out, "Pushes: {}", self.pushes)?;
        writeln!(out, "Blackjacks: {}", self.blackjacks)?;
        writeln!(out, "Net: {}", format_net(self.net))
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    rounds: u64,
    seats: usize,
    seed: Option<u64>,
    decks: Option<usize>,
    bet: Option<u32>,
    policy: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_count("rounds", rounds).map_err(CliError::InvalidInput)?;
    validate_count("seats", seats as u64).map_err(CliError::InvalidInput)?;
    let table = resolve_table(decks, seed, bet, policy)?;
    let bot = create_ai(&table.policy).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let break_after = std::env::var("HOLECARD_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut logger = match output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: rounds={} seats={} seed={} decks={} bet={} policy={}",
        rounds, seats, table.seed, table.decks, table.bet, table.policy
    )?;

    let mut engine = RoundEngine::new(table.decks, Some(table.seed));
    for i in 1..=seats {
        engine.add_player(&format!("Seat {i}"));
    }

    let mut summary = SimSummary::default();
    for _ in 0..rounds {
        if let Some(b) = break_after
            && summary.rounds == b
        {
            writeln!(out, "Interrupted: saved {}/{}", summary.rounds, rounds)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                summary.rounds, rounds
            )));
        }

        engine.start_new_round()?;
        for id in engine.active_player_ids().to_vec() {
            engine.place_bet(&id, table.bet)?;
        }
        while let Some(player) = engine.current_player().map(str::to_owned) {
            let Some(hand) = engine.player_hand(&player) else {
                break;
            };
            let action = bot.decide(hand, engine.dealer_hand().cards().first());
            engine.player_action(&player, action)?;
        }

        summary.rounds += 1;
        for id in engine.active_player_ids() {
            if let Some(outcome) = engine.player_outcome(id) {
                summary.record(outcome, engine.player_bet(id));
            }
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = RoundRecord::from_engine(&engine, id) {
                logger.write(&record)?;
            }
        }
    }

    summary.write(out)?;
    Ok(())
}
