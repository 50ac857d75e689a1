//! Command handler modules for the Holecard CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//!
//! Table settings shared by `play`, `sim` and `deal` are resolved here:
//! flags win over configuration, which wins over defaults.

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use std::io::Write;

use holecard_engine::engine::RoundEngine;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_net, format_outcome};
use crate::validation::{validate_bet, validate_decks};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableSettings {
    pub decks: usize,
    pub seed: u64,
    pub bet: u32,
    pub policy: String,
}

pub(crate) fn resolve_table(
    decks: Option<usize>,
    seed: Option<u64>,
    bet: Option<u32>,
    policy: Option<String>,
) -> Result<TableSettings, CliError> {
    let cfg = config::load()?;
    let decks = validate_decks(decks.unwrap_or(cfg.decks)).map_err(CliError::InvalidInput)?;
    let bet = validate_bet(bet.unwrap_or(cfg.default_bet)).map_err(CliError::InvalidInput)?;
    Ok(TableSettings {
        decks,
        seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        bet,
        policy: policy.unwrap_or(cfg.bot_policy),
    })
}

/// Dealer line followed by one line per seat, in turn order.
pub(crate) fn write_table(engine: &RoundEngine, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Dealer: {}", format_hand(engine.dealer_hand()))?;
    for id in engine.active_player_ids() {
        if let Some(hand) = engine.player_hand(id) {
            writeln!(out, "{}: {}", id, format_hand(hand))?;
        }
    }
    Ok(())
}

/// Settled outcome per seat with its chip result.
pub(crate) fn write_outcomes(engine: &RoundEngine, out: &mut dyn Write) -> Result<(), CliError> {
    for id in engine.active_player_ids() {
        if let Some(outcome) = engine.player_outcome(id) {
            writeln!(
                out,
                "{}: {} ({})",
                id,
                format_outcome(outcome),
                format_net(outcome.net_result(engine.player_bet(id)))
            )?;
        }
    }
    Ok(())
}
