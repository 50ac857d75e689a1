//! Deal command: seats players, places the configured bet for each and
//! shows the opening table with the dealer's hole card hidden.

use std::io::Write;

use holecard_engine::engine::RoundEngine;
use holecard_engine::game::GameState;

use super::{resolve_table, write_outcomes, write_table};
use crate::error::CliError;
use crate::formatters::format_state;
use crate::validation::validate_count;

pub fn handle_deal_command(
    seed: Option<u64>,
    decks: Option<usize>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_count("players", players as u64).map_err(CliError::InvalidInput)?;
    let table = resolve_table(decks, seed, None, None)?;

    let mut engine = RoundEngine::new(table.decks, Some(table.seed));
    for i in 1..=players {
        engine.add_player(&format!("P{i}"));
    }
    engine.start_new_round()?;
    for id in engine.active_player_ids().to_vec() {
        engine.place_bet(&id, table.bet)?;
    }

    writeln!(out, "Seed: {}", table.seed)?;
    writeln!(out, "Decks: {}", table.decks)?;
    write_table(&engine, out)?;
    writeln!(out, "State: {}", format_state(engine.game_state()))?;
    if engine.game_state() == &GameState::RoundOver {
        write_outcomes(&engine, out)?;
    }
    writeln!(out, "Cards left: {}", engine.deck().len())?;
    Ok(())
}
