//! # Play Command
//!
//! Interactive Blackjack at the terminal. You sit in the first seat; bot
//! seats (if any) follow you in turn order and play the configured policy.
//!
//! ## Features
//!
//! - Input validation with re-prompt on unrecognized actions
//! - Graceful quit handling (`q`/`quit` or end of input)
//! - Dealer hole card stays hidden until the dealer plays
//! - Per-round outcome and running chip result for your seat

use std::io::{BufRead, Write};

use holecard_ai::{AutoPlayer, create_ai};
use holecard_engine::engine::RoundEngine;
use holecard_engine::player::PlayerAction;

use super::{TableSettings, resolve_table, write_outcomes, write_table};
use crate::error::CliError;
use crate::formatters::{format_action, format_hand, format_net};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_count};

/// Seat id of the person at the keyboard.
pub const HUMAN_SEAT: &str = "You";

/// Handle the play command: interactive rounds against the dealer.
///
/// `rounds` defaults to 1. Every seat bets `bet` (or the configured default)
/// each round.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    bots: usize,
    rounds: Option<u32>,
    seed: Option<u64>,
    decks: Option<usize>,
    bet: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let rounds = rounds.unwrap_or(1);
    validate_count("rounds", u64::from(rounds)).map_err(CliError::InvalidInput)?;
    let table = resolve_table(decks, seed, bet, None)?;
    let bot = create_ai(&table.policy).map_err(|e| CliError::Config(e.to_string()))?;

    writeln!(
        out,
        "play: bots={} rounds={} seed={} decks={} bet={}",
        bots, rounds, table.seed, table.decks, table.bet
    )?;
    execute_play(&table, bots, rounds, bot.as_ref(), stdin, out, err)
}

/// What the human asked for at the prompt.
enum Decision {
    Act(PlayerAction),
    Quit,
}

fn execute_play(
    table: &TableSettings,
    bots: usize,
    rounds: u32,
    bot: &dyn AutoPlayer,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = RoundEngine::new(table.decks, Some(table.seed));
    engine.add_player(HUMAN_SEAT);
    for i in 1..=bots {
        engine.add_player(&format!("Bot {i}"));
    }

    let mut played = 0u32;
    let mut net = 0i64;

    'session: for round in 1..=rounds {
        engine.start_new_round()?;
        ui::write_separator(out)?;
        writeln!(out, "Round {}", round)?;
        for id in engine.active_player_ids().to_vec() {
            engine.place_bet(&id, table.bet)?;
        }
        write_table(&engine, out)?;

        while let Some(player) = engine.current_player().map(str::to_owned) {
            let Some(hand) = engine.player_hand(&player) else {
                break;
            };
            let action = if player == HUMAN_SEAT {
                match prompt_human(&format_hand(hand), stdin, out, err)? {
                    Decision::Act(action) => action,
                    Decision::Quit => {
                        writeln!(out, "Round abandoned.")?;
                        engine.reset_to_waiting_state();
                        break 'session;
                    }
                }
            } else {
                bot.decide(hand, engine.dealer_hand().cards().first())
            };

            engine.player_action(&player, action)?;
            if let Some(hand) = engine.player_hand(&player) {
                writeln!(out, "{} {}: {}", player, format_action(action), format_hand(hand))?;
            }
        }

        writeln!(out, "Dealer: {}", format_hand(engine.dealer_hand()))?;
        write_outcomes(&engine, out)?;
        if let Some(outcome) = engine.player_outcome(HUMAN_SEAT) {
            net += outcome.net_result(engine.player_bet(HUMAN_SEAT));
        }
        played += 1;
    }

    writeln!(out, "Rounds played: {}", played)?;
    writeln!(out, "Net: {}", format_net(net))?;
    Ok(())
}

/// Prompts until a valid action, a quit, or end of input.
fn prompt_human(
    hand: &str,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Decision, CliError> {
    loop {
        write!(out, "Your hand: {}. Hit or stand? (hit/stand/q): ", hand)?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(Decision::Quit);
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => return Ok(Decision::Act(action)),
            ParseResult::Quit => return Ok(Decision::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}
