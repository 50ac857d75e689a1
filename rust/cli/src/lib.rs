//! # Holecard CLI Library
//!
//! Terminal host for the Blackjack round engine: interactive play, bot
//! simulations, single deals and configuration inspection.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand. Output
//! streams (and stdin, via [`run_with_input`]) are injected so every command
//! can be driven from tests.
//!
//! ```
//! use std::io;
//! let args = vec!["holecard", "deal", "--seed", "42"];
//! let code = holecard_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the dealer with optional bot seats
//! - `sim`: Run bot-only rounds, optionally writing JSONL round records
//! - `deal`: Deal a single round for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HolecardCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application, reading interactive input from
/// the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with interactive input taken from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holecard_cli::run_with_input(
///     ["holecard", "play", "--seed", "7"],
///     &mut Cursor::new("stand\n"),
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HolecardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let name = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Play {
            bots,
            rounds,
            seed,
            decks,
            bet,
        } => handle_play_command(bots, rounds, seed, decks, bet, out, err, input),
        Commands::Sim {
            rounds,
            seats,
            seed,
            decks,
            bet,
            policy,
            output,
        } => handle_sim_command(rounds, seats, seed, decks, bet, policy, output, out),
        Commands::Deal {
            seed,
            decks,
            players,
        } => handle_deal_command(seed, decks, players, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(command = name, error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            e.exit_code()
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut usage = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Holecard Blackjack CLI")?;
        writeln!(err, "Usage: holecard <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: holecard --help")
    };
    let _ = usage();
    exit_code::ERROR
}
