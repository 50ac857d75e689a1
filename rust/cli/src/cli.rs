//! Command-line surface of the `holecard` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holecard",
    version,
    about = "Blackjack rounds at the terminal: play, simulate, deal"
)]
pub struct HolecardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against the dealer, optionally with bot seats
    Play {
        /// Bot seats joining the table after you
        #[arg(long, default_value_t = 0)]
        bots: usize,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        decks: Option<usize>,
        /// Bet placed for every seat each round
        #[arg(long)]
        bet: Option<u32>,
    },
    /// Run bot-only rounds and summarize the results
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long, default_value_t = 1)]
        seats: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        decks: Option<usize>,
        #[arg(long)]
        bet: Option<u32>,
        /// Bot policy (dealer, cautious, basic)
        #[arg(long)]
        policy: Option<String>,
        /// Write one JSON record per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal a single round and show the opening table
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        decks: Option<usize>,
        #[arg(long, default_value_t = 1)]
        players: usize,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Cfg => "cfg",
        }
    }
}
