//! Configuration command handler.
//!
//! Prints every setting with its value and source (`default`, `file` or
//! `env`) as pretty JSON:
//!
//! ```json
//! {
//!   "decks": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "default_bet": {
            "value": config.default_bet,
            "source": sources.default_bet,
        },
        "bot_policy": {
            "value": config.bot_policy,
            "source": sources.bot_policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
