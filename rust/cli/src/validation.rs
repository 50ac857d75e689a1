//! Input parsing and validation for interactive commands and flags.

use holecard_engine::player::PlayerAction;

use crate::config::MAX_DECKS;

/// Outcome of parsing one line typed at the hit/stand prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses `hit`/`h`, `stand`/`s` and `q`/`quit`, case-insensitively.
///
/// ```rust
/// # use holecard_cli::validation::{parse_player_action, ParseResult};
/// use holecard_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("H"), ParseResult::Action(PlayerAction::Hit));
/// assert_eq!(parse_player_action("stand"), ParseResult::Action(PlayerAction::Stand));
/// assert_eq!(parse_player_action("quit"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("double"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let Some(word) = input.split_whitespace().next() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match word {
        "q" | "quit" => ParseResult::Quit,
        "hit" | "h" => ParseResult::Action(PlayerAction::Hit),
        "stand" | "s" => ParseResult::Action(PlayerAction::Stand),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, q",
            other
        )),
    }
}

pub fn validate_decks(decks: usize) -> Result<usize, String> {
    if (1..=MAX_DECKS).contains(&decks) {
        Ok(decks)
    } else {
        Err(format!("decks must be between 1 and {MAX_DECKS}"))
    }
}

pub fn validate_bet(bet: u32) -> Result<u32, String> {
    if bet > 0 {
        Ok(bet)
    } else {
        Err("bet must be > 0".to_string())
    }
}

/// Rounds and seat counts must be at least one.
pub fn validate_count(name: &str, value: u64) -> Result<u64, String> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(format!("{name} must be >= 1"))
    }
}
