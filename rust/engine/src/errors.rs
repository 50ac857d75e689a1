use thiserror::Error;

use crate::game::GameState;
use crate::player::PlayerId;

/// Why the engine ignored a command. State is never modified when one of
/// these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot {command} while {state}")]
    WrongPhase {
        command: &'static str,
        state: GameState,
    },
    #[error("Player {0} is not at the table")]
    UnknownPlayer(PlayerId),
    #[error("Invalid bet amount: {amount}, bets must be positive")]
    InvalidBetAmount { amount: u32 },
    #[error("Player {0} must place a bet before readying up")]
    BetRequired(PlayerId),
    #[error("It's not player {player}'s turn ({current})")]
    NotPlayersTurn { player: PlayerId, current: GameState },
    #[error("Cannot start a round without players")]
    NoPlayers,
}
