use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Phase of the current round.
///
/// Nothing is terminal: `RoundOver` returns to `Betting` or
/// `WaitingForPlayers` through an explicit host command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// No round in progress; seats may be filled
    #[default]
    WaitingForPlayers,
    /// Players are placing bets and readying up
    Betting,
    /// Initial two cards are being dealt
    Dealing,
    /// The given player must hit or stand
    PlayerTurn(PlayerId),
    /// Dealer reveals the hole card and draws to 17
    DealerTurn,
    /// Outcomes are settled for every seat
    RoundOver,
}

impl GameState {
    pub fn is_player_turn(&self, player_id: &str) -> bool {
        matches!(self, GameState::PlayerTurn(id) if id == player_id)
    }

    /// The player currently holding the turn, if any.
    pub fn turn_holder(&self) -> Option<&str> {
        match self {
            GameState::PlayerTurn(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::WaitingForPlayers => write!(f, "waiting for players"),
            GameState::Betting => write!(f, "betting"),
            GameState::Dealing => write!(f, "dealing"),
            GameState::PlayerTurn(id) => write!(f, "player {id}'s turn"),
            GameState::DealerTurn => write!(f, "dealer's turn"),
            GameState::RoundOver => write!(f, "round over"),
        }
    }
}
