use serde::{Deserialize, Serialize};

/// Opaque, stable seat identifier supplied by the host.
pub type PlayerId = String;

/// Represents a decision on the player's own turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one more card
    Hit,
    /// Keep the current hand and pass the turn
    Stand,
}

/// How a seat's round ended, from the player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Player went over 21 (loss)
    PlayerBust,
    /// Dealer went over 21 (win)
    DealerBust,
    /// Player's first two cards made 21 (win, pays 3:2)
    PlayerBlackjack,
    /// Dealer's first two cards made 21 (loss)
    DealerBlackjack,
    /// Player outscored the dealer (win)
    PlayerWin,
    /// Dealer outscored the player (loss)
    DealerWin,
    /// Tie; the bet is returned
    Push,
}

impl GameOutcome {
    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            GameOutcome::DealerBust | GameOutcome::PlayerBlackjack | GameOutcome::PlayerWin
        )
    }

    pub fn is_player_loss(self) -> bool {
        matches!(
            self,
            GameOutcome::PlayerBust | GameOutcome::DealerBlackjack | GameOutcome::DealerWin
        )
    }

    /// Chips won (positive) or lost (negative) on `bet`. Blackjack pays 3:2,
    /// rounded down; other wins pay even money.
    ///
    /// ```
    /// use holecard_engine::player::GameOutcome;
    ///
    /// assert_eq!(GameOutcome::PlayerBlackjack.net_result(10), 15);
    /// assert_eq!(GameOutcome::PlayerBlackjack.net_result(5), 7);
    /// assert_eq!(GameOutcome::DealerBust.net_result(10), 10);
    /// assert_eq!(GameOutcome::Push.net_result(10), 0);
    /// assert_eq!(GameOutcome::PlayerBust.net_result(10), -10);
    /// ```
    pub fn net_result(self, bet: u32) -> i64 {
        let bet = i64::from(bet);
        match self {
            GameOutcome::PlayerBlackjack => bet * 3 / 2,
            GameOutcome::DealerBust | GameOutcome::PlayerWin => bet,
            GameOutcome::Push => 0,
            GameOutcome::PlayerBust | GameOutcome::DealerBlackjack | GameOutcome::DealerWin => {
                -bet
            }
        }
    }
}
