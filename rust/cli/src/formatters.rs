//! Card, hand and outcome formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal is known to support
//! them and fall back to letters elsewhere:
//!
//! - **Unicode mode**: ♥ ♦ ♣ ♠
//! - **ASCII mode**: h d c s
//!
//! Face-down cards always render as `??`.
//!
//! ## Example
//!
//! ```rust
//! use holecard_engine::cards::{PlayingCard, Rank, Suit};
//! use holecard_cli::formatters::format_card;
//!
//! let ace = PlayingCard::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! ```

use holecard_engine::cards::{PlayingCard, Rank, Suit};
use holecard_engine::game::GameState;
use holecard_engine::hand::Hand;
use holecard_engine::player::{GameOutcome, PlayerAction};

/// On Windows only modern terminals (Windows Terminal, VS Code, anything
/// setting TERM_PROGRAM) are trusted with Unicode; elsewhere it is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    rank.label()
}

/// `A♠`, `10h`, or `??` for a card dealt face down.
pub fn format_card(card: &PlayingCard) -> String {
    if card.is_face_up {
        format!("{}{}", format_rank(card.rank), format_suit(card.suit))
    } else {
        "??".to_string()
    }
}

/// Cards separated by spaces, followed by the total once every card is
/// visible.
///
/// ```rust
/// use holecard_engine::cards::{PlayingCard, Rank, Suit};
/// use holecard_engine::hand::Hand;
/// use holecard_cli::formatters::format_hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(PlayingCard::new(Rank::King, Suit::Hearts));
/// hand.add_card(PlayingCard::new(Rank::Seven, Suit::Clubs));
/// assert!(format_hand(&hand).ends_with("(17)"));
///
/// hand.cards_mut()[1].is_face_up = false;
/// assert!(format_hand(&hand).ends_with("??"));
/// ```
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    let cards = cards.join(" ");
    if hand.cards().iter().all(|c| c.is_face_up) && !hand.is_empty() {
        let soft = if hand.is_soft() { "soft " } else { "" };
        format!("{} ({}{})", cards, soft, hand.score())
    } else {
        cards
    }
}

pub fn format_action(action: PlayerAction) -> &'static str {
    match action {
        PlayerAction::Hit => "hits",
        PlayerAction::Stand => "stands",
    }
}

pub fn format_outcome(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::PlayerBust => "bust",
        GameOutcome::DealerBust => "wins (dealer bust)",
        GameOutcome::PlayerBlackjack => "blackjack!",
        GameOutcome::DealerBlackjack => "loses to dealer blackjack",
        GameOutcome::PlayerWin => "wins",
        GameOutcome::DealerWin => "loses",
        GameOutcome::Push => "push",
    }
}

pub fn format_state(state: &GameState) -> String {
    state.to_string()
}

/// Signed chip amount, e.g. `+15` or `-10`.
pub fn format_net(net: i64) -> String {
    if net > 0 {
        format!("+{net}")
    } else {
        net.to_string()
    }
}
