//! # holecard-ai: Automated Blackjack Players
//!
//! Seat-filling players for the round engine. A policy only sees what a
//! player at the table sees: its own hand and the dealer's up-card.
//!
//! ## Core Components
//!
//! - [`AutoPlayer`] - Trait defining the interface for hit/stand decisions
//! - [`policies`] - The built-in policies
//! - [`create_ai`] - Factory function for creating players by policy name
//!
//! ## Quick Start
//!
//! ```rust
//! use holecard_ai::create_ai;
//! use holecard_engine::engine::RoundEngine;
//!
//! let bot = create_ai("basic").expect("known policy");
//!
//! let mut engine = RoundEngine::new(6, Some(42));
//! engine.add_player("bot");
//! engine.start_new_round().unwrap();
//! engine.place_bet("bot", 10).unwrap();
//!
//! while let Some(player) = engine.current_player().map(str::to_owned) {
//!     let hand = engine.player_hand(&player).expect("seated");
//!     let action = bot.decide(hand, engine.dealer_hand().cards().first());
//!     engine.player_action(&player, action).unwrap();
//! }
//! ```
//!
//! ## Policies
//!
//! - `"dealer"` - Plays like the house: hit below 17 (default)
//! - `"cautious"` - Never risks a bust: hit below 12
//! - `"basic"` - Simplified basic strategy against the dealer's up-card

use holecard_engine::cards::PlayingCard;
use holecard_engine::hand::Hand;
use holecard_engine::player::PlayerAction;
use thiserror::Error;

pub mod policies;

/// Policy used when none is configured.
pub const DEFAULT_POLICY: &str = "dealer";

/// Interface for automated players.
///
/// # Example Implementation
///
/// ```rust
/// use holecard_ai::AutoPlayer;
/// use holecard_engine::cards::PlayingCard;
/// use holecard_engine::hand::Hand;
/// use holecard_engine::player::PlayerAction;
///
/// struct AlwaysStand;
///
/// impl AutoPlayer for AlwaysStand {
///     fn decide(&self, _hand: &Hand, _dealer_up_card: Option<&PlayingCard>) -> PlayerAction {
///         PlayerAction::Stand
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStand"
///     }
/// }
/// ```
pub trait AutoPlayer: Send + Sync {
    /// Chooses hit or stand for `hand`. `dealer_up_card` is `None` only if
    /// the dealer has no cards yet.
    fn decide(&self, hand: &Hand, dealer_up_card: Option<&PlayingCard>) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("Unknown policy: {0} (expected one of: dealer, cautious, basic)")]
    UnknownPolicy(String),
}

/// Names accepted by [`create_ai`].
pub fn available_policies() -> &'static [&'static str] {
    &["dealer", "cautious", "basic"]
}

/// Creates a player for the named policy.
///
/// ```rust
/// use holecard_ai::create_ai;
///
/// let ai = create_ai("cautious").unwrap();
/// assert_eq!(ai.name(), "CautiousPlayer");
/// assert!(create_ai("martingale").is_err());
/// ```
pub fn create_ai(policy: &str) -> Result<Box<dyn AutoPlayer>, AiError> {
    match policy {
        "dealer" => Ok(Box::new(policies::DealerMimic)),
        "cautious" => Ok(Box::new(policies::CautiousPlayer)),
        "basic" => Ok(Box::new(policies::BasicStrategy)),
        other => Err(AiError::UnknownPolicy(other.to_string())),
    }
}
