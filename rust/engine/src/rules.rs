use crate::errors::GameError;
use crate::hand::Hand;

/// Best possible total; anything above it is a bust.
pub const BLACKJACK: u32 = 21;

/// The dealer draws while below this total and stands on every 17, soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

/// The shoe is rebuilt when fewer than `capacity / RESHUFFLE_DIVISOR` cards remain.
pub const RESHUFFLE_DIVISOR: usize = 4;

/// Shoe size used when the host does not pick one.
pub const DEFAULT_DECKS: usize = 6;

/// Returns whether the dealer must take another card.
///
/// # Examples
///
/// ```
/// use holecard_engine::cards::{PlayingCard, Rank, Suit};
/// use holecard_engine::hand::Hand;
/// use holecard_engine::rules::dealer_should_hit;
///
/// let sixteen = Hand::from_cards(vec![
///     PlayingCard::new(Rank::Ten, Suit::Clubs),
///     PlayingCard::new(Rank::Six, Suit::Hearts),
/// ]);
/// assert!(dealer_should_hit(&sixteen));
///
/// // soft 17 stands
/// let soft_seventeen = Hand::from_cards(vec![
///     PlayingCard::new(Rank::Ace, Suit::Clubs),
///     PlayingCard::new(Rank::Six, Suit::Hearts),
/// ]);
/// assert!(!dealer_should_hit(&soft_seventeen));
/// ```
pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.score() < DEALER_STANDS_ON
}

/// Validates a wager before it is recorded against a seat.
///
/// # Errors
///
/// Returns [`GameError::InvalidBetAmount`] for a zero wager.
///
/// ```
/// use holecard_engine::errors::GameError;
/// use holecard_engine::rules::validate_bet;
///
/// assert_eq!(validate_bet(25), Ok(25));
/// assert_eq!(validate_bet(0), Err(GameError::InvalidBetAmount { amount: 0 }));
/// ```
pub fn validate_bet(amount: u32) -> Result<u32, GameError> {
    if amount == 0 {
        return Err(GameError::InvalidBetAmount { amount });
    }
    Ok(amount)
}
