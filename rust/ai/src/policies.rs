//! Built-in hit/stand policies.

use crate::AutoPlayer;
use holecard_engine::cards::{PlayingCard, Rank};
use holecard_engine::hand::Hand;
use holecard_engine::player::PlayerAction;
use holecard_engine::rules::DEALER_STANDS_ON;

fn hit_below(hand: &Hand, limit: u32) -> PlayerAction {
    if hand.score() < limit {
        PlayerAction::Hit
    } else {
        PlayerAction::Stand
    }
}

/// Plays the house rule: hit below 17, stand otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerMimic;

impl AutoPlayer for DealerMimic {
    fn decide(&self, hand: &Hand, _dealer_up_card: Option<&PlayingCard>) -> PlayerAction {
        hit_below(hand, DEALER_STANDS_ON)
    }

    fn name(&self) -> &str {
        "DealerMimic"
    }
}

/// Hits only while no single card can bust the hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CautiousPlayer;

impl CautiousPlayer {
    const HIT_BELOW: u32 = 12;
}

impl AutoPlayer for CautiousPlayer {
    fn decide(&self, hand: &Hand, _dealer_up_card: Option<&PlayingCard>) -> PlayerAction {
        hit_below(hand, Self::HIT_BELOW)
    }

    fn name(&self) -> &str {
        "CautiousPlayer"
    }
}

/// Simplified basic strategy without doubling or splitting.
///
/// | Player total | Stand against dealer up-card |
/// |--------------|------------------------------|
/// | hard 17+     | always                       |
/// | hard 13-16   | 2-6                          |
/// | hard 12      | 4-6                          |
/// | soft 19+     | always                       |
/// | soft 18      | 2-8                          |
///
/// Everything else hits. An ace up-card counts as 11.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    fn up_card_value(card: Option<&PlayingCard>) -> u32 {
        match card {
            Some(c) if c.rank == Rank::Ace => 11,
            Some(c) => u32::from(c.rank.hard_value()),
            // no information: assume the strongest dealer card
            None => 11,
        }
    }

    fn should_stand(total: u32, soft: bool, up: u32) -> bool {
        if soft {
            match total {
                19.. => true,
                18 => (2..=8).contains(&up),
                _ => false,
            }
        } else {
            match total {
                17.. => true,
                13..=16 => (2..=6).contains(&up),
                12 => (4..=6).contains(&up),
                _ => false,
            }
        }
    }
}

impl AutoPlayer for BasicStrategy {
    fn decide(&self, hand: &Hand, dealer_up_card: Option<&PlayingCard>) -> PlayerAction {
        let up = Self::up_card_value(dealer_up_card);
        if Self::should_stand(hand.score(), hand.is_soft(), up) {
            PlayerAction::Stand
        } else {
            PlayerAction::Hit
        }
    }

    fn name(&self) -> &str {
        "BasicStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holecard_engine::cards::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(
            ranks
                .iter()
                .map(|&r| PlayingCard::new(r, Suit::Clubs))
                .collect(),
        )
    }

    fn up(rank: Rank) -> PlayingCard {
        PlayingCard::new(rank, Suit::Hearts)
    }

    #[test]
    fn test_dealer_mimic_threshold() {
        let ai = DealerMimic;
        assert_eq!(ai.decide(&hand(&[Rank::Ten, Rank::Six]), None), PlayerAction::Hit);
        assert_eq!(ai.decide(&hand(&[Rank::Ten, Rank::Seven]), None), PlayerAction::Stand);
        assert_eq!(
            ai.decide(&hand(&[Rank::Ace, Rank::Six]), Some(&up(Rank::Ten))),
            PlayerAction::Stand
        );
    }

    #[test]
    fn test_cautious_never_hits_twelve() {
        let ai = CautiousPlayer;
        assert_eq!(ai.decide(&hand(&[Rank::Five, Rank::Six]), None), PlayerAction::Hit);
        assert_eq!(ai.decide(&hand(&[Rank::Ten, Rank::Two]), None), PlayerAction::Stand);
    }

    #[test]
    fn test_basic_hard_totals() {
        let ai = BasicStrategy;
        let sixteen = hand(&[Rank::Ten, Rank::Six]);
        assert_eq!(ai.decide(&sixteen, Some(&up(Rank::Six))), PlayerAction::Stand);
        assert_eq!(ai.decide(&sixteen, Some(&up(Rank::Seven))), PlayerAction::Hit);
        assert_eq!(ai.decide(&sixteen, Some(&up(Rank::Ace))), PlayerAction::Hit);

        let twelve = hand(&[Rank::Ten, Rank::Two]);
        assert_eq!(ai.decide(&twelve, Some(&up(Rank::Three))), PlayerAction::Hit);
        assert_eq!(ai.decide(&twelve, Some(&up(Rank::Four))), PlayerAction::Stand);

        let seventeen = hand(&[Rank::Ten, Rank::Seven]);
        assert_eq!(ai.decide(&seventeen, Some(&up(Rank::Ace))), PlayerAction::Stand);
        assert_eq!(ai.decide(&hand(&[Rank::Five, Rank::Six]), Some(&up(Rank::Six))), PlayerAction::Hit);
    }

    #[test]
    fn test_basic_soft_totals() {
        let ai = BasicStrategy;
        let soft_eighteen = hand(&[Rank::Ace, Rank::Seven]);
        assert!(soft_eighteen.is_soft());
        assert_eq!(ai.decide(&soft_eighteen, Some(&up(Rank::Eight))), PlayerAction::Stand);
        assert_eq!(ai.decide(&soft_eighteen, Some(&up(Rank::Nine))), PlayerAction::Hit);
        assert_eq!(ai.decide(&hand(&[Rank::Ace, Rank::Eight]), Some(&up(Rank::Ten))), PlayerAction::Stand);
        assert_eq!(ai.decide(&hand(&[Rank::Ace, Rank::Six]), Some(&up(Rank::Four))), PlayerAction::Hit);
    }

    #[test]
    fn test_basic_without_up_card_plays_safe_against_ace() {
        let ai = BasicStrategy;
        assert_eq!(ai.decide(&hand(&[Rank::Ten, Rank::Four]), None), PlayerAction::Hit);
    }
}
