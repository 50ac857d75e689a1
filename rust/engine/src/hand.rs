use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{PlayingCard, Rank};
use crate::rules::BLACKJACK;

/// Cards held by one seat or by the dealer, in deal order.
///
/// Order matters to consumers that lay cards out on the table and to
/// blackjack detection (only the first two cards can form one). Score and the
/// predicates are derived on every call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<PlayingCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<PlayingCard>) -> Self {
        Self { cards }
    }

    /// Best Blackjack total: every ace starts at 11 and is dropped to 1, one
    /// at a time, while the total is over 21.
    ///
    /// ```
    /// use holecard_engine::cards::{PlayingCard, Rank, Suit};
    /// use holecard_engine::hand::Hand;
    ///
    /// let hand = Hand::from_cards(vec![
    ///     PlayingCard::new(Rank::Ace, Suit::Hearts),
    ///     PlayingCard::new(Rank::Ace, Suit::Clubs),
    ///     PlayingCard::new(Rank::Nine, Suit::Spades),
    /// ]);
    /// assert_eq!(hand.score(), 21);
    /// ```
    pub fn score(&self) -> u32 {
        self.evaluate().0
    }

    /// At least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.evaluate().1 > 0
    }

    pub fn is_busted(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// A natural: 21 on exactly two cards. A later 21 reached by hitting is
    /// not a blackjack.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    pub fn add_card(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }

    pub fn reset(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[PlayingCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [PlayingCard] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn reveal_all(&mut self) {
        for c in &mut self.cards {
            c.is_face_up = true;
        }
    }

    // (total, aces still at 11)
    fn evaluate(&self) -> (u32, u32) {
        let mut total = 0u32;
        let mut soft_aces = 0u32;
        for card in &self.cards {
            if card.rank == Rank::Ace {
                soft_aces += 1;
                total += 11;
            } else {
                total += u32::from(card.rank.hard_value());
            }
        }
        while total > BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        (total, soft_aces)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: Vec<String> = self
            .cards
            .iter()
            .map(|c| {
                if c.is_face_up {
                    c.to_string()
                } else {
                    "??".to_string()
                }
            })
            .collect();
        // a hidden card would leak through the total
        if self.cards.iter().all(|c| c.is_face_up) {
            write!(f, "{} ({})", shown.join(", "), self.score())
        } else {
            write!(f, "{}", shown.join(", "))
        }
    }
}
