use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`PlayingCard`]; suits carry no Blackjack value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants follow the face value so ranks order naturally.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (worth 10)
    Jack,
    /// Queen (worth 10)
    Queen,
    /// King (worth 10)
    King,
    /// Ace (worth 1 or 11)
    Ace,
}

impl Rank {
    /// Every Blackjack value this rank may count as.
    ///
    /// ```
    /// use holecard_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Seven.blackjack_values(), &[7]);
    /// assert_eq!(Rank::Queen.blackjack_values(), &[10]);
    /// assert_eq!(Rank::Ace.blackjack_values(), &[1, 11]);
    /// ```
    pub fn blackjack_values(self) -> &'static [u8] {
        match self {
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
            Rank::Ace => &[1, 11],
        }
    }

    /// The hard value: aces count 1.
    pub fn hard_value(self) -> u8 {
        self.blackjack_values()[0]
    }

    pub fn is_ten_valued(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single physical card in the shoe.
///
/// Every instantiation gets a fresh `id`, so the six aces of spades in a
/// six-deck shoe stay individually trackable. Equality and hashing only look
/// at rank and suit.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct PlayingCard {
    pub id: Uuid,
    pub rank: Rank,
    pub suit: Suit,
    /// Whether the card's face is visible. The engine clears it on the
    /// dealer's hole card until the card is revealed.
    pub is_face_up: bool,
}

impl PlayingCard {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: Uuid::new_v4(),
            rank,
            suit,
            is_face_up: true,
        }
    }
}

impl PartialEq for PlayingCard {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for PlayingCard {}

impl Hash for PlayingCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 rank x suit combinations, face up, in suit-major order. Not shuffled.
pub fn standard_deck() -> Vec<PlayingCard> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(PlayingCard::new(r, s));
        }
    }
    v
}
