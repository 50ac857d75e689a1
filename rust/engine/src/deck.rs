use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_deck, PlayingCard, Rank, Suit};
use crate::rules::RESHUFFLE_DIVISOR;

/// The pool of undealt cards: N standard decks, shuffled with a seeded
/// ChaCha20 generator. Cards leave from the front.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<PlayingCard>,
    /// Index of the next card to deal
    position: usize,
    decks: usize,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Builds a full shoe of `decks` decks and shuffles it.
    pub fn new_with_seed(decks: usize, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            position: 0,
            decks,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        shoe
    }

    /// Builds a shuffled shoe, then moves one card matching each requested
    /// rank and suit to the front, in the order given. The shoe keeps exactly
    /// `decks * 52` cards. Requests with no matching card left are ignored.
    ///
    /// ```
    /// use holecard_engine::cards::{Rank, Suit};
    /// use holecard_engine::deck::Shoe;
    ///
    /// let mut shoe = Shoe::with_top_cards(1, 7, &[(Rank::Ace, Suit::Spades), (Rank::King, Suit::Hearts)]);
    /// assert_eq!(shoe.remaining(), 52);
    /// assert_eq!(shoe.deal_card().map(|c| c.rank), Some(Rank::Ace));
    /// assert_eq!(shoe.deal_card().map(|c| c.rank), Some(Rank::King));
    /// ```
    pub fn with_top_cards(decks: usize, seed: u64, top: &[(Rank, Suit)]) -> Self {
        let mut shoe = Self::new_with_seed(decks, seed);
        let mut front = Vec::with_capacity(top.len());
        for &(rank, suit) in top {
            if let Some(pos) = shoe
                .cards
                .iter()
                .position(|c| c.rank == rank && c.suit == suit)
            {
                front.push(shoe.cards.remove(pos));
            }
        }
        front.append(&mut shoe.cards);
        shoe.cards = front;
        shoe
    }

    /// Discards whatever is left and rebuilds all decks in a fresh order.
    pub fn reshuffle(&mut self) {
        self.cards = (0..self.decks).flat_map(|_| standard_deck()).collect();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<PlayingCard> {
        let card = self.cards.get(self.position).cloned()?;
        self.position += 1;
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn decks(&self) -> usize {
        self.decks
    }

    /// Seed the shuffle generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn capacity(&self) -> usize {
        self.decks * 52
    }

    /// True once fewer than a quarter of the shoe is left.
    pub fn needs_reshuffle(&self) -> bool {
        self.remaining() < self.capacity() / RESHUFFLE_DIVISOR
    }

    /// Undealt cards, next card first.
    pub fn cards(&self) -> &[PlayingCard] {
        &self.cards[self.position..]
    }
}
