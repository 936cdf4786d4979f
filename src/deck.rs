//! A standard 52-card deck with seeded shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shuffled deck of 52 unique cards.
///
/// The deck is shuffled with a seeded RNG so deals are reproducible.
/// Drawing the last card resets the deck to a fresh shuffled 52, so
/// [`Deck::draw`] always succeeds.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new shuffled deck from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::shuffled_cards(&mut rng);

        Self { cards, rng }
    }

    /// Builds and shuffles a full set of 52 cards.
    fn shuffled_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Draws the top card.
    ///
    /// When the last card leaves the deck, the deck resets itself before
    /// returning, so drawing never fails.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                if self.cards.is_empty() {
                    self.reset();
                }
                return card;
            }

            // A reset refills the deck, so the next pop succeeds.
            self.reset();
        }
    }

    /// Discards the remaining cards and reshuffles a fresh 52.
    pub fn reset(&mut self) {
        self.cards = Self::shuffled_cards(&mut self.rng);
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
