//! Five-card hands and their classification.

use crate::card::{Card, Rank};
use crate::category::HandCategory;
use crate::deck::Deck;
use crate::error::HandError;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Returns whether the sorted values form a strict consecutive run.
///
/// Aces are always high; A-2-3-4-5 does not count as a run.
fn is_straight(values: &[u8; HAND_SIZE]) -> bool {
    (1..HAND_SIZE).all(|i| values[i] - values[i - 1] == 1)
}

/// Returns whether four consecutive sorted positions hold one value.
fn has_four_of_a_kind(values: &[u8; HAND_SIZE]) -> bool {
    values.windows(4).any(|w| w.iter().all(|v| *v == w[0]))
}

/// Returns whether the sorted values split into a pair and a triple.
fn is_full_house(values: &[u8; HAND_SIZE]) -> bool {
    let pair_low = values[0] == values[1] && values[2] == values[3] && values[3] == values[4];
    let pair_high = values[0] == values[1] && values[1] == values[2] && values[3] == values[4];

    pair_low || pair_high
}

/// Returns whether three consecutive sorted positions hold one value.
fn has_three_of_a_kind(values: &[u8; HAND_SIZE]) -> bool {
    values.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Counts adjacent equal transitions in the sorted values.
///
/// A triple counts as two transitions and a quad as three, so this only
/// distinguishes two pair from one pair once the stronger categories
/// have been ruled out.
fn adjacent_pairs(values: &[u8; HAND_SIZE]) -> usize {
    values.windows(2).filter(|w| w[0] == w[1]).count()
}

/// A five-card poker hand.
///
/// A hand is a snapshot of five caller-owned cards. Classification never
/// mutates or reorders them. Duplicate cards are not rejected; drawing
/// from a single [`Deck`] guarantees uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were given.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from exactly five cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Deals a hand by drawing five cards from the deck.
    #[must_use]
    pub fn deal(deck: &mut Deck) -> Self {
        Self {
            cards: core::array::from_fn(|_| deck.draw()),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Classifies the hand into its best-matching category.
    ///
    /// The checks run from the strongest category down and the first
    /// match wins. The order is load-bearing: the pair count alone
    /// cannot tell two pair from three or four of a kind.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Hand, HandCategory, Rank, Suit};
    ///
    /// let hand = Hand::new([
    ///     Card::new(Rank::Three, Suit::Hearts),
    ///     Card::new(Rank::Three, Suit::Clubs),
    ///     Card::new(Rank::Five, Suit::Diamonds),
    ///     Card::new(Rank::Three, Suit::Spades),
    ///     Card::new(Rank::Five, Suit::Hearts),
    /// ]);
    /// assert_eq!(hand.category(), HandCategory::FullHouse);
    /// ```
    #[must_use]
    pub fn category(&self) -> HandCategory {
        let values = self.sorted_values();
        let flush = self.is_flush();
        let straight = is_straight(&values);

        if straight && flush && values[HAND_SIZE - 1] == Rank::Ace.value() {
            HandCategory::RoyalFlush
        } else if straight && flush {
            HandCategory::StraightFlush
        } else if has_four_of_a_kind(&values) {
            HandCategory::FourOfAKind
        } else if is_full_house(&values) {
            HandCategory::FullHouse
        } else if flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if has_three_of_a_kind(&values) {
            HandCategory::ThreeOfAKind
        } else {
            match adjacent_pairs(&values) {
                2 => HandCategory::TwoPair,
                1 => HandCategory::Pair,
                _ => HandCategory::HighCard,
            }
        }
    }

    /// Returns the five rank values sorted ascending.
    ///
    /// Every predicate shares this one sort.
    fn sorted_values(&self) -> [u8; HAND_SIZE] {
        let mut cards = self.cards;
        cards.sort_by(Card::cmp_value);
        cards.map(|card| card.value())
    }

    /// Returns whether all five cards share one suit.
    fn is_flush(&self) -> bool {
        self.cards.iter().all(|card| card.suit == self.cards[0].suit)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    /// Builds a hand from a slice of exactly five cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidSize`] if the slice length is not 5.
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match <[Card; HAND_SIZE]>::try_from(cards) {
            Ok(cards) => Ok(Self { cards }),
            Err(_) => Err(HandError::InvalidSize),
        }
    }
}
