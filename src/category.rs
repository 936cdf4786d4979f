//! Hand classification labels.

use core::fmt;

/// The classification of a five-card poker hand.
///
/// Categories are ordered by strength: [`HandCategory::HighCard`] is the
/// weakest and [`HandCategory::RoyalFlush`] the strongest.
///
/// # Example
///
/// ```
/// use pkrs::HandCategory;
///
/// assert!(HandCategory::FullHouse > HandCategory::Flush);
/// assert_eq!(HandCategory::TwoPair.to_string(), "Two pair");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No matching cards, no run, no shared suit.
    HighCard,
    /// Exactly one pair of matching values.
    Pair,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of one value.
    ThreeOfAKind,
    /// Five consecutive values in any suit mix.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one value and a pair of another.
    FullHouse,
    /// Four cards of one value.
    FourOfAKind,
    /// Five consecutive values in one suit.
    StraightFlush,
    /// Ten through ace in one suit.
    RoyalFlush,
}

impl HandCategory {
    /// Returns the display label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two pair",
            Self::ThreeOfAKind => "Three of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full house",
            Self::FourOfAKind => "Four of a kind",
            Self::StraightFlush => "Straight flush",
            Self::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
