//! Card types and deck size.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Card rank, ordered by value with aces high.
///
/// Each rank carries its numeric value as the discriminant, so no lookup
/// is needed at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// 10
    Ten = 10,
    /// Jack
    Jack = 11,
    /// Queen
    Queen = 12,
    /// King
    King = 13,
    /// Ace
    Ace = 14,
}

impl Rank {
    /// Returns the numeric value of the rank (2 through 14, aces high).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Self> {
        use Rank::{
            Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two,
        };
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        };
        write!(f, "{c}")
    }
}

/// Card suit.
///
/// Suits carry no ordering; they matter only for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns all four suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Self> {
        [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades].into_iter()
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'h' => Ok(Self::Hearts),
            'c' => Ok(Self::Clubs),
            'd' => Ok(Self::Diamonds),
            's' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Hearts => 'h',
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Spades => 's',
        };
        write!(f, "{c}")
    }
}

/// A playing card.
///
/// Cards are immutable values. They have no `Ord` implementation of
/// their own: hand evaluation orders cards with [`Card::cmp_value`],
/// which compares by rank value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the numeric value of the card's rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Compares two cards by rank value alone, ignoring suit.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> core::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from its two-character form, rank then suit.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Rank, Suit};
    ///
    /// let card: Card = "Ah".parse().unwrap();
    /// assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Malformed);
        };

        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
