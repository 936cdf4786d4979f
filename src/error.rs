//! Error types for card and hand construction.

use thiserror::Error;

/// Errors that can occur when converting raw values into card parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside the recognized domain.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit outside the recognized domain.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when parsing a card from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not a two-character rank-then-suit string.
    #[error("expected a two-character card, rank then suit")]
    Malformed,
    /// The rank or suit character is not recognized.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must contain exactly five cards.
    #[error("a hand must contain exactly five cards")]
    InvalidSize,
}
