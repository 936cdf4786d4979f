//! A poker hand classification engine with optional `no_std` support.
//!
//! The crate models a standard 52-card deck and classifies five-card
//! hands into one of ten categories, from [`HandCategory::HighCard`] up
//! to [`HandCategory::RoyalFlush`].
//!
//! # Example
//!
//! ```
//! use pkrs::{Card, Hand, HandCategory, Rank, Suit};
//!
//! let hand = Hand::new([
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ]);
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use category::HandCategory;
pub use deck::Deck;
pub use error::{CardError, HandError, ParseCardError};
pub use hand::{HAND_SIZE, Hand};
