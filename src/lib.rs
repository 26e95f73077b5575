//! Playing card model for blackjack with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type carrying a [`Suit`], a [`Rank`],
//! an image reference and a visibility flag, plus the blackjack-derived
//! [`Card::score`] and [`Card::is_ten_card`] queries.
//!
//! # Example
//!
//! ```
//! use bjcard::{Card, Rank, Suit};
//!
//! let mut card = Card::new(Suit::Hearts, Rank::Ace, "ace_hearts.png");
//! assert_eq!(card.score(), 11);
//! assert!(!card.is_ten_card());
//!
//! card.hide();
//! assert!(!card.is_visible());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod naming;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::CardError;
pub use naming::{ImageNaming, NameOrder};
