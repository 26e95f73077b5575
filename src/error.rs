//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit code outside the four known suits.
    #[error("invalid suit code {0}, expected 0..=3")]
    InvalidSuit(u8),
    /// Rank code outside Ace (1) through King (13).
    #[error("invalid rank code {0}, expected 1..=13")]
    InvalidRank(u8),
}
