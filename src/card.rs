//! Card types and blackjack card values.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::naming::ImageNaming;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum Suit {
    /// Hearts.
    Hearts = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Clubs.
    Clubs = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the numeric code of the suit (0..=3).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(code)).copied().ok_or_else(|| {
            log::debug!("rejected suit code {code}");
            CardError::InvalidSuit(code)
        })
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.code()
    }
}

/// Card rank, Ace through King.
///
/// The discriminant equals the face value for number cards, with Ace = 1
/// and Jack, Queen, King = 11, 12, 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric code of the rank (1..=13).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Returns the blackjack score of the rank.
    ///
    /// Aces always count as 11 here. Counting an ace as 1 to avoid a bust is
    /// up to whoever totals the hand.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns whether the rank is a ten-card (Ten, Jack, Queen or King).
    #[must_use]
    pub const fn is_ten_card(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        code.checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or_else(|| {
                log::debug!("rejected rank code {code}");
                CardError::InvalidRank(code)
            })
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.code()
    }
}

/// A playing card.
///
/// Suit and rank are fixed at construction. Only the image reference and the
/// visibility flag can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// The suit of the card.
    suit: Suit,
    /// The rank of the card.
    rank: Rank,
    /// Identifier of the card's image asset.
    image_name: String,
    /// Whether the card is face up.
    #[cfg_attr(feature = "serde", serde(default = "face_up"))]
    visible: bool,
}

#[cfg(feature = "serde")]
const fn face_up() -> bool {
    true
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcard::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spades, Rank::King, "king_spades.png");
    /// assert_eq!(card.score(), 10);
    /// assert!(card.is_visible());
    /// ```
    #[must_use]
    pub fn new(suit: Suit, rank: Rank, image_name: impl Into<String>) -> Self {
        Self {
            suit,
            rank,
            image_name: image_name.into(),
            visible: true,
        }
    }

    /// Creates a new face-up card named by the default [`ImageNaming`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcard::{Card, Rank, Suit};
    ///
    /// let card = Card::with_default_image(Suit::Clubs, Rank::Seven);
    /// assert_eq!(card.image_name(), "seven_clubs.png");
    /// ```
    #[must_use]
    pub fn with_default_image(suit: Suit, rank: Rank) -> Self {
        Self::with_image_naming(suit, rank, &ImageNaming::default())
    }

    /// Creates a new face-up card named by the given [`ImageNaming`].
    #[must_use]
    pub fn with_image_naming(suit: Suit, rank: Rank, naming: &ImageNaming) -> Self {
        Self::new(suit, rank, naming.image_name(suit, rank))
    }

    /// Creates a new face-up card from raw suit and rank codes.
    ///
    /// Suit codes are 0..=3 (Hearts, Diamonds, Clubs, Spades) and rank codes
    /// are 1..=13 (Ace through King).
    ///
    /// # Errors
    ///
    /// Returns an error if either code is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcard::{Card, CardError, Rank, Suit};
    ///
    /// let card = Card::from_codes(3, 13, "king_spades.png").unwrap();
    /// assert_eq!(card.suit(), Suit::Spades);
    /// assert_eq!(card.rank(), Rank::King);
    ///
    /// assert_eq!(
    ///     Card::from_codes(0, 14, "bad.png").unwrap_err(),
    ///     CardError::InvalidRank(14)
    /// );
    /// ```
    pub fn from_codes(
        suit: u8,
        rank: u8,
        image_name: impl Into<String>,
    ) -> Result<Self, CardError> {
        let suit = Suit::try_from(suit)?;
        let rank = Rank::try_from(rank)?;
        Ok(Self::new(suit, rank, image_name))
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the image identifier of the card.
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Replaces the image identifier of the card.
    pub fn set_image_name(&mut self, image_name: impl Into<String>) {
        self.image_name = image_name.into();
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets whether the card is face up.
    pub fn set_visible(&mut self, visible: bool) {
        log::trace!(
            "{} of {} visibility {} -> {}",
            self.rank.name(),
            self.suit.name(),
            self.visible,
            visible
        );
        self.visible = visible;
    }

    /// Turns the card face down (e.g. the dealer's hole card).
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Turns the card face up.
    pub fn reveal(&mut self) {
        self.set_visible(true);
    }

    /// Returns the blackjack score of the card, with aces counted as 11.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.rank.score()
    }

    /// Returns whether the card is a ten-card (Ten, Jack, Queen or King).
    #[must_use]
    pub const fn is_ten_card(&self) -> bool {
        self.rank.is_ten_card()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
