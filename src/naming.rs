//! Image naming options.

use alloc::format;
use alloc::string::String;

use crate::card::{Rank, Suit};

/// Which part of the card comes first in an image name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameOrder {
    /// `<rank><sep><suit>`, e.g. `ace_hearts`.
    #[default]
    RankFirst,
    /// `<suit><sep><rank>`, e.g. `hearts_ace`.
    SuitFirst,
}

/// Configuration for deriving image names from a suit and rank.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcard::{ImageNaming, NameOrder, Rank, Suit};
///
/// let naming = ImageNaming::default()
///     .with_separator('-')
///     .with_extension("svg")
///     .with_order(NameOrder::SuitFirst);
/// assert_eq!(naming.image_name(Suit::Diamonds, Rank::Ten), "diamonds-ten.svg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNaming {
    /// Separator placed between the rank and suit names.
    pub separator: char,
    /// File extension without the leading dot. Empty for no extension.
    pub extension: &'static str,
    /// Order of the rank and suit names.
    pub order: NameOrder,
}

impl Default for ImageNaming {
    fn default() -> Self {
        Self {
            separator: '_',
            extension: "png",
            order: NameOrder::RankFirst,
        }
    }
}

impl ImageNaming {
    /// Sets the separator.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcard::ImageNaming;
    ///
    /// let naming = ImageNaming::default().with_separator('-');
    /// assert_eq!(naming.separator, '-');
    /// ```
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the file extension.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcard::ImageNaming;
    ///
    /// let naming = ImageNaming::default().with_extension("");
    /// assert_eq!(naming.extension, "");
    /// ```
    #[must_use]
    pub const fn with_extension(mut self, extension: &'static str) -> Self {
        self.extension = extension;
        self
    }

    /// Sets the name order.
    #[must_use]
    pub const fn with_order(mut self, order: NameOrder) -> Self {
        self.order = order;
        self
    }

    /// Builds the image name for a suit and rank.
    #[must_use]
    pub fn image_name(&self, suit: Suit, rank: Rank) -> String {
        let (first, second) = match self.order {
            NameOrder::RankFirst => (rank.name(), suit.name()),
            NameOrder::SuitFirst => (suit.name(), rank.name()),
        };

        if self.extension.is_empty() {
            format!("{first}{}{second}", self.separator)
        } else {
            format!("{first}{}{second}.{}", self.separator, self.extension)
        }
    }
}
