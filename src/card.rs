//! Card types and deck constants.

/// Card suit, in the deck's fixed suit-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit's symbol character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }

    /// Returns the suit's lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }
}

/// Rank labels indexed by rank (0 = Ace, 12 = King).
const RANK_LABELS: [&str; RANKS_PER_SUIT as usize] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Unicode playing-card glyphs indexed by card identifier.
///
/// The Unicode block reserves a Knight between Jack and Queen, so Queen and
/// King sit at base+0xD and base+0xE rather than following the Jack directly.
const GLYPHS: [char; DECK_SIZE] = [
    // Spades
    '\u{1F0A1}', '\u{1F0A2}', '\u{1F0A3}', '\u{1F0A4}', '\u{1F0A5}', '\u{1F0A6}', '\u{1F0A7}',
    '\u{1F0A8}', '\u{1F0A9}', '\u{1F0AA}', '\u{1F0AB}', '\u{1F0AD}', '\u{1F0AE}',
    // Hearts
    '\u{1F0B1}', '\u{1F0B2}', '\u{1F0B3}', '\u{1F0B4}', '\u{1F0B5}', '\u{1F0B6}', '\u{1F0B7}',
    '\u{1F0B8}', '\u{1F0B9}', '\u{1F0BA}', '\u{1F0BB}', '\u{1F0BD}', '\u{1F0BE}',
    // Diamonds
    '\u{1F0C1}', '\u{1F0C2}', '\u{1F0C3}', '\u{1F0C4}', '\u{1F0C5}', '\u{1F0C6}', '\u{1F0C7}',
    '\u{1F0C8}', '\u{1F0C9}', '\u{1F0CA}', '\u{1F0CB}', '\u{1F0CD}', '\u{1F0CE}',
    // Clubs
    '\u{1F0D1}', '\u{1F0D2}', '\u{1F0D3}', '\u{1F0D4}', '\u{1F0D5}', '\u{1F0D6}', '\u{1F0D7}',
    '\u{1F0D8}', '\u{1F0D9}', '\u{1F0DA}', '\u{1F0DB}', '\u{1F0DD}', '\u{1F0DE}',
];

/// A playing card, identified by a compact id in `0..52`.
///
/// Rank is `id % 13` (0 = Ace, 12 = King); suit is `id / 13` in
/// [`Suit::ALL`] order. Cards order by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// Creates a card from a suit and a rank (0 = Ace, 12 = King).
    ///
    /// Note: This function does not validate the rank. Values outside 0..=12
    /// spill into the next suit's identifier range.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self(suit as u8 * RANKS_PER_SUIT + rank)
    }

    /// Creates a card from its identifier.
    ///
    /// Note: This function does not validate the identifier. Values outside
    /// 0..52 have no glyph or label and should not be constructed.
    #[must_use]
    pub const fn from_id(id: u8) -> Self {
        Self(id)
    }

    /// Returns the card's identifier in `0..52`.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Returns the card's rank (0 = Ace, 12 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % RANKS_PER_SUIT
    }

    /// Returns the card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT) as usize]
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank() == 0
    }

    /// Returns the rank label: `A`, `2`..`10`, `J`, `Q`, or `K`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        RANK_LABELS[self.rank() as usize]
    }

    /// Returns the card's Unicode playing-card glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        GLYPHS[self.0 as usize]
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: u8 = 13;
