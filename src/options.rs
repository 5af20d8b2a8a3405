//! Deal configuration options.

/// What to do with cards left over after the hands are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum KittyPolicy {
    /// Drain the remainder into an exposed kitty.
    #[default]
    Expose,
    /// Leave the remainder in the deck, undealt.
    Ignore,
}

/// Configuration options for a deal.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bridgedeck::{DeckOptions, KittyPolicy};
///
/// let options = DeckOptions::default()
///     .with_hands(2)
///     .with_cards_per_hand(5)
///     .with_kitty(KittyPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of hands to deal.
    pub hands: u8,
    /// Number of cards in each hand.
    pub cards_per_hand: u8,
    /// Policy for cards beyond the allotted count.
    pub kitty: KittyPolicy,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            hands: 4,
            cards_per_hand: 13,
            kitty: KittyPolicy::Expose,
        }
    }
}

impl DeckOptions {
    /// Sets the number of hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgedeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_hands(2);
    /// assert_eq!(options.hands, 2);
    /// ```
    #[must_use]
    pub const fn with_hands(mut self, hands: u8) -> Self {
        self.hands = hands;
        self
    }

    /// Sets the number of cards in each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgedeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_cards_per_hand(5);
    /// assert_eq!(options.cards_per_hand, 5);
    /// ```
    #[must_use]
    pub const fn with_cards_per_hand(mut self, cards: u8) -> Self {
        self.cards_per_hand = cards;
        self
    }

    /// Sets the kitty policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgedeck::{DeckOptions, KittyPolicy};
    ///
    /// let options = DeckOptions::default().with_kitty(KittyPolicy::Ignore);
    /// assert_eq!(options.kitty, KittyPolicy::Ignore);
    /// ```
    #[must_use]
    pub const fn with_kitty(mut self, kitty: KittyPolicy) -> Self {
        self.kitty = kitty;
        self
    }
}
