//! Deck engine: construction, shuffling, and dealing.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DealError, DrawError, RenderError};
use crate::hand::Hand;
use crate::options::{DeckOptions, KittyPolicy};

/// A deck of 52 playing cards with dealt hands.
///
/// The deck owns its cards, the dealt hands, the kitty, and a seeded random
/// source. Use [`DeckOptions`] to configure the hand count, hand size, and
/// kitty policy. Each user action constructs a fresh deck; nothing persists
/// across instances.
///
/// # Example
///
/// ```
/// use bridgedeck::{Deck, DeckOptions};
///
/// let mut deck = Deck::new(DeckOptions::default(), 42);
/// deck.shuffle().deal()?;
/// let block = deck.render_hand(0)?;
/// assert_eq!(block.lines().count(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Deck {
    /// Undealt cards. The next single-card draw comes from the back.
    cards: Vec<Card>,
    /// Hands produced by the last deal.
    hands: Vec<Hand>,
    /// Leftover cards when the kitty policy is [`KittyPolicy::Expose`].
    kitty: Vec<Card>,
    /// Deal options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a fresh, unshuffled deck with the given seed.
    ///
    /// Cards start in suit-major, rank-minor order (identifiers `0..52`).
    /// Hands and kitty are empty until [`deal`](Self::deal) is called.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self {
            cards: Self::full_deck(),
            hands: Vec::new(),
            kitty: Vec::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a deck that is already shuffled and dealt.
    ///
    /// Mirrors the one-shot construction a display host performs on each
    /// user action.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured allotment exceeds 52 cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgedeck::{Deck, DeckOptions};
    ///
    /// let deck = Deck::dealt(DeckOptions::default(), 42)?;
    /// assert_eq!(deck.hands().len(), 4);
    /// # Ok::<(), bridgedeck::DealError>(())
    /// ```
    pub fn dealt(options: DeckOptions, seed: u64) -> Result<Self, DealError> {
        let mut deck = Self::new(options, seed);
        deck.shuffle().deal()?;
        Ok(deck)
    }

    /// The full 52-card deck in identifier order.
    fn full_deck() -> Vec<Card> {
        (0..DECK_SIZE as u8).map(Card::from_id).collect()
    }

    /// Restores the full ordered deck and clears hands and kitty.
    pub fn reset(&mut self) {
        self.cards = Self::full_deck();
        self.hands.clear();
        self.kitty.clear();
    }

    /// Shuffles the undealt cards in place.
    ///
    /// Produces a uniformly random permutation (Fisher–Yates) from the
    /// deck's seeded random source. Returns `&mut Self` for chaining.
    pub fn shuffle(&mut self) -> &mut Self {
        self.cards.shuffle(&mut self.rng);
        self
    }

    /// Removes and returns the last card of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty; callers must check.
    pub fn deal_one(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Partitions the front of the deck into equal-size hands.
    ///
    /// Hand 0 takes the first `cards_per_hand` cards, hand 1 the next block,
    /// and so on, front-to-back. Each hand is sorted ascending by identifier
    /// after assignment. Introduces no randomness; shuffle first. Cards
    /// beyond the allotment go to the kitty or stay in the deck, per
    /// [`KittyPolicy`]. A previous deal's hands and kitty are replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the allotment exceeds the cards remaining.
    pub fn deal(&mut self) -> Result<(), DealError> {
        let hands = usize::from(self.options.hands);
        let per_hand = usize::from(self.options.cards_per_hand);
        let allotted = hands * per_hand;

        if allotted > self.cards.len() {
            return Err(DealError::NotEnoughCards);
        }

        self.kitty.clear();

        {
            let mut dealt = self.cards.drain(..allotted);
            self.hands = (0..hands)
                .map(|_| Hand::new(dealt.by_ref().take(per_hand).collect()))
                .collect();
        }

        if self.options.kitty == KittyPolicy::Expose {
            self.kitty = core::mem::take(&mut self.cards);
        }

        Ok(())
    }

    /// Renders the hand at `index` as a suit-grouped text block.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the dealt hands.
    pub fn render_hand(&self, index: usize) -> Result<String, RenderError> {
        self.hands
            .get(index)
            .map(Hand::render)
            .ok_or(RenderError::HandOutOfRange)
    }

    /// Renders the hand at `index` as the suit-grouped HTML block.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the dealt hands.
    pub fn render_hand_html(&self, index: usize) -> Result<String, RenderError> {
        self.hands
            .get(index)
            .map(Hand::render_html)
            .ok_or(RenderError::HandOutOfRange)
    }

    /// Returns the undealt cards, in order. The back is the next draw.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the hands produced by the last deal.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `index`, if dealt.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the kitty. Empty unless the policy is [`KittyPolicy::Expose`]
    /// and the last deal left cards over.
    #[must_use]
    pub fn kitty(&self) -> &[Card] {
        &self.kitty
    }

    /// Returns the deal options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}
