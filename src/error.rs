//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when dealing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The configured allotment exceeds the cards remaining in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when rendering a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The hand index is outside the dealt hands.
    #[error("hand index out of range")]
    HandOutOfRange,
}
