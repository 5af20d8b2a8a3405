//! A bridge deck dealing and hand display engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns the 52-card deck and manages
//! shuffling, single-card draws, hand partitioning, and suit-grouped display.
//!
//! # Example
//!
//! ```
//! use bridgedeck::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! deck.shuffle().deal()?;
//! let block = deck.render_hand(0)?;
//! println!("{block}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
pub use deck::Deck;
pub use error::{DealError, DrawError, RenderError};
pub use hand::Hand;
pub use options::{DeckOptions, KittyPolicy};
