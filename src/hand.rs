//! Dealt hand representation and suit-grouped display.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Suit};

/// Display ordering within a suit: Aces first, then descending rank.
fn display_order(a: Card, b: Card) -> Ordering {
    match (a.is_ace(), b.is_ace()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.rank().cmp(&a.rank()),
    }
}

/// One player's dealt hand.
///
/// Cards are kept sorted in ascending identifier order and do not change
/// until the deck is redealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, ascending by identifier.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards, sorting them ascending.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in the hand, ascending by identifier.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Groups the hand's cards into the four suit buckets, in deck order.
    ///
    /// Within each bucket, cards are sorted for display: the Ace first, then
    /// the remaining ranks descending.
    #[must_use]
    pub fn by_suit(&self) -> [Vec<Card>; 4] {
        let mut buckets: [Vec<Card>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

        for card in &self.cards {
            buckets[card.suit() as usize].push(*card);
        }

        for bucket in &mut buckets {
            bucket.sort_unstable_by(|a, b| display_order(*a, *b));
        }

        buckets
    }

    /// Renders the hand as a suit-grouped text block.
    ///
    /// One line per suit: the suit symbol and name, then the rank labels in
    /// display order. A suit with no cards still emits its line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (suit, bucket) in Suit::ALL.into_iter().zip(self.by_suit()) {
            out.push(suit.symbol());
            out.push(' ');
            out.push_str(suit.name());
            out.push(':');
            for card in &bucket {
                out.push(' ');
                out.push_str(card.label());
            }
            out.push('\n');
        }

        out
    }

    /// Renders the hand as the suit-grouped HTML block the host displays.
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut out = String::from("<div class=\"card-table\">");

        for (suit, bucket) in Suit::ALL.into_iter().zip(self.by_suit()) {
            out.push_str("<div><span class=\"");
            out.push_str(suit.name());
            out.push_str("\">");
            out.push(suit.symbol());
            out.push_str("</span>");
            for card in &bucket {
                out.push_str("<span class=\"playing-card\">");
                out.push_str(card.label());
                out.push_str("</span><span>&nbsp;</span>");
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
        out
    }
}
