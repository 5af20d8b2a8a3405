//! Deck integration tests.

use bridgedeck::{
    Card, DECK_SIZE, DealError, Deck, DeckOptions, DrawError, Hand, KittyPolicy, RenderError, Suit,
};

const fn card(id: u8) -> Card {
    Card::from_id(id)
}

fn sorted_ids(cards: &[Card]) -> Vec<u8> {
    let mut ids: Vec<u8> = cards.iter().map(|c| c.id()).collect();
    ids.sort_unstable();
    ids
}

fn all_ids() -> Vec<u8> {
    (0..DECK_SIZE as u8).collect()
}

#[test]
fn fresh_deck_is_ordered_and_complete() {
    let deck = Deck::new(DeckOptions::default(), 1);
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
    let ids: Vec<u8> = deck.cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids, all_ids());
}

#[test]
fn shuffle_preserves_full_card_set() {
    let mut deck = Deck::new(DeckOptions::default(), 42);
    deck.shuffle();
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
    assert_eq!(sorted_ids(deck.cards()), all_ids());
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = Deck::new(DeckOptions::default(), 42);
    let mut b = Deck::new(DeckOptions::default(), 42);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());

    // A 52-card shuffle leaving the deck ordered would need an astronomically
    // unlucky seed.
    let ids: Vec<u8> = a.cards().iter().map(|c| c.id()).collect();
    assert_ne!(ids, all_ids());
}

#[test]
fn deal_one_yields_every_card_in_pop_order_then_errors() {
    let mut deck = Deck::new(DeckOptions::default(), 7);
    deck.shuffle();
    let mut expected: Vec<Card> = deck.cards().to_vec();
    expected.reverse();

    let mut drawn = Vec::new();
    for _ in 0..DECK_SIZE {
        drawn.push(deck.deal_one().unwrap());
    }

    assert_eq!(drawn, expected);
    assert_eq!(sorted_ids(&drawn), all_ids());
    assert_eq!(deck.deal_one().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn deal_partitions_into_disjoint_sorted_hands() {
    let deck = Deck::dealt(DeckOptions::default(), 9).unwrap();
    assert_eq!(deck.hands().len(), 4);

    let mut union = Vec::new();
    for hand in deck.hands() {
        assert_eq!(hand.len(), 13);
        let ids: Vec<u8> = hand.cards().iter().map(|c| c.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        union.extend(ids);
    }

    // Pairwise disjoint and complete: the union is all 52 ids exactly once.
    union.sort_unstable();
    assert_eq!(union, all_ids());
    assert!(deck.kitty().is_empty());
    assert_eq!(deck.cards_remaining(), 0);
}

#[test]
fn deal_consumes_front_to_back_in_hand_order() {
    let options = DeckOptions::default().with_hands(2).with_cards_per_hand(3);
    let mut deck = Deck::new(options, 0);
    // Unshuffled: hand 0 takes ids 0..3, hand 1 takes ids 3..6.
    deck.deal().unwrap();
    assert_eq!(sorted_ids(deck.hands()[0].cards()), vec![0, 1, 2]);
    assert_eq!(sorted_ids(deck.hands()[1].cards()), vec![3, 4, 5]);
}

#[test]
fn deal_rejects_oversized_allotment() {
    let options = DeckOptions::default().with_hands(5);
    let mut deck = Deck::new(options, 3);
    deck.shuffle();
    assert_eq!(deck.deal().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn expose_policy_drains_remainder_into_kitty() {
    let options = DeckOptions::default()
        .with_hands(2)
        .with_cards_per_hand(5)
        .with_kitty(KittyPolicy::Expose);
    let deck = Deck::dealt(options, 11).unwrap();

    assert_eq!(deck.kitty().len(), 42);
    assert_eq!(deck.cards_remaining(), 0);

    let mut union = Vec::new();
    for hand in deck.hands() {
        union.extend(hand.cards().iter().map(|c| c.id()));
    }
    union.extend(deck.kitty().iter().map(|c| c.id()));
    union.sort_unstable();
    assert_eq!(union, all_ids());
}

#[test]
fn ignore_policy_leaves_remainder_in_deck() {
    let options = DeckOptions::default()
        .with_hands(2)
        .with_cards_per_hand(5)
        .with_kitty(KittyPolicy::Ignore);
    let mut deck = Deck::dealt(options, 11).unwrap();

    assert!(deck.kitty().is_empty());
    assert_eq!(deck.cards_remaining(), 42);

    let mut union = Vec::new();
    for hand in deck.hands() {
        union.extend(hand.cards().iter().map(|c| c.id()));
    }
    union.extend(deck.cards().iter().map(|c| c.id()));
    union.sort_unstable();
    assert_eq!(union, all_ids());

    // The remainder is still drawable.
    assert!(deck.deal_one().is_ok());
}

#[test]
fn reset_restores_the_ordered_deck() {
    let mut deck = Deck::dealt(DeckOptions::default(), 5).unwrap();
    assert_eq!(deck.cards_remaining(), 0);

    deck.reset();
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
    let ids: Vec<u8> = deck.cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids, all_ids());
    assert!(deck.hands().is_empty());
    assert!(deck.kitty().is_empty());

    // A redeal after reset works.
    deck.shuffle();
    deck.deal().unwrap();
    assert_eq!(deck.hands().len(), 4);
}

#[test]
fn render_is_idempotent_on_an_unmutated_hand() {
    let deck = Deck::dealt(DeckOptions::default(), 13).unwrap();
    let first = deck.render_hand(0).unwrap();
    let second = deck.render_hand(0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 4);
}

#[test]
fn render_rejects_out_of_range_index() {
    let deck = Deck::dealt(DeckOptions::default(), 13).unwrap();
    assert_eq!(deck.render_hand(4).unwrap_err(), RenderError::HandOutOfRange);
    assert_eq!(
        deck.render_hand_html(4).unwrap_err(),
        RenderError::HandOutOfRange
    );
    assert!(deck.hand(4).is_none());
}

#[test]
fn render_groups_one_ace_per_suit_line() {
    let hand = Hand::new(vec![card(0), card(13), card(26), card(39)]);
    let block = hand.render();
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(
        lines,
        vec![
            "\u{2660} spades: A",
            "\u{2665} hearts: A",
            "\u{2666} diamonds: A",
            "\u{2663} clubs: A",
        ]
    );
}

#[test]
fn display_order_puts_aces_before_descending_ranks() {
    // Spade ids 0, 5, 12: Ace, rank 5, King.
    let hand = Hand::new(vec![card(0), card(5), card(12)]);

    let buckets = hand.by_suit();
    let spades: Vec<u8> = buckets[0].iter().map(|c| c.id()).collect();
    assert_eq!(spades, vec![0, 12, 5]);

    let block = hand.render();
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "\u{2660} spades: A K 6");
    // Empty suits still emit their lines.
    assert_eq!(lines[1], "\u{2665} hearts:");
    assert_eq!(lines[2], "\u{2666} diamonds:");
    assert_eq!(lines[3], "\u{2663} clubs:");
}

#[test]
fn html_render_matches_host_markup() {
    let hand = Hand::new(vec![card(0)]);
    assert_eq!(
        hand.render_html(),
        concat!(
            "<div class=\"card-table\">",
            "<div><span class=\"spades\">\u{2660}</span>",
            "<span class=\"playing-card\">A</span><span>&nbsp;</span></div>",
            "<div><span class=\"hearts\">\u{2665}</span></div>",
            "<div><span class=\"diamonds\">\u{2666}</span></div>",
            "<div><span class=\"clubs\">\u{2663}</span></div>",
            "</div>",
        )
    );
}

#[test]
fn card_identifier_maps_to_rank_and_suit() {
    assert_eq!(card(0).suit(), Suit::Spades);
    assert!(card(0).is_ace());
    assert_eq!(card(0).label(), "A");
    assert_eq!(card(9).label(), "10");
    assert_eq!(card(10).label(), "J");
    assert_eq!(card(14).suit(), Suit::Hearts);
    assert_eq!(card(14).rank(), 1);
    assert_eq!(card(14).label(), "2");
    assert_eq!(card(51).suit(), Suit::Clubs);
    assert_eq!(card(51).label(), "K");
    assert_eq!(Card::new(Suit::Diamonds, 12), card(38));
}

#[test]
fn glyphs_skip_the_unicode_knight() {
    assert_eq!(card(0).glyph(), '\u{1F0A1}');
    assert_eq!(card(10).glyph(), '\u{1F0AB}');
    assert_eq!(Card::new(Suit::Spades, 11).glyph(), '\u{1F0AD}');
    assert_eq!(Card::new(Suit::Spades, 12).glyph(), '\u{1F0AE}');
    assert_eq!(card(51).glyph(), '\u{1F0DE}');
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_hands(3)
        .with_cards_per_hand(7)
        .with_kitty(KittyPolicy::Ignore);

    assert_eq!(options.hands, 3);
    assert_eq!(options.cards_per_hand, 7);
    assert_eq!(options.kitty, KittyPolicy::Ignore);

    let deck = Deck::new(options, 0);
    assert_eq!(*deck.options(), options);
}
