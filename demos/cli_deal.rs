//! CLI dealing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bridgedeck::{Card, Deck, DeckOptions, Suit};

fn main() {
    println!("Bridge deal CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DeckOptions::default();

    loop {
        let deck = match Deck::dealt(options, seed) {
            Ok(deck) => deck,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        print_table(&deck);

        match prompt_line("Deal again? (y/n/draw): ").as_str() {
            "y" | "yes" => {
                seed = seed.wrapping_add(1);
            }
            "draw" => {
                draw_loop(options, seed.wrapping_add(1));
                break;
            }
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn draw_loop(options: DeckOptions, seed: u64) {
    let mut deck = Deck::new(options, seed);
    deck.shuffle();

    loop {
        let input = prompt_line("Press enter to draw a card ('q' to quit): ");
        if input == "q" || input == "quit" {
            return;
        }

        match deck.deal_one() {
            Ok(card) => println!(
                "{} {} ({} remaining)",
                card.glyph(),
                format_card(&card),
                deck.cards_remaining()
            ),
            Err(err) => {
                println!("Draw error: {err}");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(deck: &Deck) {
    for (index, hand) in deck.hands().iter().enumerate() {
        println!("\nHand {index} ({} cards)", hand.len());
        for (suit, bucket) in Suit::ALL.into_iter().zip(hand.by_suit()) {
            let labels = bucket
                .iter()
                .map(|card| card.label())
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {} {}: {}", colorize_suit(suit), suit.name(), labels);
        }
    }

    if !deck.kitty().is_empty() {
        let kitty = deck
            .kitty()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        println!("\nKitty: {kitty}");
    }
    println!();
}

fn colorize_suit(suit: Suit) -> String {
    let code = match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&suit.symbol().to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    format!("{}{}", card.label(), colorize_suit(card.suit()))
}
