//! CLI hand dealer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pkrs::{Deck, Hand};

fn main() {
    println!("Poker hand dealer (press Enter to deal, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);

    loop {
        if prompt_line("> ").eq_ignore_ascii_case("q") {
            println!("Goodbye.");
            break;
        }

        let hand = Hand::deal(&mut deck);
        for card in hand.cards() {
            println!("  {card}");
        }
        println!("=> {}", hand.category());
        println!("{} cards left in the deck", deck.remaining());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}
