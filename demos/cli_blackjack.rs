//! CLI blackjack example.
//!
//! Run with `RUST_LOG=debug` to watch every card leave the shoe.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tablejack::{Card, CardView, Game, GameOptions, HandView, Phase, Snapshot, Suit};

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let name = prompt_line("Your name: ");
    let name = if name.is_empty() { "Player".to_string() } else { name };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default().with_player_name(name.clone()), seed);

    loop {
        let mut snapshot = match game.start_round() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        while snapshot.phase == Phase::PlayerTurn {
            print_table(&snapshot, &name);

            let result = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => game.player_hit(),
                "s" | "stand" => game.player_stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => snapshot = next,
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            }
        }

        print_table(&snapshot, &name);
        if let Some(settlement) = &snapshot.settlement {
            println!("Results: {}", settlement.message);
        }
        if let Some(stats) = snapshot.stats {
            println!(
                "{name} has played {} games. Won: {} Lost: {}",
                stats.rounds_played, stats.rounds_won, stats.rounds_lost
            );
        }

        if matches!(prompt_line("Play again? (y/n): ").as_str(), "n" | "no" | "q") {
            println!("Goodbye.");
            break;
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
    input.trim().to_string()
}

fn print_table(snapshot: &Snapshot, name: &str) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);
    print_hand("Dealer", &snapshot.dealer);
    print_hand(name, &snapshot.player);
    print_hand("Bot 1", &snapshot.bot1);
    print_hand("Bot 2", &snapshot.bot2);
    println!();
}

fn print_hand(label: &str, hand: &HandView) {
    let cards = hand
        .cards
        .iter()
        .map(|view| match view {
            CardView::FaceUp(card) => format_card(card),
            CardView::FaceDown => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{label:>8}: {cards} (value {})", hand.total);
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.id(), color_code)
}
