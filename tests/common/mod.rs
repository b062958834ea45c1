//! Shared helpers for integration tests.

#![allow(dead_code)]

use crazy_eights::cards::create_deck;
use crazy_eights::{Actor, Card, Rank, Suit, TableLayout};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

/// Lay out a table with the given hands and top card. The remaining cards
/// form the draw pile in canonical order, or sit under the top card when
/// `empty_deck` is set.
pub fn layout(
    player: &[Card],
    ai: &[Card],
    top: Card,
    turn: Actor,
    wild_suit: Option<Suit>,
    empty_deck: bool,
) -> TableLayout {
    let placed: Vec<Card> = player.iter().chain(ai).copied().chain([top]).collect();
    let rest: Vec<Card> = create_deck()
        .into_iter()
        .filter(|c| !placed.contains(c))
        .collect();

    let (deck, mut discard_pile) = if empty_deck {
        (Vec::new(), rest)
    } else {
        (rest, Vec::new())
    };
    discard_pile.push(top);

    TableLayout {
        deck,
        player_hand: player.to_vec(),
        ai_hand: ai.to_vec(),
        discard_pile,
        current_turn: turn,
        wild_suit,
    }
}
