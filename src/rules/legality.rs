//! Legality oracle.
//!
//! One predicate decides whether a card may go on the discard pile. The turn
//! engine uses it to validate intents and the opponent uses it to enumerate
//! options, so both sides always agree on what is legal.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};

/// Playable cards from a hand. Hands rarely exceed a dozen cards.
pub type Playable = SmallVec<[Card; 8]>;

/// Whether `candidate` may be played on `top` given the active wild suit.
///
/// - An eight is always playable.
/// - With a wild suit active, only that suit is playable.
/// - Otherwise the candidate must match the top card's suit or rank.
///
/// ```
/// use crazy_eights::cards::{Card, Rank, Suit};
/// use crazy_eights::rules::is_playable;
///
/// let top = Card::standard(Suit::Hearts, Rank::Seven);
/// assert!(is_playable(&Card::standard(Suit::Spades, Rank::Seven), &top, None));
/// assert!(!is_playable(&Card::standard(Suit::Hearts, Rank::Two), &top, Some(Suit::Spades)));
/// ```
#[must_use]
pub fn is_playable(candidate: &Card, top: &Card, wild_suit: Option<Suit>) -> bool {
    if candidate.is_eight() {
        return true;
    }

    match wild_suit {
        Some(suit) => candidate.suit == suit,
        None => candidate.suit == top.suit || candidate.rank == top.rank,
    }
}

/// Cards in `hand` that may be played, in hand order.
#[must_use]
pub fn playable_cards<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    top: &Card,
    wild_suit: Option<Suit>,
) -> Playable {
    hand.into_iter()
        .filter(|card| is_playable(card, top, wild_suit))
        .copied()
        .collect()
}
