//! Deck services: construction, shuffling, and dealing.
//!
//! Decks are plain sequences. Index 0 is the front (where dealing starts)
//! and the last element is the top of the draw pile (where draws pop).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit};
use crate::core::config::{DECK_SIZE, HAND_SIZE};
use crate::core::rng::GameRng;
use crate::rules::Rejected;

/// Build the 52-card deck in canonical order: every rank of hearts, then
/// diamonds, clubs, spades.
///
/// ```
/// use crazy_eights::cards::{create_deck, Rank, Suit};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].face(), (Suit::Hearts, Rank::Two));
/// assert_eq!(deck[51].face(), (Suit::Spades, Rank::Ace));
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::standard(suit, rank)))
        .collect()
}

/// Return a uniformly random permutation of `deck`, leaving the input alone.
#[must_use]
pub fn shuffle_deck(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Check that `cards` hold each (suit, rank) pair exactly once, each under
/// its canonical `CardId`.
#[must_use]
pub fn is_standard_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0;

    for card in cards {
        let id = CardId::of(card.suit, card.rank);
        let slot = id.0 as usize;
        if card.id != id || seen[slot] {
            return false;
        }
        seen[slot] = true;
        count += 1;
    }

    count == DECK_SIZE
}

/// The table right after dealing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Remaining draw pile; the last element is drawn first.
    pub deck: Vector<Card>,
    pub player_hand: Vector<Card>,
    pub ai_hand: Vector<Card>,
    /// First card of the discard pile. Never an eight.
    pub discard: Card,
}

/// Deal a full deck.
///
/// The first `HAND_SIZE` cards go to the human, the next `HAND_SIZE` to the
/// opponent. The discard pile starts with the first non-eight among the
/// remaining cards, scanning from the front; everything else becomes the
/// draw pile in its original order.
pub fn deal(deck: Vec<Card>) -> Result<Deal, Rejected> {
    if !is_standard_deck(&deck) {
        return Err(Rejected::DeckInitializationInvariantViolated);
    }

    let mut rest: Vector<Card> = deck.into_iter().collect();
    let player_hand = rest.slice(..HAND_SIZE);
    let ai_hand = rest.slice(..HAND_SIZE);

    let first_index = rest
        .iter()
        .position(|card| !card.is_eight())
        .ok_or(Rejected::DeckInitializationInvariantViolated)?;
    let discard = rest.remove(first_index);

    Ok(Deal {
        deck: rest,
        player_hand,
        ai_hand,
        discard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_deck_canonical_order() {
        let deck = create_deck();
        assert_eq!(deck.len(), 52);
        assert!(is_standard_deck(&deck));

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, CardId(i as u32));
            assert_eq!(card.suit, Suit::ALL[i / 13]);
            assert_eq!(card.rank, Rank::ALL[i % 13]);
        }
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let deck = create_deck();
        let before = deck.clone();
        let mut rng = GameRng::new(42);

        let shuffled = shuffle_deck(&deck, &mut rng);

        assert_eq!(deck, before);
        assert_ne!(shuffled, deck);
        assert!(is_standard_deck(&shuffled));
    }

    #[test]
    fn test_shuffle_seeded_is_deterministic() {
        let deck = create_deck();
        let a = shuffle_deck(&deck, &mut GameRng::new(5));
        let b = shuffle_deck(&deck, &mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_standard_deck_rejects_duplicates() {
        let mut deck = create_deck();
        deck[1] = Card::new(CardId(99), Suit::Hearts, Rank::Two);
        assert!(!is_standard_deck(&deck));

        let short = &create_deck()[..51];
        assert!(!is_standard_deck(short));
    }

    #[test]
    fn test_deal_canonical_deck() {
        let deal = deal(create_deck()).unwrap();

        assert_eq!(deal.player_hand.len(), HAND_SIZE);
        assert_eq!(deal.ai_hand.len(), HAND_SIZE);
        assert_eq!(deal.deck.len(), 52 - 2 * HAND_SIZE - 1);

        // Hearts 2..9 to the human, hearts 10..A then diamonds 2..4 to the opponent.
        assert_eq!(deal.player_hand[0].face(), (Suit::Hearts, Rank::Two));
        assert_eq!(deal.player_hand[7].face(), (Suit::Hearts, Rank::Nine));
        assert_eq!(deal.ai_hand[0].face(), (Suit::Hearts, Rank::Ten));
        assert_eq!(deal.ai_hand[7].face(), (Suit::Diamonds, Rank::Four));

        assert_eq!(deal.discard.face(), (Suit::Diamonds, Rank::Five));
        assert_eq!(deal.deck.back().map(Card::face), Some((Suit::Spades, Rank::Ace)));
    }

    #[test]
    fn test_deal_skips_leading_eights() {
        let mut deck = create_deck();
        // Move all four eights right behind the two hands.
        let eights: Vec<Card> = deck.iter().copied().filter(Card::is_eight).collect();
        deck.retain(|c| !c.is_eight());
        for (offset, eight) in eights.into_iter().enumerate() {
            deck.insert(2 * HAND_SIZE + offset, eight);
        }
        let expected = deck[2 * HAND_SIZE + 4];

        let deal = deal(deck).unwrap();

        assert_eq!(deal.discard, expected);
        assert!(!deal.discard.is_eight());
        // The skipped eights stay at the front of the draw pile.
        assert!(deal.deck.iter().take(4).all(Card::is_eight));
    }

    #[test]
    fn test_is_standard_deck_requires_canonical_ids() {
        let mut deck = create_deck();
        deck[5].id = CardId(0);
        assert!(!is_standard_deck(&deck));

        let same_ids: Vec<Card> = create_deck()
            .into_iter()
            .map(|c| Card::new(CardId(0), c.suit, c.rank))
            .collect();
        assert!(!is_standard_deck(&same_ids));
        assert_eq!(deal(same_ids), Err(Rejected::DeckInitializationInvariantViolated));
    }

    #[test]
    fn test_deal_rejects_bad_deck() {
        let mut deck = create_deck();
        deck.pop();
        assert_eq!(deal(deck), Err(Rejected::DeckInitializationInvariantViolated));
    }
}
