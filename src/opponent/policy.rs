//! Opponent move selection.
//!
//! Policies are trait-based so a session can swap in a different opponent:
//! - `OpponentPolicy`: picks a `Decision` for the opponent's turn
//! - `GreedyOpponent`: sheds non-eights first and keeps eights for last

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};
use crate::core::{Actor, GameState, GameStatus, Move};
use crate::rules::playable_cards;

/// What the opponent does with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Play(CardId),
    Draw,
    /// Nothing playable and nothing to draw.
    Pass,
}

impl From<Decision> for Move {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Play(id) => Move::Play(id),
            Decision::Draw => Move::Draw,
            Decision::Pass => Move::Pass,
        }
    }
}

/// Policy for choosing the opponent's move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a move for the opponent.
    ///
    /// Only called when status is `Playing` and it is the opponent's turn.
    fn decide(&self, state: &GameState) -> Decision;
}

/// Default opponent.
///
/// 1. Play the first playable non-eight in hand order.
/// 2. Otherwise play the first playable eight.
/// 3. Otherwise draw, or pass if the draw pile is empty.
#[derive(Clone, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn decide(&self, state: &GameState) -> Decision {
        debug_assert!(
            state.status() == GameStatus::Playing && state.current_turn() == Actor::Ai,
            "opponent asked to move out of turn"
        );

        let playable = match state.top_card() {
            Some(top) => playable_cards(state.ai_hand(), top, state.wild_suit()),
            None => Default::default(),
        };

        let choice = playable
            .iter()
            .find(|card| !card.is_eight())
            .or_else(|| playable.first());

        match choice {
            Some(card) => Decision::Play(card.id),
            None if !state.deck().is_empty() => Decision::Draw,
            None => Decision::Pass,
        }
    }
}

/// The suit the hand holds most of. Ties go to the suit listed first in
/// `Suit::ALL`; an empty hand yields hearts.
///
/// ```
/// use crazy_eights::cards::{Card, Rank, Suit};
/// use crazy_eights::opponent::majority_suit;
///
/// let hand = [
///     Card::standard(Suit::Spades, Rank::Two),
///     Card::standard(Suit::Clubs, Rank::Three),
/// ];
/// assert_eq!(majority_suit(&hand), Suit::Clubs);
/// ```
#[must_use]
pub fn majority_suit<'a>(hand: impl IntoIterator<Item = &'a Card>) -> Suit {
    let mut counts = [0usize; 4];
    for card in hand {
        counts[card.suit.index()] += 1;
    }

    let mut best = Suit::ALL[0];
    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}
