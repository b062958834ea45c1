//! Move representation.
//!
//! A `Move` is the intent an actor submits to the turn engine. Accepted moves
//! are appended to the snapshot's history as `MoveRecord`s, which the
//! presentation boundary can use to animate what just happened.

use serde::{Deserialize, Serialize};

use super::player::Actor;
use crate::cards::{CardId, Suit};

/// A single intent submitted to the turn engine.
///
/// ```
/// use crazy_eights::cards::{CardId, Rank, Suit};
/// use crazy_eights::core::Move;
///
/// let play = Move::Play(CardId::of(Suit::Clubs, Rank::Seven));
/// assert!(play.card().is_some());
/// assert!(Move::Draw.card().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Move {
    /// Play a card from hand onto the discard pile.
    Play(CardId),
    /// Take the top card of the draw pile.
    Draw,
    /// Name the wild suit after playing an eight.
    ChooseSuit(Suit),
    /// Give up the turn when nothing can be played or drawn.
    Pass,
}

impl Move {
    /// The card this move refers to, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Move::Play(id) => Some(*id),
            _ => None,
        }
    }
}

/// An accepted move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The actor who made the move.
    pub actor: Actor,

    /// The move made.
    pub action: Move,

    /// Move number of the snapshot the move produced (starts at 1).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(actor: Actor, action: Move, sequence: u32) -> Self {
        Self {
            actor,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_move_card() {
        let id = CardId::of(Suit::Spades, Rank::Eight);
        assert_eq!(Move::Play(id).card(), Some(id));
        assert_eq!(Move::ChooseSuit(Suit::Hearts).card(), None);
        assert_eq!(Move::Pass.card(), None);
    }

    #[test]
    fn test_move_serialization() {
        let json = serde_json::to_string(&Move::ChooseSuit(Suit::Clubs)).unwrap();
        assert_eq!(json, r#"{"kind":"choose_suit","value":"clubs"}"#);

        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Move::ChooseSuit(Suit::Clubs));
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(Actor::Ai, Move::Draw, 3);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
