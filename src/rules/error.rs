//! Rejection outcomes for engine transitions.

use thiserror::Error;

/// Why the engine refused a transition.
///
/// A rejection never mutates state; callers can ignore it or surface it as
/// a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejected {
    #[error("it is not this actor's turn")]
    NotYourTurn,
    #[error("the game is not in a state that accepts this move")]
    InvalidState,
    #[error("card is not in the actor's hand")]
    CardNotInHand,
    #[error("card cannot be played on the current top card")]
    IllegalPlay,
    #[error("draw pile is empty")]
    EmptyDrawPile,
    #[error("a card can still be played or drawn")]
    PassNotAllowed,
    #[error("deck does not hold 52 distinct cards or has no non-eight to start the discard pile")]
    DeckInitializationInvariantViolated,
}
