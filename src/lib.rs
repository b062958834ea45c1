//! # crazy-eights
//!
//! Rules engine and turn management for two-player Crazy Eights: a human
//! against a simple computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: `GameState` is an immutable snapshot.
//!    Every transition returns a new snapshot or a `Rejected` reason and
//!    never touches its input.
//!
//! 2. **One oracle**: `rules::is_playable` is the only legality check; the
//!    human's intents and the opponent's options both go through it.
//!
//! 3. **Presentation is external**: rendering, animation and input live
//!    outside this crate. The boundary forwards intents and renders the
//!    returned snapshot.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! - **Seeded Shuffles**: `GameRng` wraps ChaCha8 so tests replay deals.
//!
//! - **Turn Token**: `current_turn` is the mutual-exclusion token; the
//!   opponent's deferred move is gated by `OpponentScheduler`.
//!
//! ## Modules
//!
//! - `core`: Actors, state, moves, RNG, configuration
//! - `cards`: Card model and deck services
//! - `rules`: Legality oracle and turn engine
//! - `opponent`: Opponent policy and move scheduling
//! - `games`: The `CrazyEights` session used by the presentation boundary

pub mod core;
pub mod cards;
pub mod rules;
pub mod opponent;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorMap, GameConfig, GameRng,
    GameState, GameStatus, TableLayout,
    Move, MoveRecord,
};

pub use crate::cards::{Card, CardId, Deal, Rank, Suit};

pub use crate::rules::{
    apply_move, choose_suit, draw_card, initialize, is_human_move_available, is_playable,
    pass_turn, play_card, top_card, Rejected,
};

pub use crate::opponent::{Decision, GreedyOpponent, OpponentPolicy, OpponentScheduler, OpponentTicket};

pub use crate::games::crazy_eights::CrazyEights;
