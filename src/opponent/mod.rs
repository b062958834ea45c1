//! The computer opponent: move selection and move scheduling.
//!
//! - `OpponentPolicy` / `GreedyOpponent`: what the opponent plays
//! - `majority_suit`: which suit it names after an eight
//! - `OpponentScheduler`: when its move may be applied

pub mod policy;
pub mod scheduler;

pub use policy::{majority_suit, Decision, GreedyOpponent, OpponentPolicy};
pub use scheduler::{OpponentScheduler, OpponentTicket};
