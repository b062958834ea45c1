//! Card model and deck services.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the four suits and thirteen ranks, in enumeration order
//! - `CardId`: per-instance identifier, meaningful only to the presentation layer
//! - `Card`: immutable suit/rank value
//! - `Deal`: the table right after dealing

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{create_deck, deal, is_standard_deck, shuffle_deck, Deal};
