//! Two-player Crazy Eights against a computer opponent.
//!
//! - Each side is dealt 8 cards; one non-eight starts the discard pile
//! - Play a card matching the top card's suit or rank, or any eight
//! - An eight names a wild suit that holds until the next non-eight
//! - Draw when nothing fits; first to empty their hand wins

mod game;

pub use game::CrazyEights;
