//! Game rules: the legality oracle and the turn engine.
//!
//! - `is_playable` decides whether a card may be played
//! - The transition functions (`play_card`, `draw_card`, `choose_suit`,
//!   `pass_turn`) turn one snapshot into the next or reject the move
//!
//! Opponent and human moves go through the same functions.

pub mod engine;
pub mod error;
pub mod legality;

pub use engine::{
    apply_move, choose_suit, draw_card, has_playable_card, initialize, is_human_move_available,
    pass_turn, play_card, should_prompt_draw, top_card,
};
pub use error::Rejected;
pub use legality::{is_playable, playable_cards, Playable};
