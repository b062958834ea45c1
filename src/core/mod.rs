//! Core engine types: actors, state, moves, RNG, configuration.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Actor, ActorMap};
pub use rng::GameRng;
pub use config::{GameConfig, DECK_SIZE, HAND_SIZE};
pub use action::{Move, MoveRecord};
pub use state::{GameState, GameStatus, TableLayout};
