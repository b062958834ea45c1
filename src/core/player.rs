//! Actor identification and per-actor data storage.
//!
//! ## Actor
//!
//! The two sides of the table: the human `Player` and the computer `Ai`.
//!
//! ## ActorMap
//!
//! Fixed two-slot storage indexed by `Actor`, used for hands.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// The human at the presentation boundary. Moves first.
    #[default]
    Player,
    /// The computer opponent.
    Ai,
}

impl Actor {
    /// Both actors, human first.
    pub const ALL: [Actor; 2] = [Actor::Player, Actor::Ai];

    /// The other side of the table.
    ///
    /// ```
    /// use crazy_eights::core::Actor;
    ///
    /// assert_eq!(Actor::Player.other(), Actor::Ai);
    /// assert_eq!(Actor::Ai.other(), Actor::Player);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Player => Actor::Ai,
            Actor::Ai => Actor::Player,
        }
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Actor::Player)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player => write!(f, "player"),
            Actor::Ai => write!(f, "ai"),
        }
    }
}

/// Per-actor data storage.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{Actor, ActorMap};
///
/// let mut counts: ActorMap<u32> = ActorMap::with_value(8);
/// counts[Actor::Ai] -= 1;
///
/// assert_eq!(counts[Actor::Player], 8);
/// assert_eq!(counts[Actor::Ai], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    player: T,
    ai: T,
}

impl<T> ActorMap<T> {
    /// Create from explicit per-actor values.
    pub fn new(player: T, ai: T) -> Self {
        Self { player, ai }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &T {
        match actor {
            Actor::Player => &self.player,
            Actor::Ai => &self.ai,
        }
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: Actor) -> &mut T {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Ai => &mut self.ai,
        }
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        self.get(actor)
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        self.get_mut(actor)
    }
}
