//! Scheduling guard for the opponent's deferred move.
//!
//! The presentation boundary waits a short "thinking" delay before the
//! opponent moves. During that window the scheduler guarantees:
//!
//! - **At most once per turn**: only one ticket is outstanding, and a ticket
//!   can be redeemed a single time.
//! - **Cancellation on reset**: starting a new game bumps the generation, so
//!   tickets issued for the previous game are refused.
//! - **No stale moves**: a ticket is tied to the move number it was issued
//!   at; if the game moved on in the meantime it is refused.

use std::time::Duration;

use tracing::debug;

use crate::core::{Actor, GameState, GameStatus};

/// Permission to apply one opponent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpponentTicket {
    generation: u64,
    move_number: u32,
    delay: Duration,
}

impl OpponentTicket {
    /// How long the boundary should wait before redeeming the ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Scheduler generation the ticket was issued in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single in-flight token for the opponent's move.
#[derive(Clone, Debug, Default)]
pub struct OpponentScheduler {
    generation: u64,
    delay: Duration,
    pending: Option<OpponentTicket>,
}

impl OpponentScheduler {
    /// Create a scheduler that stamps tickets with `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: 0,
            delay,
            pending: None,
        }
    }

    /// Issue a ticket if the opponent is due to move and none is pending.
    pub fn request(&mut self, state: &GameState) -> Option<OpponentTicket> {
        if state.status() != GameStatus::Playing || state.current_turn() != Actor::Ai {
            return None;
        }
        if self.pending.is_some() {
            debug!(generation = self.generation, "opponent move already pending");
            return None;
        }

        let ticket = OpponentTicket {
            generation: self.generation,
            move_number: state.move_number(),
            delay: self.delay,
        };
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Consume `ticket`. Returns true only if it is the pending ticket of the
    /// current generation and `state` has not moved since it was issued.
    pub fn redeem(&mut self, ticket: OpponentTicket, state: &GameState) -> bool {
        if self.pending != Some(ticket) || ticket.generation != self.generation {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "discarding stale opponent ticket"
            );
            return false;
        }

        self.pending = None;

        if ticket.move_number != state.move_number() {
            debug!(
                ticket_move = ticket.move_number,
                move_number = state.move_number(),
                "game moved on before opponent ticket fired"
            );
            return false;
        }
        true
    }

    /// Drop any pending ticket and refuse every ticket issued so far.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
