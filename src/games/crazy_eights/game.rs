//! Crazy Eights session.

use tracing::debug;

use crate::cards::{CardId, Suit};
use crate::core::{Actor, GameConfig, GameRng, GameState, Move, TableLayout};
use crate::opponent::{Decision, GreedyOpponent, OpponentPolicy, OpponentScheduler, OpponentTicket};
use crate::rules::{self, Rejected};

/// One table: the current snapshot plus everything needed to advance it.
///
/// The presentation boundary forwards human intents to `play_card`,
/// `draw_card`, and `choose_suit`, renders `state()` after each call, and
/// drives the opponent through `schedule_opponent` / `resolve_opponent`.
pub struct CrazyEights<P: OpponentPolicy = GreedyOpponent> {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    scheduler: OpponentScheduler,
    policy: P,
}

impl CrazyEights<GreedyOpponent> {
    /// Create a session with the default opponent. Nothing is dealt until
    /// `start`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_policy(config, GreedyOpponent)
    }
}

impl<P: OpponentPolicy> CrazyEights<P> {
    /// Create a session with a custom opponent policy.
    #[must_use]
    pub fn with_policy(config: GameConfig, policy: P) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let scheduler = OpponentScheduler::new(config.thinking_delay);

        Self {
            config,
            rng,
            state: GameState::waiting(),
            scheduler,
            policy,
        }
    }

    /// Deal a new game, discarding the current one and any pending
    /// opponent move.
    pub fn start(&mut self) -> Result<&GameState, Rejected> {
        let state = rules::initialize(&mut self.rng)?;
        self.scheduler.reset();
        self.commit(state);
        Ok(&self.state)
    }

    /// Replace the current game with an explicit table arrangement.
    pub fn restore(&mut self, layout: TableLayout) -> Result<&GameState, Rejected> {
        let state = GameState::from_layout(layout)?;
        self.scheduler.reset();
        self.commit(state);
        Ok(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // === Human intents ===

    pub fn play_card(&mut self, card_id: CardId) -> Result<&GameState, Rejected> {
        self.human(Move::Play(card_id))
    }

    pub fn draw_card(&mut self) -> Result<&GameState, Rejected> {
        self.human(Move::Draw)
    }

    pub fn choose_suit(&mut self, suit: Suit) -> Result<&GameState, Rejected> {
        self.human(Move::ChooseSuit(suit))
    }

    // === Opponent ===

    /// Ask for permission to run the opponent's move. Returns `None` when it
    /// is not the opponent's turn or a move is already pending.
    pub fn schedule_opponent(&mut self) -> Option<OpponentTicket> {
        self.scheduler.request(&self.state)
    }

    /// Apply the opponent's move for `ticket`.
    ///
    /// Stale tickets (game reset, already redeemed, or table changed) return
    /// `Ok(None)` and leave the game untouched.
    pub fn resolve_opponent(&mut self, ticket: OpponentTicket) -> Result<Option<Decision>, Rejected> {
        if !self.scheduler.redeem(ticket, &self.state) {
            return Ok(None);
        }

        let decision = self.policy.decide(&self.state);
        let next = rules::apply_move(&self.state, Actor::Ai, decision.into())?;
        debug!(
            ?decision,
            generation = ticket.generation(),
            move_number = next.move_number(),
            "opponent moved"
        );

        self.commit(next);
        Ok(Some(decision))
    }

    /// Schedule and resolve the opponent's move without waiting.
    pub fn step_opponent(&mut self) -> Result<Option<Decision>, Rejected> {
        match self.schedule_opponent() {
            Some(ticket) => self.resolve_opponent(ticket),
            None => Ok(None),
        }
    }

    fn human(&mut self, action: Move) -> Result<&GameState, Rejected> {
        match rules::apply_move(&self.state, Actor::Player, action) {
            Ok(next) => {
                self.commit(next);
                Ok(&self.state)
            }
            Err(reason) => {
                debug!(?action, %reason, "player intent rejected");
                Err(reason)
            }
        }
    }

    /// Install a new snapshot. If the human is left to move with nothing to
    /// play and nothing to draw, their turn is passed once.
    fn commit(&mut self, next: GameState) {
        self.state = next;

        if let Ok(passed) = rules::pass_turn(&self.state, Actor::Player) {
            self.state = passed;
        }
    }
}
