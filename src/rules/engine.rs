//! Turn engine: the transition functions of the game state machine.
//!
//! ```text
//! waiting -> playing <-> choosing_suit
//!            playing  -> game_over
//! ```
//!
//! Every transition takes a snapshot and returns either a new snapshot or a
//! `Rejected` reason. The input snapshot is never modified, so a rejection
//! leaves the game exactly as it was.

use tracing::{debug, info};

use super::error::Rejected;
use super::legality::{is_playable, playable_cards};
use crate::cards::{create_deck, deal, shuffle_deck, Card, CardId, Suit};
use crate::core::{Actor, GameRng, GameState, GameStatus, Move};
use crate::opponent::majority_suit;

/// Shuffle a fresh deck and deal the opening snapshot.
pub fn initialize(rng: &mut GameRng) -> Result<GameState, Rejected> {
    let deck = shuffle_deck(&create_deck(), rng);
    let state = GameState::from_deal(deal(deck)?);

    info!(seed = ?rng.seed(), top = ?state.top_card(), "new game dealt");
    Ok(state)
}

/// Play `card_id` from `actor`'s hand onto the discard pile.
///
/// Emptying the hand ends the game with `actor` as winner. An eight played by
/// the human waits for `choose_suit`; an eight played by the opponent names
/// the opponent's majority suit and hands the turn over. Any other card
/// clears the wild suit and hands the turn over.
pub fn play_card(state: &GameState, card_id: CardId, actor: Actor) -> Result<GameState, Rejected> {
    ensure_turn(state, actor)?;

    let (index, card) = state
        .find_in_hand(actor, card_id)
        .ok_or(Rejected::CardNotInHand)?;
    let top = state.top_card().ok_or(Rejected::InvalidState)?;
    if !is_playable(&card, top, state.wild_suit) {
        return Err(Rejected::IllegalPlay);
    }

    let mut next = state.clone();
    next.hands[actor].remove(index);
    next.discard_pile.push_back(card);

    if next.hands[actor].is_empty() {
        next.status = GameStatus::GameOver;
        next.winner = Some(actor);
        next.record(actor, Move::Play(card_id));
        info!(winner = %actor, last = %card, "game over");
        return Ok(next);
    }

    if card.is_eight() {
        match actor {
            Actor::Player => {
                next.status = GameStatus::ChoosingSuit;
            }
            Actor::Ai => {
                let suit = majority_suit(&next.hands[Actor::Ai]);
                next.wild_suit = Some(suit);
                next.current_turn = Actor::Player;
                debug!(%suit, "opponent named wild suit");
            }
        }
    } else {
        next.wild_suit = None;
        next.current_turn = actor.other();
    }

    next.record(actor, Move::Play(card_id));
    debug!(%actor, %card, status = ?next.status, turn = %next.current_turn, "card played");
    Ok(next)
}

/// Move the top of the draw pile into `actor`'s hand.
///
/// The opponent always hands the turn to the human. The human keeps the turn
/// only when the drawn card can be played right away.
pub fn draw_card(state: &GameState, actor: Actor) -> Result<GameState, Rejected> {
    ensure_turn(state, actor)?;

    let mut next = state.clone();
    let card = next.deck.pop_back().ok_or(Rejected::EmptyDrawPile)?;
    next.hands[actor].push_back(card);

    next.current_turn = match actor {
        Actor::Ai => Actor::Player,
        Actor::Player => {
            let keeps_turn = next
                .top_card()
                .is_some_and(|top| is_playable(&card, top, next.wild_suit));
            if keeps_turn {
                Actor::Player
            } else {
                Actor::Ai
            }
        }
    };

    next.record(actor, Move::Draw);
    debug!(%actor, remaining = next.deck.len(), turn = %next.current_turn, "card drawn");
    Ok(next)
}

/// Name the wild suit after the human played an eight.
pub fn choose_suit(state: &GameState, suit: Suit) -> Result<GameState, Rejected> {
    if state.status != GameStatus::ChoosingSuit {
        return Err(Rejected::InvalidState);
    }

    let mut next = state.clone();
    next.wild_suit = Some(suit);
    next.status = GameStatus::Playing;
    next.current_turn = Actor::Ai;

    next.record(Actor::Player, Move::ChooseSuit(suit));
    debug!(%suit, "player named wild suit");
    Ok(next)
}

/// Hand the turn over when `actor` can neither play nor draw.
///
/// No card moves. If neither side can ever play again the game cycles
/// through passes indefinitely; there is no drawn-game outcome.
pub fn pass_turn(state: &GameState, actor: Actor) -> Result<GameState, Rejected> {
    ensure_turn(state, actor)?;

    if !state.deck.is_empty() || has_playable_card(state, actor) {
        return Err(Rejected::PassNotAllowed);
    }

    let mut next = state.clone();
    next.current_turn = actor.other();

    next.record(actor, Move::Pass);
    debug!(%actor, "turn passed with no move available");
    Ok(next)
}

/// Dispatch a `Move` to its transition.
pub fn apply_move(state: &GameState, actor: Actor, action: Move) -> Result<GameState, Rejected> {
    match action {
        Move::Play(card_id) => play_card(state, card_id, actor),
        Move::Draw => draw_card(state, actor),
        Move::ChooseSuit(suit) => {
            if !actor.is_human() {
                return Err(Rejected::NotYourTurn);
            }
            choose_suit(state, suit)
        }
        Move::Pass => pass_turn(state, actor),
    }
}

// === Derived queries ===

/// The card that defines what is currently playable.
#[must_use]
pub fn top_card(state: &GameState) -> Option<&Card> {
    state.top_card()
}

/// Whether `actor` holds at least one card that can be played now.
#[must_use]
pub fn has_playable_card(state: &GameState, actor: Actor) -> bool {
    state
        .top_card()
        .is_some_and(|top| !playable_cards(&state.hands[actor], top, state.wild_suit).is_empty())
}

/// Whether the human holds a card that can be played on the current table.
#[must_use]
pub fn is_human_move_available(state: &GameState) -> bool {
    has_playable_card(state, Actor::Player)
}

/// Whether the boundary should tell the human to draw: it is their turn,
/// nothing in hand is playable, and the draw pile has cards.
#[must_use]
pub fn should_prompt_draw(state: &GameState) -> bool {
    state.status == GameStatus::Playing
        && state.current_turn == Actor::Player
        && !state.deck.is_empty()
        && !is_human_move_available(state)
}

fn ensure_turn(state: &GameState, actor: Actor) -> Result<(), Rejected> {
    if state.status != GameStatus::Playing {
        return Err(Rejected::InvalidState);
    }
    if state.current_turn != actor {
        return Err(Rejected::NotYourTurn);
    }
    Ok(())
}
