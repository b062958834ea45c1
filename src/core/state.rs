//! Game state snapshots.
//!
//! ## GameState
//!
//! The single source of truth for a game:
//! - Draw pile, both hands, discard pile
//! - Whose turn it is, lifecycle status, active wild suit, winner
//! - Move counter and in-memory move history
//!
//! Snapshots are immutable from the outside. The transition functions in
//! `rules` take a snapshot and return a new one; `im` persistent vectors make
//! that clone O(1).
//!
//! ## TableLayout
//!
//! An explicit arrangement of the table, validated into a `Playing`
//! snapshot. Used to restore a table or stage a scenario.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::config::DECK_SIZE;
use super::player::{Actor, ActorMap};
use crate::cards::{is_standard_deck, Card, CardId, Deal, Suit};
use crate::rules::Rejected;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Nothing dealt yet.
    #[default]
    Waiting,
    /// Normal play.
    Playing,
    /// The human played an eight and must name a suit.
    ChoosingSuit,
    /// A hand emptied. Terminal.
    GameOver,
}

/// Immutable game snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Draw pile (top = back).
    pub(crate) deck: Vector<Card>,

    /// Hands, in the order cards were received.
    pub(crate) hands: ActorMap<Vector<Card>>,

    /// Play history (top card = back).
    pub(crate) discard_pile: Vector<Card>,

    pub(crate) current_turn: Actor,

    pub(crate) status: GameStatus,

    /// Suit named by the last eight, until a non-eight is played.
    pub(crate) wild_suit: Option<Suit>,

    pub(crate) winner: Option<Actor>,

    /// Accepted transitions since the deal. Advances on every move, so it
    /// also identifies a turn opportunity.
    pub(crate) move_number: u32,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// The pre-deal snapshot. Every transition rejects it.
    #[must_use]
    pub fn waiting() -> Self {
        Self::default()
    }

    /// Build the opening snapshot from a deal: human to move, no wild suit.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            deck: deal.deck,
            hands: ActorMap::new(deal.player_hand, deal.ai_hand),
            discard_pile: Vector::unit(deal.discard),
            current_turn: Actor::Player,
            status: GameStatus::Playing,
            wild_suit: None,
            winner: None,
            move_number: 0,
            history: Vector::new(),
        }
    }

    /// Validate an explicit table arrangement into a `Playing` snapshot.
    ///
    /// Requires the 52 standard cards under their canonical ids across all
    /// piles, a non-empty discard pile, and a card in each hand.
    pub fn from_layout(layout: TableLayout) -> Result<Self, Rejected> {
        let all = layout
            .deck
            .iter()
            .chain(&layout.player_hand)
            .chain(&layout.ai_hand)
            .chain(&layout.discard_pile);

        if !is_standard_deck(all)
            || layout.discard_pile.is_empty()
            || layout.player_hand.is_empty()
            || layout.ai_hand.is_empty()
        {
            return Err(Rejected::DeckInitializationInvariantViolated);
        }

        Ok(Self {
            deck: layout.deck.into_iter().collect(),
            hands: ActorMap::new(
                layout.player_hand.into_iter().collect(),
                layout.ai_hand.into_iter().collect(),
            ),
            discard_pile: layout.discard_pile.into_iter().collect(),
            current_turn: layout.current_turn,
            status: GameStatus::Playing,
            wild_suit: layout.wild_suit,
            winner: None,
            move_number: 0,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self, actor: Actor) -> &Vector<Card> {
        &self.hands[actor]
    }

    #[must_use]
    pub fn player_hand(&self) -> &Vector<Card> {
        self.hand(Actor::Player)
    }

    #[must_use]
    pub fn ai_hand(&self) -> &Vector<Card> {
        self.hand(Actor::Ai)
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    /// The card that defines what is currently playable.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    #[must_use]
    pub fn current_turn(&self) -> Actor {
        self.current_turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn wild_suit(&self) -> Option<Suit> {
        self.wild_suit
    }

    #[must_use]
    pub fn winner(&self) -> Option<Actor> {
        self.winner
    }

    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Cards across draw pile, hands, and discard pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands[Actor::Player].len()
            + self.hands[Actor::Ai].len()
            + self.discard_pile.len()
    }

    /// Find a card in an actor's hand.
    #[must_use]
    pub fn find_in_hand(&self, actor: Actor, id: CardId) -> Option<(usize, Card)> {
        self.hands[actor]
            .iter()
            .enumerate()
            .find(|(_, card)| card.id == id)
            .map(|(i, card)| (i, *card))
    }

    // === Bookkeeping ===

    /// Record an accepted move and advance the move counter.
    pub(crate) fn record(&mut self, actor: Actor, action: Move) {
        self.move_number += 1;
        self.history
            .push_back(MoveRecord::new(actor, action, self.move_number));

        debug_assert_eq!(
            self.card_count(),
            DECK_SIZE,
            "card conservation violated after {action:?}"
        );
    }
}

/// An explicit arrangement of the table.
///
/// Piles are listed front to back: the last deck card is drawn first and the
/// last discard is the top card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub deck: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_turn: Actor,
    pub wild_suit: Option<Suit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{create_deck, deal, Rank};

    #[test]
    fn test_waiting_state() {
        let state = GameState::waiting();
        assert_eq!(state.status(), GameStatus::Waiting);
        assert_eq!(state.card_count(), 0);
        assert!(state.top_card().is_none());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_from_deal() {
        let state = GameState::from_deal(deal(create_deck()).unwrap());

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current_turn(), Actor::Player);
        assert_eq!(state.wild_suit(), None);
        assert_eq!(state.card_count(), DECK_SIZE);
        assert_eq!(state.discard_pile().len(), 1);
        assert_eq!(state.move_number(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_find_in_hand() {
        let state = GameState::from_deal(deal(create_deck()).unwrap());
        let id = CardId::of(Suit::Hearts, Rank::Four);

        assert_eq!(
            state.find_in_hand(Actor::Player, id),
            Some((2, Card::standard(Suit::Hearts, Rank::Four)))
        );
        assert_eq!(state.find_in_hand(Actor::Ai, id), None);
    }

    #[test]
    fn test_from_layout_validates_cards() {
        let mut cards = create_deck();
        let discard = cards.pop().unwrap();
        let player_hand = cards.split_off(cards.len() - 3);
        let ai_hand = cards.split_off(cards.len() - 3);

        let layout = TableLayout {
            deck: cards,
            player_hand,
            ai_hand,
            discard_pile: vec![discard],
            current_turn: Actor::Ai,
            wild_suit: Some(Suit::Clubs),
        };

        let state = GameState::from_layout(layout.clone()).unwrap();
        assert_eq!(state.current_turn(), Actor::Ai);
        assert_eq!(state.wild_suit(), Some(Suit::Clubs));
        assert_eq!(state.top_card(), Some(&discard));
        assert_eq!(state.card_count(), DECK_SIZE);

        let mut missing = layout.clone();
        missing.deck.pop();
        assert_eq!(
            GameState::from_layout(missing),
            Err(Rejected::DeckInitializationInvariantViolated)
        );

        let mut no_discard = layout;
        let moved = no_discard.discard_pile.pop().unwrap();
        no_discard.deck.push(moved);
        assert_eq!(
            GameState::from_layout(no_discard),
            Err(Rejected::DeckInitializationInvariantViolated)
        );
    }

    #[test]
    fn test_from_layout_rejects_shared_ids() {
        let mut cards: Vec<Card> = create_deck()
            .into_iter()
            .map(|c| Card::new(CardId(0), c.suit, c.rank))
            .collect();
        let discard = cards.pop().unwrap();
        let player_hand = cards.split_off(cards.len() - 3);
        let ai_hand = cards.split_off(cards.len() - 3);

        let layout = TableLayout {
            deck: cards,
            player_hand,
            ai_hand,
            discard_pile: vec![discard],
            current_turn: Actor::Player,
            wild_suit: None,
        };

        assert_eq!(
            GameState::from_layout(layout),
            Err(Rejected::DeckInitializationInvariantViolated)
        );
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = GameState::from_deal(deal(create_deck()).unwrap());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["status"], "playing");
        assert_eq!(json["current_turn"], "player");
        assert!(json["wild_suit"].is_null());
        assert_eq!(json["hands"]["ai"].as_array().unwrap().len(), 8);
        assert_eq!(json["discard_pile"][0]["rank"], "five");
    }
}
