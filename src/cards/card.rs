//! Card value types: suits, ranks, and card instances.
//!
//! A `Card` is an immutable value. Its `CardId` exists so the presentation
//! layer can track a specific card across snapshots; game rules only ever
//! look at suit and rank.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
///
/// Declaration order is the enumeration order used for canonical deck order
/// and for breaking ties when the opponent names a wild suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the thirteen ranks, two low and ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in enumeration order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in `Rank::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short face label ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identifier for a card instance.
///
/// Ids follow canonical deck position: `suit_index * 13 + rank_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Id of the standard-deck card with this suit and rank.
    ///
    /// ```
    /// use crazy_eights::cards::{CardId, Rank, Suit};
    ///
    /// assert_eq!(CardId::of(Suit::Hearts, Rank::Two), CardId(0));
    /// assert_eq!(CardId::of(Suit::Spades, Rank::Ace), CardId(51));
    /// ```
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        Self((suit.index() * Rank::ALL.len() + rank.index()) as u32)
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card with an explicit id.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    /// The standard-deck card with its canonical id.
    #[must_use]
    pub const fn standard(suit: Suit, rank: Rank) -> Self {
        Self::new(CardId::of(suit, rank), suit, rank)
    }

    /// Eights are wild.
    #[must_use]
    pub fn is_eight(&self) -> bool {
        self.rank == Rank::Eight
    }

    /// Suit and rank, ignoring the id.
    #[must_use]
    pub fn face(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_order() {
        assert_eq!(Suit::ALL[0], Suit::Hearts);
        assert_eq!(Suit::ALL[3], Suit::Spades);
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn test_rank_index() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
        assert_eq!(Rank::Eight.label(), "8");
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::standard(Suit::Hearts, Rank::Seven).to_string(), "7♥");
        assert_eq!(Card::standard(Suit::Spades, Rank::Ten).to_string(), "10♠");
        assert_eq!(Card::standard(Suit::Clubs, Rank::Queen).to_string(), "Q♣");
    }

    #[test]
    fn test_card_ids_unique() {
        let mut ids: Vec<_> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| CardId::of(s, r)))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 52);
        assert_eq!(ids.last(), Some(&CardId(51)));
    }

    #[test]
    fn test_same_face_different_instances() {
        let a = Card::new(CardId(100), Suit::Clubs, Rank::Two);
        let b = Card::new(CardId(101), Suit::Clubs, Rank::Two);
        assert_ne!(a, b);
        assert_eq!(a.face(), b.face());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::standard(Suit::Diamonds, Rank::King);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":24,"suit":"diamonds","rank":"king"}"#);
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
