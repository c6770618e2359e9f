//! Cards: suits, ranks, and the card value type.
//!
//! A card's identity is its `(Suit, Rank)` pair; exactly one card exists for
//! each of the 52 combinations. The face-up flag is *state*, not identity:
//! two `Card` values with the same suit and rank refer to the same physical
//! card even if one is face-down.
//!
//! Cards are plain `Copy` values. Flipping produces a new value via
//! [`Card::turned_up`] / [`Card::turned_down`] rather than mutating shared
//! state, so snapshots holding older versions of a card never see it change.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Hearts and diamonds are red; clubs and spades are black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        };
        write!(f, "{glyph}")
    }
}

/// Card rank, totally ordered Ace = 0 through King = 12.
///
/// Klondike only ever compares adjacent ranks (build up foundations by +1,
/// build down tableaux by −1), so the API exposes [`Rank::next`] and
/// [`Rank::prev`] rather than arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Numeric value: Ace = 0 .. King = 12.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The rank one step up, or `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Rank> {
        Rank::ALL.get(self as usize + 1).copied()
    }

    /// The rank one step down, or `None` for Ace.
    #[must_use]
    pub fn prev(self) -> Option<Rank> {
        (self as usize).checked_sub(1).map(|i| Rank::ALL[i])
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rank::Ace => "A",
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
        };
        write!(f, "{text}")
    }
}

/// A playing card: identity plus face-up state.
///
/// ## Example
///
/// ```
/// use klondike_core::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Spades, Rank::Ace);
/// assert!(!card.face_up);
/// assert!(!card.is_red());
///
/// let up = card.turned_up();
/// assert!(up.face_up);
/// assert_eq!(up.id(), card.id()); // same physical card
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Whether the card is currently showing its face.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// The card's identity, ignoring face-up state.
    #[must_use]
    pub const fn id(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Red cards are hearts and diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// This card, face-up.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// This card, face-down.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// The full 52-card deck, face-down, in fixed suit-major order.
///
/// Shuffle before dealing; the fixed order makes deck construction itself
/// deterministic so randomness comes only from the injected RNG.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
