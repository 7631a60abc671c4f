//! Playing cards and decks.
//!
//! Cards are plain values: a rank (Ace = 0 .. King = 12) and a suit
//! (Clubs, Spades, Hearts, Diamonds = 0..3). Clubs and Spades are black,
//! Hearts and Diamonds are red.
//!
//! ```
//! use bakers_dozen::core::{Card, Rank, Suit, Color};
//!
//! let card = Card::new(Rank::KING, Suit::HEARTS);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "KH");
//! ```

use serde::{Deserialize, Serialize};

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of suits in a deck.
pub const SUITS_PER_DECK: u8 = 4;

/// Cards in one standard deck.
pub const CARDS_PER_DECK: usize = (RANKS_PER_SUIT as usize) * (SUITS_PER_DECK as usize);

/// Card rank, 0 (Ace) through 12 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const ACE: Rank = Rank(0);
    pub const KING: Rank = Rank(12);

    /// Create a rank, panicking if it is out of range.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(rank < RANKS_PER_SUIT, "Rank out of range");
        Self(rank)
    }

    /// Raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..RANKS_PER_SUIT).map(Rank)
    }

    /// Short label used in card names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "A",
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            8 => "9",
            9 => "T",
            10 => "J",
            11 => "Q",
            _ => "K",
        }
    }
}

/// Card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Card suit, 0..3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Suit(pub u8);

impl Suit {
    pub const CLUBS: Suit = Suit(0);
    pub const SPADES: Suit = Suit(1);
    pub const HEARTS: Suit = Suit(2);
    pub const DIAMONDS: Suit = Suit(3);

    /// Create a suit, panicking if it is out of range.
    #[must_use]
    pub const fn new(suit: u8) -> Self {
        assert!(suit < SUITS_PER_DECK, "Suit out of range");
        Self(suit)
    }

    /// Raw suit value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all suits in order.
    pub fn all() -> impl Iterator<Item = Suit> {
        (0..SUITS_PER_DECK).map(Suit)
    }

    /// Black for Clubs and Spades, red for Hearts and Diamonds.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 < 2 {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// Short label used in card names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "C",
            1 => "S",
            2 => "H",
            _ => "D",
        }
    }
}

/// A playing card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Card of `rank` in `suit`.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Colour of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Is this an Ace?
    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::ACE
    }

    /// Is this a King?
    #[must_use]
    pub fn is_king(self) -> bool {
        self.rank == Rank::KING
    }

    /// Index within a single deck: `suit * 13 + rank`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.suit.0 as usize) * (RANKS_PER_SUIT as usize) + self.rank.0 as usize
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.label())
    }
}

/// Build `decks` standard decks in suit-major order (all Clubs, then Spades, ...).
#[must_use]
pub fn full_deck(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK * decks as usize);
    for _ in 0..decks {
        for suit in Suit::all() {
            for rank in Rank::all() {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}
