//! Pile acceptance rules.
//!
//! A rule answers two questions before a move is committed:
//! - may this run of cards leave the pile (`can_move`)
//! - may this run of cards be placed on the pile (`accepts`)
//!
//! Rules are plain values so a variant can be described entirely as data.
//!
//! ```
//! use bakers_dozen::core::{Card, Rank, Suit};
//! use bakers_dozen::rules::{BaseRank, RowRule};
//!
//! // Baker's Dozen rows: build down regardless of suit, spaces stay empty.
//! let rule = RowRule::rank_only().with_base_rank(BaseRank::NoRank);
//!
//! let nine = Card::new(Rank::new(8), Suit::CLUBS);
//! let eight = Card::new(Rank::new(7), Suit::CLUBS);
//! assert!(rule.accepts(Some(nine), &[eight]));
//! assert!(!rule.accepts(None, &[eight]));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit, RANKS_PER_SUIT};

/// Which cards may be built on each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Build {
    /// Alternating colours.
    AlternateColor,
    /// Same suit.
    SameSuit,
    /// Rank only, suit ignored.
    AnySuit,
}

impl Build {
    fn matches(self, lower: Card, upper: Card) -> bool {
        match self {
            Build::AlternateColor => lower.color() != upper.color(),
            Build::SameSuit => lower.suit == upper.suit,
            Build::AnySuit => true,
        }
    }
}

/// Rank direction when building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    /// Up or down, decided per card.
    Either,
}

impl Direction {
    fn matches(self, lower: Rank, upper: Rank) -> bool {
        let down = upper.0 + 1 == lower.0;
        let up = lower.0 + 1 == upper.0;
        match self {
            Direction::Down => down,
            Direction::Up => up,
            Direction::Either => down || up,
        }
    }
}

/// What an empty pile may be started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseRank {
    /// Any card.
    Any,
    /// Only this rank.
    Rank(Rank),
    /// Nothing: an emptied pile stays empty.
    NoRank,
}

impl BaseRank {
    fn admits(self, card: Card) -> bool {
        match self {
            BaseRank::Any => true,
            BaseRank::Rank(rank) => card.rank == rank,
            BaseRank::NoRank => false,
        }
    }
}

/// Cap on cards moved or accepted at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLimit {
    Unlimited,
    AtMost(usize),
}

impl CardLimit {
    /// Is `count` within the limit?
    #[must_use]
    pub fn allows(self, count: usize) -> bool {
        match self {
            CardLimit::Unlimited => true,
            CardLimit::AtMost(max) => count <= max,
        }
    }
}

/// Acceptance rule for a tableau row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowRule {
    pub build: Build,
    pub direction: Direction,
    pub base_rank: BaseRank,
    pub max_move: CardLimit,
    pub max_accept: CardLimit,
    /// An empty row takes a single card only, never a run.
    pub empty_accepts_single: bool,
}

impl RowRule {
    /// Build down in alternating colours, one card at a time, any card in a space.
    #[must_use]
    pub const fn alternate_color() -> Self {
        Self::new(Build::AlternateColor)
    }

    /// Build down in suit, one card at a time, any card in a space.
    #[must_use]
    pub const fn same_suit() -> Self {
        Self::new(Build::SameSuit)
    }

    /// Build down regardless of suit, one card at a time, any card in a space.
    #[must_use]
    pub const fn rank_only() -> Self {
        Self::new(Build::AnySuit)
    }

    const fn new(build: Build) -> Self {
        Self {
            build,
            direction: Direction::Down,
            base_rank: BaseRank::Any,
            max_move: CardLimit::AtMost(1),
            max_accept: CardLimit::AtMost(1),
            empty_accepts_single: false,
        }
    }

    /// Build in `direction` instead of down.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Change what may start an empty row.
    #[must_use]
    pub const fn with_base_rank(mut self, base_rank: BaseRank) -> Self {
        self.base_rank = base_rank;
        self
    }

    /// Allow whole runs to move and be accepted.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.max_move = CardLimit::Unlimited;
        self.max_accept = CardLimit::Unlimited;
        self
    }

    /// An empty row takes single cards only.
    #[must_use]
    pub const fn empty_accepts_single(mut self) -> Self {
        self.empty_accepts_single = true;
        self
    }

    /// Can `upper` sit directly on `lower`?
    #[must_use]
    pub fn follows(&self, lower: Card, upper: Card) -> bool {
        self.build.matches(lower, upper) && self.direction.matches(lower.rank, upper.rank)
    }

    /// Is `cards` (bottom to top) a built sequence under this rule?
    #[must_use]
    pub fn is_sequence(&self, cards: &[Card]) -> bool {
        cards.windows(2).all(|w| self.follows(w[0], w[1]))
    }

    /// May `run` be lifted off a row?
    #[must_use]
    pub fn can_move(&self, run: &[Card]) -> bool {
        !run.is_empty() && self.max_move.allows(run.len()) && self.is_sequence(run)
    }

    /// May `incoming` be placed on a row whose top card is `top`?
    #[must_use]
    pub fn accepts(&self, top: Option<Card>, incoming: &[Card]) -> bool {
        let Some(&first) = incoming.first() else {
            return false;
        };
        if !self.max_accept.allows(incoming.len()) || !self.is_sequence(incoming) {
            return false;
        }
        match top {
            Some(top) => self.follows(top, first),
            None => {
                if self.empty_accepts_single && incoming.len() != 1 {
                    return false;
                }
                self.base_rank.admits(first)
            }
        }
    }
}

/// Acceptance rule for a foundation. The suit comes from the pile itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoundationRule {
    pub build: Build,
    pub direction: Direction,
    pub base_rank: Rank,
    /// Whether the top card may be played back to the tableau.
    pub max_move: CardLimit,
    pub max_cards: usize,
}

impl Default for FoundationRule {
    fn default() -> Self {
        Self::same_suit()
    }
}

impl FoundationRule {
    /// Ace up to King in one suit.
    #[must_use]
    pub const fn same_suit() -> Self {
        Self {
            build: Build::SameSuit,
            direction: Direction::Up,
            base_rank: Rank::ACE,
            max_move: CardLimit::AtMost(1),
            max_cards: RANKS_PER_SUIT as usize,
        }
    }

    /// Ace of the pile's suit, then up in alternating colours.
    #[must_use]
    pub const fn alternate_color() -> Self {
        Self {
            build: Build::AlternateColor,
            ..Self::same_suit()
        }
    }

    /// Start from `base_rank` and build in `direction`.
    #[must_use]
    pub const fn starting_at(mut self, base_rank: Rank, direction: Direction) -> Self {
        self.base_rank = base_rank;
        self.direction = direction;
        self
    }

    /// Cards on the foundation can never leave it.
    #[must_use]
    pub const fn locked(mut self) -> Self {
        self.max_move = CardLimit::AtMost(0);
        self
    }

    /// May `run` be taken off the foundation?
    #[must_use]
    pub fn can_move(&self, run: &[Card]) -> bool {
        !run.is_empty() && self.max_move.allows(run.len())
    }

    /// May `incoming` go onto the `suit` foundation holding `len` cards topped by `top`?
    #[must_use]
    pub fn accepts(&self, suit: Suit, top: Option<Card>, len: usize, incoming: &[Card]) -> bool {
        let [card] = incoming else {
            return false;
        };
        if len >= self.max_cards {
            return false;
        }
        match top {
            None => card.rank == self.base_rank && card.suit == suit,
            Some(top) => {
                self.build.matches(top, *card) && self.direction.matches(top.rank, card.rank)
            }
        }
    }
}
