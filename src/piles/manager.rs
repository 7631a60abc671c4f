//! Pile ownership and card relocation.
//!
//! The `PileManager` owns every pile of one game: the talon, the
//! foundations and the tableau rows. Each pile carries its own acceptance
//! rule in its `PileKind`, so asking a pile whether it takes a run needs no
//! knowledge of the variant.
//!
//! Relocation here is unchecked, like dealing: callers that need legality
//! ask `can_move` / `accepts` first.
//!
//! ```
//! use bakers_dozen::piles::PileManager;
//! use bakers_dozen::rules::GameRules;
//! use bakers_dozen::core::full_deck;
//!
//! let rules = GameRules::bakers_dozen_layout(13);
//! let mut piles = PileManager::new(&rules);
//! piles.load_talon(full_deck(1));
//!
//! let talon = piles.talon();
//! let row = piles.row(0);
//! piles.move_cards(1, talon, row);
//! assert_eq!(piles.pile(row).len(), 1);
//! assert_eq!(piles.total_cards(), 52);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Suit, SUITS_PER_DECK};
use crate::rules::{FoundationRule, GameRules, RowRule};

/// Pile identifier, stable for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Wrap a raw pile number.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position in the manager's pile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// What a pile is, with the rule it plays by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileKind {
    /// Undealt or collected cards. Never accepts player moves.
    Talon,
    /// Goal pile for one suit.
    Foundation { suit: Suit, rule: FoundationRule },
    /// Tableau row.
    Row(RowRule),
}

/// A card as it lies in a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Card,
    pub face_up: bool,
}

/// One pile. Index 0 is the bottom card, the last index is the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    pub id: PileId,
    pub kind: PileKind,
    cards: Vec<PlacedCard>,
}

impl Pile {
    fn new(id: PileId, kind: PileKind) -> Self {
        Self {
            id,
            kind,
            cards: Vec::new(),
        }
    }

    /// Placed cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[PlacedCard] {
        &self.cards
    }

    /// Card values, bottom to top.
    pub fn card_values(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|p| p.card)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card with its face, if any.
    #[must_use]
    pub fn top(&self) -> Option<PlacedCard> {
        self.cards.last().copied()
    }

    /// The top `count` cards, bottom to top.
    #[must_use]
    pub fn top_run(&self, count: usize) -> Option<Vec<Card>> {
        if count == 0 || count > self.cards.len() {
            return None;
        }
        Some(self.cards[self.cards.len() - count..].iter().map(|p| p.card).collect())
    }

    /// Is this a tableau row?
    #[must_use]
    pub fn is_row(&self) -> bool {
        matches!(self.kind, PileKind::Row(_))
    }

    /// Is this a foundation?
    #[must_use]
    pub fn is_foundation(&self) -> bool {
        matches!(self.kind, PileKind::Foundation { .. })
    }

    /// May the top `count` cards be lifted off this pile?
    #[must_use]
    pub fn can_move(&self, count: usize) -> bool {
        if count == 0 || count > self.cards.len() {
            return false;
        }
        let start = self.cards.len() - count;
        if !self.cards[start..].iter().all(|p| p.face_up) {
            return false;
        }
        let run: Vec<Card> = self.cards[start..].iter().map(|p| p.card).collect();
        match self.kind {
            PileKind::Talon => false,
            PileKind::Foundation { rule, .. } => rule.can_move(&run),
            PileKind::Row(rule) => rule.can_move(&run),
        }
    }

    /// May `incoming` (bottom to top) be placed on this pile?
    #[must_use]
    pub fn accepts(&self, incoming: &[Card]) -> bool {
        let top = self.top();
        if top.is_some_and(|p| !p.face_up) {
            return false;
        }
        let top = top.map(|p| p.card);
        match self.kind {
            PileKind::Talon => false,
            PileKind::Foundation { suit, rule } => rule.accepts(suit, top, self.cards.len(), incoming),
            PileKind::Row(rule) => rule.accepts(top, incoming),
        }
    }
}

/// Owns every pile of a game.
///
/// Layout: pile 0 is the talon, then one foundation per suit per deck,
/// then the rows in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileManager {
    piles: Vec<Pile>,
    foundation_count: usize,
    row_count: usize,
}

impl PileManager {
    /// Create empty piles for `rules`.
    #[must_use]
    pub fn new(rules: &GameRules) -> Self {
        let foundation_count = rules.foundation_count();
        let total = 1 + foundation_count + rules.rows;
        assert!(total <= u16::MAX as usize, "Too many piles");

        let mut piles = Vec::with_capacity(total);
        piles.push(Pile::new(PileId::new(0), PileKind::Talon));
        for i in 0..foundation_count {
            let suit = Suit::new((i % SUITS_PER_DECK as usize) as u8);
            let kind = PileKind::Foundation {
                suit,
                rule: rules.foundation_rule,
            };
            piles.push(Pile::new(PileId::new(piles.len() as u16), kind));
        }
        for _ in 0..rules.rows {
            let kind = PileKind::Row(rules.row_rule);
            piles.push(Pile::new(PileId::new(piles.len() as u16), kind));
        }

        Self {
            piles,
            foundation_count,
            row_count: rules.rows,
        }
    }

    /// Id of the talon, always pile 0.
    #[must_use]
    pub fn talon(&self) -> PileId {
        PileId::new(0)
    }

    /// Foundation ids in order.
    pub fn foundations(&self) -> impl Iterator<Item = PileId> {
        (1..=self.foundation_count).map(|i| PileId::new(i as u16))
    }

    /// Row ids in order.
    pub fn rows(&self) -> impl Iterator<Item = PileId> {
        let first = 1 + self.foundation_count;
        (first..first + self.row_count).map(|i| PileId::new(i as u16))
    }

    /// Id of row `index`. Panics if out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> PileId {
        assert!(index < self.row_count, "Row {} out of range", index);
        PileId::new((1 + self.foundation_count + index) as u16)
    }

    /// Number of tableau rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// First foundation of `suit` that accepts `card`.
    #[must_use]
    pub fn foundation_for(&self, card: Card) -> Option<PileId> {
        self.foundations()
            .find(|&id| matches!(self.pile(id).kind, PileKind::Foundation { suit, .. } if suit == card.suit)
                && self.pile(id).accepts(&[card]))
    }

    /// Pile by id, `None` for an id this manager never issued.
    #[must_use]
    pub fn get(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    /// Pile by id. Panics on an id this manager never issued.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// Every pile in id order: talon, foundations, rows.
    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Replace the talon contents with `deck`, face down. The end of `deck` is the top.
    pub fn load_talon(&mut self, deck: Vec<Card>) {
        let talon = &mut self.piles[0];
        talon.cards = deck
            .into_iter()
            .map(|card| PlacedCard { card, face_up: false })
            .collect();
    }

    /// Put a card on top of a pile.
    pub fn push(&mut self, id: PileId, card: Card, face_up: bool) {
        self.piles[id.index()].cards.push(PlacedCard { card, face_up });
    }

    /// Remove and return the top card of a pile.
    pub fn pop(&mut self, id: PileId) -> Option<PlacedCard> {
        self.piles[id.index()].cards.pop()
    }

    /// Move the top `count` cards of `from` onto `to`, keeping their order.
    ///
    /// Panics if `from` holds fewer than `count` cards.
    pub fn move_cards(&mut self, count: usize, from: PileId, to: PileId) {
        let source = &mut self.piles[from.index()].cards;
        assert!(
            count <= source.len(),
            "Cannot move {} cards from {} holding {}",
            count,
            from,
            source.len()
        );
        let run = source.split_off(source.len() - count);
        self.piles[to.index()].cards.extend(run);
    }

    /// Set the face of the top card. Returns false if the pile is empty.
    pub fn set_top_face(&mut self, id: PileId, face_up: bool) -> bool {
        match self.piles[id.index()].cards.last_mut() {
            Some(top) => {
                top.face_up = face_up;
                true
            }
            None => false,
        }
    }

    /// Cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Cards on the foundations.
    #[must_use]
    pub fn foundation_cards(&self) -> usize {
        self.foundations().map(|id| self.pile(id).len()).sum()
    }

    /// Every card in play, sorted. Equal for any two states holding the same multiset.
    #[must_use]
    pub fn card_multiset(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.piles.iter().flat_map(Pile::card_values).collect();
        cards.sort_unstable();
        cards
    }

    /// Tableau cards row by row, each row bottom to top.
    #[must_use]
    pub fn row_major(&self) -> Vec<Card> {
        self.rows().flat_map(|id| self.pile(id).card_values()).collect()
    }
}
