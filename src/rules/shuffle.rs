//! Deal-order policies applied once to the freshly shuffled deck.
//!
//! The talon deals from the end of the sequence, so "moving a card to the
//! bottom" means placing it at the front of the `Vec`, where it is dealt
//! last.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::card::{Card, Rank};

/// One reordering step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleStep {
    /// Sink every King below the non-Kings of its row, then reverse.
    KingsToRowBottoms,
    /// Move up to `count` cards of `rank` to the bottom of the talon.
    /// `None` moves all of them.
    MoveToBottom { rank: Rank, count: Option<usize> },
}

/// Ordered list of steps. Empty means the shuffled deck is dealt as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShufflePolicy {
    pub steps: Vec<ShuffleStep>,
}

impl ShufflePolicy {
    /// Deal the shuffled deck unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// All cards of `rank` end up dealt last.
    #[must_use]
    pub fn rank_to_bottom(rank: Rank) -> Self {
        Self::identity().then(ShuffleStep::MoveToBottom { rank, count: None })
    }

    /// Baker's Dozen: no King rests on top of a lower card in its row.
    #[must_use]
    pub fn kings_to_row_bottoms() -> Self {
        Self::identity().then(ShuffleStep::KingsToRowBottoms)
    }

    /// Append a step.
    #[must_use]
    pub fn then(mut self, step: ShuffleStep) -> Self {
        self.steps.push(step);
        self
    }

    /// No reordering at all.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in order to a deck dealt over `rows` rows.
    #[must_use]
    pub fn apply(&self, mut deck: Vec<Card>, rows: usize) -> Vec<Card> {
        for step in &self.steps {
            trace!(?step, "applying shuffle step");
            deck = match *step {
                ShuffleStep::KingsToRowBottoms => kings_to_row_bottoms(deck, rows),
                ShuffleStep::MoveToBottom { rank, count } => {
                    move_to_bottom(deck, |c| c.rank == rank, count.unwrap_or(usize::MAX))
                }
            };
        }
        deck
    }
}

/// Move up to `count` cards matching `predicate` to the bottom of the talon.
///
/// Cards are picked scanning from the bottom. Within the moved block the
/// highest suit lies lowest, so the lowest suit is dealt first among them;
/// equal suits keep their deck order. All other cards keep their order.
#[must_use]
pub fn move_to_bottom<F>(deck: Vec<Card>, predicate: F, count: usize) -> Vec<Card>
where
    F: Fn(&Card) -> bool,
{
    let mut picked: Vec<(usize, Card)> = Vec::new();
    let mut rest: Vec<Card> = Vec::with_capacity(deck.len());

    for (i, card) in deck.into_iter().enumerate() {
        if picked.len() < count && predicate(&card) {
            picked.push((i, card));
        } else {
            rest.push(card);
        }
    }

    picked.sort_by(|(ia, a), (ib, b)| b.suit.cmp(&a.suit).then(ia.cmp(ib)));

    let mut out: Vec<Card> = picked.into_iter().map(|(_, c)| c).collect();
    out.extend(rest);
    out
}

/// Keep Kings from burying other cards in their row.
///
/// Reading `deck` in deal order, position `i` lands in row `i % rows`. Each
/// King is swapped with the first non-King dealt earlier into the same row.
/// If every earlier card in that row is a King the search runs out at
/// `j >= i` and the King stays put. The result is reversed so the talon
/// deals the first card first.
#[must_use]
pub fn kings_to_row_bottoms(mut deck: Vec<Card>, rows: usize) -> Vec<Card> {
    assert!(rows > 0, "Must have at least 1 row");

    let kings: Vec<usize> = deck
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_king())
        .map(|(i, _)| i)
        .collect();

    for i in kings {
        let mut j = i % rows;
        while j < i {
            if !deck[j].is_king() {
                deck.swap(i, j);
                break;
            }
            j += rows;
        }
    }

    deck.reverse();
    deck
}
