//! Error types.
//!
//! Only caller-facing failures live here. Corrupted game state (for example
//! a non-empty talon when a redeal starts) is a programming error and
//! panics instead.

use super::card::Card;
use crate::piles::PileId;

/// Errors returned by game operations.
#[derive(Debug, thiserror::Error)]
pub enum SolitaireError {
    #[error("No game registered with id {0}")]
    UnknownGame(u32),

    #[error("No game registered with name {0:?}")]
    UnknownGameName(String),

    #[error("Pile {0} does not exist")]
    UnknownPile(PileId),

    #[error("Cannot move {count} card(s) from {from} to {to}: {reason}")]
    IllegalMove {
        count: usize,
        from: PileId,
        to: PileId,
        reason: &'static str,
    },

    #[error("Cannot flip the top card of {0}")]
    IllegalFlip(PileId),

    #[error("Redeal not available in round {round}")]
    RedealUnavailable { round: u32 },

    #[error("Deck of {got} cards does not match the {expected} cards the rules expect")]
    DeckMismatch { expected: usize, got: usize },

    #[error("Deck is not {decks} complete standard deck(s)")]
    InvalidDeck { decks: u8 },

    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    #[error("Failed to parse rules: {0}")]
    RulesParse(#[from] serde_json::Error),
}

impl SolitaireError {
    pub(crate) fn illegal(count: usize, from: PileId, to: PileId, reason: &'static str) -> Self {
        Self::IllegalMove {
            count,
            from,
            to,
            reason,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SolitaireError>;

/// Display a run of cards as `[AS 2H ...]` for log lines.
pub(crate) fn format_cards(cards: &[Card]) -> String {
    let names: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(" "))
}
