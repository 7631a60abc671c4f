//! Complete rules of one variant, as a value.
//!
//! A `GameRules` holds everything that distinguishes one member of the
//! family from another. Variants are built by composing these parts
//! rather than by specializing a base game.
//!
//! Rules serialize to JSON, so custom variants can be loaded at runtime:
//!
//! ```
//! use bakers_dozen::rules::GameRules;
//!
//! let rules = GameRules::bakers_dozen_layout(13);
//! let json = rules.to_json().unwrap();
//! let back = GameRules::from_json(&json).unwrap();
//! assert_eq!(rules, back);
//! ```

use serde::{Deserialize, Serialize};

use super::accept::{FoundationRule, RowRule};
use super::shuffle::{ShufflePolicy, ShuffleStep};
use crate::core::card::{CARDS_PER_DECK, SUITS_PER_DECK};
use crate::core::error::{Result, SolitaireError};
use crate::talon::RedealConfig;

/// Most tableau rows a layout may have.
pub const MAX_ROWS: usize = 256;

/// How the initial deal proceeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealPattern {
    /// One entry per pass over the rows: `true` deals that pass face up.
    pub passes: Vec<bool>,
    /// Cards dealt from the talon to their foundations once the rows are laid out.
    pub to_foundations: usize,
}

impl DealPattern {
    /// `face_down` passes face down followed by one pass face up.
    #[must_use]
    pub fn with_face_down(face_down: usize) -> Self {
        let mut passes = vec![false; face_down];
        passes.push(true);
        Self {
            passes,
            to_foundations: 0,
        }
    }

    /// `passes` passes, all face up.
    #[must_use]
    pub fn face_up(passes: usize) -> Self {
        Self {
            passes: vec![true; passes],
            to_foundations: 0,
        }
    }

    /// Explicit flip pattern, `true` = face up.
    #[must_use]
    pub fn from_flips(passes: &[bool]) -> Self {
        Self {
            passes: passes.to_vec(),
            to_foundations: 0,
        }
    }

    /// Deal `count` more cards straight to their foundations.
    #[must_use]
    pub fn then_foundations(mut self, count: usize) -> Self {
        self.to_foundations = count;
        self
    }

    /// Cards the pattern takes from the talon for `rows` rows.
    #[must_use]
    pub fn cards_needed(&self, rows: usize) -> usize {
        self.passes.len() * rows + self.to_foundations
    }
}

/// Rules of one variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Number of tableau rows.
    pub rows: usize,
    /// Number of 52-card decks.
    pub decks: u8,
    /// Reordering applied to the shuffled deck before dealing.
    pub shuffle: ShufflePolicy,
    pub row_rule: RowRule,
    pub foundation_rule: FoundationRule,
    /// `None` when the talon only serves the initial deal.
    pub redeal: Option<RedealConfig>,
    pub deal: DealPattern,
}

impl GameRules {
    /// Castles in Spain shape: alternating-colour rows, Ace foundations,
    /// no reordering, no redeal, three face-down passes.
    #[must_use]
    pub fn bakers_dozen_layout(rows: usize) -> Self {
        Self {
            rows,
            decks: 1,
            shuffle: ShufflePolicy::identity(),
            row_rule: RowRule::alternate_color(),
            foundation_rule: FoundationRule::same_suit(),
            redeal: None,
            deal: DealPattern::with_face_down(3),
        }
    }

    /// Replace the deal-order policy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Replace the rule every row plays by.
    #[must_use]
    pub fn with_row_rule(mut self, rule: RowRule) -> Self {
        self.row_rule = rule;
        self
    }

    /// Replace the rule every foundation plays by.
    #[must_use]
    pub fn with_foundation_rule(mut self, rule: FoundationRule) -> Self {
        self.foundation_rule = rule;
        self
    }

    /// Allow the tableau to be redealt.
    #[must_use]
    pub fn with_redeal(mut self, redeal: RedealConfig) -> Self {
        self.redeal = Some(redeal);
        self
    }

    /// Replace the initial deal pattern.
    #[must_use]
    pub fn with_deal(mut self, deal: DealPattern) -> Self {
        self.deal = deal;
        self
    }

    /// Cards in play.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        CARDS_PER_DECK * self.decks as usize
    }

    /// One foundation per suit per deck.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        SUITS_PER_DECK as usize * self.decks as usize
    }

    /// Check the rules describe a playable layout.
    ///
    /// Rules that pass can be dealt and redealt without tripping any of the
    /// engine's internal assertions.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(SolitaireError::InvalidRules("at least one row is required".into()));
        }
        if self.rows > MAX_ROWS {
            return Err(SolitaireError::InvalidRules(format!(
                "{} rows exceed the limit of {}",
                self.rows, MAX_ROWS
            )));
        }
        if self.decks == 0 {
            return Err(SolitaireError::InvalidRules("at least one deck is required".into()));
        }
        let needed = self.deal.cards_needed(self.rows);
        if needed > self.total_cards() {
            return Err(SolitaireError::InvalidRules(format!(
                "deal needs {} cards but the deck holds {}",
                needed,
                self.total_cards()
            )));
        }
        if self.deal.to_foundations > self.foundation_count() {
            return Err(SolitaireError::InvalidRules(format!(
                "cannot deal {} cards to {} foundations",
                self.deal.to_foundations,
                self.foundation_count()
            )));
        }
        if let Some(redeal) = &self.redeal {
            if redeal.pack_size == 0 || redeal.pack_size > self.total_cards() {
                return Err(SolitaireError::InvalidRules(format!(
                    "pack size must be between 1 and {}",
                    self.total_cards()
                )));
            }
            if needed != self.total_cards() {
                return Err(SolitaireError::InvalidRules(format!(
                    "redealing needs an empty talon but the deal leaves {} cards in it",
                    self.total_cards() - needed
                )));
            }
        }
        if self.deal.to_foundations > 0 {
            self.check_foundation_deal(needed)?;
        }
        Ok(())
    }

    /// The cards dealt to the foundations are the last ones in the talon,
    /// so the deal must empty it and the final shuffle step must have sunk
    /// enough base cards to the bottom.
    fn check_foundation_deal(&self, needed: usize) -> Result<()> {
        let wanted = self.deal.to_foundations;
        if needed != self.total_cards() {
            return Err(SolitaireError::InvalidRules(format!(
                "dealing {} cards to the foundations needs the deal to use all {} cards",
                wanted,
                self.total_cards()
            )));
        }
        if self.foundation_rule.max_cards == 0 {
            return Err(SolitaireError::InvalidRules("foundations that hold no cards cannot be dealt to".into()));
        }
        let base = self.foundation_rule.base_rank;
        let sunk = match self.shuffle.steps.last() {
            Some(ShuffleStep::MoveToBottom { rank, count }) if *rank == base => {
                count.map_or(true, |count| count >= wanted)
            }
            _ => false,
        };
        if !sunk {
            return Err(SolitaireError::InvalidRules(format!(
                "dealing {} cards to the foundations needs a final step moving {} {} to the bottom",
                wanted,
                wanted,
                base.label()
            )));
        }
        Ok(())
    }

    /// Parse and validate rules from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: GameRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
