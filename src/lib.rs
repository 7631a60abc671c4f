//! # bakers-dozen
//!
//! Rules engine for the Baker's Dozen family of patience games: Castles in
//! Spain, Martha, Baker's Dozen, Spanish Patience (I and II), Portuguese
//! Solitaire, Good Measure, Cruel, Royal Family, Indefatigable,
//! Perseverance and Ripple Fan.
//!
//! ## Design Principles
//!
//! 1. **Variants Are Data**: A game is a `GameRules` value (layout, deal
//!    order, acceptance rules, redeal configuration, deal pattern), not a
//!    subclass of another game.
//!
//! 2. **Rules Travel With Piles**: Each pile's kind carries its acceptance
//!    rule, so legality checks need no variant-specific code.
//!
//! 3. **Deterministic**: A seed fully determines the deal; redeals never
//!    shuffle.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, session configuration, errors
//! - `piles`: Pile kinds and card relocation
//! - `rules`: Acceptance rules, deal-order policies, `GameRules`
//! - `talon`: Redeal-in-packs engine
//! - `games`: Catalog, built-in variants, live `Solitaire` games

pub mod core;
pub mod piles;
pub mod rules;
pub mod talon;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    full_deck, Card, Color, Rank, Suit,
    GameRng, GameRngState,
    SessionConfig,
    Result, SolitaireError,
};

pub use crate::piles::{Pile, PileId, PileKind, PileManager, PlacedCard};

pub use crate::rules::{
    BaseRank, Build, CardLimit, Direction, FoundationRule, RowRule,
    ShufflePolicy, ShuffleStep, DealPattern, GameRules,
};

pub use crate::talon::{MaxRounds, RedealConfig, RedealTalon};

pub use crate::games::{
    GameCatalog, GameCategory, GameInfo, GameVariant, SkillLevel,
    AutoplayOutcome, Move, Solitaire,
};
