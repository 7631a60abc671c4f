//! Variant rules: acceptance predicates, deal-order policies, and the
//! `GameRules` value that bundles them.
//!
//! Every member of the family is described by a `GameRules`. The engine
//! in `games::solitaire` interprets it; nothing here mutates a game.

pub mod accept;
pub mod shuffle;
pub mod game_rules;

pub use accept::{BaseRank, Build, CardLimit, Direction, FoundationRule, RowRule};
pub use shuffle::{kings_to_row_bottoms, move_to_bottom, ShufflePolicy, ShuffleStep};
pub use game_rules::{DealPattern, GameRules};
