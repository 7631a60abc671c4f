//! The Baker's Dozen family: catalog, built-in variants, and live games.
//!
//! ```
//! use bakers_dozen::core::SessionConfig;
//! use bakers_dozen::games::{GameCatalog, Solitaire};
//!
//! let catalog = GameCatalog::builtin();
//! let variant = catalog.by_name("Royal Family").unwrap();
//! let mut game = Solitaire::from_variant(variant, SessionConfig::default().with_seed(3)).unwrap();
//! game.deal();
//! assert_eq!(game.piles().total_cards(), 52);
//! ```

pub mod catalog;
pub mod variants;
pub mod solitaire;

pub use catalog::{GameCatalog, GameCategory, GameInfo, GameVariant, SkillLevel};
pub use solitaire::{AutoplayOutcome, Move, Solitaire};
