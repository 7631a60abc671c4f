//! Piles and card locations.
//!
//! Pile kinds are a tagged enum: `Talon`, `Foundation` and `Row`, the
//! latter two carrying the acceptance rule they were built with.
//!
//! ## Key Types
//!
//! - `PileId`: Stable pile identifier
//! - `PileKind`: Pile role plus its rule
//! - `Pile`: Ordered cards with face state
//! - `PileManager`: Ownership and relocation

pub mod manager;

pub use manager::{Pile, PileId, PileKind, PileManager, PlacedCard};
