//! Core types: cards, RNG, session configuration, errors.
//!
//! Nothing in here knows about any particular patience game.

pub mod card;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{full_deck, Card, Color, Rank, Suit, CARDS_PER_DECK};
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, DEFAULT_MOVE_CEILING};
pub use error::{Result, SolitaireError};
