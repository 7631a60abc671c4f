//! Talons that redeal the tableau.
//!
//! Variants in the Cruel line never draw new cards from a stock. Instead
//! the talon collects the tableau and deals it out again, for a bounded or
//! unbounded number of rounds.

pub mod redeal;

pub use redeal::{pack_allocation, MaxRounds, RedealConfig, RedealTalon, DEFAULT_PACK_SIZE};
