//! Seeded deck shuffling.
//!
//! A seed is a game number: dealing the same variant from the same seed
//! always lays out the same tableau.
//!
//! ```
//! use bakers_dozen::core::GameRng;
//!
//! let first = GameRng::new(7).shuffled_deck(1);
//! let again = GameRng::new(7).shuffled_deck(1);
//! assert_eq!(first, again);
//! assert_eq!(first.len(), 52);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::{full_deck, Card};

/// Deck shuffler for one session.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Start the stream for game number `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Game number this shuffler was started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle cards in place. Later calls continue the same stream, so
    /// successive deals in one session differ.
    pub fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }

    /// Fresh `decks`-deck pack, shuffled.
    #[must_use]
    pub fn shuffled_deck(&mut self, decks: u8) -> Vec<Card> {
        let mut deck = full_deck(decks);
        self.shuffle(&mut deck);
        deck
    }

    /// Position in the stream, for resuming a session.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream saved with `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Saved shuffler position: seed plus ChaCha8 word counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
