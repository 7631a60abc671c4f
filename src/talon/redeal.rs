//! Redeal without shuffling, in packs.
//!
//! When the player is stuck, every row is gathered back into the talon
//! (last row first) and dealt out again in packs of four, row 0 first.
//! Cards travel one at a time off the top of each pile, so reading the
//! tableau row by row gives the same sequence before and after; only the
//! pile boundaries move.
//!
//! ```
//! use bakers_dozen::talon::pack_allocation;
//!
//! // 52 cards over 12 rows: four rows take a fifth card
//! let deal = pack_allocation(52, 12, 4);
//! assert_eq!(&deal[..5], &[5, 5, 5, 5, 4]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::piles::PileManager;

/// Cards per row in a redeal.
pub const DEFAULT_PACK_SIZE: usize = 4;

/// Rounds of play allowed, counting the initial deal as round 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxRounds {
    Unlimited,
    /// Hard cap; `Limited(3)` permits two redeals.
    Limited(u32),
}

impl MaxRounds {
    /// Is `round` the last round allowed?
    #[must_use]
    pub fn reached(self, round: u32) -> bool {
        match self {
            MaxRounds::Unlimited => false,
            MaxRounds::Limited(max) => round >= max,
        }
    }

    /// Redeals available from the start, `None` if unlimited.
    #[must_use]
    pub fn redeals(self) -> Option<u32> {
        match self {
            MaxRounds::Unlimited => None,
            MaxRounds::Limited(max) => Some(max.saturating_sub(1)),
        }
    }
}

/// Redeal parameters of a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedealConfig {
    pub max_rounds: MaxRounds,
    pub pack_size: usize,
}

impl RedealConfig {
    /// Redeal as often as the player likes, packs of four.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_rounds: MaxRounds::Unlimited,
            pack_size: DEFAULT_PACK_SIZE,
        }
    }

    /// `max_rounds` rounds in total, packs of four.
    #[must_use]
    pub fn limited(max_rounds: u32) -> Self {
        Self {
            max_rounds: MaxRounds::Limited(max_rounds),
            pack_size: DEFAULT_PACK_SIZE,
        }
    }
}

/// Cards each row receives when `total` cards are redealt over `rows` rows.
///
/// Every row gets `pack` cards; any excess is handed out one card at a
/// time starting at row 0 and wrapping. Rows past the last card may end
/// up with fewer than their allocation when `total < pack * rows`; the
/// table itself is the upper bound.
#[must_use]
pub fn pack_allocation(total: usize, rows: usize, pack: usize) -> SmallVec<[usize; 16]> {
    assert!(rows > 0, "Must have at least 1 row");

    let mut deal: SmallVec<[usize; 16]> = SmallVec::from_elem(pack, rows);
    let mut extra = total.saturating_sub(pack.saturating_mul(rows));
    let mut i = 0;
    while extra > 0 {
        deal[i] += 1;
        i = (i + 1) % rows;
        extra -= 1;
    }
    deal
}

/// Talon that gathers and redeals the tableau.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedealTalon {
    config: RedealConfig,
    round: u32,
}

impl RedealTalon {
    /// Start in round 1.
    #[must_use]
    pub fn new(config: RedealConfig) -> Self {
        Self { config, round: 1 }
    }

    /// Configuration this talon redeals with.
    #[must_use]
    pub fn config(&self) -> RedealConfig {
        self.config
    }

    /// Current round, 1 for the initial deal.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Redeals performed so far.
    #[must_use]
    pub fn redeals_done(&self) -> u32 {
        self.round - 1
    }

    /// May the player redeal now?
    ///
    /// `won` is the game's win state and `ceiling_reached` whether a demo
    /// session has used up its moves.
    #[must_use]
    pub fn can_redeal(&self, won: bool, ceiling_reached: bool) -> bool {
        if ceiling_reached || self.config.max_rounds.reached(self.round) {
            return false;
        }
        !won
    }

    /// Gather every row into the talon and deal it out again in packs.
    ///
    /// Returns the number of cards redealt. An empty tableau returns 0
    /// and leaves the round unchanged.
    ///
    /// Panics if the talon is not empty on entry or if the card count
    /// changes; either means the game state is corrupt.
    pub fn redeal(&mut self, piles: &mut PileManager) -> usize {
        let talon = piles.talon();
        assert!(piles.pile(talon).is_empty(), "Talon must be empty before a redeal");
        let before = piles.total_cards();

        let rows: Vec<_> = piles.rows().collect();
        let mut total = 0;
        for &row in rows.iter().rev() {
            while !piles.pile(row).is_empty() {
                piles.move_cards(1, row, talon);
                total += 1;
            }
        }
        assert_eq!(piles.pile(talon).len(), total, "Talon lost cards while collecting");

        if total == 0 {
            debug!(round = self.round, "nothing left to redeal");
            return 0;
        }

        self.round += 1;

        let deal = pack_allocation(total, rows.len(), self.config.pack_size);
        let mut remaining = total;
        for (&row, &count) in rows.iter().zip(deal.iter()) {
            let k = count.min(remaining);
            for _ in 0..k {
                piles.move_cards(1, talon, row);
            }
            remaining -= k;
            if remaining == 0 {
                break;
            }
        }

        assert!(piles.pile(talon).is_empty(), "Talon must be empty after a redeal");
        assert_eq!(piles.total_cards(), before, "Redeal changed the card count");
        debug!(round = self.round, cards = total, ?deal, "redealt tableau");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{full_deck, Card};
    use crate::rules::GameRules;

    /// Rows filled from `deck` in row-major order with the given sizes.
    fn tableau(sizes: &[usize]) -> PileManager {
        let rules = GameRules::bakers_dozen_layout(sizes.len());
        let mut piles = PileManager::new(&rules);
        let mut cards = full_deck(1).into_iter();
        for (i, &n) in sizes.iter().enumerate() {
            let row = piles.row(i);
            for _ in 0..n {
                let card = cards.next().unwrap();
                piles.push(row, card, true);
            }
        }
        piles
    }

    fn sizes(piles: &PileManager) -> Vec<usize> {
        piles.rows().map(|id| piles.pile(id).len()).collect()
    }

    #[test]
    fn test_allocation_exact() {
        let deal = pack_allocation(48, 12, 4);
        assert!(deal.iter().all(|&n| n == 4));
    }

    #[test]
    fn test_allocation_excess_round_robin() {
        let deal = pack_allocation(52, 12, 4);
        assert_eq!(deal.iter().filter(|&&n| n == 5).count(), 4);
        assert_eq!(&deal[..4], &[5, 5, 5, 5]);
        assert_eq!(deal.iter().sum::<usize>(), 52);
    }

    #[test]
    fn test_allocation_wraps() {
        // Excess larger than the row count wraps back to row 0
        let deal = pack_allocation(16, 3, 4);
        assert_eq!(deal.as_slice(), &[6, 5, 5]);
    }

    #[test]
    fn test_allocation_short() {
        let deal = pack_allocation(10, 12, 4);
        assert!(deal.iter().all(|&n| n == 4));
    }

    #[test]
    fn test_allocation_huge_pack() {
        let deal = pack_allocation(52, 12, usize::MAX);
        assert!(deal.iter().all(|&n| n == usize::MAX));
    }

    #[test]
    fn test_max_rounds() {
        assert!(!MaxRounds::Unlimited.reached(1_000));
        assert!(!MaxRounds::Limited(3).reached(2));
        assert!(MaxRounds::Limited(3).reached(3));
        assert_eq!(MaxRounds::Limited(3).redeals(), Some(2));
        assert_eq!(MaxRounds::Unlimited.redeals(), None);
    }

    #[test]
    fn test_redeal_preserves_row_major_order() {
        let mut piles = tableau(&[1, 0, 7, 3, 2]);
        let before = piles.row_major();

        let mut talon = RedealTalon::new(RedealConfig::unlimited());
        let n = talon.redeal(&mut piles);

        assert_eq!(n, 13);
        assert_eq!(piles.row_major(), before);
        assert_eq!(sizes(&piles), vec![4, 4, 4, 1, 0]);
        assert_eq!(talon.round(), 2);
    }

    #[test]
    fn test_redeal_empty_tableau() {
        let mut piles = tableau(&[0, 0, 0]);
        let mut talon = RedealTalon::new(RedealConfig::unlimited());

        assert_eq!(talon.redeal(&mut piles), 0);
        assert_eq!(talon.round(), 1);
    }

    #[test]
    fn test_redeal_first_row_gets_bottom_cards() {
        let mut piles = tableau(&[2, 6]);
        let row0: Vec<Card> = piles.pile(piles.row(0)).card_values().collect();
        let row1: Vec<Card> = piles.pile(piles.row(1)).card_values().collect();

        RedealTalon::new(RedealConfig::unlimited()).redeal(&mut piles);

        let new0: Vec<Card> = piles.pile(piles.row(0)).card_values().collect();
        assert_eq!(&new0[..2], row0.as_slice());
        assert_eq!(&new0[2..], &row1[..2]);
    }

    #[test]
    fn test_can_redeal() {
        let mut talon = RedealTalon::new(RedealConfig::limited(2));
        assert!(talon.can_redeal(false, false));
        assert!(!talon.can_redeal(true, false));
        assert!(!talon.can_redeal(false, true));

        let mut piles = tableau(&[4, 4]);
        talon.redeal(&mut piles);
        assert_eq!(talon.redeals_done(), 1);
        assert!(!talon.can_redeal(false, false));
    }

    #[test]
    #[should_panic(expected = "Talon must be empty")]
    fn test_redeal_requires_empty_talon() {
        let mut piles = tableau(&[4]);
        let talon_id = piles.talon();
        piles.push(talon_id, Card::new(crate::core::Rank::KING, crate::core::Suit::CLUBS), false);
        RedealTalon::new(RedealConfig::unlimited()).redeal(&mut piles);
    }
}
