//! Redeal engine integration tests.
//!
//! These tests drive the redeal talon through whole games of the Cruel
//! line and check that redeals only move pile boundaries.

use bakers_dozen::core::{full_deck, Card, SessionConfig};
use bakers_dozen::games::{variants, Move, Solitaire};
use bakers_dozen::piles::PileManager;
use bakers_dozen::rules::GameRules;
use bakers_dozen::talon::{MaxRounds, RedealConfig, RedealTalon};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable();
    cards
}

fn row_sizes(piles: &PileManager) -> Vec<usize> {
    piles.rows().map(|id| piles.pile(id).len()).collect()
}

// =============================================================================
// Engine Tests
// =============================================================================

/// 52 cards over 12 rows: rows 0..4 get five cards, the rest four.
#[test]
fn test_full_deck_over_twelve_rows() {
    let rules = variants::cruel().rules;
    let mut piles = PileManager::new(&rules);
    let mut deck = full_deck(1).into_iter();

    // Uneven starting tableau holding the whole deck
    let shape = [9, 1, 0, 6, 4, 4, 2, 7, 3, 5, 8, 3];
    assert_eq!(shape.iter().sum::<usize>(), 52);
    for (i, &n) in shape.iter().enumerate() {
        let row = piles.row(i);
        for card in deck.by_ref().take(n) {
            piles.push(row, card, true);
        }
    }
    let before = piles.row_major();

    let mut talon = RedealTalon::new(rules.redeal.unwrap());
    let redealt = talon.redeal(&mut piles);

    assert_eq!(redealt, 52);
    assert!(piles.pile(piles.talon()).is_empty());
    assert_eq!(row_sizes(&piles), vec![5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4]);
    assert_eq!(piles.row_major(), before);
}

/// Repeated redeals keep the multiset and the row-major order.
#[test]
fn test_repeated_redeals_preserve_order() {
    let mut game = Solitaire::from_variant(&variants::cruel(), SessionConfig::default().with_seed(5)).unwrap();
    game.deal();
    let deck = game.piles().card_multiset();

    for round in 2..12 {
        let before = game.piles().row_major();
        let n = game.redeal().unwrap();

        assert_eq!(n, before.len());
        assert_eq!(game.round(), round);
        assert_eq!(game.piles().row_major(), before);
        assert_eq!(game.piles().card_multiset(), deck);
    }
}

/// Cruel after the deal holds 48 tableau cards, so every row gets four.
#[test]
fn test_cruel_redeal_is_even() {
    let mut game = Solitaire::from_variant(&variants::cruel(), SessionConfig::default()).unwrap();
    game.deal();
    game.redeal().unwrap();

    assert!(row_sizes(game.piles()).iter().all(|&n| n == 4));
    assert_eq!(game.piles().foundation_cards(), 4);
}

// =============================================================================
// Round Limits
// =============================================================================

/// Royal Family plays two rounds: one redeal.
#[test]
fn test_royal_family_single_redeal() {
    let mut game = Solitaire::from_variant(&variants::royal_family(), SessionConfig::default()).unwrap();
    game.deal();

    assert!(game.can_redeal());
    game.redeal().unwrap();
    assert!(!game.can_redeal());
    assert!(game.redeal().is_err());
}

/// Indefatigable and Perseverance play three rounds.
#[test]
fn test_three_round_variants() {
    for variant in [variants::indefatigable(), variants::perseverance()] {
        let mut game = Solitaire::from_variant(&variant, SessionConfig::default()).unwrap();
        game.deal();

        game.redeal().unwrap();
        game.redeal().unwrap();
        assert_eq!(game.round(), 3);
        assert!(!game.can_redeal(), "{} allowed a fourth round", variant.info.name);
    }
}

/// Unlimited variants keep redealing in interactive play.
#[test]
fn test_unlimited_rounds() {
    for variant in [variants::cruel(), variants::ripple_fan()] {
        let mut game = Solitaire::from_variant(&variant, SessionConfig::default()).unwrap();
        game.deal();
        for _ in 0..200 {
            game.redeal().unwrap();
        }
        assert!(game.can_redeal());
        assert_eq!(game.piles().total_cards(), 52);
    }
}

/// A cap of N rounds allows N - 1 redeals.
#[test]
fn test_cap_counts_initial_deal() {
    for max in 1..6u32 {
        let rules = GameRules::bakers_dozen_layout(12)
            .with_redeal(RedealConfig::limited(max))
            .with_deal(bakers_dozen::rules::DealPattern::face_up(4).then_foundations(4))
            .with_shuffle(bakers_dozen::rules::ShufflePolicy::rank_to_bottom(bakers_dozen::Rank::ACE));
        let mut game = Solitaire::new(rules, SessionConfig::default()).unwrap();
        game.deal();

        let mut redeals = 0;
        while game.can_redeal() {
            game.redeal().unwrap();
            redeals += 1;
        }
        assert_eq!(redeals, max - 1);
        assert_eq!(MaxRounds::Limited(max).redeals(), Some(max - 1));
    }
}

// =============================================================================
// Demo Mode
// =============================================================================

/// Demo play stops redealing at the move ceiling.
#[test]
fn test_demo_ceiling_stops_redeals() {
    let config = SessionConfig::default().demo().with_move_ceiling(10);
    let mut game = Solitaire::from_variant(&variants::cruel(), config).unwrap();
    game.deal();

    for _ in 0..10 {
        game.apply(Move::Redeal).unwrap();
    }
    assert_eq!(game.moves(), 10);
    assert!(!game.can_redeal());
    assert!(!game.legal_moves().contains(&Move::Redeal));
}

/// Demo auto-play of an unlimited variant always terminates.
#[test]
fn test_demo_autoplay_terminates() {
    for seed in 0..20 {
        let config = SessionConfig::default().with_seed(seed).demo();
        let mut game = Solitaire::from_variant(&variants::cruel(), config).unwrap();
        game.deal();
        let deck = game.piles().card_multiset();

        let outcome = game.autoplay(100_000);

        assert!(outcome.won || !game.can_redeal());
        // Foundation moves may continue past the ceiling, redeals may not
        assert!(game.moves() < 100 + 52);
        assert_eq!(game.piles().card_multiset(), deck);
        assert_eq!(outcome.won, game.is_won());
    }
}

/// Interactive auto-play is bounded by the step budget alone.
#[test]
fn test_interactive_autoplay_step_budget() {
    let mut game = Solitaire::from_variant(&variants::ripple_fan(), SessionConfig::default()).unwrap();
    game.deal();

    let outcome = game.autoplay(30);
    assert!(outcome.moves <= 30);
    assert_eq!(game.moves(), outcome.moves);
    assert_eq!(sorted(game.piles().card_multiset()), sorted(full_deck(1)));
}
