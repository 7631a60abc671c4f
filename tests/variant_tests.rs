//! Built-in variant tests.
//!
//! Deal every game in the catalog and check the layout each one promises.

use bakers_dozen::core::{full_deck, Card, Rank, SessionConfig, Suit};
use bakers_dozen::games::{variants, GameCatalog, GameCategory, Move, Solitaire};
use bakers_dozen::piles::{PileId, PileManager};

fn dealt(variant: &bakers_dozen::GameVariant, seed: u64) -> Solitaire {
    let mut game = Solitaire::from_variant(variant, SessionConfig::default().with_seed(seed)).unwrap();
    game.deal();
    game
}

fn row_cards(piles: &PileManager, row: PileId) -> Vec<Card> {
    piles.pile(row).card_values().collect()
}

fn sorted_deck() -> Vec<Card> {
    let mut deck = full_deck(1);
    deck.sort_unstable();
    deck
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_builtin_catalog() {
    let catalog = GameCatalog::builtin();
    assert_eq!(catalog.len(), 12);

    let names: Vec<&str> = catalog.sorted().iter().map(|v| v.info.name.as_str()).collect();
    assert_eq!(names[0], "Baker's Dozen");
    assert!(names.contains(&"Spanish Patience II"));

    assert_eq!(catalog.lookup(variants::PERSEVERANCE).unwrap().info.redeals, Some(2));
    assert!(catalog.lookup(1).is_err());

    let open = catalog.find_by_category(GameCategory::OPEN).count();
    assert_eq!(open, 9);
}

// =============================================================================
// Conservation
// =============================================================================

/// Every variant deals the whole deck, nothing more or less.
#[test]
fn test_every_variant_conserves_cards() {
    for variant in variants::all() {
        for seed in 0..10 {
            let game = dealt(&variant, seed);
            assert_eq!(game.piles().card_multiset(), sorted_deck(), "{}", variant.info.name);
            assert!(game.piles().pile(game.piles().talon()).is_empty(), "{}", variant.info.name);
        }
    }
}

/// Legal moves never create or destroy cards.
#[test]
fn test_random_play_conserves_cards() {
    for variant in variants::all() {
        let mut game = dealt(&variant, 11);
        for step in 0..60 {
            let moves = game.legal_moves();
            let Some(&mv) = moves.get(step % moves.len().max(1)) else {
                break;
            };
            game.apply(mv).unwrap();
            assert_eq!(game.piles().card_multiset(), sorted_deck(), "{}", variant.info.name);
        }
    }
}

// =============================================================================
// Baker's Dozen
// =============================================================================

/// 13 rows of four, Kings never above a lower card in their row.
#[test]
fn test_bakers_dozen_deal() {
    for seed in 0..200 {
        let game = dealt(&variants::bakers_dozen(), seed);
        let piles = game.piles();

        for row in piles.rows() {
            let cards = row_cards(piles, row);
            assert_eq!(cards.len(), 4);
            assert!(piles.pile(row).cards().iter().all(|p| p.face_up));

            let kings = cards.iter().take_while(|c| c.is_king()).count();
            assert!(cards[kings..].iter().all(|c| !c.is_king()), "seed {seed}: {cards:?}");
            if kings < cards.len() {
                assert!(!cards[3].is_king());
            }
        }
        assert!(!game.can_redeal());
    }
}

/// Spaces in Baker's Dozen are never filled.
#[test]
fn test_bakers_dozen_empty_rows_stay_empty() {
    let game = dealt(&variants::bakers_dozen(), 1);
    for mv in game.legal_moves() {
        if let Move::Cards { to, .. } = mv {
            assert!(!game.piles().pile(to).is_empty());
        }
    }
}

// =============================================================================
// Other Layouts
// =============================================================================

#[test]
fn test_good_measure_deal() {
    for seed in 0..20 {
        let game = dealt(&variants::good_measure(), seed);
        let piles = game.piles();

        assert_eq!(piles.rows().count(), 10);
        assert!(piles.rows().all(|r| piles.pile(r).len() == 5));
        assert_eq!(piles.foundation_cards(), 2);
        for f in piles.foundations() {
            if let Some(top) = piles.pile(f).top() {
                assert!(top.card.is_ace());
            }
        }
    }
}

#[test]
fn test_martha_deal() {
    let game = dealt(&variants::martha(), 4);
    let piles = game.piles();

    assert_eq!(piles.rows().count(), 12);
    assert_eq!(piles.foundation_cards(), 4);
    for row in piles.rows() {
        let faces: Vec<bool> = piles.pile(row).cards().iter().map(|p| p.face_up).collect();
        assert_eq!(faces, vec![false, true, false, true]);
    }
}

#[test]
fn test_royal_family_kings_on_foundations() {
    let game = dealt(&variants::royal_family(), 8);
    let piles = game.piles();

    for (f, suit) in piles.foundations().zip(Suit::all()) {
        assert_eq!(piles.pile(f).top().unwrap().card, Card::new(Rank::KING, suit));
    }
    assert!(piles.rows().all(|r| piles.pile(r).len() == 4));
}

/// Portuguese Solitaire deals the shuffled deck untouched: top card first.
#[test]
fn test_portuguese_identity_deal() {
    let mut game = Solitaire::from_variant(&variants::portuguese_solitaire(), SessionConfig::default()).unwrap();
    let deck = full_deck(1);
    game.deal_deck(deck.clone()).unwrap();

    let piles = game.piles();
    let first_row = row_cards(piles, piles.row(0));
    assert_eq!(first_row, vec![deck[51], deck[38], deck[25], deck[12]]);

    // King base: a King may fill a space, nothing else may
    let rule = match piles.pile(piles.row(0)).kind {
        bakers_dozen::PileKind::Row(rule) => rule,
        _ => unreachable!(),
    };
    assert!(rule.accepts(None, &[Card::new(Rank::KING, Suit::SPADES)]));
    assert!(!rule.accepts(None, &[Card::new(Rank::new(10), Suit::SPADES)]));
}

#[test]
fn test_spanish_patience_alternate_foundations() {
    let game = dealt(&variants::spanish_patience(), 0);
    let piles = game.piles();
    let clubs = piles.foundations().next().unwrap();
    let pile = piles.pile(clubs);

    assert!(pile.accepts(&[Card::new(Rank::ACE, Suit::CLUBS)]));
    assert!(!pile.accepts(&[Card::new(Rank::ACE, Suit::HEARTS)]));
}

#[test]
fn test_deterministic_deals_differ_by_seed() {
    let a = dealt(&variants::castles_in_spain(), 1);
    let b = dealt(&variants::castles_in_spain(), 1);
    let c = dealt(&variants::castles_in_spain(), 2);

    assert_eq!(a.piles(), b.piles());
    assert_ne!(a.piles(), c.piles());
}

// =============================================================================
// Custom Rules
// =============================================================================

/// Rules loaded from JSON play like the built-in they came from.
#[test]
fn test_custom_rules_from_json() {
    let json = variants::cruel().rules.to_json().unwrap();
    let rules = bakers_dozen::GameRules::from_json(&json).unwrap();

    let mut game = Solitaire::new(rules, SessionConfig::default().with_seed(3)).unwrap();
    game.deal();
    assert!(game.can_redeal());
    assert_eq!(game.piles().foundation_cards(), 4);

    // Thirteen rows of four plus four Aces needs 56 cards
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["rows"] = serde_json::json!(13);
    let err = bakers_dozen::GameRules::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, bakers_dozen::SolitaireError::InvalidRules(_)));
}

/// Layouts that would strand cards or miss the foundations never load.
#[test]
fn test_unplayable_json_rules_are_rejected() {
    let cruel = variants::cruel().rules;

    let mut value: serde_json::Value = serde_json::to_value(&cruel).unwrap();
    value["deal"]["to_foundations"] = serde_json::json!(0);
    let err = bakers_dozen::GameRules::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, bakers_dozen::SolitaireError::InvalidRules(_)));

    let mut value: serde_json::Value = serde_json::to_value(&cruel).unwrap();
    value["decks"] = serde_json::json!(2);
    let err = bakers_dozen::GameRules::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, bakers_dozen::SolitaireError::InvalidRules(_)));
}

/// A two-deck Cruel that deals every card plays and redeals normally.
#[test]
fn test_two_deck_cruel_layout() {
    let mut rules = variants::cruel()
        .rules
        .with_deal(bakers_dozen::DealPattern::face_up(4).then_foundations(8));
    rules.rows = 24;
    rules.decks = 2;

    let mut game = Solitaire::new(rules, SessionConfig::default().with_seed(6)).unwrap();
    game.deal();
    assert_eq!(game.piles().foundation_cards(), 8);
    assert!(game.piles().pile(game.piles().talon()).is_empty());

    game.redeal().unwrap();
    assert_eq!(game.piles().total_cards(), 104);
}
