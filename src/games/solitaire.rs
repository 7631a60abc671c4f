//! A game in progress.
//!
//! `Solitaire` interprets a `GameRules` value: it shuffles and deals,
//! validates and applies moves, redeals when the rules allow it, and
//! reports a win once every card sits on a foundation.
//!
//! ```
//! use bakers_dozen::core::SessionConfig;
//! use bakers_dozen::games::{variants, Solitaire};
//!
//! let mut game = Solitaire::from_variant(&variants::bakers_dozen(), SessionConfig::default()).unwrap();
//! game.deal();
//!
//! let rows: Vec<_> = game.piles().rows().collect();
//! assert_eq!(rows.len(), 13);
//! assert!(rows.iter().all(|&r| game.piles().pile(r).len() == 4));
//! assert!(!game.can_redeal());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::catalog::GameVariant;
use crate::core::card::{full_deck, Card};
use crate::core::config::SessionConfig;
use crate::core::error::{format_cards, Result, SolitaireError};
use crate::core::rng::GameRng;
use crate::piles::{PileId, PileManager};
use crate::rules::GameRules;
use crate::talon::RedealTalon;

/// A player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the top `count` cards of `from` onto `to`.
    Cards { from: PileId, to: PileId, count: usize },
    /// Gather the tableau and deal it out again.
    Redeal,
}

/// Summary of a demo run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayOutcome {
    /// Moves made during this run.
    pub moves: u32,
    pub redeals: u32,
    pub won: bool,
}

/// One game of one variant.
#[derive(Clone, Debug)]
pub struct Solitaire {
    rules: GameRules,
    config: SessionConfig,
    piles: PileManager,
    talon: Option<RedealTalon>,
    rng: GameRng,
    moves: u32,
}

impl Solitaire {
    /// Create an undealt game. Fails if the rules are not playable.
    pub fn new(rules: GameRules, config: SessionConfig) -> Result<Self> {
        rules.validate()?;
        let piles = PileManager::new(&rules);
        let talon = rules.redeal.map(RedealTalon::new);
        let rng = GameRng::new(config.seed);
        Ok(Self {
            rules,
            config,
            piles,
            talon,
            rng,
            moves: 0,
        })
    }

    /// Create an undealt game of a catalog variant.
    pub fn from_variant(variant: &GameVariant, config: SessionConfig) -> Result<Self> {
        Self::new(variant.rules.clone(), config)
    }

    /// Rules this game plays by.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Session settings: seed, demo mode, move ceiling.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Every pile of the game, read only.
    #[must_use]
    pub fn piles(&self) -> &PileManager {
        &self.piles
    }

    /// Moves made since the deal.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current round; always 1 for variants without a redeal.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.talon.as_ref().map_or(1, RedealTalon::round)
    }

    /// Every card is on a foundation.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.piles.foundation_cards() == self.rules.total_cards()
    }

    /// Shuffle a fresh deck from the session RNG and deal it.
    pub fn deal(&mut self) {
        let deck = self.rng.shuffled_deck(self.rules.decks);
        self.lay_out(deck);
    }

    /// Deal a specific shuffled deck. The variant's deal-order policy is
    /// still applied; the end of `deck` is treated as the top.
    ///
    /// `deck` must hold exactly the cards of the variant's decks, in any
    /// order. On error the game is left as it was.
    pub fn deal_deck(&mut self, deck: Vec<Card>) -> Result<()> {
        let expected = self.rules.total_cards();
        if deck.len() != expected {
            return Err(SolitaireError::DeckMismatch {
                expected,
                got: deck.len(),
            });
        }

        let mut given = deck.clone();
        given.sort_unstable();
        let mut complete = full_deck(self.rules.decks);
        complete.sort_unstable();
        if given != complete {
            return Err(SolitaireError::InvalidDeck {
                decks: self.rules.decks,
            });
        }

        self.lay_out(deck);
        Ok(())
    }

    fn lay_out(&mut self, shuffled: Vec<Card>) {
        self.piles = PileManager::new(&self.rules);
        self.talon = self.rules.redeal.map(RedealTalon::new);
        self.moves = 0;

        let order = self.rules.shuffle.apply(shuffled, self.rules.rows);
        self.piles.load_talon(order);

        let talon = self.piles.talon();
        let rows: Vec<PileId> = self.piles.rows().collect();
        for &face_up in &self.rules.deal.passes {
            for &row in &rows {
                if self.piles.pile(talon).is_empty() {
                    break;
                }
                self.piles.move_cards(1, talon, row);
                self.piles.set_top_face(row, face_up);
            }
        }

        for _ in 0..self.rules.deal.to_foundations {
            let Some(placed) = self.piles.pop(talon) else {
                break;
            };
            let card = placed.card;
            let Some(id) = self.piles.foundation_for(card) else {
                panic!("Initial deal drew {} for the foundations but no foundation takes it", card);
            };
            self.piles.push(id, card, true);
        }

        debug!(
            rows = self.rules.rows,
            left_in_talon = self.piles.pile(talon).len(),
            on_foundations = self.piles.foundation_cards(),
            "dealt new game"
        );
    }

    /// Check a move without applying it.
    pub fn check_move(&self, count: usize, from: PileId, to: PileId) -> Result<()> {
        let source = self.piles.get(from).ok_or(SolitaireError::UnknownPile(from))?;
        let target = self.piles.get(to).ok_or(SolitaireError::UnknownPile(to))?;

        if from == to {
            return Err(SolitaireError::illegal(count, from, to, "source and target are the same pile"));
        }
        if !source.can_move(count) {
            return Err(SolitaireError::illegal(count, from, to, "cards cannot be lifted from the source"));
        }
        let run = source.top_run(count).unwrap_or_default();
        if !target.accepts(&run) {
            return Err(SolitaireError::illegal(count, from, to, "target does not accept the cards"));
        }
        Ok(())
    }

    /// Move the top `count` cards of `from` onto `to` if the rules allow it.
    ///
    /// A face-down card left on top of a row is turned over.
    pub fn move_cards(&mut self, count: usize, from: PileId, to: PileId) -> Result<()> {
        self.check_move(count, from, to)?;

        if tracing::enabled!(tracing::Level::TRACE) {
            let run = self.piles.pile(from).top_run(count).unwrap_or_default();
            trace!(%from, %to, cards = %format_cards(&run), "move");
        }

        self.piles.move_cards(count, from, to);
        if self.piles.pile(from).is_row() && self.piles.pile(from).top().is_some_and(|p| !p.face_up) {
            self.piles.set_top_face(from, true);
        }
        self.moves += 1;
        Ok(())
    }

    /// Turn over the face-down top card of a row.
    pub fn flip(&mut self, pile: PileId) -> Result<()> {
        let target = self.piles.get(pile).ok_or(SolitaireError::UnknownPile(pile))?;
        match target.top() {
            Some(top) if target.is_row() && !top.face_up => {
                self.piles.set_top_face(pile, true);
                self.moves += 1;
                Ok(())
            }
            _ => Err(SolitaireError::IllegalFlip(pile)),
        }
    }

    /// May the player redeal now?
    #[must_use]
    pub fn can_redeal(&self) -> bool {
        let ceiling = self.config.ceiling_reached(self.moves);
        self.talon
            .as_ref()
            .is_some_and(|t| t.can_redeal(self.is_won(), ceiling))
    }

    /// Gather and redeal the tableau. Returns the number of cards redealt.
    pub fn redeal(&mut self) -> Result<usize> {
        if !self.can_redeal() {
            return Err(SolitaireError::RedealUnavailable { round: self.round() });
        }
        let talon = self
            .talon
            .as_mut()
            .ok_or(SolitaireError::RedealUnavailable { round: 1 })?;
        let cards = talon.redeal(&mut self.piles);
        self.moves += 1;
        Ok(cards)
    }

    /// Apply a move produced by `legal_moves` or built by the caller.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        match mv {
            Move::Cards { from, to, count } => self.move_cards(count, from, to),
            Move::Redeal => self.redeal().map(|_| ()),
        }
    }

    /// Every move currently allowed.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let sources: Vec<PileId> = self.piles.foundations().chain(self.piles.rows()).collect();

        for &from in &sources {
            let source = self.piles.pile(from);
            for count in 1..=source.len() {
                if !source.can_move(count) {
                    continue;
                }
                let Some(run) = source.top_run(count) else {
                    continue;
                };
                for &to in &sources {
                    if to != from && self.piles.pile(to).accepts(&run) {
                        moves.push(Move::Cards { from, to, count });
                    }
                }
            }
        }

        if self.can_redeal() {
            moves.push(Move::Redeal);
        }
        moves
    }

    /// Play on its own: send row cards to the foundations, redeal when
    /// stuck, stop when won, stuck, or after `max_steps` moves.
    pub fn autoplay(&mut self, max_steps: usize) -> AutoplayOutcome {
        let mut outcome = AutoplayOutcome::default();

        for _ in 0..max_steps {
            if self.is_won() {
                break;
            }

            let to_foundation = self.legal_moves().into_iter().find(|mv| match *mv {
                Move::Cards { from, to, .. } => {
                    self.piles.pile(from).is_row() && self.piles.pile(to).is_foundation()
                }
                Move::Redeal => false,
            });

            let mv = match to_foundation {
                Some(mv) => mv,
                None if self.can_redeal() => Move::Redeal,
                None => break,
            };

            if self.apply(mv).is_err() {
                break;
            }
            outcome.moves += 1;
            if mv == Move::Redeal {
                outcome.redeals += 1;
            }
        }

        outcome.won = self.is_won();
        if !outcome.won && self.config.ceiling_reached(self.moves) {
            warn!(moves = self.moves, "demo stopped at the move ceiling");
        }
        debug!(?outcome, "autoplay finished");
        outcome
    }
}
