//! Game catalog.
//!
//! Descriptive metadata (id, name, category, difficulty) plus the rules
//! for every registered variant.
//!
//! ```
//! use bakers_dozen::games::GameCatalog;
//!
//! let catalog = GameCatalog::builtin();
//! let cruel = catalog.lookup(104).unwrap();
//! assert_eq!(cruel.info.name, "Cruel");
//! assert_eq!(cruel.info.redeals, None); // unlimited
//! ```

use std::ops::BitOr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SolitaireError};
use crate::rules::GameRules;

/// Category bitset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameCategory(pub u32);

impl GameCategory {
    /// Member of the Baker's Dozen family.
    pub const BAKERS_DOZEN: GameCategory = GameCategory(1 << 0);
    /// All cards are dealt face up.
    pub const OPEN: GameCategory = GameCategory(1 << 1);

    /// Every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: GameCategory) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for GameCategory {
    type Output = GameCategory;

    fn bitor(self, rhs: GameCategory) -> GameCategory {
        GameCategory(self.0 | rhs.0)
    }
}

/// How much a win depends on skill rather than the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Luck,
    MostlyLuck,
    Balanced,
    MostlySkill,
    Skill,
}

/// Catalog metadata for one variant. Purely descriptive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: u32,
    pub name: String,
    pub category: GameCategory,
    pub players: u8,
    pub decks: u8,
    /// Redeals shown to the player; `None` is unlimited.
    pub redeals: Option<u32>,
    pub skill_level: SkillLevel,
}

impl GameInfo {
    /// Single player, single deck, no redeals.
    pub fn new(id: u32, name: impl Into<String>, category: GameCategory, skill_level: SkillLevel) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            players: 1,
            decks: 1,
            redeals: Some(0),
            skill_level,
        }
    }

    /// Set the redeal count shown to the player.
    #[must_use]
    pub fn with_redeals(mut self, redeals: Option<u32>) -> Self {
        self.redeals = redeals;
        self
    }

    /// All cards dealt face up.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.category.contains(GameCategory::OPEN)
    }
}

/// A registered game: metadata plus rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVariant {
    pub info: GameInfo,
    pub rules: GameRules,
}

/// Registry of variants keyed by id.
#[derive(Clone, Debug, Default)]
pub struct GameCatalog {
    games: FxHashMap<u32, GameVariant>,
}

impl GameCatalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in variant.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for variant in super::variants::all() {
            catalog.register(variant);
        }
        catalog
    }

    /// Register a variant.
    ///
    /// Panics if the id is already taken.
    pub fn register(&mut self, variant: GameVariant) {
        if self.games.contains_key(&variant.info.id) {
            panic!("Game with id {} already registered", variant.info.id);
        }
        self.games.insert(variant.info.id, variant);
    }

    /// Variant by id, if registered.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&GameVariant> {
        self.games.get(&id)
    }

    /// Like `get`, but an unknown id is an error.
    pub fn lookup(&self, id: u32) -> Result<&GameVariant> {
        self.get(id).ok_or(SolitaireError::UnknownGame(id))
    }

    /// Find by display name, ignoring ASCII case.
    pub fn by_name(&self, name: &str) -> Result<&GameVariant> {
        self.games
            .values()
            .find(|v| v.info.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SolitaireError::UnknownGameName(name.to_string()))
    }

    /// Is `id` registered?
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.games.contains_key(&id)
    }

    /// Number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// No variants registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All variants in id order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&GameVariant> {
        let mut all: Vec<&GameVariant> = self.games.values().collect();
        all.sort_by_key(|v| v.info.id);
        all
    }

    /// Variants whose category contains `category`.
    pub fn find_by_category(&self, category: GameCategory) -> impl Iterator<Item = &GameVariant> {
        self.games.values().filter(move |v| v.info.category.contains(category))
    }
}
