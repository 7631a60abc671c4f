//! The built-in members of the Baker's Dozen family.
//!
//! Each function returns the complete description of one game. Shared
//! shapes start from `GameRules::bakers_dozen_layout` and change only what
//! differs.

use super::catalog::{GameCategory, GameInfo, GameVariant, SkillLevel};
use crate::core::card::Rank;
use crate::rules::{
    BaseRank, DealPattern, Direction, FoundationRule, GameRules, RowRule, ShufflePolicy,
    ShuffleStep,
};
use crate::talon::RedealConfig;

pub const CASTLES_IN_SPAIN: u32 = 83;
pub const MARTHA: u32 = 84;
pub const BAKERS_DOZEN: u32 = 31;
pub const SPANISH_PATIENCE: u32 = 85;
pub const GOOD_MEASURE: u32 = 86;
pub const CRUEL: u32 = 104;
pub const ROYAL_FAMILY: u32 = 291;
pub const PORTUGUESE_SOLITAIRE: u32 = 308;
pub const PERSEVERANCE: u32 = 404;
pub const RIPPLE_FAN: u32 = 369;
pub const INDEFATIGABLE: u32 = 515;
pub const SPANISH_PATIENCE_II: u32 = 664;

const FAMILY: GameCategory = GameCategory::BAKERS_DOZEN;
const OPEN_FAMILY: GameCategory = GameCategory(GameCategory::BAKERS_DOZEN.0 | GameCategory::OPEN.0);

/// Every built-in variant.
#[must_use]
pub fn all() -> Vec<GameVariant> {
    vec![
        castles_in_spain(),
        martha(),
        bakers_dozen(),
        spanish_patience(),
        good_measure(),
        cruel(),
        royal_family(),
        portuguese_solitaire(),
        perseverance(),
        ripple_fan(),
        indefatigable(),
        spanish_patience_ii(),
    ]
}

/// Baker's Dozen rows: build down by rank, spaces never filled.
fn bakers_dozen_rules() -> GameRules {
    GameRules::bakers_dozen_layout(13)
        .with_row_rule(RowRule::rank_only().with_base_rank(BaseRank::NoRank))
        .with_shuffle(ShufflePolicy::kings_to_row_bottoms())
        .with_deal(DealPattern::face_up(4))
}

/// Cruel: twelve open rows built down in suit, Aces start on the foundations.
fn cruel_rules() -> GameRules {
    GameRules::bakers_dozen_layout(12)
        .with_row_rule(RowRule::same_suit().with_base_rank(BaseRank::NoRank))
        .with_shuffle(ShufflePolicy::rank_to_bottom(Rank::ACE))
        .with_redeal(RedealConfig::unlimited())
        .with_deal(DealPattern::face_up(4).then_foundations(4))
}

/// Thirteen rows, three cards face down, any card fills a space.
pub fn castles_in_spain() -> GameVariant {
    GameVariant {
        info: GameInfo::new(CASTLES_IN_SPAIN, "Castles in Spain", FAMILY, SkillLevel::Balanced),
        rules: GameRules::bakers_dozen_layout(13),
    }
}

/// Aces start on the foundations; runs move as a unit.
pub fn martha() -> GameVariant {
    GameVariant {
        info: GameInfo::new(MARTHA, "Martha", FAMILY, SkillLevel::Balanced),
        rules: GameRules::bakers_dozen_layout(12)
            .with_row_rule(RowRule::alternate_color().unlimited().empty_accepts_single())
            .with_shuffle(ShufflePolicy::rank_to_bottom(Rank::ACE))
            .with_deal(DealPattern::from_flips(&[false, true, false, true]).then_foundations(4)),
    }
}

/// The namesake: open rows, Kings sunk, spaces never filled.
pub fn bakers_dozen() -> GameVariant {
    GameVariant {
        info: GameInfo::new(BAKERS_DOZEN, "Baker's Dozen", OPEN_FAMILY, SkillLevel::MostlySkill),
        rules: bakers_dozen_rules(),
    }
}

/// Baker's Dozen with foundations built in alternating colours.
pub fn spanish_patience() -> GameVariant {
    GameVariant {
        info: GameInfo::new(SPANISH_PATIENCE, "Spanish Patience", OPEN_FAMILY, SkillLevel::MostlySkill),
        rules: bakers_dozen_rules().with_foundation_rule(FoundationRule::alternate_color()),
    }
}

/// Only Kings fill a space; no King sinking.
pub fn portuguese_solitaire() -> GameVariant {
    GameVariant {
        info: GameInfo::new(PORTUGUESE_SOLITAIRE, "Portuguese Solitaire", OPEN_FAMILY, SkillLevel::MostlySkill),
        rules: bakers_dozen_rules()
            .with_row_rule(RowRule::rank_only().with_base_rank(BaseRank::Rank(Rank::KING)))
            .with_shuffle(ShufflePolicy::identity()),
    }
}

/// Any card fills a space; no King sinking.
pub fn spanish_patience_ii() -> GameVariant {
    GameVariant {
        info: GameInfo::new(SPANISH_PATIENCE_II, "Spanish Patience II", OPEN_FAMILY, SkillLevel::MostlySkill),
        rules: bakers_dozen_rules()
            .with_row_rule(RowRule::rank_only())
            .with_shuffle(ShufflePolicy::identity()),
    }
}

/// Ten rows of five, two Aces dealt to the foundations.
pub fn good_measure() -> GameVariant {
    let mut rules = bakers_dozen_rules()
        .with_shuffle(ShufflePolicy::kings_to_row_bottoms().then(ShuffleStep::MoveToBottom {
            rank: Rank::ACE,
            count: Some(2),
        }))
        .with_deal(DealPattern::face_up(5).then_foundations(2));
    rules.rows = 10;

    GameVariant {
        info: GameInfo::new(GOOD_MEASURE, "Good Measure", OPEN_FAMILY, SkillLevel::MostlySkill),
        rules,
    }
}

/// In-suit rows, unlimited redeals.
pub fn cruel() -> GameVariant {
    GameVariant {
        info: GameInfo::new(CRUEL, "Cruel", OPEN_FAMILY, SkillLevel::Balanced).with_redeals(None),
        rules: cruel_rules(),
    }
}

/// Foundations build down from the Kings; one redeal.
pub fn royal_family() -> GameVariant {
    GameVariant {
        info: GameInfo::new(ROYAL_FAMILY, "Royal Family", OPEN_FAMILY, SkillLevel::MostlySkill)
            .with_redeals(Some(1)),
        rules: cruel_rules()
            .with_row_rule(RowRule::alternate_color().with_direction(Direction::Either))
            .with_foundation_rule(FoundationRule::same_suit().starting_at(Rank::KING, Direction::Down))
            .with_shuffle(ShufflePolicy::rank_to_bottom(Rank::KING))
            .with_redeal(RedealConfig::limited(2)),
    }
}

/// Rows build up or down in suit; foundation cards stay put.
pub fn indefatigable() -> GameVariant {
    GameVariant {
        info: GameInfo::new(INDEFATIGABLE, "Indefatigable", OPEN_FAMILY, SkillLevel::MostlySkill)
            .with_redeals(Some(2)),
        rules: cruel_rules()
            .with_row_rule(RowRule::same_suit().with_direction(Direction::Either))
            .with_foundation_rule(FoundationRule::same_suit().locked())
            .with_redeal(RedealConfig::limited(3)),
    }
}

/// Shares Cruel's deal order; Kings are not sunk within their rows.
pub fn perseverance() -> GameVariant {
    GameVariant {
        info: GameInfo::new(PERSEVERANCE, "Perseverance", OPEN_FAMILY, SkillLevel::Balanced)
            .with_redeals(Some(2)),
        rules: cruel_rules()
            .with_row_rule(RowRule::same_suit().with_base_rank(BaseRank::NoRank).unlimited())
            .with_redeal(RedealConfig::limited(3)),
    }
}

/// Thirteen in-suit rows, unlimited redeals.
pub fn ripple_fan() -> GameVariant {
    GameVariant {
        info: GameInfo::new(RIPPLE_FAN, "Ripple Fan", FAMILY, SkillLevel::MostlySkill).with_redeals(None),
        rules: GameRules::bakers_dozen_layout(13)
            .with_row_rule(RowRule::same_suit().with_base_rank(BaseRank::NoRank))
            .with_redeal(RedealConfig::unlimited())
            .with_deal(DealPattern::face_up(4)),
    }
}
