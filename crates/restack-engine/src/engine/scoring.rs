//! Round scoring rules.
//!
//! A round pays its tier's base score minus 10 points per move beyond the
//! level's optimal count, floored at zero. Harder tiers pay more per round
//! but are not penalized more steeply per excess move.

use crate::core::Tier;

/// Points deducted per move beyond the level's optimal count.
pub const MOVE_PENALTY: u32 = 10;

/// Base score paid for winning a round at a given tier.
#[must_use]
pub const fn base_score(tier: Tier) -> u32 {
    match tier {
        Tier::Easy => 100,
        Tier::Medium => 300,
        Tier::Hard => 500,
    }
}

/// Score for a won round: base minus penalty, never negative.
#[must_use]
pub const fn round_score(tier: Tier, moves_taken: u32, optimal_moves: u32) -> u32 {
    let penalty = moves_taken.saturating_sub(optimal_moves) * MOVE_PENALTY;
    base_score(tier).saturating_sub(penalty)
}
