//! Difficulty adaptation between rounds.
//!
//! Wins adapt the tier based on solve time, but transitions are only defined
//! out of `medium`: a fast medium win steps up, a slow one steps down, and
//! `hard`/`easy` are left where they are. A player who reaches `hard` or
//! `easy` therefore stays there until a skip (which always steps down one
//! tier) or a session reset.

use std::time::Duration;

use crate::core::Tier;

/// Winning faster than this steps `medium` up to `hard`.
pub const STEP_UP_UNDER: Duration = Duration::from_secs(30);

/// Winning slower than this steps `medium` down to `easy`.
pub const STEP_DOWN_OVER: Duration = Duration::from_secs(60);

/// Tier for the next round after a won round.
#[must_use]
pub fn tier_after_win(tier: Tier, time_taken: Duration) -> Tier {
    match tier {
        Tier::Medium if time_taken < STEP_UP_UNDER => Tier::Hard,
        Tier::Medium if time_taken > STEP_DOWN_OVER => Tier::Easy,
        other => other,
    }
}

/// Tier for the next round after a skipped round: one step down, floor `easy`.
#[must_use]
pub const fn tier_after_skip(tier: Tier) -> Tier {
    match tier {
        Tier::Hard => Tier::Medium,
        Tier::Medium | Tier::Easy => Tier::Easy,
    }
}
