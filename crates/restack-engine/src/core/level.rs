use serde::{Deserialize, Serialize};

use crate::EmptyTierError;

use super::board::Column;

/// Difficulty tier of a level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[display("easy")]
    Easy,
    #[display("medium")]
    Medium,
    #[display("hard")]
    Hard,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

/// One authored puzzle: an initial layout, a target layout, and the minimum
/// number of moves needed to transform one into the other.
///
/// Levels are immutable catalog data. `optimal` is a scoring reference only;
/// the engine never enforces it as a solver bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub initial: Vec<Column>,
    pub target: Vec<Column>,
    pub optimal: u32,
}

impl Level {
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.initial.iter().map(Vec::len).sum()
    }
}

/// Read-only pools of levels keyed by difficulty tier.
///
/// Authoring conventions for the standard board shape: 3 to 9 blocks per
/// level, and no column ever needs to exceed 4 blocks along an optimal
/// solution. These are properties of the authored data, checked by the
/// catalog tests, not runtime invariants of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    #[serde(default)]
    easy: Vec<Level>,
    #[serde(default)]
    medium: Vec<Level>,
    #[serde(default)]
    hard: Vec<Level>,
}

impl LevelCatalog {
    #[must_use]
    pub fn new(easy: Vec<Level>, medium: Vec<Level>, hard: Vec<Level>) -> Self {
        Self { easy, medium, hard }
    }

    /// The built-in catalog: four hand-authored levels per tier.
    #[must_use]
    pub fn standard() -> Self {
        fn level(id: &str, initial: &[&[u8]], target: &[&[u8]], optimal: u32) -> Level {
            let columns = |layout: &[&[u8]]| layout.iter().map(|col| col.to_vec()).collect();
            Level {
                id: id.to_owned(),
                initial: columns(initial),
                target: columns(target),
                optimal,
            }
        }

        let easy = vec![
            level("easy-1", &[&[1], &[2], &[3]], &[&[3, 2, 1], &[], &[]], 5),
            level("easy-2", &[&[1, 2, 3], &[], &[]], &[&[], &[], &[3, 2, 1]], 3),
            level("easy-3", &[&[3, 1], &[4, 2], &[]], &[&[], &[4, 3], &[1, 2]], 3),
            level("easy-4", &[&[1, 2], &[3], &[4]], &[&[1], &[3, 2], &[4]], 1),
        ];
        let medium = vec![
            level(
                "medium-1",
                &[&[1, 2], &[3, 4], &[5]],
                &[&[], &[3, 4, 5], &[1, 2]],
                4,
            ),
            level(
                "medium-2",
                &[&[5], &[1, 2, 3], &[4]],
                &[&[5, 4], &[], &[3, 2, 1]],
                4,
            ),
            level(
                "medium-3",
                &[&[1, 2], &[3, 4], &[5, 6]],
                &[&[2, 1], &[4, 3], &[5, 6]],
                8,
            ),
            level(
                "medium-4",
                &[&[1, 2, 3], &[4, 5], &[6]],
                &[&[1], &[4, 5, 2], &[6, 3]],
                2,
            ),
        ];
        let hard = vec![
            level(
                "hard-1",
                &[&[1, 2, 3], &[4, 5], &[6, 7]],
                &[&[], &[4, 5, 3], &[6, 7, 2, 1]],
                3,
            ),
            level(
                "hard-2",
                &[&[1, 2, 3, 4], &[5, 6], &[7, 8]],
                &[&[], &[5, 6, 4, 3], &[7, 8, 2, 1]],
                4,
            ),
            level(
                "hard-3",
                &[&[1, 2], &[3, 4], &[5, 6, 7]],
                &[&[1, 2, 7], &[3, 4], &[6, 5]],
                5,
            ),
            level(
                "hard-4",
                &[&[1, 2, 3], &[4, 5, 6], &[7, 8]],
                &[&[1, 2, 3], &[4, 5, 6], &[8, 7]],
                4,
            ),
        ];

        Self::new(easy, medium, hard)
    }

    #[must_use]
    pub fn levels(&self, tier: Tier) -> &[Level] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    /// Ensures every tier has at least one level.
    pub fn validate(&self) -> Result<(), EmptyTierError> {
        for tier in Tier::ALL {
            if self.levels(tier).is_empty() {
                return Err(EmptyTierError { tier });
            }
        }
        Ok(())
    }
}
