//! Match settings chosen before play starts.

use crate::game_state::game_rules::DEFAULT_BOARD_HEIGHT;
use crate::game_state::game_types::{Difficulty, Objective};

/// When the piece moved last turn may not be selected again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReselectPolicy {
    /// Lock the last-moved piece only on the hardest difficulty.
    #[default]
    HardestDifficultyOnly,
    /// Lock the last-moved piece on every difficulty.
    Always,
    /// Never lock.
    Never,
}

impl ReselectPolicy {
    #[inline]
    pub fn locks_last_moved(self, difficulty: Difficulty) -> bool {
        match self {
            ReselectPolicy::HardestDifficultyOnly => difficulty.is_hardest(),
            ReselectPolicy::Always => true,
            ReselectPolicy::Never => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub height: usize,
    pub difficulty: Difficulty,
    pub objective: Objective,
    pub reselect_policy: ReselectPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_BOARD_HEIGHT,
            difficulty: Difficulty::Normal,
            objective: Objective::SurviveTheLongest,
            reselect_policy: ReselectPolicy::default(),
        }
    }
}
