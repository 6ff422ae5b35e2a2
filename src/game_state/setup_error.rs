use std::error::Error;
use std::fmt;

use crate::game_state::game_rules::{MAX_BOARD_HEIGHT, MIN_BOARD_HEIGHT};

/// Reasons a match cannot be created. No `MatchState` exists after any of
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Requested height lies outside `MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT`.
    HeightOutOfRange(usize),
    /// A supplied board does not have the declared number of rows.
    HeightMismatch { declared: usize, actual: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::HeightOutOfRange(height) => write!(
                f,
                "board height {height} is outside {MIN_BOARD_HEIGHT}..={MAX_BOARD_HEIGHT}"
            ),
            SetupError::HeightMismatch { declared, actual } => write!(
                f,
                "declared board height {declared} does not match the board's {actual} rows"
            ),
        }
    }
}

impl Error for SetupError {}
