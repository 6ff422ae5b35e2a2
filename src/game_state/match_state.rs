//! Per-match mutable state.
//!
//! `MatchState` owns the board, the counters shown to the player, castling
//! eligibility, and the selection/last-moved bookkeeping. It is created once
//! per match, either from the default formation or from a pre-validated
//! layout, and is only mutated through `Gameplay`.

use crate::game_state::board::Board;
use crate::game_state::game_rules::{MAX_BOARD_HEIGHT, MIN_BOARD_HEIGHT};
use crate::game_state::game_types::*;
use crate::game_state::setup_error::SetupError;
use crate::gameplay::match_config::{MatchConfig, ReselectPolicy};
use crate::moves::castling::CastlingRights;

/// Counters exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCounters {
    /// Starts at 1; every resolved move, castle, or skip adds one.
    pub turns: u32,
    /// Successful moves and castles only.
    pub moves: u32,
    pub units_captured: u32,
    pub pieces_remaining: u32,
}

/// Flags handed over by the layout loader alongside a custom board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetupMetadata {
    pub objective_locked: bool,
    pub difficulty_locked: bool,
}

/// A validated layout supplied by an external loader.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    pub board: Board,
    pub height: usize,
    pub metadata: SetupMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub board: Board,
    pub selected: Option<Cell>,
    pub last_moved: Option<PieceId>,
    pub counters: MatchCounters,
    pub castling: CastlingRights,
    pub difficulty: Difficulty,
    pub objective: Objective,
    pub reselect_policy: ReselectPolicy,
    pub metadata: SetupMetadata,
    /// Set once the match ends with `Win` or `Checkmate`.
    pub outcome: Option<TurnResult>,
}

impl MatchState {
    /// Match on the default formation.
    pub fn new(config: &MatchConfig) -> Result<Self, SetupError> {
        check_height(config.height)?;
        Ok(Self::with_board(
            Board::default_formation(config.height),
            config,
            SetupMetadata::default(),
        ))
    }

    /// Match on a supplied layout. The layout's contents are trusted; only
    /// its height is checked.
    pub fn from_setup(setup: BoardSetup, config: &MatchConfig) -> Result<Self, SetupError> {
        check_height(setup.height)?;
        if setup.board.height() != setup.height {
            return Err(SetupError::HeightMismatch {
                declared: setup.height,
                actual: setup.board.height(),
            });
        }
        Ok(Self::with_board(setup.board, config, setup.metadata))
    }

    fn with_board(board: Board, config: &MatchConfig, metadata: SetupMetadata) -> Self {
        let castling = CastlingRights::from_board(&board);
        let pieces_remaining = board.piece_count() as u32;
        Self {
            board,
            selected: None,
            last_moved: None,
            counters: MatchCounters {
                turns: 1,
                moves: 0,
                units_captured: 0,
                pieces_remaining,
            },
            castling,
            difficulty: config.difficulty,
            objective: config.objective,
            reselect_policy: config.reselect_policy,
            metadata,
            outcome: None,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.board.height()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether any king/rook pairing on the board can still castle.
    pub fn castling_possible(&self) -> bool {
        self.castling.any_available(&self.board)
    }

    /// Records a lost piece without letting the counter wrap.
    #[inline]
    pub fn lose_pieces(&mut self, count: u32) {
        self.counters.pieces_remaining = self.counters.pieces_remaining.saturating_sub(count);
    }
}

fn check_height(height: usize) -> Result<(), SetupError> {
    if (MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT).contains(&height) {
        Ok(())
    } else {
        Err(SetupError::HeightOutOfRange(height))
    }
}
