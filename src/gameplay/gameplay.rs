//! Public surface of the engine.
//!
//! `Gameplay` owns one match and exposes the player's actions: select a
//! piece, move it (or castle), skip a turn, promote a pawn. Every move or
//! skip is followed by one infestation wave. Rejected actions return
//! `TurnResult::Wrong` and leave the match untouched.

use log::{debug, info};

use crate::game_state::board::Board;
use crate::game_state::game_types::*;
use crate::game_state::match_state::{BoardSetup, MatchCounters, MatchState, SetupMetadata};
use crate::game_state::setup_error::SetupError;
use crate::gameplay::match_config::MatchConfig;
use crate::infestation::random_source::{RandomSource, SeededRandom};
use crate::infestation::wave_resolver::{resolve_wave, WaveReport};
use crate::moves::move_apply::apply_piece_move;
use crate::moves::move_validator::is_valid_move;

#[derive(Debug, Clone)]
pub struct Gameplay<R: RandomSource = SeededRandom> {
    state: MatchState,
    rng: R,
    last_wave: Option<WaveReport>,
}

impl<R: RandomSource> Gameplay<R> {
    /// New match on the default formation.
    pub fn new(config: &MatchConfig, rng: R) -> Result<Self, SetupError> {
        Ok(Self::with_state(MatchState::new(config)?, rng))
    }

    /// New match on a layout handed over by an external loader.
    pub fn from_setup(setup: BoardSetup, config: &MatchConfig, rng: R) -> Result<Self, SetupError> {
        Ok(Self::with_state(MatchState::from_setup(setup, config)?, rng))
    }

    fn with_state(state: MatchState, rng: R) -> Self {
        info!(
            "new match: {} on {}, height {}",
            state.objective,
            state.difficulty,
            state.height()
        );
        Self {
            state,
            rng,
            last_wave: None,
        }
    }

    /// Selects the piece at (`row`, `col`). Fails on empty cells, units,
    /// and the piece locked as last moved.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        let cell = Cell::new(row, col);
        if !self.state.board.contains(cell) {
            return false;
        }
        let Some(id) = self.state.board.at(cell).and_then(Occupant::piece_id) else {
            return false;
        };
        if self.state.last_moved == Some(id) {
            debug!("piece {id} moved last turn and cannot be selected");
            return false;
        }
        self.state.selected = Some(cell);
        true
    }

    pub fn unselect(&mut self) {
        self.state.selected = None;
    }

    /// Moves the piece at the start cell to the end cell, castling when the
    /// two cells hold an eligible king and rook. A valid action is followed
    /// by a wave whose result is returned, except that pieces cleared by
    /// the player's own detonation turn an `Ok` wave into `Captured`.
    pub fn move_piece(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> TurnResult {
        if self.state.is_over() {
            return TurnResult::Wrong;
        }
        let from = Cell::new(start_row, start_col);
        let to = Cell::new(end_row, end_col);

        if is_valid_move(&self.state.board, from, to) {
            let moved_id = self.state.board.at(from).and_then(Occupant::piece_id);
            let effects = apply_piece_move(&mut self.state, from, to);
            self.count_action(true);
            self.lock_last_moved(moved_id);

            if effects.king_lost {
                info!("king caught in the detonation at {to}");
                return self.finish(TurnResult::Checkmate);
            }
            let result = self.run_wave();
            if result == TurnResult::Ok && effects.pieces_lost > 0 {
                return TurnResult::Captured;
            }
            return result;
        }

        if let Some(castle) = self.state.castling.evaluate(&self.state.board, from, to) {
            debug!(
                "castling king {} with rook {}",
                castle.king_id, castle.rook_id
            );
            self.state.castling.revoke(castle.king_id);
            castle.apply(&mut self.state.board);
            self.count_action(true);
            self.lock_last_moved(Some(castle.king_id));
            return self.run_wave();
        }

        TurnResult::Wrong
    }

    /// Passes the turn. The infestation still advances.
    pub fn skip_turn(&mut self) -> TurnResult {
        if self.state.is_over() {
            return TurnResult::Wrong;
        }
        self.state.last_moved = None;
        self.count_action(false);
        self.run_wave()
    }

    /// Replaces the pawn on the border row at `col` with `kind`, keeping the
    /// pawn's id.
    pub fn promote_pawn(&mut self, col: usize, kind: PieceKind) -> bool {
        if self.state.is_over() || !kind.is_promotion_target() {
            return false;
        }
        let cell = Cell::new(0, col);
        if !self.state.board.contains(cell) {
            return false;
        }
        let Some(Occupant::Piece {
            kind: PieceKind::Pawn,
            id,
        }) = self.state.board.at(cell)
        else {
            return false;
        };
        self.state.board.place(cell, Occupant::piece(kind, id));
        debug!("pawn {id} promoted to {kind:?}");
        true
    }

    /// Border columns holding a pawn that may be promoted.
    pub fn promotable_columns(&self) -> Vec<usize> {
        (0..self.state.board.width())
            .filter(|&col| self.state.board.is_pawn(Cell::new(0, col)))
            .collect()
    }

    fn count_action(&mut self, moved: bool) {
        self.state.selected = None;
        self.state.counters.turns += 1;
        if moved {
            self.state.counters.moves += 1;
        }
    }

    fn lock_last_moved(&mut self, id: Option<PieceId>) {
        if self
            .state
            .reselect_policy
            .locks_last_moved(self.state.difficulty)
        {
            self.state.last_moved = id;
        }
    }

    fn run_wave(&mut self) -> TurnResult {
        let report = resolve_wave(&mut self.state, &mut self.rng);
        let result = report.result;
        self.last_wave = Some(report);
        self.finish(result)
    }

    fn finish(&mut self, result: TurnResult) -> TurnResult {
        if result.is_terminal() {
            info!(
                "match over with {result:?} after {} turns",
                self.state.counters.turns
            );
            self.state.outcome = Some(result);
        }
        result
    }

    // Queries for the presentation layer.

    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Occupant> {
        let cell = Cell::new(row, col);
        if self.state.board.contains(cell) {
            self.state.board.at(cell)
        } else {
            None
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn counters(&self) -> MatchCounters {
        self.state.counters
    }

    pub fn selected(&self) -> Option<Cell> {
        self.state.selected
    }

    pub fn castling_possible(&self) -> bool {
        self.state.castling_possible()
    }

    pub fn metadata(&self) -> SetupMetadata {
        self.state.metadata
    }

    pub fn outcome(&self) -> Option<TurnResult> {
        self.state.outcome
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Report of the most recent wave, if any ran.
    pub fn last_wave(&self) -> Option<&WaveReport> {
        self.last_wave.as_ref()
    }

    pub fn summary(&self) -> String {
        let won = self.state.outcome == Some(TurnResult::Win);
        self.state.objective.summary(&self.state.counters, won)
    }
}
