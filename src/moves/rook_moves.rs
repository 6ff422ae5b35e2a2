use crate::game_state::board::Board;
use crate::game_state::game_types::Cell;
use crate::moves::move_shared::path_is_clear;

/// Same row or same column with nothing in between.
pub fn is_legal_rook_move(board: &Board, from: Cell, to: Cell) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_is_clear(board, from, to)
}
