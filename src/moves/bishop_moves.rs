use crate::game_state::board::Board;
use crate::game_state::game_types::Cell;
use crate::moves::move_shared::{deltas, path_is_clear};

/// Equal non-zero row and column deltas with a clear diagonal.
pub fn is_legal_bishop_move(board: &Board, from: Cell, to: Cell) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if d_row != d_col || d_row == 0 {
        return false;
    }
    path_is_clear(board, from, to)
}
