use crate::game_state::game_types::Cell;
use crate::moves::move_shared::deltas;

/// One step in any of the eight directions.
#[inline]
pub fn is_legal_king_move(from: Cell, to: Cell) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}
