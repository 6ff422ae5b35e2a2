use crate::game_state::board::Board;
use crate::game_state::game_types::Cell;

/// Cells strictly between `from` and `to` along a straight or diagonal
/// line. Empty for adjacent cells or when the two are not aligned.
pub fn cells_between(from: Cell, to: Cell) -> Vec<Cell> {
    let d_row = to.row as isize - from.row as isize;
    let d_col = to.col as isize - from.col as isize;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned {
        return Vec::new();
    }

    let steps = d_row.abs().max(d_col.abs());
    let row_step = d_row.signum();
    let col_step = d_col.signum();
    (1..steps)
        .map(|i| {
            Cell::new(
                (from.row as isize + row_step * i) as usize,
                (from.col as isize + col_step * i) as usize,
            )
        })
        .collect()
}

/// True when every cell strictly between `from` and `to` is empty.
#[inline]
pub fn path_is_clear(board: &Board, from: Cell, to: Cell) -> bool {
    cells_between(from, to)
        .into_iter()
        .all(|cell| board.is_empty_at(cell))
}

#[inline]
pub fn deltas(from: Cell, to: Cell) -> (usize, usize) {
    (from.row.abs_diff(to.row), from.col.abs_diff(to.col))
}
