use crate::game_state::board::Board;
use crate::game_state::game_types::Cell;

/// Pawns advance toward row 0. Straight steps need empty cells, the double
/// step is only available from the pawn rank (`height - 2`), and the
/// diagonal step is a capture that only lands on a unit.
pub fn is_legal_pawn_move(board: &Board, from: Cell, to: Cell) -> bool {
    if to.row >= from.row {
        return false;
    }
    let advance = from.row - to.row;

    if from.col == to.col {
        return match advance {
            1 => board.is_empty_at(to),
            2 => {
                from.row + 2 == board.height()
                    && board.is_empty_at(to)
                    && board.is_empty_at(Cell::new(from.row - 1, from.col))
            }
            _ => false,
        };
    }

    advance == 1 && from.col.abs_diff(to.col) == 1 && board.is_unit(to)
}
