use crate::game_state::board::Board;
use crate::game_state::game_types::Cell;
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::rook_moves::is_legal_rook_move;

#[inline]
pub fn is_legal_queen_move(board: &Board, from: Cell, to: Cell) -> bool {
    is_legal_rook_move(board, from, to) || is_legal_bishop_move(board, from, to)
}
