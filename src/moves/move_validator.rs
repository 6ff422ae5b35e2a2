//! Per-kind move legality.
//!
//! A move is rejected outright when the destination holds a player piece or
//! the source does not. Otherwise the piece kind picks the predicate.

use crate::game_state::board::Board;
use crate::game_state::game_types::{Cell, PieceKind};
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::king_moves::is_legal_king_move;
use crate::moves::knight_moves::is_legal_knight_move;
use crate::moves::pawn_moves::is_legal_pawn_move;
use crate::moves::queen_moves::is_legal_queen_move;
use crate::moves::rook_moves::is_legal_rook_move;

pub fn is_valid_move(board: &Board, from: Cell, to: Cell) -> bool {
    if !board.contains(from) || !board.contains(to) || board.is_piece(to) {
        return false;
    }
    let Some(kind) = board.piece_kind_at(from) else {
        return false;
    };

    match kind {
        PieceKind::Pawn => is_legal_pawn_move(board, from, to),
        PieceKind::Rook => is_legal_rook_move(board, from, to),
        PieceKind::Knight => is_legal_knight_move(from, to),
        PieceKind::Bishop => is_legal_bishop_move(board, from, to),
        PieceKind::Queen => is_legal_queen_move(board, from, to),
        PieceKind::King => is_legal_king_move(from, to),
    }
}
