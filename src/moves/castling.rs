//! Castling eligibility and authorization.
//!
//! Eligibility is tracked per (king id, rook id) pairing. A pairing is
//! dropped for good once either piece moves or the king castles.

use crate::game_state::board::Board;
use crate::game_state::game_types::*;
use crate::moves::move_shared::path_is_clear;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pairs: Vec<(PieceId, PieceId)>,
}

/// Placements for an authorized castle, all on the row of the two pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingMove {
    pub king_id: PieceId,
    pub rook_id: PieceId,
    pub king_from: Cell,
    pub rook_from: Cell,
    pub king_col: usize,
    pub rook_col: usize,
}

impl CastlingRights {
    /// Pairs the king with every rook standing on its row.
    pub fn from_board(board: &Board) -> Self {
        let mut pairs = Vec::new();
        let king = board.king_cell().and_then(|cell| {
            board
                .at(cell)
                .and_then(Occupant::piece_id)
                .map(|id| (cell, id))
        });
        if let Some((king_cell, king_id)) = king {
            for col in 0..board.width() {
                if let Some(Occupant::Piece {
                    kind: PieceKind::Rook,
                    id,
                }) = board.get(king_cell.row, col)
                {
                    pairs.push((king_id, id));
                }
            }
        }
        Self { pairs }
    }

    #[inline]
    pub fn is_eligible(&self, king_id: PieceId, rook_id: PieceId) -> bool {
        self.pairs.contains(&(king_id, rook_id))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(PieceId, PieceId)] {
        &self.pairs
    }

    /// Drops every pairing that involves `id`.
    pub fn revoke(&mut self, id: PieceId) {
        self.pairs.retain(|&(king, rook)| king != id && rook != id);
    }

    /// Whether some remaining pairing still has both pieces on the board
    /// in their original roles.
    pub fn any_available(&self, board: &Board) -> bool {
        self.pairs.iter().any(|&(king_id, rook_id)| {
            matches!(board.find_piece(king_id), Some((_, PieceKind::King)))
                && matches!(board.find_piece(rook_id), Some((_, PieceKind::Rook)))
        })
    }

    /// Authorizes castling between `start` and `end`, given in either order
    /// (king then rook, or rook then king). Returns `None` unless both cells
    /// hold an eligible pairing on the same row with at least one empty cell
    /// between them and nothing else in the corridor.
    pub fn evaluate(&self, board: &Board, start: Cell, end: Cell) -> Option<CastlingMove> {
        if self.pairs.is_empty() || start.row != end.row {
            return None;
        }
        if !board.contains(start) || !board.contains(end) {
            return None;
        }

        let (king_from, king_id, rook_from, rook_id) = match (board.at(start)?, board.at(end)?) {
            (
                Occupant::Piece {
                    kind: PieceKind::King,
                    id: king,
                },
                Occupant::Piece {
                    kind: PieceKind::Rook,
                    id: rook,
                },
            ) => (start, king, end, rook),
            (
                Occupant::Piece {
                    kind: PieceKind::Rook,
                    id: rook,
                },
                Occupant::Piece {
                    kind: PieceKind::King,
                    id: king,
                },
            ) => (end, king, start, rook),
            _ => return None,
        };

        if !self.is_eligible(king_id, rook_id) {
            return None;
        }
        if king_from.col.abs_diff(rook_from.col) < 2 || !path_is_clear(board, king_from, rook_from) {
            return None;
        }

        let (king_col, rook_col) = if rook_from.col > king_from.col {
            (king_from.col + 2, king_from.col + 1)
        } else {
            (king_from.col - 2, king_from.col - 1)
        };

        Some(CastlingMove {
            king_id,
            rook_id,
            king_from,
            rook_from,
            king_col,
            rook_col,
        })
    }
}

impl CastlingMove {
    /// Moves both pieces. The caller has already revoked the pairings.
    pub fn apply(&self, board: &mut Board) {
        let row = self.king_from.row;
        board.take(self.king_from);
        board.take(self.rook_from);
        board.place(
            Cell::new(row, self.king_col),
            Occupant::piece(PieceKind::King, self.king_id),
        );
        board.place(
            Cell::new(row, self.rook_col),
            Occupant::piece(PieceKind::Rook, self.rook_id),
        );
    }
}
