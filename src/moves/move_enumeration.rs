//! Legal player action enumeration.
//!
//! Walks every piece the player may select and collects the destinations
//! the validator accepts, then adds each castle the evaluator would allow.
//! Used by the autoplay harness and handy for move hints.

use crate::game_state::game_types::*;
use crate::game_state::match_state::MatchState;
use crate::moves::move_validator::is_valid_move;

/// A player action that `Gameplay::move_piece` would accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    Step { from: Cell, to: Cell },
    /// Given as the king's and rook's current cells.
    Castle { king: Cell, rook: Cell },
}

impl PlayerMove {
    /// The (start, end) pair to hand to `move_piece`.
    #[inline]
    pub fn endpoints(self) -> (Cell, Cell) {
        match self {
            PlayerMove::Step { from, to } => (from, to),
            PlayerMove::Castle { king, rook } => (king, rook),
        }
    }
}

pub fn legal_moves(state: &MatchState) -> Vec<PlayerMove> {
    let board = &state.board;
    let mut moves = Vec::<PlayerMove>::with_capacity(64);

    for (from, occupant) in board.occupied() {
        let Some(id) = occupant.piece_id() else {
            continue;
        };
        if state.last_moved == Some(id) {
            continue;
        }
        moves.extend(
            board
                .cells()
                .filter(|&to| is_valid_move(board, from, to))
                .map(|to| PlayerMove::Step { from, to }),
        );
    }

    for &(king_id, rook_id) in state.castling.pairs() {
        if state.last_moved == Some(king_id) {
            continue;
        }
        let (Some((king, _)), Some((rook, _))) = (board.find_piece(king_id), board.find_piece(rook_id))
        else {
            continue;
        };
        if state.castling.evaluate(board, king, rook).is_some() {
            moves.push(PlayerMove::Castle { king, rook });
        }
    }

    moves
}
