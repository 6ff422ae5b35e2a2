use log::debug;

use crate::game_state::game_types::*;
use crate::game_state::match_state::MatchState;
use crate::infestation::unit_movement::detonate_exploder;

/// What a validated player move did to the board besides relocating the
/// piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub captured_unit: Option<UnitKind>,
    /// Player pieces cleared by a detonation.
    pub pieces_lost: u32,
    /// The king stood next to a detonated exploder.
    pub king_lost: bool,
}

/// Applies an already validated move: captures, detonation, and castling
/// eligibility. Turn and move counters are left to the caller.
pub fn apply_piece_move(state: &mut MatchState, from: Cell, to: Cell) -> MoveEffects {
    let mut effects = MoveEffects::default();
    let Some(moving) = state.board.take(from) else {
        return effects;
    };

    if let Some(Occupant::Unit(kind)) = state.board.place(to, moving) {
        state.counters.units_captured += 1;
        effects.captured_unit = Some(kind);
        debug!("piece captured {kind:?} at {to}");

        if kind == UnitKind::Exploder {
            for cleared in detonate_exploder(&mut state.board, to) {
                if let Occupant::Piece { kind, .. } = cleared {
                    effects.pieces_lost += 1;
                    effects.king_lost |= kind == PieceKind::King;
                }
            }
            state.lose_pieces(effects.pieces_lost);
        }
    }

    if let Occupant::Piece {
        kind: PieceKind::King | PieceKind::Rook,
        id,
    } = moving
    {
        state.castling.revoke(id);
    }

    effects
}
