use crate::game_state::game_types::Cell;
use crate::moves::move_shared::deltas;

/// L-shaped jump; occupancy along the way never matters.
#[inline]
pub fn is_legal_knight_move(from: Cell, to: Cell) -> bool {
    matches!(deltas(from, to), (2, 1) | (1, 2))
}
