//! Movement rules for each unit kind.
//!
//! Walkers, stompers and infected units share one direction priority:
//! down (toward the back rank), then right, then left. A direction is
//! blocked when it leaves the board or holds another unit. Exploders pick a
//! random free neighbor instead.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::game_rules::STOMPER_MAX_STEPS;
use crate::game_state::game_types::*;
use crate::infestation::random_source::RandomSource;

/// Down, right, left as (d_row, d_col).
pub const DIRECTION_PRIORITY: [(i8, i8); 3] = [(1, 0), (0, 1), (0, -1)];

pub const NEIGHBORHOOD: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    Quiet,
    Captured,
    Checkmate,
}

/// Result of one unit's action for the wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitStep {
    pub effect: StepEffect,
    /// Cell the unit's action ended on. `None` when it could not move.
    pub landed: Option<Cell>,
    /// Player pieces removed or converted, the king excluded.
    pub pieces_lost: u32,
}

impl UnitStep {
    const STUCK: UnitStep = UnitStep {
        effect: StepEffect::Quiet,
        landed: None,
        pieces_lost: 0,
    };

    fn checkmate(at: Cell) -> Self {
        UnitStep {
            effect: StepEffect::Checkmate,
            landed: Some(at),
            pieces_lost: 0,
        }
    }
}

/// First direction in priority order that is on the board and free of
/// units.
pub fn priority_target(board: &Board, from: Cell) -> Option<Cell> {
    DIRECTION_PRIORITY
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col, board.height()))
        .find(|&cell| !board.is_unit(cell))
}

/// Moves `kind` from `from` onto `to`, overwriting whatever piece is there.
fn advance(board: &mut Board, from: Cell, to: Cell, kind: UnitKind) -> StepEffect {
    board.take(from);
    match board.place(to, Occupant::Unit(kind)) {
        Some(Occupant::Piece {
            kind: PieceKind::King,
            ..
        }) => StepEffect::Checkmate,
        Some(Occupant::Piece { .. }) => StepEffect::Captured,
        _ => StepEffect::Quiet,
    }
}

fn single_step(effect: StepEffect, to: Cell) -> UnitStep {
    UnitStep {
        effect,
        landed: Some(to),
        pieces_lost: u32::from(effect == StepEffect::Captured),
    }
}

pub fn move_walker(board: &mut Board, from: Cell) -> UnitStep {
    let Some(to) = priority_target(board, from) else {
        return UnitStep::STUCK;
    };
    single_step(advance(board, from, to, UnitKind::Walker), to)
}

/// Keeps stepping while each step captures, up to `STOMPER_MAX_STEPS`.
pub fn move_stomper(board: &mut Board, from: Cell) -> UnitStep {
    let mut at = from;
    let mut pieces_lost = 0;
    let mut landed = None;

    for _ in 0..STOMPER_MAX_STEPS {
        let Some(to) = priority_target(board, at) else {
            break;
        };
        let effect = advance(board, at, to, UnitKind::Stomper);
        landed = Some(to);
        at = to;
        match effect {
            StepEffect::Checkmate => return UnitStep::checkmate(to),
            StepEffect::Captured => pieces_lost += 1,
            StepEffect::Quiet => break,
        }
    }

    UnitStep {
        effect: if pieces_lost > 0 {
            StepEffect::Captured
        } else {
            StepEffect::Quiet
        },
        landed,
        pieces_lost,
    }
}

/// A piece in the way is turned into a walker where it stands and the
/// infected unit is spent. An empty target is a plain move.
pub fn move_infected(board: &mut Board, from: Cell) -> UnitStep {
    let Some(to) = priority_target(board, from) else {
        return UnitStep::STUCK;
    };

    match board.at(to) {
        Some(Occupant::Piece { kind, .. }) => {
            board.take(from);
            board.place(to, Occupant::Unit(UnitKind::Walker));
            debug!("infected at {from} converted {kind:?} at {to}");
            if kind == PieceKind::King {
                UnitStep::checkmate(to)
            } else {
                single_step(StepEffect::Captured, to)
            }
        }
        _ => single_step(advance(board, from, to, UnitKind::Infected), to),
    }
}

/// Tries the eight neighbors in a shuffled order and takes the first one on
/// the board that holds no unit.
pub fn move_exploder(board: &mut Board, from: Cell, rng: &mut dyn RandomSource) -> UnitStep {
    let mut order: Vec<usize> = (0..NEIGHBORHOOD.len()).collect();
    rng.shuffle(&mut order);

    let target = order
        .into_iter()
        .filter_map(|i| {
            let (d_row, d_col) = NEIGHBORHOOD[i];
            from.offset(d_row, d_col, board.height())
        })
        .find(|&cell| !board.is_unit(cell));

    match target {
        Some(to) => single_step(advance(board, from, to, UnitKind::Exploder), to),
        None => UnitStep::STUCK,
    }
}

pub fn move_unit(
    board: &mut Board,
    from: Cell,
    kind: UnitKind,
    rng: &mut dyn RandomSource,
) -> UnitStep {
    match kind {
        UnitKind::Walker => move_walker(board, from),
        UnitKind::Stomper => move_stomper(board, from),
        UnitKind::Infected => move_infected(board, from),
        UnitKind::Exploder => move_exploder(board, from, rng),
    }
}

/// Clears the four orthogonal neighbors of a captured exploder, whatever
/// they hold. Returns the cleared occupants.
pub fn detonate_exploder(board: &mut Board, at: Cell) -> Vec<Occupant> {
    let height = board.height();
    let cleared: Vec<Occupant> = ORTHOGONAL
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col, height))
        .filter_map(|cell| board.take(cell))
        .collect();
    debug!("exploder at {at} detonated, {} cells cleared", cleared.len());
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infestation::random_source::ScriptedRandom;

    fn unit(kind: UnitKind) -> Occupant {
        Occupant::Unit(kind)
    }

    fn pawn(id: PieceId) -> Occupant {
        Occupant::piece(PieceKind::Pawn, id)
    }

    #[test]
    fn walker_prefers_down_then_right_then_left() {
        let mut board = Board::empty(6);
        let from = Cell::new(2, 3);
        board.place(from, unit(UnitKind::Walker));
        assert_eq!(move_walker(&mut board, from).landed, Some(Cell::new(3, 3)));

        let mut board = Board::empty(6);
        board.place(from, unit(UnitKind::Walker));
        board.place(Cell::new(3, 3), unit(UnitKind::Stomper));
        assert_eq!(move_walker(&mut board, from).landed, Some(Cell::new(2, 4)));

        board.take(Cell::new(2, 4));
        board.place(from, unit(UnitKind::Walker));
        board.place(Cell::new(2, 4), unit(UnitKind::Infected));
        assert_eq!(move_walker(&mut board, from).landed, Some(Cell::new(2, 2)));
        assert_eq!(board.get(2, 2), Some(unit(UnitKind::Walker)));
        assert_eq!(board.get(2, 3), None);
    }

    #[test]
    fn walker_hemmed_in_by_units_and_edges_stays_put() {
        let mut board = Board::empty(6);
        let from = Cell::new(5, 0);
        board.place(from, unit(UnitKind::Walker));
        board.place(Cell::new(5, 1), unit(UnitKind::Walker));

        assert_eq!(move_walker(&mut board, from), UnitStep::STUCK);
        assert_eq!(board.get(5, 0), Some(unit(UnitKind::Walker)));
    }

    #[test]
    fn walker_at_right_edge_turns_left_onto_the_correct_cell() {
        let mut board = Board::empty(6);
        let from = Cell::new(1, 7);
        board.place(from, unit(UnitKind::Walker));
        board.place(Cell::new(2, 7), unit(UnitKind::Walker));
        board.place(Cell::new(1, 6), pawn(6));

        let step = move_walker(&mut board, from);
        assert_eq!(step.effect, StepEffect::Captured);
        assert_eq!(step.landed, Some(Cell::new(1, 6)));
        assert_eq!(step.pieces_lost, 1);
    }

    #[test]
    fn walker_onto_king_is_checkmate_and_takes_the_cell() {
        let mut board = Board::empty(6);
        let from = Cell::new(3, 4);
        board.place(from, unit(UnitKind::Walker));
        board.place(Cell::new(4, 4), Occupant::piece(PieceKind::King, 12));

        let step = move_walker(&mut board, from);
        assert_eq!(step.effect, StepEffect::Checkmate);
        assert_eq!(board.get(4, 4), Some(unit(UnitKind::Walker)));
    }

    #[test]
    fn stomper_chains_up_to_three_captures() {
        let mut board = Board::empty(8);
        let from = Cell::new(1, 2);
        board.place(from, unit(UnitKind::Stomper));
        for row in 2..6 {
            board.place(Cell::new(row, 2), pawn(row as PieceId));
        }

        let step = move_stomper(&mut board, from);
        assert_eq!(step.effect, StepEffect::Captured);
        assert_eq!(step.pieces_lost, 3);
        assert_eq!(step.landed, Some(Cell::new(4, 2)));
        assert_eq!(board.get(4, 2), Some(unit(UnitKind::Stomper)));
        assert_eq!(board.get(5, 2), Some(pawn(5)));
        assert_eq!(board.unit_count(), 1);
    }

    #[test]
    fn stomper_stops_after_a_quiet_step() {
        let mut board = Board::empty(8);
        let from = Cell::new(1, 2);
        board.place(from, unit(UnitKind::Stomper));
        board.place(Cell::new(2, 2), pawn(0));
        board.place(Cell::new(4, 2), pawn(1));

        let step = move_stomper(&mut board, from);
        assert_eq!(step.pieces_lost, 1);
        assert_eq!(step.landed, Some(Cell::new(3, 2)));
        assert_eq!(board.get(4, 2), Some(pawn(1)));
    }

    #[test]
    fn stomper_quiet_first_step_ends_turn() {
        let mut board = Board::empty(8);
        let from = Cell::new(1, 2);
        board.place(from, unit(UnitKind::Stomper));
        board.place(Cell::new(3, 2), pawn(0));

        let step = move_stomper(&mut board, from);
        assert_eq!(step.effect, StepEffect::Quiet);
        assert_eq!(step.landed, Some(Cell::new(2, 2)));
        assert_eq!(board.get(3, 2), Some(pawn(0)));
    }

    #[test]
    fn stomper_chain_can_end_on_the_king() {
        let mut board = Board::empty(8);
        let from = Cell::new(1, 2);
        board.place(from, unit(UnitKind::Stomper));
        board.place(Cell::new(2, 2), pawn(0));
        board.place(Cell::new(3, 2), Occupant::piece(PieceKind::King, 12));

        assert_eq!(move_stomper(&mut board, from).effect, StepEffect::Checkmate);
        assert_eq!(board.get(3, 2), Some(unit(UnitKind::Stomper)));
    }

    #[test]
    fn infected_converts_piece_in_place() {
        let mut board = Board::empty(6);
        let from = Cell::new(2, 1);
        board.place(from, unit(UnitKind::Infected));
        board.place(Cell::new(3, 1), Occupant::piece(PieceKind::Bishop, 10));

        let step = move_infected(&mut board, from);
        assert_eq!(step.effect, StepEffect::Captured);
        assert_eq!(step.landed, Some(Cell::new(3, 1)));
        assert_eq!(board.get(3, 1), Some(unit(UnitKind::Walker)));
        assert_eq!(board.get(2, 1), None);
        assert_eq!(board.unit_count(), 1);
    }

    #[test]
    fn infected_moves_into_empty_cells() {
        let mut board = Board::empty(6);
        let from = Cell::new(2, 1);
        board.place(from, unit(UnitKind::Infected));

        let step = move_infected(&mut board, from);
        assert_eq!(step.effect, StepEffect::Quiet);
        assert_eq!(board.get(3, 1), Some(unit(UnitKind::Infected)));
        assert_eq!(board.get(2, 1), None);
    }

    #[test]
    fn infected_converting_the_king_is_checkmate() {
        let mut board = Board::empty(6);
        let from = Cell::new(4, 6);
        board.place(from, unit(UnitKind::Infected));
        board.place(Cell::new(5, 6), unit(UnitKind::Walker));
        board.place(Cell::new(4, 7), Occupant::piece(PieceKind::King, 12));

        assert_eq!(move_infected(&mut board, from).effect, StepEffect::Checkmate);
        assert_eq!(board.get(4, 7), Some(unit(UnitKind::Walker)));
    }

    #[test]
    fn exploder_takes_first_free_neighbor_in_shuffled_order() {
        let mut board = Board::empty(6);
        let from = Cell::new(0, 0);
        board.place(from, unit(UnitKind::Exploder));
        board.place(Cell::new(1, 1), unit(UnitKind::Walker));
        // (-1,-1), (1,1) then (0,1): off-board, blocked, free.
        let mut rng = ScriptedRandom::new().with_permutation(&[0, 7, 4, 1, 2, 3, 5, 6]);

        let step = move_exploder(&mut board, from, &mut rng);
        assert_eq!(step.landed, Some(Cell::new(0, 1)));
        assert_eq!(board.get(0, 1), Some(unit(UnitKind::Exploder)));
        assert_eq!(board.get(0, 0), None);
    }

    #[test]
    fn exploder_captures_and_never_detonates_on_its_own() {
        let mut board = Board::empty(6);
        let from = Cell::new(2, 2);
        board.place(from, unit(UnitKind::Exploder));
        board.place(Cell::new(3, 3), pawn(0));
        board.place(Cell::new(3, 4), pawn(1));
        let mut rng = ScriptedRandom::new().with_permutation(&[7, 0, 1, 2, 3, 4, 5, 6]);

        let step = move_exploder(&mut board, from, &mut rng);
        assert_eq!(step.effect, StepEffect::Captured);
        assert_eq!(board.get(3, 3), Some(unit(UnitKind::Exploder)));
        assert_eq!(board.get(3, 4), Some(pawn(1)));
    }

    #[test]
    fn exploder_stepping_onto_the_king_is_checkmate() {
        let mut board = Board::empty(6);
        let from = Cell::new(4, 4);
        board.place(from, unit(UnitKind::Exploder));
        board.place(Cell::new(5, 5), Occupant::piece(PieceKind::King, 12));
        let mut rng = ScriptedRandom::new().with_permutation(&[7, 0, 1, 2, 3, 4, 5, 6]);

        let step = move_exploder(&mut board, from, &mut rng);
        assert_eq!(step.effect, StepEffect::Checkmate);
        assert_eq!(step.landed, Some(Cell::new(5, 5)));
        assert_eq!(board.get(5, 5), Some(unit(UnitKind::Exploder)));
        assert_eq!(board.get(4, 4), None);
    }

    #[test]
    fn surrounded_exploder_stays_put() {
        let mut board = Board::empty(6);
        let from = Cell::new(0, 0);
        board.place(from, unit(UnitKind::Exploder));
        for cell in [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)] {
            board.place(cell, unit(UnitKind::Walker));
        }
        let mut rng = ScriptedRandom::new();
        assert_eq!(move_exploder(&mut board, from, &mut rng), UnitStep::STUCK);
    }

    #[test]
    fn detonation_clears_orthogonal_neighbors_only() {
        let mut board = Board::empty(6);
        let at = Cell::new(3, 3);
        board.place(Cell::new(2, 3), pawn(0));
        board.place(Cell::new(4, 3), unit(UnitKind::Walker));
        board.place(Cell::new(3, 2), Occupant::piece(PieceKind::Rook, 8));
        board.place(Cell::new(3, 4), unit(UnitKind::Stomper));
        board.place(Cell::new(2, 2), pawn(1));

        let cleared = detonate_exploder(&mut board, at);
        assert_eq!(cleared.len(), 4);
        for cell in [Cell::new(2, 3), Cell::new(4, 3), Cell::new(3, 2), Cell::new(3, 4)] {
            assert!(board.is_empty_at(cell));
        }
        assert_eq!(board.get(2, 2), Some(pawn(1)));
    }
}
