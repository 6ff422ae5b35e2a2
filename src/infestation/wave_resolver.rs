//! Once-per-turn advance of the infestation.
//!
//! Units are visited bottom row first and right to left within a row. Each
//! unit acts at most once: the cell it ends on is remembered so a unit that
//! moved into a not-yet-scanned cell is skipped when the scan reaches it. A
//! checkmate stops the wave on the spot; units later in the scan keep their
//! cells and nothing spawns. Otherwise the objective is consulted and new
//! units spawn on the border.

use std::collections::HashSet;

use log::{debug, info, trace};

use crate::game_state::game_rules::BOARD_WIDTH;
use crate::game_state::game_types::*;
use crate::game_state::match_state::MatchState;
use crate::infestation::random_source::RandomSource;
use crate::infestation::spawn_distribution::spawn_units;
use crate::infestation::unit_movement::{move_unit, StepEffect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveReport {
    /// `Ok`, `Captured`, `Win` or `Checkmate`.
    pub result: TurnResult,
    /// Units that acted, in scan order, as (from, landed).
    pub moves: Vec<(Cell, Cell)>,
    pub pieces_lost: u32,
    pub spawned: Vec<(Cell, UnitKind)>,
}

impl WaveReport {
    fn new() -> Self {
        Self {
            result: TurnResult::Ok,
            moves: Vec::new(),
            pieces_lost: 0,
            spawned: Vec::new(),
        }
    }

    fn finish(mut self, result: TurnResult) -> Self {
        self.result = result;
        self
    }
}

pub fn resolve_wave(state: &mut MatchState, rng: &mut dyn RandomSource) -> WaveReport {
    let rules = state.objective.rules();
    let report = WaveReport::new();

    if (rules.won_before_wave)(&state.board) {
        info!("{} met before the wave", state.objective);
        return report.finish(TurnResult::Win);
    }

    let mut report = match advance_units(state, rng, report) {
        Ok(report) => report,
        Err(report) => return report.finish(TurnResult::Checkmate),
    };

    if let Some(floor) = rules.pieces_floor {
        if state.counters.pieces_remaining < floor {
            info!(
                "{} pieces left, below the floor of {floor}",
                state.counters.pieces_remaining
            );
            return report.finish(TurnResult::Checkmate);
        }
    }

    if (rules.won_after_wave)(&state.board) {
        info!("{} met after the wave", state.objective);
        return report.finish(TurnResult::Win);
    }

    let columns = (rules.spawn_columns)(&state.board);
    let spawn = spawn_units(&mut state.board, state.difficulty, &columns, rng);
    state.lose_pieces(spawn.pieces_lost);
    report.pieces_lost += spawn.pieces_lost;
    report.spawned = spawn.spawned;
    if spawn.checkmate {
        return report.finish(TurnResult::Checkmate);
    }

    let result = if report.pieces_lost > 0 {
        TurnResult::Captured
    } else {
        TurnResult::Ok
    };
    debug!(
        "wave done: {} units acted, {} pieces lost, {} spawned",
        report.moves.len(),
        report.pieces_lost,
        report.spawned.len()
    );
    report.finish(result)
}

/// Scans and moves every unit once. `Err` carries the partial report of a
/// wave cut short by checkmate.
fn advance_units(
    state: &mut MatchState,
    rng: &mut dyn RandomSource,
    mut report: WaveReport,
) -> Result<WaveReport, WaveReport> {
    let mut acted: HashSet<Cell> = HashSet::new();

    for row in (0..state.height()).rev() {
        for col in (0..BOARD_WIDTH).rev() {
            let cell = Cell::new(row, col);
            let Some(kind) = state.board.unit_kind_at(cell) else {
                continue;
            };
            if acted.contains(&cell) {
                trace!("{kind:?} at {cell} already acted");
                continue;
            }

            let step = move_unit(&mut state.board, cell, kind, rng);
            state.lose_pieces(step.pieces_lost);
            report.pieces_lost += step.pieces_lost;
            if let Some(landed) = step.landed {
                report.moves.push((cell, landed));
                acted.insert(landed);
            }

            if step.effect == StepEffect::Checkmate {
                info!("{kind:?} from {cell} reached the king");
                return Err(report);
            }
        }
    }

    Ok(report)
}
