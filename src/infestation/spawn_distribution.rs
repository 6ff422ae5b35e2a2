//! Spawning new units on the border row.

use log::{debug, info};

use crate::game_state::board::Board;
use crate::game_state::game_rules::{spawn_table, SpawnTable, UNIT_KIND_THRESHOLDS};
use crate::game_state::game_types::*;
use crate::infestation::random_source::RandomSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: Vec<(Cell, UnitKind)>,
    /// Non-king pieces overwritten by a spawn.
    pub pieces_lost: u32,
    /// A chosen column held the king. Spawning stopped there.
    pub checkmate: bool,
}

/// Reads a cumulative table: the first entry whose running total reaches
/// `roll` wins. Falls back to the last count.
pub fn count_for_roll(table: SpawnTable, roll: u8) -> u8 {
    let mut cumulative = 0u16;
    for &(count, chance) in table {
        cumulative += chance as u16;
        if roll as u16 <= cumulative {
            return count;
        }
    }
    table.last().map_or(0, |&(count, _)| count)
}

pub fn kind_for_roll(roll: u8) -> UnitKind {
    UNIT_KIND_THRESHOLDS
        .iter()
        .find(|&&(bound, _)| roll <= bound)
        .map_or(UnitKind::Walker, |&(_, kind)| kind)
}

#[inline]
pub fn roll_spawn_count(difficulty: Difficulty, rng: &mut dyn RandomSource) -> u8 {
    count_for_roll(spawn_table(difficulty), rng.roll_percent())
}

#[inline]
pub fn roll_unit_kind(rng: &mut dyn RandomSource) -> UnitKind {
    kind_for_roll(rng.roll_percent())
}

/// Rolls how many units arrive, picks that many distinct columns out of
/// `columns`, and places a freshly rolled unit on row 0 of each.
pub fn spawn_units(
    board: &mut Board,
    difficulty: Difficulty,
    columns: &[usize],
    rng: &mut dyn RandomSource,
) -> SpawnReport {
    let mut report = SpawnReport::default();
    let count = roll_spawn_count(difficulty, rng) as usize;
    if count == 0 || columns.is_empty() {
        return report;
    }

    for pick in rng.sample(columns.len(), count) {
        let cell = Cell::new(0, columns[pick]);
        if board.is_king(cell) {
            info!("unit spawned onto the king at {cell}");
            report.checkmate = true;
            return report;
        }

        let kind = roll_unit_kind(rng);
        if let Some(Occupant::Piece { .. }) = board.place(cell, Occupant::Unit(kind)) {
            report.pieces_lost += 1;
        }
        debug!("spawned {kind:?} at {cell}");
        report.spawned.push((cell, kind));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_rules::NORMAL_SPAWN_TABLE;
    use crate::infestation::random_source::{ScriptedRandom, SeededRandom};

    #[test]
    fn normal_table_thresholds() {
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 1), 0);
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 30), 0);
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 31), 1);
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 90), 1);
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 91), 2);
        assert_eq!(count_for_roll(NORMAL_SPAWN_TABLE, 100), 2);
    }

    #[test]
    fn tables_may_grow_to_three_units() {
        const SURGE: SpawnTable = &[(0, 10), (1, 30), (2, 30), (3, 30)];
        assert_eq!(count_for_roll(SURGE, 71), 3);
        assert_eq!(count_for_roll(SURGE, 70), 2);
    }

    #[test]
    fn subtype_thresholds() {
        assert_eq!(kind_for_roll(1), UnitKind::Exploder);
        assert_eq!(kind_for_roll(10), UnitKind::Exploder);
        assert_eq!(kind_for_roll(11), UnitKind::Stomper);
        assert_eq!(kind_for_roll(20), UnitKind::Stomper);
        assert_eq!(kind_for_roll(21), UnitKind::Infected);
        assert_eq!(kind_for_roll(50), UnitKind::Infected);
        assert_eq!(kind_for_roll(51), UnitKind::Walker);
        assert_eq!(kind_for_roll(100), UnitKind::Walker);
    }

    #[test]
    fn scripted_spawn_lands_on_the_sampled_column() {
        let mut board = Board::default_formation(10);
        let mut rng = ScriptedRandom::new().with_percents(&[50, 15]).with_sample(&[3]);
        let columns: Vec<usize> = (0..8).collect();

        let report = spawn_units(&mut board, Difficulty::Normal, &columns, &mut rng);
        assert_eq!(report.spawned, vec![(Cell::new(0, 3), UnitKind::Stomper)]);
        assert_eq!(board.unit_count(), 1);
        assert!(!report.checkmate);
    }

    #[test]
    fn spawning_onto_the_king_stops_immediately() {
        let mut board = Board::empty(6);
        board.place(Cell::new(0, 2), Occupant::piece(PieceKind::King, 0));
        let mut rng = ScriptedRandom::new().with_percents(&[95, 60]).with_sample(&[2, 5]);
        let columns: Vec<usize> = (0..8).collect();

        let report = spawn_units(&mut board, Difficulty::Normal, &columns, &mut rng);
        assert!(report.checkmate);
        assert!(report.spawned.is_empty());
        assert_eq!(board.get(0, 5), None);
        assert!(board.is_king(Cell::new(0, 2)));
    }

    #[test]
    fn spawn_count_is_capped_by_eligible_columns() {
        let mut board = Board::empty(6);
        let mut rng = SeededRandom::from_seed(9);
        for _ in 0..50 {
            let report = spawn_units(&mut board, Difficulty::Hard, &[6], &mut rng);
            assert!(report.spawned.len() <= 1);
            for (cell, _) in report.spawned {
                assert_eq!(cell, Cell::new(0, 6));
            }
        }
    }

    #[test]
    fn no_columns_means_no_spawn() {
        let mut board = Board::empty(6);
        let mut rng = ScriptedRandom::new().with_percents(&[100]);
        let report = spawn_units(&mut board, Difficulty::Extreme, &[], &mut rng);
        assert_eq!(report, SpawnReport::default());
        assert_eq!(board.unit_count(), 0);
    }
}
