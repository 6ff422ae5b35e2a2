//! Per-objective rules.
//!
//! The wave resolver is shared by every objective. Each objective plugs in
//! a small table of pure functions: where units may spawn, when the match is
//! won, how many pieces must survive, and the end-of-match summary.

use crate::game_state::board::Board;
use crate::game_state::game_rules::{BOARD_WIDTH, BORDER_PIECES_FLOOR};
use crate::game_state::game_types::Objective;
use crate::game_state::match_state::MatchCounters;

pub struct ObjectiveRules {
    /// Checked before any unit moves. A win skips the rest of the wave.
    pub won_before_wave: fn(&Board) -> bool,
    /// Checked once every unit has moved, before spawning.
    pub won_after_wave: fn(&Board) -> bool,
    /// Border columns new units may spawn on.
    pub spawn_columns: fn(&Board) -> Vec<usize>,
    /// The match is lost once fewer pieces than this remain.
    pub pieces_floor: Option<u32>,
    pub summary: fn(&MatchCounters, bool) -> String,
}

impl Objective {
    pub fn rules(self) -> &'static ObjectiveRules {
        match self {
            Objective::SurviveTheLongest => &SURVIVE_THE_LONGEST,
            Objective::CaptureTheMost => &CAPTURE_THE_MOST,
            Objective::BlockTheBorder => &BLOCK_THE_BORDER,
            Objective::BlockAndClear => &BLOCK_AND_CLEAR,
            Objective::ClearTheBoard => &CLEAR_THE_BOARD,
        }
    }

    #[inline]
    pub fn is_border_objective(self) -> bool {
        self.rules().pieces_floor.is_some()
    }

    #[inline]
    pub fn summary(self, counters: &MatchCounters, won: bool) -> String {
        (self.rules().summary)(counters, won)
    }
}

static SURVIVE_THE_LONGEST: ObjectiveRules = ObjectiveRules {
    won_before_wave: never,
    won_after_wave: never,
    spawn_columns: all_columns,
    pieces_floor: None,
    summary: |counters, _| format!("Survived turns: {}", counters.turns),
};

static CAPTURE_THE_MOST: ObjectiveRules = ObjectiveRules {
    won_before_wave: never,
    won_after_wave: never,
    spawn_columns: all_columns,
    pieces_floor: None,
    summary: |counters, _| format!("Units captured: {}", counters.units_captured),
};

static BLOCK_THE_BORDER: ObjectiveRules = ObjectiveRules {
    won_before_wave: never,
    won_after_wave: border_blocked,
    spawn_columns: Board::empty_border_columns,
    pieces_floor: Some(BORDER_PIECES_FLOOR),
    summary: |counters, won| {
        if won {
            format!("You blocked the border in {} moves", counters.moves)
        } else {
            "You didn't manage to block the border".to_string()
        }
    },
};

static BLOCK_AND_CLEAR: ObjectiveRules = ObjectiveRules {
    won_before_wave: never,
    won_after_wave: |board| border_blocked(board) && !board.has_units(),
    spawn_columns: Board::empty_border_columns,
    pieces_floor: Some(BORDER_PIECES_FLOOR),
    summary: |counters, won| {
        if won {
            format!(
                "You cleared the board and blocked the border in {} moves",
                counters.moves
            )
        } else {
            "You didn't manage to block the border and clear the board".to_string()
        }
    },
};

static CLEAR_THE_BOARD: ObjectiveRules = ObjectiveRules {
    won_before_wave: |board| !board.has_units(),
    won_after_wave: never,
    spawn_columns: |_| Vec::new(),
    pieces_floor: None,
    summary: |counters, won| {
        if won {
            format!("You cleared the board in {} moves", counters.moves)
        } else {
            "You didn't manage to clear the board".to_string()
        }
    },
};

fn never(_: &Board) -> bool {
    false
}

fn all_columns(_: &Board) -> Vec<usize> {
    (0..BOARD_WIDTH).collect()
}

/// Every border cell holds a player piece: no empty cell to spawn on and no
/// unit standing there.
pub fn border_blocked(board: &Board) -> bool {
    board.empty_border_columns().is_empty() && !board.border_has_units()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_types::*;

    fn counters() -> MatchCounters {
        MatchCounters {
            turns: 12,
            moves: 9,
            units_captured: 4,
            pieces_remaining: 14,
        }
    }

    fn border_of_pawns(height: usize) -> Board {
        let mut board = Board::empty(height);
        for col in 0..BOARD_WIDTH {
            board.place(Cell::new(0, col), Occupant::piece(PieceKind::Pawn, col as PieceId));
        }
        board
    }

    #[test]
    fn survive_and_capture_never_win() {
        let boards = [Board::empty(6), border_of_pawns(6), Board::default_formation(6)];
        for objective in [Objective::SurviveTheLongest, Objective::CaptureTheMost] {
            let rules = objective.rules();
            for board in &boards {
                assert!(!(rules.won_before_wave)(board));
                assert!(!(rules.won_after_wave)(board));
            }
            assert_eq!((rules.spawn_columns)(&Board::empty(6)).len(), 8);
        }
    }

    #[test]
    fn border_is_blocked_only_by_a_full_rank_of_pieces() {
        let mut board = border_of_pawns(6);
        assert!(border_blocked(&board));

        board.place(Cell::new(0, 3), Occupant::Unit(UnitKind::Walker));
        assert!(!border_blocked(&board));

        board.take(Cell::new(0, 3));
        assert!(!border_blocked(&board));
        assert_eq!((BLOCK_THE_BORDER.spawn_columns)(&board), vec![3]);
    }

    #[test]
    fn block_and_clear_also_needs_an_empty_board() {
        let mut board = border_of_pawns(6);
        let rules = Objective::BlockAndClear.rules();
        assert!((rules.won_after_wave)(&board));

        board.place(Cell::new(4, 4), Occupant::Unit(UnitKind::Stomper));
        assert!(!(rules.won_after_wave)(&board));
        assert!((Objective::BlockTheBorder.rules().won_after_wave)(&board));
    }

    #[test]
    fn clear_the_board_wins_before_the_wave_and_never_spawns() {
        let rules = Objective::ClearTheBoard.rules();
        let mut board = Board::default_formation(8);
        assert!((rules.won_before_wave)(&board));
        board.place(Cell::new(2, 2), Occupant::Unit(UnitKind::Walker));
        assert!(!(rules.won_before_wave)(&board));
        assert!((rules.spawn_columns)(&board).is_empty());
    }

    #[test]
    fn only_blocking_objectives_have_a_piece_floor() {
        let border: Vec<Objective> = Objective::ALL
            .into_iter()
            .filter(|o| o.is_border_objective())
            .collect();
        assert_eq!(border, vec![Objective::BlockTheBorder, Objective::BlockAndClear]);
    }

    #[test]
    fn summaries_report_the_objective_score() {
        let counters = counters();
        assert_eq!(
            Objective::SurviveTheLongest.summary(&counters, false),
            "Survived turns: 12"
        );
        assert_eq!(
            Objective::CaptureTheMost.summary(&counters, false),
            "Units captured: 4"
        );
        assert_eq!(
            Objective::BlockTheBorder.summary(&counters, true),
            "You blocked the border in 9 moves"
        );
        assert_eq!(
            Objective::ClearTheBoard.summary(&counters, false),
            "You didn't manage to clear the board"
        );
    }
}
