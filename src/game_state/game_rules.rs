//! Canonical rule constants.
//!
//! Board geometry, the default formation, and the fixed percentage tables
//! used when rolling spawn counts and unit subtypes.

use crate::game_state::game_types::{Difficulty, PieceKind, UnitKind};

/// Every board is eight columns wide.
pub const BOARD_WIDTH: usize = 8;

pub const MIN_BOARD_HEIGHT: usize = 6;
pub const MAX_BOARD_HEIGHT: usize = 18;
pub const DEFAULT_BOARD_HEIGHT: usize = 10;

/// Back rank of the default formation, left to right. Ids follow the pawns,
/// so the rank is numbered 8..=15.
pub const DEFAULT_BACK_RANK: [PieceKind; BOARD_WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Border objectives are lost once fewer pieces than this remain.
pub const BORDER_PIECES_FLOOR: u32 = 8;

/// Upper bound on steps a stomper takes in a single wave.
pub const STOMPER_MAX_STEPS: u8 = 3;

/// (units spawned, chance in percent). Chances of one table sum to 100.
pub type SpawnTable = &'static [(u8, u8)];

pub const EASY_SPAWN_TABLE: SpawnTable = &[(0, 50), (1, 50)];
pub const NORMAL_SPAWN_TABLE: SpawnTable = &[(0, 30), (1, 60), (2, 10)];
pub const HARD_SPAWN_TABLE: SpawnTable = &[(0, 20), (1, 40), (2, 40)];
pub const EXTREME_SPAWN_TABLE: SpawnTable = &[(0, 20), (1, 50), (2, 30)];

/// Cumulative subtype thresholds: a roll at or below the bound picks the kind.
pub const UNIT_KIND_THRESHOLDS: [(u8, UnitKind); 3] = [
    (10, UnitKind::Exploder),
    (20, UnitKind::Stomper),
    (50, UnitKind::Infected),
];

#[inline]
pub const fn spawn_table(difficulty: Difficulty) -> SpawnTable {
    match difficulty {
        Difficulty::Easy => EASY_SPAWN_TABLE,
        Difficulty::Normal => NORMAL_SPAWN_TABLE,
        Difficulty::Hard => HARD_SPAWN_TABLE,
        Difficulty::Extreme => EXTREME_SPAWN_TABLE,
    }
}
