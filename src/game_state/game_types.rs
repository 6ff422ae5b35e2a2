//! Shared value types: occupants, coordinates, turn results, and the match
//! settings a caller chooses before play starts.

use std::fmt;

/// Player piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn on row 0 may be promoted to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

/// Infestation unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Walker,
    Stomper,
    Exploder,
    Infected,
}

/// Identity of a player piece. Promotion keeps the id of the pawn.
pub type PieceId = u8;

/// Content of a non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Piece { kind: PieceKind, id: PieceId },
    Unit(UnitKind),
}

impl Occupant {
    #[inline]
    pub const fn piece(kind: PieceKind, id: PieceId) -> Self {
        Occupant::Piece { kind, id }
    }

    #[inline]
    pub const fn is_piece(self) -> bool {
        matches!(self, Occupant::Piece { .. })
    }

    #[inline]
    pub const fn is_unit(self) -> bool {
        matches!(self, Occupant::Unit(_))
    }

    #[inline]
    pub const fn piece_kind(self) -> Option<PieceKind> {
        match self {
            Occupant::Piece { kind, .. } => Some(kind),
            Occupant::Unit(_) => None,
        }
    }

    #[inline]
    pub const fn piece_id(self) -> Option<PieceId> {
        match self {
            Occupant::Piece { id, .. } => Some(id),
            Occupant::Unit(_) => None,
        }
    }

    #[inline]
    pub const fn unit_kind(self) -> Option<UnitKind> {
        match self {
            Occupant::Unit(kind) => Some(kind),
            Occupant::Piece { .. } => None,
        }
    }
}

/// Board coordinate. Row 0 is the border where units spawn; rows grow
/// toward the player's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbor at `(d_row, d_col)`, or `None` when it leaves a board of
    /// `height` rows and eight columns.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, height: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row as isize)?;
        let col = self.col.checked_add_signed(d_col as isize)?;
        if row < height && col < crate::game_state::game_rules::BOARD_WIDTH {
            Some(Cell { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of every mutating gameplay operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The action resolved and the match continues.
    Ok,
    /// The action resolved, the match continues, and the wave or a
    /// detonation cost the player at least one piece.
    Captured,
    /// The action was rejected. Nothing changed.
    Wrong,
    /// The objective was met.
    Win,
    /// The king was overwritten or converted, or a border objective fell
    /// below its piece floor.
    Checkmate,
}

impl TurnResult {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnResult::Win | TurnResult::Checkmate)
    }
}

/// Spawn pressure. `Extreme` is the hardest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    #[inline]
    pub const fn is_hardest(self) -> bool {
        matches!(self, Difficulty::Extreme)
    }

    /// Next difficulty in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Extreme,
            Difficulty::Extreme => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        };
        f.write_str(name)
    }
}

/// Match objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    SurviveTheLongest,
    CaptureTheMost,
    BlockTheBorder,
    BlockAndClear,
    ClearTheBoard,
}

impl Objective {
    pub const ALL: [Objective; 5] = [
        Objective::SurviveTheLongest,
        Objective::CaptureTheMost,
        Objective::BlockTheBorder,
        Objective::BlockAndClear,
        Objective::ClearTheBoard,
    ];

    /// Next objective in menu order. `ClearTheBoard` only takes part in the
    /// cycle when `include_clear` is set, since it needs a layout that
    /// already holds units.
    pub fn next(self, include_clear: bool) -> Self {
        let cycle = if include_clear { 5 } else { 4 };
        let index = Self::ALL
            .iter()
            .position(|&objective| objective == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % cycle]
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Objective::SurviveTheLongest => "Survive The Longest",
            Objective::CaptureTheMost => "Capture The Most",
            Objective::BlockTheBorder => "Block The Border",
            Objective::BlockAndClear => "Block And Clear",
            Objective::ClearTheBoard => "Clear The Board",
        };
        f.write_str(name)
    }
}
