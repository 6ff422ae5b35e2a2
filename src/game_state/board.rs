//! Occupancy grid.
//!
//! `Board` is plain data: eight columns, a caller-chosen number of rows, and
//! at most one occupant per cell. Coordinates are validated by callers.

use crate::game_state::game_rules::{BOARD_WIDTH, DEFAULT_BACK_RANK};
use crate::game_state::game_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<[Option<Occupant>; BOARD_WIDTH]>,
}

impl Board {
    /// Board with `height` empty rows.
    pub fn empty(height: usize) -> Self {
        Self {
            rows: vec![[None; BOARD_WIDTH]; height],
        }
    }

    /// Default formation: pawns 0..=7 on rank `height - 2`, back rank
    /// 8..=15 on rank `height - 1`. `height` must be at least 2.
    pub fn default_formation(height: usize) -> Self {
        let mut board = Self::empty(height);
        let pawn_rank = height - 2;
        let back_rank = height - 1;
        for col in 0..BOARD_WIDTH {
            board.rows[pawn_rank][col] = Some(Occupant::piece(PieceKind::Pawn, col as PieceId));
            board.rows[back_rank][col] = Some(Occupant::piece(
                DEFAULT_BACK_RANK[col],
                (BOARD_WIDTH + col) as PieceId,
            ));
        }
        board
    }

    /// Builds a board from explicit rows, top (border) row first.
    pub fn from_rows(rows: Vec<[Option<Occupant>; BOARD_WIDTH]>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height() && cell.col < BOARD_WIDTH
    }

    #[inline]
    pub fn at(&self, cell: Cell) -> Option<Occupant> {
        self.rows[cell.row][cell.col]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Occupant> {
        self.rows[row][col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[Option<Occupant>; BOARD_WIDTH] {
        &self.rows[row]
    }

    /// Writes `occupant` into `cell`, returning whatever was there.
    #[inline]
    pub fn place(&mut self, cell: Cell, occupant: Occupant) -> Option<Occupant> {
        self.rows[cell.row][cell.col].replace(occupant)
    }

    /// Empties `cell`, returning whatever was there.
    #[inline]
    pub fn take(&mut self, cell: Cell) -> Option<Occupant> {
        self.rows[cell.row][cell.col].take()
    }

    #[inline]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.at(cell).is_none()
    }

    #[inline]
    pub fn is_piece(&self, cell: Cell) -> bool {
        self.at(cell).is_some_and(Occupant::is_piece)
    }

    #[inline]
    pub fn is_unit(&self, cell: Cell) -> bool {
        self.at(cell).is_some_and(Occupant::is_unit)
    }

    #[inline]
    pub fn is_pawn(&self, cell: Cell) -> bool {
        self.piece_kind_at(cell) == Some(PieceKind::Pawn)
    }

    #[inline]
    pub fn is_king(&self, cell: Cell) -> bool {
        self.piece_kind_at(cell) == Some(PieceKind::King)
    }

    #[inline]
    pub fn piece_kind_at(&self, cell: Cell) -> Option<PieceKind> {
        self.at(cell).and_then(Occupant::piece_kind)
    }

    #[inline]
    pub fn unit_kind_at(&self, cell: Cell) -> Option<UnitKind> {
        self.at(cell).and_then(Occupant::unit_kind)
    }

    /// Every cell in row-major order, top row first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height()).flat_map(|row| (0..BOARD_WIDTH).map(move |col| Cell::new(row, col)))
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        self.cells()
            .filter_map(|cell| self.at(cell).map(|occupant| (cell, occupant)))
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().filter(|(_, o)| o.is_piece()).count()
    }

    pub fn unit_count(&self) -> usize {
        self.occupied().filter(|(_, o)| o.is_unit()).count()
    }

    #[inline]
    pub fn has_units(&self) -> bool {
        self.occupied().any(|(_, o)| o.is_unit())
    }

    pub fn king_cell(&self) -> Option<Cell> {
        self.cells().find(|&cell| self.is_king(cell))
    }

    pub fn find_piece(&self, id: PieceId) -> Option<(Cell, PieceKind)> {
        self.occupied().find_map(|(cell, occupant)| match occupant {
            Occupant::Piece { kind, id: found } if found == id => Some((cell, kind)),
            _ => None,
        })
    }

    /// Border columns with no occupant at all.
    pub fn empty_border_columns(&self) -> Vec<usize> {
        (0..BOARD_WIDTH).filter(|&col| self.rows[0][col].is_none()).collect()
    }

    pub fn border_has_units(&self) -> bool {
        self.rows[0].iter().flatten().any(|o| o.is_unit())
    }
}
