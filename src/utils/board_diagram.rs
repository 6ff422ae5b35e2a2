//! Compact text diagrams of a board.
//!
//! Rows are separated by `/`, top (border) row first. Player pieces use
//! `P N B R Q K`, units `w s i e`, and a digit `1..=8` stands for that many
//! empty cells. Piece ids are handed out in reading order, so the default
//! formation gets pawns 0..=7 and the back rank 8..=15.
//!
//! Diagrams are a fixture and debugging aid. Ids are not stored, so
//! emitting a board and parsing it back renumbers its pieces.

use crate::game_state::board::Board;
use crate::game_state::game_rules::BOARD_WIDTH;
use crate::game_state::game_types::*;

pub fn parse_board_diagram(diagram: &str) -> Result<Board, String> {
    let diagram = diagram.trim();
    if diagram.is_empty() {
        return Err("Empty board diagram".to_owned());
    }

    let mut rows = Vec::<[Option<Occupant>; BOARD_WIDTH]>::new();
    let mut next_id: PieceId = 0;
    let mut kings = 0usize;

    for (row_idx, row_str) in diagram.split('/').enumerate() {
        let mut row = [None; BOARD_WIDTH];
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=BOARD_WIDTH).contains(&step) {
                    return Err(format!("Invalid empty-cell count '{ch}' in row {row_idx}"));
                }
                col += step;
                if col > BOARD_WIDTH {
                    return Err(format!("Row {row_idx} has too many cells"));
                }
                continue;
            }

            let occupant = occupant_from_char(ch, next_id)
                .ok_or_else(|| format!("Invalid character '{ch}' in row {row_idx}"))?;
            if col >= BOARD_WIDTH {
                return Err(format!("Row {row_idx} has too many cells"));
            }
            if let Occupant::Piece { kind, .. } = occupant {
                next_id = next_id
                    .checked_add(1)
                    .ok_or("Board diagram has too many pieces")?;
                if kind == PieceKind::King {
                    kings += 1;
                }
            }
            row[col] = Some(occupant);
            col += 1;
        }

        if col != BOARD_WIDTH {
            return Err(format!("Row {row_idx} does not sum to {BOARD_WIDTH} cells"));
        }
        rows.push(row);
    }

    if kings > 1 {
        return Err("Board diagram has more than one king".to_owned());
    }

    Ok(Board::from_rows(rows))
}

pub fn board_to_diagram(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..board.height() {
        let mut empty_count = 0u8;

        for col in 0..board.width() {
            if let Some(occupant) = board.get(row, col) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(occupant_to_diagram_char(occupant));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < board.height() {
            out.push('/');
        }
    }

    out
}

fn occupant_from_char(ch: char, id: PieceId) -> Option<Occupant> {
    let piece = |kind| Some(Occupant::piece(kind, id));
    match ch {
        'P' => piece(PieceKind::Pawn),
        'N' => piece(PieceKind::Knight),
        'B' => piece(PieceKind::Bishop),
        'R' => piece(PieceKind::Rook),
        'Q' => piece(PieceKind::Queen),
        'K' => piece(PieceKind::King),
        'w' => Some(Occupant::Unit(UnitKind::Walker)),
        's' => Some(Occupant::Unit(UnitKind::Stomper)),
        'i' => Some(Occupant::Unit(UnitKind::Infected)),
        'e' => Some(Occupant::Unit(UnitKind::Exploder)),
        _ => None,
    }
}

fn occupant_to_diagram_char(occupant: Occupant) -> char {
    match occupant {
        Occupant::Piece { kind, .. } => match kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        },
        Occupant::Unit(kind) => match kind {
            UnitKind::Walker => 'w',
            UnitKind::Stomper => 's',
            UnitKind::Infected => 'i',
            UnitKind::Exploder => 'e',
        },
    }
}
