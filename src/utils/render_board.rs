//! Terminal-oriented Unicode board renderer.
//!
//! Player pieces use the chess glyphs, units a capital letter, and empty
//! cells a middle dot. Row 0, where units spawn, is printed first.

use crate::game_state::board::Board;
use crate::game_state::game_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let header = column_header(board.width());
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in 0..board.height() {
        out.push_str(&format!("{row:>2} "));
        for col in 0..board.width() {
            out.push(board.get(row, col).map_or('·', occupant_to_char));
            if col + 1 < board.width() {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {row}"));
        out.push('\n');
    }

    out.push_str(&header);
    out
}

fn column_header(width: usize) -> String {
    let cols: Vec<String> = (0..width).map(|col| col.to_string()).collect();
    format!("   {}", cols.join(" "))
}

pub fn occupant_to_char(occupant: Occupant) -> char {
    match occupant {
        Occupant::Piece { kind, .. } => piece_to_unicode(kind),
        Occupant::Unit(kind) => unit_to_letter(kind),
    }
}

fn piece_to_unicode(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => '♙',
        PieceKind::Knight => '♘',
        PieceKind::Bishop => '♗',
        PieceKind::Rook => '♖',
        PieceKind::Queen => '♕',
        PieceKind::King => '♔',
    }
}

fn unit_to_letter(kind: UnitKind) -> char {
    match kind {
        UnitKind::Walker => 'W',
        UnitKind::Stomper => 'S',
        UnitKind::Infected => 'I',
        UnitKind::Exploder => 'E',
    }
}
