//! Crate root module declarations for the Infested Chess rules engine.
//!
//! This file exposes the board model, piece move rules, the infestation
//! (unit movement, spawning, and wave resolution), per-objective rules, the
//! gameplay surface, and utility helpers so binaries, benches, and front
//! ends can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod game_rules;
    pub mod game_types;
    pub mod match_state;
    pub mod setup_error;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod castling;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_apply;
    pub mod move_enumeration;
    pub mod move_shared;
    pub mod move_validator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod infestation {
    pub mod random_source;
    pub mod spawn_distribution;
    pub mod unit_movement;
    pub mod wave_resolver;
}

pub mod objectives {
    pub mod objective_rules;
}

pub mod gameplay {
    pub mod gameplay;
    pub mod match_config;
}

pub mod utils {
    pub mod board_diagram;
    pub mod match_harness;
    pub mod render_board;
}
