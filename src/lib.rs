//! Crate root module declarations for the tile_chess rules engine.
//!
//! Exposes the board model (tiles, pieces, immutable positions), per-piece
//! move generation, move application, the per-side player view with its
//! legality checks, and text utilities (FEN, algebraic notation, rendering,
//! random playouts) so binaries, benches, and tests share stable paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_geometry;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod position;
    pub mod tile;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_factory;
    pub mod perft;
}

pub mod player {
    pub mod castling;
    pub mod move_transition;
    pub mod player;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_position;
}
