//! Canonical chess-rule constants.
//!
//! Board dimensions, home squares for kings and rooks, and the standard
//! starting position FEN. Square 0 is a8 and square 63 is h1, so White
//! sits on the bottom two rows and advances toward decreasing indices.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const WHITE_KING_HOME: Square = 60;
pub const BLACK_KING_HOME: Square = 4;

/// Offsets from the king's home square used by castling.
pub const KING_SIDE_ROOK_OFFSET: i32 = 3;
pub const QUEEN_SIDE_ROOK_OFFSET: i32 = -4;
