use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, QUEEN_DIRECTIONS};
use crate::moves::chess_move::Move;

#[inline]
pub fn generate_queen_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    generate_sliding_moves(piece, position, &QUEEN_DIRECTIONS)
}
