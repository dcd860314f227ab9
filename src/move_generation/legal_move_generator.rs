//! Pseudo-legal move aggregation.
//!
//! Collects every active piece's own moves for one side. Nothing here
//! checks king safety; `Player::make_move` filters self-check afterwards.

use crate::game_state::chess_types::Side;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub fn calculate_legal_moves(position: &Position, pieces: &[Piece]) -> Vec<Move> {
    let mut moves = Vec::<Move>::with_capacity(pieces.len() * 4);

    for piece in pieces {
        moves.extend(piece.calculate_legal_moves(position));
    }

    moves
}

#[inline]
pub fn generate_pseudo_legal_moves(position: &Position, side: Side) -> Vec<Move> {
    calculate_legal_moves(position, position.active_pieces(side))
}
