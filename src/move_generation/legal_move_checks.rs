//! Attack queries over pseudo-legal move sets.
//!
//! A square is attacked when an opponent move could capture on it. Forward
//! pawn moves never capture and castles never land on an occupied square,
//! so neither counts. Empty squares additionally need the diagonal pawn
//! threats, which do not show up as moves at all.

use crate::game_state::chess_types::{Side, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::pawn_attack_targets;

#[inline]
fn attacks_square(mv: &Move, square: Square) -> bool {
    mv.destination() == Some(square) && !mv.is_pawn_advance() && !mv.is_castling_move()
}

pub fn calculate_attacks_on_square(square: Square, moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .filter(|mv| attacks_square(mv, square))
        .copied()
        .collect()
}

#[inline]
pub fn is_square_attacked(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|mv| attacks_square(mv, square))
}

pub fn pawn_threatens_square(position: &Position, square: Square, by: Side) -> bool {
    position
        .active_pieces(by)
        .iter()
        .filter(|piece| piece.kind.is_pawn())
        .any(|pawn| pawn_attack_targets(by, pawn.square).contains(&Some(square)))
}

/// Attack test for the empty squares a castling king crosses.
#[inline]
pub fn is_path_square_attacked(
    position: &Position,
    square: Square,
    by: Side,
    opponent_moves: &[Move],
) -> bool {
    is_square_attacked(square, opponent_moves) || pawn_threatens_square(position, square, by)
}

pub fn is_king_in_check(position: &Position, side: Side) -> bool {
    let opponent_moves = generate_pseudo_legal_moves(position, side.opposite());
    is_square_attacked(position.king(side).square, &opponent_moves)
}
