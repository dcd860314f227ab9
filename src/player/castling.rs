//! Castle move derivation.
//!
//! Castling is offered only when the king and the chosen rook are both
//! unmoved on their home squares, the king is not in check, every square
//! between them is empty, and the two squares the king crosses (the
//! destination included) are not attacked.

use crate::game_state::chess_rules::{KING_SIDE_ROOK_OFFSET, QUEEN_SIDE_ROOK_OFFSET};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_path_square_attacked;
use crate::moves::chess_move::{CastleSide, Move};

pub fn calculate_king_castles(
    position: &Position,
    king: &Piece,
    in_check: bool,
    opponent_legals: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::with_capacity(2);

    if !king.is_first_move() || in_check || king.square != king.side.king_home() {
        return castles;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if let Some(castle) = castle_for(position, king, side, opponent_legals) {
            castles.push(castle);
        }
    }

    castles
}

fn castle_for(
    position: &Position,
    king: &Piece,
    side: CastleSide,
    opponent_legals: &[Move],
) -> Option<Move> {
    let home = i32::from(king.square);
    let (rook_offset, step) = match side {
        CastleSide::KingSide => (KING_SIDE_ROOK_OFFSET, 1),
        CastleSide::QueenSide => (QUEEN_SIDE_ROOK_OFFSET, -1),
    };

    let rook = position.piece_at(offset_square(home, rook_offset)).copied()?;
    if !rook.kind.is_rook() || rook.side != king.side || !rook.is_first_move() {
        return None;
    }

    let blocked = (1..rook_offset.abs())
        .any(|distance| position.is_occupied(offset_square(home, step * distance)));
    if blocked {
        return None;
    }

    let crossed = offset_square(home, step);
    let to = offset_square(home, 2 * step);
    let enemy = king.side.opposite();
    if [crossed, to]
        .iter()
        .any(|&square| is_path_square_attacked(position, square, enemy, opponent_legals))
    {
        return None;
    }

    Some(Move::Castle {
        side,
        king: *king,
        to,
        rook,
        rook_to: crossed,
    })
}

/// Home squares sit on a back row, so these offsets never leave the board.
#[inline]
fn offset_square(home: i32, offset: i32) -> Square {
    (home + offset) as Square
}
