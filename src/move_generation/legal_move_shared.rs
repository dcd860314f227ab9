//! Helpers shared by the per-piece generators.

use crate::game_state::board_geometry::{square_from_candidate, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub const BISHOP_DIRECTIONS: [i32; 4] = [-9, -7, 7, 9];
pub const ROOK_DIRECTIONS: [i32; 4] = [-8, -1, 1, 8];
pub const QUEEN_DIRECTIONS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// What a piece finds on a candidate destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Empty,
    Enemy(Piece),
    Friendly,
}

#[inline]
pub fn classify_destination(position: &Position, mover: &Piece, square: Square) -> Destination {
    match position.piece_at(square) {
        None => Destination::Empty,
        Some(piece) if piece.side != mover.side => Destination::Enemy(*piece),
        Some(_) => Destination::Friendly,
    }
}

/// Emit a quiet or capturing non-pawn move onto `square`, if it is not
/// held by a friendly piece.
#[inline]
pub fn push_step_move(position: &Position, piece: &Piece, square: Square, out: &mut Vec<Move>) {
    match classify_destination(position, piece, square) {
        Destination::Empty => out.push(Move::Major {
            piece: *piece,
            to: square,
        }),
        Destination::Enemy(captured) => out.push(Move::Attack {
            piece: *piece,
            to: square,
            captured,
        }),
        Destination::Friendly => {}
    }
}

/// Stepping by `offset` from `square` would wrap around the left or right
/// board edge. Covers the one-step king and slider offsets.
#[inline]
pub fn is_edge_wrap(square: Square, offset: i32) -> bool {
    let index = square as usize;
    (FIRST_COLUMN[index] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[index] && matches!(offset, -7 | 1 | 9))
}

/// Walk each direction until the edge or the first occupied tile.
pub fn generate_sliding_moves(
    piece: &Piece,
    position: &Position,
    directions: &[i32],
) -> Vec<Move> {
    let mut out = Vec::with_capacity(14);

    for &offset in directions {
        let mut current = piece.square;
        loop {
            if is_edge_wrap(current, offset) {
                break;
            }
            let Some(next) = square_from_candidate(i32::from(current) + offset) else {
                break;
            };

            match classify_destination(position, piece, next) {
                Destination::Empty => out.push(Move::Major {
                    piece: *piece,
                    to: next,
                }),
                Destination::Enemy(captured) => {
                    out.push(Move::Attack {
                        piece: *piece,
                        to: next,
                        captured,
                    });
                    break;
                }
                Destination::Friendly => break,
            }
            current = next;
        }
    }

    out
}
