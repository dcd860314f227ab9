//! Pawn move generation.
//!
//! Candidate offsets are the single push, the double push and two diagonal
//! captures, each scaled by the side's direction. Diagonals are suppressed
//! on the edge column they would wrap around. Pawn moves that land on the
//! promotion row are emitted once per promotion kind.

use crate::game_state::board_geometry::{square_from_candidate, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{classify_destination, Destination};
use crate::moves::chess_move::Move;

const PUSH_OFFSET: i32 = 8;
const JUMP_OFFSET: i32 = 16;

/// Squares a pawn of `side` on `square` attacks diagonally.
pub fn pawn_attack_targets(side: Side, square: Square) -> [Option<Square>; 2] {
    let index = square as usize;
    let from = i32::from(square);
    let direction = side.direction();

    let seven_wraps = match side {
        Side::White => EIGHTH_COLUMN[index],
        Side::Black => FIRST_COLUMN[index],
    };
    let nine_wraps = match side {
        Side::White => FIRST_COLUMN[index],
        Side::Black => EIGHTH_COLUMN[index],
    };

    [
        if seven_wraps {
            None
        } else {
            square_from_candidate(from + direction * 7)
        },
        if nine_wraps {
            None
        } else {
            square_from_candidate(from + direction * 9)
        },
    ]
}

pub fn generate_pawn_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(4);
    let from = i32::from(piece.square);
    let direction = piece.side.direction();

    if let Some(to) = square_from_candidate(from + direction * PUSH_OFFSET) {
        if !position.is_occupied(to) {
            push_pawn_advance(piece, to, &mut out);

            if piece.is_first_move() && piece.side.is_pawn_start_square(piece.square) {
                if let Some(jump) = square_from_candidate(from + direction * JUMP_OFFSET) {
                    if !position.is_occupied(jump) {
                        out.push(Move::PawnJump {
                            piece: *piece,
                            to: jump,
                        });
                    }
                }
            }
        }
    }

    for to in pawn_attack_targets(piece.side, piece.square).into_iter().flatten() {
        match classify_destination(position, piece, to) {
            Destination::Enemy(captured) => push_pawn_attack(piece, to, captured, &mut out),
            Destination::Empty if position.en_passant_target() == Some(to) => {
                if let Some(captured) = en_passant_victim(position, piece, to) {
                    out.push(Move::PawnEnPassant {
                        piece: *piece,
                        to,
                        captured,
                    });
                }
            }
            _ => {}
        }
    }

    out
}

/// The enemy pawn that sits beside the mover, directly behind `to`.
fn en_passant_victim(position: &Position, piece: &Piece, to: Square) -> Option<Piece> {
    let beside = square_from_candidate(i32::from(to) - piece.side.direction() * PUSH_OFFSET)?;
    position
        .piece_at(beside)
        .filter(|victim| victim.side != piece.side && victim.kind.is_pawn())
        .copied()
}

fn push_pawn_advance(piece: &Piece, to: Square, out: &mut Vec<Move>) {
    if piece.side.is_promotion_square(to) {
        out.extend(PieceKind::PROMOTIONS.iter().map(|&kind| Move::PawnPush {
            piece: *piece,
            to,
            promotion: Some(kind),
        }));
    } else {
        out.push(Move::PawnPush {
            piece: *piece,
            to,
            promotion: None,
        });
    }
}

fn push_pawn_attack(piece: &Piece, to: Square, captured: Piece, out: &mut Vec<Move>) {
    if piece.side.is_promotion_square(to) {
        out.extend(PieceKind::PROMOTIONS.iter().map(|&kind| Move::PawnAttack {
            piece: *piece,
            to,
            captured,
            promotion: Some(kind),
        }));
    } else {
        out.push(Move::PawnAttack {
            piece: *piece,
            to,
            captured,
            promotion: None,
        });
    }
}
