use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::NUM_TILES;
use crate::game_state::position::{Position, PositionBuilder};
use crate::moves::chess_move::Move;

/// Build the successor position for `mv`.
///
/// The mover's side keeps every piece except the mover (and the castling
/// rook); the opponent keeps every piece except the captured one. The
/// mover's replacement lands on the destination with `has_moved` set, the
/// turn passes to the opponent, and the en-passant target survives only
/// directly after a double pawn push.
pub fn apply_move(position: &Position, mv: &Move) -> ChessResult<Position> {
    let Some(mover) = mv.moved_piece() else {
        return Err(ChessErrors::NullMoveApplied);
    };
    let Some(to) = mv.destination() else {
        return Err(ChessErrors::NullMoveApplied);
    };
    if usize::from(to) >= NUM_TILES {
        return Err(ChessErrors::InvalidSquare(i32::from(to)));
    }
    if position.piece_at(mover.square) != Some(mover) {
        return Err(ChessErrors::PieceNotOnBoard(mover.square));
    }

    let captured = mv.captured_piece();
    if let Some(victim) = captured {
        if position.piece_at(victim.square) != Some(victim) {
            return Err(ChessErrors::PieceNotOnBoard(victim.square));
        }
    }

    let castling_rook = match mv {
        Move::Castle { rook, rook_to, .. } => {
            if usize::from(*rook_to) >= NUM_TILES {
                return Err(ChessErrors::InvalidSquare(i32::from(*rook_to)));
            }
            if position.piece_at(rook.square) != Some(rook) {
                return Err(ChessErrors::PieceNotOnBoard(rook.square));
            }
            Some(rook)
        }
        _ => None,
    };

    let mut builder = PositionBuilder::new();

    for piece in position.active_pieces(mover.side) {
        if piece == mover || Some(piece) == castling_rook {
            continue;
        }
        builder.set_piece(*piece);
    }

    for piece in position.active_pieces(mover.side.opposite()) {
        if Some(piece) == captured {
            continue;
        }
        builder.set_piece(*piece);
    }

    let replacement = match mv.promotion() {
        Some(kind) => mover.promoted_to(kind, to),
        None => mover.moved_to(to),
    };
    builder.set_piece(replacement);

    if let Move::Castle { rook, rook_to, .. } = mv {
        builder.set_piece(rook.moved_to(*rook_to));
    }

    let en_passant_target = match mv {
        Move::PawnJump { piece, to } => Some((piece.square + to) / 2),
        _ => None,
    };

    builder
        .set_side_to_move(mover.side.opposite())
        .set_en_passant_target(en_passant_target);

    builder.build()
}
