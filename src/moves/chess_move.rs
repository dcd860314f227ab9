//! Move variants.
//!
//! Every move carries the moving piece as it stands *before* the move, so
//! the origin square is implicit in `piece.square`. Equality is structural
//! over all fields, which is what legal-set membership checks rely on.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move of a non-pawn piece.
    Major { piece: Piece, to: Square },
    /// Non-pawn capture of the piece standing on `to`.
    Attack {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// Single-step pawn advance, promoting when `to` is on the last row.
    PawnPush {
        piece: Piece,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// Diagonal pawn capture, promoting when `to` is on the last row.
    PawnAttack {
        piece: Piece,
        to: Square,
        captured: Piece,
        promotion: Option<PieceKind>,
    },
    /// Two-step advance from the starting row.
    PawnJump { piece: Piece, to: Square },
    /// Diagonal capture of a pawn that sits beside the mover, not on `to`.
    PawnEnPassant {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// King and rook move together; `rook.square` is the rook's origin.
    Castle {
        side: CastleSide,
        king: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
    },
    /// "No move found" sentinel. Applying it is an error.
    Null,
}

impl Move {
    #[inline]
    pub const fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnEnPassant { piece, .. } => Some(piece),
            Move::Castle { king, .. } => Some(king),
            Move::Null => None,
        }
    }

    #[inline]
    pub const fn from(&self) -> Option<Square> {
        match self.moved_piece() {
            Some(piece) => Some(piece.square),
            None => None,
        }
    }

    #[inline]
    pub const fn destination(&self) -> Option<Square> {
        match self {
            Move::Major { to, .. }
            | Move::Attack { to, .. }
            | Move::PawnPush { to, .. }
            | Move::PawnAttack { to, .. }
            | Move::PawnJump { to, .. }
            | Move::PawnEnPassant { to, .. }
            | Move::Castle { to, .. } => Some(*to),
            Move::Null => None,
        }
    }

    #[inline]
    pub const fn captured_piece(&self) -> Option<&Piece> {
        match self {
            Move::Attack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassant { captured, .. } => Some(captured),
            _ => None,
        }
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self {
            Move::PawnPush { promotion, .. } | Move::PawnAttack { promotion, .. } => *promotion,
            _ => None,
        }
    }

    #[inline]
    pub const fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub const fn is_castling_move(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Move::PawnEnPassant { .. })
    }

    /// Forward pawn moves never capture, so they do not attack their target.
    #[inline]
    pub const fn is_pawn_advance(&self) -> bool {
        matches!(self, Move::PawnPush { .. } | Move::PawnJump { .. })
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Produce the successor position. Fails for the Null move.
    #[inline]
    pub fn apply(&self, position: &Position) -> ChessResult<Position> {
        apply_move(position, self)
    }
}

/// Long algebraic form (`e2e4`, `e7e8q`, `0000` for the Null move).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(from), Some(to)) = (self.from(), self.destination()) else {
            return write!(f, "0000");
        };
        let from = square_to_algebraic(from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}
