//! Immutable piece values.
//!
//! A `Piece` is compared structurally: two pieces with the same kind, side,
//! square and move flag are interchangeable. Moving a piece never mutates
//! it; `Move::apply` places a replacement piece on the destination square.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::{
    bishop_moves::generate_bishop_moves, king_moves::generate_king_moves,
    knight_moves::generate_knight_moves, pawn_moves::generate_pawn_moves,
    queen_moves::generate_queen_moves, rook_moves::generate_rook_moves,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet, as placed at board setup.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self {
            kind,
            side,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    /// Replacement for this piece after it moved to `square`.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Self {
        Self {
            kind: self.kind,
            side: self.side,
            square,
            has_moved: true,
        }
    }

    /// Replacement for a pawn promoted to `kind` on `square`.
    #[inline]
    pub const fn promoted_to(self, kind: PieceKind, square: Square) -> Self {
        Self {
            kind,
            side: self.side,
            square,
            has_moved: true,
        }
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        !self.has_moved
    }

    /// Board symbol: upper-case for White, lower-case for Black.
    pub fn symbol(&self) -> char {
        match self.side {
            Side::White => self.kind.symbol().to_ascii_uppercase(),
            Side::Black => self.kind.symbol(),
        }
    }

    /// Pseudo-legal moves for this piece: board bounds, blockers and
    /// capture-only-enemy are respected, own-king safety is not.
    pub fn calculate_legal_moves(&self, position: &Position) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(self, position),
            PieceKind::Knight => generate_knight_moves(self, position),
            PieceKind::Bishop => generate_bishop_moves(self, position),
            PieceKind::Rook => generate_rook_moves(self, position),
            PieceKind::Queen => generate_queen_moves(self, position),
            PieceKind::King => generate_king_moves(self, position),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
