//! Core value types shared by every layer of the rules engine.
//!
//! `Side` and `PieceKind` are small `Copy` enums; per-kind and per-side
//! behavior is dispatched with `match` instead of trait objects.

use crate::game_state::board_geometry::{EIGHTH_ROW, FIRST_ROW, SECOND_ROW, SEVENTH_ROW};
use crate::game_state::chess_rules::{BLACK_KING_HOME, WHITE_KING_HOME};

/// Board square index (`0..=63`), row-major from a8.
pub type Square = u8;

/// Side to move, also called the alliance of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Sign applied to forward pawn offsets. White moves toward a8.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    #[inline]
    pub fn is_pawn_start_square(self, square: Square) -> bool {
        let rows = match self {
            Side::White => &SEVENTH_ROW,
            Side::Black => &SECOND_ROW,
        };
        rows.get(square as usize).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_promotion_square(self, square: Square) -> bool {
        let rows = match self {
            Side::White => &FIRST_ROW,
            Side::Black => &EIGHTH_ROW,
        };
        rows.get(square as usize).copied().unwrap_or(false)
    }

    #[inline]
    pub const fn king_home(self) -> Square {
        match self {
            Side::White => WHITE_KING_HOME,
            Side::Black => BLACK_KING_HOME,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (side is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices, most valuable first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lower-case display symbol; White pieces are shown upper-case.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn)
    }
}
