//! Board tiles. A tile is a small `Copy` value, so a position stores all
//! 64 of them inline.

use std::fmt;

use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty(Square),
    Occupied(Piece),
}

impl Tile {
    #[inline]
    pub fn create(square: Square, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Tile::Occupied(piece),
            None => Tile::Empty(square),
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        match self {
            Tile::Empty(square) => *square,
            Tile::Occupied(piece) => piece.square,
        }
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(piece) => write!(f, "{piece}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;

    #[test]
    fn empty_and_occupied_tiles_know_their_square() {
        let rook = Piece::new(PieceKind::Rook, Side::Black, 7);

        let empty = Tile::create(12, None);
        assert_eq!(empty.square(), 12);
        assert!(!empty.is_occupied());
        assert_eq!(empty.to_string(), "-");

        let occupied = Tile::create(7, Some(rook));
        assert_eq!(occupied.square(), 7);
        assert_eq!(occupied.piece(), Some(&rook));
        assert_eq!(occupied.to_string(), "r");
    }
}
