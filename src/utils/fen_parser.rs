//! FEN-to-Position parser.
//!
//! Positions carry per-piece `has_moved` flags instead of castling rights,
//! so the rights field is folded into the king and rook flags: a king or
//! rook counts as unmoved only when it stands on its home square and the
//! matching right is present. Pawns off their starting row count as moved.
//! The move clocks are validated but not stored.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::NUM_TILES_PER_ROW;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::{Position, PositionBuilder};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingRights {
    white_king_side: bool,
    white_queen_side: bool,
    black_king_side: bool,
    black_queen_side: bool,
}

impl CastlingRights {
    fn any_for(self, side: Side) -> bool {
        match side {
            Side::White => self.white_king_side || self.white_queen_side,
            Side::Black => self.black_king_side || self.black_queen_side,
        }
    }

    /// Whether a rook of `side` on `square` still holds a castling right.
    fn rook_has_right(self, side: Side, square: Square) -> bool {
        match (side, square) {
            (Side::White, 63) => self.white_king_side,
            (Side::White, 56) => self.white_queen_side,
            (Side::Black, 7) => self.black_king_side,
            (Side::Black, 0) => self.black_queen_side,
            _ => false,
        }
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let invalid = |reason: &str| ChessErrors::InvalidFen(format!("{reason}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    if let Some(halfmove_part) = parts.next() {
        halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid("invalid halfmove clock"))?;
    }
    if let Some(fullmove_part) = parts.next() {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid("invalid fullmove number"))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let rights = parse_castling_rights(castling_part)?;
    let mut builder = PositionBuilder::new();
    parse_board(board_part, rights, &mut builder)?;
    builder
        .set_side_to_move(parse_side_to_move(side_part)?)
        .set_en_passant_target(parse_en_passant_square(en_passant_part)?);

    builder.build()
}

fn parse_board(
    board_part: &str,
    rights: CastlingRights,
    builder: &mut PositionBuilder,
) -> ChessResult<()> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != NUM_TILES_PER_ROW {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // FEN lists ranks from 8 down to 1, which is exactly square order here.
    for (row, row_str) in rows.iter().enumerate() {
        let mut file = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let (side, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= NUM_TILES_PER_ROW {
                return Err(ChessErrors::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            let square = (row * NUM_TILES_PER_ROW + file) as Square;
            let piece = Piece::new(kind, side, square);
            builder.set_piece(piece.with_moved(!is_unmoved(&piece, rights)));
            file += 1;
        }

        if file != NUM_TILES_PER_ROW {
            return Err(ChessErrors::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn is_unmoved(piece: &Piece, rights: CastlingRights) -> bool {
    match piece.kind {
        PieceKind::Pawn => piece.side.is_pawn_start_square(piece.square),
        PieceKind::King => piece.square == piece.side.king_home() && rights.any_for(piece.side),
        PieceKind::Rook => rights.rook_has_right(piece.side, piece.square),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<(Side, PieceKind)> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else if ch.is_ascii_lowercase() {
        Side::Black
    } else {
        return None;
    };

    Some((side, PieceKind::from_symbol(ch)?))
}
