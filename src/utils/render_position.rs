//! Terminal-oriented Unicode board renderer.
//!
//! A labelled alternative to `Position`'s plain `Display`, used by the
//! playout binary and handy when eyeballing positions in failing tests.

use crate::game_state::chess_rules::NUM_TILES_PER_ROW;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for (row, tiles) in position.tiles().chunks(NUM_TILES_PER_ROW).enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (file, tile) in tiles.iter().enumerate() {
            match tile.piece() {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file + 1 < NUM_TILES_PER_ROW {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}
