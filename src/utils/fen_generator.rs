use crate::game_state::chess_rules::NUM_TILES_PER_ROW;
use crate::game_state::chess_types::{Side, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

/// FEN for `position`. Clocks are not tracked, so they are always `0 1`.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Side::White => "w",
        Side::Black => "b",
    };
    let castling = generate_castling_field(position);
    let en_passant = generate_en_passant_field(position.en_passant_target());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for (row, tiles) in position.tiles().chunks(NUM_TILES_PER_ROW).enumerate() {
        let mut empty_count = 0u8;

        for tile in tiles {
            if let Some(piece) = tile.piece() {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.symbol());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < NUM_TILES_PER_ROW {
            out.push('/');
        }
    }

    out
}

/// A right is present while the king and the matching rook are both unmoved.
fn generate_castling_field(position: &Position) -> String {
    let mut out = String::new();

    for (side, rook_square, symbol) in [
        (Side::White, 63, 'K'),
        (Side::White, 56, 'Q'),
        (Side::Black, 7, 'k'),
        (Side::Black, 0, 'q'),
    ] {
        if has_castling_right(position, side, rook_square) {
            out.push(symbol);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn has_castling_right(position: &Position, side: Side, rook_square: Square) -> bool {
    let king = position.king(side);
    if !king.is_first_move() || king.square != side.king_home() {
        return false;
    }

    position.piece_at(rook_square).is_some_and(|rook| {
        rook.side == side && rook.kind.is_rook() && rook.is_first_move()
    })
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}
