//! Knight move generation.
//!
//! Fixed offset list; an offset is discarded when it would wrap around a
//! board edge from the knight's current column or leave the board.

use crate::game_state::board_geometry::{
    square_from_candidate, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN,
};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn generate_knight_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);

    for offset in KNIGHT_OFFSETS {
        if is_column_exclusion(piece.square, offset) {
            continue;
        }
        if let Some(to) = square_from_candidate(i32::from(piece.square) + offset) {
            push_step_move(position, piece, to, &mut out);
        }
    }

    out
}

fn is_column_exclusion(square: Square, offset: i32) -> bool {
    let index = square as usize;
    (FIRST_COLUMN[index] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[index] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[index] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[index] && matches!(offset, -15 | -6 | 10 | 17))
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board_geometry::column_of;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;
    use crate::game_state::position::Position;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let position = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let knight = position.piece_at(35).copied().expect("knight on d4");

        assert_eq!(generate_knight_moves(&knight, &position).len(), 8);
    }

    #[test]
    fn knight_never_wraps_around_an_edge() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

        for square in 0u8..64 {
            if position.is_occupied(square) {
                continue;
            }
            let knight = Piece::new(PieceKind::Knight, Side::White, square);
            for mv in generate_knight_moves(&knight, &position) {
                let to = mv.destination().expect("knight moves have a destination");
                assert!(to < 64);
                assert!(column_of(square).abs_diff(column_of(to)) <= 2, "{square} -> {to}");
            }
        }
    }

    #[test]
    fn corner_knight_has_two_targets_and_skips_friends() {
        let position = Position::initial();
        let knight = position.piece_at(57).copied().expect("knight on b1");
        let targets: Vec<_> = generate_knight_moves(&knight, &position)
            .iter()
            .filter_map(|mv| mv.destination())
            .collect();

        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&40));
        assert!(targets.contains(&42));
    }
}
