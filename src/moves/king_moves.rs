//! King step generation. Castling is derived by `Player`, not here.

use crate::game_state::board_geometry::square_from_candidate;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{is_edge_wrap, push_step_move};
use crate::moves::chess_move::Move;

pub const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_king_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);

    for offset in KING_OFFSETS {
        if is_edge_wrap(piece.square, offset) {
            continue;
        }
        if let Some(to) = square_from_candidate(i32::from(piece.square) + offset) {
            push_step_move(position, piece, to, &mut out);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board_geometry::column_of;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;
    use crate::game_state::position::Position;

    #[test]
    fn corner_king_has_three_targets() {
        let position = Position::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").expect("FEN should parse");
        let king = *position.king(Side::White);

        assert_eq!(generate_king_moves(&king, &position).len(), 3);
    }

    #[test]
    fn king_steps_stay_within_one_column() {
        let position = Position::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").expect("FEN should parse");

        for square in 0u8..64 {
            if position.is_occupied(square) {
                continue;
            }
            let king = Piece::new(PieceKind::King, Side::Black, square);
            for mv in generate_king_moves(&king, &position) {
                let to = mv.destination().expect("king moves have a destination");
                assert!(column_of(square).abs_diff(column_of(to)) <= 1);
            }
        }
    }

    #[test]
    fn king_captures_adjacent_enemy() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1").expect("FEN should parse");
        let king = *position.king(Side::White);
        let captures: Vec<_> = generate_king_moves(&king, &position)
            .into_iter()
            .filter(|mv| mv.is_attack())
            .collect();

        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].destination(), Some(52));
    }
}
