use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

#[inline]
pub fn generate_rook_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    generate_sliding_moves(piece, position, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::position::Position;

    #[test]
    fn rook_on_d4_sees_fourteen_squares_on_open_board() {
        let position = Position::from_fen("7k/8/8/8/3R4/8/8/K7 w - - 0 1").expect("FEN should parse");
        let rook = position.piece_at(35).copied().expect("rook on d4");

        assert_eq!(generate_rook_moves(&rook, &position).len(), 14);
    }

    #[test]
    fn rook_blocked_by_own_piece() {
        let position = Position::initial();
        let rook = position.piece_at(56).copied().expect("rook on a1");

        assert!(generate_rook_moves(&rook, &position).is_empty());
    }

    #[test]
    fn rook_on_h_file_does_not_wrap_to_next_row() {
        let position = Position::from_fen("k7/8/8/7R/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let rook = position.piece_at(31).copied().expect("rook on h5");
        let moves = generate_rook_moves(&rook, &position);

        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|mv| mv.destination() != Some(32)));
    }
}
