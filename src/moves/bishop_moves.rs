use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

#[inline]
pub fn generate_bishop_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    generate_sliding_moves(piece, position, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::position::Position;

    #[test]
    fn bishop_on_d4_sees_thirteen_squares_on_open_board() {
        let position = Position::from_fen("k7/8/8/8/3B4/8/8/7K w - - 0 1").expect("FEN should parse");
        let bishop = position.piece_at(35).copied().expect("bishop on d4");

        assert_eq!(generate_bishop_moves(&bishop, &position).len(), 13);
    }

    #[test]
    fn bishop_stops_at_first_enemy_and_captures_it() {
        let position = Position::from_fen("7k/8/8/8/8/4p3/8/2B1K3 w - - 0 1").expect("FEN should parse");
        let bishop = position.piece_at(58).copied().expect("bishop on c1");
        let moves = generate_bishop_moves(&bishop, &position);

        assert!(moves.iter().any(|mv| mv.is_attack() && mv.destination() == Some(44)));
        assert!(moves.iter().all(|mv| mv.destination() != Some(37)));
    }
}
