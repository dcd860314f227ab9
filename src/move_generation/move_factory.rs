//! Look up a move by its endpoints.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// First move in the position's combined legal set that goes `from` -> `to`,
/// or `Move::Null` when there is none. Promotions resolve to a queen.
pub fn create_move(position: &Position, from: Square, to: Square) -> Move {
    create_move_with_promotion(position, from, to, None)
}

/// Like `create_move`, but selects the promotion kind when the move promotes.
///
/// `None` picks the queen; a kind that does not promote (pawn, king) never
/// matches, so the lookup falls back to `Move::Null`.
pub fn create_move_with_promotion(
    position: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Move {
    position
        .all_legal_moves()
        .into_iter()
        .filter(|mv| mv.from() == Some(from) && mv.destination() == Some(to))
        .find(|mv| match mv.promotion() {
            Some(kind) => kind == promotion.unwrap_or(PieceKind::Queen),
            None => promotion.is_none(),
        })
        .unwrap_or(Move::Null)
}

#[cfg(test)]
mod tests {
    use super::{create_move, create_move_with_promotion};
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    #[test]
    fn finds_moves_for_either_side() {
        let position = Position::initial();

        let white = create_move(&position, 52, 36);
        assert!(matches!(white, Move::PawnJump { to: 36, .. }));

        let black = create_move(&position, 1, 18);
        assert!(matches!(black, Move::Major { to: 18, .. }));
    }

    #[test]
    fn unknown_endpoints_give_the_null_move() {
        let position = Position::initial();
        assert_eq!(create_move(&position, 52, 28), Move::Null);
        assert_eq!(create_move(&position, 36, 28), Move::Null);
    }

    #[test]
    fn promotion_defaults_to_a_queen() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

        assert_eq!(create_move(&position, 8, 0).promotion(), Some(PieceKind::Queen));
        assert_eq!(
            create_move_with_promotion(&position, 8, 0, Some(PieceKind::Knight)).promotion(),
            Some(PieceKind::Knight)
        );
        assert_eq!(
            create_move_with_promotion(&position, 8, 0, Some(PieceKind::King)),
            Move::Null
        );
    }

    #[test]
    fn castle_is_found_by_king_endpoints() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(create_move(&position, 60, 62).is_castling_move());
        assert!(create_move(&position, 4, 2).is_castling_move());
    }
}
