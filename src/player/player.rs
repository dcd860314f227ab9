//! Per-side view of a position.
//!
//! A `Player` borrows a `Position` and precomputes that side's legal-move
//! set (pseudo-legal moves plus castles), the opponent's pseudo-legal
//! moves, and whether its king is in check. It is derived on demand and
//! never stored back onto the position, so the two never form a cycle.
//!
//! Legality against self-check is decided by `make_move`: the move is
//! applied and rejected if any opponent reply could capture the king.
//! Checkmate and stalemate replay `make_move` for every legal move.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Side;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{calculate_attacks_on_square, is_king_in_check};
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;
use crate::player::castling::calculate_king_castles;
use crate::player::move_transition::{MoveStatus, MoveTransition};

/// Find the single king among one side's active pieces.
pub fn establish_king(pieces: &[Piece], side: Side) -> ChessResult<Piece> {
    let mut kings = pieces.iter().filter(|piece| piece.kind.is_king());
    let king = kings.next().copied().ok_or(ChessErrors::MissingKing(side))?;
    if kings.next().is_some() {
        return Err(ChessErrors::MultipleKings(side));
    }
    Ok(king)
}

#[derive(Debug, Clone)]
pub struct Player<'a> {
    position: &'a Position,
    side: Side,
    king: Piece,
    legal_moves: Vec<Move>,
    opponent_moves: Vec<Move>,
    in_check: bool,
}

impl<'a> Player<'a> {
    pub fn new(position: &'a Position, side: Side) -> Self {
        let own = generate_pseudo_legal_moves(position, side);
        let opponent = generate_pseudo_legal_moves(position, side.opposite());
        Self::with_moves(position, side, own, opponent)
    }

    /// Build from already generated pseudo-legal sets of both sides.
    pub fn with_moves(
        position: &'a Position,
        side: Side,
        standard_moves: Vec<Move>,
        opponent_moves: Vec<Move>,
    ) -> Self {
        let king = *position.king(side);
        let in_check = !calculate_attacks_on_square(king.square, &opponent_moves).is_empty();

        let mut legal_moves = standard_moves;
        legal_moves.extend(calculate_king_castles(
            position,
            &king,
            in_check,
            &opponent_moves,
        ));

        Self {
            position,
            side,
            king,
            legal_moves,
            opponent_moves,
            in_check,
        }
    }

    #[inline]
    pub fn position(&self) -> &'a Position {
        self.position
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn king(&self) -> &Piece {
        &self.king
    }

    #[inline]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.position.active_pieces(self.side)
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn opponent_moves(&self) -> &[Move] {
        &self.opponent_moves
    }

    /// The other side's view of the same position.
    pub fn opponent(&self) -> Player<'a> {
        let own_standard = self
            .legal_moves
            .iter()
            .filter(|mv| !mv.is_castling_move())
            .copied()
            .collect();
        Player::with_moves(
            self.position,
            self.side.opposite(),
            self.opponent_moves.clone(),
            own_standard,
        )
    }

    #[inline]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && !self.has_escape_moves()
    }

    /// At least one legal move completes without exposing the king.
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves
            .iter()
            .any(|mv| self.make_move(mv).status().is_done())
    }

    /// Attempt `mv` for this side.
    ///
    /// Moves outside the legal set are `IllegalMove`; moves after which an
    /// opponent reply could capture this side's king are
    /// `LeavesPlayerInCheck`. Both return the original position.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
        }

        // Members of the legal set always apply; a failure means the set is
        // stale for this position and the move cannot be played here.
        let Ok(transition_position) = mv.apply(self.position) else {
            return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
        };

        if is_king_in_check(&transition_position, self.side) {
            return MoveTransition::rejected(
                self.position,
                *mv,
                MoveStatus::LeavesPlayerInCheck,
            );
        }

        MoveTransition::done(transition_position, *mv)
    }
}

#[cfg(test)]
mod tests {
    use super::establish_king;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;
    use crate::game_state::position::Position;
    use crate::move_generation::move_factory::create_move;
    use crate::moves::chess_move::Move;
    use crate::player::move_transition::MoveStatus;

    fn parse(fen: &str) -> Position {
        Position::from_fen(fen).expect("FEN should parse")
    }

    fn play(position: &Position, from: u8, to: u8) -> Position {
        let mv = create_move(position, from, to);
        let transition = position.current_player().make_move(&mv);
        assert_eq!(transition.status(), MoveStatus::Done, "{mv} should be playable");
        transition.into_position()
    }

    #[test]
    fn establish_king_requires_exactly_one() {
        let king = Piece::new(PieceKind::King, Side::White, 60);
        let rook = Piece::new(PieceKind::Rook, Side::White, 63);

        assert_eq!(establish_king(&[rook, king], Side::White), Ok(king));
        assert_eq!(
            establish_king(&[rook], Side::White),
            Err(ChessErrors::MissingKing(Side::White))
        );
        assert_eq!(
            establish_king(&[king, king.moved_to(61)], Side::White),
            Err(ChessErrors::MultipleKings(Side::White))
        );
    }

    #[test]
    fn side_to_move_has_twenty_moves_from_the_start() {
        let position = Position::initial();
        let player = position.current_player();

        assert_eq!(player.side(), Side::White);
        assert_eq!(player.legal_moves().len(), 20);
        assert!(!player.is_in_check());
        assert!(!player.is_in_checkmate());
        assert!(!player.is_in_stalemate());

        let done = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(mv).status().is_done())
            .count();
        assert_eq!(done, 20);

        let opponent = player.opponent();
        assert_eq!(opponent.side(), Side::Black);
        assert_eq!(opponent.legal_moves().len(), 20);
    }

    #[test]
    fn every_done_move_passes_the_turn() {
        let position = parse("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let player = position.current_player();

        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                assert_eq!(transition.position().side_to_move(), Side::Black);
            } else {
                assert_eq!(transition.position(), &position);
            }
        }
    }

    #[test]
    fn move_outside_the_legal_set_is_illegal() {
        let position = Position::initial();
        let knight = position.piece_at(62).copied().expect("knight on g1");
        let bogus = Move::Major {
            piece: knight,
            to: 36,
        };
        let transition = position.current_player().make_move(&bogus);

        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert_eq!(transition.position(), &position);
        assert_eq!(transition.mv(), &bogus);
    }

    #[test]
    fn black_moves_are_illegal_for_white() {
        let position = Position::initial();
        let mv = create_move(&position, 12, 28);
        assert!(!mv.is_null());

        let transition = position.current_player().make_move(&mv);
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
    }

    #[test]
    fn pinned_piece_leaves_player_in_check() {
        let position = parse("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
        let player = position.current_player();
        let mv = create_move(&position, 52, 43);

        assert!(player.is_move_legal(&mv));
        let transition = player.make_move(&mv);
        assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
        assert_eq!(transition.position(), &position);
    }

    #[test]
    fn king_cannot_step_next_to_the_enemy_king() {
        let position = parse("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        let player = position.current_player();
        let mv = create_move(&position, 43, 35);

        assert_eq!(player.make_move(&mv).status(), MoveStatus::LeavesPlayerInCheck);
    }

    #[test]
    fn corner_king_trapped_by_queen_and_rook_is_mated() {
        let position = parse("7k/6Q1/8/8/8/8/8/6RK b - - 0 1");
        let player = position.current_player();

        assert!(player.is_in_check());
        assert!(!player.legal_moves().is_empty());
        assert!(player
            .legal_moves()
            .iter()
            .all(|mv| !player.make_move(mv).status().is_done()));
        assert!(player.is_in_checkmate());
        assert!(!player.is_in_stalemate());
    }

    #[test]
    fn back_rank_mate_after_a_rook_lift() {
        let position = parse("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let after = play(&position, 56, 0);

        let defender = after.current_player();
        assert_eq!(defender.side(), Side::Black);
        assert!(defender.is_in_checkmate());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemated() {
        let position = parse("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let player = position.current_player();

        assert!(!player.is_in_check());
        assert!(!player.legal_moves().is_empty());
        assert!(player.legal_moves().iter().all(|mv| {
            player.make_move(mv).status() == MoveStatus::LeavesPlayerInCheck
        }));
        assert!(player.is_in_stalemate());
        assert!(!player.is_in_checkmate());
    }

    #[test]
    fn check_can_be_escaped_by_blocking() {
        let position = parse("4k3/8/8/8/8/8/3B4/r3K3 w - - 0 1");
        let player = position.current_player();

        assert!(player.is_in_check());
        assert!(!player.is_in_checkmate());
        let block = create_move(&position, 51, 58);
        assert_eq!(player.make_move(&block).status(), MoveStatus::Done);
    }

    #[test]
    fn moving_the_rook_removes_its_castle() {
        let position = parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles = |position: &Position| -> Vec<u8> {
            position
                .current_player()
                .legal_moves()
                .iter()
                .filter(|mv| mv.is_castling_move())
                .filter_map(|mv| mv.destination())
                .collect()
        };
        assert_eq!(castles(&position), vec![62, 58]);

        let rook_out = play(&position, 63, 55);
        let black_waits = play(&rook_out, 0, 8);
        let rook_back = play(&black_waits, 55, 63);
        let black_again = play(&rook_back, 8, 0);

        assert_eq!(castles(&black_again), vec![58]);
    }

    #[test]
    fn en_passant_is_only_available_immediately() {
        let position = parse("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        let jumped = play(&position, 11, 27);
        assert_eq!(jumped.en_passant_target(), Some(19));

        let capture = create_move(&jumped, 28, 19);
        assert!(capture.is_en_passant());
        let transition = jumped.current_player().make_move(&capture);
        assert_eq!(transition.status(), MoveStatus::Done);

        let white_waits = play(&jumped, 60, 61);
        let black_waits = play(&white_waits, 4, 5);
        assert_eq!(black_waits.en_passant_target(), None);
        assert!(black_waits
            .current_player()
            .legal_moves()
            .iter()
            .all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        let position = parse("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1");
        let capture = create_move(&position, 25, 18);
        assert!(capture.is_en_passant());

        let transition = position.current_player().make_move(&capture);
        assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    }
}
