//! Long algebraic move input (`e2e4`, `e7e8n`).
//!
//! Output needs no helper here: `Move`'s `Display` already prints this form.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;
use crate::move_generation::move_factory::create_move_with_promotion;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Resolve long algebraic text against the legal moves of `position`.
///
/// Malformed text is an error. Well-formed text that names no legal move
/// of the side to move resolves to `Move::Null`, like `create_move`.
pub fn long_algebraic_to_move(long_algebraic: &str, position: &Position) -> ChessResult<Move> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessErrors::InvalidAlgebraic(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(symbol) => Some(
            PieceKind::from_symbol(symbol)
                .filter(|kind| PieceKind::PROMOTIONS.contains(kind))
                .ok_or_else(|| ChessErrors::InvalidAlgebraic(long_algebraic.to_owned()))?,
        ),
    };

    let mv = create_move_with_promotion(position, from, to, promotion);
    let belongs_to_mover = mv
        .moved_piece()
        .is_some_and(|piece| piece.side == position.side_to_move());

    Ok(if belongs_to_mover { mv } else { Move::Null })
}
