//! Outcome of a single move attempt.
//!
//! `Player::make_move` never fails; it reports one of three terminal
//! statuses together with the position the caller should continue from.

use std::borrow::Cow;

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    transition_position: Cow<'a, Position>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    /// A rejected attempt: the caller stays on the original position.
    #[inline]
    pub fn rejected(original: &'a Position, mv: Move, status: MoveStatus) -> Self {
        Self {
            transition_position: Cow::Borrowed(original),
            mv,
            status,
        }
    }

    #[inline]
    pub fn done(next: Position, mv: Move) -> Self {
        Self {
            transition_position: Cow::Owned(next),
            mv,
            status: MoveStatus::Done,
        }
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    /// The successor position when `Done`, otherwise the unchanged original.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.transition_position
    }

    #[inline]
    pub fn into_position(self) -> Position {
        self.transition_position.into_owned()
    }
}
