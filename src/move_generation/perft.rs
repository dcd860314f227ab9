use std::panic;
use std::thread;

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::player::player::Player;

/// Leaf statistics. Only moves whose transition is `Done` are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move, next: &Position) {
        self.nodes += 1;

        if mv.is_attack() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling_move() {
            self.castles += 1;
        }
        if mv.promotion().is_some() {
            self.promotions += 1;
        }

        let defender = next.current_player();
        if defender.is_in_check() {
            self.checks += 1;
            if !defender.has_escape_moves() {
                self.checkmates += 1;
            }
        }
    }
}

/// Number of leaf positions `depth` plies below `position`.
pub fn perft(position: &Position, depth: u8) -> usize {
    perft_counts(position, depth).nodes
}

pub fn perft_counts(position: &Position, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    perft_recurse(position, depth, &mut total);
    total
}

/// Same totals as `perft_counts`, with one worker thread per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft_counts(position, depth);
    }

    let player = position.current_player();
    let mut handles = Vec::with_capacity(player.legal_moves().len());

    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.status().is_done() {
            continue;
        }

        let next = transition.into_position();
        handles.push(thread::spawn(move || perft_counts(&next, depth - 1)));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    total
}

fn perft_recurse(position: &Position, depth: u8, counts: &mut PerftCounts) {
    let player: Player<'_> = position.current_player();

    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.status().is_done() {
            continue;
        }

        if depth == 1 {
            counts.record_leaf(mv, transition.position());
        } else {
            perft_recurse(transition.position(), depth - 1, counts);
        }
    }
}
