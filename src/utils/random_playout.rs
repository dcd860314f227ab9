//! Seeded random self-play.
//!
//! Each ply picks uniformly among the moves whose transition is `Done`.
//! The game ends on checkmate, stalemate, or when `max_plies` is reached.
//! The same seed and start position always replay the same game.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::Side;
use crate::game_state::position::Position;
use crate::player::move_transition::MoveTransition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Side },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_position: Position,
    pub played_moves_lan: Vec<String>,
}

impl PlayoutResult {
    pub fn plies(&self) -> usize {
        self.played_moves_lan.len()
    }

    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            PlayoutOutcome::Checkmate { winner } => format!("{winner} wins by checkmate"),
            PlayoutOutcome::Stalemate => "draw by stalemate".to_owned(),
            PlayoutOutcome::MaxPlies => "stopped at the ply limit".to_owned(),
        };
        format!("{outcome} after {} plies", self.plies())
    }
}

pub fn random_playout(start: &Position, config: PlayoutConfig) -> PlayoutResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut position = start.clone();
    let mut played_moves_lan = Vec::new();

    let outcome = loop {
        let (lan, next) = match pick_transition(&position, &mut rng) {
            Ok(step) => step,
            Err(outcome) => break outcome,
        };
        if played_moves_lan.len() >= usize::from(config.max_plies) {
            break PlayoutOutcome::MaxPlies;
        }

        played_moves_lan.push(lan);
        position = next;
    };

    PlayoutResult {
        outcome,
        final_position: position,
        played_moves_lan,
    }
}

/// One random completed move, or the terminal outcome when none exists.
fn pick_transition(
    position: &Position,
    rng: &mut StdRng,
) -> Result<(String, Position), PlayoutOutcome> {
    let player = position.current_player();
    let done: Vec<MoveTransition<'_>> = player
        .legal_moves()
        .iter()
        .map(|mv| player.make_move(mv))
        .filter(|transition| transition.status().is_done())
        .collect();

    let Some(picked) = done.choose(rng) else {
        return Err(if player.is_in_check() {
            PlayoutOutcome::Checkmate {
                winner: player.side().opposite(),
            }
        } else {
            PlayoutOutcome::Stalemate
        });
    };

    Ok((picked.mv().to_string(), picked.position().clone()))
}

#[cfg(test)]
mod tests {
    use super::{random_playout, PlayoutConfig, PlayoutOutcome};
    use crate::game_state::chess_types::Side;
    use crate::game_state::position::Position;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = PlayoutConfig {
            max_plies: 40,
            seed: 7,
        };
        let first = random_playout(&Position::initial(), config);
        let second = random_playout(&Position::initial(), config);

        assert_eq!(first.played_moves_lan, second.played_moves_lan);
        assert_eq!(first.final_position, second.final_position);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn recorded_moves_replay_to_the_final_position() {
        let config = PlayoutConfig {
            max_plies: 60,
            seed: 11,
        };
        let result = random_playout(&Position::initial(), config);
        assert!(result.plies() <= 60);

        let mut position = Position::initial();
        for lan in &result.played_moves_lan {
            let mv = long_algebraic_to_move(lan, &position).expect("recorded move should parse");
            let transition = position.current_player().make_move(&mv);
            assert!(transition.status().is_done(), "{lan} should replay");
            position = transition.into_position();
        }
        assert_eq!(position, result.final_position);
    }

    #[test]
    fn outcome_matches_the_final_position() {
        for seed in 0..4 {
            let result = random_playout(
                &Position::initial(),
                PlayoutConfig {
                    max_plies: 120,
                    seed,
                },
            );
            let player = result.final_position.current_player();

            match result.outcome {
                PlayoutOutcome::Checkmate { winner } => {
                    assert!(player.is_in_checkmate());
                    assert_eq!(winner, player.side().opposite());
                }
                PlayoutOutcome::Stalemate => assert!(player.is_in_stalemate()),
                PlayoutOutcome::MaxPlies => assert_eq!(result.plies(), 120),
            }
        }
    }

    #[test]
    fn finished_positions_end_immediately() {
        let mated = Position::from_fen("7k/6Q1/8/8/8/8/8/6RK b - - 0 1").expect("FEN should parse");
        let result = random_playout(&mated, PlayoutConfig::default());
        assert_eq!(
            result.outcome,
            PlayoutOutcome::Checkmate {
                winner: Side::White
            }
        );
        assert_eq!(result.plies(), 0);
        assert_eq!(result.report(), "White wins by checkmate after 0 plies");

        let stalemated =
            Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(
            random_playout(&stalemated, PlayoutConfig::default()).outcome,
            PlayoutOutcome::Stalemate
        );
    }

    #[test]
    fn zero_ply_limit_stops_before_moving() {
        let result = random_playout(
            &Position::initial(),
            PlayoutConfig {
                max_plies: 0,
                seed: 3,
            },
        );
        assert_eq!(result.outcome, PlayoutOutcome::MaxPlies);
        assert_eq!(result.final_position, Position::initial());
    }
}
