//! Seeded random self-play from the starting position.
//!
//! Usage:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --seed 42 --max-plies 300`
//! `cargo run --release --bin random_playout -- --fen "<fen>" --verbose`

use tile_chess::game_state::position::Position;
use tile_chess::utils::random_playout::{random_playout, PlayoutConfig};
use tile_chess::utils::render_position::render_position;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> Result<T, String> {
    match arg_value(flag) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let defaults = PlayoutConfig::default();
    let config = PlayoutConfig {
        seed: parse_arg("--seed", defaults.seed)?,
        max_plies: parse_arg("--max-plies", defaults.max_plies)?,
    };

    let start = match arg_value("--fen") {
        Some(fen) => Position::from_fen(&fen).map_err(|e| e.to_string())?,
        None => Position::initial(),
    };

    let result = random_playout(&start, config);

    if verbose {
        println!("{}", result.played_moves_lan.join(" "));
    }
    println!("{}\n", render_position(&result.final_position));
    println!("{}", result.final_position.to_fen());
    println!("seed {}: {}", config.seed, result.report());
    Ok(())
}
