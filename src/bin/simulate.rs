//! Batch bot-vs-bot simulation CLI.
//!
//! Plays hexfray games with every seat bot-driven and reports win and round
//! statistics.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 10)
//!   --players N     Players per game, 2-8 (default: 4)
//!   --max-rounds N  Reinforcement rounds before giving up (default: 500)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Master seed, 0 for entropy (default: 0)
//!   --quiet         Suppress per-game output

use std::env;
use std::time::Instant;

use hexfray::simulate::{run, SimulateConfig};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let mut config = SimulateConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--players" => {
                i += 1;
                config.players = args[i].parse().expect("invalid --players value");
            }
            "--max-rounds" => {
                i += 1;
                config.max_rounds = args[i].parse().expect("invalid --max-rounds value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let start = Instant::now();
    let summary = run(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        for (i, outcome) in summary.outcomes.iter().enumerate() {
            match outcome.winner {
                Some(winner) => println!(
                    "game {:3}: seed {:20} winner {} after {} rounds ({} actions)",
                    i, outcome.seed, winner, outcome.rounds, outcome.actions
                ),
                None => println!(
                    "game {:3}: seed {:20} unfinished after {} rounds",
                    i, outcome.seed, outcome.rounds
                ),
            }
        }
    }

    println!("master seed: {}", summary.master_seed);
    println!(
        "{} games in {:.2}s ({} unfinished)",
        summary.outcomes.len(),
        elapsed.as_secs_f64(),
        summary.unfinished
    );
    for (player, wins) in summary.wins.iter().enumerate() {
        println!("player {}: {} wins", player, wins);
    }
    if !summary.outcomes.is_empty() {
        let total_rounds: usize = summary.outcomes.iter().map(|o| o.rounds).sum();
        println!(
            "average rounds: {:.1}",
            total_rounds as f64 / summary.outcomes.len() as f64
        );
    }
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --games N       Number of games to play (default: 10)");
    println!("  --players N     Players per game, 2-8 (default: 4)");
    println!("  --max-rounds N  Reinforcement rounds before giving up (default: 500)");
    println!("  --threads N     Number of parallel threads (default: 4)");
    println!("  --seed N        Master seed, 0 for entropy (default: 0)");
    println!("  --quiet         Suppress per-game output");
}
