//! Batch bot-vs-bot simulation.
//!
//! Plays full games by letting the default strategy drive every seat, for
//! engine soak-testing and balance statistics. Each game runs on its own
//! engine and RNG with a seed derived from the master seed, so a batch is
//! reproducible and games can run concurrently without sharing state.

use crate::board::{GamePhase, PlayerId};
use crate::engine::Engine;
use crate::mapgen::{MapGenConfig, MapGenError};
use crate::replay::GameMode;
use crate::rng::GameRng;

/// How many successive seeds to try when a generated map falls outside the
/// territory band. The generator never retries on its own.
const SEED_RETRY_LIMIT: u64 = 64;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Players per game.
    pub players: u8,
    /// Maximum reinforcement rounds before a game is declared unfinished.
    pub max_rounds: usize,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Master seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        SimulateConfig {
            num_games: 10,
            players: 4,
            max_rounds: 500,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// The result of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// The map seed the game actually ran on (after band retries).
    pub seed: u64,
    /// The winner, or `None` if the round cap was hit first.
    pub winner: Option<PlayerId>,
    /// Reinforcement rounds played.
    pub rounds: usize,
    /// Total actions committed (attacks, skips, reinforcements).
    pub actions: usize,
}

/// Aggregated results of a batch.
#[derive(Debug, Clone)]
pub struct SimulateSummary {
    /// Per-game outcomes in game order.
    pub outcomes: Vec<GameOutcome>,
    /// Win counts indexed by player.
    pub wins: Vec<usize>,
    /// Games that hit the round cap without a winner.
    pub unfinished: usize,
    /// The master seed the batch ran on.
    pub master_seed: u64,
}

/// Plays one bot game from the given seed to completion or the round cap.
///
/// Seeds whose maps fall outside the territory band are skipped by probing
/// successive seeds; any other generation error is returned as-is.
pub fn play_game(
    seed: u64,
    players: u8,
    max_rounds: usize,
) -> Result<GameOutcome, MapGenError> {
    let config = MapGenConfig::default();
    let mut result = Engine::new_game_with(Some(seed), players, &config, GameMode::Bots, None);
    let mut attempt = 1;
    while matches!(result, Err(MapGenError::TerritoryCountOutOfRange { .. }))
        && attempt < SEED_RETRY_LIMIT
    {
        result = Engine::new_game_with(
            Some(seed.wrapping_add(attempt)),
            players,
            &config,
            GameMode::Bots,
            None,
        );
        attempt += 1;
    }
    let mut engine = result?;

    let mut rounds = 0;
    let mut actions = 0;
    let action_cap = max_rounds.saturating_mul(1000);
    while engine.state().phase != GamePhase::GameOver
        && rounds < max_rounds
        && actions < action_cap
    {
        let step = match engine.state().phase {
            GamePhase::Attack => engine.bot_act().map(|_| ()),
            GamePhase::Reinforcement => {
                rounds += 1;
                engine.apply_reinforcement().map(|_| ())
            }
            GamePhase::GameOver => break,
        };
        if let Err(err) = step {
            log::warn!("simulation step failed: {}", err);
            break;
        }
        actions += 1;
    }

    Ok(GameOutcome {
        seed: engine.seed(),
        winner: engine.state().winner,
        rounds,
        actions,
    })
}

/// Runs a batch of games, sequentially or with a rayon pool.
pub fn run(config: &SimulateConfig) -> SimulateSummary {
    let master_seed = if config.seed == 0 {
        GameRng::new(None).seed()
    } else {
        config.seed
    };
    // Golden-ratio stride keeps per-game seeds well apart.
    let game_seed = |i: usize| master_seed.wrapping_add((i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));

    let play = |i: usize| {
        let outcome = play_game(game_seed(i), config.players, config.max_rounds);
        if let Err(err) = &outcome {
            log::warn!("game {} failed to generate: {}", i, err);
        }
        outcome.ok()
    };

    let results: Vec<Option<GameOutcome>> = if config.threads > 1 {
        use rayon::prelude::*;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .expect("failed to build rayon thread pool");
        pool.install(|| (0..config.num_games).into_par_iter().map(play).collect())
    } else {
        (0..config.num_games).map(play).collect()
    };

    let outcomes: Vec<GameOutcome> = results.into_iter().flatten().collect();
    let mut wins = vec![0usize; config.players as usize];
    let mut unfinished = 0;
    for outcome in &outcomes {
        match outcome.winner {
            Some(player) => wins[player as usize] += 1,
            None => unfinished += 1,
        }
    }

    SimulateSummary {
        outcomes,
        wins,
        unfinished,
        master_seed,
    }
}
