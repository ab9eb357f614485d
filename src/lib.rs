//! Hexfray engine library.
//!
//! Exposes the board representation, map generator, combat resolver, turn
//! state machine, bot strategy, command history, and recording/replay
//! modules for use by integration tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod history;
pub mod mapgen;
pub mod protocol;
pub mod replay;
pub mod resolve;
pub mod rng;
pub mod simulate;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testkit;
