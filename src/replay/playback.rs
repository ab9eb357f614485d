//! Deterministic replay of a recording.
//!
//! Replaying applies each recorded event to the initial snapshot through
//! the same apply path the live engine uses. Events carry their dice, so no
//! RNG is consulted; the result is bit-identical to the original run at
//! every step.

use super::codec::ReplayError;
use super::recording::{Recording, RECORDING_VERSION};
use crate::board::GameState;
use crate::engine::{apply_event, TurnEvent};

/// Checks that an event only references territories and players the
/// snapshot actually has, so a corrupt log fails cleanly instead of
/// panicking mid-replay.
fn validate_event(state: &GameState, event: &TurnEvent, index: usize) -> Result<(), ReplayError> {
    let territory_count = state.map.territory_count();
    let check = |territory: usize| {
        if territory < territory_count {
            Ok(())
        } else {
            Err(ReplayError::EventMismatch { index, territory })
        }
    };
    match event {
        TurnEvent::Attack { from, to, result } => {
            check(*from)?;
            check(*to)?;
            check(result.attacker)?;
            check(result.defender)?;
        }
        TurnEvent::Skip { player } => {
            if *player as usize >= state.player_count() {
                return Err(ReplayError::Corrupted(format!(
                    "event {} references player {} of {}",
                    index,
                    player,
                    state.player_count()
                )));
            }
        }
        TurnEvent::Reinforcement { allocations } => {
            for alloc in allocations {
                if alloc.player as usize >= state.player_count() {
                    return Err(ReplayError::Corrupted(format!(
                        "event {} references player {} of {}",
                        index,
                        alloc.player,
                        state.player_count()
                    )));
                }
                for &tid in &alloc.placements {
                    check(tid)?;
                }
            }
        }
    }
    Ok(())
}

/// Replays a recording from its initial snapshot to the final state.
///
/// Fails without applying anything further on the first invalid event;
/// there is no best-effort partial replay.
pub fn replay(recording: &Recording) -> Result<GameState, ReplayError> {
    if recording.version != RECORDING_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: recording.version,
        });
    }
    let mut state = recording.initial.clone();
    for (index, event) in recording.events.iter().enumerate() {
        validate_event(&state, event, index)?;
        apply_event(&mut state, event);
    }
    Ok(state)
}
