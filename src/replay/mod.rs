//! Recording and deterministic replay.
//!
//! Serializes the initial snapshot plus the ordered event log, with a JSON
//! text form and an optional compressed binary envelope. Replaying a
//! recording against its snapshot reproduces a bit-identical `GameState` at
//! every step; this is the correctness contract for save/resume and
//! spectator playback.

pub mod codec;
pub mod playback;
pub mod recording;

pub use codec::{
    compress, decode, decompress, encode, is_envelope, ReplayError, ENVELOPE_MAGIC,
    ENVELOPE_VERSION,
};
pub use playback::replay;
pub use recording::{GameMode, Recording, RECORDING_VERSION};
