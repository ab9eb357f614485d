//! Recording serialization: JSON text plus a compressed binary envelope.
//!
//! The text form is plain serde JSON, stable under round-trip. The envelope
//! wraps that text for storage: four magic bytes, one envelope-version byte,
//! then an lz4 block with a prepended size. Decoding fails loudly on a
//! magic or version mismatch and on corrupted payloads; there is no
//! best-effort partial decode.

use thiserror::Error;

use super::recording::{Recording, RECORDING_VERSION};
use crate::board::TerritoryId;

/// Magic bytes identifying a compressed recording envelope.
pub const ENVELOPE_MAGIC: [u8; 4] = *b"HFRY";

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Errors from decoding or replaying a recording. Distinct from gameplay
/// errors: a failed decode never yields a partially replayed game.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("recording is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported recording version {found} (supported: {RECORDING_VERSION})")]
    UnsupportedVersion { found: u16 },

    #[error("envelope magic bytes do not match")]
    BadMagic,

    #[error("unsupported envelope version {0}")]
    UnsupportedEnvelope(u8),

    #[error("envelope truncated at {0} bytes")]
    TruncatedEnvelope(usize),

    #[error("corrupted envelope payload: {0}")]
    Corrupted(String),

    #[error("event {index} references territory {territory}, which the snapshot does not have")]
    EventMismatch {
        index: usize,
        territory: TerritoryId,
    },
}

/// Serializes a recording to its JSON text form.
pub fn encode(recording: &Recording) -> Result<String, ReplayError> {
    Ok(serde_json::to_string(recording)?)
}

/// Parses a recording from JSON text, rejecting unsupported versions.
pub fn decode(text: &str) -> Result<Recording, ReplayError> {
    let recording: Recording = serde_json::from_str(text)?;
    if recording.version != RECORDING_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: recording.version,
        });
    }
    Ok(recording)
}

/// Wraps a recording in the compressed binary envelope.
pub fn compress(recording: &Recording) -> Result<Vec<u8>, ReplayError> {
    let text = encode(recording)?;
    let mut out = Vec::with_capacity(text.len() / 2 + 5);
    out.extend_from_slice(&ENVELOPE_MAGIC);
    out.push(ENVELOPE_VERSION);
    out.extend_from_slice(&lz4_flex::compress_prepend_size(text.as_bytes()));
    Ok(out)
}

/// Unwraps and parses a compressed recording envelope.
pub fn decompress(bytes: &[u8]) -> Result<Recording, ReplayError> {
    if bytes.len() < 5 {
        return Err(ReplayError::TruncatedEnvelope(bytes.len()));
    }
    if bytes[..4] != ENVELOPE_MAGIC {
        return Err(ReplayError::BadMagic);
    }
    if bytes[4] != ENVELOPE_VERSION {
        return Err(ReplayError::UnsupportedEnvelope(bytes[4]));
    }
    let payload = lz4_flex::decompress_size_prepended(&bytes[5..])
        .map_err(|e| ReplayError::Corrupted(e.to_string()))?;
    let text = String::from_utf8(payload).map_err(|e| ReplayError::Corrupted(e.to_string()))?;
    decode(&text)
}

/// Returns true if the bytes begin with the envelope magic, for callers
/// sniffing a file format before decoding.
pub fn is_envelope(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && bytes[..4] == ENVELOPE_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TurnEvent;
    use crate::replay::GameMode;
    use crate::testkit;

    fn sample() -> Recording {
        Recording {
            version: RECORDING_VERSION,
            game_mode: GameMode::Bots,
            human_player: None,
            initial: testkit::four_territory_state(),
            events: vec![
                TurnEvent::Skip { player: 0 },
                TurnEvent::Skip { player: 1 },
            ],
        }
    }

    #[test]
    fn text_roundtrip_is_identity() {
        let recording = sample();
        let decoded = decode(&encode(&recording).unwrap()).unwrap();
        assert_eq!(decoded, recording);
    }

    #[test]
    fn envelope_roundtrip_is_identity() {
        let recording = sample();
        let decoded = decompress(&compress(&recording).unwrap()).unwrap();
        assert_eq!(decoded, recording);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut recording = sample();
        recording.version = 999;
        let text = serde_json::to_string(&recording).unwrap();
        match decode(&text) {
            Err(ReplayError::UnsupportedVersion { found }) => assert_eq!(found, 999),
            other => panic!("expected version error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut bytes = compress(&sample()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(decompress(&bytes), Err(ReplayError::BadMagic)));
    }

    #[test]
    fn wrong_envelope_version_is_rejected() {
        let mut bytes = compress(&sample()).unwrap();
        bytes[4] = 77;
        assert!(matches!(
            decompress(&bytes),
            Err(ReplayError::UnsupportedEnvelope(77))
        ));
    }

    #[test]
    fn truncated_envelope_fails_loudly() {
        let bytes = compress(&sample()).unwrap();
        assert!(matches!(
            decompress(&bytes[..3]),
            Err(ReplayError::TruncatedEnvelope(3))
        ));
        // A header with a chopped payload must error, not silently decode.
        assert!(decompress(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn corrupted_payload_is_rejected() {
        let mut bytes = compress(&sample()).unwrap();
        let len = bytes.len();
        for b in &mut bytes[10..len.min(40)] {
            *b ^= 0xA5;
        }
        assert!(decompress(&bytes).is_err());
    }

    #[test]
    fn envelope_sniffing() {
        let bytes = compress(&sample()).unwrap();
        assert!(is_envelope(&bytes));
        assert!(!is_envelope(b"{\"version\":1}"));
        assert!(!is_envelope(b"HF"));
    }
}
