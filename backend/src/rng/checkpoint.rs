//! Checkpoint - Save/Restore Generator State
//!
//! Captures a generator's exact state so a run can be paused and resumed
//! with the same remaining sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the captured sequence
//! - **Integrity**: the state digest must match on restore
//! - **No silent repair**: a state no live generator can hold is rejected,
//!   not patched

use super::lxm::{L64X256MixRandom, LxmState};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while saving or restoring a checkpoint
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("Checkpoint serialization failed: {0}")]
    Serialization(String),

    #[error("Checkpoint digest mismatch: expected {expected}, computed {actual}")]
    DigestMismatch { expected: String, actual: String },

    #[error("Checkpoint LCG addend must be odd, got {0:#018x}")]
    EvenAddend(u64),

    #[error("Checkpoint xorshift state is all zero")]
    ZeroXorshiftState,
}

/// Generator state plus a SHA-256 digest of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// State at time of capture
    pub state: LxmState,

    /// Lowercase hex SHA-256 of the state's JSON encoding
    pub digest: String,
}

impl Checkpoint {
    /// Snapshot `rng` without advancing it
    pub fn capture(rng: &L64X256MixRandom) -> Result<Self, CheckpointError> {
        let state = rng.state();
        let digest = compute_state_digest(&state)?;
        Ok(Self { state, digest })
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string (no validation; see [`restore`](Self::restore))
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Validate and rebuild the generator
    ///
    /// # Errors
    /// - [`CheckpointError::DigestMismatch`] if the state was altered
    /// - [`CheckpointError::EvenAddend`] / [`CheckpointError::ZeroXorshiftState`]
    ///   if the state violates the generator invariants
    pub fn restore(&self) -> Result<L64X256MixRandom, CheckpointError> {
        if let Err(e) = self.validate() {
            log::warn!("Rejecting checkpoint: {}", e);
            return Err(e);
        }
        Ok(L64X256MixRandom::from(self.state))
    }

    fn validate(&self) -> Result<(), CheckpointError> {
        let actual = compute_state_digest(&self.state)?;
        if actual != self.digest {
            return Err(CheckpointError::DigestMismatch {
                expected: self.digest.clone(),
                actual,
            });
        }
        if self.state.a & 1 == 0 {
            return Err(CheckpointError::EvenAddend(self.state.a));
        }
        if self.state.x.iter().all(|&w| w == 0) {
            return Err(CheckpointError::ZeroXorshiftState);
        }
        Ok(())
    }
}

/// Compute the SHA-256 digest of a generator state
///
/// `LxmState` has a fixed field order, so its JSON encoding is canonical.
pub fn compute_state_digest(state: &LxmState) -> Result<String, CheckpointError> {
    let json =
        serde_json::to_string(state).map_err(|e| CheckpointError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
