//! Seeding configuration
//!
//! Describes how a generator should be constructed, in a form that can be
//! read from JSON alongside the rest of an application's config.
//!
//! # Example
//! ```
//! use lxm_random_core_rs::rng::{BootstrapSeeder, SeedConfig};
//!
//! let config: SeedConfig = serde_json::from_str(r#"{"kind": "integer", "seed": 42}"#).unwrap();
//! let rng = config.build(&BootstrapSeeder::new(0)).unwrap();
//! # let _ = rng;
//! ```

use super::lxm::L64X256MixRandom;
use super::seed::{BootstrapSeeder, SeedLengthError};
use serde::{Deserialize, Serialize};

/// Which construction path to use, and with what seed material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Seed from a single 64-bit integer
    Integer { seed: u64 },

    /// Seed from raw bytes; `pad` allows fewer than 48 bytes
    Bytes {
        bytes: Vec<u8>,
        #[serde(default)]
        pad: bool,
    },

    /// Use these state words directly (`a` is forced odd)
    Words { a: u64, s: u64, x: [u64; 4] },

    /// Take the next seed from the process bootstrap seeder
    Bootstrap,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig::Bootstrap
    }
}

impl SeedConfig {
    /// Build a generator as described.
    ///
    /// `seeder` is only consulted for [`SeedConfig::Bootstrap`].
    ///
    /// # Errors
    /// Returns [`SeedLengthError`] for a `bytes` config with fewer than
    /// 48 bytes and `pad: false`.
    pub fn build(&self, seeder: &BootstrapSeeder) -> Result<L64X256MixRandom, SeedLengthError> {
        let rng = match self {
            SeedConfig::Integer { seed } => L64X256MixRandom::new(*seed),
            SeedConfig::Bytes { bytes, pad: false } => L64X256MixRandom::from_seed_bytes(bytes)?,
            SeedConfig::Bytes { bytes, pad: true } => L64X256MixRandom::from_seed_bytes_padded(bytes),
            SeedConfig::Words { a, s, x } => {
                L64X256MixRandom::from_words(*a, *s, x[0], x[1], x[2], x[3])
            }
            SeedConfig::Bootstrap => L64X256MixRandom::from_seeder(seeder),
        };
        Ok(rng)
    }
}
