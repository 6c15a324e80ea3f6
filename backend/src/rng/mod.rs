//! Deterministic splittable random number generation
//!
//! Implements the L64X256Mix member of the LXM family: an LCG, a xoshiro256
//! generator, and a mixing function combined into one 64-bit stream.
//! CRITICAL: Parallel work gets its randomness by splitting, never by
//! sharing one generator across threads.

pub mod checkpoint;
pub mod config;
pub mod lxm;
pub mod mix;
pub mod period;
pub mod seed;
pub mod source;

pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::SeedConfig;
pub use lxm::{L64X256MixRandom, LxmState, LCG_MULTIPLIER};
pub use period::{Period, PERIOD};
pub use seed::{BootstrapSeeder, SeedLengthError, SEED_BYTES_REQUIRED};
pub use source::{RandomSource, SplittableGenerator, Splits};
