//! LXM Random Core - Rust Engine
//!
//! Deterministic, splittable pseudorandom number generation.
//!
//! # Architecture
//!
//! - **rng**: The L64X256Mix generator, its seeding paths, and the split
//!   protocol
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. The LCG addend `a` is always odd
//! 3. The xoshiro256 state is never all zero
//! 4. One generator per thread: parallelism comes from splitting

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{
    BootstrapSeeder, Checkpoint, CheckpointError, L64X256MixRandom, LxmState, Period, RandomSource,
    SeedConfig, SeedLengthError, SplittableGenerator, PERIOD,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn lxm_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyL64X256MixRandom>()?;
    Ok(())
}
