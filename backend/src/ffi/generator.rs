//! PyO3 wrapper for L64X256MixRandom
//!
//! Exposes seeding, generation, splitting, and checkpointing to Python.
//! Python's `int` covers the full `u64` range, so values cross unchanged.

use pyo3::prelude::*;

use crate::rng::{Checkpoint, L64X256MixRandom, RandomSource, SplittableGenerator};

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from lxm_random_core_rs import L64X256MixRandom
///
/// rng = L64X256MixRandom(12345)
/// value = rng.next_u64()
/// workers = [rng.split(i) for i in range(8)]
/// ```
#[pyclass(name = "L64X256MixRandom")]
pub struct PyL64X256MixRandom {
    inner: L64X256MixRandom,
}

fn value_error(msg: String) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(msg)
}

#[pymethods]
impl PyL64X256MixRandom {
    /// `L64X256MixRandom(seed)` from Python
    #[new]
    fn py_new(seed: u64) -> Self {
        Self::new(seed)
    }

    /// Create a generator from a 64-bit integer seed
    #[staticmethod]
    fn new(seed: u64) -> Self {
        PyL64X256MixRandom {
            inner: L64X256MixRandom::new(seed),
        }
    }

    /// Create a generator from at least 48 seed bytes
    ///
    /// # Errors
    ///
    /// Raises ValueError if the seed is shorter than 48 bytes
    #[staticmethod]
    fn from_bytes(seed: &[u8]) -> PyResult<Self> {
        let inner = L64X256MixRandom::from_seed_bytes(seed).map_err(|e| value_error(e.to_string()))?;
        Ok(PyL64X256MixRandom { inner })
    }

    /// Create a generator from explicit state words
    #[staticmethod]
    fn from_words(a: u64, s: u64, x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        PyL64X256MixRandom {
            inner: L64X256MixRandom::from_words(a, s, x0, x1, x2, x3),
        }
    }

    /// Generate the next 64-bit value
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Split off an independent generator, disambiguated by `brine`
    fn split(&mut self, brine: u64) -> Self {
        PyL64X256MixRandom {
            inner: self.inner.split(brine),
        }
    }

    /// Split off an independent generator with a random brine
    fn split_random(&mut self) -> Self {
        PyL64X256MixRandom {
            inner: self.inner.split_random(),
        }
    }

    /// Generator period as a decimal string
    fn period(&self) -> String {
        self.inner.period().to_string()
    }

    /// Current state as `(a, s, x0, x1, x2, x3)`
    fn get_state(&self) -> (u64, u64, u64, u64, u64, u64) {
        let state = self.inner.state();
        let [x0, x1, x2, x3] = state.x;
        (state.a, state.s, x0, x1, x2, x3)
    }

    /// Serialize the current state to a checkpoint JSON string
    fn checkpoint(&self) -> PyResult<String> {
        Checkpoint::capture(&self.inner)
            .and_then(|c| c.to_json())
            .map_err(|e| value_error(e.to_string()))
    }

    /// Rebuild a generator from a checkpoint JSON string
    ///
    /// # Errors
    ///
    /// Raises ValueError if the JSON is malformed or fails validation
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let inner = Checkpoint::from_json(json)
            .and_then(|c| c.restore())
            .map_err(|e| value_error(e.to_string()))?;
        Ok(PyL64X256MixRandom { inner })
    }
}
