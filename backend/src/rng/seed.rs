//! Seed material handling
//!
//! Turns raw seed bytes into state words, and provides the bootstrap seeder
//! that hands out distinct integer seeds for default construction.

use super::mix::{mix_murmur64, weyl_fill, GOLDEN_RATIO_64, SILVER_RATIO_64};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Number of 64-bit words a byte seed expands to (`a`, `s`, `x0..x3`)
pub const SEED_WORDS: usize = 6;

/// Number of trailing words that must not all be zero (the xorshift state)
const NONZERO_TAIL: usize = 4;

/// Minimum byte-seed length accepted by the strict constructor
pub const SEED_BYTES_REQUIRED: usize = SEED_WORDS * 8;

/// Byte seed was too short to fill every state word
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Seed too short: got {actual} bytes, need at least {required}")]
pub struct SeedLengthError {
    pub actual: usize,
    pub required: usize,
}

/// Convert exactly-sized seed bytes into six state words.
///
/// Bytes are packed big-endian, eight per word. Bytes past
/// [`SEED_BYTES_REQUIRED`] are ignored.
///
/// # Errors
/// Returns [`SeedLengthError`] if fewer than 48 bytes are supplied.
pub fn seed_bytes_to_words(seed: &[u8]) -> Result<[u64; SEED_WORDS], SeedLengthError> {
    if seed.len() < SEED_BYTES_REQUIRED {
        return Err(SeedLengthError {
            actual: seed.len(),
            required: SEED_BYTES_REQUIRED,
        });
    }
    Ok(pack_words(seed))
}

/// Convert seed bytes of any length into six state words.
///
/// Words the bytes do not reach are filled from a Weyl sequence over the
/// silver ratio, starting at the first word and mixed with
/// [`mix_murmur64`]. Never fails.
pub fn seed_bytes_to_words_padded(seed: &[u8]) -> [u64; SEED_WORDS] {
    let mut words = pack_partial(seed);
    let filled = (seed.len().min(SEED_BYTES_REQUIRED) + 7) / 8;
    if filled < SEED_WORDS {
        log::debug!(
            "Padding {}-byte seed: {} of {} words derived",
            seed.len(),
            SEED_WORDS - filled,
            SEED_WORDS
        );
    }
    let v = weyl_fill(words[0], SILVER_RATIO_64, mix_murmur64, &mut words[filled..]);
    repair_zero_tail(&mut words, v);
    words
}

fn pack_words(seed: &[u8]) -> [u64; SEED_WORDS] {
    let mut words = pack_partial(seed);
    let v = words[0];
    repair_zero_tail(&mut words, v);
    words
}

/// Fold up to 48 bytes into words; a trailing partial word is right-aligned.
fn pack_partial(seed: &[u8]) -> [u64; SEED_WORDS] {
    let mut words = [0u64; SEED_WORDS];
    let used = &seed[..seed.len().min(SEED_BYTES_REQUIRED)];
    for (word, chunk) in words.iter_mut().zip(used.chunks(8)) {
        *word = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    }
    words
}

/// The xorshift words must not all be zero; if they are, refill them with a
/// Murmur-mixed continuation of the silver-ratio Weyl sequence.
fn repair_zero_tail(words: &mut [u64; SEED_WORDS], v: u64) {
    let tail = &mut words[SEED_WORDS - NONZERO_TAIL..];
    if tail.iter().all(|&w| w == 0) {
        log::debug!("Seed bytes produced an all-zero xorshift state; re-deriving");
        weyl_fill(v, SILVER_RATIO_64, mix_murmur64, tail);
    }
}

/// Hands out distinct 64-bit seeds for default-constructed generators.
///
/// Each call to [`next_seed`](Self::next_seed) atomically advances an
/// internal counter by [`GOLDEN_RATIO_64`], so concurrent callers never
/// observe the same seed. Share one seeder per process (by reference or
/// `Arc`) rather than creating one per call site.
///
/// # Example
/// ```
/// use lxm_random_core_rs::rng::BootstrapSeeder;
///
/// let seeder = BootstrapSeeder::new(7);
/// assert_eq!(seeder.next_seed(), 7);
/// assert_ne!(seeder.next_seed(), 7);
/// ```
#[derive(Debug)]
pub struct BootstrapSeeder {
    counter: AtomicU64,
}

impl BootstrapSeeder {
    /// Create a seeder whose first seed is `initial`
    pub fn new(initial: u64) -> Self {
        log::debug!("Bootstrap seeder created");
        Self {
            counter: AtomicU64::new(initial),
        }
    }

    /// Create a seeder from an external seed policy (OS entropy, config, ...)
    pub fn with_supplier<F>(supplier: F) -> Self
    where
        F: FnOnce() -> u64,
    {
        Self::new(supplier())
    }

    /// Create a seeder bootstrapped from the wall clock.
    ///
    /// Not suitable where seeds must be unpredictable; use
    /// [`with_supplier`](Self::with_supplier) with an OS entropy source
    /// for that.
    pub fn from_clock() -> Self {
        Self::with_supplier(clock_seed)
    }

    /// Take the next seed. Safe to call from many threads at once.
    pub fn next_seed(&self) -> u64 {
        self.counter.fetch_add(GOLDEN_RATIO_64, Ordering::Relaxed)
    }
}

impl Default for BootstrapSeeder {
    fn default() -> Self {
        Self::from_clock()
    }
}

fn clock_seed() -> u64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    mix_murmur64(since_epoch.as_millis() as u64) ^ mix_murmur64(since_epoch.as_nanos() as u64)
}
