//! Bit-mixing primitives
//!
//! Stateless 64-bit avalanche functions and the odd constants used to
//! spread seed material across the generator state.
//!
//! # Roles
//!
//! - [`mix_stafford13`]: strong avalanche, expands seed words into xorshift words
//! - [`mix_murmur64`]: derives the LCG addend `a` from an integer seed
//! - [`mix_lea64`]: output mixer, runs once per generated value
//!
//! CRITICAL: Every constant in this file is part of the output contract.
//! Changing any of them changes every sequence the engine produces.

/// Weyl-sequence increment: 2^64 divided by the golden ratio, rounded to odd.
pub const GOLDEN_RATIO_64: u64 = 0x9e37_79b9_7f4a_7c15;

/// 2^64 divided by the silver ratio (1 + sqrt 2), rounded to odd.
///
/// XORed into raw integer seeds so that "pedestrian" seeds such as 0, 1, 2
/// start from bit patterns with irregularly spaced ones.
pub const SILVER_RATIO_64: u64 = 0x6a09_e667_f3bc_c909;

/// Stafford's variant 13 of the 64-bit MurmurHash3 finalizer.
///
/// # Example
/// ```
/// use lxm_random_core_rs::rng::mix::mix_stafford13;
///
/// assert_eq!(mix_stafford13(0), 0);
/// assert_ne!(mix_stafford13(1), mix_stafford13(2));
/// ```
#[inline]
pub fn mix_stafford13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// The 64-bit MurmurHash3 finalizer.
#[inline]
pub fn mix_murmur64(z: u64) -> u64 {
    let z = (z ^ (z >> 33)).wrapping_mul(0xff51_afd7_ed55_8ccd);
    let z = (z ^ (z >> 33)).wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    z ^ (z >> 33)
}

/// Doug Lea's 64-bit mixer: two rounds of xor-shift-multiply by one constant.
#[inline]
pub fn mix_lea64(z: u64) -> u64 {
    let z = (z ^ (z >> 32)).wrapping_mul(0xdaba_0b6e_b093_22e3);
    let z = (z ^ (z >> 32)).wrapping_mul(0xdaba_0b6e_b093_22e3);
    z ^ (z >> 32)
}

/// Fill `out` with a SplitMix-style sequence: `mix(v += gamma)` per slot.
///
/// Returns the final value of the Weyl accumulator so callers can keep
/// drawing from the same sequence.
pub(crate) fn weyl_fill(mut v: u64, gamma: u64, mix: fn(u64) -> u64, out: &mut [u64]) -> u64 {
    for slot in out.iter_mut() {
        v = v.wrapping_add(gamma);
        *slot = mix(v);
    }
    v
}
