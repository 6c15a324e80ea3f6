//! Generator period
//!
//! The period `(2^256 - 1) * 2^64` does not fit any primitive integer, so it
//! is carried as a fixed 320-bit value.

use std::fmt;

/// Number of 64-bit limbs in a [`Period`]
const LIMBS: usize = 5;

/// An unsigned 320-bit integer, stored as little-endian 64-bit limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    limbs: [u64; LIMBS],
}

/// Period of the L64X256Mix algorithm: `(2^256 - 1) * 2^64`.
///
/// The LCG has period 2^64 and the xoshiro256 component 2^256 - 1 (it never
/// reaches the all-zero state); the two are coprime, so the combined state
/// cycles through their product.
pub const PERIOD: Period = Period {
    limbs: [0, u64::MAX, u64::MAX, u64::MAX, u64::MAX],
};

impl Period {
    /// Little-endian limbs (`limbs()[0]` is the least significant)
    pub fn limbs(&self) -> [u64; LIMBS] {
        self.limbs
    }

    /// Big-endian byte representation
    pub fn to_be_bytes(&self) -> [u8; LIMBS * 8] {
        let mut out = [0u8; LIMBS * 8];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Position of the highest set bit plus one (0 for zero)
    pub fn bit_length(&self) -> u32 {
        self.limbs
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &limb)| limb != 0)
            .map(|(i, limb)| i as u32 * 64 + (64 - limb.leading_zeros()))
            .unwrap_or(0)
    }

    fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Divide in place by `divisor`, returning the remainder.
    fn div_rem_small(&mut self, divisor: u64) -> u64 {
        let mut rem: u128 = 0;
        for limb in self.limbs.iter_mut().rev() {
            let acc = (rem << 64) | u128::from(*limb);
            *limb = (acc / u128::from(divisor)) as u64;
            rem = acc % u128::from(divisor);
        }
        rem as u64
    }
}

impl fmt::Display for Period {
    /// Formats the value in decimal
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Peel off 19 decimal digits at a time (largest power of ten in a u64).
        const CHUNK: u64 = 10_000_000_000_000_000_000;

        if self.is_zero() {
            return f.pad("0");
        }

        let mut rest = *self;
        let mut chunks = Vec::new();
        while !rest.is_zero() {
            chunks.push(rest.div_rem_small(CHUNK));
        }

        let mut digits = String::with_capacity(chunks.len() * 19);
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            digits.push_str(&first.to_string());
        }
        for chunk in iter {
            digits.push_str(&format!("{:019}", chunk));
        }
        f.pad(&digits)
    }
}
