//! Generator capabilities
//!
//! [`RandomSource`] is the one capability higher-level adapters need: a
//! stream of `u64`. [`SplittableGenerator`] adds the split protocol on top.

/// Anything that produces a stream of 64-bit pseudorandom values
pub trait RandomSource {
    /// Generate next random u64 value, advancing internal state
    fn next_u64(&mut self) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Bits of salt mixed into the brine of each child of a [`Splits`] fan-out
const SALT_BITS: u32 = 4;

/// A generator that can derive independent children from an entropy source
///
/// Only [`split_from`](Self::split_from) is engine-specific; the rest are
/// conveniences that use the generator itself as the source.
pub trait SplittableGenerator: RandomSource + Sized {
    /// Build a new generator whose state is drawn from `source` and whose
    /// stream is disambiguated by the low 63 bits of `brine`.
    fn split_from<S: RandomSource + ?Sized>(source: &mut S, brine: u64) -> Self;

    /// Split using `self` as the entropy source
    fn split(&mut self, brine: u64) -> Self {
        Self::split_from(self, brine)
    }

    /// Split with a brine value drawn from `self`
    fn split_random(&mut self) -> Self {
        let brine = self.next_u64();
        Self::split_from(self, brine)
    }

    /// Iterate over `count` children split from `self`.
    ///
    /// Children of one fan-out receive pairwise distinct brines (see
    /// [`Splits`]), so their `a` parameters never collide.
    fn splits(&mut self, count: u64) -> Splits<'_, Self> {
        Splits::new(self, count)
    }
}

/// Iterator returned by [`SplittableGenerator::splits`].
///
/// A nonzero 4-bit salt is drawn from the parent once; child `i` then gets
/// brine `(i << 4) | salt`.
#[derive(Debug)]
pub struct Splits<'a, G: SplittableGenerator> {
    parent: &'a mut G,
    salt: u64,
    index: u64,
    count: u64,
}

impl<'a, G: SplittableGenerator> Splits<'a, G> {
    fn new(parent: &'a mut G, count: u64) -> Self {
        let mask = (1u64 << SALT_BITS) - 1;
        let mut bits = parent.next_u64();
        // Consume the draw nibble by nibble until a nonzero one turns up.
        let salt = loop {
            if bits == 0 {
                bits = parent.next_u64();
                continue;
            }
            let digit = bits & mask;
            if digit != 0 {
                break digit;
            }
            bits >>= SALT_BITS;
        };
        Self {
            parent,
            salt,
            index: 0,
            count,
        }
    }
}

impl<G: SplittableGenerator> Iterator for Splits<'_, G> {
    type Item = G;

    fn next(&mut self) -> Option<G> {
        if self.index >= self.count {
            return None;
        }
        let brine = (self.index << SALT_BITS) | self.salt;
        self.index += 1;
        Some(G::split_from(&mut *self.parent, brine))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
