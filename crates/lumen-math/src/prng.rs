// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Integer hash used as a stateless pseudo-random source.
//!
//! * Not cryptographically secure; use only for sampling and jitter.
//! * Pure functions of the index: the same seed always yields the same value
//!   on every platform, so the sequence can be reproduced on the GPU side
//!   without sharing generator state.

/// Mask keeping the low 31 bits (results are always non-negative as `i32`).
const HASH_MASK: u32 = 0x7FFF_FFFF;

/// `2^-24`: scales the 24 high bits of a hash into `[0, 1)` exactly.
const UNIT_SCALE: f32 = 1.0 / 16_777_216.0;

/// Hashes `seed` into a pseudo-random 31-bit integer.
///
/// `s = (seed << 13) ^ seed`, then
/// `(s * (s * s * 15731 + 789221) + 1376312589) & 0x7FFF_FFFF` with wrapping
/// 32-bit arithmetic.
///
/// ```
/// use lumen_math::rand_hash;
/// assert_eq!(rand_hash(7), rand_hash(7));
/// assert!(rand_hash(7) <= 0x7FFF_FFFF);
/// ```
pub fn rand_hash(seed: u32) -> u32 {
    let s = (seed << 13) ^ seed;
    let poly = s.wrapping_mul(s).wrapping_mul(15731).wrapping_add(789_221);
    s.wrapping_mul(poly).wrapping_add(1_376_312_589) & HASH_MASK
}

/// Hashes `seed` into a float in `[0, 0.5)`.
///
/// The half-open `[0, 0.5)` range is the convention the tracing shaders are
/// tuned for; do not widen it to `[0, 1)`. Only the 24 high bits of the
/// 31-bit hash are used so the conversion to `f32` is exact and the upper
/// bound is never reached.
///
/// Shader code that divides the full hash by `2^30` and halves gets values
/// roughly twice as large for the same seed; port this function instead.
pub fn rand_unit(seed: u32) -> f32 {
    let high = rand_hash(seed) >> 7;
    #[allow(clippy::cast_precision_loss)]
    let unit = high as f32 * UNIT_SCALE;
    unit * 0.5
}

/// Cursor over the hash sequence `seed, seed + 1, seed + 2, ...`.
///
/// The sampler only owns its seed and position; two samplers built with the
/// same seed yield identical sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashSampler {
    seed: u32,
    index: u32,
}

impl HashSampler {
    /// Creates a sampler positioned at `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { seed, index: 0 }
    }

    /// Number of values drawn so far (wraps at `u32::MAX`).
    pub const fn index(&self) -> u32 {
        self.index
    }

    fn advance(&mut self) -> u32 {
        let key = self.seed.wrapping_add(self.index);
        self.index = self.index.wrapping_add(1);
        key
    }

    /// Returns the next 31-bit hash.
    pub fn next_hash(&mut self) -> u32 {
        rand_hash(self.advance())
    }

    /// Returns the next float in `[0, 0.5)`.
    pub fn next_unit(&mut self) -> f32 {
        rand_unit(self.advance())
    }
}

impl Iterator for HashSampler {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_unit())
    }
}
