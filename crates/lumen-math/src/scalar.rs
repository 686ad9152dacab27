// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix, and camera code.
//!
//! The reciprocal square root here is the classic IEEE-754 single-precision
//! bit trick refined by two Newton-Raphson steps. It is approximate: relative
//! error stays around `1e-5` for normal inputs, so comparisons against
//! `1.0 / x.sqrt()` must use a tolerance.
//!
//! Domain: `fast_rsqrt` and `fast_sqrt` are only meaningful for `x > 0`
//! (`fast_sqrt` additionally maps `0.0` to `0.0`). Other inputs return
//! unspecified values and never panic.

use std::f32::consts::TAU;

/// Magic constant for the initial reciprocal square root guess.
const RSQRT_MAGIC: u32 = 0x5F37_59DF;

/// Approximates `1.0 / x.sqrt()` for `x > 0`.
///
/// Reinterprets the float's bits as an integer, subtracts half of it from
/// `0x5F3759DF`, reinterprets the result back as a float, and applies two
/// Newton-Raphson refinements `y *= 1.5 - 0.5 * x * y * y`.
///
/// ```
/// let y = lumen_math::fast_rsqrt(4.0);
/// assert!((y - 0.5).abs() < 1e-3);
/// ```
pub fn fast_rsqrt(x: f32) -> f32 {
    let half = x * 0.5;
    // Wrapping keeps negative inputs (sign bit set) from overflowing in debug.
    let mut y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// Approximates `x.sqrt()` as `x * fast_rsqrt(x)`.
///
/// `0.0` short-circuits to `0.0`.
pub fn fast_sqrt(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    x * fast_rsqrt(x)
}

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// An inverted range (`min > max`) returns `max`; `NaN` bounds are ignored.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}
