// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-math: the vector and matrix primitives behind Lumen's real-time path
//! tracer.
//!
//! The crate covers 2D/3D vector algebra, column-major 4×4 homogeneous
//! transforms (translation, scale, axis-angle rotation, perspective
//! projection, look-at views), a fly-through camera that produces view
//! matrices, and two numeric micro-algorithms used by transform and sampling
//! code: a bit-level reciprocal square root and a stateless integer hash.
//!
//! Every operation is a pure value-in/value-out function. Nothing allocates,
//! performs I/O, or holds state across calls; precondition violations (zero
//! vectors, degenerate look-at axes, `near == far`) propagate through IEEE-754
//! as `NaN`/`inf` instead of panicking.
//!
//! Layout contract: [`Mat4`] stores 16 contiguous `f32` in column-major
//! order so it can be uploaded to the GPU unchanged.
//!
//! ```
//! use lumen_math::{Mat4, Projection, Vec3};
//!
//! let proj = Projection::default().to_mat4();
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 0.0, 1.0),
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::UNIT_Y,
//! );
//! let clip = proj * view;
//! let upload: &[f32; 16] = clip.as_array();
//! assert!((upload[11] + 1.0).abs() < 1e-4);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Fly-through camera that turns movement and pointer input into view matrices.
pub mod camera;
mod error;
/// Column-major 4×4 homogeneous transforms.
pub mod mat4;
pub mod prng;
pub mod projection;
pub mod scalar;
mod vec2;
mod vec3;

pub use camera::{CameraSettings, FlyCamera, Movement};
pub use error::MathError;
pub use mat4::Mat4;
pub use prng::{rand_hash, rand_unit, HashSampler};
pub use projection::Projection;
pub use scalar::{clamp, deg_to_rad, fast_rsqrt, fast_sqrt};
pub use vec2::Vec2;
pub use vec3::Vec3;
