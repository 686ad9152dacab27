// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixture-driven checks for the projection, view, rotation, and hash outputs
//! that the tracing shaders consume.

#![allow(missing_docs)]

use once_cell::sync::Lazy;
use serde::Deserialize;

use lumen_math::{rand_hash, rand_unit, Mat4, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    perspective: Vec<PerspectiveFixture>,
    look_at: Vec<LookAtFixture>,
    rotation: Vec<RotationFixture>,
    hash: Vec<HashFixture>,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("perspective", &self.perspective);
        ensure("look_at", &self.look_at);
        ensure("rotation", &self.rotation);
        ensure("hash", &self.hash);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-4
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PerspectiveFixture {
    fov_deg: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct LookAtFixture {
    eye: [f32; 3],
    center: [f32; 3],
    up: [f32; 3],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct RotationFixture {
    angle_deg: f32,
    axis: [f32; 3],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct HashFixture {
    seed: u32,
    hash: u32,
    unit: f32,
}

fn assert_mat4(actual: Mat4, expected: [f32; 16], tol: &Tolerance, ctx: &str) {
    let arr = actual.to_cols_array();
    for (i, (a, e)) in arr.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tol.absolute,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {})",
            tol.absolute
        );
    }
}

#[test]
fn perspective_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.perspective {
        let actual = Mat4::perspective(fix.fov_deg, fix.aspect_ratio, fix.near, fix.far);
        assert_mat4(
            actual,
            fix.expected,
            tol,
            &format!(
                "perspective fov={} aspect={} near={} far={}",
                fix.fov_deg, fix.aspect_ratio, fix.near, fix.far
            ),
        );
    }
}

#[test]
fn look_at_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.look_at {
        let actual = Mat4::look_at(
            Vec3::from(fix.eye),
            Vec3::from(fix.center),
            Vec3::from(fix.up),
        );
        assert_mat4(
            actual,
            fix.expected,
            tol,
            &format!("look_at eye={:?} center={:?}", fix.eye, fix.center),
        );
    }
}

#[test]
fn rotation_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.rotation {
        let actual = Mat4::rotation(fix.angle_deg, Vec3::from(fix.axis));
        assert_mat4(
            actual,
            fix.expected,
            tol,
            &format!("rotation angle={} axis={:?}", fix.angle_deg, fix.axis),
        );
    }
}

#[test]
fn hash_fixtures_are_bit_exact() {
    for fix in &FIXTURES.hash {
        assert_eq!(rand_hash(fix.seed), fix.hash, "rand_hash({})", fix.seed);
        assert_eq!(
            rand_unit(fix.seed).to_bits(),
            fix.unit.to_bits(),
            "rand_unit({})",
            fix.seed
        );
    }
}
