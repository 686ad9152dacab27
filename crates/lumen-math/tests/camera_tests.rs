// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_math::{CameraSettings, FlyCamera, Mat4, Movement, Projection, Vec3};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .without_time()
        .try_init();
}

fn approx_eq3(a: Vec3, b: [f32; 3], tol: f32) {
    let a = a.to_array();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= tol, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn home_view_matches_look_at() {
    let cam = FlyCamera::default();
    let expected = Mat4::look_at(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::UNIT_Y,
    );
    assert_eq!(cam.view_matrix(), expected);
}

#[test]
fn point_ahead_of_camera_lands_on_negative_z() {
    init_tracing();
    let mut cam = FlyCamera::default();
    cam.look(450.0, 200.0);
    cam.translate(Movement::Forward, 0.3);
    cam.translate(Movement::Right, 0.1);

    let ahead = cam.eye() + cam.front() * 4.0;
    let view = cam.view_matrix();
    view.debug_print();
    approx_eq3(view.transform_point(&ahead), [0.0, 0.0, -4.0], 1e-3);
    approx_eq3(view.transform_point(&cam.eye()), [0.0, 0.0, 0.0], 1e-4);
}

#[test]
fn frame_loop_composes_projection_and_view() {
    init_tracing();
    let proj = Projection::default().to_mat4_checked().expect("valid defaults");
    let mut cam = FlyCamera::new(CameraSettings {
        speed: 2.0,
        ..CameraSettings::default()
    });

    // Two frames of input at 60 Hz.
    for _ in 0..2 {
        cam.translate(Movement::Backward, 1.0 / 60.0);
        cam.look(12.0, -3.0);
    }
    let clip = proj * cam.view_matrix();
    let floats = clip.as_array();
    assert!(floats.iter().all(|v| v.is_finite()));
    // Projection rows only touch z into w.
    assert_eq!(proj.col(2)[3], -1.0);
    assert!((cam.pitch_deg() + 0.6).abs() < 1e-5);
    assert!((cam.yaw_deg() + 87.6).abs() < 1e-4);
}

#[test]
fn reset_keeps_custom_up_and_settings() {
    init_tracing();
    let settings = CameraSettings {
        speed: 9.0,
        ..CameraSettings::default()
    };
    let mut cam = FlyCamera::new(settings);
    cam.set_up(Vec3::new(0.0, 2.0, 0.0));
    cam.set_eye(Vec3::new(5.0, 5.0, 5.0));
    cam.reset();
    assert_eq!(cam.eye(), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(cam.up(), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(cam.settings(), settings);
}
