// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_and_blend_are_fractions() {
    for a in [
        PARTICLE_OPACITY,
        STREAM_OPACITY_MAX,
        WIRE_OPACITY,
        FAINT_OPACITY,
        CAMERA_BLEND,
    ] {
        assert!(a > 0.0 && a <= 1.0, "{a} outside (0, 1]");
    }
    assert!(NODE_WIRE_PROBABILITY > 0.0 && NODE_WIRE_PROBABILITY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stream_loop_is_well_formed() {
    // Rear bound sits behind the forward bound and behind every spawn offset.
    assert!(STREAM_REAR_BOUND < STREAM_FORWARD_BOUND);
    assert!(STREAM_REAR_BOUND < -STREAM_SPREAD[2] * 0.5);
    assert!(STREAM_SPEED_MIN > 0.0);
    assert!(STREAM_SPEED_MIN + STREAM_SPEED_SPAN < STREAM_FORWARD_BOUND - STREAM_REAR_BOUND);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_have_logical_relationships() {
    // Narrow screens pull the camera back to fit the scene.
    assert!(CAMERA_DISTANCE_MOBILE > CAMERA_DISTANCE_DESKTOP);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MOBILE_DENSITY < DESKTOP_DENSITY);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_and_fog_are_sane() {
    assert!(GRID_Y < -CAMERA_HEIGHT);
    assert!(GRID_DIVISIONS > 0);
    assert!(FOG_DENSITY > 0.0);
}
