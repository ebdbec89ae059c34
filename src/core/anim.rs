use crate::constants::{NODE_GROUP_SPIN, PARTICLE_SPIN, TIME_STEP};
use crate::core::camera::{CameraRig, PointerState};
use crate::core::scene::Scene;
use std::f64::consts::TAU;

/// Group spin angle for `time`, reduced to [0, 2π) before narrowing to f32.
#[inline]
pub fn spin_angle(time: f64, rate: f32) -> f32 {
    (time * rate as f64).rem_euclid(TAU) as f32
}

/// Frame-count driven phase source for the ambient animation.
///
/// Time advances by a fixed step per tick regardless of wall-clock delta, so
/// perceived speed follows the display refresh rate. Time is derived from the
/// frame count in f64 so it stays exactly `frames * TIME_STEP`.
#[derive(Default, Clone, Copy, Debug)]
pub struct Animator {
    time: f64,
    frames: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame and mutate every transform in the scene.
    pub fn tick(&mut self, scene: &mut Scene, camera: &mut CameraRig, pointer: PointerState) {
        self.frames += 1;
        self.time = self.frames as f64 * TIME_STEP;
        let t = self.time;

        camera.follow(pointer);

        scene.node_group_rotation_y = spin_angle(t, NODE_GROUP_SPIN);
        scene.particles.rotation_y = spin_angle(t, PARTICLE_SPIN);

        for node in &mut scene.nodes {
            node.step(t);
        }
        for line in &mut scene.streams {
            line.advance();
        }
    }
}
