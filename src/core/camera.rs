use crate::constants::*;
use crate::core::preset::Viewport;
use glam::{Mat4, Vec3};

/// Pointer position in normalized device coordinates, both axes in [-1, 1].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Map window client coordinates to NDC (y up).
    pub fn from_client(client_x: f32, client_y: f32, inner_w: f32, inner_h: f32) -> Self {
        if inner_w <= 0.0 || inner_h <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / inner_w) * 2.0 - 1.0,
            y: -(client_y / inner_h) * 2.0 + 1.0,
        }
    }
}

#[inline]
pub fn lerp_toward(current: Vec3, target: Vec3, blend: f32) -> Vec3 {
    current + (target - current) * blend
}

pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    pub distance: f32,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    parallax: bool,
}

impl CameraRig {
    pub fn new(viewport: Viewport, parallax: bool) -> Self {
        let distance = viewport.camera_distance();
        let position = Vec3::new(0.0, CAMERA_HEIGHT, distance);
        Self {
            position,
            target: position,
            aspect: viewport.aspect().unwrap_or(1.0),
            distance,
            fov_y_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            parallax,
        }
    }

    /// Where the camera wants to be for the given pointer.
    pub fn target_for(&self, pointer: PointerState) -> Vec3 {
        if self.parallax {
            Vec3::new(
                pointer.x * PARALLAX_X,
                CAMERA_HEIGHT + pointer.y * PARALLAX_Y,
                self.distance,
            )
        } else {
            Vec3::new(0.0, CAMERA_HEIGHT, self.distance)
        }
    }

    /// One frame of exponential smoothing toward the pointer target.
    pub fn follow(&mut self, pointer: PointerState) {
        self.target = self.target_for(pointer);
        self.position = lerp_toward(self.position, self.target, CAMERA_BLEND);
    }

    /// Refresh aspect and snap the orbit distance for the new container size.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(aspect) = viewport.aspect() {
            self.aspect = aspect;
        }
        self.distance = viewport.camera_distance();
        self.position.z = self.distance;
        self.target.z = self.distance;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
