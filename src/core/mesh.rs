use crate::constants::{PARTICLE_COLOR, PARTICLE_OPACITY, STREAM_COLOR};
use crate::core::geometry::ShapeKind;
use crate::core::scene::Scene;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// World-space vertex streamed to the GPU every frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl SceneVertex {
    #[inline]
    fn new(p: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: p.to_array(),
            color,
        }
    }
}

/// Point and line-list vertices for one frame.
#[derive(Default)]
pub struct FrameGeometry {
    pub points: Vec<SceneVertex>,
    pub lines: Vec<SceneVertex>,
    wireframes: Vec<(ShapeKind, Vec<[Vec3; 2]>)>,
}

impl FrameGeometry {
    pub fn new() -> Self {
        let wireframes = ShapeKind::ALL.iter().map(|&k| (k, k.edges())).collect();
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            wireframes,
        }
    }

    fn edges_for(&self, kind: ShapeKind) -> &[[Vec3; 2]] {
        self.wireframes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| e.as_slice())
            .unwrap_or(&[])
    }

    /// Rebuild both vertex lists from the current scene transforms.
    pub fn collect(&mut self, scene: &Scene) {
        let mut points = std::mem::take(&mut self.points);
        let mut lines = std::mem::take(&mut self.lines);
        points.clear();
        lines.clear();

        let star_rot = Quat::from_rotation_y(scene.particles.rotation_y);
        let star_rgba = [
            PARTICLE_COLOR[0],
            PARTICLE_COLOR[1],
            PARTICLE_COLOR[2],
            PARTICLE_OPACITY,
        ];
        points.extend(
            scene
                .particles
                .points
                .iter()
                .map(|&p| SceneVertex::new(star_rot * p, star_rgba)),
        );

        let g = scene.grid.color;
        let grid_rgba = [g[0], g[1], g[2], 1.0];
        for [a, b] in &scene.grid.lines {
            lines.push(SceneVertex::new(*a, grid_rgba));
            lines.push(SceneVertex::new(*b, grid_rgba));
        }

        for s in &scene.streams {
            let p = s.params();
            let rgba = [STREAM_COLOR[0], STREAM_COLOR[1], STREAM_COLOR[2], p.opacity];
            lines.push(SceneVertex::new(s.position, rgba));
            lines.push(SceneVertex::new(s.position + Vec3::Z * p.length, rgba));
        }

        let group = Mat4::from_rotation_y(scene.node_group_rotation_y);
        for node in &scene.nodes {
            let params = node.params();
            let model = group
                * Mat4::from_translation(node.position)
                * Mat4::from_quat(Quat::from_euler(
                    EulerRot::XYZ,
                    node.rotation.x,
                    node.rotation.y,
                    0.0,
                ));
            let rgba = params.material.rgba();
            for [a, b] in self.edges_for(params.shape) {
                lines.push(SceneVertex::new(model.transform_point3(*a), rgba));
                lines.push(SceneVertex::new(model.transform_point3(*b), rgba));
            }
        }

        self.points = points;
        self.lines = lines;
    }
}
