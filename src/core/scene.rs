use crate::constants::*;
use crate::core::geometry::{grid_lines, ShapeKind};
use crate::core::preset::{scaled_count, SceneConfig, Viewport};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeMaterial {
    /// Brighter green wireframe.
    Wire,
    /// Dim cyan wireframe.
    Faint,
}

impl NodeMaterial {
    pub const ALL: [NodeMaterial; 2] = [NodeMaterial::Wire, NodeMaterial::Faint];

    pub fn rgba(self) -> [f32; 4] {
        let (c, a) = match self {
            NodeMaterial::Wire => (WIRE_COLOR, WIRE_OPACITY),
            NodeMaterial::Faint => (FAINT_COLOR, FAINT_OPACITY),
        };
        [c[0], c[1], c[2], a]
    }
}

#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub points: Vec<Vec3>,
    pub rotation_y: f32,
}

/// Per-line parameters, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamParams {
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct StreamLine {
    pub position: Vec3,
    params: StreamParams,
}

impl StreamLine {
    pub fn new(position: Vec3, params: StreamParams) -> Self {
        Self { position, params }
    }

    #[inline]
    pub fn params(&self) -> &StreamParams {
        &self.params
    }

    /// Move forward along +Z, recycling to the rear bound past the front.
    #[inline]
    pub fn advance(&mut self) {
        self.position.z += self.params.speed;
        if self.position.z > STREAM_FORWARD_BOUND {
            self.position.z = STREAM_REAR_BOUND;
        }
    }
}

/// Per-node parameters, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeParams {
    pub shape: ShapeKind,
    pub material: NodeMaterial,
    /// Radians per frame around X and Y.
    pub rot_speed: Vec2,
    pub float_speed: f32,
    pub float_offset: f32,
    pub original_y: f32,
}

#[derive(Clone, Debug)]
pub struct FloatingNode {
    pub position: Vec3,
    /// Euler angles around X and Y, kept in [0, 2π).
    pub rotation: Vec2,
    params: NodeParams,
}

impl FloatingNode {
    pub fn new(position: Vec3, params: NodeParams) -> Self {
        Self {
            position,
            rotation: Vec2::ZERO,
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &NodeParams {
        &self.params
    }

    #[inline]
    pub fn step(&mut self, time: f64) {
        self.rotation = (self.rotation + self.params.rot_speed).rem_euclid(Vec2::splat(TAU));
        let phase = (time + self.params.float_offset as f64).sin() as f32;
        self.position.y = self.params.original_y + phase * FLOAT_AMPLITUDE;
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    pub lines: Vec<[Vec3; 2]>,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: FOG_COLOR,
            density: FOG_DENSITY,
        }
    }
}

pub struct Scene {
    pub config: SceneConfig,
    pub particles: ParticleCloud,
    pub streams: Vec<StreamLine>,
    pub nodes: Vec<FloatingNode>,
    pub node_group_rotation_y: f32,
    pub grid: Grid,
    pub fog: Fog,
}

#[inline]
fn centred(rng: &mut impl Rng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[inline]
fn centred_vec(rng: &mut impl Rng, spread: [f32; 3]) -> Vec3 {
    Vec3::new(
        centred(rng, spread[0]),
        centred(rng, spread[1]),
        centred(rng, spread[2]),
    )
}

fn spawn_particles(rng: &mut impl Rng, count: usize) -> ParticleCloud {
    let spread = [PARTICLE_CUBE_SIDE; 3];
    let points = (0..count).map(|_| centred_vec(rng, spread)).collect();
    ParticleCloud {
        points,
        rotation_y: 0.0,
    }
}

fn spawn_stream(rng: &mut impl Rng) -> StreamLine {
    let length = STREAM_LENGTH_MIN + rng.gen::<f32>() * STREAM_LENGTH_SPAN;
    let opacity = rng.gen::<f32>() * STREAM_OPACITY_MAX;
    let position = centred_vec(rng, STREAM_SPREAD);
    let speed = STREAM_SPEED_MIN + rng.gen::<f32>() * STREAM_SPEED_SPAN;
    StreamLine::new(
        position,
        StreamParams {
            length,
            speed,
            opacity,
        },
    )
}

fn spawn_node(rng: &mut impl Rng) -> FloatingNode {
    let shape = *ShapeKind::ALL.choose(rng).unwrap_or(&ShapeKind::Icosahedron);
    let material = if rng.gen_bool(NODE_WIRE_PROBABILITY) {
        NodeMaterial::Wire
    } else {
        NodeMaterial::Faint
    };
    let position = centred_vec(rng, NODE_SPREAD);
    let rot_speed = Vec2::new(
        centred(rng, NODE_ROT_SPEED_SPAN),
        centred(rng, NODE_ROT_SPEED_SPAN),
    );
    let float_speed = NODE_FLOAT_SPEED_MIN + rng.gen::<f32>() * NODE_FLOAT_SPEED_SPAN;
    let float_offset = rng.gen_range(0.0..TAU);
    FloatingNode::new(
        position,
        NodeParams {
            shape,
            material,
            rot_speed,
            float_speed,
            float_offset,
            original_y: position.y,
        },
    )
}

/// Populate the decorative world for a container.
///
/// `viewport` is `None` when the host page has no container; nothing is
/// allocated and `None` comes back so page load is never disturbed.
pub fn build_scene(
    config: SceneConfig,
    viewport: Option<Viewport>,
    rng: &mut impl Rng,
) -> Option<Scene> {
    let viewport = viewport?;
    let density = viewport.density_multiplier();

    let particles = spawn_particles(rng, scaled_count(config.base_particles, density));
    let streams = (0..scaled_count(config.base_streams, density))
        .map(|_| spawn_stream(rng))
        .collect();
    let nodes = (0..scaled_count(config.base_nodes, density))
        .map(|_| spawn_node(rng))
        .collect();

    Some(Scene {
        config,
        particles,
        streams,
        nodes,
        node_group_rotation_y: 0.0,
        grid: Grid {
            lines: grid_lines(GRID_SIZE, GRID_DIVISIONS, GRID_Y),
            color: GRID_COLOR,
        },
        fog: Fog::default(),
    })
}
