// Host-side tests for scene construction and the viewport-driven camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod preset {
        include!("../src/core/preset.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::constants::*;
use crate::core::camera::{CameraRig, PointerState};
use crate::core::geometry::ShapeKind;
use crate::core::mesh::FrameGeometry;
use crate::core::preset::{SceneConfig, ScenePreset, Viewport};
use crate::core::scene::{build_scene, NodeMaterial};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

fn desktop() -> Viewport {
    Viewport::new(1200.0, 800.0)
}

fn mobile() -> Viewport {
    Viewport::new(500.0, 900.0)
}

#[test]
fn missing_container_builds_nothing() {
    let mut rng = StdRng::seed_from_u64(11);
    let scene = build_scene(SceneConfig::default(), None, &mut rng);
    assert!(scene.is_none());
    // No randomness was consumed either: nothing was spawned.
    let mut fresh = StdRng::seed_from_u64(11);
    assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
}

#[test]
fn forty_nodes_at_full_density() {
    let mut rng = StdRng::seed_from_u64(12);
    let config = SceneConfig {
        base_nodes: 40,
        ..SceneConfig::default()
    };
    assert_eq!(desktop().density_multiplier(), 1.0);
    let scene = build_scene(config, Some(desktop()), &mut rng).expect("scene");
    assert_eq!(scene.nodes.len(), 40);
    for node in &scene.nodes {
        let p = node.params();
        assert!(ShapeKind::ALL.contains(&p.shape));
        assert!(NodeMaterial::ALL.contains(&p.material));
    }
}

#[test]
fn default_preset_counts_on_desktop() {
    let mut rng = StdRng::seed_from_u64(13);
    let scene = build_scene(SceneConfig::default(), Some(desktop()), &mut rng).expect("scene");
    assert_eq!(scene.particles.points.len(), 2000);
    assert_eq!(scene.streams.len(), 15);
    assert_eq!(scene.nodes.len(), 40);
    assert_eq!(scene.grid.lines.len(), 2 * (GRID_DIVISIONS as usize + 1));
}

#[test]
fn narrow_viewport_halves_counts_with_floor() {
    let mut rng = StdRng::seed_from_u64(14);
    let scene = build_scene(SceneConfig::default(), Some(mobile()), &mut rng).expect("scene");
    assert_eq!(scene.particles.points.len(), 1000);
    assert_eq!(scene.streams.len(), 7); // floor(15 * 0.5)
    assert_eq!(scene.nodes.len(), 20);
}

#[test]
fn drift_preset_uses_its_own_counts() {
    let mut rng = StdRng::seed_from_u64(15);
    let config = SceneConfig::for_preset(ScenePreset::Drift);
    assert!(!config.parallax);
    let scene = build_scene(config, Some(desktop()), &mut rng).expect("scene");
    assert_eq!(scene.particles.points.len(), 1200);
    assert_eq!(scene.streams.len(), 20);
}

#[test]
fn random_parameters_stay_in_their_ranges() {
    let mut rng = StdRng::seed_from_u64(16);
    let config = SceneConfig {
        base_particles: 500,
        base_streams: 200,
        base_nodes: 400,
        parallax: true,
    };
    let scene = build_scene(config, Some(desktop()), &mut rng).expect("scene");

    let half = PARTICLE_CUBE_SIDE * 0.5;
    for p in &scene.particles.points {
        assert!(p.abs().max_element() <= half);
    }
    for s in &scene.streams {
        let p = s.params();
        assert!(p.length >= STREAM_LENGTH_MIN && p.length < STREAM_LENGTH_MIN + STREAM_LENGTH_SPAN);
        assert!(p.speed >= STREAM_SPEED_MIN && p.speed < STREAM_SPEED_MIN + STREAM_SPEED_SPAN);
        assert!(p.opacity >= 0.0 && p.opacity < STREAM_OPACITY_MAX);
    }
    let mut wire = 0;
    for n in &scene.nodes {
        let p = n.params();
        assert!(p.rot_speed.abs().max_element() <= NODE_ROT_SPEED_SPAN * 0.5);
        assert!(p.float_speed >= NODE_FLOAT_SPEED_MIN);
        assert!(p.float_speed < NODE_FLOAT_SPEED_MIN + NODE_FLOAT_SPEED_SPAN);
        assert!(p.float_offset >= 0.0 && p.float_offset < TAU);
        assert_eq!(p.original_y, n.position.y);
        assert!(n.position.x.abs() <= NODE_SPREAD[0] * 0.5);
        assert!(n.position.y.abs() <= NODE_SPREAD[1] * 0.5);
        assert!(n.position.z.abs() <= NODE_SPREAD[2] * 0.5);
        if p.material == NodeMaterial::Wire {
            wire += 1;
        }
    }
    // 400 draws at p = 0.4: comfortably inside 100..220.
    assert!((100..220).contains(&wire), "wire count {wire}");
}

#[test]
fn same_seed_builds_the_same_scene() {
    let build = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        build_scene(SceneConfig::default(), Some(desktop()), &mut rng).expect("scene")
    };
    let a = build(17);
    let b = build(17);
    assert_eq!(a.particles.points, b.particles.points);
    let pa: Vec<_> = a.nodes.iter().map(|n| *n.params()).collect();
    let pb: Vec<_> = b.nodes.iter().map(|n| *n.params()).collect();
    assert_eq!(pa, pb);
}

#[test]
fn resize_snaps_camera_distance_on_width_threshold() {
    let mut cam = CameraRig::new(desktop(), true);
    cam.resize(Viewport::new(500.0, 800.0));
    assert_eq!(cam.distance, CAMERA_DISTANCE_MOBILE);
    assert_eq!(cam.position.z, CAMERA_DISTANCE_MOBILE);
    assert_eq!(cam.target_for(PointerState::default()).z, CAMERA_DISTANCE_MOBILE);
    assert!((cam.aspect - 500.0 / 800.0).abs() < 1e-6);

    cam.resize(Viewport::new(1200.0, 600.0));
    assert_eq!(cam.distance, CAMERA_DISTANCE_DESKTOP);
    assert_eq!(cam.position.z, CAMERA_DISTANCE_DESKTOP);
    assert!((cam.aspect - 2.0).abs() < 1e-6);

    // 768 itself is desktop.
    cam.resize(Viewport::new(768.0, 600.0));
    assert_eq!(cam.distance, CAMERA_DISTANCE_DESKTOP);
}

#[test]
fn zero_sized_resize_keeps_aspect() {
    let mut cam = CameraRig::new(desktop(), true);
    cam.resize(Viewport::new(0.0, 0.0));
    assert!((cam.aspect - 1.5).abs() < 1e-6);
}

#[test]
fn startup_camera_matches_viewport() {
    let cam = CameraRig::new(mobile(), true);
    assert_eq!(cam.position, Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE_MOBILE));
    let cam = CameraRig::new(desktop(), true);
    assert_eq!(cam.position, Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE_DESKTOP));
}

#[test]
fn pointer_maps_window_to_ndc() {
    let p = PointerState::from_client(0.0, 0.0, 1000.0, 500.0);
    assert_eq!(p, PointerState { x: -1.0, y: 1.0 });
    let p = PointerState::from_client(1000.0, 500.0, 1000.0, 500.0);
    assert_eq!(p, PointerState { x: 1.0, y: -1.0 });
    let p = PointerState::from_client(500.0, 250.0, 1000.0, 500.0);
    assert_eq!(p, PointerState { x: 0.0, y: 0.0 });
    assert_eq!(
        PointerState::from_client(10.0, 10.0, 0.0, 0.0),
        PointerState::default()
    );
}

#[test]
fn camera_looks_at_origin() {
    let mut cam = CameraRig::new(desktop(), true);
    cam.position = Vec3::new(1.3, 2.2, 7.5);
    let origin_in_view = cam.view().transform_point3(Vec3::ZERO);
    // Origin lies straight ahead on the view axis (-Z).
    assert!(origin_in_view.x.abs() < 1e-5);
    assert!(origin_in_view.y.abs() < 1e-5);
    assert!(origin_in_view.z < 0.0);
}

#[test]
fn frame_geometry_covers_every_object() {
    let mut rng = StdRng::seed_from_u64(18);
    let scene = build_scene(SceneConfig::default(), Some(desktop()), &mut rng).expect("scene");
    let mut geom = FrameGeometry::new();
    geom.collect(&scene);

    assert_eq!(geom.points.len(), scene.particles.points.len());
    let node_edges: usize = scene
        .nodes
        .iter()
        .map(|n| n.params().shape.edges().len())
        .sum();
    let expected_segments = scene.grid.lines.len() + scene.streams.len() + node_edges;
    assert_eq!(geom.lines.len(), 2 * expected_segments);

    // Collecting twice reuses the lists rather than appending.
    geom.collect(&scene);
    assert_eq!(geom.points.len(), scene.particles.points.len());
    assert_eq!(geom.lines.len(), 2 * expected_segments);
}

#[test]
fn stream_segment_extends_forward_by_its_length() {
    let mut rng = StdRng::seed_from_u64(19);
    let config = SceneConfig {
        base_particles: 0,
        base_streams: 1,
        base_nodes: 0,
        parallax: true,
    };
    let scene = build_scene(config, Some(desktop()), &mut rng).expect("scene");
    let mut geom = FrameGeometry::new();
    geom.collect(&scene);
    let grid_verts = scene.grid.lines.len() * 2;
    let a = Vec3::from(geom.lines[grid_verts].position);
    let b = Vec3::from(geom.lines[grid_verts + 1].position);
    let s = &scene.streams[0];
    assert_eq!(a, s.position);
    assert!((b.z - a.z - s.params().length).abs() < 1e-5);
    assert_eq!(geom.lines[grid_verts].color[3], s.params().opacity);
}
