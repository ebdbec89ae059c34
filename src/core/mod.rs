pub mod anim;
pub mod camera;
pub mod carousel;
pub mod geometry;
pub mod mesh;
pub mod preset;
pub mod project;
pub mod scene;
pub mod terminal;

pub use anim::Animator;
pub use camera::{CameraRig, PointerState};
pub use mesh::{FrameGeometry, SceneVertex};
pub use preset::{SceneConfig, ScenePreset, Viewport};
pub use scene::{build_scene, Scene};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
