// Shared visual tuning constants for the background scene.

// Viewport
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0; // below this the scene thins out
pub const MOBILE_DENSITY: f32 = 0.5;
pub const DESKTOP_DENSITY: f32 = 1.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_HEIGHT: f32 = 1.5;
pub const CAMERA_DISTANCE_DESKTOP: f32 = 8.0;
pub const CAMERA_DISTANCE_MOBILE: f32 = 12.0;
pub const CAMERA_BLEND: f32 = 0.05; // fraction of the remaining gap closed per frame
pub const PARALLAX_X: f32 = 2.0;
pub const PARALLAX_Y: f32 = 1.0;

// Animation
pub const TIME_STEP: f64 = 0.01; // f64: long-lived tabs run for days
pub const FLOAT_AMPLITUDE: f32 = 0.3;
pub const NODE_GROUP_SPIN: f32 = 0.05;
pub const PARTICLE_SPIN: f32 = 0.02;
pub const STREAM_FORWARD_BOUND: f32 = 20.0;
pub const STREAM_REAR_BOUND: f32 = -30.0;

// Particle cloud
pub const PARTICLE_CUBE_SIDE: f32 = 60.0;
pub const PARTICLE_COLOR: [f32; 3] = [0.0, 1.0, 0.616]; // 0x00ff9d
pub const PARTICLE_OPACITY: f32 = 0.4;

// Stream lines
pub const STREAM_SPREAD: [f32; 3] = [30.0, 20.0, 30.0];
pub const STREAM_LENGTH_MIN: f32 = 10.0;
pub const STREAM_LENGTH_SPAN: f32 = 20.0;
pub const STREAM_SPEED_MIN: f32 = 0.05;
pub const STREAM_SPEED_SPAN: f32 = 0.1;
pub const STREAM_OPACITY_MAX: f32 = 0.3;
pub const STREAM_COLOR: [f32; 3] = [0.0, 0.847, 1.0]; // 0x00d8ff

// Floating nodes
pub const NODE_SPREAD: [f32; 3] = [25.0, 15.0, 20.0];
pub const NODE_ROT_SPEED_SPAN: f32 = 0.015; // centred on zero
pub const NODE_FLOAT_SPEED_MIN: f32 = 0.002;
pub const NODE_FLOAT_SPEED_SPAN: f32 = 0.005;
pub const NODE_WIRE_PROBABILITY: f64 = 0.4;
pub const WIRE_COLOR: [f32; 3] = [0.0, 1.0, 0.616]; // 0x00ff9d
pub const WIRE_OPACITY: f32 = 0.25;
pub const FAINT_COLOR: [f32; 3] = [0.0, 0.847, 1.0]; // 0x00d8ff
pub const FAINT_OPACITY: f32 = 0.1;

// Grid
pub const GRID_SIZE: f32 = 60.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_Y: f32 = -6.0;
pub const GRID_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // 0x111111

// Fog (exponential squared)
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0196]; // 0x050505
pub const FOG_DENSITY: f32 = 0.04;
