use crate::constants::{
    CAMERA_DISTANCE_DESKTOP, CAMERA_DISTANCE_MOBILE, DESKTOP_DENSITY, MOBILE_DENSITY,
    MOBILE_WIDTH_THRESHOLD,
};
use std::fmt;
use std::str::FromStr;

/// Pixel size of the element hosting the background canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_WIDTH_THRESHOLD
    }

    /// Object count scale: narrow viewports get half the decoration.
    #[inline]
    pub fn density_multiplier(&self) -> f32 {
        if self.is_mobile() {
            MOBILE_DENSITY
        } else {
            DESKTOP_DENSITY
        }
    }

    /// Distance of the camera from the origin; a step function of width.
    #[inline]
    pub fn camera_distance(&self) -> f32 {
        if self.is_mobile() {
            CAMERA_DISTANCE_MOBILE
        } else {
            CAMERA_DISTANCE_DESKTOP
        }
    }

    /// Aspect ratio, or `None` while the container has no area.
    #[inline]
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

#[inline]
pub fn scaled_count(base: usize, density: f32) -> usize {
    (base as f32 * density).floor().max(0.0) as usize
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePreset {
    /// Full starfield with pointer-driven camera parallax.
    #[default]
    Parallax,
    /// Sparser starfield, more streams, fixed camera.
    Drift,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scene preset `{0}` (expected `parallax` or `drift`)")]
pub struct ParsePresetError(pub String);

impl FromStr for ScenePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parallax" => Ok(ScenePreset::Parallax),
            "drift" => Ok(ScenePreset::Drift),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

impl fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenePreset::Parallax => f.write_str("parallax"),
            ScenePreset::Drift => f.write_str("drift"),
        }
    }
}

/// Base object counts (before density scaling) and behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub base_particles: usize,
    pub base_streams: usize,
    pub base_nodes: usize,
    pub parallax: bool,
}

impl SceneConfig {
    pub fn for_preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Parallax => Self {
                base_particles: 2000,
                base_streams: 15,
                base_nodes: 40,
                parallax: true,
            },
            ScenePreset::Drift => Self {
                base_particles: 1200,
                base_streams: 20,
                base_nodes: 40,
                parallax: false,
            },
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_preset(ScenePreset::default())
    }
}
