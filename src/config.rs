//! TOML render configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. Command-line flags override what is loaded here.
//!
//! ```toml
//! width = 512
//! height = 512
//!
//! [sphere]
//! color = [1.0, 0.2, 1.0]
//!
//! [[sphere.transform]]
//! op = "scale"
//! x = 1.0
//! y = 0.5
//! z = 1.0
//!
//! [[sphere.transform]]
//! op = "rotate_z"
//! radians = 0.6
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;
use crate::error::ConfigError;
use crate::matrix::Matrix;
use crate::sphere::Sphere;
use crate::transform;
use crate::tuple::Tuple;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Output file; the demo picks a name when unset.
    pub output: Option<PathBuf>,
    /// Eye and wall placement for the sphere renders.
    pub camera: CameraConfig,
    /// The rendered sphere.
    pub sphere: SphereConfig,
    /// Clock face demo.
    pub clock: ClockConfig,
    /// Projectile demo.
    pub projectile: ProjectileConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            output: None,
            camera: CameraConfig::default(),
            sphere: SphereConfig::default(),
            clock: ClockConfig::default(),
            projectile: ProjectileConfig::default(),
        }
    }
}

impl Config {
    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Ray origin and the wall rays are cast at.
///
/// Rays start at `point(0, 0, origin_z)` and pass through a square wall of
/// side `wall_size` centred on the z axis at `wall_z`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// z of the ray origin.
    pub origin_z: f32,
    /// z of the wall.
    pub wall_z: f32,
    /// Side length of the square wall.
    pub wall_size: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            origin_z: -5.0,
            wall_z: 10.0,
            wall_size: 7.0,
        }
    }
}

/// Sphere color and placement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    /// Fill color of the silhouette.
    pub color: [f32; 3],
    /// Transform steps, applied in the order listed.
    pub transform: Vec<TransformStep>,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 0.0, 0.0],
            transform: Vec::new(),
        }
    }
}

impl SphereConfig {
    /// Compose the steps into one matrix; the first listed step applies first.
    pub fn transform(&self) -> Matrix {
        self.transform
            .iter()
            .fold(Matrix::identity(4), |acc, step| step.to_matrix() * acc)
    }

    /// Build the configured sphere.
    pub fn sphere(&self) -> Result<Sphere, ConfigError> {
        Ok(Sphere::with_transform(self.transform())?)
    }

    /// The fill color.
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }
}

/// One transform in a [`SphereConfig`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
#[allow(missing_docs)]
pub enum TransformStep {
    Translate { x: f32, y: f32, z: f32 },
    Scale { x: f32, y: f32, z: f32 },
    RotateX { radians: f32 },
    RotateY { radians: f32 },
    RotateZ { radians: f32 },
    Shear { xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32 },
}

impl TransformStep {
    /// The 4x4 matrix for this step alone.
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            TransformStep::Translate { x, y, z } => transform::translation(x, y, z),
            TransformStep::Scale { x, y, z } => transform::scaling(x, y, z),
            TransformStep::RotateX { radians } => transform::rotation_x(radians),
            TransformStep::RotateY { radians } => transform::rotation_y(radians),
            TransformStep::RotateZ { radians } => transform::rotation_z(radians),
            TransformStep::Shear { xy, xz, yx, yz, zx, zy } => transform::shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Clock face: twelve hour marks on a circle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Radius as a fraction of the smaller canvas side.
    pub radius_ratio: f32,
    /// Color of the hour marks.
    pub color: [f32; 3],
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            radius_ratio: 0.375,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Projectile launched into an environment with gravity and wind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectileConfig {
    /// Start position (a point).
    pub start: [f32; 3],
    /// Launch direction; normalized, then multiplied by `speed`.
    pub velocity: [f32; 3],
    /// Launch speed in units per tick.
    pub speed: f32,
    /// Added to the velocity every tick.
    pub gravity: [f32; 3],
    /// Added to the velocity every tick.
    pub wind: [f32; 3],
    /// Safety cap on the number of ticks.
    pub max_ticks: usize,
    /// Color of the plotted trajectory.
    pub color: [f32; 3],
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            start: [0.0, 1.0, 0.0],
            velocity: [1.0, 1.8, 0.0],
            speed: 6.0,
            gravity: [0.0, -0.1, 0.0],
            wind: [-0.01, 0.0, 0.0],
            max_ticks: 10_000,
            color: [1.0, 0.5, 0.5],
        }
    }
}

impl ProjectileConfig {
    /// Start position as a point.
    pub fn start(&self) -> Tuple {
        let [x, y, z] = self.start;
        Tuple::point(x, y, z)
    }

    /// Launch velocity: `velocity` normalized and scaled by `speed`.
    pub fn launch_velocity(&self) -> Tuple {
        let [x, y, z] = self.velocity;
        Tuple::vector(x, y, z).normalize() * self.speed
    }

    /// Per-tick change in velocity from gravity plus wind.
    pub fn acceleration(&self) -> Tuple {
        let [gx, gy, gz] = self.gravity;
        let [wx, wy, wz] = self.wind;
        Tuple::vector(gx, gy, gz) + Tuple::vector(wx, wy, wz)
    }
}
