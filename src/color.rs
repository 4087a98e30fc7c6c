//! RGB colors.
//!
//! Channels are not clamped to [0, 1]; intermediate arithmetic is allowed to
//! leave that range and clamping happens only when pixels are encoded.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::Vec3A;

use crate::tolerance::approx_eq;

/// RGB color backed by `Vec3A` for SIMD arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color(Vec3A);

impl Color {
    /// All channels zero.
    pub const BLACK: Color = Color(Vec3A::ZERO);
    /// All channels one.
    pub const WHITE: Color = Color(Vec3A::ONE);
    /// Pure red.
    pub const RED: Color = Color(Vec3A::X);

    /// Create a color from red, green and blue channels.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self(Vec3A::new(red, green, blue))
    }

    /// Red channel.
    pub fn red(&self) -> f32 {
        self.0.x
    }

    /// Green channel.
    pub fn green(&self) -> f32 {
        self.0.y
    }

    /// Blue channel.
    pub fn blue(&self) -> f32 {
        self.0.z
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(&self) -> [f32; 3] {
        self.0.to_array()
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self(Vec3A::from_array(rgb))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.0.x, other.0.x) && approx_eq(self.0.y, other.0.y) && approx_eq(self.0.z, other.0.z)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f32> for Color {
    type Output = Self;
    fn mul(self, scale: f32) -> Self {
        Self(self.0 * scale)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

/// Hadamard (Schur) product: channel-wise multiplication.
impl Mul for Color {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div<f32> for Color {
    type Output = Self;
    fn div(self, scale: f32) -> Self {
        Self(self.0 / scale)
    }
}
