//! Homogeneous-coordinate tuples.
//!
//! A [`Tuple`] is a point when `w == 1.0` and a vector when `w == 0.0`.
//! The type does not enforce this: arithmetic runs over all four components,
//! so adding two points yields `w == 2.0`, which is representable but
//! meaningless. Keeping `w` right is up to the caller.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec4;

use crate::error::MathError;
use crate::tolerance::approx_eq;

/// Four-component point or vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple(Vec4);

impl Tuple {
    /// Create a tuple from raw components.
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Vec4::new(x, y, z, w))
    }

    /// Create a point (`w = 1`).
    pub fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a vector (`w = 0`).
    pub fn vector(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// The `x` component.
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// The `y` component.
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// The `z` component.
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// The `w` component.
    pub fn w(&self) -> f32 {
        self.0.w
    }

    /// Components as `[x, y, z, w]`.
    pub fn to_array(&self) -> [f32; 4] {
        self.0.to_array()
    }

    /// True when `w` is exactly 1.
    pub fn is_point(&self) -> bool {
        self.0.w == 1.0
    }

    /// True when `w` is exactly 0.
    pub fn is_vector(&self) -> bool {
        self.0.w == 0.0
    }

    /// Dot product over all four components.
    ///
    /// For unit vectors this is the cosine of the angle between them.
    pub fn dot(self, rhs: Self) -> f32 {
        self.0.dot(rhs.0)
    }

    /// Cross product of two vectors, perpendicular to both.
    ///
    /// Fails with [`MathError::NotAVector`] if either operand is not a vector.
    pub fn cross(self, rhs: Self) -> Result<Self, MathError> {
        if !self.is_vector() || !rhs.is_vector() {
            return Err(MathError::NotAVector);
        }
        Ok(Self(self.0.truncate().cross(rhs.0.truncate()).extend(0.0)))
    }

    /// Euclidean norm over all four components.
    ///
    /// Only meaningful for vectors; a point's `w` contributes to the result.
    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }

    /// Divide every component by [`magnitude`](Self::magnitude).
    ///
    /// There is no guard for points or the zero vector (the latter yields NaN).
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.0.x, other.0.x)
            && approx_eq(self.0.y, other.0.y)
            && approx_eq(self.0.z, other.0.z)
            && approx_eq(self.0.w, other.0.w)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_point() {
            "Point"
        } else if self.is_vector() {
            "Vector"
        } else {
            "Tuple"
        };
        write!(f, "{}({}, {}, {}, {})", kind, self.0.x, self.0.y, self.0.z, self.0.w)
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Tuple {
    type Output = Self;
    fn mul(self, scale: f32) -> Self {
        Self(self.0 * scale)
    }
}

impl Mul<Tuple> for f32 {
    type Output = Tuple;
    fn mul(self, t: Tuple) -> Tuple {
        t * self
    }
}

impl Div<f32> for Tuple {
    type Output = Self;
    fn div(self, scale: f32) -> Self {
        Self(self.0 / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_with_w_one_is_a_point() {
        let a = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(a.x(), 4.3);
        assert_eq!(a.y(), -4.2);
        assert_eq!(a.z(), 3.1);
        assert_eq!(a.w(), 1.0);
        assert!(a.is_point());
        assert!(!a.is_vector());
    }

    #[test]
    fn tuple_with_w_zero_is_a_vector() {
        let a = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(!a.is_point());
        assert!(a.is_vector());
    }

    #[test]
    fn constructors_set_w() {
        assert_eq!(Tuple::point(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 1.0));
        assert_eq!(Tuple::vector(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 0.0));
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Tuple::point(1.0, 2.0, 3.0), Tuple::point(1.000_001, 2.0, 3.0));
        assert_ne!(Tuple::point(1.0, 2.0, 3.0), Tuple::point(1.001, 2.0, 3.0));
    }

    #[test]
    fn adding_a_vector_to_a_point() {
        let a1 = Tuple::new(3.0, -2.0, 5.0, 1.0);
        let a2 = Tuple::new(-2.0, 3.0, 1.0, 0.0);
        assert_eq!(a1 + a2, Tuple::new(1.0, 1.0, 6.0, 1.0));
    }

    #[test]
    fn adding_two_points_is_representable() {
        let sum = Tuple::point(1.0, 0.0, 0.0) + Tuple::point(0.0, 1.0, 0.0);
        assert_eq!(sum.w(), 2.0);
        assert!(!sum.is_point() && !sum.is_vector());
    }

    #[test]
    fn subtracting_two_points_gives_a_vector() {
        let p1 = Tuple::point(3.0, 2.0, 1.0);
        let p2 = Tuple::point(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn subtracting_a_vector_from_a_point() {
        let p = Tuple::point(3.0, 2.0, 1.0);
        let v = Tuple::vector(5.0, 6.0, 7.0);
        assert_eq!(p - v, Tuple::point(-2.0, -4.0, -6.0));
    }

    #[test]
    fn negating_a_tuple() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn scalar_multiplication_and_division() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(0.5 * a, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude_of_vectors() {
        assert_eq!(Tuple::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert!(approx_eq(Tuple::vector(1.0, 2.0, 3.0).magnitude(), 14f32.sqrt()));
        assert!(approx_eq(Tuple::vector(-1.0, -2.0, -3.0).magnitude(), 14f32.sqrt()));
    }

    #[test]
    fn magnitude_includes_w() {
        assert!(approx_eq(Tuple::point(0.0, 0.0, 0.0).magnitude(), 1.0));
    }

    #[test]
    fn normalizing_vectors() {
        assert_eq!(Tuple::vector(4.0, 0.0, 0.0).normalize(), Tuple::vector(1.0, 0.0, 0.0));
        let s = 14f32.sqrt();
        assert_eq!(
            Tuple::vector(1.0, 2.0, 3.0).normalize(),
            Tuple::vector(1.0 / s, 2.0 / s, 3.0 / s)
        );
        assert!(approx_eq(Tuple::vector(1.0, 2.0, 3.0).normalize().magnitude(), 1.0));
    }

    #[test]
    fn dot_product() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(b), 20.0);
    }

    #[test]
    fn dot_product_includes_w() {
        assert_eq!(Tuple::new(0.0, 0.0, 0.0, 2.0).dot(Tuple::new(0.0, 0.0, 0.0, 3.0)), 6.0);
    }

    #[test]
    fn cross_product_of_vectors() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(b), Ok(Tuple::vector(-1.0, 2.0, -1.0)));
        assert_eq!(b.cross(a), Ok(Tuple::vector(1.0, -2.0, 1.0)));
    }

    #[test]
    fn cross_product_rejects_points() {
        let v = Tuple::vector(1.0, 2.0, 3.0);
        let p = Tuple::point(2.0, 3.0, 4.0);
        assert_eq!(p.cross(v), Err(MathError::NotAVector));
        assert_eq!(v.cross(p), Err(MathError::NotAVector));
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(Tuple::point(1.0, 2.0, 3.0).to_string(), "Point(1, 2, 3, 1)");
        assert_eq!(Tuple::vector(1.0, 2.0, 3.0).to_string(), "Vector(1, 2, 3, 0)");
    }
}
