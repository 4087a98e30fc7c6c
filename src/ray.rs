//! Ray representation for ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line
//! used for intersection testing.

use crate::matrix::Matrix;
use crate::tuple::Tuple;

/// Ray defined by an origin point and a direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray (w = 1).
    pub origin: Tuple,

    /// Direction of the ray (w = 0).
    ///
    /// Not required to be normalized. Transforming a ray into object space
    /// keeps the scaled length, so `t` values match the world-space ray.
    pub direction: Tuple,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter `t` along the ray.
    pub fn position(&self, t: f32) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply `m` to both origin and direction.
    pub fn transform(&self, m: &Matrix) -> Ray {
        Ray::new(m * self.origin, m * self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{scaling, translation};

    #[test]
    fn creating_and_querying_a_ray() {
        let origin = Tuple::point(1.0, 2.0, 3.0);
        let direction = Tuple::vector(4.0, 5.0, 6.0);
        let r = Ray::new(origin, direction);
        assert_eq!(r.origin, origin);
        assert_eq!(r.direction, direction);
    }

    #[test]
    fn computing_a_point_from_a_distance() {
        let r = Ray::new(Tuple::point(2.0, 3.0, 4.0), Tuple::vector(1.0, 0.0, 0.0));
        assert_eq!(r.position(0.0), Tuple::point(2.0, 3.0, 4.0));
        assert_eq!(r.position(1.0), Tuple::point(3.0, 3.0, 4.0));
        assert_eq!(r.position(-1.0), Tuple::point(1.0, 3.0, 4.0));
        assert_eq!(r.position(2.5), Tuple::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn translating_a_ray() {
        let r = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&translation(3.0, 4.0, 5.0));
        assert_eq!(r2.origin, Tuple::point(4.0, 6.0, 8.0));
        assert_eq!(r2.direction, Tuple::vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn scaling_a_ray() {
        let r = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&scaling(2.0, 3.0, 4.0));
        assert_eq!(r2.origin, Tuple::point(2.0, 6.0, 12.0));
        assert_eq!(r2.direction, Tuple::vector(0.0, 3.0, 0.0));
    }

    #[test]
    fn transforming_leaves_the_original_untouched() {
        let r = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let _ = r.transform(&translation(3.0, 4.0, 5.0));
        assert_eq!(r.origin, Tuple::point(1.0, 2.0, 3.0));
    }
}
