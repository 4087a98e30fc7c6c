//! Sphere primitive for ray tracing.
//!
//! A unit sphere at the object-space origin, placed in the world by its
//! transform. The inverse and inverse-transpose of that transform are cached
//! whenever it is set, and the three are only ever replaced together.

use crate::error::MathError;
use crate::hittable::{Hittable, Intersection, IntersectionList};
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::tuple::Tuple;

/// Unit sphere with a world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    transform: Matrix,
    inverse_transform: Matrix,
    inverse_transpose: Matrix,
}

impl Sphere {
    /// Create a sphere with the identity transform.
    pub fn new() -> Self {
        Self {
            transform: Matrix::identity(4),
            inverse_transform: Matrix::identity(4),
            inverse_transpose: Matrix::identity(4),
        }
    }

    /// Create a sphere placed by `transform`.
    pub fn with_transform(transform: Matrix) -> Result<Self, MathError> {
        let mut sphere = Self::new();
        sphere.set_transform(transform)?;
        Ok(sphere)
    }

    /// Object-to-world transform.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Cached inverse of [`transform`](Self::transform).
    pub fn inverse_transform(&self) -> &Matrix {
        &self.inverse_transform
    }

    /// Replace the transform and recompute the cached inverses.
    ///
    /// The transform must be an invertible 4x4 matrix. On error the sphere
    /// keeps its previous transform and caches.
    pub fn set_transform(&mut self, transform: Matrix) -> Result<(), MathError> {
        if transform.rows() != 4 || transform.columns() != 4 {
            return Err(MathError::DimensionMismatch {
                expected: 16,
                actual: transform.rows() * transform.columns(),
            });
        }
        let inverse_transform = transform.inverse()?;
        let inverse_transpose = inverse_transform.transpose();

        self.transform = transform;
        self.inverse_transform = inverse_transform;
        self.inverse_transpose = inverse_transpose;
        Ok(())
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<IntersectionList<'_>> {
        let ray = ray.transform(&self.inverse_transform);

        // Vector from the sphere center (object-space origin) to the ray origin
        let sphere_to_ray = ray.origin - Tuple::point(0.0, 0.0, 0.0);

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        Some(IntersectionList::new(vec![
            Intersection::new(t1, self),
            Intersection::new(t2, self),
        ]))
    }

    fn normal_at(&self, world_point: Tuple) -> Tuple {
        let object_point = &self.inverse_transform * world_point;
        let object_normal = object_point - Tuple::point(0.0, 0.0, 0.0);
        let world_normal = &self.inverse_transpose * object_normal;
        // The inverse-transpose can disturb w; force a vector before normalizing
        Tuple::vector(world_normal.x(), world_normal.y(), world_normal.z()).normalize()
    }
}
