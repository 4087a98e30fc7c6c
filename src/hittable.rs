//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives, the
//! [`Intersection`] record and the [`IntersectionList`] that picks the
//! visible hit.

use std::fmt;
use std::ops::Index;

use crate::ray::Ray;
use crate::tolerance::approx_eq;
use crate::tuple::Tuple;

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so a fixed set of objects can be shared
/// by a parallel render.
pub trait Hittable: fmt::Debug + Sync + Send {
    /// Intersect a world-space ray with the object.
    ///
    /// Returns `None` when the ray misses. A hit yields every crossing,
    /// including those behind the ray origin (negative `t`).
    ///
    /// The ray direction must be non-zero; a zero direction yields NaN `t`
    /// values, which [`IntersectionList::hit`] never selects.
    fn intersect(&self, ray: &Ray) -> Option<IntersectionList<'_>>;

    /// World-space unit normal at a world-space point on the surface.
    fn normal_at(&self, world_point: Tuple) -> Tuple;
}

/// A ray parameter `t` paired with the object it hit.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the ray, in units of its direction.
    pub t: f32,
    /// The object that was hit.
    pub object: &'a dyn Hittable,
}

impl<'a> Intersection<'a> {
    /// Create an intersection at `t` on `object`.
    pub fn new(t: f32, object: &'a dyn Hittable) -> Self {
        Self { t, object }
    }

    /// Is this an intersection with exactly `object` (by identity)?
    pub fn is_with(&self, object: &dyn Hittable) -> bool {
        std::ptr::addr_eq(self.object, object)
    }
}

/// `t` within tolerance and the same object by identity.
impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.t, other.t) && self.is_with(other.object)
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intersection({}, {:?})", self.t, self.object)
    }
}

/// Intersections sorted ascending by `t`.
///
/// Sorted once at construction (stable, so equal `t` keep insertion order)
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionList<'a> {
    items: Vec<Intersection<'a>>,
}

impl<'a> IntersectionList<'a> {
    /// Collect and sort `items`.
    pub fn new(mut items: Vec<Intersection<'a>>) -> Self {
        items.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { items }
    }

    /// Number of intersections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no intersections.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The intersection at `index` in sorted order.
    pub fn get(&self, index: usize) -> Option<&Intersection<'a>> {
        self.items.get(index)
    }

    /// Iterate in ascending `t` order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.items.iter()
    }

    /// The nearest intersection in front of the ray origin (`t >= 0`).
    ///
    /// Intersections behind the origin are never chosen, however small their
    /// `t`. `None` means nothing visible was hit.
    pub fn hit(&self) -> Option<Intersection<'a>> {
        self.items.iter().find(|i| i.t >= 0.0).copied()
    }
}

impl<'a> FromIterator<Intersection<'a>> for IntersectionList<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> Index<usize> for IntersectionList<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Intersection<'a> {
        &self.items[index]
    }
}

impl<'a> IntoIterator for IntersectionList<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l IntersectionList<'a> {
    type Item = &'l Intersection<'a>;
    type IntoIter = std::slice::Iter<'l, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    #[test]
    fn an_intersection_holds_t_and_object() {
        let s = Sphere::new();
        let i = Intersection::new(3.5, &s);
        assert_eq!(i.t, 3.5);
        assert!(i.is_with(&s));
    }

    #[test]
    fn intersections_compare_objects_by_identity() {
        let s1 = Sphere::new();
        let s2 = Sphere::new();
        assert_eq!(Intersection::new(1.0, &s1), Intersection::new(1.0, &s1));
        assert_ne!(Intersection::new(1.0, &s1), Intersection::new(1.0, &s2));
        assert_ne!(Intersection::new(1.0, &s1), Intersection::new(1.1, &s1));
    }

    #[test]
    fn aggregating_intersections() {
        let s = Sphere::new();
        let xs = IntersectionList::new(vec![Intersection::new(2.0, &s), Intersection::new(1.0, &s)]);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 1.0);
        assert_eq!(xs[1].t, 2.0);
        assert!(xs.get(2).is_none());
    }

    #[test]
    fn sorting_is_stable_for_equal_t() {
        let s1 = Sphere::new();
        let s2 = Sphere::new();
        let xs: IntersectionList = [Intersection::new(1.0, &s1), Intersection::new(1.0, &s2)]
            .into_iter()
            .collect();
        assert!(xs[0].is_with(&s1));
        assert!(xs[1].is_with(&s2));
    }

    #[test]
    fn hit_when_all_intersections_are_positive() {
        let s = Sphere::new();
        let i1 = Intersection::new(1.0, &s);
        let i2 = Intersection::new(2.0, &s);
        let xs = IntersectionList::new(vec![i2, i1]);
        assert_eq!(xs.hit(), Some(i1));
    }

    #[test]
    fn hit_when_some_intersections_are_negative() {
        let s = Sphere::new();
        let i1 = Intersection::new(-1.0, &s);
        let i2 = Intersection::new(1.0, &s);
        let xs = IntersectionList::new(vec![i2, i1]);
        assert_eq!(xs.hit(), Some(i2));
    }

    #[test]
    fn hit_when_all_intersections_are_negative() {
        let s = Sphere::new();
        let xs = IntersectionList::new(vec![Intersection::new(-2.0, &s), Intersection::new(-1.0, &s)]);
        assert_eq!(xs.hit(), None);
    }

    #[test]
    fn hit_is_the_lowest_nonnegative_intersection() {
        let s = Sphere::new();
        let i1 = Intersection::new(5.0, &s);
        let i2 = Intersection::new(7.0, &s);
        let i3 = Intersection::new(-3.0, &s);
        let i4 = Intersection::new(2.0, &s);
        let xs = IntersectionList::new(vec![i1, i2, i3, i4]);
        assert_eq!(xs.hit(), Some(i4));
    }

    #[test]
    fn a_hit_at_zero_is_still_a_hit() {
        let s = Sphere::new();
        let i = Intersection::new(0.0, &s);
        let xs = IntersectionList::new(vec![Intersection::new(-1.0, &s), i]);
        assert_eq!(xs.hit(), Some(i));
    }

    #[test]
    fn empty_list_has_no_hit() {
        let xs = IntersectionList::new(Vec::new());
        assert!(xs.is_empty());
        assert_eq!(xs.hit(), None);
    }
}
