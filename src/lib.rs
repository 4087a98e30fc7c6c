//! Raycore: the tuple, matrix and ray-sphere core of a small ray tracer
//!
//! Points and vectors share the homogeneous [`Tuple`] type, placed in the
//! world by 4x4 [`Matrix`] transforms. Rays are intersected with transformed
//! unit spheres and the visible hit is picked from the sorted results.
//! A few demo renderers draw onto a [`Canvas`] saved as PNG or EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod tolerance;
pub mod error;
pub mod tuple;
pub mod color;
pub mod matrix;
pub mod transform;
pub mod ray;
pub mod hittable;
pub mod sphere;
pub mod canvas;
pub mod output;
pub mod config;
pub mod demos;

pub use canvas::Canvas;
pub use color::Color;
pub use config::Config;
pub use error::{ConfigError, MathError, OutputError};
pub use hittable::{Hittable, Intersection, IntersectionList};
pub use matrix::Matrix;
pub use ray::Ray;
pub use sphere::Sphere;
pub use tolerance::{approx_eq, EPSILON};
pub use tuple::Tuple;
