//! Builders for 4x4 affine transforms.
//!
//! Transforms compose by multiplication and apply right to left:
//! in `translation * scaling * rotation`, the rotation happens first.

use crate::matrix::Matrix;

/// Move points by `(x, y, z)`. Vectors are unaffected.
pub fn translation(x: f32, y: f32, z: f32) -> Matrix {
    Matrix::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Scale along each axis. Negative factors reflect.
pub fn scaling(x: f32, y: f32, z: f32) -> Matrix {
    Matrix::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotate `radians` about the x axis.
pub fn rotation_x(radians: f32) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotate `radians` about the y axis.
pub fn rotation_y(radians: f32) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotate `radians` about the z axis.
pub fn rotation_z(radians: f32) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shear: each coordinate moves in proportion to the other two.
///
/// `xy` is how much x moves in proportion to y, and so on.
pub fn shearing(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Matrix {
    Matrix::from_rows([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
