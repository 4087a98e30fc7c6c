//! Dense row-major matrices.
//!
//! [`Matrix`] is a general R x C grid. Square operations (determinant,
//! cofactors, inverse) use textbook Laplace expansion, which is exponential
//! in the size and only intended for the 2x2 to 4x4 matrices a ray tracer
//! needs. Element mutation through `IndexMut` is allowed; everything else
//! returns new values.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use glam::Vec4;

use crate::error::MathError;
use crate::tolerance::approx_eq;
use crate::tuple::Tuple;

/// R x C matrix of `f32`, stored row-major.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f32>,
}

impl Matrix {
    /// A `rows` x `columns` matrix of zeros.
    pub fn zero(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    /// The `size` x `size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zero(size, size);
        for n in 0..size {
            m[(n, n)] = 1.0;
        }
        m
    }

    /// Build a matrix from an array of rows.
    ///
    /// ```
    /// use raycore::Matrix;
    ///
    /// let m = Matrix::from_rows([[-3.0, 5.0], [1.0, -2.0]]);
    /// assert_eq!(m[(0, 1)], 5.0);
    /// ```
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f32; C]; R]) -> Self {
        Self {
            rows: R,
            columns: C,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    /// Build a matrix from row-major values.
    pub fn from_vec(rows: usize, columns: usize, values: Vec<f32>) -> Result<Self, MathError> {
        if values.len() != rows * columns {
            return Err(MathError::DimensionMismatch {
                expected: rows * columns,
                actual: values.len(),
            });
        }
        Ok(Self { rows, columns, values })
    }

    /// Build a square matrix from row-major values; the count must be a perfect square.
    pub fn from_square(values: Vec<f32>) -> Result<Self, MathError> {
        let side = (values.len() as f64).sqrt() as usize;
        if side * side != values.len() {
            return Err(MathError::NotPerfectSquare { len: values.len() });
        }
        Self::from_vec(side, side, values)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when the row and column counts match.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.values[row * self.columns..(row + 1) * self.columns]
    }

    /// Swap rows and columns. Defined for any rectangular matrix.
    pub fn transpose(&self) -> Self {
        let mut m = Self::zero(self.columns, self.rows);
        for r in 0..self.rows {
            for c in 0..self.columns {
                m[(c, r)] = self[(r, c)];
            }
        }
        m
    }

    /// Determinant by cofactor expansion along row 0.
    ///
    /// Only meaningful for square matrices.
    pub fn determinant(&self) -> f32 {
        debug_assert!(self.is_square(), "determinant of a {}x{} matrix", self.rows, self.columns);
        match self.rows {
            0 => 1.0,
            1 => self.values[0],
            2 => self.values[0] * self.values[3] - self.values[1] * self.values[2],
            _ => (0..self.columns)
                .map(|column| self[(0, column)] * self.cofactor(0, column))
                .sum(),
        }
    }

    /// Copy of the matrix with `remove_row` and `remove_column` deleted.
    pub fn submatrix(&self, remove_row: usize, remove_column: usize) -> Self {
        let values = (0..self.rows)
            .filter(|&r| r != remove_row)
            .flat_map(|r| {
                (0..self.columns)
                    .filter(move |&c| c != remove_column)
                    .map(move |c| self[(r, c)])
            })
            .collect();
        Self {
            rows: self.rows - 1,
            columns: self.columns - 1,
            values,
        }
    }

    /// Determinant of the submatrix at (`row`, `column`).
    pub fn minor(&self, row: usize, column: usize) -> f32 {
        self.submatrix(row, column).determinant()
    }

    /// Minor at (`row`, `column`), negated when `row + column` is odd.
    pub fn cofactor(&self, row: usize, column: usize) -> f32 {
        let minor = self.minor(row, column);
        if (row + column) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Exact comparison of the determinant against zero.
    ///
    /// Near-singular matrices count as invertible.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.determinant() != 0.0
    }

    /// Inverse via the adjugate: `inverse[c, r] = cofactor(r, c) / det`.
    ///
    /// Fails with [`MathError::NotSquare`] or [`MathError::SingularMatrix`]
    /// rather than producing infinities.
    pub fn inverse(&self) -> Result<Self, MathError> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let det = self.determinant();
        if det == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        let mut m = Self::zero(self.rows, self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                // (column, row) on the left does the transpose
                m[(column, row)] = self.cofactor(row, column) / det;
            }
        }
        Ok(m)
    }

    /// Matrix product, or [`MathError::DimensionMismatch`] when
    /// `self.columns() != rhs.rows()`.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        if self.columns != rhs.rows {
            return Err(MathError::DimensionMismatch {
                expected: self.columns,
                actual: rhs.rows,
            });
        }
        Ok(self.mul_unchecked(rhs))
    }

    fn mul_unchecked(&self, rhs: &Matrix) -> Matrix {
        let mut m = Self::zero(self.rows, rhs.columns);
        for r in 0..self.rows {
            for c in 0..rhs.columns {
                m[(r, c)] = (0..self.columns).map(|n| self[(r, n)] * rhs[(n, c)]).sum();
            }
        }
        m
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        assert!(row < self.rows && column < self.columns, "index ({row}, {column}) out of bounds");
        &self.values[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        assert!(row < self.rows && column < self.columns, "index ({row}, {column}) out of bounds");
        &mut self.values[row * self.columns + column]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.values.iter().zip(&other.values).all(|(&a, &b)| approx_eq(a, b))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({},{})=>{{", self.rows, self.columns)?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ",")?;
            }
            write!(f, "{{")?;
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// When `self.columns() != rhs.rows()`; see [`Matrix::checked_mul`].
    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.columns, rhs.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.columns, rhs.rows, rhs.columns
        );
        self.mul_unchecked(rhs)
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        &self * rhs
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        self * &rhs
    }
}

impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    /// # Panics
    ///
    /// Unless the matrix is 4x4.
    fn mul(self, t: Tuple) -> Tuple {
        assert!(
            self.rows == 4 && self.columns == 4,
            "cannot multiply a {}x{} matrix by a tuple",
            self.rows,
            self.columns
        );
        let v = Vec4::from_array(t.to_array());
        let row = |r: usize| Vec4::from_slice(self.row(r)).dot(v);
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;
    fn mul(self, t: Tuple) -> Tuple {
        &self * t
    }
}
