//! Error types returned by the math core and the surrounding plumbing.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of tuple and matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// An operation defined only for vectors (w = 0) received a point or other tuple.
    #[error("the tuple must be a vector")]
    NotAVector,

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is not invertible (determinant is zero)")]
    SingularMatrix,

    /// A square-only operation was asked of a non-square matrix.
    #[error("expected a square matrix, got {rows}x{columns}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        columns: usize,
    },

    /// A flat value count that is not a perfect square cannot fill a square matrix.
    #[error("{len} values do not form a square matrix")]
    NotPerfectSquare {
        /// Number of values supplied.
        len: usize,
    },

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What the operation needed.
        expected: usize,
        /// What it was given.
        actual: usize,
    },
}

/// Failures while reading a TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured transform steps do not form an invertible transform.
    #[error("invalid sphere transform: {0}")]
    Transform(#[from] MathError),
}

/// Failures while writing a canvas to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    /// PNG encoding or file I/O failed.
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding or file I/O failed.
    #[error("failed to save EXR image: {0}")]
    Exr(#[from] exr::error::Error),

    /// The output path does not end in a supported extension.
    #[error("unsupported file extension '{0}', only .png and .exr are supported")]
    UnsupportedFormat(String),
}
