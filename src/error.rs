//! Error types for partial volume disk generation.
//!
//! Every check runs before any sampling starts, so a failed call never
//! leaves a partially filled grid behind.

use thiserror::Error;

/// Grid axis, used to report where a spacing problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

/// Main error type for partial volume operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `rr`/`cc` shapes differ, or an axis has fewer than 2 entries.
    ///
    /// A single row or column is rejected even though it is a valid shape:
    /// the spacing along each axis comes from its first two centers, so one
    /// center leaves the cell size undefined.
    #[error("Invalid grid shape: rr is {rr:?}, cc is {cc:?} ({reason})")]
    InvalidShape {
        rr: (usize, usize),
        cc: (usize, usize),
        reason: &'static str,
    },

    #[error("Degenerate {axis} spacing: step = {step}")]
    DegenerateSpacing { axis: Axis, step: f64 },

    #[error("Non-uniform {axis} spacing at index {index}: expected step {expected}, found {found}")]
    NonUniformSpacing {
        axis: Axis,
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("Invalid radius: {0} (must be finite and >= 0)")]
    InvalidRadius(f64),

    #[error("Invalid center: ({0}, {1}) (must be finite)")]
    InvalidCenter(f64, f64),

    #[error("Invalid precision: {0} (must be finite, > 0 and yield at least one sample)")]
    InvalidPrecision(f64),

    #[error("Invalid sample count: {0} (must be > 0)")]
    InvalidSamples(usize),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Array shape error: {0}")]
    Shape(String),
}

impl From<ndarray::ShapeError> for Error {
    fn from(e: ndarray::ShapeError) -> Self {
        Error::Shape(e.to_string())
    }
}

/// Result type alias for partial volume operations
pub type Result<T> = std::result::Result<T, Error>;
