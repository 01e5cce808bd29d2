//! Coordinate grids of pixel centers and their cell boundaries.
//!
//! A grid is a pair of `(M, N)` arrays: `rr` holds the row coordinate of
//! every pixel center, `cc` the column coordinate. Spacing along each axis is
//! uniform, so the step is derived from the first two entries.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::geometry::Rect;
use crate::error::{Axis, Error, Result};

/// Borrowed view of a `rr`/`cc` coordinate pair.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateGrid<'a> {
    rr: ArrayView2<'a, f64>,
    cc: ArrayView2<'a, f64>,
    row_step: f64,
    col_step: f64,
}

impl<'a> CoordinateGrid<'a> {
    /// Wrap two coordinate arrays.
    ///
    /// # Errors
    /// * `InvalidShape` - shapes differ, or an axis has fewer than 2 entries.
    ///   A 1 x N or M x 1 grid is rejected: its step, and so its cell size,
    ///   cannot be derived
    /// * `DegenerateSpacing` - a derived step is zero or non-finite
    pub fn new(rr: ArrayView2<'a, f64>, cc: ArrayView2<'a, f64>) -> Result<Self> {
        if rr.dim() != cc.dim() {
            return Err(Error::InvalidShape {
                rr: rr.dim(),
                cc: cc.dim(),
                reason: "rr and cc must have the same shape",
            });
        }
        let (rows, cols) = rr.dim();
        if rows < 2 || cols < 2 {
            return Err(Error::InvalidShape {
                rr: rr.dim(),
                cc: cc.dim(),
                reason: "need at least 2 rows and 2 columns to derive the spacing",
            });
        }

        let row_step = rr[[1, 0]] - rr[[0, 0]];
        let col_step = cc[[0, 1]] - cc[[0, 0]];
        if !row_step.is_finite() || row_step == 0.0 {
            return Err(Error::DegenerateSpacing { axis: Axis::Row, step: row_step });
        }
        if !col_step.is_finite() || col_step == 0.0 {
            return Err(Error::DegenerateSpacing { axis: Axis::Col, step: col_step });
        }

        Ok(Self { rr, cc, row_step, col_step })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.rr.dim()
    }

    pub fn row_step(&self) -> f64 {
        self.row_step
    }

    pub fn col_step(&self) -> f64 {
        self.col_step
    }

    /// Scan every step along both axes.
    ///
    /// Row steps are checked down each column of `rr` and column steps along
    /// each row of `cc`. A step may deviate from the derived one by at most
    /// `tolerance * |step|`. Coordinates must also be constant across the
    /// other axis (every column of `rr` equal, every row of `cc` equal).
    pub fn check_uniform_spacing(&self, tolerance: f64) -> Result<()> {
        check_axis(self.rr, self.row_step, tolerance, Axis::Row)?;
        check_axis(self.cc.t(), self.col_step, tolerance, Axis::Col)
    }

    /// Row boundaries half a step either side of every center, length `M + 1`.
    pub fn row_boundaries(&self) -> Array1<f64> {
        boundaries(self.rr.column(0), self.row_step)
    }

    /// Column boundaries half a step either side of every center, length `N + 1`.
    pub fn col_boundaries(&self) -> Array1<f64> {
        boundaries(self.cc.row(0), self.col_step)
    }

    /// Rectangle covered by cell `(i, j)`, spanning boundaries `i..=i+1`
    /// and `j..=j+1`.
    pub fn cell(&self, i: usize, j: usize) -> Rect {
        let rows = self.rr.column(0);
        let cols = self.cc.row(0);
        Rect::from_bounds(
            boundary(rows, self.row_step, i),
            boundary(rows, self.row_step, i + 1),
            boundary(cols, self.col_step, j),
            boundary(cols, self.col_step, j + 1),
        )
    }
}

/// Boundary `k` of `centers`: half a step before center `k`, or half a step
/// past the last center for `k == len`.
fn boundary(centers: ArrayView1<f64>, step: f64, k: usize) -> f64 {
    let n = centers.len();
    if k < n {
        centers[k] - step / 2.0
    } else {
        centers[n - 1] + step / 2.0
    }
}

/// Boundaries between consecutive centers plus one trailing boundary.
fn boundaries(centers: ArrayView1<f64>, step: f64) -> Array1<f64> {
    Array1::from_shape_fn(centers.len() + 1, |k| boundary(centers, step, k))
}

/// Check `coords` varies by `step` along axis 0 and is constant along axis 1.
fn check_axis(coords: ArrayView2<f64>, step: f64, tolerance: f64, axis: Axis) -> Result<()> {
    let limit = tolerance * step.abs();
    let (n, m) = coords.dim();

    for index in 1..n {
        for k in 0..m {
            let found = coords[[index, k]] - coords[[index - 1, k]];
            if !((found - step).abs() <= limit) {
                return Err(Error::NonUniformSpacing { axis, index, expected: step, found });
            }
        }
    }

    // Every line of centers along the other axis must share the same coordinate
    for index in 0..n {
        let first = coords[[index, 0]];
        for k in 1..m {
            let found = coords[[index, k]] - first;
            if !(found.abs() <= limit) {
                return Err(Error::NonUniformSpacing { axis, index, expected: 0.0, found });
            }
        }
    }

    Ok(())
}

/// Build `rr`, `cc` from 1D row and column center coordinates.
///
/// Matches `numpy.meshgrid(rows, cols, indexing="ij")`.
pub fn meshgrid(rows: &[f64], cols: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (rows.len(), cols.len());
    let rr = Array2::from_shape_fn(shape, |(i, _)| rows[i]);
    let cc = Array2::from_shape_fn(shape, |(_, j)| cols[j]);
    (rr, cc)
}
