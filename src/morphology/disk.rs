//! Partial volume disk over a grid of pixel centers.
//!
//! Each cell spans half a step either side of its center. The covered
//! fraction of every cell is estimated independently, each with its own
//! random stream, so sequential and parallel builds agree for a given seed.

use log::debug;
use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::estimator::estimate_intersection_fraction;
use super::geometry::Circle;
use super::grid::{meshgrid, CoordinateGrid};
use crate::config::{DiskConfig, ProcessingMode};
use crate::error::{Error, Result};

/// Build a partial volume disk over `grid`.
///
/// # Arguments
/// * `grid` - Pixel center coordinates
/// * `circle` - Disk to rasterize
/// * `config` - Precision, seed and scheduling
///
/// # Returns
/// Array with the grid's shape holding the covered fraction of every cell,
/// values 0.0-1.0
///
/// # Errors
/// Configuration and spacing problems are reported before any sampling.
pub fn build_partial_volume_disk(
    grid: &CoordinateGrid,
    circle: &Circle,
    config: &DiskConfig,
) -> Result<Array2<f64>> {
    let samples = config.validate()?;
    if config.validate_spacing {
        grid.check_uniform_spacing(config.spacing_tolerance)?;
    }

    let (rows, cols) = grid.shape();
    let base_seed = config.seed.unwrap_or_else(rand::random);

    debug!(
        "partial volume disk: {}x{} cells, {} samples/cell, {:?}, seed {}",
        rows, cols, samples, config.mode, base_seed
    );

    // Cell k = i * cols + j, row-major
    let estimate = |k: usize| -> Result<f64> {
        let cell = grid.cell(k / cols, k % cols);
        let mut rng = StdRng::seed_from_u64(cell_seed(base_seed, k));
        estimate_intersection_fraction(circle, &cell, samples, &mut rng)
    };

    let total = rows * cols;
    let values: Vec<f64> = match config.mode {
        ProcessingMode::Sequential => (0..total).map(estimate).collect::<Result<Vec<f64>>>()?,
        ProcessingMode::Parallel => (0..total)
            .into_par_iter()
            .map(&estimate)
            .collect::<Result<Vec<f64>>>()?,
        ProcessingMode::ParallelWith(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::ThreadPool(e.to_string()))?;
            pool.install(|| {
                (0..total)
                    .into_par_iter()
                    .map(&estimate)
                    .collect::<Result<Vec<f64>>>()
            })?
        }
    };

    Ok(Array2::from_shape_vec((rows, cols), values)?)
}

/// Largest `ceil(radius / step)` accepted by [`centered_disk`], i.e. a
/// 8193 x 8193 kernel.
pub const MAX_KERNEL_HALF_WIDTH: usize = 4096;

/// SplitMix64 finalizer.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seed for cell `k`. Hashing the base seed before mixing in the index keeps
/// nearby base seeds from sharing cell streams.
fn cell_seed(base: u64, k: usize) -> u64 {
    mix64(mix64(base) ^ k as u64)
}

/// Partial volume disk from raw coordinate arrays.
///
/// One-call form of [`build_partial_volume_disk`] with default settings
/// apart from `precision`.
///
/// # Arguments
/// * `rr` - Row coordinate of every pixel center (M, N)
/// * `cc` - Column coordinate of every pixel center (M, N)
/// * `center` - Circle center `[row, col]`
/// * `radius` - Circle radius, same units as the grid
/// * `precision` - Reciprocal of the samples per cell (default 0.0001)
pub fn disk<'a>(
    rr: ArrayView2<'a, f64>,
    cc: ArrayView2<'a, f64>,
    center: [f64; 2],
    radius: f64,
    precision: f64,
) -> Result<Array2<f64>> {
    let circle = Circle::new(center, radius)?;
    let grid = CoordinateGrid::new(rr, cc)?;
    let config = DiskConfig::default().with_precision(precision);
    build_partial_volume_disk(&grid, &circle, &config)
}

/// Structuring element: a disk centered on the middle pixel of a square grid.
///
/// The grid has `2n + 1` pixels per side, `n = max(ceil(radius / step), 1)`,
/// with centers at `-n * step ..= n * step` on both axes. `n` is capped at
/// [`MAX_KERNEL_HALF_WIDTH`].
///
/// # Arguments
/// * `radius` - Disk radius
/// * `step` - Pixel spacing, > 0
/// * `config` - Precision, seed and scheduling
pub fn centered_disk(radius: f64, step: f64, config: &DiskConfig) -> Result<Array2<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "step",
            value: step.to_string(),
            reason: "must be finite and > 0",
        });
    }
    let circle = Circle::new([0.0, 0.0], radius)?;

    let half_width = (radius / step).ceil();
    if !(half_width <= MAX_KERNEL_HALF_WIDTH as f64) {
        return Err(Error::InvalidParameter {
            name: "radius",
            value: radius.to_string(),
            reason: "kernel would exceed MAX_KERNEL_HALF_WIDTH pixels either side of the center",
        });
    }
    let n = (half_width as usize).max(1);
    let axis: Vec<f64> = (0..=2 * n)
        .map(|k| (k as f64 - n as f64) * step)
        .collect();
    let (rr, cc) = meshgrid(&axis, &axis);
    let grid = CoordinateGrid::new(rr.view(), cc.view())?;

    build_partial_volume_disk(&grid, &circle, config)
}
