//! WebAssembly exports for partial volume disks.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Grids are passed as 1D row and column center coordinates; the result is
//! the flattened row-major (rows.len(), cols.len()) array. Builds run
//! sequentially since wasm32 has no rayon thread pool.

use wasm_bindgen::prelude::*;

use crate::config::{DiskConfig, ProcessingMode};
use crate::morphology::{
    build_partial_volume_disk, centered_disk, meshgrid, Circle, CoordinateGrid,
};

fn wasm_config(precision: f64, seed: u64) -> DiskConfig {
    DiskConfig::default()
        .with_precision(precision)
        .with_seed(seed)
        .with_mode(ProcessingMode::Sequential)
}

// ============================================================================
// Partial Volume Disk
// ============================================================================

/// Partial volume disk over a grid of pixel centers.
///
/// # Arguments
/// * `rows` - Row coordinate of each pixel row (length M)
/// * `cols` - Column coordinate of each pixel column (length N)
/// * `center_row`, `center_col` - Circle center
/// * `radius` - Circle radius
/// * `precision` - Reciprocal of the samples per pixel
/// * `seed` - Random seed
///
/// # Returns
/// Flat array of M * N coverage fractions (0.0-1.0), row-major
#[wasm_bindgen]
pub fn partial_volume_disk_wasm(
    rows: &[f64],
    cols: &[f64],
    center_row: f64,
    center_col: f64,
    radius: f64,
    precision: f64,
    seed: u64,
) -> Result<Vec<f64>, JsValue> {
    let (rr, cc) = meshgrid(rows, cols);
    let run = || -> crate::Result<Vec<f64>> {
        let grid = CoordinateGrid::new(rr.view(), cc.view())?;
        let circle = Circle::new([center_row, center_col], radius)?;
        let result = build_partial_volume_disk(&grid, &circle, &wasm_config(precision, seed))?;
        Ok(result.into_raw_vec_and_offset().0)
    };
    run().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Square partial volume structuring element centered on its middle pixel.
///
/// # Returns
/// Flat array of side * side fractions, row-major, where side = 2n + 1
/// and n = max(ceil(radius / step), 1)
#[wasm_bindgen]
pub fn centered_disk_wasm(
    radius: f64,
    step: f64,
    precision: f64,
    seed: u64,
) -> Result<Vec<f64>, JsValue> {
    centered_disk(radius, step, &wasm_config(precision, seed))
        .map(|result| result.into_raw_vec_and_offset().0)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
