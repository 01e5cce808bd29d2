//! PVM Rust Extensions
//!
//! Partial volume structuring elements for morphology, implemented in Rust
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Partial Volumes
//! A binary disk marks every pixel as in or out. A partial volume disk
//! instead stores, for every pixel, the fraction of the pixel's area covered
//! by the circle:
//! - **1.0**: pixel entirely inside the circle
//! - **0.0**: pixel entirely outside
//! - **between**: pixel straddles the edge
//!
//! Fractions are estimated by Monte Carlo sampling, so accuracy is set by
//! the sample count per pixel (`1 / precision`).
//!
//! ## Grid Format
//! Pixels are given by their center coordinates as two (M, N) `f64` arrays,
//! `rr` (row coordinates) and `cc` (column coordinates), uniformly spaced
//! along each axis. Each pixel spans half a step either side of its center.

pub mod config;
pub mod error;
pub mod morphology;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{DiskConfig, ProcessingMode};
pub use error::{Error, Result};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{DiskConfig, DEFAULT_PRECISION};
    use crate::error::Error;
    use crate::morphology::{self, Circle, CoordinateGrid, Rect, DEFAULT_SAMPLES};

    impl From<Error> for PyErr {
        fn from(err: Error) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn config_for(precision: f64, seed: Option<u64>) -> DiskConfig {
        let config = DiskConfig::default().with_precision(precision);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    // ========================================================================
    // Partial Volume Disk
    // ========================================================================

    /// Return a circle with partial volumes calculated.
    ///
    /// # Arguments
    /// * `rr` - Row point coordinates (M, N)
    /// * `cc` - Column point coordinates (M, N)
    /// * `center` - Circle center (row, column)
    /// * `radius` - Circle radius
    /// * `precision` - Reciprocal of the samples per pixel (default: 0.0001)
    /// * `seed` - Random seed for reproducible output (default: entropy)
    ///
    /// Output is (M, N) float64, each value the fraction of that pixel
    /// covered by the circle.
    #[pyfunction]
    #[pyo3(signature = (rr, cc, center, radius, precision=DEFAULT_PRECISION, seed=None))]
    pub fn disk<'py>(
        py: Python<'py>,
        rr: PyReadonlyArray2<'py, f64>,
        cc: PyReadonlyArray2<'py, f64>,
        center: (f64, f64),
        radius: f64,
        precision: f64,
        seed: Option<u64>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let circle = Circle::new([center.0, center.1], radius)?;
        let grid = CoordinateGrid::new(rr.as_array(), cc.as_array())?;
        let config = config_for(precision, seed);
        let result = morphology::build_partial_volume_disk(&grid, &circle, &config)?;
        Ok(result.into_pyarray(py))
    }

    /// Partial volume disk centered on the middle pixel of a square kernel.
    ///
    /// Kernel side is `2n + 1` with `n = max(ceil(radius / step), 1)`.
    #[pyfunction]
    #[pyo3(signature = (radius, step=1.0, precision=DEFAULT_PRECISION, seed=None))]
    pub fn centered_disk<'py>(
        py: Python<'py>,
        radius: f64,
        step: f64,
        precision: f64,
        seed: Option<u64>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let result = morphology::centered_disk(radius, step, &config_for(precision, seed))?;
        Ok(result.into_pyarray(py))
    }

    /// Monte Carlo estimate of circle/rectangle intersection.
    ///
    /// # Arguments
    /// * `center` - Circle center (row, column)
    /// * `radius` - Circle radius
    /// * `corners` - (4, 2) corner coordinates, clockwise from upper left
    /// * `samples` - Number of random samples (default: 10000)
    /// * `seed` - Random seed (default: entropy)
    #[pyfunction]
    #[pyo3(signature = (center, radius, corners, samples=DEFAULT_SAMPLES, seed=None))]
    pub fn circle_rect_pvol<'py>(
        center: (f64, f64),
        radius: f64,
        corners: PyReadonlyArray2<'py, f64>,
        samples: usize,
        seed: Option<u64>,
    ) -> PyResult<f64> {
        let corners = corners.as_array();
        if corners.dim() != (4, 2) {
            return Err(PyValueError::new_err(format!(
                "corners must have shape (4, 2), got {:?}",
                corners.dim()
            )));
        }
        let cell = Rect::from_corners([
            [corners[[0, 0]], corners[[0, 1]]],
            [corners[[1, 0]], corners[[1, 1]]],
            [corners[[2, 0]], corners[[2, 1]]],
            [corners[[3, 0]], corners[[3, 1]]],
        ]);
        let circle = Circle::new([center.0, center.1], radius)?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(morphology::estimate_intersection_fraction(&circle, &cell, samples, &mut rng)?)
    }

    /// PVM Rust extension module
    #[pymodule]
    pub fn pvm_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(disk, m)?)?;
        m.add_function(wrap_pyfunction!(centered_disk, m)?)?;
        m.add_function(wrap_pyfunction!(circle_rect_pvol, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pvm_rust;
