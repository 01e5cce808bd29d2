//! Configuration for partial volume disk builds.
//!
//! Mirrors the keyword arguments of the Python entry points: `precision`
//! controls the per-cell sample count, `seed` makes a build reproducible.

use crate::error::{Error, Result};

/// Default precision, i.e. 10000 samples per cell.
pub const DEFAULT_PRECISION: f64 = 0.0001;

/// Default relative tolerance for the uniform spacing check.
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-6;

/// How the per-cell estimates are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded, row-major
    Sequential,
    /// Rayon global thread pool
    #[default]
    Parallel,
    /// Dedicated rayon pool with the given number of threads
    ParallelWith(usize),
}

/// Settings for [`build_partial_volume_disk`](crate::morphology::build_partial_volume_disk).
#[derive(Debug, Clone, PartialEq)]
pub struct DiskConfig {
    /// Reciprocal of the sample count per cell
    pub precision: f64,
    /// Base seed; `None` draws one from system entropy
    pub seed: Option<u64>,
    pub mode: ProcessingMode,
    /// Scan every row/column step instead of trusting the first two entries
    pub validate_spacing: bool,
    /// Allowed deviation of a step, relative to the derived step
    pub spacing_tolerance: f64,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            seed: None,
            mode: ProcessingMode::default(),
            validate_spacing: true,
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
        }
    }
}

impl DiskConfig {
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_spacing_validation(mut self, enabled: bool) -> Self {
        self.validate_spacing = enabled;
        self
    }

    pub fn with_spacing_tolerance(mut self, tolerance: f64) -> Self {
        self.spacing_tolerance = tolerance;
        self
    }

    /// Number of samples drawn per cell: `round(1 / precision)`.
    pub fn samples(&self) -> Result<usize> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(Error::InvalidPrecision(self.precision));
        }
        let samples = (1.0 / self.precision).round();
        if samples < 1.0 || !samples.is_finite() || samples > usize::MAX as f64 {
            return Err(Error::InvalidPrecision(self.precision));
        }
        Ok(samples as usize)
    }

    /// Check every field, returning the sample count on success.
    pub fn validate(&self) -> Result<usize> {
        if !self.spacing_tolerance.is_finite() || self.spacing_tolerance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "spacing_tolerance",
                value: self.spacing_tolerance.to_string(),
                reason: "must be finite and >= 0",
            });
        }
        if self.mode == ProcessingMode::ParallelWith(0) {
            return Err(Error::InvalidParameter {
                name: "mode",
                value: "ParallelWith(0)".to_string(),
                reason: "thread count must be > 0",
            });
        }
        self.samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision_gives_ten_thousand_samples() {
        assert_eq!(DiskConfig::default().samples(), Ok(10_000));
    }

    #[test]
    fn test_samples_are_rounded_not_truncated() {
        // 1 / 0.003 = 333.33..., 1 / 0.0006 = 1666.66...
        let cfg = DiskConfig::default().with_precision(0.003);
        assert_eq!(cfg.samples(), Ok(333));
        let cfg = DiskConfig::default().with_precision(0.0006);
        assert_eq!(cfg.samples(), Ok(1667));
    }

    #[test]
    fn test_invalid_precision() {
        for p in [0.0, -0.01, f64::NAN, f64::INFINITY, 3.0] {
            let cfg = DiskConfig::default().with_precision(p);
            assert!(matches!(cfg.samples(), Err(Error::InvalidPrecision(_))), "precision {p}");
        }
        // Rounds up to a single sample
        assert_eq!(DiskConfig::default().with_precision(1.5).samples(), Ok(1));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cfg = DiskConfig::default().with_spacing_tolerance(-1.0);
        assert!(matches!(cfg.validate(), Err(Error::InvalidParameter { name: "spacing_tolerance", .. })));

        let cfg = DiskConfig::default().with_mode(ProcessingMode::ParallelWith(0));
        assert!(matches!(cfg.validate(), Err(Error::InvalidParameter { name: "mode", .. })));

        let cfg = DiskConfig::default()
            .with_mode(ProcessingMode::ParallelWith(2))
            .with_seed(7);
        assert_eq!(cfg.validate(), Ok(10_000));
    }
}
