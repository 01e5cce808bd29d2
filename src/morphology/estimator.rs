//! Monte Carlo estimate of circle/rectangle intersection.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::geometry::{Circle, Rect};
use crate::error::{Error, Result};

/// Default number of samples for a single cell estimate.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimate the fraction of `cell` covered by `circle`.
///
/// Draws `samples` points uniformly inside the cell (row and column drawn
/// independently) and counts those strictly inside the circle. The result
/// converges to the true covered fraction with variance `p(1-p)/samples`.
///
/// # Arguments
/// * `circle` - Disk to intersect with
/// * `cell` - Cell rectangle
/// * `samples` - Number of random points, must be > 0
/// * `rng` - Random source; callers pass a seeded rng for reproducible output
///
/// # Returns
/// Covered fraction in [0, 1]
pub fn estimate_intersection_fraction<R: Rng + ?Sized>(
    circle: &Circle,
    cell: &Rect,
    samples: usize,
    rng: &mut R,
) -> Result<f64> {
    if samples == 0 {
        return Err(Error::InvalidSamples(samples));
    }
    // Uniform needs a finite span, not just finite endpoints
    if !cell.is_finite() || !cell.area().is_finite() {
        return Err(Error::InvalidParameter {
            name: "cell",
            value: format!("{cell:?}"),
            reason: "bounds must be finite",
        });
    }

    let rows = Uniform::new_inclusive(cell.row_min, cell.row_max);
    let cols = Uniform::new_inclusive(cell.col_min, cell.col_max);

    let inside = (0..samples)
        .filter(|_| {
            let r = rows.sample(rng);
            let c = cols.sample(rng);
            circle.contains(r, c)
        })
        .count();

    Ok(inside as f64 / samples as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_circle() -> Circle {
        Circle::new([0.0, 0.0], 1.0).unwrap()
    }

    fn std_dev(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    }

    #[test]
    fn test_cell_inside_circle_is_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let circle = Circle::new([0.0, 0.0], 10.0).unwrap();
        let cell = Rect::from_bounds(-1.0, 1.0, -1.0, 1.0);

        let fraction = estimate_intersection_fraction(&circle, &cell, 100_000, &mut rng).unwrap();
        assert!(fraction >= 0.97);
        // All corners lie inside, so every sample does too
        assert_eq!(fraction, 1.0);
    }

    #[test]
    fn test_cell_outside_circle_is_empty() {
        let mut rng = StdRng::seed_from_u64(2);
        let cell = Rect::from_bounds(3.0, 4.0, 3.0, 4.0);

        let fraction = estimate_intersection_fraction(&unit_circle(), &cell, 100_000, &mut rng).unwrap();
        assert!(fraction <= 0.03);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn test_quarter_disk_converges_to_pi_over_four() {
        let mut rng = StdRng::seed_from_u64(3);
        let cell = Rect::from_bounds(0.0, 1.0, 0.0, 1.0);

        let fraction = estimate_intersection_fraction(&unit_circle(), &cell, 100_000, &mut rng).unwrap();
        assert!((fraction - std::f64::consts::FRAC_PI_4).abs() < 0.01, "got {fraction}");
    }

    #[test]
    fn test_more_samples_reduce_spread() {
        // Nearly straight edge through the middle of the cell: about half covered
        let circle = Circle::new([0.0, -100.0], 100.0).unwrap();
        let cell = Rect::from_bounds(-0.5, 0.5, -1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(4);

        let coarse: Vec<f64> = (0..30)
            .map(|_| estimate_intersection_fraction(&circle, &cell, 100, &mut rng).unwrap())
            .collect();
        let fine: Vec<f64> = (0..30)
            .map(|_| estimate_intersection_fraction(&circle, &cell, 10_000, &mut rng).unwrap())
            .collect();

        assert!(std_dev(&fine) < std_dev(&coarse));
        let mean = fine.iter().sum::<f64>() / fine.len() as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn test_zero_radius_covers_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let point = Circle::new([0.5, 0.5], 0.0).unwrap();
        let cell = Rect::from_bounds(0.0, 1.0, 0.0, 1.0);

        let fraction = estimate_intersection_fraction(&point, &cell, 10_000, &mut rng).unwrap();
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let cell = Rect::from_bounds(0.2, 1.2, -0.4, 0.6);
        let a = estimate_intersection_fraction(&unit_circle(), &cell, 5_000, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = estimate_intersection_fraction(&unit_circle(), &cell, 5_000, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
        assert!(a > 0.0 && a < 1.0);
    }

    #[test]
    fn test_rejects_zero_samples_and_infinite_cells() {
        let mut rng = StdRng::seed_from_u64(6);
        let cell = Rect::from_bounds(0.0, 1.0, 0.0, 1.0);
        assert_eq!(
            estimate_intersection_fraction(&unit_circle(), &cell, 0, &mut rng),
            Err(Error::InvalidSamples(0))
        );

        let open = Rect::from_bounds(0.0, f64::INFINITY, 0.0, 1.0);
        assert!(matches!(
            estimate_intersection_fraction(&unit_circle(), &open, 10, &mut rng),
            Err(Error::InvalidParameter { name: "cell", .. })
        ));
    }
}
