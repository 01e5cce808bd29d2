//! Circle and cell rectangle types.
//!
//! Coordinates are (row, column) pairs in whatever units the caller's grid
//! uses.

use crate::error::{Error, Result};

/// A disk given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub row: f64,
    pub col: f64,
    pub radius: f64,
}

impl Circle {
    /// Create a circle from a `[row, col]` center.
    ///
    /// # Errors
    /// `InvalidCenter` for a non-finite center, `InvalidRadius` for a
    /// negative or non-finite radius.
    pub fn new(center: [f64; 2], radius: f64) -> Result<Self> {
        let [row, col] = center;
        if !row.is_finite() || !col.is_finite() {
            return Err(Error::InvalidCenter(row, col));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self { row, col, radius })
    }

    /// Strict inside test; points on the circle itself are outside.
    #[inline]
    pub fn contains(&self, row: f64, col: f64) -> bool {
        let dr = row - self.row;
        let dc = col - self.col;
        dr * dr + dc * dc - self.radius * self.radius < 0.0
    }
}

/// Axis-aligned cell rectangle with explicit bounds.
///
/// Always satisfies `row_min <= row_max` and `col_min <= col_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub row_min: f64,
    pub row_max: f64,
    pub col_min: f64,
    pub col_max: f64,
}

impl Rect {
    /// Build from two row and two column bounds given in any order.
    pub fn from_bounds(row_a: f64, row_b: f64, col_a: f64, col_b: f64) -> Self {
        Self {
            row_min: row_a.min(row_b),
            row_max: row_a.max(row_b),
            col_min: col_a.min(col_b),
            col_max: col_a.max(col_b),
        }
    }

    /// Build from four `[row, col]` corners.
    ///
    /// Corners are conventionally listed clockwise from the upper left, but
    /// the bounds are taken over all four so any ordering gives the same cell.
    pub fn from_corners(corners: [[f64; 2]; 4]) -> Self {
        let mut rect = Self::from_bounds(corners[0][0], corners[0][0], corners[0][1], corners[0][1]);
        for [r, c] in &corners[1..] {
            rect.row_min = rect.row_min.min(*r);
            rect.row_max = rect.row_max.max(*r);
            rect.col_min = rect.col_min.min(*c);
            rect.col_max = rect.col_max.max(*c);
        }
        rect
    }

    pub fn area(&self) -> f64 {
        (self.row_max - self.row_min) * (self.col_max - self.col_min)
    }

    pub fn is_finite(&self) -> bool {
        self.row_min.is_finite()
            && self.row_max.is_finite()
            && self.col_min.is_finite()
            && self.col_max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_validation() {
        assert!(Circle::new([2.0, 2.0], 2.5).is_ok());
        assert!(Circle::new([0.0, 0.0], 0.0).is_ok());
        assert_eq!(Circle::new([0.0, 0.0], -1.0), Err(Error::InvalidRadius(-1.0)));
        assert!(matches!(Circle::new([0.0, 0.0], f64::NAN), Err(Error::InvalidRadius(_))));
        assert!(matches!(Circle::new([f64::INFINITY, 0.0], 1.0), Err(Error::InvalidCenter(..))));
    }

    #[test]
    fn test_circle_boundary_is_outside() {
        let circle = Circle::new([0.0, 0.0], 1.0).unwrap();
        assert!(circle.contains(0.5, 0.5));
        assert!(!circle.contains(1.0, 0.0));
        assert!(!circle.contains(0.0, -1.0));

        let point = Circle::new([3.0, 3.0], 0.0).unwrap();
        assert!(!point.contains(3.0, 3.0));
    }

    #[test]
    fn test_from_bounds_normalizes() {
        let rect = Rect::from_bounds(1.5, 0.5, 3.0, -1.0);
        assert_eq!(rect.row_min, 0.5);
        assert_eq!(rect.row_max, 1.5);
        assert_eq!(rect.col_min, -1.0);
        assert_eq!(rect.col_max, 3.0);
        assert!((rect.area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_corners_ignores_ordering() {
        let clockwise = [[0.0, 0.0], [0.0, 2.0], [1.0, 2.0], [1.0, 0.0]];
        let scrambled = [[1.0, 2.0], [0.0, 0.0], [1.0, 0.0], [0.0, 2.0]];
        let a = Rect::from_corners(clockwise);
        let b = Rect::from_corners(scrambled);
        assert_eq!(a, b);
        assert_eq!(a, Rect::from_bounds(0.0, 1.0, 0.0, 2.0));
    }
}
