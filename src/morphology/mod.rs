//! Partial volume structuring elements.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | Grid | `grid` | Pixel centers `rr`/`cc`, step derivation, half-step cell boundaries |
//! | Cell | `geometry` | `Circle` and explicit `Rect` cell bounds |
//! | Estimate | `estimator` | Monte Carlo covered fraction of one cell |
//! | Disk | `disk` | Per-cell estimates assembled into an (M, N) array |
//!
//! Cells are independent, so the disk build maps over cell indices with
//! rayon. Every cell seeds its own rng from the base seed and its row-major
//! index.

pub mod disk;
pub mod estimator;
pub mod geometry;
pub mod grid;

pub use disk::{build_partial_volume_disk, centered_disk, disk, MAX_KERNEL_HALF_WIDTH};
pub use estimator::{estimate_intersection_fraction, DEFAULT_SAMPLES};
pub use geometry::{Circle, Rect};
pub use grid::{meshgrid, CoordinateGrid};
