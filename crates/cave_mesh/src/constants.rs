//! Thresholds, margins and cube layout shared by the density passes and the
//! extractor.
//!
//! # Density Thresholds
//!
//! ```text
//!   density
//!     1.0 ┤
//!         │
//!  iso+0.1┤─ ─ ─ ─ ─ ─ ─ ─ ─  border ring is raised at least this far
//!     iso ┤━━━━━━━━━━━━━━━━━  active: density >= iso
//!  iso-0.1┤─ ─ ─ ─ ─ ─ ─ ─ ─  carved boundaries sit at most this high
//!         │
//!     0.0 ┤
//! ```
//!
//! The ±0.1 margin keeps carved and raised points well clear of the iso
//! surface so interpolation never lands a vertex on a carved plane.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y (up, ceiling direction)
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cube corner order (x, y, z):
//!   0 = (0,0,0)    4 = (0,1,0)
//!   1 = (0,0,1)    5 = (0,1,1)
//!   2 = (1,0,1)    6 = (1,1,1)
//!   3 = (1,0,0)    7 = (1,1,0)
//! ```
//!
//! Corners 0-3 walk the bottom face, 4-7 repeat the walk one row up. This is
//! the order the triangulation table in [`crate::edge_table`] expects.

/// Margin below/above iso used when carving or raising density.
pub const ISO_MARGIN: f32 = 0.1;

/// Border noise strength floor above iso at the inner edge of the border band.
pub const BORDER_NOISE_FLOOR: f32 = 0.001;

/// Weight of each of the eight face neighbours in the border smoothing kernel.
pub const BORDER_KERNEL_WEIGHT: f32 = 0.125;

/// Direct sample weight at full smoothing.
pub const BORDER_SMOOTH_DIRECT: f32 = 0.1;

/// Kernel weight at full smoothing.
pub const BORDER_SMOOTH_KERNEL: f32 = 0.9;

/// Tolerance for "approximately zero" comparisons.
pub const CMP_EPSILON: f32 = 0.00001;

/// Largest grid `from_config` will size (1 GiB of `f32` densities).
pub const MAX_GRID_SAMPLES: usize = 1 << 28;

/// Grid offsets of the 8 cube corners relative to the cube origin.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0], // 0
  [0, 0, 1], // 1
  [1, 0, 1], // 2
  [1, 0, 0], // 3
  [0, 1, 0], // 4
  [0, 1, 1], // 5
  [1, 1, 1], // 6
  [1, 1, 0], // 7
];

/// True when `value` is within [`CMP_EPSILON`] of zero.
#[inline(always)]
pub fn is_zero_approx(value: f32) -> bool {
  value.abs() < CMP_EPSILON
}

/// True when `a` and `b` differ by less than [`CMP_EPSILON`].
#[inline(always)]
pub fn is_equal_approx(a: f32, b: f32) -> bool {
  a == b || (a - b).abs() < CMP_EPSILON
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
