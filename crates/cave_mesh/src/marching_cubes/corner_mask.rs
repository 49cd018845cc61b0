//! Corner mask computation.
//!
//! The corner mask is an 8-bit value where each bit indicates whether a corner
//! of the 2x2x2 cube is active.

use crate::constants::CORNER_OFFSETS;
use crate::density::{is_point_active, RoomShape};
use crate::grid::DensityField;

/// Build corner mask for the cube whose minimum corner is `(x, y, z)`.
///
/// Bit `i` is set when corner `CORNER_OFFSETS[i]` passes
/// [`is_point_active`], so classification and the orphan rule never disagree.
#[inline]
pub fn build(field: &DensityField, shape: &RoomShape, x: usize, y: usize, z: usize) -> u8 {
  let mut mask = 0u8;
  for (bit, offset) in CORNER_OFFSETS.iter().enumerate() {
    if is_point_active(field, shape, x + offset[0], y + offset[1], z + offset[2]) {
      mask |= 1 << bit;
    }
  }
  mask
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
