//! Corner activation and the floating-point heuristic.
//!
//! A point above the ceiling is treated as floating when the column beneath
//! it has a gap before reaching just under the ceiling. This is a
//! single-column check, not a connectivity analysis: an overhang supported
//! from the side still counts as orphaned.

use super::shape::RoomShape;
use crate::grid::DensityField;

/// True when `(x, y, z)` has a non-solid point somewhere in the column below
/// it, down to two rows under the ceiling.
pub fn is_orphan(field: &DensityField, shape: &RoomShape, x: usize, y: usize, z: usize) -> bool {
  if !shape.config.remove_orphans || y == 0 {
    return false;
  }

  let iso = shape.config.iso_value;
  let floor = (shape.dims.count_y as f32 * shape.config.ceiling).floor() as i64 - 2;
  let lowest = floor.max(0) as usize;

  (lowest..y).rev().any(|below| field.get(x, below, z) <= iso)
}

/// Solid test used for every cube corner.
///
/// `density >= iso`, except that floating points above the ceiling are
/// dropped.
#[inline]
pub fn is_point_active(field: &DensityField, shape: &RoomShape, x: usize, y: usize, z: usize) -> bool {
  let active = field.get(x, y, z) >= shape.config.iso_value;
  if active && !shape.is_below_ceiling(y) && is_orphan(field, shape, x, y, z) {
    return false;
  }
  active
}

#[cfg(test)]
#[path = "orphan_test.rs"]
mod orphan_test;
