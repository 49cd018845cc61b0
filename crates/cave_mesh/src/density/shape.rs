//! Room geometry predicates: ceiling, outer boundary, border band.
//!
//! # Room Cross-Section (XY, border_size = 1)
//!
//! ```text
//!   y
//!  ny-1 ┤ . . . . . . . . . .   outer Y boundary (always carved)
//!       │ . ░ ░ ░ ░ ░ ░ ░ ░ .   ░ above ceiling: dissolves toward the top
//!  ceil ┤ . █ ~ ~ ~ ~ ~ ~ █ .   ~ shaped noise
//!       │ . █ ~ ~ ~ ~ ~ ~ █ .   █ border ring (raised solid below ceiling)
//!     1 ┤ . █ █ █ █ █ █ █ █ .   floor rows belong to the border band
//!     0 ┤ . . . . . . . . . .
//!       └─┬─┬───────────┬─┬── x
//!         0 1          nx-2 nx-1
//! ```

use crate::config::CaveConfig;
use crate::constants::is_zero_approx;
use crate::easing::{inverse_lerp, lerp};
use crate::grid::GridDimensions;

/// Config snapshot bound to a grid, answering per-point room questions.
#[derive(Clone, Copy, Debug)]
pub struct RoomShape {
  pub config: CaveConfig,
  pub dims: GridDimensions,
  border: usize,
  ceiling_row: f32,
}

impl RoomShape {
  pub fn new(config: CaveConfig, dims: GridDimensions) -> Self {
    let ny = dims.count_y as f32;
    let ceiling_row = (config.ceiling * (ny - 1.0)).min(ny - 2.0);
    Self {
      config,
      dims,
      border: config.border_size as usize,
      ceiling_row,
    }
  }

  /// Row index of the ceiling (fractional).
  #[inline(always)]
  pub fn ceiling_row(&self) -> f32 {
    self.ceiling_row
  }

  #[inline(always)]
  pub fn border_size(&self) -> usize {
    self.border
  }

  /// Rows at or below the ceiling. Everything counts when `ceiling >= 1`.
  #[inline]
  pub fn is_below_ceiling(&self, y: usize) -> bool {
    if self.config.ceiling >= 1.0 {
      return true;
    }
    y as f32 <= self.ceiling_row
  }

  /// How far above the ceiling a row sits, in `[0, 1]`.
  ///
  /// Zero at and below the ceiling, ramping to one at the top of the dissolve
  /// band. The band spans `falloff_above_ceiling` of the distance between
  /// the ceiling and the highest interior row.
  pub fn above_ceiling_amount(&self, y: usize) -> f32 {
    if self.config.ceiling >= 1.0 {
      return 0.0;
    }
    let ceiling = self.ceiling_row;
    let top = self.dims.count_y as f32 - 1.0 - (self.border * 2) as f32;
    if is_zero_approx((ceiling - top).abs()) {
      return 0.0;
    }
    let top = lerp(ceiling, top, self.config.falloff_above_ceiling);
    let y = y as f32;
    if y < ceiling {
      return 0.0;
    }
    if y >= top {
      return 1.0;
    }
    if ceiling >= top || is_zero_approx((ceiling - top).abs()) {
      return 1.0;
    }
    inverse_lerp(ceiling, top, y).clamp(0.0, 1.0)
  }

  /// Outermost X or Z plane.
  #[inline]
  pub fn is_at_boundary_xz(&self, x: usize, z: usize) -> bool {
    x == 0 || z == 0 || x + 1 == self.dims.count_x || z + 1 == self.dims.count_z
  }

  /// Outermost Y plane.
  #[inline]
  pub fn is_at_boundary_y(&self, y: usize) -> bool {
    y == 0 || y + 1 == self.dims.count_y
  }

  /// Inside the border band: within `border_size` of an XZ edge, or in the
  /// floor rows.
  #[inline]
  pub fn is_at_border(&self, x: usize, y: usize, z: usize) -> bool {
    let b = self.border;
    x <= b
      || y <= b
      || z <= b
      || x + 1 + b >= self.dims.count_x
      || z + 1 + b >= self.dims.count_z
  }

  /// On the innermost line of the band, one in from the outer boundary.
  #[inline]
  pub fn is_at_border_edge(&self, x: usize, y: usize, z: usize) -> bool {
    x == 1 || y == 1 || z == 1 || x + 2 == self.dims.count_x || z + 2 == self.dims.count_z
  }

  /// Distance in cells from the inner edge of the border band.
  pub fn dist_from_border(&self, x: usize, y: usize, z: usize) -> usize {
    let b = self.border as i64;
    let (x, y, z) = (x as i64, y as i64, z as i64);
    let far_x = self.dims.count_x as i64 - 1 - b;
    let far_z = self.dims.count_z as i64 - 1 - b;

    let dx = (x - b).abs().min((far_x - x).abs());
    let dy = (y - b).abs();
    let dz = (z - b).abs().min((far_z - z).abs());
    dx.min(dy).min(dz) as usize
  }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
