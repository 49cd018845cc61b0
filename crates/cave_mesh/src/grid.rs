//! Grid sizing and the flat density buffer.
//!
//! # Memory Layout
//!
//! ```text
//! index = x + y * count_x + z * count_x * count_y
//!
//! Address:  0      1     ...  nx-1     nx     ...  nx*ny  ...
//! Content: [0,0,0][1,0,0]...[nx-1,0,0][0,1,0]...[0,0,1]...
//!          └──────── X ────────┘
//!          └──────────── one Z slab (nx*ny) ────────────┘
//! ```
//!
//! Z slabs are contiguous, so passes split the buffer into slabs and process
//! them in parallel.

use crate::config::CaveConfig;
use crate::constants::MAX_GRID_SAMPLES;

/// Sample-point counts per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDimensions {
  pub count_x: usize,
  pub count_y: usize,
  pub count_z: usize,
}

impl GridDimensions {
  pub const fn new(count_x: usize, count_y: usize, count_z: usize) -> Self {
    Self {
      count_x,
      count_y,
      count_z,
    }
  }

  /// Derive the grid for a room.
  ///
  /// `floor(room / cell_size)` per axis, plus `2 * border_size` on every axis
  /// when the bordered layout is enabled. A non-positive or non-finite cell
  /// size, or a grid above [`MAX_GRID_SAMPLES`], yields an empty grid.
  pub fn from_config(config: &CaveConfig) -> Self {
    let pad = if config.pad_border {
      (config.border_size as usize).saturating_mul(2)
    } else {
      0
    };
    let axis = |extent: f32| -> usize {
      if config.cell_size <= 0.0 || !config.cell_size.is_finite() {
        return 0;
      }
      let cells = (extent / config.cell_size).floor();
      if cells.is_nan() || cells <= 0.0 {
        return pad;
      }
      (cells as usize).saturating_add(pad)
    };

    let dims = Self::new(
      axis(config.room_width),
      axis(config.room_height),
      axis(config.room_depth),
    );
    let samples = dims
      .count_x
      .checked_mul(dims.count_y)
      .and_then(|n| n.checked_mul(dims.count_z));
    match samples {
      Some(n) if n <= MAX_GRID_SAMPLES => dims,
      _ => {
        tracing::warn!(
          count_x = dims.count_x,
          count_y = dims.count_y,
          count_z = dims.count_z,
          "grid too large, using an empty grid"
        );
        Self::default()
      }
    }
  }

  /// Total sample count.
  #[inline(always)]
  pub const fn len(&self) -> usize {
    self.count_x * self.count_y * self.count_z
  }

  #[inline(always)]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Samples in one Z slab.
  #[inline(always)]
  pub const fn slab_len(&self) -> usize {
    self.count_x * self.count_y
  }

  /// Convert 3D coordinates to linear index.
  #[inline(always)]
  pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
    x + y * self.count_x + z * self.count_x * self.count_y
  }

  /// Number of cubes per axis (one less than samples, never negative).
  #[inline(always)]
  pub const fn cubes(&self) -> (usize, usize, usize) {
    (
      self.count_x.saturating_sub(1),
      self.count_y.saturating_sub(1),
      self.count_z.saturating_sub(1),
    )
  }
}

/// Flat scalar density buffer over a [`GridDimensions`] grid.
#[derive(Clone, Debug, Default)]
pub struct DensityField {
  dims: GridDimensions,
  values: Vec<f32>,
}

impl DensityField {
  /// Zero-filled field.
  pub fn new(dims: GridDimensions) -> Self {
    Self {
      dims,
      values: vec![0.0; dims.len()],
    }
  }

  /// Build a field from raw values. Returns `None` if the length disagrees.
  pub fn from_values(dims: GridDimensions, values: Vec<f32>) -> Option<Self> {
    (values.len() == dims.len()).then_some(Self { dims, values })
  }

  /// Retarget the field to new dimensions.
  ///
  /// The allocation is kept when the length is unchanged; otherwise it is
  /// replaced. Returns true when a reallocation happened. Contents are
  /// unspecified afterwards; every pass 1 overwrites all of them.
  pub fn resize(&mut self, dims: GridDimensions) -> bool {
    self.dims = dims;
    if self.values.len() == dims.len() {
      return false;
    }
    self.values = vec![0.0; dims.len()];
    true
  }

  #[inline(always)]
  pub fn dims(&self) -> GridDimensions {
    self.dims
  }

  #[inline(always)]
  pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
    self.values[self.dims.index(x, y, z)]
  }

  #[inline(always)]
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
    let idx = self.dims.index(x, y, z);
    self.values[idx] = value;
  }

  pub fn as_slice(&self) -> &[f32] {
    &self.values
  }

  pub fn as_mut_slice(&mut self) -> &mut [f32] {
    &mut self.values
  }

  /// Pointer of the backing allocation, for reuse checks.
  pub fn buffer_ptr(&self) -> *const f32 {
    self.values.as_ptr()
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
