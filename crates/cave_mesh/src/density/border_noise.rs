//! Pass 4: border noise.
//!
//! A second noise is sampled on the four outer XZ faces, normalized per face,
//! then pushed inward across the border band with a strength that fades from
//! 1 at the outer rows to just above iso at the band's inner edge.
//!
//! ```text
//!  face x=0        band depth d = 2..=border_size
//!     │
//!     ▼   d=2   d=3   ...   d=B
//!    [n] ─► ██ ─► ▓▓ ─► ... ─► ░░     strength = lerp(1, iso+0.001, (d-1)/(B-1))
//!     ▲
//!   n0 blended with its 8 face neighbours by `smooth_border_noise`
//! ```
//!
//! Values are combined with `max`, so the pass only ever raises density and
//! overlapping corners do not depend on side order.

use tracing::instrument;

use super::shape::RoomShape;
use super::NoiseRange;
use crate::constants::{
  BORDER_KERNEL_WEIGHT, BORDER_NOISE_FLOOR, BORDER_SMOOTH_DIRECT, BORDER_SMOOTH_KERNEL,
};
use crate::easing::lerp;
use crate::grid::{DensityField, GridDimensions};
use crate::noise::NoiseSampler;

/// One of the four outer XZ faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
  MinX,
  MaxX,
  MinZ,
  MaxZ,
}

impl Face {
  pub const ALL: [Face; 4] = [Face::MinX, Face::MaxX, Face::MinZ, Face::MaxZ];

  /// Length of the face along its tangential horizontal axis.
  fn tangent_len(self, dims: &GridDimensions) -> usize {
    match self {
      Face::MinX | Face::MaxX => dims.count_z,
      Face::MinZ | Face::MaxZ => dims.count_x,
    }
  }

  /// Length of the grid along the face normal.
  fn normal_len(self, dims: &GridDimensions) -> usize {
    match self {
      Face::MinX | Face::MaxX => dims.count_x,
      Face::MinZ | Face::MaxZ => dims.count_z,
    }
  }

  /// Grid coordinate of a point `depth` cells in from this face.
  ///
  /// `t` is the tangential coordinate (z for X faces, x for Z faces).
  fn point(self, dims: &GridDimensions, depth: usize, t: usize, y: usize) -> (usize, usize, usize) {
    match self {
      Face::MinX => (depth, y, t),
      Face::MaxX => (dims.count_x - 1 - depth, y, t),
      Face::MinZ => (t, y, depth),
      Face::MaxZ => (t, y, dims.count_z - 1 - depth),
    }
  }
}

/// Whether pass 4 runs for this configuration.
#[inline]
pub fn is_enabled(shape: &RoomShape) -> bool {
  let config = &shape.config;
  config.show_border && config.use_border_noise && config.border_size > 1
}

/// Rows sampled and modified: everything at or below the ceiling row.
#[inline]
fn rows(shape: &RoomShape) -> impl Iterator<Item = usize> {
  let ceiling = shape.ceiling_row();
  (0..shape.dims.count_y).take_while(move |&y| y as f32 <= ceiling)
}

/// Sample and normalize one face into the scratch buffer.
fn sample_face<B>(scratch: &mut [f32], shape: &RoomShape, face: Face, border: &B)
where
  B: NoiseSampler + ?Sized,
{
  let dims = shape.dims;
  let mut range = NoiseRange::EMPTY;

  for t in 0..face.tangent_len(&dims) {
    for y in rows(shape) {
      let (x, y, z) = face.point(&dims, 0, t, y);
      let value = border.sample_3d(x as f32, y as f32, z as f32);
      scratch[dims.index(x, y, z)] = value;
      range = range.include(value);
    }
  }

  for t in 0..face.tangent_len(&dims) {
    for y in rows(shape) {
      let (x, y, z) = face.point(&dims, 0, t, y);
      let i = dims.index(x, y, z);
      scratch[i] = range.normalize(scratch[i]);
    }
  }
}

/// Smoothed face value at tangential coordinate `t`, row `y`.
fn face_value(scratch: &[f32], shape: &RoomShape, face: Face, t: usize, y: usize) -> f32 {
  let dims = shape.dims;
  let smooth = shape.config.smooth_border_noise;
  let at = |t: usize, y: usize| {
    let (x, y, z) = face.point(&dims, 0, t, y);
    scratch[dims.index(x, y, z)]
  };

  let n0 = at(t, y);
  let mut kernel = 0.0;
  if smooth > 0.0 {
    for dy in -1i64..=1 {
      for dt in -1i64..=1 {
        if dy == 0 && dt == 0 {
          continue;
        }
        let ny = (y as i64 + dy) as usize;
        let nt = (t as i64 + dt) as usize;
        kernel += at(nt, ny) * BORDER_KERNEL_WEIGHT;
      }
    }
  }

  n0 * lerp(1.0, BORDER_SMOOTH_DIRECT, smooth) + kernel * lerp(0.0, BORDER_SMOOTH_KERNEL, smooth)
}

/// Push one face's noise inward across the band.
fn apply_face(field: &mut DensityField, scratch: &[f32], shape: &RoomShape, face: Face) {
  let dims = shape.dims;
  let border = shape.border_size();
  let iso = shape.config.iso_value;
  let normal_len = face.normal_len(&dims);
  let tangent_end = face.tangent_len(&dims).saturating_sub(2);

  for t in 2..tangent_end {
    for y in rows(shape).skip(2) {
      let value = face_value(scratch, shape, face, t, y);
      for depth in 2..=border {
        if depth >= normal_len {
          break;
        }
        let ramp = (depth - 1) as f32 / (border - 1) as f32;
        let strength = lerp(1.0, iso + BORDER_NOISE_FLOOR, ramp);
        let (x, y, z) = face.point(&dims, depth, t, y);
        let current = field.get(x, y, z);
        field.set(x, y, z, current.max(value * strength));
      }
    }
  }
}

/// Pass 4. No-op unless border noise is enabled and the band is wider than
/// one cell.
#[instrument(level = "debug", skip_all)]
pub fn apply<B>(field: &mut DensityField, scratch: &mut Vec<f32>, shape: &RoomShape, border: &B)
where
  B: NoiseSampler + ?Sized,
{
  if !is_enabled(shape) || shape.dims.is_empty() {
    return;
  }

  scratch.clear();
  scratch.resize(shape.dims.len(), 0.0);

  for face in Face::ALL {
    sample_face(scratch, shape, face, border);
  }
  for face in Face::ALL {
    apply_face(field, scratch, shape, face);
  }
}

#[cfg(test)]
#[path = "border_noise_test.rs"]
mod border_noise_test;
