//! Density field builder.
//!
//! Turns raw noise into a sculpted scalar field in four full-grid passes.
//! Each pass reads only the previous pass's output, so points inside a pass
//! are independent and Z slabs run in parallel.
//!
//! ```text
//!  noise ──► [1 sample] ──► [2 normalize+shape] ──► [3 carve] ──► [4 border noise] ──► field
//!               │ min/max ────────►│                                   ▲
//!                                                     border noise ────┘
//! ```
//!
//! - Pass 1 samples `noise(x*cell, y*cell, z*cell)` and tracks the global
//!   range.
//! - Pass 2 normalizes into `[0, 1]`, applies the curve blend, and dissolves
//!   rows above the ceiling.
//! - Pass 3 carves the outer planes, raises the border ring, and fades density
//!   in from the border above the ceiling.
//! - Pass 4 optionally roughens the inner face of the border band with a
//!   second noise ([`border_noise`]).

pub mod border_noise;
pub mod orphan;
pub mod shape;

use rayon::prelude::*;
use tracing::instrument;

pub use orphan::{is_orphan, is_point_active};
pub use shape::RoomShape;

use crate::constants::{CMP_EPSILON, ISO_MARGIN};
use crate::easing::{inverse_lerp, lerp};
use crate::grid::DensityField;
use crate::noise::NoiseSampler;

/// Global range of the raw samples from pass 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseRange {
  pub min: f32,
  pub max: f32,
}

impl NoiseRange {
  pub const EMPTY: Self = Self {
    min: f32::INFINITY,
    max: f32::NEG_INFINITY,
  };

  #[inline]
  pub fn include(self, value: f32) -> Self {
    Self {
      min: self.min.min(value),
      max: self.max.max(value),
    }
  }

  #[inline]
  pub fn merge(self, other: Self) -> Self {
    Self {
      min: self.min.min(other.min),
      max: self.max.max(other.max),
    }
  }

  /// Map `value` into `[0, 1]`. A flat range maps everything to 0.
  #[inline]
  pub fn normalize(&self, value: f32) -> f32 {
    let span = self.max - self.min;
    if !span.is_finite() || span < CMP_EPSILON {
      return 0.0;
    }
    inverse_lerp(self.min, self.max, value).clamp(0.0, 1.0)
  }
}

/// Visit every point of the field in parallel, one Z slab per task.
fn for_each_point<F>(field: &mut DensityField, f: F)
where
  F: Fn(usize, usize, usize, &mut f32) + Sync,
{
  let dims = field.dims();
  if dims.is_empty() {
    return;
  }
  let nx = dims.count_x;

  field
    .as_mut_slice()
    .par_chunks_mut(dims.slab_len())
    .enumerate()
    .for_each(|(z, slab)| {
      for (i, value) in slab.iter_mut().enumerate() {
        f(i % nx, i / nx, z, value);
      }
    });
}

/// Pass 1: raw noise sampling.
///
/// Writes `noise(x*cell, y*cell, z*cell)` at every point, or 0 when noise is
/// hidden, and returns the observed range.
#[instrument(level = "debug", skip_all)]
pub fn sample_noise<N>(field: &mut DensityField, shape: &RoomShape, noise: &N) -> NoiseRange
where
  N: NoiseSampler + Sync + ?Sized,
{
  let dims = field.dims();
  if dims.is_empty() {
    return NoiseRange::EMPTY;
  }
  let nx = dims.count_x;
  let cell = shape.config.cell_size;
  let show_noise = shape.config.show_noise;

  field
    .as_mut_slice()
    .par_chunks_mut(dims.slab_len())
    .enumerate()
    .map(|(z, slab)| {
      let mut range = NoiseRange::EMPTY;
      for (i, value) in slab.iter_mut().enumerate() {
        let (x, y) = (i % nx, i / nx);
        *value = if show_noise {
          noise.sample_3d(x as f32 * cell, y as f32 * cell, z as f32 * cell)
        } else {
          0.0
        };
        range = range.include(*value);
      }
      range
    })
    .reduce(|| NoiseRange::EMPTY, NoiseRange::merge)
}

/// Curve blend: `curve` 0 gives `ease_in`, 1 the identity, 2 `ease_out`.
#[inline]
pub fn apply_curve(shape: &RoomShape, value: f32) -> f32 {
  let config = &shape.config;
  let eased_in = config.ease_in.apply(value);
  let eased_out = config.ease_out.apply(value);
  let value = lerp(eased_in, value, config.curve.clamp(0.0, 1.0));
  lerp(value, eased_out, (config.curve - 1.0).clamp(0.0, 1.0))
}

/// Pass 2: normalize, shape, and dissolve above the ceiling.
///
/// Skipped when noise is hidden.
#[instrument(level = "debug", skip_all)]
pub fn shape_noise(field: &mut DensityField, shape: &RoomShape, range: NoiseRange) {
  if !shape.config.show_noise {
    return;
  }
  let iso = shape.config.iso_value;
  let falloff = shape.config.falloff_above_ceiling;

  for_each_point(field, |_, y, _, value| {
    let raw = *value;
    let shaped = apply_curve(shape, range.normalize(raw));
    let zero = lerp(0.0, raw.min(iso - ISO_MARGIN), falloff);
    *value = lerp(shaped, zero, shape.above_ceiling_amount(y));
  });
}

/// Pass 3 for a single point.
#[inline]
pub fn carve_point(shape: &RoomShape, x: usize, y: usize, z: usize, value: f32) -> f32 {
  let config = &shape.config;
  let below_iso = config.iso_value - ISO_MARGIN;

  if (shape.is_at_boundary_xz(x, z) && config.show_outer_walls) || shape.is_at_boundary_y(y) {
    return value.min(below_iso);
  }

  if shape.is_at_border(x, y, z)
    && (!config.use_border_noise || shape.is_at_border_edge(x, y, z))
  {
    let mut value = value.min(below_iso);
    if shape.is_below_ceiling(y) && config.show_border {
      value = value.max(config.iso_value + ISO_MARGIN);
    }
    return value;
  }

  if !shape.is_below_ceiling(y) && config.falloff_near_border > 0 {
    let dist = shape.dist_from_border(x, y, z) as f32;
    let t = inverse_lerp(0.0, config.falloff_near_border as f32, dist - 1.0)
      * (1.0 - shape.above_ceiling_amount(y));
    return lerp(value.min(below_iso), value, t.clamp(0.0, 1.0));
  }

  value
}

/// Pass 3: outer planes, border ring, and border falloff above the ceiling.
#[instrument(level = "debug", skip_all)]
pub fn carve_room(field: &mut DensityField, shape: &RoomShape) {
  for_each_point(field, |x, y, z, value| {
    *value = carve_point(shape, x, y, z, *value);
  });
}

/// Run all passes into `field`.
///
/// `scratch` is the border noise buffer; it is resized and zeroed here and
/// only touched when border noise is enabled.
pub fn build<N, B>(
  field: &mut DensityField,
  scratch: &mut Vec<f32>,
  shape: &RoomShape,
  noise: &N,
  border: &B,
) where
  N: NoiseSampler + Sync + ?Sized,
  B: NoiseSampler + ?Sized,
{
  let range = sample_noise(field, shape, noise);
  tracing::trace!(min = range.min, max = range.max, "raw noise range");
  shape_noise(field, shape, range);
  carve_room(field, shape);
  border_noise::apply(field, scratch, shape, border);
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
