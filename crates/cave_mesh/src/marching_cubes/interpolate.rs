//! Edge crossing placement.
//!
//! # Boundary Snapping
//!
//! ```text
//!   x=0 plane                          x=0 plane
//!     │                                  │
//!     A ──────── B      →  returns A     A ──────── B     (A on boundary, B not)
//!     │                                  ●
//!     │
//!     A                                  A
//!     │          →  interpolate          ●               (both on the same
//!     B                                  B                boundary plane)
//! ```
//!
//! Any edge that leaves an outer XZ plane collapses onto that plane's grid
//! point. Neighbouring rooms share those points exactly, so their meshes
//! meet without cracks.

use glam::{UVec3, Vec3};

use crate::constants::is_equal_approx;
use crate::density::RoomShape;
use crate::error::GenerateError;
use crate::grid::DensityField;

/// Place the surface crossing on the edge `a`-`b` (grid coordinates).
pub fn interpolate_points(
  field: &DensityField,
  shape: &RoomShape,
  a: UVec3,
  b: UVec3,
) -> Result<Vec3, GenerateError> {
  let a_bound = shape.is_at_boundary_xz(a.x as usize, a.z as usize);
  let b_bound = shape.is_at_boundary_xz(b.x as usize, b.z as usize);
  let on_same_plane = a.x == b.x || a.z == b.z;
  let both_on_plane = a_bound && b_bound && on_same_plane;

  if a_bound && !both_on_plane {
    return Ok(a.as_vec3());
  }
  if b_bound && !both_on_plane {
    return Ok(b.as_vec3());
  }

  let (pa, pb) = (a.as_vec3(), b.as_vec3());
  if !shape.config.interpolate {
    return Ok((pa + pb) * 0.5);
  }

  let iso = shape.config.iso_value;
  let density_a = field.get(a.x as usize, a.y as usize, a.z as usize);
  let density_b = field.get(b.x as usize, b.y as usize, b.z as usize);
  if !(density_a >= iso || density_b >= iso) {
    return Err(GenerateError::EdgeBelowIso {
      a,
      b,
      density_a,
      density_b,
      iso,
    });
  }

  if is_equal_approx(iso, density_a) {
    return Ok(pa);
  }
  if is_equal_approx(iso, density_b) {
    return Ok(pb);
  }
  if is_equal_approx(density_a, density_b) {
    return Ok((pa + pb) * 0.5);
  }

  let mu = ((iso - density_a) / (density_b - density_a)).clamp(0.0, 1.0);
  Ok(pa + mu * (pb - pa))
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
