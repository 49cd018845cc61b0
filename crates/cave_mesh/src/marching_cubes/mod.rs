//! Marching Cubes isosurface extraction.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: DensityField     - sculpted densities, [0, 1]-ish       │
//! │  shape: RoomShape        - config snapshot + grid queries       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Corner Classification               │
//! │  For each 2×2×2 cube:                                           │
//! │    Bit i = is_point_active(cube + CORNER_OFFSETS[i])            │
//! │    Early-out when EDGE_TABLE[mask] is empty (mask 0 or 255)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Edge Crossings                      │
//! │  For each edge in EDGE_TABLE[mask]:                             │
//! │    interpolate_points(a, b), snapping onto the outer walls      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Emit                                │
//! │  TRI_TABLE[mask] triples until the -1 sentinel (0..=5 tris)     │
//! │  normal = -normalize((p2 - p1) × (p3 - p1))   (grid space)      │
//! │  uv     = ((x+1)/nx, max((y+1)/ny, (z+1)/nz))                   │
//! │  pos    = (p - pad) * cell_size                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Corner Order
//!
//! ```text
//! Corner  Offset      Corner  Offset
//! ──────  ─────────   ──────  ─────────
//!   0     (0, 0, 0)     4     (0, 1, 0)
//!   1     (0, 0, 1)     5     (0, 1, 1)
//!   2     (1, 0, 1)     6     (1, 1, 1)
//!   3     (1, 0, 0)     7     (1, 1, 0)
//! ```
//!
//! Slabs of constant z are triangulated in parallel and concatenated in z
//! order, so the output is identical to a serial z/y/x walk.

pub mod corner_mask;
pub mod interpolate;

pub use interpolate::interpolate_points;

use glam::{UVec3, Vec2, Vec3};
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::instrument;

use crate::density::RoomShape;
use crate::edge_table::{edge_endpoints, triangles, EDGE_TABLE, MAX_TRIANGLES_PER_CUBE};
use crate::error::GenerateError;
use crate::grid::DensityField;
use crate::types::{Mesh, Triangle};

/// Triangles emitted by a single cube.
pub type CubeTriangles = SmallVec<[Triangle; MAX_TRIANGLES_PER_CUBE]>;

/// Triangulate the cube whose minimum corner is `(x, y, z)`.
pub fn triangulate_cube(
  field: &DensityField,
  shape: &RoomShape,
  x: usize,
  y: usize,
  z: usize,
) -> Result<CubeTriangles, GenerateError> {
  let mut out = CubeTriangles::new();

  let mask = corner_mask::build(field, shape, x, y, z);
  let edges = EDGE_TABLE[mask as usize];
  if edges == 0 {
    return Ok(out);
  }

  let origin = UVec3::new(x as u32, y as u32, z as u32);
  let mut points = [Vec3::ZERO; 12];
  for (edge, point) in points.iter_mut().enumerate() {
    if edges & (1 << edge) == 0 {
      continue;
    }
    let (a, b) = edge_endpoints(edge);
    *point = interpolate_points(field, shape, origin + offset(a), origin + offset(b))?;
  }

  let dims = field.dims();
  let uv = Vec2::new(
    (x + 1) as f32 / dims.count_x as f32,
    ((y + 1) as f32 / dims.count_y as f32).max((z + 1) as f32 / dims.count_z as f32),
  );
  let pad = Vec3::splat(shape.config.output_offset());
  let cell = shape.config.cell_size;

  for [e0, e1, e2] in triangles(mask) {
    let (p1, p2, p3) = (points[e0], points[e1], points[e2]);
    let normal = -(p2 - p1).cross(p3 - p1).normalize_or_zero();
    out.push(Triangle {
      positions: [(p1 - pad) * cell, (p2 - pad) * cell, (p3 - pad) * cell],
      normal,
      uv,
    });
  }

  Ok(out)
}

#[inline(always)]
fn offset(o: [usize; 3]) -> UVec3 {
  UVec3::new(o[0] as u32, o[1] as u32, o[2] as u32)
}

/// Triangulate one z-slab of cubes in y/x order.
fn march_slab(
  field: &DensityField,
  shape: &RoomShape,
  z: usize,
) -> Result<Vec<Triangle>, GenerateError> {
  let (cx, cy, _) = field.dims().cubes();
  let mut slab = Vec::new();
  for y in 0..cy {
    for x in 0..cx {
      slab.extend(triangulate_cube(field, shape, x, y, z)?);
    }
  }
  Ok(slab)
}

/// Extract the isosurface of `field` as a flat-shaded triangle soup.
///
/// Any edge error aborts the whole extraction; no partial mesh is returned.
#[instrument(level = "debug", skip_all)]
pub fn extract(field: &DensityField, shape: &RoomShape) -> Result<Mesh, GenerateError> {
  let (_, _, cz) = field.dims().cubes();
  let slabs = (0..cz)
    .into_par_iter()
    .map(|z| march_slab(field, shape, z))
    .collect::<Result<Vec<_>, _>>()?;

  let total = slabs.iter().map(Vec::len).sum();
  let mut mesh = Mesh {
    triangles: Vec::with_capacity(total),
  };
  for slab in slabs {
    mesh.triangles.extend(slab);
  }
  Ok(mesh)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
