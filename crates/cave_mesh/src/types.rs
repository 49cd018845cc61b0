//! Core mesh types produced by the extractor.

use glam::{Vec2, Vec3};

/// One flat-shaded triangle.
///
/// The normal and uv are shared by all three corners, matching how the
/// extractor emits them per cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  /// Corner positions in room-local world units.
  pub positions: [Vec3; 3],

  /// Face normal (unit vector, or zero for a degenerate triangle).
  pub normal: Vec3,

  /// Texture coordinate derived from the owning cube.
  pub uv: Vec2,
}

impl Triangle {
  /// True when the face normal could not be computed.
  #[inline]
  pub fn is_degenerate(&self) -> bool {
    self.normal == Vec3::ZERO
  }
}

/// Output vertex for indexed upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Vertex position in room-local world units.
  pub position: [f32; 3],

  /// Surface normal (unit vector).
  pub normal: [f32; 3],

  /// Texture coordinate.
  pub uv: [f32; 2],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
      uv: [0.0; 2],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: Vec3,
  pub max: Vec3,
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: Vec3::INFINITY,
      max: Vec3::NEG_INFINITY,
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  /// Check whether a point lies inside (inclusive).
  pub fn contains(&self, point: Vec3) -> bool {
    self.min.cmple(point).all() && point.cmple(self.max).all()
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Triangle soup for one room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  pub triangles: Vec<Triangle>,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  pub fn vertex_count(&self) -> usize {
    self.triangles.len() * 3
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Bounds of all triangle corners. Empty meshes return [`MinMaxAABB::empty`].
  pub fn bounds(&self) -> MinMaxAABB {
    let mut aabb = MinMaxAABB::empty();
    for tri in &self.triangles {
      for p in tri.positions {
        aabb.encapsulate(p);
      }
    }
    aabb
  }

  /// Flatten into a vertex/index buffer pair.
  ///
  /// Vertices are not welded: each triangle keeps its own three vertices so
  /// flat normals survive the conversion.
  pub fn to_indexed(&self) -> IndexedMesh {
    let mut output = IndexedMesh {
      vertices: Vec::with_capacity(self.vertex_count()),
      indices: Vec::with_capacity(self.vertex_count()),
      bounds: self.bounds(),
    };

    for tri in &self.triangles {
      for p in tri.positions {
        output.indices.push(output.vertices.len() as u32);
        output.vertices.push(Vertex {
          position: p.to_array(),
          normal: tri.normal.to_array(),
          uv: tri.uv.to_array(),
        });
      }
    }

    output
  }
}

/// Indexed mesh ready for an engine upload.
#[derive(Default)]
pub struct IndexedMesh {
  /// Output vertices with positions, normals, and uvs.
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 per triangle).
  pub indices: Vec<u32>,

  /// Bounding box of all vertices.
  pub bounds: MinMaxAABB,
}

impl IndexedMesh {
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
