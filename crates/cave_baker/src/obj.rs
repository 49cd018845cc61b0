//! Wavefront OBJ output.
//!
//! Each triangle keeps its own three vertices, so every `f` record uses the
//! same index for position, texture coordinate and normal:
//!
//! ```text
//! v  x y z        one per triangle corner
//! vt u v          one per triangle corner
//! vn x y z        one per triangle corner (the face normal)
//! f  1/1/1 2/2/2 3/3/3
//! ```

use anyhow::{Context, Result};
use cave_mesh::IndexedMesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `mesh` as OBJ text.
pub fn write_obj<W: Write>(mesh: &IndexedMesh, mut out: W) -> std::io::Result<()> {
	writeln!(out, "# cave room")?;
	writeln!(
		out,
		"# {} vertices, {} triangles",
		mesh.vertices.len(),
		mesh.triangle_count()
	)?;

	for v in &mesh.vertices {
		writeln!(out, "v {} {} {}", v.position[0], v.position[1], v.position[2])?;
	}
	for v in &mesh.vertices {
		writeln!(out, "vt {} {}", v.uv[0], v.uv[1])?;
	}
	for v in &mesh.vertices {
		writeln!(out, "vn {} {} {}", v.normal[0], v.normal[1], v.normal[2])?;
	}

	for tri in mesh.indices.chunks_exact(3) {
		let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
		writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
	}

	out.flush()
}

/// Write `mesh` to an OBJ file at `path`.
pub fn save_obj(mesh: &IndexedMesh, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
	}
	let file =
		File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
	write_obj(mesh, BufWriter::new(file))
		.with_context(|| format!("Failed to write: {}", path.display()))
}

#[cfg(test)]
#[path = "obj_test.rs"]
mod obj_test;
