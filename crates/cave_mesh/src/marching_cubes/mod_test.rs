use super::*;
use crate::config::CaveConfig;
use crate::density;
use crate::grid::GridDimensions;
use crate::noise::FastNoiseSampler;

fn single_point(n: usize, config: CaveConfig, at: usize) -> (DensityField, RoomShape) {
  let dims = GridDimensions::new(n, n, n);
  let mut field = DensityField::new(dims);
  field.set(at, at, at, 1.0);
  let config = config.with_ceiling(1.0).with_remove_orphans(false);
  (field, RoomShape::new(config, dims))
}

fn noise_room(n: usize, seed: i32) -> (DensityField, RoomShape) {
  let config = CaveConfig::default()
    .with_room_size(n as f32, n as f32, n as f32)
    .with_ceiling(0.6);
  let dims = GridDimensions::from_config(&config);
  let shape = RoomShape::new(config, dims);
  let mut field = DensityField::new(dims);
  let mut scratch = Vec::new();
  let noise = FastNoiseSampler::with_seed(seed);
  let border = FastNoiseSampler::with_seed(seed + 1);
  density::build(&mut field, &mut scratch, &shape, &noise, &border);
  (field, shape)
}

#[test]
fn test_empty_grid_gives_empty_mesh() {
  let dims = GridDimensions::new(0, 0, 0);
  let field = DensityField::new(dims);
  let shape = RoomShape::new(CaveConfig::default(), dims);
  let mesh = extract(&field, &shape).expect("empty grid");
  assert!(mesh.is_empty());
}

#[test]
fn test_single_sample_layer_gives_empty_mesh() {
  let dims = GridDimensions::new(8, 1, 8);
  let mut field = DensityField::new(dims);
  field.as_mut_slice().fill(1.0);
  let shape = RoomShape::new(CaveConfig::default(), dims);
  let mesh = extract(&field, &shape).expect("flat grid");
  assert!(mesh.is_empty());
}

#[test]
fn test_uniform_field_gives_empty_mesh() {
  let dims = GridDimensions::new(6, 6, 6);
  let mut field = DensityField::new(dims);
  field.as_mut_slice().fill(1.0);
  let shape = RoomShape::new(CaveConfig::default().with_ceiling(1.0), dims);
  assert!(extract(&field, &shape).expect("solid grid").is_empty());
}

#[test]
fn test_single_point_octahedron() {
  let (field, shape) = single_point(5, CaveConfig::default(), 2);
  let mesh = extract(&field, &shape).expect("valid field");

  // One corner active in each of the 8 surrounding cubes
  assert_eq!(mesh.triangle_count(), 8);

  let centre = Vec3::splat(2.0);
  for tri in &mesh.triangles {
    for p in tri.positions {
      // Densities 1 and 0 around iso 0.5 put every crossing half way
      assert!((p.distance(centre) - 0.5).abs() < 1e-6, "vertex {:?}", p);
    }
  }

  // Faces look out of the solid point into the empty room
  for tri in &mesh.triangles {
    let centroid = (tri.positions[0] + tri.positions[1] + tri.positions[2]) / 3.0;
    assert!(
      tri.normal.dot(centroid - centre) > 0.0,
      "normal {:?} points into the solid point",
      tri.normal
    );
  }
}

#[test]
fn test_cube_uv() {
  let (field, shape) = single_point(5, CaveConfig::default(), 2);
  let tris = triangulate_cube(&field, &shape, 1, 2, 1).expect("valid cube");
  assert_eq!(tris.len(), 1);
  assert_eq!(tris[0].uv, Vec2::new(2.0 / 5.0, 3.0 / 5.0));
}

#[test]
fn test_positions_scale_by_cell_size() {
  let (field, shape) = single_point(5, CaveConfig::default().with_cell_size(2.0), 2);
  let bounds = extract(&field, &shape).expect("valid field").bounds();
  assert_eq!(bounds.min, Vec3::splat(3.0));
  assert_eq!(bounds.max, Vec3::splat(5.0));
}

#[test]
fn test_padded_output_is_recentred() {
  let config = CaveConfig::default()
    .with_cell_size(2.0)
    .with_border_size(2)
    .with_padded_border(true);
  let (field, shape) = single_point(9, config, 4);
  let bounds = extract(&field, &shape).expect("valid field").bounds();

  // Grid point 4 maps to (4 - 2) * 2 = 4
  assert_eq!(bounds.min, Vec3::splat(3.0));
  assert_eq!(bounds.max, Vec3::splat(5.0));
}

#[test]
fn test_deterministic() {
  let (field_a, shape_a) = noise_room(16, 11);
  let (field_b, shape_b) = noise_room(16, 11);
  assert_eq!(field_a.as_slice(), field_b.as_slice());

  let a = extract(&field_a, &shape_a).expect("first run");
  let b = extract(&field_b, &shape_b).expect("second run");
  assert!(!a.is_empty());
  assert_eq!(a, b);
}

#[test]
fn test_parallel_matches_serial_order() {
  let (field, shape) = noise_room(14, 5);
  let parallel = extract(&field, &shape).expect("parallel");

  let (cx, cy, cz) = field.dims().cubes();
  let mut serial = Vec::new();
  for z in 0..cz {
    for y in 0..cy {
      for x in 0..cx {
        serial.extend(triangulate_cube(&field, &shape, x, y, z).expect("serial"));
      }
    }
  }
  assert_eq!(parallel.triangles, serial);
}

#[test]
fn test_triangle_validity() {
  let (field, shape) = noise_room(16, 23);
  let mesh = extract(&field, &shape).expect("valid field");
  assert!(!mesh.is_empty());

  for tri in &mesh.triangles {
    assert!(tri.positions.iter().all(|p| p.is_finite()));
    let len = tri.normal.length();
    assert!(len == 0.0 || (len - 1.0).abs() < 1e-4, "normal length {}", len);
    if !tri.is_degenerate() {
      let [a, b, c] = tri.positions;
      assert!(a != b && b != c && a != c, "non-zero normal on collapsed triangle");
    }
    assert!(tri.uv.x > 0.0 && tri.uv.x <= 1.0);
    assert!(tri.uv.y > 0.0 && tri.uv.y <= 1.0);
  }
}

#[test]
fn test_vertices_snap_to_outer_walls() {
  let (field, shape) = noise_room(16, 31);
  let n = field.dims().count_x as f32;
  let mesh = extract(&field, &shape).expect("valid field");

  for tri in &mesh.triangles {
    for p in tri.positions {
      // Crossings between the wall and the first interior row land on the
      // wall, except along edges lying in the perpendicular wall itself
      let on_z_wall = p.z == 0.0 || p.z == n - 1.0;
      let on_x_wall = p.x == 0.0 || p.x == n - 1.0;
      if p.x > 0.0 && p.x < 1.0 || p.x > n - 2.0 && p.x < n - 1.0 {
        assert!(on_z_wall, "x crossing {:?} off the wall", p);
      }
      if p.z > 0.0 && p.z < 1.0 || p.z > n - 2.0 && p.z < n - 1.0 {
        assert!(on_x_wall, "z crossing {:?} off the wall", p);
      }
    }
  }
}
