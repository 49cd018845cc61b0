use super::*;
use crate::config::CaveConfig;
use crate::grid::GridDimensions;

fn setup(config: CaveConfig) -> (DensityField, RoomShape) {
  let dims = GridDimensions::new(8, 8, 8);
  (DensityField::new(dims), RoomShape::new(config, dims))
}

#[test]
fn test_boundary_point_is_returned_exactly() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(0, 3, 4);
  let b = UVec3::new(1, 3, 4);
  // Densities that would interpolate to 0.25 along the edge
  field.set(0, 3, 4, 0.0);
  field.set(1, 3, 4, 2.0);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert_eq!(p, a.as_vec3());

  // Argument order does not matter
  let p = interpolate_points(&field, &shape, b, a).expect("valid edge");
  assert_eq!(p, a.as_vec3());
}

#[test]
fn test_far_boundary_is_returned_exactly() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(3, 2, 6);
  let b = UVec3::new(3, 2, 7);
  field.set(3, 2, 6, 1.0);
  field.set(3, 2, 7, 0.0);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert_eq!(p, b.as_vec3());
}

#[test]
fn test_edge_along_boundary_plane_interpolates() {
  let (mut field, shape) = setup(CaveConfig::default());
  // Both on x=0, vertical edge
  let a = UVec3::new(0, 2, 3);
  let b = UVec3::new(0, 3, 3);
  field.set(0, 2, 3, 1.0);
  field.set(0, 3, 3, 0.0);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert!((p - Vec3::new(0.0, 2.5, 3.0)).length() < 1e-6, "got {:?}", p);
}

#[test]
fn test_linear_interpolation() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(3, 3, 3);
  let b = UVec3::new(4, 3, 3);
  field.set(3, 3, 3, 0.0);
  field.set(4, 3, 3, 2.0);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert!((p.x - 3.25).abs() < 1e-6);
  assert_eq!(p.y, 3.0);
  assert_eq!(p.z, 3.0);
}

#[test]
fn test_endpoint_at_iso() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(3, 3, 3);
  let b = UVec3::new(3, 4, 3);
  field.set(3, 3, 3, 0.2);
  field.set(3, 4, 3, 0.5);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert_eq!(p, b.as_vec3());
}

#[test]
fn test_midpoint_without_interpolation() {
  let (mut field, shape) = setup(CaveConfig::default().with_interpolate(false));
  let a = UVec3::new(3, 3, 3);
  let b = UVec3::new(3, 3, 4);
  field.set(3, 3, 3, 0.9);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert_eq!(p, Vec3::new(3.0, 3.0, 3.5));
}

#[test]
fn test_equal_densities_give_midpoint() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(2, 2, 2);
  let b = UVec3::new(3, 2, 2);
  field.set(2, 2, 2, 0.8);
  field.set(3, 2, 2, 0.8);

  let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
  assert_eq!(p, Vec3::new(2.5, 2.0, 2.0));
}

#[test]
fn test_result_stays_on_segment() {
  let (mut field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(2, 2, 2);
  let b = UVec3::new(2, 3, 2);
  for (da, db) in [(0.9, 0.1), (0.6, 5.0), (-3.0, 0.51), (0.5001, 0.4999)] {
    field.set(2, 2, 2, da);
    field.set(2, 3, 2, db);
    let p = interpolate_points(&field, &shape, a, b).expect("valid edge");
    assert_eq!(p.x, 2.0);
    assert_eq!(p.z, 2.0);
    assert!((2.0..=3.0).contains(&p.y), "{} not on segment for ({}, {})", p.y, da, db);
  }
}

#[test]
fn test_no_solid_endpoint_is_error() {
  let (field, shape) = setup(CaveConfig::default());
  let a = UVec3::new(3, 3, 3);
  let b = UVec3::new(4, 3, 3);

  let err = interpolate_points(&field, &shape, a, b).expect_err("both below iso");
  assert!(matches!(err, GenerateError::EdgeBelowIso { .. }));
  assert!(err.to_string().contains("no solid endpoint"));
}
