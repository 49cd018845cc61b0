use super::*;
use crate::config::CaveConfig;
use crate::easing::Easing;
use crate::grid::GridDimensions;
use crate::noise::FastNoiseSampler;

fn room(n: usize, config: CaveConfig) -> (DensityField, RoomShape) {
  let config = config.with_room_size(n as f32, n as f32, n as f32);
  let dims = GridDimensions::from_config(&config);
  (DensityField::new(dims), RoomShape::new(config, dims))
}

fn no_border_noise(_x: f32, _y: f32, _z: f32) -> f32 {
  0.0
}

#[test]
fn test_sample_scales_by_cell_size() {
  let (mut field, shape) = room(6, CaveConfig::default().with_cell_size(0.5));
  let range = sample_noise(&mut field, &shape, &|x: f32, y: f32, z: f32| x + 10.0 * y + 100.0 * z);

  // 12 samples per axis at spacing 0.5
  assert_eq!(field.dims().count_x, 12);
  assert_eq!(field.get(3, 0, 0), 1.5);
  assert_eq!(field.get(0, 2, 0), 10.0);
  assert_eq!(range.min, 0.0);
  assert_eq!(range.max, 5.5 + 55.0 + 550.0);
}

#[test]
fn test_sample_hidden_noise_is_zero() {
  let (mut field, shape) = room(6, CaveConfig::default().with_show_noise(false));
  field.as_mut_slice().fill(7.0);
  let range = sample_noise(&mut field, &shape, &|_: f32, _: f32, _: f32| 1.0_f32);

  assert!(field.as_slice().iter().all(|&v| v == 0.0));
  assert_eq!(range, NoiseRange { min: 0.0, max: 0.0 });
}

#[test]
fn test_normalize_range() {
  let range = NoiseRange { min: -1.0, max: 1.0 };
  assert_eq!(range.normalize(-1.0), 0.0);
  assert_eq!(range.normalize(0.0), 0.5);
  assert_eq!(range.normalize(5.0), 1.0);

  let flat = NoiseRange { min: 0.3, max: 0.3 };
  assert_eq!(flat.normalize(0.3), 0.0, "Flat range maps to zero");
  assert_eq!(NoiseRange::EMPTY.normalize(1.0), 0.0);
}

#[test]
fn test_curve_blend_endpoints() {
  let dims = GridDimensions::new(4, 4, 4);
  let inputs = [0.0, 0.25, 0.5, 0.75, 1.0];

  for curve in [0.0, 1.0, 2.0] {
    let shape = RoomShape::new(CaveConfig::default().with_curve(curve), dims);
    for x in inputs {
      let expected = match curve as u32 {
        0 => Easing::InCubic.apply(x),
        1 => x,
        _ => Easing::OutCubic.apply(x),
      };
      let got = apply_curve(&shape, x);
      assert!(
        (got - expected).abs() < 1e-6,
        "curve {} at {}: expected {}, got {}",
        curve,
        x,
        expected,
        got
      );
    }
  }
}

#[test]
fn test_curve_blend_is_monotonic_in_curve() {
  let dims = GridDimensions::new(4, 4, 4);
  let mut prev = f32::NEG_INFINITY;
  for step in 0..=8 {
    let curve = step as f32 * 0.25;
    let shape = RoomShape::new(CaveConfig::default().with_curve(curve), dims);
    let value = apply_curve(&shape, 0.4);
    assert!(value >= prev, "Raising curve should not lower 0.4 (curve {})", curve);
    prev = value;
  }
}

#[test]
fn test_shape_noise_normalizes_below_full_ceiling() {
  let (mut field, shape) = room(6, CaveConfig::default().with_ceiling(1.0));
  let range = sample_noise(&mut field, &shape, &|x: f32, _: f32, _: f32| x);
  shape_noise(&mut field, &shape, range);

  assert_eq!(field.get(0, 3, 3), 0.0);
  assert_eq!(field.get(5, 3, 3), 1.0);
  assert!((field.get(2, 3, 3) - 0.4).abs() < 1e-6);
}

#[test]
fn test_shape_noise_dissolves_above_ceiling() {
  let config = CaveConfig::default()
    .with_ceiling(0.25)
    .with_falloff_above_ceiling(0.0);
  let (mut field, shape) = room(20, config);
  let range = sample_noise(&mut field, &shape, &|_: f32, _: f32, _: f32| 0.8_f32);
  shape_noise(&mut field, &shape, range);

  // falloff 0: rows above the ceiling collapse straight to lerp(0, .., 0) = 0
  assert_eq!(shape.above_ceiling_amount(10), 1.0);
  assert_eq!(field.get(10, 10, 10), 0.0);
}

#[test]
fn test_shape_noise_skipped_when_hidden() {
  let (mut field, shape) = room(6, CaveConfig::default().with_show_noise(false));
  field.as_mut_slice().fill(0.9);
  shape_noise(&mut field, &shape, NoiseRange { min: 0.0, max: 1.0 });
  assert!(field.as_slice().iter().all(|&v| v == 0.9));
}

#[test]
fn test_carve_outer_planes() {
  let shape = RoomShape::new(CaveConfig::default(), GridDimensions::new(10, 10, 10));
  let below = shape.config.iso_value - ISO_MARGIN;

  assert_eq!(carve_point(&shape, 0, 5, 5, 1.0), below);
  assert_eq!(carve_point(&shape, 5, 9, 5, 1.0), below);
  assert_eq!(carve_point(&shape, 5, 0, 5, 0.2), 0.2, "Carving never raises");

  let open = RoomShape::new(
    CaveConfig::default().with_show_outer_walls(false),
    GridDimensions::new(10, 10, 10),
  );
  assert_ne!(carve_point(&open, 0, 5, 5, 1.0), below, "XZ plane kept when walls hidden");
  assert_eq!(carve_point(&open, 5, 0, 5, 1.0), below, "Y planes always carved");
}

#[test]
fn test_border_ring_closure() {
  let (mut field, shape) = room(10, CaveConfig::default().with_border_size(1));
  let noise = FastNoiseSampler::with_seed(7);
  let mut scratch = Vec::new();
  build(&mut field, &mut scratch, &shape, &noise, &no_border_noise);

  let n = 10;
  let raised = shape.config.iso_value + ISO_MARGIN;
  for z in 1..n - 1 {
    for y in 1..n - 1 {
      for x in 1..n - 1 {
        let ring = x <= 1 || z <= 1 || x >= n - 2 || z >= n - 2;
        if ring && shape.is_below_ceiling(y) {
          assert!(
            field.get(x, y, z) >= raised,
            "({}, {}, {}) = {} below ring level",
            x,
            y,
            z,
            field.get(x, y, z)
          );
        }
      }
    }
  }
}

#[test]
fn test_hidden_noise_gives_pure_carving() {
  let (mut field, shape) = room(10, CaveConfig::default().with_show_noise(false));
  let mut scratch = Vec::new();
  build(
    &mut field,
    &mut scratch,
    &shape,
    &|_: f32, _: f32, _: f32| 1.0_f32,
    &no_border_noise,
  );

  let raised = shape.config.iso_value + ISO_MARGIN;
  for z in 0..10 {
    for y in 0..10 {
      for x in 0..10 {
        let expected = if shape.is_at_boundary_xz(x, z) || shape.is_at_boundary_y(y) {
          0.0
        } else if shape.is_at_border(x, y, z) && shape.is_below_ceiling(y) {
          raised
        } else {
          0.0
        };
        assert_eq!(field.get(x, y, z), expected, "({}, {}, {})", x, y, z);
      }
    }
  }
}

#[test]
fn test_border_falloff_above_ceiling() {
  let config = CaveConfig::default()
    .with_ceiling(0.3)
    .with_falloff_above_ceiling(1.0)
    .with_falloff_near_border(4);
  let shape = RoomShape::new(config, GridDimensions::new(20, 20, 20));
  let y = 7; // just above ceiling row 5.7
  assert!(!shape.is_below_ceiling(y));

  // Right at the band edge the value is pushed to the carved level
  let near = carve_point(&shape, 2, y, 10, 1.0);
  assert_eq!(near, shape.config.iso_value - ISO_MARGIN);

  // Deep inside, less is removed
  let far = carve_point(&shape, 8, y, 10, 1.0);
  assert!(far > near, "Falloff should fade with distance ({} vs {})", far, near);
}
