use super::*;
use crate::config::CaveConfig;
use crate::grid::GridDimensions;
use crate::noise::{FastNoiseSampler, NoiseSampler};

fn setup(n: usize, config: CaveConfig) -> (DensityField, RoomShape) {
  let dims = GridDimensions::new(n, n, n);
  (DensityField::new(dims), RoomShape::new(config, dims))
}

// Reference scalar for test comparison
fn reference_mask(field: &DensityField, shape: &RoomShape, x: usize, y: usize, z: usize) -> u8 {
  let mut mask = 0u8;
  for i in 0..8 {
    let [dx, dy, dz] = CORNER_OFFSETS[i];
    if is_point_active(field, shape, x + dx, y + dy, z + dz) {
      mask |= 1 << i;
    }
  }
  mask
}

#[test]
fn test_all_empty() {
  let (field, shape) = setup(4, CaveConfig::default());
  assert_eq!(build(&field, &shape, 1, 1, 1), 0b00000000);
}

#[test]
fn test_all_solid() {
  let (mut field, shape) = setup(4, CaveConfig::default().with_ceiling(1.0));
  field.as_mut_slice().fill(1.0);
  assert_eq!(build(&field, &shape, 1, 1, 1), 0b11111111);
}

#[test]
fn test_single_corner_bits() {
  for (bit, offset) in CORNER_OFFSETS.iter().enumerate() {
    let (mut field, shape) = setup(4, CaveConfig::default().with_ceiling(1.0));
    field.set(1 + offset[0], 1 + offset[1], 1 + offset[2], 1.0);
    assert_eq!(
      build(&field, &shape, 1, 1, 1),
      1 << bit,
      "Corner {:?} should set bit {}",
      offset,
      bit
    );
  }
}

#[test]
fn test_mask_matches_point_activation() {
  let n = 12;
  let (mut field, shape) = setup(n, CaveConfig::default().with_ceiling(0.4));
  let noise = FastNoiseSampler::with_seed(3);
  for z in 0..n {
    for y in 0..n {
      for x in 0..n {
        let v = noise.sample_3d(x as f32 * 9.0, y as f32 * 9.0, z as f32 * 9.0);
        field.set(x, y, z, v * 0.5 + 0.5);
      }
    }
  }

  for z in 0..n - 1 {
    for y in 0..n - 1 {
      for x in 0..n - 1 {
        assert_eq!(
          build(&field, &shape, x, y, z),
          reference_mask(&field, &shape, x, y, z),
          "Mask mismatch at cube ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_orphan_corners_are_cleared() {
  let (mut field, shape) = setup(10, CaveConfig::default().with_ceiling(0.3));
  // Floating point well above the ceiling with nothing beneath
  field.set(5, 8, 5, 1.0);
  assert!(field.get(5, 8, 5) >= shape.config.iso_value);
  assert_eq!(build(&field, &shape, 5, 7, 5), 0, "Orphan should not activate its cube");
}
