use super::*;

#[test]
fn test_from_config_floors() {
  let config = CaveConfig::default()
    .with_room_size(10.0, 7.5, 3.9)
    .with_cell_size(1.0);
  let dims = GridDimensions::from_config(&config);
  assert_eq!(dims, GridDimensions::new(10, 7, 3));
}

#[test]
fn test_from_config_cell_size() {
  let config = CaveConfig::default()
    .with_room_size(30.0, 30.0, 30.0)
    .with_cell_size(0.5);
  let dims = GridDimensions::from_config(&config);
  assert_eq!(dims, GridDimensions::new(60, 60, 60));
}

#[test]
fn test_from_config_border_padding() {
  let mut config = CaveConfig::default()
    .with_room_size(10.0, 10.0, 10.0)
    .with_border_size(2);
  config.pad_border = true;
  let dims = GridDimensions::from_config(&config);
  assert_eq!(dims, GridDimensions::new(14, 14, 14));
}

#[test]
fn test_degenerate_sizes_are_empty() {
  for cell in [0.0, -1.0, f32::NAN, f32::INFINITY] {
    let config = CaveConfig::default().with_cell_size(cell);
    let dims = GridDimensions::from_config(&config);
    assert!(dims.is_empty(), "Cell size {} should give an empty grid", cell);
  }

  let config = CaveConfig::default().with_room_size(-5.0, 10.0, 10.0);
  assert!(GridDimensions::from_config(&config).is_empty());
}

#[test]
fn test_tiny_cell_size_is_empty() {
  for cell in [1e-9, 1e-6, 1e-3, f32::MIN_POSITIVE] {
    let config = CaveConfig::default().with_cell_size(cell);
    let dims = GridDimensions::from_config(&config);
    assert!(dims.is_empty(), "Cell size {} should not size a huge grid", cell);
  }

  let config = CaveConfig::default()
    .with_border_size(u32::MAX)
    .with_padded_border(true);
  assert!(GridDimensions::from_config(&config).is_empty());

  // Infinite extents hit the cap rather than collapsing to the padding
  let config = CaveConfig::default()
    .with_room_size(f32::INFINITY, 16.0, 16.0)
    .with_border_size(2)
    .with_padded_border(true);
  assert!(GridDimensions::from_config(&config).is_empty());
}

#[test]
fn test_sample_cap_is_inclusive() {
  let at_cap = CaveConfig::default().with_room_size(1024.0, 512.0, 512.0);
  let dims = GridDimensions::from_config(&at_cap);
  assert_eq!(dims.len(), MAX_GRID_SAMPLES);

  let over_cap = at_cap.with_room_size(1025.0, 512.0, 512.0);
  assert!(GridDimensions::from_config(&over_cap).is_empty());
}

#[test]
fn test_index_covers_buffer_once() {
  let dims = GridDimensions::new(5, 3, 4);
  let mut seen = vec![false; dims.len()];
  for z in 0..4 {
    for y in 0..3 {
      for x in 0..5 {
        let idx = dims.index(x, y, z);
        assert!(!seen[idx], "Index {} hit twice", idx);
        seen[idx] = true;
      }
    }
  }
  assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_index_is_x_major_contiguous() {
  let dims = GridDimensions::new(4, 3, 2);
  assert_eq!(dims.index(1, 0, 0), 1);
  assert_eq!(dims.index(0, 1, 0), 4);
  assert_eq!(dims.index(0, 0, 1), dims.slab_len());
}

#[test]
fn test_cubes_never_underflow() {
  assert_eq!(GridDimensions::new(0, 1, 2).cubes(), (0, 0, 1));
}

#[test]
fn test_field_resize_reuses_allocation() {
  let mut field = DensityField::new(GridDimensions::new(4, 4, 4));
  let ptr = field.buffer_ptr();

  // Same length, different shape: reuse
  assert!(!field.resize(GridDimensions::new(8, 4, 2)));
  assert_eq!(field.buffer_ptr(), ptr);
  assert_eq!(field.dims(), GridDimensions::new(8, 4, 2));

  assert!(field.resize(GridDimensions::new(5, 5, 5)));
  assert_eq!(field.as_slice().len(), 125);
}

#[test]
fn test_field_get_set() {
  let mut field = DensityField::new(GridDimensions::new(3, 3, 3));
  field.set(1, 2, 0, 0.75);
  assert_eq!(field.get(1, 2, 0), 0.75);
  assert_eq!(field.as_slice()[7], 0.75);
}

#[test]
fn test_from_values_checks_length() {
  let dims = GridDimensions::new(2, 2, 2);
  assert!(DensityField::from_values(dims, vec![0.0; 8]).is_some());
  assert!(DensityField::from_values(dims, vec![0.0; 7]).is_none());
}
