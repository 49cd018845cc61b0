use super::*;

#[test]
fn test_defaults() {
  let config = CaveConfig::default();
  assert_eq!(config.room_width, 30.0);
  assert_eq!(config.cell_size, 1.0);
  assert_eq!(config.ceiling, 0.75);
  assert_eq!(config.iso_value, 0.5);
  assert_eq!(config.curve, 1.0);
  assert_eq!(config.ease_in, Easing::InCubic);
  assert_eq!(config.ease_out, Easing::OutCubic);
  assert_eq!(config.border_size, 1);
  assert_eq!(config.falloff_near_border, 2);
  assert!(config.show_noise && config.show_border && config.show_outer_walls);
  assert!(config.interpolate && config.remove_orphans);
  assert!(!config.use_border_noise && !config.pad_border);
}

#[test]
fn test_builder() {
  let config = CaveConfig::new()
    .with_room_size(10.0, 12.0, 14.0)
    .with_cell_size(0.5)
    .with_ceiling(1.0)
    .with_border_noise(true, 0.25)
    .with_border_size(3);

  assert_eq!(config.room_height, 12.0);
  assert_eq!(config.cell_size, 0.5);
  assert_eq!(config.ceiling, 1.0);
  assert!(config.use_border_noise);
  assert_eq!(config.smooth_border_noise, 0.25);
  assert_eq!(config.border_size, 3);
}

#[test]
fn test_output_offset() {
  let config = CaveConfig::new().with_border_size(2);
  assert_eq!(config.output_offset(), 0.0);
  assert_eq!(config.with_padded_border(true).output_offset(), 2.0);
}

#[test]
fn test_partial_toml_uses_defaults() {
  let config: CaveConfig = toml::from_str(
    r#"
      room_width = 12.0
      ceiling = 0.5
      ease_in = "in_quad"
      use_border_noise = true
    "#,
  )
  .expect("valid toml");

  assert_eq!(config.room_width, 12.0);
  assert_eq!(config.ceiling, 0.5);
  assert_eq!(config.ease_in, Easing::InQuad);
  assert!(config.use_border_noise);
  assert_eq!(config.room_height, 30.0, "Missing keys fall back to defaults");
  assert_eq!(config.ease_out, Easing::OutCubic);
}

#[test]
fn test_toml_roundtrip() {
  let config = CaveConfig::new().with_curve(1.5).with_padded_border(true);
  let text = toml::to_string(&config).expect("serializable");
  let back: CaveConfig = toml::from_str(&text).expect("parseable");
  assert_eq!(config, back);
}
