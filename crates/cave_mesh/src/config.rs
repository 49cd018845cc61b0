//! Room generation parameters.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Immutable parameter snapshot for one room build.
///
/// The generator copies this at the start of a build, so a caller can keep
/// editing its own copy while a mesh is produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
  /// Room extent along X in world units.
  pub room_width: f32,
  /// Room extent along Y in world units.
  pub room_height: f32,
  /// Room extent along Z in world units.
  pub room_depth: f32,
  /// Grid spacing in world units.
  pub cell_size: f32,

  /// Ceiling height as a fraction of the grid height. `>= 1` disables it.
  pub ceiling: f32,
  /// Density threshold between empty and solid.
  pub iso_value: f32,
  /// Shaping blend in `[0, 2]`: 0 = `ease_in`, 1 = linear, 2 = `ease_out`.
  pub curve: f32,
  /// Curve used toward `curve = 0`.
  pub ease_in: Easing,
  /// Curve used toward `curve = 2`.
  pub ease_out: Easing,
  /// Strength and height of the dissolve above the ceiling.
  pub falloff_above_ceiling: f32,
  /// Interpolate edge crossings; midpoints otherwise.
  pub interpolate: bool,
  /// Drop floating points above the ceiling with a gap beneath them.
  pub remove_orphans: bool,

  /// Blend a second noise into the border band.
  pub use_border_noise: bool,
  /// Border band width in cells.
  pub border_size: u32,
  /// Border noise smoothing in `[0, 1]`.
  pub smooth_border_noise: f32,
  /// Distance in cells over which density fades in from the border above
  /// the ceiling.
  pub falloff_near_border: u32,

  /// Sample noise at all; when off the field starts empty.
  pub show_noise: bool,
  /// Raise a solid ring inside the border band.
  pub show_border: bool,
  /// Carve the outermost XZ planes so the room is open for tiling.
  pub show_outer_walls: bool,
  /// Pad the grid by `2 * border_size` and re-centre the output on the room.
  pub pad_border: bool,
}

impl Default for CaveConfig {
  fn default() -> Self {
    Self {
      room_width: 30.0,
      room_height: 30.0,
      room_depth: 30.0,
      cell_size: 1.0,
      ceiling: 0.75,
      iso_value: 0.5,
      curve: 1.0,
      ease_in: Easing::InCubic,
      ease_out: Easing::OutCubic,
      falloff_above_ceiling: 0.5,
      interpolate: true,
      remove_orphans: true,
      use_border_noise: false,
      border_size: 1,
      smooth_border_noise: 0.5,
      falloff_near_border: 2,
      show_noise: true,
      show_border: true,
      show_outer_walls: true,
      pad_border: false,
    }
  }
}

impl CaveConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_room_size(mut self, width: f32, height: f32, depth: f32) -> Self {
    self.room_width = width;
    self.room_height = height;
    self.room_depth = depth;
    self
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }

  pub fn with_ceiling(mut self, ceiling: f32) -> Self {
    self.ceiling = ceiling;
    self
  }

  pub fn with_iso_value(mut self, iso: f32) -> Self {
    self.iso_value = iso;
    self
  }

  pub fn with_curve(mut self, curve: f32) -> Self {
    self.curve = curve;
    self
  }

  pub fn with_easing(mut self, ease_in: Easing, ease_out: Easing) -> Self {
    self.ease_in = ease_in;
    self.ease_out = ease_out;
    self
  }

  pub fn with_falloff_above_ceiling(mut self, falloff: f32) -> Self {
    self.falloff_above_ceiling = falloff;
    self
  }

  pub fn with_interpolate(mut self, interpolate: bool) -> Self {
    self.interpolate = interpolate;
    self
  }

  pub fn with_remove_orphans(mut self, remove: bool) -> Self {
    self.remove_orphans = remove;
    self
  }

  pub fn with_border_size(mut self, size: u32) -> Self {
    self.border_size = size;
    self
  }

  pub fn with_border_noise(mut self, enabled: bool, smoothing: f32) -> Self {
    self.use_border_noise = enabled;
    self.smooth_border_noise = smoothing;
    self
  }

  pub fn with_falloff_near_border(mut self, cells: u32) -> Self {
    self.falloff_near_border = cells;
    self
  }

  pub fn with_show_noise(mut self, show: bool) -> Self {
    self.show_noise = show;
    self
  }

  pub fn with_show_border(mut self, show: bool) -> Self {
    self.show_border = show;
    self
  }

  pub fn with_show_outer_walls(mut self, show: bool) -> Self {
    self.show_outer_walls = show;
    self
  }

  /// Bordered layout: pad the grid and re-centre the output.
  pub fn with_padded_border(mut self, pad: bool) -> Self {
    self.pad_border = pad;
    self
  }

  /// Grid offset subtracted from every emitted vertex before scaling.
  #[inline]
  pub fn output_offset(&self) -> f32 {
    if self.pad_border {
      self.border_size as f32
    } else {
      0.0
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
