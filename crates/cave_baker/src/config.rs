//! Configuration parsing for cave room baking.

use anyhow::{Context, Result};
use cave_mesh::{CaveConfig, NoiseSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration for a bake.
///
/// Every table is optional; missing keys fall back to the library defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
	/// Room shape parameters.
	pub room: CaveConfig,
	/// Noise driving the room volume.
	pub noise: NoiseSettings,
	/// Noise pushed into the border band.
	pub border_noise: NoiseSettings,
}

impl Default for BakeConfig {
	fn default() -> Self {
		Self {
			room: CaveConfig::default(),
			noise: NoiseSettings::default(),
			border_noise: NoiseSettings::default().with_seed(1),
		}
	}
}

impl BakeConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::from_toml_str(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: BakeConfig =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		let room = &config.room;
		if !room.cell_size.is_finite() || room.cell_size <= 0.0 {
			anyhow::bail!("cell_size must be positive, got {}", room.cell_size);
		}
		for (name, extent) in [
			("room_width", room.room_width),
			("room_height", room.room_height),
			("room_depth", room.room_depth),
		] {
			if !extent.is_finite() || extent < room.cell_size {
				anyhow::bail!(
					"{} must be at least one cell ({}), got {}",
					name,
					room.cell_size,
					extent
				);
			}
		}
		for (name, noise) in [("noise", &config.noise), ("border_noise", &config.border_noise)] {
			if !noise.frequency.is_finite() {
				anyhow::bail!("{}.frequency must be finite", name);
			}
		}

		Ok(config)
	}

	/// Reseed both noise sources. The border noise gets `seed + 1` so the two
	/// fields stay decorrelated.
	pub fn with_seed(mut self, seed: i32) -> Self {
		self.noise.seed = seed;
		self.border_noise.seed = seed.wrapping_add(1);
		self
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
