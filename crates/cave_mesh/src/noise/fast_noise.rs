//! FastNoiseLite-backed sampler.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use serde::{Deserialize, Serialize};

use super::NoiseSampler;

/// Base noise algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
  OpenSimplex2,
  #[default]
  OpenSimplex2S,
  Cellular,
  Perlin,
  ValueCubic,
  Value,
}

impl From<NoiseKind> for NoiseType {
  fn from(kind: NoiseKind) -> Self {
    match kind {
      NoiseKind::OpenSimplex2 => NoiseType::OpenSimplex2,
      NoiseKind::OpenSimplex2S => NoiseType::OpenSimplex2S,
      NoiseKind::Cellular => NoiseType::Cellular,
      NoiseKind::Perlin => NoiseType::Perlin,
      NoiseKind::ValueCubic => NoiseType::ValueCubic,
      NoiseKind::Value => NoiseType::Value,
    }
  }
}

/// Fractal layering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKind {
  None,
  #[default]
  FBm,
  Ridged,
  PingPong,
}

impl From<FractalKind> for FractalType {
  fn from(kind: FractalKind) -> Self {
    match kind {
      FractalKind::None => FractalType::None,
      FractalKind::FBm => FractalType::FBm,
      FractalKind::Ridged => FractalType::Ridged,
      FractalKind::PingPong => FractalType::PingPong,
    }
  }
}

/// Parameters for one noise source.
///
/// Defaults follow the usual engine FastNoiseLite resource: smooth simplex,
/// frequency 0.01, five FBm octaves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
  pub seed: i32,
  pub noise_kind: NoiseKind,
  pub frequency: f32,
  pub fractal_kind: FractalKind,
  pub fractal_octaves: i32,
  pub fractal_lacunarity: f32,
  pub fractal_gain: f32,
}

impl Default for NoiseSettings {
  fn default() -> Self {
    Self {
      seed: 0,
      noise_kind: NoiseKind::default(),
      frequency: 0.01,
      fractal_kind: FractalKind::default(),
      fractal_octaves: 5,
      fractal_lacunarity: 2.0,
      fractal_gain: 0.5,
    }
  }
}

impl NoiseSettings {
  pub fn with_seed(mut self, seed: i32) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_noise_kind(mut self, kind: NoiseKind) -> Self {
    self.noise_kind = kind;
    self
  }

  pub fn with_fractal(mut self, kind: FractalKind, octaves: i32) -> Self {
    self.fractal_kind = kind;
    self.fractal_octaves = octaves;
    self
  }
}

/// [`NoiseSampler`] over a configured `FastNoiseLite`.
pub struct FastNoiseSampler {
  noise: FastNoiseLite,
  settings: NoiseSettings,
}

impl FastNoiseSampler {
  pub fn new(settings: NoiseSettings) -> Self {
    let mut noise = FastNoiseLite::with_seed(settings.seed);
    noise.set_noise_type(Some(settings.noise_kind.into()));
    noise.set_frequency(Some(settings.frequency));
    noise.set_fractal_type(Some(settings.fractal_kind.into()));
    noise.set_fractal_octaves(Some(settings.fractal_octaves));
    noise.set_fractal_lacunarity(Some(settings.fractal_lacunarity));
    noise.set_fractal_gain(Some(settings.fractal_gain));
    Self { noise, settings }
  }

  /// Default settings with a specific seed.
  pub fn with_seed(seed: i32) -> Self {
    Self::new(NoiseSettings::default().with_seed(seed))
  }

  pub fn settings(&self) -> &NoiseSettings {
    &self.settings
  }
}

impl NoiseSampler for FastNoiseSampler {
  #[inline]
  fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
    self.noise.get_noise_3d(x, y, z)
  }
}
