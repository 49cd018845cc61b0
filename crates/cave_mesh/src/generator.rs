//! Room generation entry point.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ CaveGenerator::generate(config, noise, border_noise)                    │
//! │                                                                         │
//! │  CaveConfig ──► GridDimensions ──► DensityField::resize (reused)        │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  density::build  pass 1 sample / 2 shape / 3 carve / 4 border noise     │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  marching_cubes::extract  ──► Mesh (or GenerateError, no partial mesh)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use web_time::Instant;

use crate::config::CaveConfig;
use crate::density::{self, RoomShape};
use crate::error::GenerateError;
use crate::grid::{DensityField, GridDimensions};
use crate::marching_cubes;
use crate::metrics::{GenerationMetrics, GenerationStats};
use crate::noise::NoiseSampler;
use crate::types::Mesh;

/// Owns the reusable density and border scratch buffers.
///
/// Consecutive builds with the same grid length reuse both allocations.
#[derive(Debug, Default)]
pub struct CaveGenerator {
  field: DensityField,
  scratch: Vec<f32>,
  last_stats: Option<GenerationStats>,
  metrics: GenerationMetrics,
}

impl CaveGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build the room described by `config`.
  ///
  /// `noise` drives the room volume; `border_noise` is only sampled when
  /// border noise is enabled.
  pub fn generate<N, B>(
    &mut self,
    config: &CaveConfig,
    noise: &N,
    border_noise: &B,
  ) -> Result<Mesh, GenerateError>
  where
    N: NoiseSampler + Sync + ?Sized,
    B: NoiseSampler + ?Sized,
  {
    let _span = tracing::info_span!("generate_room").entered();

    let dims = GridDimensions::from_config(config);
    let shape = RoomShape::new(*config, dims);
    let reused = self.field.resize(dims);
    tracing::debug!(
      count_x = dims.count_x,
      count_y = dims.count_y,
      count_z = dims.count_z,
      reused,
      "grid"
    );

    let density_start = Instant::now();
    {
      let _span = tracing::info_span!("density_stage").entered();
      density::build(&mut self.field, &mut self.scratch, &shape, noise, border_noise);
    }
    let density_us = density_start.elapsed().as_micros() as u64;

    let extract_start = Instant::now();
    let mesh = {
      let _span = tracing::info_span!("extract_stage").entered();
      marching_cubes::extract(&self.field, &shape)?
    };
    let extract_us = extract_start.elapsed().as_micros() as u64;

    let stats = GenerationStats {
      samples: dims.len(),
      triangles: mesh.triangle_count(),
      density_us,
      extract_us,
    };
    tracing::debug!(
      triangles = stats.triangles,
      density_us,
      extract_us,
      "room generated"
    );
    self.metrics.record(&stats);
    self.last_stats = Some(stats);

    Ok(mesh)
  }

  /// The density field left by the last build.
  pub fn field(&self) -> &DensityField {
    &self.field
  }

  /// Stats of the last successful build.
  pub fn last_stats(&self) -> Option<GenerationStats> {
    self.last_stats
  }

  pub fn metrics(&self) -> &GenerationMetrics {
    &self.metrics
  }
}

/// One-shot build with fresh buffers.
pub fn generate<N, B>(config: &CaveConfig, noise: &N, border_noise: &B) -> Result<Mesh, GenerateError>
where
  N: NoiseSampler + Sync + ?Sized,
  B: NoiseSampler + ?Sized,
{
  CaveGenerator::new().generate(config, noise, border_noise)
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
