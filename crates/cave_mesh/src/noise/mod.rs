//! Coherent noise sources for the density builder.
//!
//! The builder only needs `sample(x, y, z) -> f32`, so noise is injected as a
//! [`NoiseSampler`]. Any `Fn(f32, f32, f32) -> f32` qualifies, which keeps
//! tests free of a real generator. [`FastNoiseSampler`] wraps FastNoiseLite
//! for actual rooms.
//!
//! Samplers must be deterministic for a fixed seed and `Sync`, since passes
//! sample Z slabs in parallel.

mod fast_noise;
pub use fast_noise::{FastNoiseSampler, FractalKind, NoiseKind, NoiseSettings};

/// A deterministic 3D scalar field.
pub trait NoiseSampler {
  /// Sample the field at a world-space point.
  fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F> NoiseSampler for F
where
  F: Fn(f32, f32, f32) -> f32,
{
  #[inline(always)]
  fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
    self(x, y, z)
  }
}
