//! Error types for room generation.

use glam::UVec3;
use thiserror::Error;

/// Fatal contract violations. A build that hits one returns no mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
  /// An edge was asked for a surface crossing but neither endpoint is solid.
  #[error(
    "edge {a}-{b} has no solid endpoint (densities {density_a} and {density_b}, iso {iso})"
  )]
  EdgeBelowIso {
    a: UVec3,
    b: UVec3,
    density_a: f32,
    density_b: f32,
    iso: f32,
  },
}
