//! cave_mesh - Framework/engine independent cave room meshing
//!
//! Builds a single cave room mesh from noise: a 3D density grid is sampled
//! from an injected noise source, sculpted into a room, and turned into a
//! triangle mesh with Marching Cubes.
//!
//! # Features
//!
//! - **Density sculpting**: four full-grid passes (sample, shape, carve,
//!   border noise) run in parallel over Z slabs
//! - **Ceiling dissolve**: densities fade out above a configurable ceiling,
//!   with a single-column heuristic dropping floating fragments
//! - **Seamless walls**: vertices on the outer XZ walls snap to grid points so
//!   neighbouring rooms meet without cracks
//! - **FastNoiseLite**: default noise sampler; any `Fn(f32, f32, f32) -> f32`
//!   works too
//!
//! # Example
//!
//! ```ignore
//! use cave_mesh::{CaveConfig, CaveGenerator, FastNoiseSampler};
//!
//! let config = CaveConfig::default().with_ceiling(0.6);
//! let noise = FastNoiseSampler::with_seed(1337);
//! let border = FastNoiseSampler::with_seed(7331);
//!
//! let mut generator = CaveGenerator::new();
//! let mesh = generator.generate(&config, &noise, &border)?;
//!
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```

pub use glam;

pub mod config;
pub mod constants;
pub mod easing;
pub mod edge_table;
pub mod error;
pub mod grid;
pub mod types;

// Re-export commonly used items
pub use config::CaveConfig;
pub use constants::CORNER_OFFSETS;
pub use easing::Easing;
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use error::GenerateError;
pub use grid::{DensityField, GridDimensions};
pub use types::{IndexedMesh, Mesh, MinMaxAABB, Triangle, Vertex};

// Density passes and the orphan heuristic
pub mod density;
pub use density::RoomShape;

// Isosurface extraction
pub mod marching_cubes;
pub use marching_cubes::interpolate_points;

// Entry point owning the reusable buffers
pub mod generator;
pub use generator::{generate, CaveGenerator};

// Noise sources
pub mod noise;
pub use noise::{FastNoiseSampler, NoiseSampler, NoiseSettings};

// Stage timing statistics
pub mod metrics;
pub use metrics::GenerationStats;
