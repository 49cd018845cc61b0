//! Cave room baker.
//!
//! Generates a single cave room from a TOML description and writes it as a
//! Wavefront OBJ with positions, texture coordinates and face normals.
//!
//! Config layout:
//! - [room]: `CaveConfig` fields (size, ceiling, iso, curve, border, ...)
//! - [noise]: `NoiseSettings` for the room volume
//! - [border_noise]: `NoiseSettings` for the border band

mod config;
mod obj;

use anyhow::{Context, Result};
use cave_mesh::{CaveGenerator, FastNoiseSampler};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::BakeConfig;

/// Cave room mesh baker.
#[derive(Parser, Debug)]
#[command(name = "bake_cave")]
#[command(about = "Generates a cave room mesh and writes it as OBJ")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output OBJ path.
	#[arg(short, long)]
	output: PathBuf,

	/// Override the noise seed (the border noise uses seed + 1).
	#[arg(short, long)]
	seed: Option<i32>,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	tracing::info!("Loading config from: {}", args.config.display());
	let mut config = BakeConfig::load(&args.config)?;
	if let Some(seed) = args.seed {
		config = config.with_seed(seed);
	}

	let noise = FastNoiseSampler::new(config.noise);
	let border_noise = FastNoiseSampler::new(config.border_noise);

	let mut generator = CaveGenerator::new();
	let mesh = generator
		.generate(&config.room, &noise, &border_noise)
		.context("Room generation failed")?;

	if let Some(stats) = generator.last_stats() {
		tracing::info!(
			samples = stats.samples,
			triangles = stats.triangles,
			density_us = stats.density_us,
			extract_us = stats.extract_us,
			"generated room"
		);
	}
	if mesh.is_empty() {
		tracing::warn!("Room produced no surface; writing an empty mesh");
	}

	obj::save_obj(&mesh.to_indexed(), &args.output)?;
	tracing::info!("Output written to: {}", args.output.display());

	Ok(())
}
