//! Stage timing statistics for room generation.
//!
//! Feature-gated and runtime-toggled so collection costs nothing when
//! disabled.
//!
//! # Usage
//!
//! ```ignore
//! use cave_mesh::metrics::{GenerationMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // After a build:
//! metrics.record(&stats);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.capacity == 0 {
      return;
    }
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  pub fn sum(&self) -> u64 {
    self.buffer.iter().sum()
  }

  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(64)
  }
}

/// Timings and output size of a single build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Grid sample count.
  pub samples: usize,
  /// Emitted triangle count.
  pub triangles: usize,
  /// Density passes 1-4, in microseconds.
  pub density_us: u64,
  /// Marching Cubes extraction, in microseconds.
  pub extract_us: u64,
}

impl GenerationStats {
  pub fn total_us(&self) -> u64 {
    self.density_us + self.extract_us
  }
}

/// History of recent builds.
#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
  pub density_timings: RollingWindow<u64>,
  pub extract_timings: RollingWindow<u64>,
  pub triangle_counts: RollingWindow<u64>,
  /// Total builds recorded this session.
  pub total_generated: u64,
}

impl GenerationMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one build. No-op unless [`is_enabled`].
  pub fn record(&mut self, stats: &GenerationStats) {
    if !is_enabled() {
      return;
    }
    self.density_timings.push(stats.density_us);
    self.extract_timings.push(stats.extract_us);
    self.triangle_counts.push(stats.triangles as u64);
    self.total_generated += 1;
  }

  /// Reset the windows. The session total is cumulative and kept.
  pub fn reset(&mut self) {
    self.density_timings.clear();
    self.extract_timings.clear();
    self.triangle_counts.clear();
  }

  pub fn avg_density_us(&self) -> f64 {
    self.density_timings.average()
  }

  pub fn avg_extract_us(&self) -> f64 {
    self.extract_timings.average()
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
