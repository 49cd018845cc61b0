//! Easing curves and scalar interpolation helpers.
//!
//! Curves map `[0, 1]` onto `[0, 1]` (the `Back` family overshoots).
//! See <https://easings.net/> for plots.

use serde::{Deserialize, Serialize};

/// Overshoot used by the `Back` curves.
const BACK_AMOUNT: f32 = 1.70158;

/// Extra overshoot scaling for `InOutBack`.
const BACK_STABILIZE: f32 = 1.525;

/// Linear interpolation between `a` and `b`. `t` is not clamped.
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

/// Position of `value` between `a` and `b`. Not clamped.
///
/// Divides by `b - a`; callers guard the `a == b` case where it matters.
#[inline(always)]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
  (value - a) / (b - a)
}

/// Named easing curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
  #[default]
  Linear,
  InQuad,
  OutQuad,
  InOutQuad,
  InCubic,
  OutCubic,
  InOutCubic,
  InQuart,
  OutQuart,
  InOutQuart,
  InQuint,
  OutQuint,
  InOutQuint,
  InExpo,
  OutExpo,
  InOutExpo,
  InBack,
  OutBack,
  InOutBack,
}

impl Easing {
  /// Every curve, in declaration order.
  pub const ALL: [Easing; 19] = [
    Easing::Linear,
    Easing::InQuad,
    Easing::OutQuad,
    Easing::InOutQuad,
    Easing::InCubic,
    Easing::OutCubic,
    Easing::InOutCubic,
    Easing::InQuart,
    Easing::OutQuart,
    Easing::InOutQuart,
    Easing::InQuint,
    Easing::OutQuint,
    Easing::InOutQuint,
    Easing::InExpo,
    Easing::OutExpo,
    Easing::InOutExpo,
    Easing::InBack,
    Easing::OutBack,
    Easing::InOutBack,
  ];

  /// Evaluate the curve at `x`.
  pub fn apply(self, x: f32) -> f32 {
    match self {
      Easing::Linear => x,
      Easing::InQuad => x * x,
      Easing::OutQuad => 1.0 - (1.0 - x) * (1.0 - x),
      Easing::InOutQuad => in_out(x, 2.0, 2),
      Easing::InCubic => x * x * x,
      Easing::OutCubic => 1.0 - (1.0 - x).powi(3),
      Easing::InOutCubic => in_out(x, 4.0, 3),
      Easing::InQuart => x.powi(4),
      Easing::OutQuart => 1.0 - (1.0 - x).powi(4),
      Easing::InOutQuart => in_out(x, 8.0, 4),
      Easing::InQuint => x.powi(5),
      Easing::OutQuint => 1.0 - (1.0 - x).powi(5),
      Easing::InOutQuint => in_out(x, 16.0, 5),
      Easing::InExpo => {
        if x == 0.0 {
          0.0
        } else {
          2f32.powf(10.0 * x - 10.0)
        }
      }
      Easing::OutExpo => {
        if x == 1.0 {
          1.0
        } else {
          1.0 - 2f32.powf(-10.0 * x)
        }
      }
      Easing::InOutExpo => {
        if x == 0.0 {
          0.0
        } else if x == 1.0 {
          1.0
        } else if x < 0.5 {
          2f32.powf(20.0 * x - 10.0) / 2.0
        } else {
          (2.0 - 2f32.powf(-20.0 * x + 10.0)) / 2.0
        }
      }
      Easing::InBack => (BACK_AMOUNT + 1.0) * x * x * x - BACK_AMOUNT * x * x,
      Easing::OutBack => {
        1.0 + (BACK_AMOUNT + 1.0) * (x - 1.0).powi(3) + BACK_AMOUNT * (x - 1.0).powi(2)
      }
      Easing::InOutBack => {
        let c = BACK_AMOUNT * BACK_STABILIZE;
        if x < 0.5 {
          ((2.0 * x).powi(2) * ((c + 1.0) * 2.0 * x - c)) / 2.0
        } else {
          ((2.0 * x - 2.0).powi(2) * ((c + 1.0) * (x * 2.0 - 2.0) + c) + 2.0) / 2.0
        }
      }
    }
  }
}

/// Symmetric in/out polynomial: `scale * x^n` below half, mirrored above.
#[inline]
fn in_out(x: f32, scale: f32, n: i32) -> f32 {
  if x < 0.5 {
    scale * x.powi(n)
  } else {
    1.0 - (-2.0 * x + 2.0).powi(n) / 2.0
  }
}

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;
