//! Easing functions for camera animation curves.
//!
//! All curves map a progress ratio in [0, 1] to an eased ratio in [0, 1].
//! Inputs outside that range are clamped and non-finite inputs are treated
//! as the start of the curve.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in for the first half, cubic ease-out for the second.
    /// Formula: 2t² for t < 0.5, else 1 - 0.5·(1 - 2(t - 0.5))³
    SwoopBlend,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: the intro swoop blend.
    pub const DEFAULT: EasingFunction = EasingFunction::SwoopBlend;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; NaN counts as 0.
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SwoopBlend => swoop_blend(t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The intro curve. Both halves meet at exactly 0.5 when t = 0.5.
#[inline]
fn swoop_blend(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let rem = 1.0 - 2.0 * (t - 0.5);
        1.0 - 0.5 * rem * rem * rem
    }
}

/// Shorthand for [`EasingFunction::SwoopBlend`].
#[inline]
#[must_use]
pub fn ease(t: f32) -> f32 {
    EasingFunction::SwoopBlend.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swoop_blend_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn test_swoop_blend_continuous_at_half() {
        assert_eq!(ease(0.5), 0.5);
        let below = ease(0.5 - 1e-4);
        assert!((below - 0.5).abs() < 1e-3, "got {below}");
    }

    #[test]
    fn test_swoop_blend_monotonic() {
        let mut prev = ease(0.0);
        for i in 1..=1000 {
            let t = i as f32 / 1000.0;
            let v = ease(t);
            assert!(v >= prev, "ease({t}) = {v} dropped below {prev}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn test_swoop_blend_shape() {
        // Quadratic ease-in below the midpoint
        assert!((ease(0.25) - 0.125).abs() < 1e-6);
        // Cubic ease-out above: 1 - 0.5 * 0.5³
        assert!((ease(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        assert_eq!(ease(-3.0), 0.0);
        assert_eq!(ease(7.0), 1.0);
        assert_eq!(ease(f32::NAN), 0.0);
        assert_eq!(ease(f32::INFINITY), 1.0);
        assert_eq!(ease(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_variants() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_swoop_blend() {
        assert_eq!(EasingFunction::default(), EasingFunction::SwoopBlend);
    }

    #[test]
    fn test_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let w: Wrapper = toml::from_str(
            "easing = { kind = \"cubic_hermite\", c1 = 0.33, c2 = 1.0 }",
        )
        .unwrap();
        assert_eq!(w.easing, EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 });
    }
}
