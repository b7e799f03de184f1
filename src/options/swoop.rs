use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Swoop", inline)]
#[serde(default)]
/// Intro swoop from the establishing shot to the resting position.
pub struct SwoopOptions {
    /// Resting position the swoop ends at.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Swoop length in seconds.
    #[schemars(title = "Duration (s)", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Curve applied to the swoop progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for SwoopOptions {
    fn default() -> Self {
        Self {
            target: [-5.0, 2.0, 8.0],
            duration_secs: 4.0,
            easing: EasingFunction::SwoopBlend,
        }
    }
}

impl SwoopOptions {
    /// Swoop length as a [`Duration`]. Non-positive or NaN lengths give
    /// zero (the swoop lands on its first tick); lengths too large to
    /// represent saturate at [`Duration::MAX`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = self.duration_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_from_seconds() {
        let opts = SwoopOptions::default();
        assert_eq!(opts.duration(), Duration::from_secs(4));
    }

    #[test]
    fn duration_saturates_instead_of_overflowing() {
        let huge = SwoopOptions {
            duration_secs: 1e20,
            ..SwoopOptions::default()
        };
        assert_eq!(huge.duration(), Duration::MAX);

        let infinite = SwoopOptions {
            duration_secs: f32::INFINITY,
            ..SwoopOptions::default()
        };
        assert_eq!(infinite.duration(), Duration::MAX);
    }

    #[test]
    fn non_positive_duration_is_zero() {
        for secs in [0.0, -3.0, f32::NAN, f32::NEG_INFINITY] {
            let opts = SwoopOptions {
                duration_secs: secs,
                ..SwoopOptions::default()
            };
            assert_eq!(opts.duration(), Duration::ZERO, "{secs}");
        }
    }
}
