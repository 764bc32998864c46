use serde::{Deserialize, Serialize};

/// Easing curve applied to spin progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear (no easing)
    Linear,
    /// Quadratic ease-out
    EaseOutQuad,
    /// Cubic ease-out
    EaseOutCubic,
    /// Quartic ease-out: fast launch decelerating to a stop, the classic
    /// roulette-wheel feel
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve to a linear progress value (0.0-1.0)
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for curve in [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            Easing::EaseOutQuart,
        ] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::EaseOutQuart.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(1.5), 1.0);
    }

    #[test]
    fn quart_matches_reference_formula() {
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let expected = 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t) * (1.0 - t);
            assert!((Easing::EaseOutQuart.apply(t) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            Easing::EaseOutQuart,
        ] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = curve.apply(i as f64 / 100.0);
                assert!(v >= prev, "{curve:?} decreased at step {i}");
                prev = v;
            }
        }
    }
}
