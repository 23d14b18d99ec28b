use serde::{Deserialize, Serialize};

/// Remaps normalized progress `t` in `[0, 1]` onto eased progress.
///
/// Curves are expected to map 0 to 0 and 1 to 1, but are free to leave the
/// unit range in between (`BackOut` overshoots).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Start slow, accelerate.
    EaseIn,
    /// Start fast, decelerate.
    EaseOut,
    /// Slow in, slow out. Used for camera moves.
    EaseInOut,
    /// Smoothstep, `3t² - 2t³`.
    Smooth,
    /// Overshoots the target slightly before settling.
    BackOut,
    /// Any other curve. Not serializable.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl Easing {
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Smooth => t * t * (3.0 - 2.0 * t),
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            Easing::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Smooth,
        Easing::BackOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for curve in CURVES {
            assert!(curve.evaluate(0.0).abs() < 1e-6, "{curve:?} at 0");
            assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        let e = Easing::EaseInOut;
        assert!((e.evaluate(0.5) - 0.5).abs() < 1e-6);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((e.evaluate(t) + e.evaluate(1.0 - t) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (0..=100)
            .map(|i| Easing::BackOut.evaluate(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::EaseIn.evaluate(3.0), 1.0);
    }

    #[test]
    fn custom_curve_is_called() {
        let e = Easing::Custom(|t| t.sqrt());
        assert!((e.evaluate(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn deserializes_by_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: Easing,
        }
        let w: Wrapper = toml::from_str("easing = \"ease_in_out\"").unwrap();
        assert!(matches!(w.easing, Easing::EaseInOut));
    }
}
