/// Timing curves for animated scrolling.
///
/// The ease-out variants are true deceleration curves: monotone on [0, 1],
/// `f(0) = 0`, `f(1) = 1`, with a strictly decreasing rate of change. They
/// never overshoot the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// `f(t) = 1 - (1 - t)^3`
    #[default]
    EaseOutCubic,
    /// `f(t) = 1 - (1 - t)^5`. Steeper initial velocity than cubic.
    EaseOutQuint,
}

impl Easing {
    /// Maps a progress value `t` in [0, 1] to an eased fraction in [0, 1].
    ///
    /// Inputs outside [0, 1] are clamped.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseOutQuint => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv * inv
            }
        }
    }
}
