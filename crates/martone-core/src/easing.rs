//! Easing curves mapping normalized progress in \[0, 1\] onto perceived
//! motion progress in \[0, 1\].

/// Easing curve applied to animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOutCubic,
    EaseOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value. Out-of-range input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => clamp_progress(t),
            Easing::EaseInOutCubic => ease_in_out_cubic(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
        }
    }
}

#[inline]
fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// `4t³` on the first half, mirrored on the second.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp_progress(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// `1 - (1 - t)³`
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_progress(t);
    1.0 - (1.0 - t).powi(3)
}

/// Linear blend between `from` and `to`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
