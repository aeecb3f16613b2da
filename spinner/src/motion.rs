//! Two-phase wheel animation contract.
//!
//! A wheel is either at rest (rotation 0°, no transition) or animating from
//! 0° toward a spin target over a fixed duration with an ease-in/ease-out
//! curve. The rest baseline is always 0°: after settlement the wheel snaps
//! back instead of staying where it stopped, so rotation never accumulates
//! across spins.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::SPIN_EASING;

/// Transition parameters for an in-flight spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinTransition {
    pub duration_secs: f64,
}

/// Visual rotation state of the wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelMotion {
    /// Rotation the wheel is at (rest) or heading to (spinning), in degrees.
    pub rotation_deg: f64,
    pub transition: Option<SpinTransition>,
}

impl Default for WheelMotion {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl WheelMotion {
    /// Wheel at the 0° baseline with no transition.
    #[must_use]
    pub fn at_rest() -> Self {
        Self { rotation_deg: 0.0, transition: None }
    }

    /// Begin rotating from the rest baseline to `target_deg` over
    /// `duration_secs`. Negative or non-finite durations snap immediately.
    #[must_use]
    pub fn animate_to(target_deg: f64, duration_secs: f64) -> Self {
        let duration_secs = if duration_secs.is_finite() { duration_secs.max(0.0) } else { 0.0 };
        Self { rotation_deg: target_deg, transition: Some(SpinTransition { duration_secs }) }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// CSS `transform` value for the wheel element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("rotate({}deg)", self.rotation_deg)
    }

    /// CSS `transition` value for the wheel element.
    #[must_use]
    pub fn css_transition(&self) -> String {
        match self.transition {
            Some(SpinTransition { duration_secs }) => {
                let (x1, y1, x2, y2) = SPIN_EASING;
                format!("transform {duration_secs}s cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            None => "none".to_owned(),
        }
    }

    /// Eased rotation `elapsed_secs` into the animation.
    ///
    /// At rest this is just the rest rotation. While animating it starts at
    /// 0°, rises monotonically, and reaches the target at the duration.
    #[must_use]
    pub fn rotation_at(&self, elapsed_secs: f64) -> f64 {
        let Some(SpinTransition { duration_secs }) = self.transition else {
            return self.rotation_deg;
        };
        if duration_secs <= 0.0 {
            return self.rotation_deg;
        }
        self.rotation_deg * ease_spin(elapsed_secs / duration_secs)
    }
}

/// The spin easing curve evaluated at `progress` in `[0, 1]`.
#[must_use]
pub fn ease_spin(progress: f64) -> f64 {
    let (x1, y1, x2, y2) = SPIN_EASING;
    cubic_bezier(x1, y1, x2, y2, progress)
}

/// CSS-style `cubic-bezier` timing function with endpoints `(0,0)`/`(1,1)`.
///
/// Solves `x(t) = progress` by bisection (the x polynomial is monotone for
/// control points in `[0, 1]`) and returns `y(t)`.
#[must_use]
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress.is_nan() || progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..48 {
        let mid = (lo + hi) / 2.0;
        if bezier_component(x1, x2, mid) < progress {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_component(y1, y2, (lo + hi) / 2.0)
}

fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}
