//! Appearance animation: easing functions and staggered fade-in schedules.

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A scheduled fade-in of one drawn element.
///
/// Opacity stays at 0.0 until `delay` has elapsed, then rises to 1.0 over
/// `duration`. The animation clock is owned by the host; this type only
/// answers what the opacity is at a given elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    /// Seconds to wait before the fade starts
    pub delay: f64,
    /// Seconds the fade takes once started
    pub duration: f64,
    /// Easing applied to the opacity ramp
    pub easing: Easing,
}

impl FadeIn {
    /// Create a fade with the given delay and duration.
    #[must_use]
    pub fn new(delay: f64, duration: f64) -> Self {
        Self {
            delay,
            duration,
            easing: Easing::default(),
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Opacity at `elapsed` seconds since the schedule started.
    #[must_use]
    pub fn opacity_at(&self, elapsed: f64) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        self.easing.apply(t)
    }

    /// Whether the fade has finished at `elapsed` seconds.
    #[must_use]
    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }

    /// Build a cascade of fades, one per element, with delays increasing by
    /// `stagger` per index so elements appear top to bottom.
    #[must_use]
    pub fn staggered(count: usize, stagger: f64, duration: f64, easing: Easing) -> Vec<Self> {
        (0..count)
            .map(|index| Self::new(index as f64 * stagger, duration).with_easing(easing))
            .collect()
    }
}
