use crate::core::ease::Easing;

/// One-shot interpolation of a scalar over a fixed duration.
///
/// `step` returns the portion of `dt` left over once the tween finishes,
/// so callers chaining tweens (pulse legs, the sparkle grow/settle pair)
/// can hand the remainder to the next stage without losing time.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds; returns the unconsumed remainder of `dt`.
    pub fn step(&mut self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        let remaining = self.duration - self.elapsed;
        if dt < remaining {
            self.elapsed += dt;
            0.0
        } else {
            self.elapsed = self.duration;
            dt - remaining
        }
    }

    pub fn value(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
