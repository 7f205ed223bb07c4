/// Easing curves used by the dot animations.
///
/// The hover pop-in and sparkle grow use [`Easing::OutCubic`]; the
/// breathing pulse and sparkle settle use [`Easing::InOutCubic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Starts fast, decelerates into the target.
    OutCubic,
    /// Accelerates, then decelerates; symmetric around the midpoint.
    InOutCubic,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress. Input outside
    /// the unit interval is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
