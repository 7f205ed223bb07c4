use crate::core::constants::{POP_IN_DURATION_SEC, PULSE_LEG_DURATION_SEC, PULSE_MAX_DELAY_SEC};
use crate::core::ease::Easing;
use crate::core::tween::Tween;
use fnv::FnvHashMap;
use rand::Rng;

/// In-flight size animation for one dot under pointer influence.
///
/// A quick pop-in drives `scale` 0 -> 1; once the randomly delayed pulse
/// starts it takes over from the current scale and breathes 0 <-> 1
/// forever. `radius` maps scale onto the base..hover radius span.
#[derive(Debug, Clone)]
pub struct HoverAnim {
    base_radius: f32,
    hover_radius: f32,
    pop_in: Tween,
    pulse: Pulse,
    live: bool,
}

#[derive(Debug, Clone)]
enum Pulse {
    Waiting { remaining: f32 },
    Cycling { leg: Tween, rising: bool },
}

impl HoverAnim {
    fn new(base_radius: f32, hover_radius: f32, delay: f32) -> Self {
        Self {
            base_radius,
            hover_radius,
            pop_in: Tween::new(0.0, 1.0, POP_IN_DURATION_SEC, Easing::OutCubic),
            pulse: Pulse::Waiting { remaining: delay },
            live: true,
        }
    }

    pub fn hover_radius(&self) -> f32 {
        self.hover_radius
    }

    pub fn scale(&self) -> f32 {
        match &self.pulse {
            Pulse::Waiting { .. } => self.pop_in.value(),
            Pulse::Cycling { leg, .. } => leg.value(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.base_radius + (self.hover_radius - self.base_radius) * self.scale()
    }

    fn step(&mut self, dt: f32) {
        self.pop_in.step(dt);
        let mut dt = dt;
        loop {
            match &mut self.pulse {
                Pulse::Waiting { remaining } => {
                    if *remaining > dt {
                        *remaining -= dt;
                        return;
                    }
                    dt -= *remaining;
                    // Take over from wherever the pop-in left the scale so
                    // the handoff is continuous.
                    self.pulse = Pulse::Cycling {
                        leg: Tween::new(
                            self.pop_in.value(),
                            1.0,
                            PULSE_LEG_DURATION_SEC,
                            Easing::InOutCubic,
                        ),
                        rising: true,
                    };
                }
                Pulse::Cycling { leg, rising } => {
                    dt = leg.step(dt);
                    if !leg.finished() {
                        return;
                    }
                    *rising = !*rising;
                    let (from, to) = if *rising { (0.0, 1.0) } else { (1.0, 0.0) };
                    *leg = Tween::new(from, to, PULSE_LEG_DURATION_SEC, Easing::InOutCubic);
                    if dt <= 0.0 {
                        return;
                    }
                }
            }
        }
    }
}

/// Map from flat grid cell index to the dot's in-flight hover animation.
/// At most one entry per cell; entries exist only while their dot sits
/// inside pointer influence.
#[derive(Debug, Default)]
pub struct HoverRegistry {
    anims: FnvHashMap<usize, HoverAnim>,
}

impl HoverRegistry {
    pub fn len(&self) -> usize {
        self.anims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anims.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HoverAnim> {
        self.anims.get(&index)
    }

    /// Fetch the animation for `index`, creating it (scale 0, random pulse
    /// delay) on first sight. An existing entry is retargeted in place so
    /// a moving pointer never restarts the animation. Marks the entry live
    /// for the current frame.
    pub fn get_or_create(
        &mut self,
        index: usize,
        base_radius: f32,
        hover_radius: f32,
        rng: &mut impl Rng,
    ) -> &HoverAnim {
        let anim = self.anims.entry(index).or_insert_with(|| {
            let delay = rng.gen::<f32>() * PULSE_MAX_DELAY_SEC;
            HoverAnim::new(base_radius, hover_radius, delay)
        });
        anim.hover_radius = hover_radius;
        anim.live = true;
        anim
    }

    /// Drop one entry, cancelling its timelines.
    pub fn remove(&mut self, index: usize) {
        self.anims.remove(&index);
    }

    /// Step every animation by `dt` and reset liveness marks for the
    /// coming frame.
    pub fn advance(&mut self, dt: f32) {
        for anim in self.anims.values_mut() {
            anim.step(dt);
            anim.live = false;
        }
    }

    /// Drop entries not marked live since the last `advance`; guarantees
    /// no orphaned animations once a dot leaves pointer range.
    pub fn sweep(&mut self) {
        self.anims.retain(|_, anim| anim.live);
    }

    pub fn clear(&mut self) {
        self.anims.clear();
    }
}
