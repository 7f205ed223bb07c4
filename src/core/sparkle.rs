use crate::core::constants::{
    SPARKLE_GROW_SEC, SPARKLE_PEAK_SCALE, SPARKLE_SHRINK_SEC,
};
use crate::core::ease::Easing;
use crate::core::tween::Tween;

/// One-shot flare envelope: quick grow to the peak scale, slower settle
/// back to rest.
#[derive(Debug, Clone)]
pub struct Flare {
    stage: Stage,
}

#[derive(Debug, Clone)]
enum Stage {
    Grow(Tween),
    Settle(Tween),
}

impl Flare {
    fn new() -> Self {
        Self {
            stage: Stage::Grow(Tween::new(
                1.0,
                SPARKLE_PEAK_SCALE,
                SPARKLE_GROW_SEC,
                Easing::OutCubic,
            )),
        }
    }

    pub fn scale(&self) -> f32 {
        match &self.stage {
            Stage::Grow(t) | Stage::Settle(t) => t.value(),
        }
    }

    /// Advance the envelope; true once it has settled back to rest.
    fn step(&mut self, dt: f32) -> bool {
        match &mut self.stage {
            Stage::Grow(t) => {
                let leftover = t.step(dt);
                if t.finished() {
                    let mut settle = Tween::new(
                        SPARKLE_PEAK_SCALE,
                        1.0,
                        SPARKLE_SHRINK_SEC,
                        Easing::InOutCubic,
                    );
                    settle.step(leftover);
                    let done = settle.finished();
                    self.stage = Stage::Settle(settle);
                    return done;
                }
                false
            }
            Stage::Settle(t) => {
                t.step(dt);
                t.finished()
            }
        }
    }
}

/// Per-cell flare state. `try_flare` is the only transition into
/// `Flaring`, so a cell can never run two flares at once.
#[derive(Debug, Clone, Default)]
pub enum SparkleState {
    #[default]
    Idle,
    Flaring(Flare),
}

/// One persistent sparkle slot per grid cell, alive for the page's
/// lifetime.
#[derive(Debug, Default)]
pub struct SparkleField {
    cells: Vec<SparkleState>,
}

impl SparkleField {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![SparkleState::Idle; len],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_flaring(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(SparkleState::Flaring(_)))
    }

    /// Draw scale for the cell; 1 at rest.
    pub fn scale(&self, index: usize) -> f32 {
        match self.cells.get(index) {
            Some(SparkleState::Flaring(flare)) => flare.scale(),
            _ => 1.0,
        }
    }

    /// Attempt to start a flare on `index`; returns whether one was
    /// started. A cell already flaring rejects the trigger.
    pub fn try_flare(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) if matches!(slot, SparkleState::Idle) => {
                *slot = SparkleState::Flaring(Flare::new());
                true
            }
            _ => false,
        }
    }

    /// Step every in-flight flare; settled cells return to `Idle`.
    pub fn advance(&mut self, dt: f32) {
        for slot in &mut self.cells {
            if let SparkleState::Flaring(flare) = slot {
                if flare.step(dt) {
                    *slot = SparkleState::Idle;
                }
            }
        }
    }

    /// Indices and scales of cells currently flaring.
    pub fn flaring(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, slot)| match slot {
            SparkleState::Flaring(flare) => Some((i, flare.scale())),
            SparkleState::Idle => None,
        })
    }

    pub fn flare_count(&self) -> usize {
        self.flaring().count()
    }
}
