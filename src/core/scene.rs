use crate::core::constants::{BASE_DOT_RADIUS, OFFSCREEN_POINTER};
use crate::core::grid::DotGrid;
use crate::core::hover::HoverRegistry;
use crate::core::influence::{self, HeaderBounds};
use crate::core::sparkle::SparkleField;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything needed to draw one grid dot this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRender {
    pub position: Vec2,
    pub radius: f32,
    pub active: bool,
    pub opacity: f32,
}

/// Per-session state for the whole effect: shared grid, pointer position,
/// header bounds, hover registry, sparkle field and RNG. One instance per
/// mounted canvas; dropped only through the session's teardown.
///
/// Frame protocol: `advance(dt)`, then `eval_dot` for every cell (drawing
/// as you go), then `sweep()`, then overlay `sparkles()`. The sweep runs
/// after drawing so a dot leaving pointer range renders once more with its
/// last radius.
pub struct Scene {
    pub grid: DotGrid,
    pub header: Option<HeaderBounds>,
    pub hover: HoverRegistry,
    pub sparkle: SparkleField,
    pointer: Vec2,
    rng: StdRng,
}

impl Scene {
    pub fn new(grid: DotGrid, header: Option<HeaderBounds>, seed: u64) -> Self {
        let sparkle = SparkleField::new(grid.len());
        Self {
            grid,
            header,
            hover: HoverRegistry::default(),
            sparkle,
            pointer: Vec2::from(OFFSCREEN_POINTER),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Step all in-flight hover and sparkle animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.hover.advance(dt);
        self.sparkle.advance(dt);
    }

    /// Evaluate one dot for drawing. Inside pointer influence this creates
    /// or retargets the dot's hover animation; outside it drops any stale
    /// entry and the dot reverts to the base radius.
    pub fn eval_dot(&mut self, index: usize) -> DotRender {
        let position = self.grid.position(index);
        let opacity = influence::header_opacity(position, self.header.as_ref());
        match influence::pointer_scale(position, self.pointer) {
            Some(scale) => {
                let target = influence::hover_radius(scale);
                let anim = self
                    .hover
                    .get_or_create(index, BASE_DOT_RADIUS, target, &mut self.rng);
                DotRender {
                    position,
                    radius: anim.radius(),
                    active: true,
                    opacity,
                }
            }
            None => {
                self.hover.remove(index);
                DotRender {
                    position,
                    radius: BASE_DOT_RADIUS,
                    active: false,
                    opacity,
                }
            }
        }
    }

    /// Cleanup pass: drop hover entries whose dot was not evaluated as
    /// active this frame.
    pub fn sweep(&mut self) {
        self.hover.sweep();
    }

    /// One sparkle trigger tick: pick a uniformly random cell and try to
    /// flare it. A tick landing on a flaring cell is wasted (no queueing,
    /// no retry). Returns whether a flare started.
    pub fn spawn_sparkle(&mut self) -> bool {
        if self.sparkle.is_empty() {
            return false;
        }
        let index = self.rng.gen_range(0..self.sparkle.len());
        self.sparkle.try_flare(index)
    }

    /// Flaring overlay dots as (position, scale), drawn on top of the base
    /// grid.
    pub fn sparkles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.sparkle
            .flaring()
            .map(|(index, scale)| (self.grid.position(index), scale))
    }
}
