use crate::core::constants::{
    BASE_DOT_RADIUS, HEADER_INFLUENCE_FACTOR, MAX_DOT_RADIUS, MOUSE_INFLUENCE_RADIUS,
};
use glam::Vec2;

/// Axis-aligned bounds of the hero header, captured once at setup.
///
/// Not refreshed on resize or scroll; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HeaderBounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn influence_radius(&self) -> f32 {
        self.width.max(self.height) * HEADER_INFLUENCE_FACTOR
    }
}

/// Pointer proximity scale in (0, 1], or `None` when the dot sits outside
/// the influence radius. 1 means directly under the pointer.
pub fn pointer_scale(dot: Vec2, pointer: Vec2) -> Option<f32> {
    let dist = dot.distance(pointer);
    (dist < MOUSE_INFLUENCE_RADIUS).then(|| 1.0 - dist / MOUSE_INFLUENCE_RADIUS)
}

/// Target radius for a dot under pointer influence.
pub fn hover_radius(scale: f32) -> f32 {
    BASE_DOT_RADIUS + (MAX_DOT_RADIUS - BASE_DOT_RADIUS) * scale
}

/// Opacity fade toward the header center: linear in distance inside the
/// influence radius, exactly 1 outside it. Continuous at the boundary.
/// With no header element the fade is disabled and opacity is 1.
pub fn header_opacity(dot: Vec2, header: Option<&HeaderBounds>) -> f32 {
    let Some(bounds) = header else {
        return 1.0;
    };
    let radius = bounds.influence_radius();
    if radius <= 0.0 {
        return 1.0;
    }
    let dist = dot.distance(bounds.center());
    if dist < radius {
        dist / radius
    } else {
        1.0
    }
}
