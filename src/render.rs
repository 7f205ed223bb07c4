use crate::constants::{SPARKLE_COLOR, SPARKLE_GLOW_BLUR, SPARKLE_GLOW_COLOR};
use crate::core::constants::BASE_DOT_RADIUS;
use crate::core::scene::DotRender;
use glam::Vec2;
use web_sys as web;

/// Dot colors resolved from CSS custom properties at setup.
#[derive(Debug, Clone)]
pub struct Palette {
    pub active: String,
    pub inactive: String,
}

pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Filled circle for one grid dot with its per-dot alpha.
pub fn draw_dot(ctx: &web::CanvasRenderingContext2d, dot: &DotRender, palette: &Palette) {
    let color = if dot.active {
        &palette.active
    } else {
        &palette.inactive
    };
    ctx.begin_path();
    ctx.set_global_alpha(dot.opacity as f64);
    ctx.arc(
        dot.position.x as f64,
        dot.position.y as f64,
        dot.radius as f64,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.set_fill_style_str(color);
    ctx.fill();
    ctx.set_global_alpha(1.0);
}

/// Flaring sparkle composited over the base grid, with a glow. Shadow
/// state is reset afterwards so base dots stay crisp.
pub fn draw_sparkle(ctx: &web::CanvasRenderingContext2d, position: Vec2, scale: f32) {
    ctx.begin_path();
    ctx.set_shadow_blur(SPARKLE_GLOW_BLUR);
    ctx.set_shadow_color(SPARKLE_GLOW_COLOR);
    ctx.arc(
        position.x as f64,
        position.y as f64,
        (BASE_DOT_RADIUS * scale) as f64,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.set_fill_style_str(SPARKLE_COLOR);
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_color("transparent");
}
