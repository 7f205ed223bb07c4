/// DOM selectors and visual defaults for the canvas layer.
// Required container the canvas is appended to
pub const CONTAINER_SELECTOR: &str = ".dots-container";
// Optional region whose mousemove drives dot activation
pub const HOVER_REGION_SELECTOR: &str = ".dots_animation";
// Optional hero element whose center drives the opacity fade
pub const HEADER_SELECTOR: &str = ".home_hero-wrapper";

// Utility classes layering the canvas behind the hero content
pub const CANVAS_CLASS: &str = "absolute top-0 left-0 w-full h-full -z-10";

// Palette comes from CSS custom properties, with fallbacks for pages that
// do not define them
pub const ACTIVE_COLOR_PROP: &str = "--base-color-brand--dot-active";
pub const INACTIVE_COLOR_PROP: &str = "--base-color-brand--dot-inactive";
pub const FALLBACK_ACTIVE_COLOR: &str = "#FFE664";
pub const FALLBACK_INACTIVE_COLOR: &str = "rgba(255, 255, 255, 0.5)";

// Sparkle overlay color sits outside the two-color base palette
pub const SPARKLE_COLOR: &str = "#A7C6EB";
pub const SPARKLE_GLOW_COLOR: &str = "#FFE664";
pub const SPARKLE_GLOW_BLUR: f64 = 15.0;
