/// Grid layout and animation tuning.
///
/// These constants express intended behavior and keep magic numbers out of
/// the code.
// Distance between neighboring dots, in canvas px
pub const DOT_SPACING: f32 = 40.0;

// Dot size range: resting radius and the radius reached directly under the
// pointer
pub const BASE_DOT_RADIUS: f32 = 3.0;
pub const MAX_DOT_RADIUS: f32 = 12.0;

// Pointer proximity radius inside which dots activate
pub const MOUSE_INFLUENCE_RADIUS: f32 = 100.0;

// Header fade radius as a multiple of the larger header dimension
pub const HEADER_INFLUENCE_FACTOR: f32 = 1.5;

// Hover size animation: quick pop-in, then an endless breathing pulse with
// a random start delay so neighboring dots desynchronize
pub const POP_IN_DURATION_SEC: f32 = 0.4;
pub const PULSE_LEG_DURATION_SEC: f32 = 1.0;
pub const PULSE_MAX_DELAY_SEC: f32 = 2.0;

// Sparkle flare: trigger rate and the grow/settle envelope
pub const SPARKLES_PER_SEC: f32 = 10.0;
pub const SPARKLE_GROW_SEC: f32 = 0.3;
pub const SPARKLE_SHRINK_SEC: f32 = 0.5;
pub const SPARKLE_PEAK_SCALE: f32 = 2.0;

// The effect is skipped at or below this viewport width (logical px)
pub const MOBILE_BREAKPOINT_PX: f32 = 991.0;

// Pointer rests far off-screen until the first mouse event arrives, so no
// dot starts active
pub const OFFSCREEN_POINTER: [f32; 2] = [-1000.0, -1000.0];
