use std::time::Duration;

// Shared tuning constants for the particle backdrop, the scene flow and the
// evasive control. Distances are in CSS pixels.

// Particle population
pub const NARROW_VIEWPORT_WIDTH: f32 = 768.0; // below this width the field is thinned out
pub const PARTICLE_COUNT_NARROW: usize = 30;
pub const PARTICLE_COUNT_WIDE: usize = 50;

// Particle motion and look
pub const PARTICLE_MAX_SPEED: f32 = 0.15; // per axis, per frame
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_MAX: f32 = 2.5;
pub const PARTICLE_OPACITY_SPAWN_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAWN_MAX: f32 = 0.7;
pub const PARTICLE_OPACITY_FLOOR: f32 = 0.1;
pub const PARTICLE_OPACITY_CEIL: f32 = 0.7;
pub const OPACITY_WALK_STEP: f32 = 0.005; // max drift per frame, either direction

// Connective lines
pub const LINK_DISTANCE: f32 = 150.0; // pairs closer than this get a line
pub const LINK_OPACITY_MAX: f32 = 0.2; // opacity of a zero-length line

// Scene choreography
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
pub const OVERLAY_CLEAR_DELAY: Duration = Duration::from_millis(300);
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(4000);
pub const AUTO_ADVANCE_SCENE: usize = 3;

// Input sanitizing
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(250);

// Evasive control
pub const DODGE_MIN_DISTANCE: f32 = 150.0;
pub const DODGE_MAX_REROLLS: u32 = 10;
pub const DODGE_EDGE_MARGIN: f32 = 40.0;
pub const DODGE_MAX_TILT_DEG: f32 = 15.0;
pub const DODGE_TILT_RESET: Duration = Duration::from_millis(300);
