// DOM hooks and canvas styling for the web front-end.
//
// Tuning numbers for motion and timing live in `reveal_core::constants`;
// this file only holds what is specific to the page markup and the 2D canvas.

// Element ids and selectors provided by index.html
pub const CANVAS_ID: &str = "particles";
pub const SCENE_SELECTOR: &str = ".scene";
pub const BLUR_OVERLAY_SELECTOR: &str = ".blur-overlay";
pub const ACCEPT_BUTTON_ID: &str = "yesBtn";
pub const DECLINE_BUTTON_ID: &str = "noBtn";
pub const ACTIVE_CLASS: &str = "active";

// Particle look
pub const PARTICLE_RGB: [u8; 3] = [0, 212, 255]; // cyan
pub const GLOW_ALPHA: f32 = 0.5;
pub const GLOW_BLUR: f64 = 10.0;

// Connective lines
pub const LINK_RGB: [u8; 3] = [125, 211, 252]; // pale sky
pub const LINK_WIDTH: f64 = 0.5;

// Evasive control easing, matched to DODGE_TILT_RESET
pub const DODGE_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

// Events that count as an attempt on the decline control
pub const DECLINE_EVENTS: [&str; 3] = ["mouseenter", "touchstart", "click"];
