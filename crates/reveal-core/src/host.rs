//! Presentation collaborators.
//!
//! The core never touches a DOM or a canvas directly. Everything visible goes
//! through these narrow traits, which the web front-end implements on top of
//! `web-sys` and the tests implement with recording fakes.

use crate::particles::Bounds;
use glam::Vec2;

/// A 2D drawing surface sized to the viewport.
pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    /// Filled disc with a soft glow, `opacity` in \[0, 1\].
    fn glow_disc(&mut self, center: Vec2, radius: f32, opacity: f32);
    fn line(&mut self, from: Vec2, to: Vec2, opacity: f32);
}

/// The scene container plus the full-screen blur overlay.
pub trait SceneStage {
    fn set_scene_active(&mut self, index: usize, active: bool);
    fn set_blur(&mut self, active: bool);
}

/// An absolutely positioned control that can be moved and tilted.
pub trait ControlHost {
    fn move_to(&mut self, position: Vec2);
    fn tilt(&mut self, degrees: f32);
}
