// Recording fakes for the presentation collaborators.
#![allow(dead_code)]

use glam::Vec2;
use reveal_core::{Bounds, ControlHost, SceneStage, Surface};
use std::time::Duration;

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear(Bounds),
    Disc { center: Vec2, radius: f32, opacity: f32 },
    Line { from: Vec2, to: Vec2, opacity: f32 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Draw>,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<(Vec2, Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Draw::Line { from, to, opacity } => Some((*from, *to, *opacity)),
                _ => None,
            })
            .collect()
    }

    pub fn discs(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Draw::Disc { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ops.push(Draw::Clear(bounds));
    }
    fn glow_disc(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.ops.push(Draw::Disc {
            center,
            radius,
            opacity,
        });
    }
    fn line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.ops.push(Draw::Line { from, to, opacity });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOp {
    Scene(usize, bool),
    Blur(bool),
}

/// Tracks which scenes are visible and every toggle in order.
pub struct RecordingStage {
    pub active: Vec<bool>,
    pub blur: bool,
    pub log: Vec<StageOp>,
}

impl RecordingStage {
    pub fn new(len: usize) -> Self {
        Self {
            active: vec![false; len],
            blur: false,
            log: Vec::new(),
        }
    }

    pub fn visible(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.then_some(i))
            .collect()
    }

    pub fn blur_toggles(&self) -> Vec<bool> {
        self.log
            .iter()
            .filter_map(|op| match op {
                StageOp::Blur(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl SceneStage for RecordingStage {
    fn set_scene_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
        self.log.push(StageOp::Scene(index, active));
    }
    fn set_blur(&mut self, active: bool) {
        self.blur = active;
        self.log.push(StageOp::Blur(active));
    }
}

#[derive(Default)]
pub struct RecordingControl {
    pub position: Option<Vec2>,
    pub tilt: f32,
    pub moves: usize,
}

impl ControlHost for RecordingControl {
    fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
        self.moves += 1;
    }
    fn tilt(&mut self, degrees: f32) {
        self.tilt = degrees;
    }
}
