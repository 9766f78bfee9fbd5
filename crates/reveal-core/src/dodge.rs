//! The decline button that won't be clicked.
//!
//! Every hover, touch or click attempt sends the control to a fresh random
//! spot inside the viewport, preferring spots well away from where it is now,
//! with a short random tilt that springs back.

use crate::constants::*;
use crate::host::ControlHost;
use crate::particles::Bounds;
use crate::timeline::{TimerId, Timeline};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct DodgeConfig {
    pub min_distance: f32,
    pub max_rerolls: u32,
    pub edge_margin: f32,
    pub max_tilt_deg: f32,
    pub tilt_reset: Duration,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            min_distance: DODGE_MIN_DISTANCE,
            max_rerolls: DODGE_MAX_REROLLS,
            edge_margin: DODGE_EDGE_MARGIN,
            max_tilt_deg: DODGE_MAX_TILT_DEG,
            tilt_reset: DODGE_TILT_RESET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
    /// New top-left corner of the control.
    pub position: Vec2,
    pub tilt_deg: f32,
    /// How many candidates were thrown away for being too close.
    pub rerolls: u32,
    /// Whether `position` is farther than the minimum distance.
    pub cleared: bool,
}

/// Largest top-left corner that keeps a control of `size` on screen with the
/// margin to spare. Never negative.
#[inline]
pub fn placement_area(viewport: Bounds, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        (viewport.width - size.x - margin).max(0.0),
        (viewport.height - size.y - margin).max(0.0),
    )
}

/// Pick a new top-left corner for the control, away from `current`.
pub fn pick_target<R: Rng>(
    rng: &mut R,
    config: &DodgeConfig,
    viewport: Bounds,
    size: Vec2,
    current: Vec2,
) -> (Vec2, u32, bool) {
    let area = placement_area(viewport, size, config.edge_margin);
    let roll = |rng: &mut R| Vec2::new(rng.gen::<f32>() * area.x, rng.gen::<f32>() * area.y);

    let mut candidate = roll(rng);
    let mut rerolls = 0;
    loop {
        if candidate.distance(current) > config.min_distance {
            return (candidate, rerolls, true);
        }
        if rerolls >= config.max_rerolls {
            return (candidate, rerolls, false);
        }
        candidate = roll(rng);
        rerolls += 1;
    }
}

pub struct EvasiveControl {
    config: DodgeConfig,
    rng: StdRng,
    timeline: Timeline<()>,
    tilt_reset: Option<TimerId>,
    last: Option<Relocation>,
}

impl EvasiveControl {
    pub fn new(config: DodgeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            timeline: Timeline::new(),
            tilt_reset: None,
            last: None,
        }
    }

    /// React to an activation attempt. `current` and `size` describe the
    /// control's on-screen box right now.
    pub fn evade<H: ControlHost + ?Sized>(
        &mut self,
        current: Vec2,
        size: Vec2,
        viewport: Bounds,
        host: &mut H,
    ) -> Relocation {
        let (position, rerolls, cleared) =
            pick_target(&mut self.rng, &self.config, viewport, size, current);
        let tilt_deg = (self.rng.gen::<f32>() - 0.5) * 2.0 * self.config.max_tilt_deg;

        host.move_to(position);
        host.tilt(tilt_deg);
        if let Some(id) = self.tilt_reset.take() {
            self.timeline.cancel(id);
        }
        self.tilt_reset = Some(self.timeline.schedule(self.config.tilt_reset, ()));

        if !cleared {
            log::debug!("[dodge] no spot cleared the minimum distance after {} rerolls", rerolls);
        }
        let relocation = Relocation {
            position,
            tilt_deg,
            rerolls,
            cleared,
        };
        self.last = Some(relocation);
        relocation
    }

    pub fn tick<H: ControlHost + ?Sized>(&mut self, now: Duration, host: &mut H) {
        while let Some((id, ())) = self.timeline.pop_due(now) {
            if self.tilt_reset == Some(id) {
                self.tilt_reset = None;
            }
            host.tilt(0.0);
        }
        self.timeline.catch_up(now);
    }

    #[inline]
    pub fn last(&self) -> Option<Relocation> {
        self.last
    }

    #[inline]
    pub fn tilt_reset_pending(&self) -> bool {
        self.tilt_reset.is_some()
    }

    #[inline]
    pub fn config(&self) -> &DodgeConfig {
        &self.config
    }
}
