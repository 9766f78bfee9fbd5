//! Whole-page state: the backdrop, the scene flow and the evasive control,
//! with one entry point per host event.
//!
//! Event entry points take the current time and fire any timer due by then
//! before handling the event, so the outcome does not depend on whether a
//! frame happened to run in between.

use crate::constants::{DOUBLE_TAP_WINDOW, RESIZE_QUIET_PERIOD};
use crate::dodge::{DodgeConfig, EvasiveControl, Relocation};
use crate::error::FlowError;
use crate::flow::{FlowConfig, SceneFlow, Step};
use crate::host::{ControlHost, SceneStage, Surface};
use crate::input::{Debounce, TapGuard};
use crate::particles::{Bounds, FieldConfig, ParticleField};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct PageConfig {
    pub field: FieldConfig,
    pub flow: FlowConfig,
    pub dodge: DodgeConfig,
    pub double_tap_window: Duration,
    pub resize_quiet: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            flow: FlowConfig::default(),
            dodge: DodgeConfig::default(),
            double_tap_window: DOUBLE_TAP_WINDOW,
            resize_quiet: RESIZE_QUIET_PERIOD,
        }
    }
}

pub struct Page {
    field: ParticleField,
    flow: SceneFlow,
    dodge: EvasiveControl,
    taps: TapGuard,
    resize: Debounce,
    pending_bounds: Option<Bounds>,
}

impl Page {
    pub fn new(
        config: PageConfig,
        scene_count: usize,
        viewport: Bounds,
        seed: u64,
    ) -> Result<Self, FlowError> {
        let flow = SceneFlow::new(scene_count, config.flow)?;
        // Separate streams so dodging doesn't perturb the backdrop sequence.
        let field = ParticleField::new(config.field, viewport, seed);
        let dodge = EvasiveControl::new(config.dodge, seed ^ 0x9E37_79B9_7F4A_7C15);
        log::info!(
            "[page] {} scenes, {} particles in {:.0}x{:.0}",
            scene_count,
            field.particles().len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            field,
            flow,
            dodge,
            taps: TapGuard::new(config.double_tap_window),
            resize: Debounce::new(config.resize_quiet),
            pending_bounds: None,
        })
    }

    pub fn mount<S: SceneStage + ?Sized>(&self, stage: &mut S) {
        self.flow.mount(stage);
    }

    /// One animation frame: timers, debounced resize, then advance and draw
    /// the backdrop.
    pub fn frame<F, S, C>(&mut self, now: Duration, surface: &mut F, stage: &mut S, control: &mut C)
    where
        F: Surface + ?Sized,
        S: SceneStage + ?Sized,
        C: ControlHost + ?Sized,
    {
        self.flow.tick(now, stage);
        self.dodge.tick(now, control);
        if self.resize.poll(now) {
            if let Some(bounds) = self.pending_bounds.take() {
                self.field.resize(bounds);
            }
        }
        self.field.advance();
        self.field.render(surface);
    }

    /// Click or touch-start anywhere on the page.
    pub fn interact<S: SceneStage + ?Sized>(&mut self, now: Duration, stage: &mut S) -> Step {
        self.flow.tick(now, stage);
        self.flow.interact(stage)
    }

    /// The accept control was clicked.
    pub fn accept<S: SceneStage + ?Sized>(
        &mut self,
        now: Duration,
        stage: &mut S,
    ) -> Result<Step, FlowError> {
        self.flow.tick(now, stage);
        self.flow.jump_to_terminal(stage)
    }

    /// Hover, touch or click on the decline control.
    pub fn decline<C: ControlHost + ?Sized>(
        &mut self,
        now: Duration,
        current: Vec2,
        size: Vec2,
        viewport: Bounds,
        control: &mut C,
    ) -> Relocation {
        self.dodge.tick(now, control);
        self.dodge.evade(current, size, viewport, control)
    }

    /// Returns `true` when the touch-end should have its default prevented.
    pub fn touch_end(&mut self, now: Duration) -> bool {
        self.taps.touch_end(now)
    }

    /// The viewport changed size. The backdrop is rebuilt once the viewport
    /// has been still for the quiet period.
    pub fn viewport_changed(&mut self, now: Duration, bounds: Bounds) {
        self.pending_bounds = Some(bounds);
        self.resize.poke(now);
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn flow(&self) -> &SceneFlow {
        &self.flow
    }

    #[inline]
    pub fn dodge(&self) -> &EvasiveControl {
        &self.dodge
    }
}
