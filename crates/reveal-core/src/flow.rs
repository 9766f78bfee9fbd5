//! Scene flow controller.
//!
//! A cursor over a fixed, ordered list of scenes. User input moves it forward
//! one scene at a time; the last two scenes are terminal for plain
//! advancement (the second-to-last is the choice scene with its own buttons,
//! the last is the success scene) and can only be entered from there through
//! [`SceneFlow::jump_to_terminal`].
//!
//! Every transition runs the same choreography on the flow's own
//! [`Timeline`]: blur on and hide the old scene immediately, show the new
//! scene after `reveal_delay`, clear the blur and unlock after a further
//! `overlay_clear_delay`. Each timer entry remembers the scene it was issued
//! for and is dropped if the cursor has moved on by the time it fires.

use crate::constants::*;
use crate::error::FlowError;
use crate::host::SceneStage;
use crate::timeline::{TimerId, Timeline};
use smallvec::SmallVec;
use std::time::Duration;

/// Minimum sequence length: the choice scene followed by the success scene.
pub const MIN_SCENES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Why an event left the flow untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// A transition is already running.
    Locked,
    /// The cursor sits on one of the last two scenes.
    Terminal,
    /// The jump target is the current scene.
    AlreadyThere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Started { from: usize, to: usize },
    Ignored(Refusal),
}

impl Step {
    #[inline]
    pub fn started(&self) -> bool {
        matches!(self, Step::Started { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cue {
    Reveal { scene: usize },
    ClearOverlay { scene: usize },
    AutoAdvance { from: usize },
}

#[derive(Clone, Debug)]
pub struct FlowConfig {
    pub reveal_delay: Duration,
    pub overlay_clear_delay: Duration,
    pub auto_advance_delay: Duration,
    /// Scene that moves on by itself once shown; `None` disables it.
    pub auto_advance_scene: Option<usize>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            reveal_delay: REVEAL_DELAY,
            overlay_clear_delay: OVERLAY_CLEAR_DELAY,
            auto_advance_delay: AUTO_ADVANCE_DELAY,
            auto_advance_scene: Some(AUTO_ADVANCE_SCENE),
        }
    }
}

pub struct SceneFlow {
    len: usize,
    cursor: usize,
    phase: Phase,
    config: FlowConfig,
    timeline: Timeline<Cue>,
    choreography: SmallVec<[TimerId; 2]>,
    auto_advance: Option<TimerId>,
}

impl SceneFlow {
    pub fn new(len: usize, config: FlowConfig) -> Result<Self, FlowError> {
        if len < MIN_SCENES {
            return Err(FlowError::TooFewScenes {
                len,
                min: MIN_SCENES,
            });
        }
        Ok(Self {
            len,
            cursor: 0,
            phase: Phase::Idle,
            config,
            timeline: Timeline::new(),
            choreography: SmallVec::new(),
            auto_advance: None,
        })
    }

    /// Put the stage into the initial state: first scene shown, blur off.
    pub fn mount<S: SceneStage + ?Sized>(&self, stage: &mut S) {
        for i in 0..self.len {
            stage.set_scene_active(i, i == self.cursor);
        }
        stage.set_blur(false);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// The scene with the accept/decline buttons.
    #[inline]
    pub fn choice_index(&self) -> usize {
        self.len - 2
    }

    /// The success scene.
    #[inline]
    pub fn terminal_index(&self) -> usize {
        self.len - 1
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Whether an auto-advance is waiting to fire.
    #[inline]
    pub fn auto_advance_pending(&self) -> bool {
        self.auto_advance
            .is_some_and(|id| self.timeline.is_pending(id))
    }

    fn refusal(&self) -> Option<Refusal> {
        if self.is_transitioning() {
            Some(Refusal::Locked)
        } else if self.cursor >= self.choice_index() {
            Some(Refusal::Terminal)
        } else {
            None
        }
    }

    /// Move to the next scene, unless locked or on a terminal scene.
    pub fn advance<S: SceneStage + ?Sized>(&mut self, stage: &mut S) -> Step {
        if let Some(r) = self.refusal() {
            log::debug!("[flow] advance ignored at scene {}: {:?}", self.cursor, r);
            return Step::Ignored(r);
        }
        let to = self.cursor + 1;
        self.begin(to, stage)
    }

    /// A click or tap anywhere on the page.
    pub fn interact<S: SceneStage + ?Sized>(&mut self, stage: &mut S) -> Step {
        self.advance(stage)
    }

    /// Jump straight to the success scene.
    pub fn jump_to_terminal<S: SceneStage + ?Sized>(
        &mut self,
        stage: &mut S,
    ) -> Result<Step, FlowError> {
        self.jump_to(self.terminal_index(), stage)
    }

    /// Jump to any scene with the regular choreography, ignoring adjacency.
    /// A jump supersedes a transition that is still in flight.
    pub fn jump_to<S: SceneStage + ?Sized>(
        &mut self,
        target: usize,
        stage: &mut S,
    ) -> Result<Step, FlowError> {
        if target >= self.len {
            return Err(FlowError::OutOfRange {
                index: target,
                len: self.len,
            });
        }
        if target == self.cursor {
            log::debug!("[flow] jump ignored: already on scene {}", target);
            return Ok(Step::Ignored(Refusal::AlreadyThere));
        }
        Ok(self.begin(target, stage))
    }

    /// Fire every timer due by `now`.
    pub fn tick<S: SceneStage + ?Sized>(&mut self, now: Duration, stage: &mut S) {
        while let Some((id, cue)) = self.timeline.pop_due(now) {
            self.choreography.retain(|c| *c != id);
            if self.auto_advance == Some(id) {
                self.auto_advance = None;
            }
            self.fire(cue, stage);
        }
        self.timeline.catch_up(now);
    }

    fn begin<S: SceneStage + ?Sized>(&mut self, to: usize, stage: &mut S) -> Step {
        if let Some(id) = self.auto_advance.take() {
            if self.timeline.cancel(id).is_some() {
                log::debug!("[flow] auto-advance cancelled by a newer transition");
            }
        }
        for id in self.choreography.drain(..) {
            self.timeline.cancel(id);
        }

        let from = self.cursor;
        self.phase = Phase::Transitioning;
        stage.set_blur(true);
        stage.set_scene_active(from, false);
        self.cursor = to;
        let id = self
            .timeline
            .schedule(self.config.reveal_delay, Cue::Reveal { scene: to });
        self.choreography.push(id);
        log::info!("[flow] scene {} -> {}", from, to);
        Step::Started { from, to }
    }

    fn fire<S: SceneStage + ?Sized>(&mut self, cue: Cue, stage: &mut S) {
        match cue {
            Cue::Reveal { scene } => {
                if scene != self.cursor {
                    log::debug!("[flow] stale reveal for scene {}", scene);
                    return;
                }
                stage.set_scene_active(scene, true);
                let id = self
                    .timeline
                    .schedule(self.config.overlay_clear_delay, Cue::ClearOverlay { scene });
                self.choreography.push(id);
                if self.config.auto_advance_scene == Some(scene) && scene < self.choice_index() {
                    self.auto_advance = Some(self.timeline.schedule(
                        self.config.auto_advance_delay,
                        Cue::AutoAdvance { from: scene },
                    ));
                }
            }
            Cue::ClearOverlay { scene } => {
                if scene != self.cursor {
                    log::debug!("[flow] stale overlay clear for scene {}", scene);
                    return;
                }
                stage.set_blur(false);
                self.phase = Phase::Idle;
            }
            Cue::AutoAdvance { from } => {
                if from != self.cursor {
                    log::debug!("[flow] stale auto-advance from scene {}", from);
                    return;
                }
                self.advance(stage);
            }
        }
    }
}
