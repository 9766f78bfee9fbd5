use crate::controls::DomControl;
use crate::overlay::DomStage;
use crate::render::CanvasSurface;
use instant::Instant;
use reveal_core::{ChainToken, LoopGate, Page};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic page time, shared by the frame loop and every event handler.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

pub struct FrameContext {
    pub page: Rc<RefCell<Page>>,
    pub stage: Rc<RefCell<DomStage>>,
    pub control: Rc<RefCell<DomControl>>,
    pub surface: CanvasSurface,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        self.page.borrow_mut().frame(
            now,
            &mut self.surface,
            &mut *self.stage.borrow_mut(),
            &mut *self.control.borrow_mut(),
        );
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops and restarts the `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct LoopHandle {
    gate: Rc<RefCell<LoopGate>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
}

impl LoopHandle {
    /// The loop finishes the frame in progress and does not schedule another.
    /// A frame already requested ends its chain when it runs.
    pub fn stop(&self) {
        if self.gate.borrow_mut().stop() {
            log::info!("[frame] loop stopped");
        }
    }

    pub fn resume(&self) {
        let token = self.gate.borrow_mut().resume();
        if let Some(token) = token {
            log::info!("[frame] loop resumed");
            start_chain(self.frame_ctx.clone(), self.gate.clone(), token);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let (gate, token) = LoopGate::start();
    let gate = Rc::new(RefCell::new(gate));
    start_chain(frame_ctx.clone(), gate.clone(), token);
    LoopHandle { gate, frame_ctx }
}

fn start_chain(
    frame_ctx: Rc<RefCell<FrameContext>>,
    gate: Rc<RefCell<LoopGate>>,
    token: ChainToken,
) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate.borrow().admits(token) {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
