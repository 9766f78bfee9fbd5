#![cfg(target_arch = "wasm32")]
use crate::constants::{ACCEPT_BUTTON_ID, CANVAS_ID, DECLINE_BUTTON_ID};
use anyhow::anyhow;
use reveal_core::{Page, PageConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", |_ev: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let accept: web::HtmlElement = dom::element_by_id(&document, ACCEPT_BUTTON_ID)?;
    let decline: web::HtmlElement = dom::element_by_id(&document, DECLINE_BUTTON_ID)?;

    let viewport = dom::viewport_bounds(&window);
    dom::sync_canvas_to_viewport(&canvas, viewport);
    let surface = render::CanvasSurface::new(&canvas)?;

    let mut stage = overlay::DomStage::from_document(&document)?;
    let page = Page::new(PageConfig::default(), stage.len(), viewport, rand::random())?;
    page.mount(&mut stage);

    let wiring = events::Wiring {
        page: Rc::new(RefCell::new(page)),
        stage: Rc::new(RefCell::new(stage)),
        control: Rc::new(RefCell::new(controls::DomControl::new(decline.clone()))),
        clock: frame::Clock::start(),
    };
    events::wire_page_input(&document, &wiring);
    events::wire_control_handlers(&accept, &decline, &wiring);
    events::wire_resize(&window, &canvas, &wiring);

    // advance -> render -> wait for the next paint, until the page goes away
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page: wiring.page.clone(),
        stage: wiring.stage.clone(),
        control: wiring.control.clone(),
        surface,
        clock: wiring.clock,
    }));
    let handle = frame::start_loop(frame_ctx);
    events::wire_page_lifecycle(&window, handle);

    Ok(())
}
