use super::Wiring;
use crate::dom;
use crate::frame::LoopHandle;
use web_sys as web;

/// The canvas backing store tracks the window immediately; the particle
/// field is rebuilt by the page once resizing settles.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement, w: &Wiring) {
    let w = w.clone();
    let canvas = canvas.clone();
    let win = window.clone();
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let bounds = dom::viewport_bounds(&win);
        dom::sync_canvas_to_viewport(&canvas, bounds);
        w.page.borrow_mut().viewport_changed(w.clock.now(), bounds);
    });
}

/// Park the frame loop while the page is hidden in the back/forward cache.
pub fn wire_page_lifecycle(window: &web::Window, handle: LoopHandle) {
    let on_hide = handle.clone();
    dom::add_listener(window, "pagehide", move |_ev: web::Event| on_hide.stop());
    dom::add_listener(window, "pageshow", move |_ev: web::Event| handle.resume());
}
