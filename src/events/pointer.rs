use super::Wiring;
use crate::dom;
use web_sys as web;

/// Page-wide taps and clicks advance the scene flow; touch-ends are screened
/// for the double-tap zoom gesture.
pub fn wire_page_input(document: &web::Document, w: &Wiring) {
    wire_tap(document, "click", w, false);
    wire_tap(document, "touchstart", w, true);
    wire_touchend(document, w);
}

fn wire_tap(document: &web::Document, event: &'static str, w: &Wiring, passive: bool) {
    let w = w.clone();
    let handler = move |_ev: web::Event| {
        let now = w.clock.now();
        let step = w.page.borrow_mut().interact(now, &mut *w.stage.borrow_mut());
        log::debug!("[input] {} at {:?}: {:?}", event, now, step);
    };
    if passive {
        dom::add_passive_listener(document, event, handler);
    } else {
        dom::add_listener(document, event, handler);
    }
}

fn wire_touchend(document: &web::Document, w: &Wiring) {
    let w = w.clone();
    dom::add_listener(document, "touchend", move |ev: web::Event| {
        if w.page.borrow_mut().touch_end(w.clock.now()) {
            ev.prevent_default();
        }
    });
}
