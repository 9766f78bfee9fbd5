use super::Wiring;
use crate::constants::DECLINE_EVENTS;
use crate::dom;
use web_sys as web;

pub fn wire_control_handlers(accept: &web::HtmlElement, decline: &web::HtmlElement, w: &Wiring) {
    wire_accept(accept, w);
    for event in DECLINE_EVENTS {
        wire_decline(decline, event, w);
    }
}

fn wire_accept(el: &web::HtmlElement, w: &Wiring) {
    let w = w.clone();
    dom::add_listener(el, "click", move |_ev: web::Event| {
        let now = w.clock.now();
        match w.page.borrow_mut().accept(now, &mut *w.stage.borrow_mut()) {
            Ok(step) => log::info!("[accept] {:?}", step),
            Err(e) => log::error!("[accept] {}", e),
        }
    });
}

fn wire_decline(el: &web::HtmlElement, event: &'static str, w: &Wiring) {
    let w = w.clone();
    dom::add_listener(el, event, move |ev: web::Event| {
        // Keep the click from landing and the touch from turning into one.
        if event != "mouseenter" {
            ev.prevent_default();
        }
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::viewport_bounds(&window);
        let (current, size) = w.control.borrow().rect();
        let now = w.clock.now();
        let r = w
            .page
            .borrow_mut()
            .decline(now, current, size, viewport, &mut *w.control.borrow_mut());
        log::debug!(
            "[decline] {} -> ({:.0}, {:.0}) after {} rerolls",
            event,
            r.position.x,
            r.position.y,
            r.rerolls
        );
    });
}
