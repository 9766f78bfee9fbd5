use crate::constants::DODGE_TRANSITION;
use crate::style;
use glam::Vec2;
use reveal_core::ControlHost;
use web_sys as web;

/// The decline button, pinned with `position: fixed` once it starts dodging.
pub struct DomControl {
    el: web::HtmlElement,
}

impl DomControl {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    /// Top-left corner and size of the button in viewport pixels.
    pub fn rect(&self) -> (Vec2, Vec2) {
        let r = self.el.get_bounding_client_rect();
        (
            Vec2::new(r.left() as f32, r.top() as f32),
            Vec2::new(r.width() as f32, r.height() as f32),
        )
    }
}

impl ControlHost for DomControl {
    fn move_to(&mut self, position: Vec2) {
        let s = self.el.style();
        _ = s.set_property("position", "fixed");
        _ = s.set_property("left", &style::px(position.x));
        _ = s.set_property("top", &style::px(position.y));
        _ = s.set_property("transition", DODGE_TRANSITION);
    }

    fn tilt(&mut self, degrees: f32) {
        _ = self
            .el
            .style()
            .set_property("transform", &style::rotate_deg(degrees));
    }
}
