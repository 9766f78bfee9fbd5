use crate::constants::{ACTIVE_CLASS, BLUR_OVERLAY_SELECTOR, SCENE_SELECTOR};
use anyhow::anyhow;
use reveal_core::SceneStage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `.scene` panels and the blur overlay, toggled through the `active`
/// class. Visibility and fades are left to the stylesheet.
pub struct DomStage {
    scenes: Vec<web::Element>,
    blur: Option<web::Element>,
}

impl DomStage {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let list = document
            .query_selector_all(SCENE_SELECTOR)
            .map_err(|e| anyhow!("{:?}", e))?;
        let scenes = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect::<Vec<_>>();
        let blur = document.query_selector(BLUR_OVERLAY_SELECTOR).ok().flatten();
        if blur.is_none() {
            log::warn!("[stage] no {} element; transitions run unblurred", BLUR_OVERLAY_SELECTOR);
        }
        log::info!("[stage] found {} scenes", scenes.len());
        Ok(Self { scenes, blur })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }
}

#[inline]
fn set_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    _ = if active {
        cl.add_1(ACTIVE_CLASS)
    } else {
        cl.remove_1(ACTIVE_CLASS)
    };
}

impl SceneStage for DomStage {
    fn set_scene_active(&mut self, index: usize, active: bool) {
        if let Some(el) = self.scenes.get(index) {
            set_active(el, active);
        }
    }

    fn set_blur(&mut self, active: bool) {
        if let Some(el) = &self.blur {
            set_active(el, active);
        }
    }
}
