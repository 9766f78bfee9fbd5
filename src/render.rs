use crate::constants::{GLOW_ALPHA, GLOW_BLUR, LINK_RGB, LINK_WIDTH, PARTICLE_RGB};
use crate::style;
use anyhow::anyhow;
use glam::Vec2;
use reveal_core::{Bounds, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backend for the particle field.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    glow_color: String,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            glow_color: style::rgba(PARTICLE_RGB, GLOW_ALPHA),
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        // The backing store follows the window right away while the field
        // waits out the resize debounce, so wipe whichever is larger.
        let w = (self.canvas.width() as f64).max(bounds.width as f64);
        let h = (self.canvas.height() as f64).max(bounds.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn glow_disc(&mut self, center: Vec2, radius: f32, opacity: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.set_fill_style_str(&style::rgba(PARTICLE_RGB, opacity));
        ctx.set_shadow_blur(GLOW_BLUR);
        ctx.set_shadow_color(&self.glow_color);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }

    fn line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&style::rgba(LINK_RGB, opacity));
        ctx.set_line_width(LINK_WIDTH);
        ctx.stroke();
    }
}
