//! Canvas 2D surface (WASM only)

use glam::DVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::{Rgb, Surface, Viewport};

/// `Surface` backed by an `HtmlCanvasElement` and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of a canvas
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Look up a canvas element by DOM id
    pub fn from_element_id(window: &Window, id: &str) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", id)))?
            .dyn_into()?;
        Self::new(canvas)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_stroke_style(&mut self, color: Rgb) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}

/// Browser window as viewport (`innerWidth` x `innerHeight`)
pub struct WindowViewport(pub Window);

impl Viewport for WindowViewport {
    fn size(&self) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(self.0.inner_width()), dim(self.0.inner_height()))
    }
}
