// Renderer struct that wraps a canvas and its 2D context, and draws the
// particle field through the plain canvas path API.

use crate::error::MountError;
use crate::surface::DrawSurface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2D context from the canvas. A canvas that already holds a
    // webgl context (or a browser without 2D support) gives ContextUnavailable.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(MountError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::ContextUnavailable)?;

        Ok(CanvasRenderer { canvas, context })
    }

    // Styles the canvas as a fixed, click-through layer behind the page content.
    pub fn apply_overlay_style(&self) -> Result<(), JsValue> {
        let style = self.canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "0")?;
        style.set_property("opacity", "0.3")?;
        Ok(())
    }
}

impl DrawSurface for CanvasRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, fill_style: &str) {
        self.context.begin_path();
        // arc only fails on a negative radius; skip the circle if it does
        if self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0).is_err() {
            return;
        }
        self.context.set_fill_style(&JsValue::from_str(fill_style));
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        stroke_style: &str,
        line_width: f64,
    ) {
        self.context.begin_path();
        self.context.set_stroke_style(&JsValue::from_str(stroke_style));
        self.context.set_line_width(line_width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
