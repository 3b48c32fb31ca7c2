use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use doodlepad_shared::{Point, StoreError, Surface};

use crate::util::js_error_text;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self, at: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(at.x, at.y);
    }

    fn line_to(&mut self, to: Point) {
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64, width: f64, height: f64) {
        if let Err(err) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height)
        {
            log::warn!("drawImage failed: {}", js_error_text(&err));
        }
    }

    fn to_data_url(&self) -> Result<String, StoreError> {
        self.canvas
            .to_data_url()
            .map_err(|err| StoreError::Capture(js_error_text(&err)))
    }
}
