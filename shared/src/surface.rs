use crate::error::StoreError;
use crate::Point;

/// A 2D drawing area. The wasm client backs this with a canvas context; the
/// core only ever talks to the surface through these calls.
pub trait Surface {
    /// Decoded bitmap that can be drawn back onto the surface.
    type Image;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Starts a new path at `at` without marking anything.
    fn begin_path(&mut self, at: Point);
    /// Extends the current path to `to` and strokes it.
    fn line_to(&mut self, to: Point);
    /// Resets the rectangle to fully transparent pixels.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, width: f64, height: f64);

    /// Encodes the current contents as a data URL.
    fn to_data_url(&self) -> Result<String, StoreError>;

    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOp {
    BeginPath(Point),
    LineTo(Point),
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

pub fn paint<S: Surface + ?Sized>(surface: &mut S, op: PaintOp) {
    match op {
        PaintOp::BeginPath(point) => surface.begin_path(point),
        PaintOp::LineTo(point) => surface.line_to(point),
        PaintOp::ClearRect {
            x,
            y,
            width,
            height,
        } => surface.clear_rect(x, y, width, height),
    }
}
