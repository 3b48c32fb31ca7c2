//! A small software surface for driving the session in tests.

use crate::error::StoreError;
use crate::surface::Surface;
use crate::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
    BeginPath(Point),
    LineTo(Point),
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    DrawImage {
        label: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

#[derive(Clone, Debug)]
pub struct TestImage {
    pub label: String,
}

impl TestImage {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

/// One optional color per pixel. Strokes stamp squares of the line width
/// along each segment; clears and image draws cover every pixel whose
/// centre falls inside the target rectangle.
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<Option<String>>,
    stroke_color: String,
    line_width: f64,
    path: Vec<Point>,
    pub ops: Vec<Op>,
    pub fail_capture: bool,
}

impl RasterSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
            stroke_color: "#000000".to_string(),
            line_width: 1.0,
            path: Vec::new(),
            ops: Vec::new(),
            fail_capture: false,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&str> {
        self.pixels
            .get(y * self.width + x)
            .and_then(|pixel| pixel.as_deref())
    }

    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.is_some()).count()
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Pixel coordinates whose centres lie in `[x, x + width) × [y, y + height)`.
    pub fn pixels_in(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for py in 0..self.height {
            for px in 0..self.width {
                let cx = px as f64 + 0.5;
                let cy = py as f64 + 0.5;
                if cx >= x && cx < x + width && cy >= y && cy < y + height {
                    out.push((px, py));
                }
            }
        }
        out
    }

    fn fill(&mut self, x: f64, y: f64, width: f64, height: f64, value: Option<String>) {
        for (px, py) in self.pixels_in(x, y, width, height) {
            self.pixels[py * self.width + px] = value.clone();
        }
    }

    fn stamp(&mut self, center: Point) {
        let side = self.line_width;
        let color = Some(self.stroke_color.clone());
        self.fill(center.x - side / 2.0, center.y - side / 2.0, side, side, color);
    }
}

impl Surface for RasterSurface {
    type Image = TestImage;

    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.stroke_color = color.to_string();
        self.ops.push(Op::StrokeColor(color.to_string()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(Op::FillColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(Op::LineWidth(width));
    }

    fn begin_path(&mut self, at: Point) {
        self.path = vec![at];
        self.ops.push(Op::BeginPath(at));
    }

    fn line_to(&mut self, to: Point) {
        self.ops.push(Op::LineTo(to));
        let Some(from) = self.path.last().copied() else {
            self.path.push(to);
            return;
        };
        let distance = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
        let steps = (distance * 2.0).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.stamp(Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ));
        }
        self.path.push(to);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect {
            x,
            y,
            width,
            height,
        });
        self.fill(x, y, width, height, None);
    }

    fn draw_image(&mut self, image: &TestImage, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::DrawImage {
            label: image.label.clone(),
            x,
            y,
            width,
            height,
        });
        let value = Some(format!("image:{}", image.label));
        self.fill(x, y, width, height, value);
    }

    fn to_data_url(&self) -> Result<String, StoreError> {
        if self.fail_capture {
            return Err(StoreError::Capture("surface is tainted".to_string()));
        }
        Ok(format!(
            "data:image/png;base64,painted{}",
            self.painted_count()
        ))
    }
}
