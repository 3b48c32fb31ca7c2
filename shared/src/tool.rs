use crate::config::PadConfig;
use crate::surface::PaintOp;
use crate::Point;

const MAX_COLOR_LEN: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Draw,
    Erase,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Draw => "brush",
            Tool::Erase => "erase",
        }
    }
}

pub fn sanitize_color(mut color: String, fallback: &str) -> String {
    color.truncate(color.trim_end().len());
    if color.is_empty() {
        return fallback.to_string();
    }
    if color.len() > MAX_COLOR_LEN {
        let mut end = MAX_COLOR_LEN;
        while !color.is_char_boundary(end) {
            end -= 1;
        }
        color.truncate(end);
    }
    color
}

/// Tool mode, brush settings and whether the pointer is held down.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub stroke_color: String,
    pub fill_color: String,
    pub line_width: f64,
    pub stroke_active: bool,
}

impl ToolState {
    pub fn new(config: &PadConfig) -> Self {
        Self {
            tool: Tool::Draw,
            stroke_color: config.default_color.clone(),
            fill_color: config.default_color.clone(),
            line_width: config.clamp_line_width(config.default_line_width),
            stroke_active: false,
        }
    }

    /// Switches tool. Entering Draw resets the stroke color to the default.
    pub fn set_tool(&mut self, tool: Tool, config: &PadConfig) {
        self.tool = tool;
        if tool == Tool::Draw {
            self.stroke_color = config.default_color.clone();
        }
    }

    pub fn set_color(&mut self, color: String, config: &PadConfig) {
        let color = sanitize_color(color, &config.default_color);
        self.stroke_color = color.clone();
        self.fill_color = color;
    }

    pub fn set_line_width(&mut self, width: f64, config: &PadConfig) -> f64 {
        self.line_width = config.clamp_line_width(width);
        self.line_width
    }

    pub fn pointer_down(&mut self) {
        self.stroke_active = true;
    }

    pub fn pointer_up(&mut self) {
        self.stroke_active = false;
    }

    pub fn pointer_move(&self, point: Point) -> Option<PaintOp> {
        let point = point.normalize()?;
        match (self.tool, self.stroke_active) {
            (Tool::Draw, false) => Some(PaintOp::BeginPath(point)),
            (Tool::Draw, true) => Some(PaintOp::LineTo(point)),
            (Tool::Erase, true) => {
                let side = self.line_width;
                Some(PaintOp::ClearRect {
                    x: point.x - side / 2.0,
                    y: point.y - side / 2.0,
                    width: side,
                    height: side,
                })
            }
            (Tool::Erase, false) => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/tool_tests.rs"]
mod tests;
