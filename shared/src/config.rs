use crate::timer::PROMPT_WORDS;

pub const DEFAULT_COLOR: &str = "#2c2c2c";
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;
pub const MIN_LINE_WIDTH: f64 = 1.0;
pub const MAX_LINE_WIDTH: f64 = 50.0;
pub const SURFACE_WIDTH: u32 = 700;
pub const SURFACE_HEIGHT: u32 = 500;
pub const TIMER_SECONDS: u32 = 5;
pub const STORAGE_KEY: &str = "drawings";
pub const EXIT_URL: &str = "../index.html";

/// Fixed settings of one drawing pad. `Default` carries the values the page
/// ships with; tests shrink the surface or the word list as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct PadConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub timer_seconds: u32,
    pub prompt_words: Vec<String>,
    pub default_color: String,
    pub default_line_width: f64,
    pub min_line_width: f64,
    pub max_line_width: f64,
    pub storage_key: String,
    pub exit_url: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            timer_seconds: TIMER_SECONDS,
            prompt_words: PROMPT_WORDS.iter().map(|word| word.to_string()).collect(),
            default_color: DEFAULT_COLOR.to_string(),
            default_line_width: DEFAULT_LINE_WIDTH,
            min_line_width: MIN_LINE_WIDTH,
            max_line_width: MAX_LINE_WIDTH,
            storage_key: STORAGE_KEY.to_string(),
            exit_url: EXIT_URL.to_string(),
        }
    }
}

impl PadConfig {
    pub fn clamp_line_width(&self, width: f64) -> f64 {
        let width = if width.is_finite() {
            width
        } else {
            self.default_line_width
        };
        width.max(self.min_line_width).min(self.max_line_width)
    }
}
