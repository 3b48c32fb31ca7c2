//! Platform-independent core of the drawing pad: tool and stroke state,
//! the prompt timer, and the named snapshot store. The wasm client layers
//! DOM wiring and a 2D canvas on top of [`Session`].

mod config;
mod error;
mod session;
mod store;
mod surface;
mod timer;
mod tool;

#[cfg(test)]
mod test_support;

pub use config::PadConfig;
pub use error::StoreError;
pub use session::{Message, Notice, PendingLoad, Session, TickReport};
pub use store::{KeyValueStore, MemoryStore, Snapshot, SnapshotStore};
pub use surface::{PaintOp, Surface};
pub use timer::{pick_word, timer_label, word_label, CountdownId, PromptTimer, Tick, TimerState};
pub use tool::{sanitize_color, Tool, ToolState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Drops points that carry NaN or infinite coordinates.
    pub fn normalize(self) -> Option<Self> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        Some(self)
    }
}
