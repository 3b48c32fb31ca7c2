use crate::config::PadConfig;
use crate::error::StoreError;
use crate::store::{KeyValueStore, SnapshotStore};
use crate::surface::{paint, Surface};
use crate::timer::{pick_word, CountdownId, PromptTimer, Tick, TimerState};
use crate::tool::{Tool, ToolState};
use crate::Point;

/// One input from the toolbar or the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    ModeSelected(Tool),
    ColorSelected(String),
    WidthChanged(f64),
    PointerDown,
    PointerUp,
    PointerLeave,
    PointerMoved(Point),
    Clear,
}

/// Something the front end should show the user in a blocking notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    TimeUp,
    Saved { title: String },
    NotFound { title: String },
    Deleted { title: String },
    Failed { reason: String },
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::TimeUp => "시간 종료".to_string(),
            Notice::Saved { .. } => "그림이 저장되었습니다.".to_string(),
            Notice::NotFound { .. } => "그림을 찾을 수 없습니다.".to_string(),
            Notice::Deleted { .. } => "그림이 삭제되었습니다.".to_string(),
            Notice::Failed { reason } => format!("작업에 실패했습니다: {reason}"),
        }
    }
}

impl From<StoreError> for Notice {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(title) => Notice::NotFound { title },
            other => Notice::Failed {
                reason: other.to_string(),
            },
        }
    }
}

/// A load waiting for its image to decode.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingLoad {
    pub title: String,
    pub data_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub notices: Vec<Notice>,
}

/// Owns everything a drawing page needs: tool and pointer state, the prompt
/// timer, the surface and the snapshot store.
pub struct Session<S: Surface, K: KeyValueStore> {
    config: PadConfig,
    surface: S,
    tools: ToolState,
    timer: PromptTimer,
    store: SnapshotStore<K>,
}

impl<S: Surface, K: KeyValueStore> Session<S, K> {
    pub fn new(config: PadConfig, mut surface: S, backend: K) -> Self {
        let tools = ToolState::new(&config);
        surface.set_stroke_color(&tools.stroke_color);
        surface.set_fill_color(&tools.fill_color);
        surface.set_line_width(tools.line_width);
        let timer = PromptTimer::new(config.timer_seconds);
        let store = SnapshotStore::new(backend, config.storage_key.clone());
        Self {
            config,
            surface,
            tools,
            timer,
            store,
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::ModeSelected(tool) => self.set_mode(tool),
            Message::ColorSelected(color) => self.set_color(color),
            Message::WidthChanged(width) => {
                self.set_line_width(width);
            }
            Message::PointerDown => self.pointer_down(),
            Message::PointerUp | Message::PointerLeave => self.pointer_up(),
            Message::PointerMoved(point) => self.pointer_move(point),
            Message::Clear => self.clear(),
        }
    }

    pub fn set_mode(&mut self, tool: Tool) {
        self.tools.set_tool(tool, &self.config);
        if tool == Tool::Draw {
            self.surface.set_stroke_color(&self.tools.stroke_color);
        }
    }

    /// Applies to strokes drawn from now on; existing pixels keep their color.
    pub fn set_color(&mut self, color: String) {
        self.tools.set_color(color, &self.config);
        self.surface.set_stroke_color(&self.tools.stroke_color);
        self.surface.set_fill_color(&self.tools.fill_color);
    }

    /// Returns the clamped width so the range control can show it.
    pub fn set_line_width(&mut self, width: f64) -> f64 {
        let width = self.tools.set_line_width(width, &self.config);
        self.surface.set_line_width(width);
        width
    }

    pub fn pointer_down(&mut self) {
        self.tools.pointer_down();
    }

    pub fn pointer_up(&mut self) {
        self.tools.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.tools.pointer_up();
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let Some(op) = self.tools.pointer_move(point) {
            paint(&mut self.surface, op);
        }
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Starts a countdown for a word picked with `roll` (uniform in `[0, 1)`).
    /// A countdown that is already running keeps going.
    pub fn start_timer(&mut self, roll: f64) -> (CountdownId, String) {
        let word = pick_word(&self.config.prompt_words, roll)
            .unwrap_or_default()
            .to_string();
        let id = self.timer.start(&word);
        (id, word)
    }

    /// Advances one countdown by a second. An expired countdown reports
    /// `TimeUp`; the caller shows it and then calls [`Session::save_expired`]
    /// with the countdown's word.
    pub fn tick(&mut self, id: CountdownId) -> TickReport {
        let tick = self.timer.tick(id);
        let notices = if matches!(tick, Tick::Expired { .. }) {
            vec![Notice::TimeUp]
        } else {
            Vec::new()
        };
        TickReport { tick, notices }
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn running_countdowns(&self) -> usize {
        self.timer.running_count()
    }

    pub fn save(&mut self, word: &str) -> Result<String, StoreError> {
        let data_url = self.surface.to_data_url()?;
        self.store.append(word, data_url)
    }

    /// Stores the surface under an expired countdown's word.
    pub fn save_expired(&mut self, word: &str) -> Notice {
        match self.save(word) {
            Ok(title) => Notice::Saved { title },
            Err(error) => {
                log::error!("saving drawing for {word} failed: {error}");
                Notice::from(error)
            }
        }
    }

    pub fn list_titles(&self) -> Vec<String> {
        self.store.list_titles()
    }

    /// Looks up `title`; the surface changes only once the caller has decoded
    /// the image and handed it to [`Session::finish_load`].
    pub fn begin_load(&self, title: &str) -> Result<PendingLoad, StoreError> {
        let snapshot = self
            .store
            .find(title)
            .ok_or_else(|| StoreError::NotFound(title.to_string()))?;
        Ok(PendingLoad {
            title: snapshot.title,
            data_url: snapshot.data_url,
        })
    }

    /// Replaces the surface with `image` stretched to the surface size.
    pub fn finish_load(&mut self, image: &S::Image) {
        let (width, height) = (self.surface.width(), self.surface.height());
        self.surface.clear_rect(0.0, 0.0, width, height);
        self.surface.draw_image(image, 0.0, 0.0, width, height);
    }

    /// `None` when nothing matched.
    pub fn delete(&mut self, title: &str) -> Option<Notice> {
        match self.store.delete(title) {
            Ok(true) => Some(Notice::Deleted {
                title: title.to_string(),
            }),
            Ok(false) => {
                log::debug!("delete: no drawing titled {title:?}");
                None
            }
            Err(error) => Some(Notice::from(error)),
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &SnapshotStore<K> {
        &self.store
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
