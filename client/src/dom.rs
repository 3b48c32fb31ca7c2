use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement, PointerEvent, Window};

use doodlepad_shared::{Point, Tool};

const ACTIVE_TOOL_BACKGROUND: &str = "skyblue";
const IDLE_TOOL_BACKGROUND: &str = "white";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn set_tool_button(button: &HtmlButtonElement, active: bool) {
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
    let background = if active {
        ACTIVE_TOOL_BACKGROUND
    } else {
        IDLE_TOOL_BACKGROUND
    };
    let _ = button.style().set_property("background-color", background);
}

pub fn sync_tool_ui(tool: Tool, brush: &HtmlButtonElement, erase: &HtmlButtonElement) {
    set_tool_button(brush, tool == Tool::Draw);
    set_tool_button(erase, tool == Tool::Erase);
}

pub fn set_label(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn alert(window: &Window, text: &str) {
    if window.alert_with_message(text).is_err() {
        log::warn!("alert suppressed: {text}");
    }
}

/// Shows every stored title under `heading` and returns what the user typed.
pub fn prompt_title(window: &Window, heading: &str, titles: &[String]) -> Option<String> {
    let message = format!("{heading}\n{}", titles.join("\n"));
    window.prompt_with_message(&message).ok().flatten()
}

pub fn navigate(window: &Window, url: &str) -> Result<(), JsValue> {
    window.location().set_href(url)
}

/// Pointer position in canvas pixels, accounting for CSS scaling.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Option<Point> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let scale_x = canvas.width() as f64 / rect.width();
    let scale_y = canvas.height() as f64 / rect.height();
    let x = (event.client_x() as f64 - rect.left()) * scale_x;
    let y = (event.client_y() as f64 - rect.top()) * scale_y;
    Point::new(x, y).normalize()
}
