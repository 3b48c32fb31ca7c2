use wasm_bindgen::JsValue;
use web_sys::Window;

/// Uniform roll in `[0, 1)` for picking the prompt word.
pub fn random_roll() -> f64 {
    js_sys::Math::random()
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

pub fn init_logging(window: &Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already installed: {err}").into());
    }
}

pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
