use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

pub const SWATCH_COLORS: [&str; 9] = [
    "#2c2c2c", "#ffffff", "#ff3b30", "#ff9500", "#ffcc00", "#4cd963", "#5ac8fa", "#0579ff",
    "#5856d6",
];

/// Fills the swatch container with one `.color-option` button per color,
/// unless the page already ships its own swatches.
pub fn render_swatches(document: &Document, swatches_el: &HtmlElement, colors: &[&str]) {
    if swatches_el.child_element_count() > 0 {
        return;
    }
    for color in colors {
        let Ok(element) = document.create_element("button") else {
            continue;
        };
        let Ok(button) = element.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("class", "color-option");
        let _ = button.set_attribute("data-color", color);
        let _ = button.set_attribute("aria-label", &format!("Use color {color}"));
        let _ = button.style().set_property("background-color", color);
        let _ = swatches_el.append_child(&button);
    }
}

pub fn swatch_color_from_event(event: &Event) -> Option<String> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(color) = element.get_attribute("data-color") {
            return Some(color);
        }
        current = element.parent_element();
    }
    None
}
