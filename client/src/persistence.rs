use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Decodes a stored data URL off the event loop. Exactly one of
/// `on_decoded` and `on_failed` runs, once the browser is done with the image.
pub fn decode_image(
    data_url: &str,
    on_decoded: impl FnOnce(HtmlImageElement) + 'static,
    on_failed: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    let image_onload = image.clone();
    let onload = Closure::once_into_js(move || on_decoded(image_onload));
    image.set_onload(Some(onload.unchecked_ref()));
    let onerror = Closure::once_into_js(move || {
        log::warn!("Stored drawing could not be decoded");
        on_failed();
    });
    image.set_onerror(Some(onerror.unchecked_ref()));
    image.set_src(data_url);
    Ok(())
}
