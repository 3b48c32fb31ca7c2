use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    PointerEvent,
};

use doodlepad_shared::{Message, Notice, PadConfig, Session, Tool};

use crate::canvas::CanvasSurface;
use crate::dom::{alert, event_to_point, get_element, navigate, prompt_title, sync_tool_ui};
use crate::palette::{render_swatches, swatch_color_from_event, SWATCH_COLORS};
use crate::persistence::decode_image;
use crate::storage::BrowserStore;
use crate::timer::start_countdown;
use crate::util::init_logging;

pub type PadSession = Session<CanvasSurface, BrowserStore>;

const LOAD_HEADING: &str = "불러올 그림의 제목을 입력하세요:";
const DELETE_HEADING: &str = "삭제할 그림의 제목을 입력하세요:";

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    js_sys::Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    init_logging(&window);

    let config = PadConfig::default();

    let canvas: HtmlCanvasElement = get_element(&document, "jsCanvas")?;
    let brush_button: HtmlButtonElement = get_element(&document, "brush")?;
    let erase_button: HtmlButtonElement = get_element(&document, "erase")?;
    let color_input: HtmlInputElement = get_element(&document, "color")?;
    let swatches_el: HtmlElement = get_element(&document, "colorOptions")?;
    let range_input: HtmlInputElement = get_element(&document, "range")?;
    let start_timer_button: HtmlButtonElement = get_element(&document, "startTimer")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clearCanvas")?;
    let load_button: HtmlButtonElement = get_element(&document, "loadCanvas")?;
    let delete_button: HtmlButtonElement = get_element(&document, "deleteCanvas")?;
    let exit_button: HtmlButtonElement = get_element(&document, "exitPage")?;
    let timer_display: Element = get_element(&document, "timerDisplay")?;
    let word_display: Element = get_element(&document, "wordDisplay")?;

    let surface = CanvasSurface::new(canvas.clone(), config.surface_width, config.surface_height)?;
    let session = Rc::new(RefCell::new(Session::new(
        config.clone(),
        surface,
        BrowserStore,
    )));

    {
        let session = session.borrow();
        range_input.set_min(&config.min_line_width.to_string());
        range_input.set_max(&config.max_line_width.to_string());
        range_input.set_value(&session.tools().line_width.to_string());
        color_input.set_value(&session.tools().stroke_color);
        sync_tool_ui(session.tools().tool, &brush_button, &erase_button);
        render_swatches(&document, &swatches_el, &SWATCH_COLORS);
        log::info!(
            "Doodlepad ready canvas={}x{} stored_drawings={}",
            config.surface_width,
            config.surface_height,
            session.list_titles().len()
        );
    }

    for (button, tool) in [
        (brush_button.clone(), Tool::Draw),
        (erase_button.clone(), Tool::Erase),
    ] {
        let tool_session = session.clone();
        let brush_button_cb = brush_button.clone();
        let erase_button_cb = erase_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut session = tool_session.borrow_mut();
            session.handle(Message::ModeSelected(tool));
            sync_tool_ui(session.tools().tool, &brush_button_cb, &erase_button_cb);
            log::debug!("Tool selected: {}", tool.label());
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let width_session = session.clone();
        let range_input_cb = range_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let Ok(requested) = range_input_cb.value().parse::<f64>() else {
                return;
            };
            let width = width_session.borrow_mut().set_line_width(requested);
            range_input_cb.set_value(&width.to_string());
        });
        range_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let color_session = session.clone();
        let color_input_cb = color_input.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            color_session
                .borrow_mut()
                .handle(Message::ColorSelected(color_input_cb.value()));
        });
        color_input.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let swatch_session = session.clone();
        let color_input_cb = color_input.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(color) = swatch_color_from_event(&event) else {
                return;
            };
            color_input_cb.set_value(&color);
            swatch_session
                .borrow_mut()
                .handle(Message::ColorSelected(color));
        });
        swatches_el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let clear_session = session.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            clear_session.borrow_mut().handle(Message::Clear);
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let timer_session = session.clone();
        let window_cb = window.clone();
        let timer_display = timer_display.clone();
        let word_display = word_display.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(err) =
                start_countdown(&window_cb, &timer_session, &timer_display, &word_display)
            {
                web_sys::console::error_1(&err);
            }
        });
        start_timer_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let load_session = session.clone();
        let window_cb = window.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let titles = load_session.borrow().list_titles();
            let title = prompt_title(&window_cb, LOAD_HEADING, &titles).unwrap_or_default();
            let pending = load_session.borrow().begin_load(&title);
            let pending = match pending {
                Ok(pending) => pending,
                Err(err) => {
                    log::info!("Load rejected: {err}");
                    alert(&window_cb, &Notice::from(err).text());
                    return;
                }
            };
            let decoded_session = load_session.clone();
            let loaded_title = pending.title.clone();
            let failed_window = window_cb.clone();
            let failed_title = pending.title.clone();
            let result = decode_image(
                &pending.data_url,
                move |image| {
                    decoded_session.borrow_mut().finish_load(&image);
                    log::info!("Loaded drawing {loaded_title}");
                },
                move || {
                    let notice = Notice::Failed {
                        reason: format!("{failed_title} could not be decoded"),
                    };
                    alert(&failed_window, &notice.text());
                },
            );
            if let Err(err) = result {
                web_sys::console::error_1(&err);
            }
        });
        load_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let delete_session = session.clone();
        let window_cb = window.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let titles = delete_session.borrow().list_titles();
            let Some(title) = prompt_title(&window_cb, DELETE_HEADING, &titles) else {
                return;
            };
            let notice = delete_session.borrow_mut().delete(&title);
            if let Some(notice) = notice {
                alert(&window_cb, &notice.text());
            }
        });
        delete_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let window_cb = window.clone();
        let exit_url = config.exit_url.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(err) = navigate(&window_cb, &exit_url) {
                web_sys::console::error_1(&err);
            }
        });
        exit_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let down_session = session.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            down_session.borrow_mut().handle(Message::PointerDown);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_session = session.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let Some(point) = event_to_point(&move_canvas, &event) else {
                return;
            };
            move_session
                .borrow_mut()
                .handle(Message::PointerMoved(point));
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    for (event_name, message) in [
        ("pointerup", Message::PointerUp),
        ("pointerleave", Message::PointerLeave),
    ] {
        let stop_session = session.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| {
            stop_session.borrow_mut().handle(message.clone());
        });
        canvas.add_event_listener_with_callback(event_name, onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    Ok(())
}
