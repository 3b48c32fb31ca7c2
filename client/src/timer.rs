use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use doodlepad_shared::{timer_label, word_label, Tick};

use crate::app::PadSession;
use crate::dom::{alert, set_label};
use crate::util::random_roll;

const TICK_MILLIS: i32 = 1000;

/// Starts a countdown driven by its own one-second interval. Intervals from
/// earlier starts keep running and share the same labels.
pub fn start_countdown(
    window: &Window,
    session: &Rc<RefCell<PadSession>>,
    timer_display: &Element,
    word_display: &Element,
) -> Result<(), JsValue> {
    let (id, word, seconds) = {
        let mut session = session.borrow_mut();
        let (id, word) = session.start_timer(random_roll());
        (id, word, session.config().timer_seconds)
    };
    set_label(word_display, &word_label(&word));
    set_label(timer_display, &timer_label(seconds));
    log::info!(
        "Countdown {} started word={word} running={}",
        id.value(),
        session.borrow().running_countdowns()
    );

    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let interval_cb = interval.clone();
    let session = session.clone();
    let window_cb = window.clone();
    let timer_display = timer_display.clone();
    let ontick = Closure::<dyn FnMut()>::new(move || {
        let report = session.borrow_mut().tick(id);
        let expired_word = match report.tick {
            Tick::Running { remaining, .. } => {
                set_label(&timer_display, &timer_label(remaining));
                return;
            }
            Tick::Expired { word } => {
                set_label(&timer_display, &timer_label(0));
                log::info!("Countdown {} expired word={word}", id.value());
                Some(word)
            }
            Tick::Stale => None,
        };
        if let Some(handle) = interval_cb.take() {
            window_cb.clear_interval_with_handle(handle);
        }
        for notice in &report.notices {
            alert(&window_cb, &notice.text());
        }
        // alert blocks, so the drawing is captured after the time-up notice closes
        if let Some(word) = expired_word {
            let saved = session.borrow_mut().save_expired(&word);
            alert(&window_cb, &saved.text());
        }
    });
    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        ontick.as_ref().unchecked_ref(),
        TICK_MILLIS,
    )?;
    interval.set(Some(handle));
    ontick.forget();
    Ok(())
}
