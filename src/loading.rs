// Fades the loading overlay out once the page has had time to settle, then
// hides it and strips the intro animation from the navigation buttons.

use crate::error::PageError;
use crate::sections::on_animation_end;
use crate::utils;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const DEFAULT_DELAY_MS: i32 = 1500;

pub struct LoadingScreen {
    pub loading_id: &'static str,
    pub box_id: &'static str,
    pub nav_ids: [&'static str; 4],
}

impl Default for LoadingScreen {
    fn default() -> Self {
        LoadingScreen {
            loading_id: "loading",
            box_id: "box",
            nav_ids: ["about", "contact", "work", "top"],
        }
    }
}

impl LoadingScreen {
    // Starts the fade. Returns false when the page has no loading overlay.
    pub fn dismiss(&self, document: &Document) -> Result<bool, PageError> {
        let loading = match element_by_id(document, self.loading_id) {
            Some(loading) => loading,
            None => return Ok(false),
        };
        loading
            .class_list()
            .add_2("animated", "fadeOut")
            .map_err(PageError::host)?;

        let overlay = loading.clone();
        let document = document.clone();
        let box_id = self.box_id;
        let nav_ids = self.nav_ids;
        on_animation_end(&loading, move || {
            utils::log_host_failure(overlay.class_list().remove_2("animated", "fadeOut"));
            utils::log_host_failure(overlay.style().set_property("display", "none"));
            if let Some(b) = element_by_id(&document, box_id) {
                utils::log_host_failure(b.style().set_property("display", "none"));
            }
            for id in nav_ids.iter() {
                if let Some(button) = element_by_id(&document, id) {
                    utils::log_host_failure(button.class_list().remove_2("animated", "fadeIn"));
                }
            }
        })?;
        Ok(true)
    }
}

fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

// Dismisses the loading overlay after `delay_ms` milliseconds
#[wasm_bindgen]
pub fn start_loading_sequence(delay_ms: i32) {
    if let Err(err) = schedule_dismiss(delay_ms) {
        utils::log_error(&err);
    }
}

fn schedule_dismiss(delay_ms: i32) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Host("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| PageError::Host("no document".to_owned()))?;

    let callback = Closure::once_into_js(move || {
        if let Err(err) = LoadingScreen::default().dismiss(&document) {
            utils::log_error(&err);
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.max(0),
        )
        .map(|_| ())
        .map_err(PageError::host)
}
