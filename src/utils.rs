use crate::error::PageError;
use wasm_bindgen::JsValue;
use web_sys::console;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Brackets a scope with console.time / console.timeEnd
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

pub fn log_error(err: &PageError) {
    console::error_1(&JsValue::from_str(&err.to_string()));
}

// For browser calls made inside event callbacks, where there is no caller
// to return the error to
pub fn log_host_failure<T>(result: Result<T, JsValue>) {
    if let Err(err) = result {
        log_error(&PageError::host(err));
    }
}

pub fn log_warning(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}
