// Failures of the page components. None of these reach the host page as
// exceptions: the exported entry points log them to the console and carry on.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    // Element the particle canvas should be appended to does not exist
    #[error("mount point \"{0}\" not found in DOM")]
    MissingMount(String),

    // Canvas refused to hand out a 2d context
    #[error("2d drawing context unavailable")]
    MissingContext,

    #[error("Section \"{0}\" not found in configuration")]
    UnknownSection(String),

    #[error("Container \"{0}\" not found in DOM")]
    MissingContainer(String),

    #[error("invalid color \"{0}\"")]
    InvalidColor(String),

    // Any other failure reported by a browser API
    #[error("host error: {0}")]
    Host(String),
}

impl PageError {
    pub fn host(value: JsValue) -> Self {
        PageError::Host(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
