// Renderer struct that owns the full-viewport canvas behind the page content
// and its 2d context, and draws particles as alpha-blended filled circles.

use crate::error::PageError;
use crate::surface::{Surface, Viewport};
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window};

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Creates a detached canvas and grabs its 2d context. The canvas is fixed
    // to the viewport, ignores the pointer and sits under the content.
    pub fn new(document: &Document) -> Result<Self, PageError> {
        let canvas = document
            .create_element("canvas")
            .map_err(PageError::host)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PageError::Host("created element is not a canvas".to_owned()))?;

        let context = canvas
            .get_context("2d")
            .map_err(PageError::host)?
            .ok_or(PageError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::MissingContext)?;

        let style = canvas.style();
        for (property, value) in &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("pointer-events", "none"),
            ("z-index", "0"),
        ] {
            style
                .set_property(property, value)
                .map_err(PageError::host)?;
        }

        Ok(Renderer { canvas, context })
    }

    pub fn attach(&self, container: &Element) -> Result<(), PageError> {
        container
            .append_child(&self.canvas)
            .map(|_| ())
            .map_err(PageError::host)
    }

    // Matches the canvas to the window. Only the canvas dimensions change.
    pub fn fit_to(&self, window: &Window) -> Result<Viewport, PageError> {
        let viewport = window_viewport(window)?;
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
        Ok(viewport)
    }
}

impl Surface for Renderer {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let viewport = self.viewport();
        self.context
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, fill_style: &str, alpha: f64) {
        self.context.set_global_alpha(alpha);
        self.context.set_fill_style(&JsValue::from_str(fill_style));
        self.context.begin_path();
        // arc only fails for a negative radius, which sanitized options rule out
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_ok()
        {
            self.context.fill();
        }
    }
}

pub fn window_viewport(window: &Window) -> Result<Viewport, PageError> {
    let dimension = |value: Result<JsValue, JsValue>| -> Result<f64, PageError> {
        value
            .map_err(PageError::host)?
            .as_f64()
            .ok_or_else(|| PageError::Host("window size is not a number".to_owned()))
    };
    Ok(Viewport::new(
        dimension(window.inner_width())?,
        dimension(window.inner_height())?,
    ))
}
