mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod loading;
pub mod particle;
pub mod renderer;
pub mod scheduler;
pub mod sections;
pub mod surface;

use crate::config::ParticleOptions;
use crate::error::PageError;
use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::scheduler::AnimationFrames;
use crate::sections::SectionNavigator;
use crate::utils::Timer;
use js_sys::Reflect;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IdleRequestOptions, Window};

pub use crate::loading::start_loading_sequence;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Element the site mounts its particle background on
pub const SITE_MOUNT_ID: &str = "simple-particles";

const IDLE_TIMEOUT_MS: u32 = 500;
const IDLE_FALLBACK_DELAY_MS: i32 = 100;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Everything the portfolio page runs once its DOM is ready
#[wasm_bindgen]
pub fn boot() {
    initialize();
    match SectionNavigator::new() {
        Some(navigator) => navigator.listen_for_clicks(),
        None => utils::log_warning("no document, section navigation disabled"),
    }
    start_loading_sequence(loading::DEFAULT_DELAY_MS);
    mount_when_idle(SITE_MOUNT_ID.to_owned(), ParticleOptions::site());
}

#[wasm_bindgen]
pub struct SimpleParticles {
    field: Rc<RefCell<ParticleField<StdRng>>>,
}

#[wasm_bindgen]
impl SimpleParticles {
    // Appends the particle canvas to the element with id `container_id` and
    // starts animating it. Failures are logged and yield undefined.
    pub fn mount(container_id: &str, options: JsValue) -> Option<SimpleParticles> {
        let options = ParticleOptions::from_js(&options).unwrap_or_else(|err| {
            utils::log_warning(&format!("{}, using default particle options", err));
            ParticleOptions::default()
        });
        SimpleParticles::mount_with(container_id, &options)
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().len()
    }
}

impl SimpleParticles {
    pub fn mount_with(container_id: &str, options: &ParticleOptions) -> Option<SimpleParticles> {
        match SimpleParticles::try_mount(container_id, options) {
            Ok(particles) => Some(particles),
            Err(err) => {
                utils::log_error(&err);
                None
            }
        }
    }

    fn try_mount(container_id: &str, options: &ParticleOptions) -> Result<SimpleParticles, PageError> {
        let _timer = Timer::new("SimpleParticles::mount");
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Host("no document".to_owned()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PageError::MissingMount(container_id.to_owned()))?;

        let renderer = Renderer::new(&document)?;
        let viewport = renderer.fit_to(&window)?;
        renderer.attach(&container)?;

        let field = ParticleField::new(options, viewport, StdRng::from_entropy());
        let field = Rc::new(RefCell::new(field));
        let renderer = Rc::new(RefCell::new(renderer));

        let resized = Rc::clone(&renderer);
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Err(err) = resized.borrow().fit_to(&resize_window) {
                utils::log_error(&err);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(PageError::host)?;
        // Never unsubscribed, the canvas lives as long as the page
        on_resize.forget();

        let ticking = Rc::clone(&field);
        scheduler::run_forever(Rc::new(AnimationFrames::new(window)), move || {
            ticking.borrow_mut().tick(&mut *renderer.borrow_mut());
        });

        Ok(SimpleParticles { field })
    }
}

// Mounts the particle background once the browser is idle
#[wasm_bindgen]
pub fn start_particles_when_idle(container_id: String, options: JsValue) {
    let options = ParticleOptions::from_js(&options).unwrap_or_else(|err| {
        utils::log_warning(&format!("{}, using default particle options", err));
        ParticleOptions::default()
    });
    mount_when_idle(container_id, options);
}

fn mount_when_idle(container_id: String, options: ParticleOptions) {
    let task = move || {
        SimpleParticles::mount_with(&container_id, &options);
    };
    if let Err(err) = window().and_then(|window| when_idle(&window, task)) {
        utils::log_error(&err);
    }
}

// requestIdleCallback with a timeout, or a short setTimeout where the
// browser has no idle callbacks
fn when_idle<F>(window: &Window, task: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(task);
    let has_idle_callback =
        Reflect::has(window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false);

    let scheduled = if has_idle_callback {
        let mut options = IdleRequestOptions::new();
        options.timeout(IDLE_TIMEOUT_MS);
        window
            .request_idle_callback_with_options(callback.unchecked_ref(), &options)
            .map(|_| ())
    } else {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                IDLE_FALLBACK_DELAY_MS,
            )
            .map(|_| ())
    };
    scheduled.map_err(PageError::host)
}

fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| PageError::Host("no window".to_owned()))
}
