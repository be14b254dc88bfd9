// Frame scheduling. The field never loops on its own: something that can
// run a callback "next frame" drives it, requestAnimationFrame in the
// browser and a hand-cranked queue in tests.

use crate::error::PageError;
use crate::utils;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type Frame = Box<dyn FnOnce()>;

pub trait Scheduler {
    // Run `frame` once, on the next frame
    fn request_frame(&self, frame: Frame);
}

// Runs `frame` now and then once per scheduled frame, forever
pub fn run_forever<S, F>(scheduler: Rc<S>, frame: F)
where
    S: Scheduler + 'static,
    F: FnMut() + 'static,
{
    step(scheduler, Rc::new(RefCell::new(frame)));
}

fn step<S, F>(scheduler: Rc<S>, frame: Rc<RefCell<F>>)
where
    S: Scheduler + 'static,
    F: FnMut() + 'static,
{
    (&mut *frame.borrow_mut())();
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move || step(next, frame)));
}

pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> AnimationFrames {
        AnimationFrames { window }
    }
}

impl Scheduler for AnimationFrames {
    fn request_frame(&self, frame: Frame) {
        let callback = Closure::once_into_js(move || frame());
        if let Err(err) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            utils::log_error(&PageError::host(err));
        }
    }
}

// Queue of pending frames that only advances when told to
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<Frame>>,
}

impl ManualScheduler {
    pub fn new() -> ManualScheduler {
        ManualScheduler::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    // Runs up to `count` queued frames, returns how many ran
    pub fn run_frames(&self, count: usize) -> usize {
        let mut ran = 0;
        while ran < count {
            // Released before running, the frame may queue the next one
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(frame) => {
                    frame();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, frame: Frame) {
        self.pending.borrow_mut().push_back(frame);
    }
}
