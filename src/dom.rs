use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::WireError;
use crate::grid::RandomSource;

pub fn window() -> Result<Window, WireError> {
    web_sys::window().ok_or(WireError::MissingElement("window"))
}

pub fn document() -> Result<Document, WireError> {
    window()?.document().ok_or(WireError::MissingElement("document"))
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub struct Debounced {
    wait_ms: u32,
    action: Rc<RefCell<Box<dyn FnMut()>>>,
    pending: RefCell<Option<Timeout>>,
}

impl Debounced {
    pub fn new(wait_ms: u32, action: impl FnMut() + 'static) -> Self {
        let action: Box<dyn FnMut()> = Box::new(action);
        Self {
            wait_ms,
            action: Rc::new(RefCell::new(action)),
            pending: RefCell::new(None),
        }
    }

    pub fn trigger(&self) {
        let action = self.action.clone();
        // Replacing the handle drops, and so cancels, the previous timeout.
        *self.pending.borrow_mut() = Some(Timeout::new(self.wait_ms, move || {
            let mut run = action.borrow_mut();
            (*run)();
        }));
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;
type FrameCallback = Rc<RefCell<Box<dyn FnMut() -> bool>>>;

/// requestAnimationFrame loop. `on_frame` returns false to stop scheduling;
/// dropping the loop cancels the pending frame.
pub struct AnimationLoop {
    frame: FrameSlot,
}

impl AnimationLoop {
    pub fn start(on_frame: impl FnMut() -> bool + 'static) -> Self {
        let on_frame: Box<dyn FnMut() -> bool> = Box::new(on_frame);
        let frame: FrameSlot = Rc::new(RefCell::new(None));
        schedule_frame(frame.clone(), Rc::new(RefCell::new(on_frame)));
        Self { frame }
    }

    pub fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

fn schedule_frame(slot: FrameSlot, on_frame: FrameCallback) {
    let pending = slot.clone();
    let handle = request_animation_frame(move |_| {
        pending.borrow_mut().take();
        let keep_going = {
            let mut run = on_frame.borrow_mut();
            (*run)()
        };
        if keep_going {
            schedule_frame(pending, on_frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

/// IntersectionObserver that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        root_margin: Option<&str>,
        threshold: f64,
        mut on_enter: impl FnMut(Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, WireError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
