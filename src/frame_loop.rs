// Runs a step function once per display refresh through requestAnimationFrame,
// until the step asks to finish or the loop is stopped from outside.

use log::warn;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    // The only strong reference to the frame closure. The closure itself
    // holds a Weak so dropping this tears the loop down.
    callback: FrameCallback,
}

impl FrameLoop {
    /// Schedules `step` for the next refresh and keeps rescheduling it while
    /// it returns true.
    pub fn start<F>(window: &Window, mut step: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut() -> bool + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let this: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&callback);
        let frame_window = window.clone();
        let frame_running = running.clone();
        let frame_handle = handle.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_handle.set(None);
            if !frame_running.get() {
                return;
            }
            if !step() {
                frame_running.set(false);
                return;
            }
            let callback = match this.upgrade() {
                Some(callback) => callback,
                None => return,
            };
            let callback = callback.borrow();
            if let Some(closure) = callback.as_ref() {
                match frame_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => frame_handle.set(Some(id)),
                    Err(err) => {
                        warn!("requestAnimationFrame failed: {:?}", err);
                        frame_running.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match callback.borrow().as_ref() {
            Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        handle.set(Some(id));

        Ok(FrameLoop {
            window: window.clone(),
            running,
            handle,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    // Cancels the pending frame before dropping the closure, so the browser
    // never calls into a freed callback.
    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
