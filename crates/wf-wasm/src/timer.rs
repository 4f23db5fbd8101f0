//! `setTimeout`-backed debounce scheduler
//!
//! Implements the core's [`DelayScheduler`] over `window.setTimeout` /
//! `clearTimeout`. The JS callback closure is shared through a slot that the
//! entry point fills once the controller exists, breaking the construction
//! cycle between controller and scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use wf_core::DelayScheduler;

/// Slot holding the one debounce callback closure.
pub type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct WindowScheduler {
    window: Window,
    callback: SharedCallback,
}

impl WindowScheduler {
    pub fn new(window: Window, callback: SharedCallback) -> Self {
        Self { window, callback }
    }
}

impl DelayScheduler for WindowScheduler {
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32) -> Option<i32> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
