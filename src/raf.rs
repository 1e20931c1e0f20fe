// requestAnimationFrame loop that feeds the DOM adapter its clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::types::Timestamp;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Calls its callback with the rAF timestamp every frame until stopped or dropped.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(Timestamp)>>,
    running: Cell<bool>,
    frame_id: Cell<i32>,
}

impl FrameLoop {
    /// A loop that is not yet running.
    pub fn new(callback: impl FnMut(Timestamp) + 'static) -> Self {
        FrameLoop {
            inner: Rc::new(LoopInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                frame_id: Cell::new(0),
            }),
        }
    }

    /// Request the first frame. No-op when already running.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |now_ms: f64| {
            if !inner.running.get() {
                return;
            }
            // A callback that re-enters the loop (destroy from a frame) skips this frame.
            if let Ok(mut callback) = inner.callback.try_borrow_mut() {
                callback(Timestamp::from_millis_f64(now_ms));
            }
            if !inner.running.get() {
                return;
            }
            if let Some(closure) = inner.closure.borrow().as_ref() {
                inner
                    .frame_id
                    .set(request_animation_frame(closure.as_ref().unchecked_ref()));
            }
        }) as Box<dyn FnMut(f64)>);

        self.inner
            .frame_id
            .set(request_animation_frame(closure.as_ref().unchecked_ref()));
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Cancel the pending frame. The loop can be started again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.frame_id.get());
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Breaks the closure -> inner -> closure cycle.
        if let Ok(mut closure) = self.inner.closure.try_borrow_mut() {
            closure.take();
        }
    }
}
