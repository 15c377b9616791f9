use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// dt reported for the very first frame (no previous timestamp)
const FIRST_FRAME_MS: f32 = 1000.0 / 60.0;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// requestAnimationFrame loop calling `on_frame(dt_ms)` once per frame
pub struct Ticker {
    running: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
    // The callback re-schedules itself through this slot, so it holds a clone
    // of it; `stop` empties the slot to break that cycle.
    frame: Rc<RefCell<Option<FrameCallback>>>,
    window: Window,
}

impl Ticker {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f32) + 'static,
    {
        let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        let request_id = Rc::new(Cell::new(None));

        let frame_slot = frame.clone();
        let running_flag = running.clone();
        let request_slot = request_id.clone();
        let win = window.clone();
        let mut last_timestamp: Option<f64> = None;

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !running_flag.get() {
                return;
            }
            let dt = match last_timestamp {
                Some(prev) => (timestamp - prev) as f32,
                None => FIRST_FRAME_MS,
            };
            last_timestamp = Some(timestamp);

            on_frame(dt);

            if !running_flag.get() {
                return;
            }
            if let Some(cb) = frame_slot.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => request_slot.set(Some(id)),
                    Err(_) => {
                        console_error!("requestAnimationFrame failed; ticker stopped");
                        running_flag.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let requested = match frame.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => Err(JsValue::from_str("frame callback missing")),
        };
        let id = match requested {
            Ok(id) => id,
            Err(e) => {
                frame.borrow_mut().take();
                return Err(e);
            }
        };
        request_id.set(Some(id));

        Ok(Self { running, request_id, frame, window: window.clone() })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and free the callback (with everything it
    /// captured). Must not be called from inside `on_frame`.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.frame.borrow_mut().take();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
