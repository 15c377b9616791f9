//! JS entry point
//!
//! ```js
//! import init, { initPhysicsBridge } from "tumble-engine";
//! await init();
//! const bridge = initPhysicsBridge("hero", JSON.stringify({ trigger_id: "hero-title" }));
//! // later
//! bridge?.destroy();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use super::dom::{anchor_container, DomHost, StyleAdapter};
use super::observer::VisibilityObserver;
use super::ticker::Ticker;
use crate::core::BridgeWarning;
use crate::domain::BridgeConfig;
use crate::simulation::{ElementHost, PhysicsBridge};

type DomBridge = PhysicsBridge<Element, StyleAdapter>;
type SharedBridge = Rc<RefCell<DomBridge>>;

/// Live bridge owned by JS. Drop it or call `destroy()` to stop the frame loop.
#[wasm_bindgen]
pub struct BridgeHandle {
    bridge: SharedBridge,
    window: Window,
    ticker: Option<Ticker>,
    observer: Option<VisibilityObserver>,
    resize: Option<Closure<dyn FnMut()>>,
}

/// Set up the bridge for `container_id`.
///
/// Returns `undefined` (after logging why) when the container is missing or
/// holds no marked elements. A malformed `config_json` is logged and the
/// defaults are used.
#[wasm_bindgen(js_name = initPhysicsBridge)]
pub fn init_physics_bridge(container_id: &str, config_json: Option<String>) -> Option<BridgeHandle> {
    let config = match config_json {
        Some(json) => BridgeConfig::from_json(&json).unwrap_or_else(|e| {
            console_error!("{}; using defaults", e);
            BridgeConfig::default()
        }),
        None => BridgeConfig::default(),
    };

    let Some(window) = web_sys::window() else {
        console_error!("no window; physics bridge disabled");
        return None;
    };
    let Some(host) = DomHost::from_window() else {
        console_error!("no document; physics bridge disabled");
        return None;
    };

    let bridge = PhysicsBridge::initialize_or_log(&host, container_id, StyleAdapter::default(), config)?;
    anchor_container(&window, bridge.container());
    let bridge = Rc::new(RefCell::new(bridge));

    let ticker = start_ticker(&window, &bridge);
    let observer = attach_observer(&host, &bridge);
    let resize = attach_resize(&window, host, &bridge);

    Some(BridgeHandle { bridge, window, ticker, observer, resize })
}

fn start_ticker(window: &Window, bridge: &SharedBridge) -> Option<Ticker> {
    let shared = bridge.clone();
    let started = Ticker::start(window, move |dt_ms| {
        if let Ok(mut b) = shared.try_borrow_mut() {
            b.tick(dt_ms);
        }
    });
    match started {
        Ok(ticker) => Some(ticker),
        Err(e) => {
            console_error!("could not start frame loop: {:?}", e);
            None
        }
    }
}

fn attach_observer(host: &DomHost, bridge: &SharedBridge) -> Option<VisibilityObserver> {
    let (target, threshold) = {
        let b = bridge.borrow();
        let target = match &b.config().trigger_id {
            Some(id) => host.document().get_element_by_id(id).ok_or_else(|| format!("trigger element #{} not found", id)),
            None => Ok(b.container().clone()),
        };
        (target, b.config().visibility_threshold)
    };

    let target = match target {
        Ok(target) => target,
        Err(reason) => {
            fire_without_observer(bridge, reason);
            return None;
        }
    };

    let shared = bridge.clone();
    let observed = VisibilityObserver::observe(&target, threshold, move |ratio| {
        shared.try_borrow_mut().map(|mut b| b.on_visibility(ratio)).unwrap_or(false)
    });
    match observed {
        Ok(observer) => Some(observer),
        Err(e) => {
            fire_without_observer(bridge, format!("IntersectionObserver unavailable: {:?}", e));
            None
        }
    }
}

fn fire_without_observer(bridge: &SharedBridge, reason: String) {
    if let Ok(mut b) = bridge.try_borrow_mut() {
        b.activate_now(BridgeWarning::TriggerUnavailable { reason });
    }
}

fn attach_resize(window: &Window, host: DomHost, bridge: &SharedBridge) -> Option<Closure<dyn FnMut()>> {
    let shared = bridge.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let Ok(mut b) = shared.try_borrow_mut() else {
            return;
        };
        let size = host.container_size(b.container());
        b.on_resize(size);
    }) as Box<dyn FnMut()>);

    match window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
        Ok(()) => Some(on_resize),
        Err(e) => {
            console_warn!("could not listen for resize: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen]
impl BridgeHandle {
    /// Stop the frame loop and detach every listener. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(on_resize) = self.resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        if let Ok(mut b) = self.bridge.try_borrow_mut() {
            if b.destroy() && b.adapter().failed_writes() > 0 {
                console_warn!("#{}: {} transform writes failed", b.container_id(), b.adapter().failed_writes());
            }
        }
    }

    /// Bodies released and still ticking
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        let b = self.bridge.borrow();
        !b.is_destroyed() && b.world().is_running()
    }

    #[wasm_bindgen(js_name = triggerState)]
    pub fn trigger_state(&self) -> String {
        self.bridge.borrow().trigger_state().as_str().to_string()
    }

    #[wasm_bindgen(js_name = trackedCount)]
    pub fn tracked_count(&self) -> usize {
        self.bridge.borrow().tracked_count()
    }

    pub fn ticks(&self) -> u64 {
        self.bridge.borrow().stats().ticks()
    }

    /// Wall time of the last tick in ms
    #[wasm_bindgen(js_name = lastTickMs)]
    pub fn last_tick_ms(&self) -> f64 {
        self.bridge.borrow().stats().last_tick_ms()
    }
}

impl Drop for BridgeHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}
