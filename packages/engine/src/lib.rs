//! Tumble Engine - drops page elements into their container as rigid bodies
//!
//! Architecture:
//! - core/          - Logging, errors, random
//! - domain/        - Config and geometry
//! - systems/       - Rigid-body engine
//! - simulation/    - Bridge orchestration (DOM-free)
//! - api/           - Browser bindings

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Compatibility re-exports (keeps short internal/external paths working)
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{init_physics_bridge, BridgeHandle};
pub use crate::core::{BridgeError, BridgeWarning};
pub use domain::{BridgeConfig, SpawnMode};
pub use simulation::{ElementHost, PhysicsBridge, TriggerState, VisualAdapter};
