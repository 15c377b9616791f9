//! Browser side of the bridge
//!
//! - dom:      `ElementHost` / `VisualAdapter` over web-sys
//! - observer: IntersectionObserver wrapper for the activation trigger
//! - ticker:   requestAnimationFrame loop
//! - wasm:     `initPhysicsBridge` entry point and the JS-owned handle

pub mod dom;
pub mod observer;
pub mod ticker;
pub mod wasm;
