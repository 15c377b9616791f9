//! Core - shared plumbing used by every other module
//!
//! - log:    console logging macros (must be first for macro export!)
//! - error:  fatal and degraded outcomes of bridge setup
//! - random: seeded xorshift32 for spawn placement

#[macro_use]
pub mod log;
pub mod error;
pub mod random;

pub use error::{BridgeError, BridgeWarning};
pub use random::Rng;
