//! Domain - what the bridge simulates and how it is tuned

pub mod config;
pub mod geometry;

pub use config::{BridgeConfig, SpawnConfig, SpawnMode};
pub use geometry::{Size, Transform};
