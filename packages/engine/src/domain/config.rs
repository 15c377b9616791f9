use serde::{Deserialize, Serialize};

use crate::core::BridgeError;
use crate::rigid_body::{Material, Vec2};

use super::geometry::Size;

/// How tracked bodies are placed before activation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnMode {
    /// Random x across the container, random height above its top edge
    Randomized,
    /// Body centre on the element's current box (no drop-in)
    InPlace,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub mode: SpawnMode,
    /// Gap between the container top and the lowest possible spawn
    pub min_offset: f32,
    /// Extra random height added on top of `min_offset`
    pub spread: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            mode: SpawnMode::Randomized,
            min_offset: 50.0,
            spread: 400.0,
        }
    }
}

/// Bridge tuning. Every field has a default; a JSON config only needs to
/// name what it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// CSS selector for tracked children of the container
    pub marker_selector: String,
    /// Element observed for visibility; the container when `None`
    pub trigger_id: Option<String>,
    /// Visible area ratio that releases the bodies
    pub visibility_threshold: f64,
    /// px/s²
    pub gravity: Vec2,
    pub material: Material,
    /// Side used when an element reports no usable size
    pub default_size: f32,
    pub boundary_thickness: f32,
    pub spawn: SpawnConfig,
    /// Upper bound for a single step; longer frames are truncated
    pub max_step_ms: f32,
    /// px/s
    pub max_speed: f32,
    pub seed: Option<u32>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            marker_selector: ".matter-box".to_string(),
            trigger_id: None,
            visibility_threshold: 0.1,
            gravity: Vec2::new(0.0, 980.0),
            material: Material::default(),
            default_size: 50.0,
            boundary_thickness: 100.0,
            spawn: SpawnConfig::default(),
            max_step_ms: 1000.0 / 30.0,
            max_speed: 2400.0,
            seed: None,
        }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let config: BridgeConfig =
            serde_json::from_str(json).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
        Ok(config.validate())
    }

    pub fn default_element_size(&self) -> Size {
        Size::square(self.default_size)
    }

    /// Highest point a randomized spawn can reach above the container top
    pub fn spawn_headroom(&self) -> f32 {
        self.spawn.min_offset + self.spawn.spread + self.default_size
    }

    /// Clamp values the engine cannot work with back to defaults.
    pub fn validate(mut self) -> Self {
        let defaults = BridgeConfig::default();

        if !(self.visibility_threshold >= 0.0 && self.visibility_threshold <= 1.0) {
            console_warn!(
                "visibility_threshold {} outside [0, 1], using {}",
                self.visibility_threshold,
                defaults.visibility_threshold
            );
            self.visibility_threshold = defaults.visibility_threshold;
        }
        if !(self.default_size.is_finite() && self.default_size > 0.0) {
            console_warn!("default_size {} unusable, using {}", self.default_size, defaults.default_size);
            self.default_size = defaults.default_size;
        }
        if !(self.boundary_thickness.is_finite() && self.boundary_thickness > 0.0) {
            console_warn!(
                "boundary_thickness {} unusable, using {}",
                self.boundary_thickness,
                defaults.boundary_thickness
            );
            self.boundary_thickness = defaults.boundary_thickness;
        }
        if !(self.max_step_ms.is_finite() && self.max_step_ms > 0.0) {
            self.max_step_ms = defaults.max_step_ms;
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            self.max_speed = defaults.max_speed;
        }
        if !self.gravity.is_finite() {
            self.gravity = defaults.gravity;
        }
        self.spawn.min_offset = finite_non_negative(self.spawn.min_offset, defaults.spawn.min_offset);
        self.spawn.spread = finite_non_negative(self.spawn.spread, defaults.spawn.spread);
        self.material = self.material.sanitized();
        self
    }
}

fn finite_non_negative(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 { value } else { fallback }
}
