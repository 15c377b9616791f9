use crate::core::Rng;
use crate::domain::{BridgeConfig, Size, SpawnMode};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{BodyHandle, PhysicsEngine};

use super::registry::FoundElement;

/// Element whose transform is driven by a body
#[derive(Clone, Debug)]
pub struct TrackedElement<N> {
    pub node: N,
    /// Size read once at creation (or the fallback); never refreshed
    pub size: Size,
}

/// One row of the body <-> element table. Written once, read every tick.
#[derive(Clone, Debug)]
pub struct TrackedBody<N> {
    pub handle: BodyHandle,
    pub element: TrackedElement<N>,
}

/// One static body per element, in discovery order.
pub(super) fn create_tracked_bodies<N, E: PhysicsEngine>(
    engine: &mut E,
    elements: Vec<FoundElement<N>>,
    container: Size,
    config: &BridgeConfig,
    rng: &mut Rng,
) -> Vec<TrackedBody<N>> {
    let fallback = config.default_element_size();

    elements
        .into_iter()
        .map(|found| {
            let size = found.size.or(fallback);
            let position = match config.spawn.mode {
                SpawnMode::Randomized => random_spawn(container, size, config, rng),
                SpawnMode::InPlace => found.centre,
            };
            let handle = engine.create_body(
                Vec2::new(size.width, size.height),
                position,
                config.material,
                true,
            );
            TrackedBody {
                handle,
                element: TrackedElement { node: found.node, size },
            }
        })
        .collect()
}

/// x uniform in [0, width); y fully above the container's top edge
pub(super) fn random_spawn(container: Size, size: Size, config: &BridgeConfig, rng: &mut Rng) -> Vec2 {
    let width = if container.width.is_finite() { container.width.max(0.0) } else { 0.0 };
    let x = rng.next_f32() * width;
    let lift = size.height / 2.0 + config.spawn.min_offset + rng.next_f32() * config.spawn.spread;
    // Strictly negative even with a zero offset/spread config
    let y = -lift.max(f32::EPSILON);
    Vec2::new(x, y)
}
