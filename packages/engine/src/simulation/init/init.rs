use crate::core::{BridgeError, Rng};
use crate::domain::BridgeConfig;
use crate::rigid_body_system::PhysicsEngine;

use super::body_factory::create_tracked_bodies;
use super::boundary::BoundaryAdapter;
use super::bridge_stats::BridgeStats;
use super::registry::{discover, ElementHost};
use super::sim_world::SimulationWorld;
use super::sync_loop::{SyncLoop, VisualAdapter};
use super::trigger::ActivationTrigger;
use super::PhysicsBridge;

/// Discovery -> bodies -> boundaries -> sealed world -> first write -> armed trigger.
///
/// Errors return before the engine receives a single body.
pub(super) fn create_bridge<H, A, E>(
    host: &H,
    container_id: &str,
    adapter: A,
    config: BridgeConfig,
    mut engine: E,
) -> Result<PhysicsBridge<H::Node, A, E>, BridgeError>
where
    H: ElementHost,
    A: VisualAdapter<H::Node>,
    E: PhysicsEngine,
{
    let discovery = discover(host, container_id, &config.marker_selector)?;
    let container_size = discovery.info.size;

    let mut rng = config.seed.map(Rng::new).unwrap_or_else(Rng::from_entropy);
    let tracked = create_tracked_bodies(&mut engine, discovery.elements, container_size, &config, &mut rng);
    let boundaries = BoundaryAdapter::create(
        &mut engine,
        container_size,
        config.boundary_thickness,
        config.spawn_headroom(),
    );

    let handles = tracked.iter().map(|t| t.handle).collect();
    let world = SimulationWorld::assemble(engine, handles, boundaries, config.max_step_ms);

    let mut sync = SyncLoop::new(adapter);
    sync.prepare(&tracked);
    sync.write(&world, &tracked);

    let mut trigger = ActivationTrigger::new(config.visibility_threshold);
    trigger.arm();

    Ok(PhysicsBridge {
        container: discovery.container,
        container_id: container_id.to_string(),
        config,
        world,
        tracked,
        trigger,
        sync,
        warnings: discovery.warnings,
        stats: BridgeStats::default(),
        destroyed: false,
    })
}
