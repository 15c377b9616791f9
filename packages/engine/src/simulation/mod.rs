//! PhysicsBridge - drops page elements into their container
//!
//! Orchestration only; every concern lives in its own file:
//! - registry/   find the container and its marked children
//! - bodies/     one static body per element, spawned above the container
//! - boundary/   ground and walls that follow the container size
//! - step/       the sealed simulation world
//! - trigger/    one-shot visibility gate (Pending -> Observing -> Fired)
//! - sync/       pose -> transform write-back
//!
//! Nothing in here touches the DOM directly. The page is reached through
//! `ElementHost` (reads) and `VisualAdapter` (writes), so the whole bridge
//! runs natively under `cargo test`.

use crate::core::{BridgeError, BridgeWarning};
use crate::domain::{BridgeConfig, Size};
use crate::rigid_body_system::{PhysicsEngine, PhysicsWorld};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/bridge_stats.rs"]
mod bridge_stats;
#[path = "registry/registry.rs"]
mod registry;
#[path = "bodies/body_factory.rs"]
mod body_factory;
#[path = "boundary/boundary.rs"]
mod boundary;
#[path = "step/sim_world.rs"]
mod sim_world;
#[path = "trigger/trigger.rs"]
mod trigger;
#[path = "sync/sync_loop.rs"]
mod sync_loop;
#[path = "init/init.rs"]
mod init;

pub use body_factory::{TrackedBody, TrackedElement};
pub use boundary::{BoundaryAdapter, BoundaryBodies};
pub use bridge_stats::BridgeStats;
pub use registry::{discover, ContainerInfo, ContainerKind, Discovery, ElementHost, FoundElement};
pub use sim_world::SimulationWorld;
pub use sync_loop::{SyncLoop, VisualAdapter};
pub use trigger::{ActivationTrigger, TriggerState};

use perf_timer::PerfTimer;

/// One container's worth of simulated elements
pub struct PhysicsBridge<N, A, E: PhysicsEngine = PhysicsWorld> {
    container: N,
    container_id: String,
    config: BridgeConfig,
    world: SimulationWorld<E>,
    /// Body <-> element table, fixed after initialization
    tracked: Vec<TrackedBody<N>>,
    trigger: ActivationTrigger,
    sync: SyncLoop<A>,
    warnings: Vec<BridgeWarning>,
    stats: BridgeStats,
    destroyed: bool,
}

impl<N: Clone, A: VisualAdapter<N>> PhysicsBridge<N, A, PhysicsWorld> {
    /// Build the bridge on the in-crate engine.
    pub fn initialize<H>(host: &H, container_id: &str, adapter: A, config: BridgeConfig) -> Result<Self, BridgeError>
    where
        H: ElementHost<Node = N>,
    {
        let engine = PhysicsWorld::new(config.gravity, config.max_speed);
        init::create_bridge(host, container_id, adapter, config, engine)
    }

    /// `initialize`, with any error logged instead of returned.
    pub fn initialize_or_log<H>(host: &H, container_id: &str, adapter: A, config: BridgeConfig) -> Option<Self>
    where
        H: ElementHost<Node = N>,
    {
        match Self::initialize(host, container_id, adapter, config) {
            Ok(bridge) => Some(bridge),
            Err(e) => {
                console_error!("{}; physics bridge disabled", e);
                None
            }
        }
    }
}

impl<N: Clone, A: VisualAdapter<N>, E: PhysicsEngine> PhysicsBridge<N, A, E> {
    /// Build the bridge on a caller-supplied engine (must be empty).
    pub fn initialize_with_engine<H>(
        host: &H,
        container_id: &str,
        adapter: A,
        config: BridgeConfig,
        engine: E,
    ) -> Result<Self, BridgeError>
    where
        H: ElementHost<Node = N>,
    {
        init::create_bridge(host, container_id, adapter, config, engine)
    }

    pub fn container(&self) -> &N {
        &self.container
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn world(&self) -> &SimulationWorld<E> {
        &self.world
    }

    pub fn tracked(&self) -> &[TrackedBody<N>] {
        &self.tracked
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    pub fn adapter(&self) -> &A {
        self.sync.adapter()
    }

    pub fn warnings(&self) -> &[BridgeWarning] {
        &self.warnings
    }

    pub fn stats(&self) -> &BridgeStats {
        &self.stats
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Visibility signal for the observed element.
    ///
    /// Returns `true` only for the signal that fired the trigger; the caller
    /// detaches its observer then.
    pub fn on_visibility(&mut self, ratio: f64) -> bool {
        if self.destroyed || !self.trigger.observe(ratio) {
            return false;
        }
        self.activate();
        true
    }

    /// Fire without a visibility signal (observer unavailable).
    pub fn activate_now(&mut self, reason: BridgeWarning) -> bool {
        if self.destroyed || self.trigger.has_fired() {
            return false;
        }
        reason.log();
        self.warnings.push(reason);
        if !self.trigger.fire_now() {
            return false;
        }
        self.activate();
        true
    }

    /// Runs synchronously inside the firing call, so the next step already
    /// sees dynamic bodies at rest.
    fn activate(&mut self) {
        self.world.release_tracked();
        self.world.start();
        console_log!("#{}: released {} bodies", self.container_id, self.tracked.len());
    }

    /// Container resized; only boundary bodies move.
    pub fn on_resize(&mut self, size: Size) -> bool {
        if self.destroyed {
            return false;
        }
        self.world.resize(size)
    }

    /// One frame: step (once running), then write every transform.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.destroyed {
            return;
        }
        let timer = PerfTimer::start();
        let stepped = self.world.step(dt_ms);
        self.sync.write(&self.world, &self.tracked);
        self.stats.record(stepped, timer.elapsed_ms());
    }

    /// Stop reacting to anything. Safe to call more than once.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.destroyed = true;
        console_log!("#{}: bridge destroyed after {} ticks", self.container_id, self.stats.ticks());
        true
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
