use crate::domain::Size;
use crate::rigid_body::{Pose, Vec2};
use crate::rigid_body_system::{BodyHandle, PhysicsEngine};

use super::boundary::{BoundaryAdapter, BoundaryBodies};

/// The engine plus every body in it, sealed after assembly.
///
/// There is no way to add a body once assembled; the tracked set is fixed for
/// the life of the bridge.
pub struct SimulationWorld<E: PhysicsEngine> {
    engine: E,
    tracked: Vec<BodyHandle>,
    boundaries: BoundaryAdapter,
    running: bool,
    max_step_ms: f32,
}

impl<E: PhysicsEngine> SimulationWorld<E> {
    pub(super) fn assemble(
        engine: E,
        tracked: Vec<BodyHandle>,
        boundaries: BoundaryAdapter,
        max_step_ms: f32,
    ) -> Self {
        debug_assert_eq!(engine.body_count(), tracked.len() + 3);
        Self {
            engine,
            tracked,
            boundaries,
            running: false,
            max_step_ms,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn tracked_handles(&self) -> &[BodyHandle] {
        &self.tracked
    }

    pub fn boundaries(&self) -> BoundaryBodies {
        self.boundaries.bodies()
    }

    pub fn container_size(&self) -> Size {
        self.boundaries.size()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or resume) stepping on subsequent ticks
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Advance by `dt_ms`, truncated to the configured maximum.
    /// Returns `false` when the world is not running or `dt_ms` is unusable.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        if !self.running || !(dt_ms.is_finite() && dt_ms > 0.0) {
            return false;
        }
        let dt_ms = dt_ms.min(self.max_step_ms);
        self.engine.step(dt_ms / 1000.0);
        true
    }

    /// Make every tracked body dynamic with zero linear and angular velocity.
    pub fn release_tracked(&mut self) {
        for &handle in &self.tracked {
            self.engine.set_static(handle, false);
            self.engine.set_velocity(handle, Vec2::zero());
            self.engine.set_angular_velocity(handle, 0.0);
        }
    }

    pub fn pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.engine.pose(handle)
    }

    pub(super) fn resize(&mut self, size: Size) -> bool {
        self.boundaries.on_resize(&mut self.engine, size)
    }
}
