use crate::domain::Transform;
use crate::rigid_body_system::PhysicsEngine;

use super::body_factory::TrackedBody;
use super::sim_world::SimulationWorld;

/// Write side of the page: turns a transform into something visible.
pub trait VisualAdapter<N> {
    /// Take `node` out of normal flow so the transform alone positions it.
    /// Called once per element.
    fn detach_from_flow(&mut self, node: &N);

    fn write_transform(&mut self, node: &N, transform: &Transform);
}

/// Copies body poses onto element transforms every tick
pub struct SyncLoop<A> {
    adapter: A,
    prepared: bool,
}

impl<A> SyncLoop<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter, prepared: false }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Detach every tracked element from flow; later calls do nothing.
    pub fn prepare<N>(&mut self, tracked: &[TrackedBody<N>])
    where
        A: VisualAdapter<N>,
    {
        if self.prepared {
            return;
        }
        for body in tracked {
            self.adapter.detach_from_flow(&body.element.node);
        }
        self.prepared = true;
    }

    /// Returns the number of transforms written.
    pub fn write<N, E: PhysicsEngine>(&mut self, world: &SimulationWorld<E>, tracked: &[TrackedBody<N>]) -> usize
    where
        A: VisualAdapter<N>,
    {
        let mut written = 0;
        for body in tracked {
            let Some(pose) = world.pose(body.handle) else {
                continue;
            };
            let transform = Transform::from_pose(pose, body.element.size);
            self.adapter.write_transform(&body.element.node, &transform);
            written += 1;
        }
        written
    }
}
