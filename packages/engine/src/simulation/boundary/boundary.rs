use crate::domain::Size;
use crate::rigid_body::{Material, Vec2};
use crate::rigid_body_system::{BodyHandle, PhysicsEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryBodies {
    pub ground: BodyHandle,
    pub left_wall: BodyHandle,
    pub right_wall: BodyHandle,
}

/// Ground and walls around the container, kept in step with its size.
///
/// Coordinates are anchored at the container's top-left corner, so only the
/// ground and the right wall depend on the size. The left wall is placed once
/// and never moved.
pub struct BoundaryAdapter {
    bodies: BoundaryBodies,
    size: Size,
    thickness: f32,
    /// Extra wall height above the top edge so dropping bodies stay inside
    headroom: f32,
}

impl BoundaryAdapter {
    pub(super) fn create<E: PhysicsEngine>(engine: &mut E, size: Size, thickness: f32, headroom: f32) -> Self {
        let t = thickness;
        let material = Material::boundary();

        let ground = engine.create_body(
            Vec2::new(size.width, t),
            ground_centre(size, t),
            material,
            true,
        );
        let left_wall = engine.create_body(
            Vec2::new(t, wall_height(size, headroom)),
            Vec2::new(-t / 2.0, size.height / 2.0),
            material,
            true,
        );
        let right_wall = engine.create_body(
            Vec2::new(t, wall_height(size, headroom)),
            right_wall_centre(size, t),
            material,
            true,
        );

        Self {
            bodies: BoundaryBodies { ground, left_wall, right_wall },
            size,
            thickness,
            headroom,
        }
    }

    pub fn bodies(&self) -> BoundaryBodies {
        self.bodies
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Reposition ground and right wall for a new container size.
    ///
    /// Returns `false` (and touches nothing) when the size is unchanged or unusable.
    pub(super) fn on_resize<E: PhysicsEngine>(&mut self, engine: &mut E, size: Size) -> bool {
        if !size.is_usable() || size == self.size {
            return false;
        }
        let t = self.thickness;

        engine.set_position(self.bodies.ground, ground_centre(size, t));
        engine.set_half_extents(self.bodies.ground, Vec2::new(size.width / 2.0, t / 2.0));

        engine.set_position(self.bodies.right_wall, right_wall_centre(size, t));
        engine.set_half_extents(
            self.bodies.right_wall,
            Vec2::new(t / 2.0, wall_height(size, self.headroom) / 2.0),
        );

        self.size = size;
        true
    }
}

fn ground_centre(size: Size, thickness: f32) -> Vec2 {
    Vec2::new(size.width / 2.0, size.height + thickness / 2.0)
}

fn right_wall_centre(size: Size, thickness: f32) -> Vec2 {
    Vec2::new(size.width + thickness / 2.0, size.height / 2.0)
}

fn wall_height(size: Size, headroom: f32) -> f32 {
    size.height + 2.0 * headroom
}
