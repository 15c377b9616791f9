use crate::rigid_body::{Material, Pose, RigidBody, Vec2};

use super::collision::{box_contact, resolve};
use super::{BodyHandle, PhysicsEngine};

/// Contact passes per step
const SOLVER_ITERATIONS: usize = 4;
/// Per-step multiplier on angular velocity
const ANGULAR_DAMPING: f32 = 0.995;
/// rad/s
const MAX_ANGULAR_SPEED: f32 = 20.0;

/// Owns every body and advances them together
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec2,
    max_speed: f32,
}

impl PhysicsWorld {
    /// `gravity` in px/s², `max_speed` in px/s
    pub fn new(gravity: Vec2, max_speed: f32) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity,
            max_speed,
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        let idx = handle.0.checked_sub(1)? as usize;
        self.bodies.get(idx)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let idx = handle.0.checked_sub(1)? as usize;
        self.bodies.get_mut(idx)
    }

    fn integrate(&mut self, dt: f32) {
        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }

            body.velocity += self.gravity * dt;
            // Clamp to keep bodies from tunnelling through thin boundaries.
            body.velocity = body.velocity.clamp_length(self.max_speed);
            body.pos += body.velocity * dt;

            body.angular_vel =
                (body.angular_vel * ANGULAR_DAMPING).clamp(-MAX_ANGULAR_SPEED, MAX_ANGULAR_SPEED);
            body.angle += body.angular_vel * dt;
        }
    }

    fn solve_contacts(&mut self) {
        let n = self.bodies.len();
        for _ in 0..SOLVER_ITERATIONS {
            // Dynamic pairs first, static contacts last so nothing ends a
            // step pushed into a boundary.
            for i in 0..n {
                for j in (i + 1)..n {
                    if self.bodies[i].is_static || self.bodies[j].is_static {
                        continue;
                    }
                    self.resolve_pair(i, j);
                }
            }
            for i in 0..n {
                if self.bodies[i].is_static {
                    continue;
                }
                for j in 0..n {
                    if self.bodies[j].is_static {
                        self.resolve_pair(i, j);
                    }
                }
            }
        }
    }

    fn resolve_pair(&mut self, i: usize, j: usize) {
        let (a, b) = pair_mut(&mut self.bodies, i, j);
        if let Some(contact) = box_contact(a, b) {
            resolve(a, b, &contact);
        }
    }
}

/// Two distinct mutable borrows out of one slice
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

impl PhysicsEngine for PhysicsWorld {
    fn create_body(&mut self, size: Vec2, position: Vec2, material: Material, is_static: bool) -> BodyHandle {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(RigidBody::new_rect(
            position.x, position.y, size.x, size.y, material, is_static, id,
        ));
        BodyHandle(id)
    }

    fn set_static(&mut self, body: BodyHandle, is_static: bool) {
        if let Some(b) = self.body_mut(body) {
            b.is_static = is_static;
        }
    }

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec2) {
        if let Some(b) = self.body_mut(body) {
            b.velocity = velocity;
        }
    }

    fn set_angular_velocity(&mut self, body: BodyHandle, omega: f32) {
        if let Some(b) = self.body_mut(body) {
            b.angular_vel = omega;
        }
    }

    fn set_position(&mut self, body: BodyHandle, position: Vec2) {
        if let Some(b) = self.body_mut(body) {
            b.pos = position;
        }
    }

    fn set_half_extents(&mut self, body: BodyHandle, half: Vec2) {
        if let Some(b) = self.body_mut(body) {
            let density = b.density();
            b.set_half_extents(half, density);
        }
    }

    fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.integrate(dt);
        self.solve_contacts();
    }

    fn pose(&self, body: BodyHandle) -> Option<Pose> {
        self.body(body).map(RigidBody::pose)
    }

    fn is_static(&self, body: BodyHandle) -> Option<bool> {
        self.body(body).map(|b| b.is_static)
    }

    fn velocity(&self, body: BodyHandle) -> Option<Vec2> {
        self.body(body).map(|b| b.velocity)
    }

    fn angular_velocity(&self, body: BodyHandle) -> Option<f32> {
        self.body(body).map(|b| b.angular_vel)
    }

    fn half_extents(&self, body: BodyHandle) -> Option<Vec2> {
        self.body(body).map(|b| Vec2::new(b.half_width, b.half_height))
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(Vec2::new(0.0, 980.0), 2400.0)
    }

    #[test]
    fn static_bodies_never_move() {
        let mut w = world();
        let h = w.create_body(Vec2::new(50.0, 50.0), Vec2::new(10.0, -100.0), Material::default(), true);
        for _ in 0..30 {
            w.step(DT);
        }
        assert_eq!(w.pose(h).unwrap().position, Vec2::new(10.0, -100.0));
    }

    #[test]
    fn dynamic_body_falls_and_lands_on_ground() {
        let mut w = world();
        let ground = w.create_body(Vec2::new(800.0, 100.0), Vec2::new(400.0, 650.0), Material::boundary(), true);
        let b = w.create_body(Vec2::new(50.0, 50.0), Vec2::new(400.0, 0.0), Material::default(), false);

        for _ in 0..600 {
            w.step(DT);
        }
        let pos = w.pose(b).unwrap().position;
        let ext = w.body(b).unwrap().aabb_half_extents();
        assert!(pos.y + ext.y <= 600.0 + 0.5, "resting on top of the ground, got {}", pos.y);
        assert!(pos.y > 500.0, "should have fallen, got {}", pos.y);
        assert_eq!(w.pose(ground).unwrap().position, Vec2::new(400.0, 650.0));
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut w = world();
        let ghost = BodyHandle(42);
        w.set_velocity(ghost, Vec2::new(1.0, 1.0));
        assert!(w.pose(ghost).is_none());
        assert!(w.pose(BodyHandle(0)).is_none());
        assert_eq!(w.body_count(), 0);
    }

    #[test]
    fn speed_is_clamped() {
        let mut w = PhysicsWorld::new(Vec2::new(0.0, 1.0e6), 100.0);
        let b = w.create_body(Vec2::new(10.0, 10.0), Vec2::zero(), Material::default(), false);
        w.step(DT);
        assert!(w.velocity(b).unwrap().length() <= 100.0 + 1e-3);
    }
}
