//! RigidBodySystem - minimal 2D box physics for the DOM bridge
//!
//! This is intentionally simple (no SAT, no broadphase, no sleeping).
//! Goals:
//! - Give falling page elements believable weight, bounce and spin.
//! - Keep bodies stable and deterministic for a given sequence of steps.
//! - Offer exactly the capabilities the bridge consumes, behind `PhysicsEngine`.
//!
//! Current behavior:
//! - Semi-implicit Euler integration under constant gravity.
//! - Contacts between axis-aligned boxes enclosing each rotated rectangle.
//! - Sequential impulses with restitution and Coulomb friction; off-centre
//!   contacts produce spin.

mod collision;
mod system;

pub use system::PhysicsWorld;

use crate::rigid_body::{Material, Pose, Vec2};

/// Opaque reference to a body inside one engine instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) u32);

/// What the bridge needs from a rigid-body engine.
///
/// Setters on an unknown handle are no-ops; getters return `None`.
pub trait PhysicsEngine {
    /// Box of `size` (full width/height) centred at `position`
    fn create_body(&mut self, size: Vec2, position: Vec2, material: Material, is_static: bool) -> BodyHandle;

    fn set_static(&mut self, body: BodyHandle, is_static: bool);

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec2);

    fn set_angular_velocity(&mut self, body: BodyHandle, omega: f32);

    fn set_position(&mut self, body: BodyHandle, position: Vec2);

    /// Resize a body in place (boundaries follow the container)
    fn set_half_extents(&mut self, body: BodyHandle, half: Vec2);

    /// Advance by `dt` seconds
    fn step(&mut self, dt: f32);

    fn pose(&self, body: BodyHandle) -> Option<Pose>;

    fn is_static(&self, body: BodyHandle) -> Option<bool>;

    fn velocity(&self, body: BodyHandle) -> Option<Vec2>;

    fn angular_velocity(&self, body: BodyHandle) -> Option<f32>;

    fn half_extents(&self, body: BodyHandle) -> Option<Vec2>;

    fn body_count(&self) -> usize;
}
