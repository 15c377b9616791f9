//! Systems - the rigid-body engine behind the bridge
//!
//! - rigid_body:        Vec2, material, single box body
//! - rigid_body_system: world, contacts, `PhysicsEngine` seam

pub mod rigid_body;
pub mod rigid_body_system;
