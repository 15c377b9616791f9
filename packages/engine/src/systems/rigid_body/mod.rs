//! RigidBody - a box that moves as a unit
//!
//! Phase: DOM bridge
//!
//! Bodies are rectangles described by a centre, half extents and an angle.
//! Collision uses the axis-aligned box that encloses the rotated rectangle.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Material, Pose, RigidBody};
