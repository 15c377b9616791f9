use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Surface and mass parameters shared by every tracked body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Fraction of tangential velocity removed per contact
    pub friction: f32,
    /// Mass per square pixel
    pub density: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.8,
            friction: 0.5,
            density: 0.04,
        }
    }
}

impl Material {
    /// Boundaries: no bounce of their own, grippy
    pub fn boundary() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.6,
            density: 1.0,
        }
    }

    pub fn sanitized(self) -> Self {
        let defaults = Material::default();
        Self {
            restitution: clamp_unit(self.restitution, defaults.restitution),
            friction: clamp_unit(self.friction, defaults.friction),
            density: if self.density.is_finite() && self.density > 0.0 {
                self.density
            } else {
                defaults.density
            },
        }
    }
}

fn clamp_unit(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { fallback }
}

/// Position and rotation read back from a body
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    /// Radians
    pub angle: f32,
}

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (centre of the box)
    pub pos: Vec2,
    /// Velocity vector (pixels per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_vel: f32,
    /// Total mass (area * density)
    pub mass: f32,
    /// Moment of inertia for a solid rectangle: m * (w² + h²) / 12
    pub moment_of_inertia: f32,
    /// Static bodies are never integrated and never pushed
    pub is_static: bool,
    /// Unique ID for this body
    pub id: u32,

    // === Shape ===
    pub half_width: f32,
    pub half_height: f32,

    // === Material properties ===
    pub restitution: f32,
    pub friction: f32,
}

impl RigidBody {
    /// Create a rectangular rigid body centred at (x, y)
    pub fn new_rect(x: f32, y: f32, w: f32, h: f32, material: Material, is_static: bool, id: u32) -> Self {
        let half_width = (w / 2.0).max(0.5);
        let half_height = (h / 2.0).max(0.5);
        let (mass, moment_of_inertia) = mass_properties(half_width, half_height, material.density);

        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            moment_of_inertia,
            is_static,
            id,
            half_width,
            half_height,
            restitution: material.restitution,
            friction: material.friction,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose { position: self.pos, angle: self.angle }
    }

    /// 0 for static bodies so they absorb any impulse
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.is_static { 0.0 } else { 1.0 / self.mass }
    }

    #[inline]
    pub fn inv_inertia(&self) -> f32 {
        if self.is_static { 0.0 } else { 1.0 / self.moment_of_inertia }
    }

    /// Half extents of the axis-aligned box enclosing the rotated rectangle
    #[inline]
    pub fn aabb_half_extents(&self) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        Vec2::new(
            self.half_width * cos + self.half_height * sin,
            self.half_width * sin + self.half_height * cos,
        )
    }

    /// Resize in place; mass follows the new area
    pub fn set_half_extents(&mut self, half: Vec2, density: f32) {
        self.half_width = half.x.max(0.5);
        self.half_height = half.y.max(0.5);
        let (mass, moment_of_inertia) = mass_properties(self.half_width, self.half_height, density);
        self.mass = mass;
        self.moment_of_inertia = moment_of_inertia;
    }

    /// Apply impulse at an offset from the centre
    pub fn apply_impulse(&mut self, impulse: Vec2, offset: Vec2) {
        self.velocity += impulse * self.inv_mass();
        self.angular_vel += offset.cross(impulse) * self.inv_inertia();
    }

    pub fn density(&self) -> f32 {
        self.mass / (4.0 * self.half_width * self.half_height)
    }
}

fn mass_properties(half_width: f32, half_height: f32, density: f32) -> (f32, f32) {
    let w = half_width * 2.0;
    let h = half_height * 2.0;
    // Ensure minimum mass/moment to avoid division issues
    let mass = (w * h * density).max(1e-3);
    let moment = (mass * (w * w + h * h) / 12.0).max(1e-3);
    (mass, moment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_box_grows_its_aabb() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 40.0, 20.0, Material::default(), false, 1);
        assert_eq!(body.aabb_half_extents(), Vec2::new(20.0, 10.0));

        body.angle = std::f32::consts::FRAC_PI_2;
        let ext = body.aabb_half_extents();
        assert!((ext.x - 10.0).abs() < 1e-4);
        assert!((ext.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn static_bodies_ignore_impulses() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 10.0, 10.0, Material::default(), true, 1);
        body.apply_impulse(Vec2::new(100.0, 0.0), Vec2::new(0.0, 5.0));
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.angular_vel, 0.0);
    }

    #[test]
    fn material_sanitizes_out_of_range_values() {
        let m = Material { restitution: 3.0, friction: f32::NAN, density: -1.0 }.sanitized();
        assert_eq!(m.restitution, 1.0);
        assert_eq!(m.friction, Material::default().friction);
        assert_eq!(m.density, Material::default().density);
    }
}
