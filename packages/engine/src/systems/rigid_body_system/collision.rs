use crate::rigid_body::{RigidBody, Vec2};

/// Below this approach speed a contact does not bounce (px/s)
const RESTING_SPEED: f32 = 40.0;

pub(super) struct Contact {
    /// Unit normal pointing from `a` to `b`
    pub normal: Vec2,
    pub depth: f32,
    /// World-space point the impulse acts on
    pub point: Vec2,
}

/// Overlap of the enclosing boxes, separated along the axis of least penetration.
pub(super) fn box_contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let ea = a.aabb_half_extents();
    let eb = b.aabb_half_extents();
    let d = b.pos - a.pos;

    let overlap_x = ea.x + eb.x - d.x.abs();
    if overlap_x <= 0.0 {
        return None;
    }
    let overlap_y = ea.y + eb.y - d.y.abs();
    if overlap_y <= 0.0 {
        return None;
    }

    // Contact point: middle of the overlapping span on the tangent axis
    let span_mid = |a_c: f32, a_e: f32, b_c: f32, b_e: f32| {
        let lo = (a_c - a_e).max(b_c - b_e);
        let hi = (a_c + a_e).min(b_c + b_e);
        (lo + hi) * 0.5
    };

    if overlap_x < overlap_y {
        let sx = if d.x < 0.0 { -1.0 } else { 1.0 };
        Some(Contact {
            normal: Vec2::new(sx, 0.0),
            depth: overlap_x,
            point: Vec2::new(a.pos.x + sx * ea.x, span_mid(a.pos.y, ea.y, b.pos.y, eb.y)),
        })
    } else {
        let sy = if d.y < 0.0 { -1.0 } else { 1.0 };
        Some(Contact {
            normal: Vec2::new(0.0, sy),
            depth: overlap_y,
            point: Vec2::new(span_mid(a.pos.x, ea.x, b.pos.x, eb.x), a.pos.y + sy * ea.y),
        })
    }
}

/// Push the pair apart and exchange normal + friction impulses.
pub(super) fn resolve(a: &mut RigidBody, b: &mut RigidBody, contact: &Contact) {
    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    let n = contact.normal;

    // Positional correction, split by inverse mass
    let correction = n * (contact.depth / inv_sum);
    a.pos -= correction * inv_a;
    b.pos += correction * inv_b;

    let ra = contact.point - a.pos;
    let rb = contact.point - b.pos;
    let rel = point_velocity(b, rb) - point_velocity(a, ra);
    let vn = rel.dot(n);
    if vn >= 0.0 {
        return; // already separating
    }

    let restitution = if -vn < RESTING_SPEED { 0.0 } else { a.restitution.max(b.restitution) };
    let ra_n = ra.cross(n);
    let rb_n = rb.cross(n);
    let denom = inv_sum + ra_n * ra_n * a.inv_inertia() + rb_n * rb_n * b.inv_inertia();
    let j = -(1.0 + restitution) * vn / denom;
    let impulse = n * j;
    a.apply_impulse(-impulse, ra);
    b.apply_impulse(impulse, rb);

    // Coulomb friction along the tangent
    let rel = point_velocity(b, rb) - point_velocity(a, ra);
    let tangent = rel - n * rel.dot(n);
    let t_len = tangent.length();
    if t_len < 1e-4 {
        return;
    }
    let t = tangent * (1.0 / t_len);
    let ra_t = ra.cross(t);
    let rb_t = rb.cross(t);
    let denom_t = inv_sum + ra_t * ra_t * a.inv_inertia() + rb_t * rb_t * b.inv_inertia();
    let mu = a.friction.min(b.friction);
    let jt = (-rel.dot(t) / denom_t).clamp(-mu * j, mu * j);
    let friction_impulse = t * jt;
    a.apply_impulse(-friction_impulse, ra);
    b.apply_impulse(friction_impulse, rb);
}

#[inline]
fn point_velocity(body: &RigidBody, r: Vec2) -> Vec2 {
    body.velocity + Vec2::new(-body.angular_vel * r.y, body.angular_vel * r.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Material;

    fn boxed(x: f32, y: f32, w: f32, h: f32, is_static: bool) -> RigidBody {
        RigidBody::new_rect(x, y, w, h, Material::default(), is_static, 0)
    }

    #[test]
    fn separated_boxes_have_no_contact() {
        let a = boxed(0.0, 0.0, 10.0, 10.0, false);
        let b = boxed(20.0, 0.0, 10.0, 10.0, false);
        assert!(box_contact(&a, &b).is_none());
    }

    #[test]
    fn shallow_vertical_overlap_picks_y_axis() {
        let a = boxed(0.0, 0.0, 50.0, 50.0, false);
        let ground = boxed(0.0, 70.0, 400.0, 100.0, true);
        let c = box_contact(&a, &ground).unwrap();
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
        assert!((c.depth - 5.0).abs() < 1e-4);
    }

    #[test]
    fn resolve_moves_only_the_dynamic_body() {
        let mut a = boxed(0.0, 0.0, 50.0, 50.0, false);
        a.velocity = Vec2::new(0.0, 300.0);
        let mut ground = boxed(0.0, 70.0, 400.0, 100.0, true);
        let c = box_contact(&a, &ground).unwrap();
        resolve(&mut a, &mut ground, &c);

        assert!((a.pos.y + 5.0).abs() < 1e-4);
        assert!(a.velocity.y < 0.0, "body should bounce back up");
        assert_eq!(ground.pos, Vec2::new(0.0, 70.0));
    }
}
