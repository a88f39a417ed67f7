//! Impulse and friction response
//!
//! Shape-agnostic: only velocities, inverse masses, restitution, friction and
//! the contact normal take part. Static bodies have zero inverse mass, so
//! nothing here can change their velocity.

use super::body::{Body, Friction};
use super::vector::{Vector2, Vector2Ext};

/// Apply normal and Coulomb friction impulses for a contact.
///
/// `normal` is a unit vector pointing from `a` toward `b`.
pub fn resolve_collision(a: &mut Body, b: &mut Body, normal: Vector2) {
    if a.is_static && b.is_static {
        return;
    }

    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);

    // Already separating or resting along the normal
    if velocity_along_normal >= 0.0 {
        return;
    }

    let inverse_mass_sum = a.inverse_mass + b.inverse_mass;
    let restitution = a.restitution.min(b.restitution);
    let impulse = -(1.0 + restitution) * velocity_along_normal / inverse_mass_sum;

    a.velocity.add_scaled_in_place(normal, -impulse * a.inverse_mass);
    b.velocity.add_scaled_in_place(normal, impulse * b.inverse_mass);

    let tangent = relative_velocity - normal * velocity_along_normal;
    if tangent.nearly_equal(Vector2::ZERO) {
        return;
    }
    let Some(tangent) = tangent.try_normalize() else {
        return;
    };

    let friction = mix_friction(&a.friction, &b.friction);
    let mut friction_impulse = -relative_velocity.dot(tangent) / inverse_mass_sum;

    // Past the static threshold the contact slides with kinetic friction
    if friction_impulse.abs() >= impulse * friction.r#static {
        friction_impulse = -impulse * friction.dynamic;
    }

    a.velocity.add_scaled_in_place(tangent, -friction_impulse * a.inverse_mass);
    b.velocity.add_scaled_in_place(tangent, friction_impulse * b.inverse_mass);
}

/// Both coefficients take the mean of A's static and B's dynamic friction.
pub fn mix_friction(a: &Friction, b: &Friction) -> Friction {
    let mixed = (a.r#static + b.dynamic) * 0.5;
    Friction {
        r#static: mixed,
        dynamic: mixed,
    }
}
