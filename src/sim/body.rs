//! Rigid bodies and their shape variants

use serde::{Deserialize, Serialize};

use super::vector::{Vector2, Vector2Ext};
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::settings::Material;

/// Stable body identifier. Handles are never reused within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

/// Static/dynamic friction coefficient pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Friction {
    pub r#static: f64,
    pub dynamic: f64,
}

/// Shape-specific geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { position: Vector2, radius: f64 },
    /// Winding at construction: top-left, top-right, bottom-right, bottom-left.
    /// Vertices translate together and never rotate, so edges stay axis-aligned.
    Rectangle { vertices: [Vector2; 4] },
}

impl Shape {
    /// Circle center, or arithmetic mean of the rectangle's vertices
    pub fn centroid(&self) -> Vector2 {
        match self {
            Shape::Circle { position, .. } => *position,
            Shape::Rectangle { vertices } => {
                vertices.iter().copied().sum::<Vector2>() / vertices.len() as f64
            }
        }
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.translate_scaled(offset, 1.0);
    }

    /// Move the shape by `offset * scale`
    pub fn translate_scaled(&mut self, offset: Vector2, scale: f64) {
        match self {
            Shape::Circle { position, .. } => position.add_scaled_in_place(offset, scale),
            Shape::Rectangle { vertices } => {
                for vertex in vertices.iter_mut() {
                    vertex.add_scaled_in_place(offset, scale);
                }
            }
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle { .. })
    }
}

/// Optional spawn overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyOptions {
    /// Initial velocity (defaults to zero)
    pub velocity: Option<Vector2>,
    pub is_static: bool,
    /// Bounciness in [0, 1]; defaults per shape
    pub restitution: Option<f64>,
    /// CSS color; the world picks a palette color when absent
    pub color: Option<String>,
}

impl BodyOptions {
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }

    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity: Some(velocity),
            ..Self::default()
        }
    }
}

/// A simulated rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub handle: BodyHandle,
    pub shape: Shape,
    /// Force accumulator, cleared after every substep
    pub force: Vector2,
    /// Acceleration derived during the last substep
    pub acceleration: Vector2,
    pub velocity: Vector2,
    /// Tracked but never integrated
    pub angular_velocity: f64,
    pub mass: f64,
    /// Zero for static bodies
    pub inverse_mass: f64,
    pub friction: Friction,
    pub restitution: f64,
    pub density: f64,
    pub thickness: f64,
    pub area: f64,
    pub is_static: bool,
    pub color: String,
}

impl Body {
    /// Build a circle centered at `center`
    pub fn circle(
        handle: BodyHandle,
        center: Vector2,
        radius: f64,
        options: BodyOptions,
        material: &Material,
    ) -> Result<Self> {
        check_extent("radius", radius)?;
        let area = std::f64::consts::PI * radius * radius;
        let shape = Shape::Circle {
            position: center,
            radius,
        };
        Self::build(handle, shape, area, options, CIRCLE_RESTITUTION, material)
    }

    /// Build an axis-aligned rectangle centered at `center`
    pub fn rectangle(
        handle: BodyHandle,
        center: Vector2,
        width: f64,
        height: f64,
        options: BodyOptions,
        material: &Material,
    ) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let area = half_w * half_h * 4.0;
        let shape = Shape::Rectangle {
            vertices: [
                Vector2::new(center.x - half_w, center.y - half_h),
                Vector2::new(center.x + half_w, center.y - half_h),
                Vector2::new(center.x + half_w, center.y + half_h),
                Vector2::new(center.x - half_w, center.y + half_h),
            ],
        };
        Self::build(handle, shape, area, options, RECTANGLE_RESTITUTION, material)
    }

    fn build(
        handle: BodyHandle,
        shape: Shape,
        area: f64,
        options: BodyOptions,
        default_restitution: f64,
        material: &Material,
    ) -> Result<Self> {
        let restitution = options.restitution.unwrap_or(default_restitution);
        if !options.is_static && !(0.0..=1.0).contains(&restitution) {
            return Err(SimError::InvalidRestitution(restitution));
        }

        let mass = material.density * area * material.thickness;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidGeometry {
                field: "mass",
                value: mass,
            });
        }

        let mut body = Self {
            handle,
            shape,
            force: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            velocity: options.velocity.unwrap_or(Vector2::ZERO),
            angular_velocity: 0.0,
            mass,
            inverse_mass: 1.0 / mass,
            friction: material.friction,
            restitution,
            density: material.density,
            thickness: material.thickness,
            area,
            is_static: options.is_static,
            color: options.color.unwrap_or_else(|| PALETTE[0].to_string()),
        };

        if body.is_static {
            body.inverse_mass = 0.0;
            body.restitution = 1.0;
            body.color = STATIC_COLOR.to_string();
        }

        Ok(body)
    }

    #[inline]
    pub fn centroid(&self) -> Vector2 {
        self.shape.centroid()
    }

    /// Advance one substep: accumulate gravity, integrate velocity then
    /// position, and clear the force accumulator.
    pub fn integrate(&mut self, gravity: Vector2, dt: f64) {
        self.force += gravity;
        self.acceleration = self.force * self.inverse_mass;
        self.velocity.add_scaled_in_place(self.acceleration, dt);
        self.shape.translate_scaled(self.velocity, dt);
        self.force.zero_in_place();
    }
}

fn check_extent(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidGeometry { field, value })
    }
}
