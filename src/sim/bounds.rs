//! Axis-aligned bounds (broad phase)
//!
//! Cheap pre-filter before narrow-phase detection, also used to cull bodies
//! that have left the viewport.

use serde::{Deserialize, Serialize};

use super::body::{Body, Shape};
use super::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of(body: &Body) -> Self {
        Self::of_shape(&body.shape)
    }

    pub fn of_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Circle { position, radius } => Self {
                min_x: position.x - radius,
                min_y: position.y - radius,
                max_x: position.x + radius,
                max_y: position.y + radius,
            },
            Shape::Rectangle { vertices } => Self::of_vertices(vertices),
        }
    }

    pub fn of_vertices(vertices: &[Vector2]) -> Self {
        vertices.iter().fold(
            Self {
                min_x: f64::INFINITY,
                min_y: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |b, v| Self {
                min_x: b.min_x.min(v.x),
                min_y: b.min_y.min(v.y),
                max_x: b.max_x.max(v.x),
                max_y: b.max_y.max(v.y),
            },
        )
    }

    /// Strict overlap: bounds that only touch do not count
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.max_x > other.min_x
            && self.max_y > other.min_y
            && self.min_x < other.max_x
            && self.min_y < other.max_y
    }

    /// True once the bounds lie entirely past any edge of a `width` x `height`
    /// viewport anchored at the origin
    #[inline]
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.max_x < 0.0 || self.min_x > width || self.max_y < 0.0 || self.min_y > height
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
