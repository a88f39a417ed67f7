//! 2D vector helpers
//!
//! `Vector2` is glam's `DVec2`: every glam operator returns a new value.
//! The few operations that mutate the receiver live on `Vector2Ext` and carry
//! an `_in_place` suffix so call sites cannot confuse the two.

use glam::DVec2;

pub type Vector2 = DVec2;

/// Component tolerance for `nearly_equal`
pub const EPSILON: f64 = 1e-6;

pub trait Vector2Ext {
    /// Component-wise comparison within `EPSILON`
    fn nearly_equal(self, other: Vector2) -> bool;

    fn distance_sq(self, other: Vector2) -> f64;

    /// `self += v * scale`
    fn add_scaled_in_place(&mut self, v: Vector2, scale: f64);

    fn negate_in_place(&mut self);

    fn zero_in_place(&mut self);
}

impl Vector2Ext for DVec2 {
    #[inline]
    fn nearly_equal(self, other: Vector2) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    #[inline]
    fn distance_sq(self, other: Vector2) -> f64 {
        (self - other).length_squared()
    }

    #[inline]
    fn add_scaled_in_place(&mut self, v: Vector2, scale: f64) {
        self.x += v.x * scale;
        self.y += v.y * scale;
    }

    #[inline]
    fn negate_in_place(&mut self) {
        *self = -*self;
    }

    #[inline]
    fn zero_in_place(&mut self) {
        *self = DVec2::ZERO;
    }
}
