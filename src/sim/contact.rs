//! Narrow-phase detection result

use super::vector::Vector2;

/// Result of a narrow-phase check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Whether the pair overlaps
    pub detected: bool,
    /// Unit contact normal pointing from body A toward body B
    pub normal: Vector2,
    /// Penetration depth along `normal` (`f64::MAX` on a miss)
    pub depth: f64,
}

impl Contact {
    pub fn miss() -> Self {
        Self {
            detected: false,
            normal: Vector2::ZERO,
            depth: f64::MAX,
        }
    }

    pub fn hit(normal: Vector2, depth: f64) -> Self {
        Self {
            detected: true,
            normal,
            depth,
        }
    }
}
