//! Circle–circle detection

use crate::sim::contact::Contact;
use crate::sim::vector::Vector2;

/// Check two circles for overlap.
///
/// The reported depth is half the geometric overlap; `separate` then splits
/// it again between two dynamic bodies.
pub fn detect(pos_a: Vector2, radius_a: f64, pos_b: Vector2, radius_b: f64) -> Contact {
    let direction = pos_b - pos_a;
    let distance = direction.length();
    let radii = radius_a + radius_b;

    // Coincident centers have no usable normal
    if distance > radii || distance == 0.0 {
        return Contact::miss();
    }

    Contact::hit(direction / distance, (radii - distance) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_circles_miss() {
        let c = detect(Vector2::ZERO, 1.0, Vector2::new(3.0, 0.0), 1.0);
        assert!(!c.detected);
        assert_eq!(c.depth, f64::MAX);
    }

    #[test]
    fn test_overlap_normal_and_halved_depth() {
        let c = detect(Vector2::ZERO, 2.0, Vector2::new(0.0, 3.0), 2.0);
        assert!(c.detected);
        assert_eq!(c.normal, Vector2::new(0.0, 1.0));
        assert_eq!(c.depth, 0.5);
    }

    #[test]
    fn test_touching_counts_as_contact() {
        let c = detect(Vector2::ZERO, 1.0, Vector2::new(2.0, 0.0), 1.0);
        assert!(c.detected);
        assert_eq!(c.depth, 0.0);
    }

    #[test]
    fn test_coincident_centers_miss() {
        let c = detect(Vector2::new(4.0, 4.0), 1.0, Vector2::new(4.0, 4.0), 1.0);
        assert!(!c.detected);
        assert_eq!(c.normal, Vector2::ZERO);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distant_circles_never_collide(
                x in -500.0..500.0f64,
                y in -500.0..500.0f64,
                ra in 0.1..50.0f64,
                rb in 0.1..50.0f64,
                angle in 0.0..std::f64::consts::TAU,
                gap in 0.001..100.0f64,
            ) {
                let a = Vector2::new(x, y);
                let b = a + Vector2::new(angle.cos(), angle.sin()) * (ra + rb + gap);
                prop_assert!(!detect(a, ra, b, rb).detected);
            }

            #[test]
            fn overlapping_circles_report_unit_normal(
                ra in 1.0..50.0f64,
                rb in 1.0..50.0f64,
                angle in 0.0..std::f64::consts::TAU,
                t in 0.05..0.95f64,
            ) {
                let distance = (ra + rb) * t;
                let b = Vector2::new(angle.cos(), angle.sin()) * distance;
                let c = detect(Vector2::ZERO, ra, b, rb);
                prop_assert!(c.detected);
                prop_assert!((c.normal.length() - 1.0).abs() < 1e-9);
                prop_assert!((c.depth - (ra + rb - distance) / 2.0).abs() < 1e-9);
            }
        }
    }
}
