//! Narrow phase: per-shape-pair detection, positional separation and
//! dispatch into the resolver.

pub mod circle;
pub mod circle_rect;
pub mod rect;

use super::body::{Body, Shape};
use super::bounds::Bounds;
use super::contact::Contact;
use super::resolve::resolve_collision;
use super::vector::Vector2;

/// Detect overlap between two shapes, returning the contact and whether the
/// arguments were swapped so the circle of a mixed pair is body A.
pub fn detect(a: &Shape, b: &Shape) -> (Contact, bool) {
    match (a, b) {
        (
            Shape::Circle {
                position: pos_a,
                radius: radius_a,
            },
            Shape::Circle {
                position: pos_b,
                radius: radius_b,
            },
        ) => (circle::detect(*pos_a, *radius_a, *pos_b, *radius_b), false),
        (Shape::Rectangle { vertices: va }, Shape::Rectangle { vertices: vb }) => {
            (rect::detect(va, vb), false)
        }
        (Shape::Circle { position, radius }, Shape::Rectangle { vertices }) => {
            (circle_rect::detect(*position, *radius, vertices), false)
        }
        (Shape::Rectangle { vertices }, Shape::Circle { position, radius }) => {
            (circle_rect::detect(*position, *radius, vertices), true)
        }
    }
}

/// Push overlapping bodies apart along `normal` (A toward B).
///
/// A static body never moves; two dynamic bodies each take half of `depth`.
/// Static pairs are left alone.
pub fn separate(a: &mut Body, b: &mut Body, normal: Vector2, depth: f64) {
    match (a.is_static, b.is_static) {
        (true, false) => b.shape.translate_scaled(normal, depth),
        (false, true) => a.shape.translate_scaled(normal, -depth),
        (false, false) => {
            a.shape.translate_scaled(normal, -depth / 2.0);
            b.shape.translate_scaled(normal, depth / 2.0);
        }
        (true, true) => {}
    }
}

/// Broad-phase filter, narrow-phase detection, separation and impulse
/// response for one pair. Returns true when the pair was in contact.
pub fn collide(a: &mut Body, b: &mut Body) -> bool {
    if !Bounds::of(a).overlaps(&Bounds::of(b)) {
        return false;
    }

    let (contact, swapped) = detect(&a.shape, &b.shape);
    if !contact.detected {
        return false;
    }

    let (first, second) = if swapped { (b, a) } else { (a, b) };
    separate(first, second, contact.normal, contact.depth);
    resolve_collision(first, second, contact.normal);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Material;
    use crate::sim::body::{BodyHandle, BodyOptions};
    use crate::sim::vector::Vector2Ext;

    fn circle(x: f64, y: f64, r: f64, options: BodyOptions) -> Body {
        Body::circle(
            BodyHandle(0),
            Vector2::new(x, y),
            r,
            options,
            &Material::default(),
        )
        .unwrap()
    }

    fn rect(x: f64, y: f64, w: f64, h: f64, options: BodyOptions) -> Body {
        Body::rectangle(
            BodyHandle(0),
            Vector2::new(x, y),
            w,
            h,
            options,
            &Material::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_dynamic_circles_separate_by_halved_overlap() {
        let mut a = circle(0.0, 0.0, 2.0, BodyOptions::default());
        let mut b = circle(3.0, 0.0, 2.0, BodyOptions::default());

        let (contact, swapped) = detect(&a.shape, &b.shape);
        assert!(!swapped);
        separate(&mut a, &mut b, contact.normal, contact.depth);

        // Overlap 1 -> depth 0.5 -> each body moves 0.25
        assert!(a.centroid().nearly_equal(Vector2::new(-0.25, 0.0)));
        assert!(b.centroid().nearly_equal(Vector2::new(3.25, 0.0)));
    }

    #[test]
    fn test_dynamic_circle_and_rectangle_split_depth() {
        let mut ball = circle(0.0, 0.0, 2.0, BodyOptions::default());
        let mut block = rect(3.0, 0.0, 4.0, 4.0, BodyOptions::default());

        // Rectangle first: detection swaps so the circle is body A
        let (contact, swapped) = detect(&block.shape, &ball.shape);
        assert!(swapped);
        assert!(contact.normal.nearly_equal(Vector2::X));
        assert!((contact.depth - 1.0).abs() < 1e-9);

        separate(&mut ball, &mut block, contact.normal, contact.depth);

        assert!(ball.centroid().nearly_equal(Vector2::new(-0.5, 0.0)));
        assert!(block.centroid().nearly_equal(Vector2::new(3.5, 0.0)));
        let b = Bounds::of(&block);
        assert!((b.min_x - 1.5).abs() < 1e-9);
        assert!((b.max_x - 5.5).abs() < 1e-9);
        assert_eq!((b.min_y, b.max_y), (-2.0, 2.0));
    }

    #[test]
    fn test_repeated_separation_converges_to_touching() {
        let mut a = circle(0.0, 0.0, 2.0, BodyOptions::default());
        let mut b = circle(3.0, 0.0, 2.0, BodyOptions::default());

        for _ in 0..40 {
            let (contact, _) = detect(&a.shape, &b.shape);
            if !contact.detected {
                break;
            }
            separate(&mut a, &mut b, contact.normal, contact.depth);
        }

        let distance = (b.centroid() - a.centroid()).length();
        assert!((distance - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_static_side_does_not_move() {
        let mut ground = rect(0.0, 0.0, 10.0, 10.0, BodyOptions::fixed());
        let mut block = rect(0.0, 8.0, 10.0, 10.0, BodyOptions::default());

        let (contact, _) = detect(&ground.shape, &block.shape);
        separate(&mut ground, &mut block, contact.normal, contact.depth);

        assert_eq!(ground.centroid(), Vector2::ZERO);
        assert!(block.centroid().nearly_equal(Vector2::new(0.0, 10.0)));

        // Mirror case: static body in slot B pushes A the other way
        let mut block = rect(0.0, 8.0, 10.0, 10.0, BodyOptions::default());
        let (contact, _) = detect(&block.shape, &ground.shape);
        separate(&mut block, &mut ground, contact.normal, contact.depth);
        assert_eq!(ground.centroid(), Vector2::ZERO);
        assert!(block.centroid().nearly_equal(Vector2::new(0.0, 10.0)));
    }

    #[test]
    fn test_static_pair_is_never_separated() {
        let mut a = circle(0.0, 0.0, 2.0, BodyOptions::fixed());
        let mut b = circle(1.0, 0.0, 2.0, BodyOptions::fixed());
        separate(&mut a, &mut b, Vector2::X, 1.5);
        assert_eq!(a.centroid(), Vector2::ZERO);
        assert_eq!(b.centroid(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_rectangle_circle_pair_is_swapped() {
        let ground = rect(50.0, 55.0, 100.0, 10.0, BodyOptions::fixed());
        let ball = circle(50.0, 43.0, 9.0, BodyOptions::default());

        let (contact, swapped) = detect(&ground.shape, &ball.shape);
        assert!(swapped);
        assert!(contact.detected);
        // Normal runs from the circle into the rectangle
        assert!(contact.normal.nearly_equal(Vector2::new(0.0, 1.0)));
    }

    #[test]
    fn test_collide_circle_lands_on_static_ground() {
        let mut ground = rect(50.0, 55.0, 100.0, 10.0, BodyOptions::fixed());
        let mut ball = circle(
            50.0,
            43.0,
            9.0,
            BodyOptions::with_velocity(Vector2::new(0.0, 3.0)),
        );

        assert!(collide(&mut ground, &mut ball));

        assert!(ball.centroid().nearly_equal(Vector2::new(50.0, 41.0)));
        assert!(ball.velocity.y < 0.0);
        assert_eq!(ground.velocity, Vector2::ZERO);
        assert_eq!(ground.centroid(), Vector2::new(50.0, 55.0));
    }

    #[test]
    fn test_collide_skips_disjoint_bounds() {
        let mut a = circle(0.0, 0.0, 1.0, BodyOptions::default());
        let mut b = rect(10.0, 10.0, 2.0, 2.0, BodyOptions::default());
        assert!(!collide(&mut a, &mut b));
        assert_eq!(a.centroid(), Vector2::ZERO);
    }
}
