//! Circle–rectangle detection
//!
//! Restricted SAT over three axes: the world X and Y axes plus the axis from
//! the circle center to the nearest rectangle vertex. The circle is always
//! body A; callers swap arguments for rectangle–circle pairs.

use crate::sim::contact::Contact;
use crate::sim::vector::{Vector2, Vector2Ext};

/// Projection interval on an axis
#[derive(Debug, Clone, Copy)]
struct Projection {
    min: f64,
    max: f64,
}

pub fn detect(center: Vector2, radius: f64, vertices: &[Vector2; 4]) -> Contact {
    let closest = vertices[closest_vertex_index(center, vertices)];
    let rect_center = vertices.iter().copied().sum::<Vector2>() / 4.0;

    // A circle centered exactly on a vertex has no vertex axis
    let vertex_axis = (closest - center).try_normalize();
    let axes = vertex_axis
        .into_iter()
        .chain([Vector2::X, Vector2::Y]);

    let mut normal = Vector2::ZERO;
    let mut depth = f64::INFINITY;

    for axis in axes {
        let proj_a = project_circle(center, radius, axis);
        let proj_b = project_polygon(vertices, axis);

        if proj_a.min > proj_b.max || proj_b.min > proj_a.max {
            return Contact::miss();
        }

        let axis_depth = (proj_a.max - proj_b.min).min(proj_b.max - proj_a.min);
        if axis_depth < depth {
            depth = axis_depth;
            normal = axis;
        }

        // Keep the stored normal facing the rectangle after every axis
        if (rect_center - center).dot(normal) < 0.0 {
            normal.negate_in_place();
        }
    }

    Contact::hit(normal, depth)
}

/// First vertex with the smallest squared distance to `center`
fn closest_vertex_index(center: Vector2, vertices: &[Vector2; 4]) -> usize {
    let mut result = 0;
    let mut min_distance_sq = f64::INFINITY;

    for (i, vertex) in vertices.iter().enumerate() {
        let distance_sq = vertex.distance_sq(center);
        if distance_sq < min_distance_sq {
            min_distance_sq = distance_sq;
            result = i;
        }
    }

    result
}

fn project_circle(center: Vector2, radius: f64, axis: Vector2) -> Projection {
    let projection = center.dot(axis);
    Projection {
        min: projection - radius,
        max: projection + radius,
    }
}

fn project_polygon(vertices: &[Vector2; 4], axis: Vector2) -> Projection {
    vertices.iter().fold(
        Projection {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |p, v| {
            let projection = v.dot(axis);
            Projection {
                min: p.min.min(projection),
                max: p.max.max(projection),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, w: f64, h: f64) -> [Vector2; 4] {
        [
            Vector2::new(x, y),
            Vector2::new(x + w, y),
            Vector2::new(x + w, y + h),
            Vector2::new(x, y + h),
        ]
    }

    #[test]
    fn test_circle_resting_on_top_face() {
        // Ground spans x 0..100, y 50..60; circle dips 2 units into its top face
        let ground = square(0.0, 50.0, 100.0, 10.0);
        let c = detect(Vector2::new(50.0, 43.0), 9.0, &ground);
        assert!(c.detected);
        assert!(c.normal.nearly_equal(Vector2::new(0.0, 1.0)));
        assert!((c.depth - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_left_of_rectangle() {
        let rect = square(10.0, 0.0, 10.0, 10.0);
        let c = detect(Vector2::new(8.0, 5.0), 3.0, &rect);
        assert!(c.detected);
        assert!(c.normal.nearly_equal(Vector2::new(1.0, 0.0)));
        assert!((c.depth - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_gap_is_found_by_vertex_axis() {
        // Bounds overlap on both world axes, but the circle sits off the corner
        let rect = square(0.0, 0.0, 10.0, 10.0);
        let c = detect(Vector2::new(13.0, 13.0), 4.0, &rect);
        assert!(!c.detected);
        assert_eq!(c.depth, f64::MAX);
    }

    #[test]
    fn test_far_circle_misses() {
        let rect = square(0.0, 0.0, 10.0, 10.0);
        assert!(!detect(Vector2::new(30.0, 5.0), 2.0, &rect).detected);
    }

    #[test]
    fn test_center_on_vertex_skips_vertex_axis() {
        let rect = square(0.0, 0.0, 10.0, 10.0);
        let c = detect(Vector2::new(10.0, 10.0), 2.0, &rect);
        assert!(c.detected);
        assert!(c.normal.x.is_finite() && c.normal.y.is_finite());
        assert!((c.depth - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_vertex_ties_resolve_to_first() {
        let rect = square(0.0, 0.0, 10.0, 10.0);
        assert_eq!(closest_vertex_index(Vector2::new(5.0, 5.0), &rect), 0);
        assert_eq!(closest_vertex_index(Vector2::new(9.0, 1.0), &rect), 1);
    }
}
