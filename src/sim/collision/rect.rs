//! Rectangle–rectangle detection
//!
//! Rectangles never rotate, so the two world axes are the only separating
//! axes that matter. Depth comes straight from the bounds overlap.

use crate::sim::bounds::Bounds;
use crate::sim::contact::Contact;
use crate::sim::vector::Vector2;

pub fn detect(vertices_a: &[Vector2; 4], vertices_b: &[Vector2; 4]) -> Contact {
    let bound_a = Bounds::of_vertices(vertices_a);
    let bound_b = Bounds::of_vertices(vertices_b);

    if !bound_a.overlaps(&bound_b) {
        return Contact::miss();
    }

    let depth_x = (bound_b.max_x - bound_a.min_x).min(bound_a.max_x - bound_b.min_x);
    let depth_y = (bound_b.max_y - bound_a.min_y).min(bound_a.max_y - bound_b.min_y);

    let mut normal = Vector2::ZERO;
    let mut depth = f64::INFINITY;

    if depth_x < depth {
        depth = depth_x;
        normal = Vector2::X;
    }
    // Y only wins when strictly shallower
    if depth_y < depth {
        depth = depth_y;
        normal = Vector2::Y;
    }

    let direction = centroid(vertices_b) - centroid(vertices_a);
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }

    Contact::hit(normal, depth)
}

fn centroid(vertices: &[Vector2; 4]) -> Vector2 {
    vertices.iter().copied().sum::<Vector2>() / 4.0
}
