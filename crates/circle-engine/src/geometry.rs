//! Planar helpers for canvas-space polylines.

use glam::DVec2;

/// A point in canvas space.
pub type Point = DVec2;

/// Denominator used in place of a zero-height edge in the crossing test.
pub const HORIZONTAL_EDGE_EPSILON: f64 = 1e-12;

/// Ray-casting containment test.
///
/// Casts a horizontal ray from `point` toward +x and counts edge crossings;
/// an odd count means the point is inside. The polygon is treated as closed
/// (last vertex connects back to the first). Empty polygons contain nothing.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];

        if (pi.y > point.y) != (pj.y > point.y) {
            let mut dy = pj.y - pi.y;
            if dy == 0.0 || dy.is_nan() {
                dy = HORIZONTAL_EDGE_EPSILON;
            }
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / dy + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance between the first and last point. Zero for fewer than two points.
pub fn closure_gap(points: &[Point]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first.distance(*last),
        _ => 0.0,
    }
}

/// Sum of consecutive segment lengths. Does not wrap around.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
