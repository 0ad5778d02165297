//! Plane geometry helpers for crossing detection.

use super::point::Point;

/// Signed area of the triangle `(o, a, b)`, doubled.
///
/// Positive when `o → a → b` turns counter-clockwise.
fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Whether segment `p1-p2` properly crosses segment `p3-p4`.
///
/// Touching endpoints and collinear overlaps do not count as a crossing.
pub fn segments_cross(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}
