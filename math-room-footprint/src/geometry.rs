//! Geometric utility functions in the horizontal plane

use crate::types::{PlanarPoint, Point};

/// Orientation of the turn A -> B -> C in the (x, z) plane
///
/// Computes `(C.x - B.x) * (A.z - B.z) - (A.x - B.x) * (C.z - B.z)`, the
/// 2D cross product of `A - B` and `C - B` with B as the pivot. Positive
/// for a counter-clockwise turn (x to the right, z up), negative for a
/// clockwise turn, zero when the three points are collinear. y is ignored.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> f64 {
    (c.x - b.x) * (a.z - b.z) - (a.x - b.x) * (c.z - b.z)
}

/// True when A -> B -> C turns counter-clockwise by more than `epsilon`
#[inline]
pub fn turns_counter_clockwise(a: &Point, b: &Point, c: &Point, epsilon: f64) -> bool {
    orientation(a, b, c) > epsilon
}

/// Signed area of a planar polygon (shoelace), positive for counter-clockwise winding
pub(crate) fn signed_area(polygon: &[PlanarPoint]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| polygon[i].cross(&polygon[(i + 1) % n]))
        .sum();
    twice / 2.0
}

/// Point-in-polygon test for a counter-clockwise convex polygon
///
/// Boundary points count as inside. `tolerance` is a distance: a point may
/// sit that far outside any edge and still be accepted. Polygons with fewer
/// than 3 vertices are treated as a point or a segment.
pub(crate) fn convex_polygon_contains(polygon: &[PlanarPoint], p: &PlanarPoint, tolerance: f64) -> bool {
    match polygon.len() {
        0 => false,
        1 => polygon[0].sub(p).length() <= tolerance,
        2 => segment_distance(&polygon[0], &polygon[1], p) <= tolerance,
        n => (0..n).all(|i| {
            let a = &polygon[i];
            let b = &polygon[(i + 1) % n];
            let edge = b.sub(a);
            let len = edge.length();
            if len == 0.0 {
                return true;
            }
            edge.cross(&p.sub(a)) / len >= -tolerance
        }),
    }
}

/// Distance from `p` to the segment `a`-`b`
fn segment_distance(a: &PlanarPoint, b: &PlanarPoint, p: &PlanarPoint) -> f64 {
    let ab = b.sub(a);
    let ab2 = ab.dot(&ab);
    if ab2 == 0.0 {
        return p.sub(a).length();
    }
    let t = (p.sub(a).dot(&ab) / ab2).clamp(0.0, 1.0);
    p.sub(&a.add(&ab.scale(t))).length()
}
