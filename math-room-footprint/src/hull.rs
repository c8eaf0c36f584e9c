//! Planar convex hull (monotone chain) over an x-sorted point snapshot
//!
//! The hull lives in the horizontal (x, z) plane and is returned as indices
//! into the snapshot it was built from. The polygon winds counter-clockwise
//! (x to the right, z up): the interior is on the left of every edge.

use crate::config::FootprintConfig;
use crate::geometry::{convex_polygon_contains, signed_area, turns_counter_clockwise};
use crate::types::{PlanarPoint, Point};
use crate::EPSILON;
use serde::{Deserialize, Serialize};

/// Convex hull as an ordered list of snapshot indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hull {
    indices: Vec<usize>,
}

impl Hull {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Snapshot indices in counter-clockwise order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Fewer than 3 vertices: a point, a segment, or nothing
    pub fn is_degenerate(&self) -> bool {
        self.indices.len() < 3
    }

    /// Hull vertices projected onto the horizontal plane
    pub fn vertices(&self, points: &[Point]) -> Vec<PlanarPoint> {
        self.indices.iter().map(|&i| points[i].planar()).collect()
    }

    /// Edges as (start, end) snapshot indices, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Enclosed area in the horizontal plane
    pub fn area(&self, points: &[Point]) -> f64 {
        signed_area(&self.vertices(points))
    }

    /// Length of the closed boundary; a 2-point hull counts its segment twice
    pub fn perimeter(&self, points: &[Point]) -> f64 {
        self.edges()
            .map(|(a, b)| points[b].planar().sub(&points[a].planar()).length())
            .sum()
    }

    /// True when `p` lies inside or within `tolerance` of the hull
    pub fn contains(&self, points: &[Point], p: &PlanarPoint, tolerance: f64) -> bool {
        convex_polygon_contains(&self.vertices(points), p, tolerance)
    }
}

/// Builds convex hulls with a fixed orientation tolerance
#[derive(Debug, Clone, Copy)]
pub struct HullBuilder {
    epsilon: f64,
}

impl Default for HullBuilder {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl HullBuilder {
    pub fn new(config: &FootprintConfig) -> Self {
        Self {
            epsilon: config.orientation_epsilon,
        }
    }

    /// Build the hull of an x-sorted snapshot
    pub fn build(&self, points: &[Point]) -> Hull {
        build_hull(points, self.epsilon)
    }
}

/// Monotone chain convex hull of `points`, which must be sorted by x
///
/// Turns whose orientation is at or below `epsilon` are popped, so
/// collinear points collapse onto the extremes. 0 or 1 points come back
/// as-is; 2 points (or a fully collinear set) give a 2-vertex hull.
pub fn build_hull(points: &[Point], epsilon: f64) -> Hull {
    let n = points.len();
    if n < 2 {
        return Hull::new((0..n).collect());
    }

    let order = scan_order(points);

    let mut hull = monotone_chain(points, order.iter().copied(), epsilon);
    hull.pop();

    let mut back = monotone_chain(points, order.iter().rev().copied(), epsilon);
    back.pop();

    hull.append(&mut back);

    log::debug!("Convex hull: {} of {} points", hull.len(), n);

    Hull::new(hull)
}

/// Snapshot order for the chain scan: x first, then z for points sharing an x
///
/// Stable, so the snapshot's insertion-order ties survive where z also ties.
fn scan_order(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].z.total_cmp(&points[b].z))
    });
    order
}

/// One half of the hull: keep only counter-clockwise turns while scanning `order`
fn monotone_chain<I>(points: &[Point], order: I, epsilon: f64) -> Vec<usize>
where
    I: Iterator<Item = usize>,
{
    let mut chain: Vec<usize> = Vec::new();
    for i in order {
        while chain.len() > 1 {
            let a = chain[chain.len() - 2];
            let b = chain[chain.len() - 1];
            if turns_counter_clockwise(&points[a], &points[b], &points[i], epsilon) {
                break;
            }
            chain.pop();
        }
        chain.push(i);
    }
    chain
}
