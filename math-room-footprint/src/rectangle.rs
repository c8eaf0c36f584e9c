//! Minimum-area enclosing rectangle of a convex hull (rotating calipers)
//!
//! Each hull edge is tried as the direction of one rectangle side. The
//! vertices are projected onto the edge direction and its left normal,
//! giving the rectangle's extents for that orientation. The edge with the
//! smallest area wins; equal areas keep the earlier edge.

use crate::config::FootprintConfig;
use crate::hull::Hull;
use crate::types::{PlanarPoint, Point};
use crate::{EPSILON, FootprintError, Result};
use serde::{Deserialize, Serialize};

/// Extents of the enclosing rectangle aligned to one hull edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    /// Position of the edge in the hull (edge i runs from vertex i to i + 1)
    pub edge_index: usize,
    /// Edge start as a planar point
    pub start: PlanarPoint,
    /// Unit edge direction
    pub direction: PlanarPoint,
    /// Largest projection ahead of the edge start
    pub forward: f64,
    /// Largest projection behind the edge start
    pub backward: f64,
    /// Largest distance to the left of the edge (towards the interior)
    pub above: f64,
    /// Largest distance to the right of the edge, zero for an exact convex hull
    pub below: f64,
}

impl EdgeCandidate {
    /// Extent along the edge
    pub fn width(&self) -> f64 {
        self.forward + self.backward
    }

    /// Extent across the edge
    pub fn height(&self) -> f64 {
        self.above + self.below
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// An edge-aligned rectangle in the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    corners: [PlanarPoint; 4],
    direction: PlanarPoint,
    edge_index: usize,
    width: f64,
    height: f64,
}

impl Rectangle {
    fn from_candidate(c: &EdgeCandidate) -> Self {
        let u = c.direction;
        let n = u.perp();
        let height = c.height();

        let base = c.start.sub(&n.scale(c.below));
        let c0 = base.sub(&u.scale(c.backward));
        let c1 = base.add(&u.scale(c.forward));
        let c2 = c1.add(&n.scale(height));
        let c3 = c0.add(&n.scale(height));

        Self {
            corners: [c0, c1, c2, c3],
            direction: u,
            edge_index: c.edge_index,
            width: c.width(),
            height,
        }
    }

    /// Corners in counter-clockwise order; the first two lie along the source edge
    pub fn corners(&self) -> &[PlanarPoint; 4] {
        &self.corners
    }

    /// Corners lifted back to 3D at height `y`
    pub fn corners_3d(&self, y: f64) -> [Point; 4] {
        self.corners.map(|c| c.lift(y))
    }

    /// Unit direction of the hull edge the rectangle is aligned to
    pub fn direction(&self) -> PlanarPoint {
        self.direction
    }

    /// Orientation in radians, measured from +x towards +z
    pub fn angle(&self) -> f64 {
        self.direction.z.atan2(self.direction.x)
    }

    /// Position of the source edge within the hull
    pub fn edge_index(&self) -> usize {
        self.edge_index
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> PlanarPoint {
        self.corners[0].add(&self.corners[2]).scale(0.5)
    }

    /// True when `p` is inside or within `tolerance` of the rectangle
    pub fn contains(&self, p: &PlanarPoint, tolerance: f64) -> bool {
        let d = p.sub(&self.corners[0]);
        let along = d.dot(&self.direction);
        let across = d.dot(&self.direction.perp());
        along >= -tolerance
            && along <= self.width + tolerance
            && across >= -tolerance
            && across <= self.height + tolerance
    }
}

/// Fits minimum-area rectangles to convex hulls
#[derive(Debug, Clone, Copy)]
pub struct RectangleFitter {
    min_edge_length: f64,
}

impl Default for RectangleFitter {
    fn default() -> Self {
        Self {
            min_edge_length: EPSILON,
        }
    }
}

impl RectangleFitter {
    pub fn new(config: &FootprintConfig) -> Self {
        Self {
            min_edge_length: config.min_edge_length,
        }
    }

    /// Minimum-area rectangle enclosing `hull`
    ///
    /// # Errors
    /// - [`FootprintError::EmptySet`] for an empty hull
    /// - [`FootprintError::DegenerateHull`] when no hull edge is long enough
    ///   to give a direction (a single distinct point)
    pub fn fit(&self, points: &[Point], hull: &Hull) -> Result<Rectangle> {
        if hull.is_empty() {
            return Err(FootprintError::EmptySet);
        }

        let mut best: Option<EdgeCandidate> = None;
        for candidate in self.candidates(points, hull) {
            match best {
                Some(b) if b.area() <= candidate.area() => {}
                _ => best = Some(candidate),
            }
        }

        let best = best.ok_or(FootprintError::DegenerateHull { distinct: 1 })?;
        let rect = Rectangle::from_candidate(&best);

        log::debug!(
            "Footprint rectangle: edge {} of {}, {:.3} x {:.3}, angle {:.2} deg",
            rect.edge_index(),
            hull.len(),
            rect.width(),
            rect.height(),
            rect.angle().to_degrees()
        );

        Ok(rect)
    }

    /// One candidate per usable hull edge, in hull order
    ///
    /// Edges shorter than the minimum edge length are skipped.
    pub fn candidates(&self, points: &[Point], hull: &Hull) -> Vec<EdgeCandidate> {
        let vertices = hull.vertices(points);
        let n = vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .filter_map(|i| self.evaluate_edge(&vertices, i))
            .collect()
    }

    fn evaluate_edge(&self, vertices: &[PlanarPoint], i: usize) -> Option<EdgeCandidate> {
        let start = vertices[i];
        let end = vertices[(i + 1) % vertices.len()];
        let direction = end.sub(&start).try_normalize(self.min_edge_length)?;
        let normal = direction.perp();

        let mut candidate = EdgeCandidate {
            edge_index: i,
            start,
            direction,
            forward: 0.0,
            backward: 0.0,
            above: 0.0,
            below: 0.0,
        };

        for v in vertices {
            let d = v.sub(&start);

            let across = d.dot(&normal);
            if across > candidate.above {
                candidate.above = across;
            } else if -across > candidate.below {
                candidate.below = -across;
            }

            let along = d.dot(&direction);
            if along > 0.0 {
                candidate.forward = candidate.forward.max(along);
            } else {
                candidate.backward = candidate.backward.max(-along);
            }
        }

        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::build_hull;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, z: f64) -> Point {
        Point::new(x, 0.0, z)
    }

    fn fit(pts: &[Point]) -> Result<Rectangle> {
        let hull = build_hull(pts, EPSILON);
        RectangleFitter::default().fit(pts, &hull)
    }

    fn sorted(mut pts: Vec<Point>) -> Vec<Point> {
        pts.sort_by(|a, b| a.x.total_cmp(&b.x));
        pts
    }

    #[test]
    fn test_axis_aligned_rectangle() {
        let pts = vec![
            p(0.0, 0.0),
            p(0.0, 5.0),
            p(5.0, 2.5),
            p(10.0, 0.0),
            p(10.0, 5.0),
        ];
        let rect = fit(&pts).unwrap();
        assert_relative_eq!(rect.area(), 50.0);
        assert_relative_eq!(rect.width(), 10.0);
        assert_relative_eq!(rect.height(), 5.0);
        assert_eq!(rect.edge_index(), 0);
        assert_eq!(
            rect.corners(),
            &[
                PlanarPoint::new(0.0, 0.0),
                PlanarPoint::new(10.0, 0.0),
                PlanarPoint::new(10.0, 5.0),
                PlanarPoint::new(0.0, 5.0),
            ]
        );
        assert_relative_eq!(rect.angle(), 0.0);
        assert_eq!(rect.center(), PlanarPoint::new(5.0, 2.5));
    }

    #[test]
    fn test_rotated_square() {
        let angle = 30f64.to_radians();
        let (s, c) = angle.sin_cos();
        let corners = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
        let pts = sorted(
            corners
                .iter()
                .map(|&(x, z)| p(x * c - z * s + 3.0, x * s + z * c - 2.0))
                .collect(),
        );
        let rect = fit(&pts).unwrap();
        assert_relative_eq!(rect.area(), 4.0, epsilon = 1e-9);
        assert_relative_eq!(rect.width(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(rect.height(), 2.0, epsilon = 1e-9);
        for corner in rect.corners() {
            assert!(
                pts.iter()
                    .any(|q| q.planar().sub(corner).length() < 1e-9),
                "corner {} is not a square vertex",
                corner
            );
        }
    }

    #[test]
    fn test_collinear_gives_zero_height() {
        let pts = vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)];
        let rect = fit(&pts).unwrap();
        assert_eq!(rect.height(), 0.0);
        assert_relative_eq!(rect.width(), 10.0);
        assert_eq!(rect.area(), 0.0);
        assert!(rect.corners().iter().all(|c| c.x.is_finite() && c.z.is_finite()));
    }

    #[test]
    fn test_two_points() {
        let pts = vec![p(0.0, 0.0), p(3.0, 4.0)];
        let rect = fit(&pts).unwrap();
        assert_relative_eq!(rect.width(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.height(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let err = fit(&[p(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, FootprintError::DegenerateHull { distinct: 1 }));
    }

    #[test]
    fn test_stacked_points_are_degenerate() {
        // Distinct in 3D, identical in the horizontal plane
        let pts = vec![Point::new(1.0, 0.0, 1.0), Point::new(1.0, 2.0, 1.0)];
        let err = fit(&pts).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_empty_hull() {
        let err = fit(&[]).unwrap_err();
        assert!(matches!(err, FootprintError::EmptySet));
    }

    #[test]
    fn test_ties_keep_first_edge() {
        // Axis-aligned edges give exactly equal areas for every edge
        let pts = vec![p(0.0, 0.0), p(0.0, 2.0), p(3.0, 0.0), p(3.0, 2.0)];
        let hull = build_hull(&pts, EPSILON);
        let fitter = RectangleFitter::default();
        let candidates = fitter.candidates(&pts, &hull);
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|c| c.area() == 6.0));
        let rect = fitter.fit(&pts, &hull).unwrap();
        assert_eq!(rect.edge_index(), 0);
    }

    #[test]
    fn test_right_triangle() {
        // Both legs and the hypotenuse give area 12
        let pts = vec![p(0.0, 0.0), p(0.0, 3.0), p(4.0, 0.0)];
        let hull = build_hull(&pts, EPSILON);
        let fitter = RectangleFitter::default();
        let candidates = fitter.candidates(&pts, &hull);
        assert_eq!(candidates.len(), 3);
        for c in &candidates {
            assert_relative_eq!(c.area(), 12.0, epsilon = 1e-9);
        }
        assert_relative_eq!(fitter.fit(&pts, &hull).unwrap().area(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rectangle_is_minimal_and_contains_hull() {
        let pts = sorted(vec![
            p(0.0, 0.0),
            p(4.0, 1.0),
            p(7.0, 4.0),
            p(5.0, 7.0),
            p(1.0, 5.0),
            p(-1.0, 2.0),
            p(3.0, 3.0),
        ]);
        let hull = build_hull(&pts, EPSILON);
        let fitter = RectangleFitter::default();
        let rect = fitter.fit(&pts, &hull).unwrap();

        for c in fitter.candidates(&pts, &hull) {
            assert!(rect.area() <= c.area() + 1e-12);
        }
        for v in hull.vertices(&pts) {
            assert!(rect.contains(&v, 1e-9));
        }
        assert!(rect.area() >= hull.area(&pts) - 1e-9);
    }

    #[test]
    fn test_corners_3d_and_winding() {
        let pts = vec![p(0.0, 0.0), p(0.0, 2.0), p(3.0, 0.0), p(3.0, 2.0)];
        let rect = fit(&pts).unwrap();
        let lifted = rect.corners_3d(1.5);
        assert!(lifted.iter().all(|c| c.y == 1.5));
        let polygon: Vec<PlanarPoint> = rect.corners().to_vec();
        assert_relative_eq!(crate::geometry::signed_area(&polygon), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_min_edge_length_skips_short_edges() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1e-4), p(10.0, 0.0)];
        let hull = build_hull(&pts, EPSILON);
        let coarse = RectangleFitter::new(&FootprintConfig::default().with_min_edge_length(1e-3));
        let all = RectangleFitter::default().candidates(&pts, &hull);
        let kept = coarse.candidates(&pts, &hull);
        assert_eq!(all.len(), 3);
        assert_eq!(kept.len(), 2);
    }
}
