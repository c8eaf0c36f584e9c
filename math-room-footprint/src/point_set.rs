//! Sorted, de-duplicated storage for scan points

use crate::config::FootprintConfig;
use crate::types::{BoundingBox, Point};
use crate::{DUPLICATE_DISTANCE_SQ, FootprintError, Result};

/// Scan points kept sorted by x
///
/// Points with equal x stay in insertion order. No two stored points are
/// closer than the duplicate threshold.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    duplicate_distance_sq: f64,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet {
    /// Empty set with the default duplicate threshold
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            duplicate_distance_sq: DUPLICATE_DISTANCE_SQ,
        }
    }

    /// Empty set using the config's duplicate threshold
    pub fn with_config(config: &FootprintConfig) -> Self {
        Self {
            points: Vec::new(),
            duplicate_distance_sq: config.duplicate_distance_sq,
        }
    }

    /// Insert a point at its sorted position
    ///
    /// Returns `Ok(false)` without modifying the set when a stored point is
    /// within the duplicate threshold, and an error for non-finite input.
    pub fn add(&mut self, point: Point) -> Result<bool> {
        if !point.is_finite() {
            log::warn!("Rejecting non-finite scan point {:?}", point);
            return Err(FootprintError::InvalidPoint {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }

        // After every point with x <= point.x, so equal-x points keep arrival order
        let index = self.points.partition_point(|p| p.x <= point.x);

        if self.has_duplicate_near(index, &point) {
            log::trace!("Skipping duplicate scan point {}", point);
            return Ok(false);
        }

        self.points.insert(index, point);
        Ok(true)
    }

    /// Look outward from `index` while the x gap alone is still under the threshold
    fn has_duplicate_near(&self, index: usize, point: &Point) -> bool {
        let threshold = self.duplicate_distance_sq;
        let within_x = |p: &Point| {
            let dx = p.x - point.x;
            dx * dx < threshold
        };

        let before = self.points[..index]
            .iter()
            .rev()
            .take_while(|p| within_x(*p));
        let after = self.points[index..].iter().take_while(|p| within_x(*p));

        before
            .chain(after)
            .any(|p| p.distance_squared(point) < threshold)
    }

    /// Axis-aligned box of every stored point
    pub fn bounds(&self) -> Result<BoundingBox> {
        BoundingBox::from_points(&self.points).ok_or(FootprintError::EmptySet)
    }

    /// Stored points in x order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn duplicate_distance_sq(&self) -> f64 {
        self.duplicate_distance_sq
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
