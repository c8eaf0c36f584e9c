//! Core data types for footprint computation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D scan point. y is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Subtract another point
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Add another point
    pub fn add(&self, other: &Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Scale by a scalar
    pub fn scale(&self, s: f64) -> Point {
        Point {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Dot product with another point
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared distance to another point
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let d = self.sub(other);
        d.dot(&d)
    }

    /// True when no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Projection onto the horizontal plane
    pub fn planar(&self) -> PlanarPoint {
        PlanarPoint::new(self.x, self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// A point or vector in the horizontal (x, z) plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub z: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn sub(&self, other: &PlanarPoint) -> PlanarPoint {
        PlanarPoint::new(self.x - other.x, self.z - other.z)
    }

    pub fn add(&self, other: &PlanarPoint) -> PlanarPoint {
        PlanarPoint::new(self.x + other.x, self.z + other.z)
    }

    pub fn scale(&self, s: f64) -> PlanarPoint {
        PlanarPoint::new(self.x * s, self.z * s)
    }

    pub fn dot(&self, other: &PlanarPoint) -> f64 {
        self.x * other.x + self.z * other.z
    }

    /// 2D cross product, positive when `other` lies counter-clockwise of `self`
    pub fn cross(&self, other: &PlanarPoint) -> f64 {
        self.x * other.z - self.z * other.x
    }

    /// Left-hand normal, i.e. this vector rotated a quarter turn counter-clockwise
    pub fn perp(&self) -> PlanarPoint {
        PlanarPoint::new(-self.z, self.x)
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector, or `None` for a vector shorter than `min_length`
    pub fn try_normalize(&self, min_length: f64) -> Option<PlanarPoint> {
        let len = self.length();
        if len > min_length && len > 0.0 {
            Some(self.scale(1.0 / len))
        } else {
            None
        }
    }

    /// Back to 3D at height `y`
    pub fn lift(&self, y: f64) -> Point {
        Point::new(self.x, y, self.z)
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.z)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Zero-size box at a single point
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::from_point(*first);
        for p in iter {
            bbox.encapsulate(p);
        }
        Some(bbox)
    }

    /// Grow the box to include `p`
    pub fn encapsulate(&mut self, p: &Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn center(&self) -> Point {
        self.min.add(&self.max).scale(0.5)
    }

    pub fn size(&self) -> Point {
        self.max.sub(&self.min)
    }

    /// Half of the size along each axis
    pub fn extents(&self) -> Point {
        self.size().scale(0.5)
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Area of the box's footprint in the horizontal plane
    pub fn planar_area(&self) -> f64 {
        let size = self.size();
        size.x * size.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planar_projection_drops_y() {
        let p = Point::new(1.0, 7.0, -2.0);
        assert_eq!(p.planar(), PlanarPoint::new(1.0, -2.0));
        assert_eq!(p.planar().lift(3.0), Point::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn test_perp_is_counter_clockwise() {
        let e = PlanarPoint::new(1.0, 0.0);
        assert_eq!(e.perp(), PlanarPoint::new(0.0, 1.0));
        assert!(e.cross(&e.perp()) > 0.0);
    }

    #[test]
    fn test_try_normalize() {
        let v = PlanarPoint::new(3.0, 4.0).try_normalize(1e-10).unwrap();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert!(PlanarPoint::new(0.0, 0.0).try_normalize(1e-10).is_none());
    }

    #[test]
    fn test_finite() {
        assert!(Point::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_bounding_box() {
        let pts = [
            Point::new(0.0, 1.0, 0.0),
            Point::new(10.0, -1.0, 2.0),
            Point::new(4.0, 0.0, 5.0),
        ];
        let bbox = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(bbox.min, Point::new(0.0, -1.0, 0.0));
        assert_eq!(bbox.max, Point::new(10.0, 1.0, 5.0));
        assert_eq!(bbox.center(), Point::new(5.0, 0.0, 2.5));
        assert_eq!(bbox.extents(), Point::new(5.0, 1.0, 2.5));
        assert_relative_eq!(bbox.planar_area(), 50.0);
        assert!(pts.iter().all(|p| bbox.contains(p)));
        let empty: [Point; 0] = [];
        assert!(BoundingBox::from_points(&empty).is_none());
    }

    #[test]
    fn test_single_point_box_is_empty_volume() {
        let p = Point::new(2.0, 3.0, 4.0);
        let bbox = BoundingBox::from_point(p);
        assert_eq!(bbox.center(), p);
        assert_eq!(bbox.size(), Point::new(0.0, 0.0, 0.0));
    }
}
