//! Incremental room footprint estimation
//!
//! [`RoomFinder`] accumulates scan points and answers bounds, hull and
//! rectangle queries against whatever has been collected so far. Nothing is
//! cached between insertions: every query recomputes from the current set.

use crate::config::FootprintConfig;
use crate::hull::{Hull, HullBuilder};
use crate::point_set::PointSet;
use crate::rectangle::{Rectangle, RectangleFitter};
use crate::types::{BoundingBox, Point};
use crate::{FootprintError, Result};
use serde::{Deserialize, Serialize};

/// Everything one query reports about the current scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Axis-aligned box of every point
    pub bounds: BoundingBox,
    /// Hull indices into the point snapshot at query time
    pub hull: Hull,
    /// Minimum-area rectangle around the hull
    pub rectangle: Rectangle,
}

/// Accumulates floor points and fits the room's footprint on demand
#[derive(Debug, Clone)]
pub struct RoomFinder {
    points: PointSet,
    hull_builder: HullBuilder,
    fitter: RectangleFitter,
    config: FootprintConfig,
}

impl Default for RoomFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomFinder {
    /// Finder with the default tolerances
    pub fn new() -> Self {
        Self::from_valid_config(FootprintConfig::default())
    }

    /// Finder with custom tolerances
    ///
    /// # Errors
    /// [`FootprintError::InvalidConfig`] when a tolerance is negative or not finite.
    pub fn with_config(config: FootprintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FootprintConfig) -> Self {
        Self {
            points: PointSet::with_config(&config),
            hull_builder: HullBuilder::new(&config),
            fitter: RectangleFitter::new(&config),
            config,
        }
    }

    /// Add one scan point
    ///
    /// Returns `Ok(false)` for a near-duplicate, which leaves the set unchanged.
    pub fn add(&mut self, point: Point) -> Result<bool> {
        self.points.add(point)
    }

    /// Add many scan points, returning how many were actually inserted
    ///
    /// Stops at the first non-finite point; points before it stay added.
    pub fn extend<I>(&mut self, points: I) -> Result<usize>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut inserted = 0;
        for point in points {
            if self.points.add(point)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored points, sorted by x
    pub fn points(&self) -> &[Point] {
        self.points.points()
    }

    pub fn point_set(&self) -> &PointSet {
        &self.points
    }

    pub fn config(&self) -> &FootprintConfig {
        &self.config
    }

    /// Axis-aligned bounding box of all points
    pub fn bounds(&self) -> Result<BoundingBox> {
        self.points.bounds()
    }

    /// Convex hull of the current points in the horizontal plane
    pub fn hull(&self) -> Result<Hull> {
        if self.points.is_empty() {
            return Err(FootprintError::EmptySet);
        }
        Ok(self.hull_builder.build(self.points.points()))
    }

    /// Minimum-area rectangle around the current points
    pub fn fit(&self) -> Result<Rectangle> {
        let hull = self.hull()?;
        self.fitter.fit(self.points.points(), &hull)
    }

    /// Bounds, hull and rectangle from a single snapshot
    pub fn footprint(&self) -> Result<Footprint> {
        let bounds = self.bounds()?;
        let hull = self.hull()?;
        let rectangle = self.fitter.fit(self.points.points(), &hull)?;
        Ok(Footprint {
            bounds,
            hull,
            rectangle,
        })
    }
}
