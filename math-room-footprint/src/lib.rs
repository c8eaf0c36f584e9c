//! Room footprint estimation from scanned floor points
//!
//! Points arrive one at a time from an environment scan. The crate keeps
//! them in an x-sorted, de-duplicated set and, on demand, computes:
//!
//! - the axis-aligned bounding box of everything seen so far;
//! - the planar convex hull in the horizontal (x, z) plane (monotone chain);
//! - the minimum-area enclosing rectangle of that hull (rotating calipers),
//!   which is the room's estimated footprint and orientation.
//!
//! The y axis is vertical and only contributes to the bounding box.
//!
//! # Example
//! ```
//! use math_room_footprint::{Point, RoomFinder};
//!
//! let mut finder = RoomFinder::new();
//! for p in [
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(10.0, 0.0, 0.0),
//!     Point::new(10.0, 0.0, 5.0),
//!     Point::new(0.0, 0.0, 5.0),
//!     Point::new(5.0, 0.0, 2.5),
//! ] {
//!     finder.add(p).unwrap();
//! }
//!
//! let rect = finder.fit().unwrap();
//! assert!((rect.area() - 50.0).abs() < 1e-9);
//! ```

mod config;
mod geometry;
mod hull;
mod point_set;
mod rectangle;
mod room_finder;
mod types;

// Synthetic scans, public so integration tests and downstream crates can use them
pub mod testdata;

pub use config::FootprintConfig;
pub use geometry::{orientation, turns_counter_clockwise};
pub use hull::{Hull, HullBuilder, build_hull};
pub use point_set::PointSet;
pub use rectangle::{EdgeCandidate, Rectangle, RectangleFitter};
pub use room_finder::{Footprint, RoomFinder};
pub use types::{BoundingBox, PlanarPoint, Point};

/// Error types for footprint operations
#[derive(Debug, thiserror::Error)]
pub enum FootprintError {
    #[error("Point set is empty")]
    EmptySet,

    #[error("Hull is degenerate ({distinct} distinct point(s), at least 2 required)")]
    DegenerateHull { distinct: usize },

    #[error("Invalid point ({x}, {y}, {z}): coordinates must be finite")]
    InvalidPoint { x: f64, y: f64, z: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FootprintError {
    /// Returns `true` if the query ran against an empty point set.
    pub fn is_empty_set(&self) -> bool {
        matches!(self, FootprintError::EmptySet)
    }

    /// Returns `true` if the hull had too few distinct points.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, FootprintError::DegenerateHull { .. })
    }

    /// Returns `true` if the caller should simply keep accumulating points.
    pub fn is_recoverable(&self) -> bool {
        self.is_empty_set() || self.is_degenerate()
    }
}

pub type Result<T> = std::result::Result<T, FootprintError>;

/// Numerical tolerance for floating-point comparisons
/// Used as the default for:
/// - Orientation (turn) tests in the hull builder
/// - Minimum usable hull edge length in the rectangle fitter
pub(crate) const EPSILON: f64 = 1e-10;

/// Squared distance under which two scan points are considered the same
pub(crate) const DUPLICATE_DISTANCE_SQ: f64 = 1e-5;
