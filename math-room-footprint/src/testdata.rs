//! Synthetic scan data for footprint tests
//!
//! Generators take an explicit RNG so callers can seed them for
//! reproducible runs.

use crate::types::{PlanarPoint, Point};
use rand::Rng;

/// Corners of a `width` x `depth` rectangle rotated by `angle` radians about `center`
///
/// Counter-clockwise, starting from the corner at local (-width/2, -depth/2).
pub fn rectangle_corners(
    width: f64,
    depth: f64,
    angle: f64,
    center: PlanarPoint,
) -> [PlanarPoint; 4] {
    let (s, c) = angle.sin_cos();
    let (hw, hd) = (width / 2.0, depth / 2.0);
    [(-hw, -hd), (hw, -hd), (hw, hd), (-hw, hd)]
        .map(|(x, z)| PlanarPoint::new(center.x + x * c - z * s, center.z + x * s + z * c))
}

/// Points along the walls of a rotated rectangular room
///
/// Each sample lands on a random wall position at a floor height between
/// 0 and 5 cm.
pub fn rectangular_room_scan<R: Rng>(
    rng: &mut R,
    width: f64,
    depth: f64,
    angle: f64,
    center: PlanarPoint,
    samples: usize,
) -> Vec<Point> {
    noisy_room_scan(rng, width, depth, angle, center, samples, 0.0)
}

/// Like [`rectangular_room_scan`] with uniform jitter of at most `noise` per axis
pub fn noisy_room_scan<R: Rng>(
    rng: &mut R,
    width: f64,
    depth: f64,
    angle: f64,
    center: PlanarPoint,
    samples: usize,
    noise: f64,
) -> Vec<Point> {
    let corners = rectangle_corners(width, depth, angle, center);
    let perimeter = 2.0 * (width + depth);
    let mut points = Vec::with_capacity(samples);

    for _ in 0..samples {
        // Walk a random distance around the perimeter
        let mut t = rng.random::<f64>() * perimeter;
        let mut wall = 0;
        let lengths = [width, depth, width, depth];
        while wall < 3 && t > lengths[wall] {
            t -= lengths[wall];
            wall += 1;
        }
        let a = corners[wall];
        let b = corners[(wall + 1) % 4];
        let along = (t / lengths[wall]).clamp(0.0, 1.0);
        let on_wall = a.add(&b.sub(&a).scale(along));

        let jitter = if noise > 0.0 {
            PlanarPoint::new(
                rng.random_range(-noise..=noise),
                rng.random_range(-noise..=noise),
            )
        } else {
            PlanarPoint::new(0.0, 0.0)
        };

        let height = rng.random::<f64>() * 0.05;
        points.push(on_wall.add(&jitter).lift(height));
    }

    points
}

/// Uniform random points in a disc of `radius` around the origin
pub fn random_disc_points<R: Rng>(rng: &mut R, n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let r = radius * rng.random::<f64>().sqrt();
            let theta = rng.random::<f64>() * 2.0 * std::f64::consts::PI;
            Point::new(r * theta.cos(), rng.random::<f64>(), r * theta.sin())
        })
        .collect()
}

/// Uniform random points in an axis-aligned box in the horizontal plane
pub fn random_box_points<R: Rng>(rng: &mut R, n: usize, width: f64, depth: f64) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.random::<f64>() * width,
                0.0,
                rng.random::<f64>() * depth,
            )
        })
        .collect()
}

/// `n` evenly spaced points from `start` to `end` inclusive
pub fn collinear_points(n: usize, start: Point, end: Point) -> Vec<Point> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                start.add(&end.sub(&start).scale(t))
            })
            .collect(),
    }
}

/// Outline samples of an L-shaped room: a `width` x `depth` box missing
/// its `notch_width` x `notch_depth` corner at (width, depth)
pub fn l_shaped_room_outline(
    width: f64,
    depth: f64,
    notch_width: f64,
    notch_depth: f64,
    step: f64,
) -> Vec<Point> {
    let outline = [
        PlanarPoint::new(0.0, 0.0),
        PlanarPoint::new(width, 0.0),
        PlanarPoint::new(width, depth - notch_depth),
        PlanarPoint::new(width - notch_width, depth - notch_depth),
        PlanarPoint::new(width - notch_width, depth),
        PlanarPoint::new(0.0, depth),
    ];

    let mut points = Vec::new();
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        let length = b.sub(&a).length();
        let steps = ((length / step).ceil() as usize).max(1);
        for k in 0..steps {
            let t = k as f64 / steps as f64;
            points.push(a.add(&b.sub(&a).scale(t)).lift(0.0));
        }
    }
    points
}
