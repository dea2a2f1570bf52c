//! Geometric primitives and pure utility functions.
//!
//! Everything here is stateless and operates in map space (raster-image
//! coordinates, origin top-left, units = image pixels).

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Even-odd ray-cast point-in-polygon test.
///
/// Points exactly on a right-hand edge count as outside; the choice is
/// arbitrary but consistent across all hit-testing.
pub fn point_in_polygon(point: Point, ring: &[Point]) -> bool {
    let mut inside = false;
    let n = ring.len();
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);
        if ((yi > point.y) != (yj > point.y))
            && (point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Closed-bound axis-aligned rectangle containment test.
pub fn point_in_rect(point: Point, x: f64, y: f64, width: f64, height: f64) -> bool {
    point.x >= x && point.x <= x + width && point.y >= y && point.y <= y + height
}

/// Inclusive circle containment test (`distance <= radius`).
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius
}

/// Axis-aligned bounding box over a point set. `None` on empty input.
pub fn polygon_bounds(points: &[Point]) -> Option<Bounds> {
    if points.is_empty() {
        return None;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Some(Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Distance from a point to a line segment.
///
/// Projects onto the segment with the parameter clamped to [0, 1]; a
/// zero-length segment degrades to point-to-point distance.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_squared = dx * dx + dy * dy;

    if length_squared == 0.0 {
        return distance(point, start);
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / length_squared).clamp(0.0, 1.0);
    let projection = Point::new(start.x + t * dx, start.y + t * dy);
    distance(point, projection)
}

/// Simplify a path using the Ramer-Douglas-Peucker algorithm.
///
/// Keeps the interior point of maximum distance from the chord between the
/// segment endpoints whenever that distance exceeds `tolerance`, recursing
/// on both halves; otherwise collapses the segment to its endpoints. The
/// first and last points always survive.
pub fn simplify_path(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut max_index = 0;
    for (i, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = distance_to_segment(*p, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_index = i;
        }
    }

    if max_dist > tolerance {
        let left = simplify_path(&points[..=max_index], tolerance);
        let right = simplify_path(&points[max_index..], tolerance);
        // The split point appears at the end of `left` and the start of
        // `right`; drop one copy when joining.
        let mut result = left;
        result.pop();
        result.extend(right);
        result
    } else {
        vec![first, last]
    }
}
