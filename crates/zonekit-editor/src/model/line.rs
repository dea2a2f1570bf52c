use serde::{Deserialize, Serialize};

use crate::geometry::{distance_to_segment, polygon_bounds, Bounds, Point};

/// A line zone: two endpoints stored as a point list, map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneLine {
    pub points: [Point; 2],
}

impl ZoneLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { points: [start, end] }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[1]
    }

    pub fn length(&self) -> f64 {
        self.points[0].distance_to(&self.points[1])
    }

    /// Perpendicular distance from a point to the segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        distance_to_segment(point, self.points[0], self.points[1])
    }

    pub fn bounds(&self) -> Bounds {
        // Two points always yield bounds
        polygon_bounds(&self.points).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}
