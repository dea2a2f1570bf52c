use serde::{Deserialize, Serialize};

use crate::geometry::{point_in_circle, Bounds, Point};

/// A circle zone: center plus radius, map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneCircle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl ZoneCircle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point_in_circle(point, self.center(), self.radius)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.cx - self.radius,
            self.cy - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.cx += dx;
        self.cy += dy;
    }

    /// Cardinal resize handles in index order: east, west, south, north.
    pub fn handles(&self) -> [Point; 4] {
        [
            Point::new(self.cx + self.radius, self.cy),
            Point::new(self.cx - self.radius, self.cy),
            Point::new(self.cx, self.cy + self.radius),
            Point::new(self.cx, self.cy - self.radius),
        ]
    }
}
