use serde::{Deserialize, Serialize};

use crate::geometry::{point_in_polygon, polygon_bounds, Bounds, Point};

/// A closed polygon zone: ordered vertex ring, map units. Also the committed
/// form of pen and freehand drawings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePolygon {
    pub points: Vec<Point>,
}

impl ZonePolygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// A closed polygon needs at least three vertices.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point_in_polygon(point, &self.points)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        polygon_bounds(&self.points)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}
