use serde::{Deserialize, Serialize};
use zonekit_core::constants::MIN_RECT_EDGE;

use crate::geometry::{point_in_rect, Bounds, Point};

/// A rectangle zone: top-left origin plus positive extents, map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a normalized rectangle from two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point_in_rect(point, self.x, self.y, self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Corner handles in index order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }

    /// Moves one corner handle to `pos`, keeping the opposite corner fixed
    /// and clamping both edges to the minimum length.
    pub fn resize_corner(&mut self, handle: usize, pos: Point) {
        let right = self.x + self.width;
        let bottom = self.y + self.height;

        match handle {
            0 => {
                // Top-left
                self.x = pos.x.min(right - MIN_RECT_EDGE);
                self.y = pos.y.min(bottom - MIN_RECT_EDGE);
                self.width = right - self.x;
                self.height = bottom - self.y;
            }
            1 => {
                // Top-right
                self.y = pos.y.min(bottom - MIN_RECT_EDGE);
                self.width = (pos.x - self.x).max(MIN_RECT_EDGE);
                self.height = bottom - self.y;
            }
            2 => {
                // Bottom-right
                self.width = (pos.x - self.x).max(MIN_RECT_EDGE);
                self.height = (pos.y - self.y).max(MIN_RECT_EDGE);
            }
            3 => {
                // Bottom-left
                self.x = pos.x.min(right - MIN_RECT_EDGE);
                self.width = right - self.x;
                self.height = (pos.y - self.y).max(MIN_RECT_EDGE);
            }
            _ => {}
        }
    }
}
