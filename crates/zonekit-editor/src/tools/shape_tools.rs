//! Drag-to-draw tools for the fixed-form shapes: rectangle, circle, line.
//!
//! All three share the same two-state machine: pointer-down captures an
//! anchor and starts a live preview, pointer-move recomputes the preview
//! from anchor and pointer, pointer-up commits when the shape clears the
//! minimum size and discards it otherwise.

use zonekit_core::constants::MIN_SHAPE_SIZE;
use zonekit_core::ZoneId;

use crate::geometry::{distance, Point};
use crate::model::{ZoneCircle, ZoneLine, ZoneRect, ZoneShape};
use crate::zone_store::ZoneStore;

use super::ToolDraft;

/// Rectangle tool: anchor corner to opposite corner.
#[derive(Debug, Default)]
pub struct RectangleTool {
    anchor: Option<Point>,
    temp: Option<ZoneRect>,
}

impl RectangleTool {
    pub fn on_down(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.temp = Some(ZoneRect::new(pos.x, pos.y, 0.0, 0.0));
    }

    pub fn on_move(&mut self, pos: Point) {
        if let Some(anchor) = self.anchor {
            self.temp = Some(ZoneRect::from_corners(anchor, pos));
        }
    }

    /// Commits when both extents exceed the minimum size.
    pub fn on_up(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        let committed = match self.temp {
            Some(rect) if rect.width > MIN_SHAPE_SIZE && rect.height > MIN_SHAPE_SIZE => {
                Some(store.create_zone(ZoneShape::Rectangle(rect)))
            }
            _ => None,
        };
        self.cancel();
        committed
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.temp = None;
    }

    pub fn draft(&self) -> ToolDraft {
        ToolDraft {
            points: self.anchor.into_iter().collect(),
            preview: self.temp.map(ZoneShape::Rectangle),
            close_loop_hover: false,
        }
    }
}

/// Circle tool: anchor center, radius follows the pointer.
#[derive(Debug, Default)]
pub struct CircleTool {
    anchor: Option<Point>,
    temp: Option<ZoneCircle>,
}

impl CircleTool {
    pub fn on_down(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.temp = Some(ZoneCircle::new(pos.x, pos.y, 0.0));
    }

    pub fn on_move(&mut self, pos: Point) {
        if let Some(center) = self.anchor {
            self.temp = Some(ZoneCircle::new(center.x, center.y, distance(center, pos)));
        }
    }

    /// Commits when the radius exceeds the minimum size.
    pub fn on_up(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        let committed = match self.temp {
            Some(circle) if circle.radius > MIN_SHAPE_SIZE => {
                Some(store.create_zone(ZoneShape::Circle(circle)))
            }
            _ => None,
        };
        self.cancel();
        committed
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.temp = None;
    }

    pub fn draft(&self) -> ToolDraft {
        ToolDraft {
            points: self.anchor.into_iter().collect(),
            preview: self.temp.map(ZoneShape::Circle),
            close_loop_hover: false,
        }
    }
}

/// Line tool: fixed start, moving end.
#[derive(Debug, Default)]
pub struct LineTool {
    anchor: Option<Point>,
    temp: Option<ZoneLine>,
}

impl LineTool {
    pub fn on_down(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.temp = Some(ZoneLine::new(pos, pos));
    }

    pub fn on_move(&mut self, pos: Point) {
        if let Some(start) = self.anchor {
            self.temp = Some(ZoneLine::new(start, pos));
        }
    }

    /// Commits when the length exceeds the minimum size.
    pub fn on_up(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        let committed = match self.temp {
            Some(line) if line.length() > MIN_SHAPE_SIZE => {
                Some(store.create_zone(ZoneShape::Line(line)))
            }
            _ => None,
        };
        self.cancel();
        committed
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.temp = None;
    }

    pub fn draft(&self) -> ToolDraft {
        ToolDraft {
            points: self.anchor.into_iter().collect(),
            preview: self.temp.map(ZoneShape::Line),
            close_loop_hover: false,
        }
    }
}
