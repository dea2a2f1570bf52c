//! Path-drawing tools: pen (click-placed anchors) and freehand (drag trail).

use tracing::debug;

use zonekit_core::constants::{
    CLOSE_LOOP_THRESHOLD, FREEHAND_MIN_DISTANCE, PATH_SIMPLIFICATION_TOLERANCE, PEN_DEDUP_EPSILON,
};
use zonekit_core::ZoneId;

use crate::geometry::{distance, simplify_path, Point};
use crate::model::{ZonePolygon, ZoneShape};
use crate::zone_store::ZoneStore;

use super::ToolDraft;

/// Pen tool: each click places an anchor; clicking near the first anchor
/// (or double-clicking) closes the polygon.
#[derive(Debug, Default)]
pub struct PenTool {
    points: Vec<Point>,
    close_loop_hover: bool,
}

impl PenTool {
    /// Adds an anchor, or closes the loop when the click lands within the
    /// close threshold of the first anchor and at least three anchors
    /// exist. Input arrives grid-snapped when snapping is enabled.
    pub fn on_down(&mut self, pos: Point, zoom: f64, store: &mut ZoneStore) -> Option<ZoneId> {
        if self.points.len() >= 3 {
            let threshold = CLOSE_LOOP_THRESHOLD / zoom;
            if distance(pos, self.points[0]) < threshold {
                return self.finish(store);
            }
        }

        self.points.push(pos);
        None
    }

    /// Recomputes the close-loop hover flag for preview highlighting.
    pub fn on_move(&mut self, pos: Point, zoom: f64) {
        self.close_loop_hover = self.points.len() >= 3
            && distance(pos, self.points[0]) < CLOSE_LOOP_THRESHOLD / zoom;
    }

    /// Force-finishes the shape.
    pub fn on_double_click(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        self.finish(store)
    }

    /// Commits the collected anchors as a polygon zone. Consecutive
    /// duplicate points (double-click artifacts) are merged first; if fewer
    /// than three points remain the draft is silently discarded.
    fn finish(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        let mut points: Vec<Point> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            match points.last() {
                Some(last) if distance(*p, *last) <= PEN_DEDUP_EPSILON => {}
                _ => points.push(*p),
            }
        }

        let committed = if points.len() >= 3 {
            Some(store.create_zone(ZoneShape::Polygon(ZonePolygon::new(points))))
        } else {
            None
        };

        self.cancel();
        committed
    }

    pub fn cancel(&mut self) {
        self.points.clear();
        self.close_loop_hover = false;
    }

    pub fn draft(&self) -> ToolDraft {
        ToolDraft {
            points: self.points.clone(),
            preview: None,
            close_loop_hover: self.close_loop_hover,
        }
    }
}

/// Freehand tool: records the pointer trail while the button is held, then
/// simplifies and commits it as a polygon.
#[derive(Debug, Default)]
pub struct FreehandTool {
    drawing: bool,
    points: Vec<Point>,
}

impl FreehandTool {
    pub fn on_down(&mut self, pos: Point) {
        self.drawing = true;
        self.points = vec![pos];
    }

    /// Appends the pointer position when it has moved far enough from the
    /// last stored point. The spacing is a jitter filter expressed in
    /// screen px so visual density stays constant across zoom levels.
    pub fn on_move(&mut self, pos: Point, zoom: f64) {
        if !self.drawing {
            return;
        }

        let min_distance = FREEHAND_MIN_DISTANCE / zoom;
        if let Some(last) = self.points.last() {
            if distance(*last, pos) >= min_distance {
                self.points.push(pos);
            }
        }
    }

    /// Simplifies and commits the trail when at least three raw points were
    /// collected; discards it otherwise.
    pub fn on_up(&mut self, store: &mut ZoneStore) -> Option<ZoneId> {
        let committed = if self.points.len() >= 3 {
            let simplified = simplify_path(&self.points, PATH_SIMPLIFICATION_TOLERANCE);
            debug!(
                raw = self.points.len(),
                simplified = simplified.len(),
                "freehand stroke simplified"
            );
            if simplified.len() >= 3 {
                Some(store.create_zone(ZoneShape::Polygon(ZonePolygon::new(simplified))))
            } else {
                None
            }
        } else {
            None
        };

        self.cancel();
        committed
    }

    pub fn cancel(&mut self) {
        self.drawing = false;
        self.points.clear();
    }

    pub fn draft(&self) -> ToolDraft {
        ToolDraft {
            points: self.points.clone(),
            preview: None,
            close_loop_hover: false,
        }
    }
}
