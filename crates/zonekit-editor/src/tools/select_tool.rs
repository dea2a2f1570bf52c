//! Selection and manipulation: hit-testing, drag-to-move, handle resize.

use zonekit_core::constants::HANDLE_HIT_SIZE;
use zonekit_core::ZoneId;

use crate::geometry::{distance, Point};
use crate::model::ZoneShape;
use crate::zone_store::ZoneStore;

use super::CursorStyle;

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    /// Translating the selected zone. `last` is the previous pointer
    /// position; deltas accumulate incrementally so later events reuse the
    /// latest position as the new reference and never drift.
    DraggingZone { last: Point },
    /// Reshaping through one handle of the selected zone.
    DraggingHandle { handle: usize },
}

/// The select/manipulate tool.
#[derive(Debug, Default)]
pub struct SelectTool {
    state: DragState,
    /// Whether the current gesture actually mutated geometry. Gates the
    /// single drag-complete signal on pointer-up.
    has_dragged: bool,
}

impl SelectTool {
    /// Pointer-down: handles of the selected zone take priority, then zone
    /// hit-testing top-to-bottom. Clicking the selected zone starts a move
    /// drag; clicking another zone changes selection; clicking empty space
    /// clears it.
    pub fn on_down(&mut self, pos: Point, zoom: f64, store: &mut ZoneStore) {
        if let Some(selected) = store.selected_id() {
            if let Some(handle) = find_handle_at(store, selected, pos, zoom) {
                self.state = DragState::DraggingHandle { handle };
                return;
            }
        }

        match store.find_zone_at_point(pos, zoom).map(|z| z.id) {
            Some(id) if store.selected_id() == Some(id) => {
                self.state = DragState::DraggingZone { last: pos };
            }
            Some(id) => {
                store.select_zone(Some(id));
            }
            None => {
                store.select_zone(None);
            }
        }
    }

    pub fn on_move(&mut self, pos: Point, zoom: f64, store: &mut ZoneStore) {
        match &mut self.state {
            DragState::DraggingHandle { handle } => {
                let handle = *handle;
                if let Some(id) = store.selected_id() {
                    if drag_handle(store, id, handle, pos) {
                        self.has_dragged = true;
                    }
                }
            }
            DragState::DraggingZone { last } => {
                let dx = pos.x - last.x;
                let dy = pos.y - last.y;
                *last = pos;
                if let Some(id) = store.selected_id() {
                    if let Some(zone) = store.get_mut(id) {
                        zone.shape.translate(dx, dy);
                        self.has_dragged = true;
                    }
                }
            }
            DragState::Idle => {
                // Maintain hover state for cursor feedback and highlighting
                let hit = store.find_zone_at_point(pos, zoom).map(|z| z.id);
                store.set_hovered(hit);
            }
        }
    }

    /// Pointer-up: ends the gesture. When geometry was mutated, notifies
    /// the store's update observer and reports drag completion — exactly
    /// once per gesture, never per move event.
    pub fn on_up(&mut self, store: &mut ZoneStore) -> bool {
        let was_dragging = !matches!(self.state, DragState::Idle);
        let completed = was_dragging && self.has_dragged;

        if completed {
            if let Some(id) = store.selected_id() {
                store.notify_updated(id);
            }
        }

        self.state = DragState::Idle;
        self.has_dragged = false;
        completed
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.has_dragged = false;
    }

    /// Cursor policy: resize over a handle, move over the selected zone's
    /// body, pointer over any other zone, default otherwise.
    pub fn cursor(&self, pos: Point, zoom: f64, store: &ZoneStore) -> CursorStyle {
        if let Some(selected) = store.selected_id() {
            if find_handle_at(store, selected, pos, zoom).is_some() {
                return CursorStyle::Resize;
            }
        }

        match store.find_zone_at_point(pos, zoom) {
            Some(zone) if store.selected_id() == Some(zone.id) => CursorStyle::Move,
            Some(_) => CursorStyle::Pointer,
            None => CursorStyle::Default,
        }
    }
}

/// Tests the selected zone's handles against a point. The hit box is a
/// square of `HANDLE_HIT_SIZE` screen px converted to map units.
fn find_handle_at(store: &ZoneStore, id: ZoneId, pos: Point, zoom: f64) -> Option<usize> {
    let zone = store.get(id)?;
    let size = HANDLE_HIT_SIZE / zoom;

    zone.shape
        .handles()
        .iter()
        .position(|h| (pos.x - h.x).abs() < size && (pos.y - h.y).abs() < size)
}

/// Applies a handle drag to the selected zone. Returns whether geometry
/// changed.
fn drag_handle(store: &mut ZoneStore, id: ZoneId, handle: usize, pos: Point) -> bool {
    let Some(zone) = store.get_mut(id) else {
        return false;
    };

    match &mut zone.shape {
        ZoneShape::Circle(circle) => {
            circle.radius = distance(circle.center(), pos);
            true
        }
        ZoneShape::Rectangle(rect) => {
            rect.resize_corner(handle, pos);
            true
        }
        ZoneShape::Line(line) => {
            if handle < line.points.len() {
                line.points[handle] = pos;
                true
            } else {
                false
            }
        }
        ZoneShape::Polygon(polygon) => {
            if handle < polygon.points.len() {
                polygon.points[handle] = pos;
                true
            } else {
                false
            }
        }
    }
}
