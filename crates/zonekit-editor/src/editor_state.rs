//! Editor state facade for shell integration.
//!
//! `EditorState` is the composition root: it constructs the event bus,
//! viewport, zone store, tool set, history, and calibration session, and
//! wires them together explicitly. The shell feeds it raw screen-space
//! pointer positions and reads back a render view each frame; everything
//! in between happens in map space.
//!
//! All entry points run synchronously on the caller's thread. A gesture's
//! move handler completes before the next input event is processed, so
//! in-place geometry mutation during a drag needs no locking.

use anyhow::Result;
use std::path::Path;

use zonekit_core::event_bus::{CalibrationEvent, EditorEvent, ViewEvent};
use zonekit_core::{CalibrationError, EventBus, ZoneId};

use crate::calibration::{CalibrationSession, MapCalibration, PickSlot};
use crate::geometry::Point;
use crate::history::UndoRedoManager;
use crate::model::{Zone, ZonePatch};
use crate::serialization::ProjectFile;
use crate::tools::{GestureResult, ToolDraft, ToolKind, ToolSet};
use crate::viewport::Viewport;
use crate::zone_store::ZoneStore;

pub use crate::tools::CursorStyle;

/// Everything a renderer pulls per frame-request.
#[derive(Debug)]
pub struct RenderState<'a> {
    /// Ordered zone list; later zones draw on top. Visibility filtering is
    /// left to the caller.
    pub zones: &'a [Zone],
    pub selected_id: Option<ZoneId>,
    pub hovered_id: Option<ZoneId>,
    /// The active tool's in-progress geometry.
    pub draft: ToolDraft,
    /// Last pointer position in map space, grid-snapped when snapping is
    /// enabled.
    pub cursor: Option<Point>,
    pub zoom: f64,
    pub pan: (f64, f64),
    pub snap_enabled: bool,
}

/// The editor core: owns all managers and routes input between them.
pub struct EditorState {
    bus: EventBus,
    viewport: Viewport,
    store: ZoneStore,
    tools: ToolSet,
    history: UndoRedoManager,
    calibration: CalibrationSession,
    /// Loaded map dimensions in map units, if any.
    map_size: Option<(f64, f64)>,
    /// Rendering surface dimensions in screen px.
    viewport_size: (f64, f64),
    cursor_pos: Option<Point>,
}

impl EditorState {
    pub fn new() -> Self {
        let bus = EventBus::new();
        let store = ZoneStore::new(bus.handle());
        let mut history = UndoRedoManager::new(bus.handle());
        // Baseline snapshot so the first edit is undoable
        history.save(&[]);

        Self {
            bus,
            viewport: Viewport::new(),
            store,
            tools: ToolSet::new(),
            history,
            calibration: CalibrationSession::new(),
            map_size: None,
            viewport_size: (1200.0, 800.0),
            cursor_pos: None,
        }
    }

    /// The shared event bus; subscribe here for zone/selection/view/history
    /// notifications.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn store(&self) -> &ZoneStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ZoneStore {
        &mut self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn calibration(&self) -> &CalibrationSession {
        &self.calibration
    }

    pub fn calibration_mut(&mut self) -> &mut CalibrationSession {
        &mut self.calibration
    }

    // ------------------------------------------------------------------
    // Map and viewport
    // ------------------------------------------------------------------

    /// Registers a loaded map's dimensions (the shell decodes the image)
    /// and fits it to the view.
    pub fn load_map(&mut self, width: f64, height: f64) {
        self.map_size = Some((width, height));
        self.fit_to_view();
    }

    pub fn map_size(&self) -> Option<(f64, f64)> {
        self.map_size
    }

    /// Updates the rendering surface dimensions (window resize).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = (width, height);
    }

    /// Fits the loaded map into the viewport. No-op without a map.
    pub fn fit_to_view(&mut self) {
        if let Some((map_w, map_h)) = self.map_size {
            let (vw, vh) = self.viewport_size;
            self.viewport.fit_to_view(map_w, map_h, vw, vh);
            self.publish_zoom();
        }
    }

    /// Relative zoom, optionally anchored at a screen position so the map
    /// point under the cursor stays put.
    pub fn zoom_by(&mut self, delta: f64, anchor: Option<(f64, f64)>) {
        self.viewport.zoom_by(delta, anchor);
        self.publish_zoom();
    }

    /// Pans the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    /// Toggles grid snapping; returns the new state.
    pub fn toggle_snap(&mut self) -> bool {
        let enabled = self.viewport.toggle_snap();
        self.bus
            .publish(EditorEvent::View(ViewEvent::SnapToggled { enabled }));
        enabled
    }

    fn publish_zoom(&self) {
        self.bus.publish(EditorEvent::View(ViewEvent::ZoomChanged {
            zoom: self.viewport.zoom(),
        }));
    }

    // ------------------------------------------------------------------
    // Tools and pointer routing
    // ------------------------------------------------------------------

    pub fn tool(&self) -> ToolKind {
        self.tools.kind()
    }

    /// Switches the active tool, discarding any in-progress draft.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tools.set_tool(kind);
    }

    /// Cancels the active tool's draft (escape-style interrupt) and any
    /// pending calibration pick.
    pub fn cancel(&mut self) {
        self.tools.cancel();
        self.calibration.cancel_pick();
    }

    /// Pointer-down at a screen position. A pending calibration pick
    /// consumes the event before any tool sees it.
    pub fn pointer_down(&mut self, screen_x: f64, screen_y: f64) {
        let map_pos = self.viewport.screen_to_map(screen_x, screen_y);

        if self.calibration.is_picking() {
            self.calibration.apply_pick(map_pos);
            return;
        }

        let pos = self.tool_input(map_pos);
        let result = self.tools.handle_down(pos, self.viewport.zoom(), &mut self.store);
        self.after_gesture(result);
    }

    /// Pointer-move at a screen position.
    pub fn pointer_move(&mut self, screen_x: f64, screen_y: f64) {
        let map_pos = self.viewport.screen_to_map(screen_x, screen_y);
        self.cursor_pos = Some(self.viewport.snap_to_grid(map_pos));

        let pos = self.tool_input(map_pos);
        self.tools.handle_move(pos, self.viewport.zoom(), &mut self.store);
    }

    /// Pointer-up at a screen position. Commits or discards drag drafts.
    pub fn pointer_up(&mut self, screen_x: f64, screen_y: f64) {
        let map_pos = self.viewport.screen_to_map(screen_x, screen_y);
        let pos = self.tool_input(map_pos);
        let result = self.tools.handle_up(pos, &mut self.store);
        self.after_gesture(result);
    }

    /// Double-click: force-finishes the pen tool's polygon.
    pub fn double_click(&mut self, _screen_x: f64, _screen_y: f64) {
        let result = self.tools.handle_double_click(&mut self.store);
        self.after_gesture(result);
    }

    /// Cursor feedback at a screen position.
    pub fn cursor_at(&self, screen_x: f64, screen_y: f64) -> CursorStyle {
        let pos = self.viewport.screen_to_map(screen_x, screen_y);
        self.tools.cursor(pos, self.viewport.zoom(), &self.store)
    }

    fn tool_input(&self, map_pos: Point) -> Point {
        if self.tools.wants_snapped_input() {
            self.viewport.snap_to_grid(map_pos)
        } else {
            map_pos
        }
    }

    fn after_gesture(&mut self, result: GestureResult) {
        if result.committed.is_some() || result.drag_completed {
            self.history.save(self.store.zones());
        }
    }

    // ------------------------------------------------------------------
    // Zone edits (history-snapshotted)
    // ------------------------------------------------------------------

    /// Applies a property patch and snapshots history on success.
    pub fn update_zone(&mut self, id: ZoneId, patch: &ZonePatch) -> bool {
        let updated = self.store.update_zone(id, patch);
        if updated {
            self.history.save(self.store.zones());
        }
        updated
    }

    /// Deletes a zone and snapshots history on success.
    pub fn delete_zone(&mut self, id: ZoneId) -> bool {
        let deleted = self.store.delete_zone(id);
        if deleted {
            self.history.save(self.store.zones());
        }
        deleted
    }

    /// Deletes the current selection, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.store.selected_id() {
            Some(id) => self.delete_zone(id),
            None => false,
        }
    }

    /// Duplicates a zone with an offset and snapshots history on success.
    pub fn duplicate_zone(&mut self, id: ZoneId) -> Option<ZoneId> {
        let new_id = self.store.duplicate_zone(id)?;
        self.history.save(self.store.zones());
        Some(new_id)
    }

    pub fn copy_zone(&mut self, id: ZoneId) -> bool {
        self.store.copy_zone(id)
    }

    /// Pastes the clipboard zone and snapshots history on success.
    pub fn paste_zone(&mut self) -> Option<ZoneId> {
        let new_id = self.store.paste_zone()?;
        self.history.save(self.store.zones());
        Some(new_id)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot. Selection is cleared by the
    /// wholesale replacement.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(zones) => {
                self.store.replace_zones(zones);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(zones) => {
                self.store.replace_zones(zones);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Calibration
    // ------------------------------------------------------------------

    /// Starts waiting for a map pick; the next pointer-down resolves it.
    pub fn begin_calibration_pick(&mut self, slot: PickSlot) {
        self.calibration.begin_pick(slot);
    }

    /// Records a user-entered world coordinate.
    pub fn set_calibration_world_point(&mut self, slot: PickSlot, x: f64, y: f64) {
        self.calibration.set_world_point(slot, Point::new(x, y));
    }

    pub fn set_calibration_invert_y(&mut self, invert: bool) {
        self.calibration.set_invert_y(invert);
    }

    /// Solves the calibration. On success the result is published for the
    /// export layer and the session resets; on failure the session is left
    /// intact so the user can adjust and retry.
    pub fn apply_calibration(&mut self) -> Result<MapCalibration, CalibrationError> {
        let calibration = self.calibration.solve()?;
        self.bus
            .publish(EditorEvent::Calibration(CalibrationEvent::Applied {
                scale: calibration.scale,
                origin_x: calibration.origin_x,
                origin_y: calibration.origin_y,
                invert_y: calibration.invert_y,
            }));
        self.calibration.reset();
        Ok(calibration)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Writes the zone collection to a project file.
    pub fn save_project(&self, path: impl AsRef<Path>) -> Result<()> {
        ProjectFile::new(self.store.zones().to_vec()).save_to_path(path)
    }

    /// Loads a project file, replacing the zone collection wholesale and
    /// snapshotting the loaded state.
    pub fn load_project(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let project = ProjectFile::load_from_path(path)?;
        self.store.replace_zones(project.zones);
        self.history.save(self.store.zones());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// The per-frame view of everything a renderer draws.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            zones: self.store.zones(),
            selected_id: self.store.selected_id(),
            hovered_id: self.store.hovered_id(),
            draft: self.tools.draft(),
            cursor: self.cursor_pos,
            zoom: self.viewport.zoom(),
            pan: (self.viewport.pan_x(), self.viewport.pan_y()),
            snap_enabled: self.viewport.snap_enabled(),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
