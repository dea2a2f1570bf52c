//! The zone collection: CRUD, selection/hover state, and hit-test dispatch.
//!
//! Zones live in an ordered `Vec` — insertion order is z-order, later zones
//! draw on top and win hit-test ties. All operations on unknown ids are
//! silent no-ops that raise no event; callers check return values.

use tracing::debug;

use zonekit_core::constants::{DUPLICATE_OFFSET, PASTE_OFFSET};
use zonekit_core::event_bus::{EditorEvent, SelectionEvent, ZoneEvent};
use zonekit_core::{EventBus, ZoneId};

use crate::geometry::Point;
use crate::model::{Zone, ZonePatch, ZoneShape};

/// Ordered zone collection with single-select and hover state.
pub struct ZoneStore {
    zones: Vec<Zone>,
    selected_id: Option<ZoneId>,
    hovered_id: Option<ZoneId>,
    clipboard: Option<Zone>,
    bus: EventBus,
}

impl ZoneStore {
    /// Creates an empty store publishing on the given bus.
    pub fn new(bus: EventBus) -> Self {
        Self {
            zones: Vec::new(),
            selected_id: None,
            hovered_id: None,
            clipboard: None,
            bus,
        }
    }

    /// The ordered zone list (z-order, last on top).
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Mutable access for in-place geometry edits during a drag gesture.
    /// The active tool is the exclusive writer while a gesture runs.
    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn selected_id(&self) -> Option<ZoneId> {
        self.selected_id
    }

    pub fn selected_zone(&self) -> Option<&Zone> {
        self.selected_id.and_then(|id| self.get(id))
    }

    pub fn hovered_id(&self) -> Option<ZoneId> {
        self.hovered_id
    }

    /// Creates a zone from committed tool geometry, appends it on top,
    /// selects it, and raises a creation event.
    pub fn create_zone(&mut self, shape: ZoneShape) -> ZoneId {
        let zone = Zone::new(format!("Zone {}", self.zones.len() + 1), shape);
        let id = zone.id;
        debug!(zone = %id, kind = ?zone.shape_kind(), "zone created");
        self.zones.push(zone);
        self.bus.publish(EditorEvent::Zone(ZoneEvent::Created { id }));
        self.select_zone(Some(id));
        id
    }

    /// Merges a patch into an existing zone. When the patch sets the zone
    /// type, the color is recomputed from the type's default afterwards, so
    /// an explicit color in the same patch loses to the type-driven color.
    ///
    /// Returns false (no event) when the id is unknown.
    pub fn update_zone(&mut self, id: ZoneId, patch: &ZonePatch) -> bool {
        let Some(zone) = self.zones.iter_mut().find(|z| z.id == id) else {
            return false;
        };

        zone.apply_patch(patch);
        if let Some(zone_type) = patch.zone_type {
            zone.color = zone_type.default_color().to_string();
        }

        self.bus.publish(EditorEvent::Zone(ZoneEvent::Updated { id }));
        true
    }

    /// Raises an update event for a zone mutated in place (drag completion).
    pub fn notify_updated(&mut self, id: ZoneId) {
        if self.get(id).is_some() {
            self.bus.publish(EditorEvent::Zone(ZoneEvent::Updated { id }));
        }
    }

    /// Removes a zone. Clears the selection if it pointed at the removed
    /// zone. Returns false (no event) when the id is unknown.
    pub fn delete_zone(&mut self, id: ZoneId) -> bool {
        let Some(index) = self.zones.iter().position(|z| z.id == id) else {
            return false;
        };

        self.zones.remove(index);
        if self.selected_id == Some(id) {
            self.select_zone(None);
        }
        if self.hovered_id == Some(id) {
            self.set_hovered(None);
        }
        self.bus.publish(EditorEvent::Zone(ZoneEvent::Deleted { id }));
        true
    }

    /// Sets the primary selection. Always raises a selection event — even
    /// when re-selecting the same id or clearing to `None`. Selecting an
    /// unknown id is a silent no-op.
    pub fn select_zone(&mut self, id: Option<ZoneId>) -> bool {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return false;
            }
        }
        self.selected_id = id;
        self.bus
            .publish(EditorEvent::Selection(SelectionEvent::SelectionChanged { id }));
        true
    }

    /// Updates the hovered zone; raises an event only on actual change.
    /// Returns whether the hover changed.
    pub fn set_hovered(&mut self, id: Option<ZoneId>) -> bool {
        if self.hovered_id == id {
            return false;
        }
        self.hovered_id = id;
        self.bus
            .publish(EditorEvent::Selection(SelectionEvent::HoverChanged { id }));
        true
    }

    /// Returns the top-most visible zone whose shape-specific hit test
    /// passes. Scans in reverse insertion order so later-drawn zones win.
    /// `zoom` converts pixel-expressed tolerances to map units.
    pub fn find_zone_at_point(&self, point: Point, zoom: f64) -> Option<&Zone> {
        self.zones
            .iter()
            .rev()
            .find(|zone| zone.visible && zone.shape.hit_test(point, zoom))
    }

    /// Replaces the entire collection atomically (history restore, project
    /// load) and clears selection and hover.
    pub fn replace_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        self.select_zone(None);
        self.set_hovered(None);
    }

    /// Clones a zone with a fresh id, a `" (Copy)"` name suffix, and a
    /// small geometry offset, then selects the clone.
    pub fn duplicate_zone(&mut self, id: ZoneId) -> Option<ZoneId> {
        let mut clone = self.get(id)?.clone();
        clone.id = ZoneId::new();
        clone.name = format!("{} (Copy)", clone.name);
        clone.shape.translate(DUPLICATE_OFFSET, DUPLICATE_OFFSET);

        let new_id = clone.id;
        self.zones.push(clone);
        self.bus
            .publish(EditorEvent::Zone(ZoneEvent::Created { id: new_id }));
        self.select_zone(Some(new_id));
        Some(new_id)
    }

    /// Copies a zone into the internal clipboard. No-op on unknown id.
    pub fn copy_zone(&mut self, id: ZoneId) -> bool {
        match self.get(id).cloned() {
            Some(zone) => {
                self.clipboard = Some(zone);
                true
            }
            None => false,
        }
    }

    /// Pastes the clipboard zone with a fresh id, a `" (Pasted)"` name
    /// suffix, and a geometry offset. No-op on empty clipboard.
    pub fn paste_zone(&mut self) -> Option<ZoneId> {
        let mut clone = self.clipboard.clone()?;
        clone.id = ZoneId::new();
        clone.name = format!("{} (Pasted)", clone.name);
        clone.shape.translate(PASTE_OFFSET, PASTE_OFFSET);

        let new_id = clone.id;
        self.zones.push(clone);
        self.bus
            .publish(EditorEvent::Zone(ZoneEvent::Created { id: new_id }));
        self.select_zone(Some(new_id));
        Some(new_id)
    }
}

impl std::fmt::Debug for ZoneStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneStore")
            .field("zones", &self.zones.len())
            .field("selected", &self.selected_id)
            .field("hovered", &self.hovered_id)
            .finish()
    }
}
