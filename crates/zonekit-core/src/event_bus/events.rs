//! Event type definitions for the event bus.
//!
//! Events are organized by category and are cloneable and serializable for
//! logging and replay.

use serde::{Deserialize, Serialize};

use crate::types::ZoneId;

/// Root event enum for everything the editor core publishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Zone lifecycle: creation, mutation, removal.
    Zone(ZoneEvent),
    /// Selection and hover changes.
    Selection(SelectionEvent),
    /// Viewport state changes.
    View(ViewEvent),
    /// Undo/redo availability changes.
    History(HistoryEvent),
    /// Calibration results.
    Calibration(CalibrationEvent),
}

impl EditorEvent {
    /// Get the category of this event.
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::Zone(_) => EventCategory::Zone,
            EditorEvent::Selection(_) => EventCategory::Selection,
            EditorEvent::View(_) => EventCategory::View,
            EditorEvent::History(_) => EventCategory::History,
            EditorEvent::Calibration(_) => EventCategory::Calibration,
        }
    }

    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            EditorEvent::Zone(e) => e.description(),
            EditorEvent::Selection(e) => e.description(),
            EditorEvent::View(e) => e.description(),
            EditorEvent::History(e) => e.description(),
            EditorEvent::Calibration(e) => e.description(),
        }
    }
}

/// Event category for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Zone lifecycle events.
    Zone,
    /// Selection and hover events.
    Selection,
    /// Viewport events.
    View,
    /// Undo/redo events.
    History,
    /// Calibration events.
    Calibration,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Zone => write!(f, "zone"),
            EventCategory::Selection => write!(f, "selection"),
            EventCategory::View => write!(f, "view"),
            EventCategory::History => write!(f, "history"),
            EventCategory::Calibration => write!(f, "calibration"),
        }
    }
}

/// Zone lifecycle events. Payloads carry ids only; consumers pull the zone
/// body from the store, which is the single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ZoneEvent {
    /// A zone was created and appended to the collection.
    Created { id: ZoneId },
    /// A zone's fields were updated (property edit or drag completion).
    Updated { id: ZoneId },
    /// A zone was removed from the collection.
    Deleted { id: ZoneId },
}

impl ZoneEvent {
    pub fn description(&self) -> String {
        match self {
            ZoneEvent::Created { id } => format!("zone created: {id}"),
            ZoneEvent::Updated { id } => format!("zone updated: {id}"),
            ZoneEvent::Deleted { id } => format!("zone deleted: {id}"),
        }
    }
}

/// Selection and hover events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The primary selection changed (or was re-asserted; this event fires
    /// even when the same id is selected again or selection is cleared).
    SelectionChanged { id: Option<ZoneId> },
    /// The hovered zone changed. Fires only on actual change.
    HoverChanged { id: Option<ZoneId> },
}

impl SelectionEvent {
    pub fn description(&self) -> String {
        match self {
            SelectionEvent::SelectionChanged { id: Some(id) } => format!("selected {id}"),
            SelectionEvent::SelectionChanged { id: None } => "selection cleared".to_string(),
            SelectionEvent::HoverChanged { id: Some(id) } => format!("hovering {id}"),
            SelectionEvent::HoverChanged { id: None } => "hover cleared".to_string(),
        }
    }
}

/// Viewport events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Zoom level changed.
    ZoomChanged { zoom: f64 },
    /// Grid snapping was toggled.
    SnapToggled { enabled: bool },
}

impl ViewEvent {
    pub fn description(&self) -> String {
        match self {
            ViewEvent::ZoomChanged { zoom } => format!("zoom {:.0}%", zoom * 100.0),
            ViewEvent::SnapToggled { enabled } => format!("snap {}", if *enabled { "on" } else { "off" }),
        }
    }
}

/// Undo/redo availability events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// The history stack changed.
    Changed { can_undo: bool, can_redo: bool },
}

impl HistoryEvent {
    pub fn description(&self) -> String {
        match self {
            HistoryEvent::Changed { can_undo, can_redo } => {
                format!("history changed (undo: {can_undo}, redo: {can_redo})")
            }
        }
    }
}

/// Calibration events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CalibrationEvent {
    /// A calibration was solved and applied.
    Applied {
        scale: f64,
        origin_x: f64,
        origin_y: f64,
        invert_y: bool,
    },
}

impl CalibrationEvent {
    pub fn description(&self) -> String {
        match self {
            CalibrationEvent::Applied { scale, .. } => {
                format!("calibration applied (scale {scale:.4})")
            }
        }
    }
}
