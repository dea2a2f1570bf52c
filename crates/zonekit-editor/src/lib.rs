//! # ZoneKit Editor
//!
//! Geometric editing core for a map-overlay zone editor: zones (circles,
//! rectangles, lines, polygons) drawn over a raster map image, manipulated
//! through pointer-driven tools, and calibrated against an external world
//! coordinate system.
//!
//! ## Core Components
//!
//! ### Coordinates
//! - **Geometry**: distance, containment tests, bounds, path simplification
//! - **Viewport**: screen↔map transform, zoom/pan state, grid snapping
//! - **Calibration**: two-point map→world affine transform
//!
//! ### Editing
//! - **Model**: the `Zone` record and its closed shape union
//! - **Zone store**: ordered collection, CRUD, selection/hover, hit-testing
//! - **Tools**: per-shape drawing state machines plus select/manipulate
//! - **History**: bounded snapshot stack for undo/redo
//! - **Serialization**: project-file save/load
//!
//! ## Architecture
//!
//! ```text
//! EditorState (composition root)
//!   ├── Viewport (screen↔map, zoom/pan/snap)
//!   ├── ZoneStore (zones, selection, hover)
//!   ├── ToolSet (rectangle/circle/line/pen/freehand/select)
//!   ├── UndoRedoManager (snapshots)
//!   ├── CalibrationSession (two-point picks)
//!   └── EventBus (typed observer wiring, from zonekit-core)
//! ```
//!
//! Input arrives as screen pixel positions, is converted to map space by the
//! viewport, and is dispatched to the active tool; committed geometry lands
//! in the zone store, which publishes typed events. A renderer pulls the
//! ordered zone list and the active tool's draft each frame.
//!
//! ## Usage
//!
//! ```rust
//! use zonekit_editor::{EditorState, ToolKind};
//!
//! let mut editor = EditorState::new();
//! editor.load_map(1024.0, 1024.0);
//! editor.set_tool(ToolKind::Rectangle);
//!
//! // A drag gesture in screen coordinates:
//! editor.pointer_down(100.0, 100.0);
//! editor.pointer_move(180.0, 160.0);
//! editor.pointer_up(180.0, 160.0);
//!
//! assert_eq!(editor.store().zones().len(), 1);
//! ```

pub mod calibration;
pub mod editor_state;
pub mod geometry;
pub mod history;
pub mod model;
pub mod serialization;
pub mod tools;
pub mod viewport;
pub mod zone_store;

pub use calibration::{CalibrationSession, MapCalibration, PickSlot};
pub use editor_state::{CursorStyle, EditorState, RenderState};
pub use geometry::{distance, polygon_bounds, simplify_path, Bounds, Point};
pub use history::UndoRedoManager;
pub use model::{
    FillPattern, LabelSettings, LabelSize, LineStyle, ShapeKind, Zone, ZoneCircle, ZoneLine,
    ZonePatch, ZonePolygon, ZoneRect, ZoneShape, ZoneType,
};
pub use serialization::ProjectFile;
pub use tools::{ToolDraft, ToolKind, ToolSet};
pub use viewport::Viewport;
pub use zone_store::ZoneStore;

pub use zonekit_core::{EditorEvent, EventBus, EventCategory, EventFilter, ZoneId};
