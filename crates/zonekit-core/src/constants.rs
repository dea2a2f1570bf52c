//! Centralized configuration values for the editor core.
//!
//! Thresholds come in two unit families. Values documented "screen px" are
//! clickability targets and must be divided by the current zoom before
//! comparison in map space; values documented "map units" are geometric
//! validity limits and are zoom-independent.

/// Minimum zoom level.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level.
pub const MAX_ZOOM: f64 = 5.0;

/// Fraction of the viewport used when fitting the map (leaves a margin).
pub const FIT_VIEW_MARGIN: f64 = 0.9;

/// Snap grid size, map units.
pub const SNAP_GRID_SIZE: f64 = 10.0;

/// Minimum width/height/radius/length for a shape commit, map units.
/// Prevents accidental clicks from creating zones.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Minimum rectangle edge length enforced during handle resize, map units.
pub const MIN_RECT_EDGE: f64 = 5.0;

/// Resize handle hit box half-extent, screen px.
pub const HANDLE_HIT_SIZE: f64 = 12.0;

/// Line hit detection threshold, screen px.
pub const LINE_HIT_THRESHOLD: f64 = 10.0;

/// Pen tool close-loop detection radius, screen px.
pub const CLOSE_LOOP_THRESHOLD: f64 = 10.0;

/// Minimum spacing between recorded freehand points, screen px.
/// Jitter filter, not a frame-rate throttle.
pub const FREEHAND_MIN_DISTANCE: f64 = 3.0;

/// Ramer-Douglas-Peucker tolerance applied to freehand strokes, map units.
pub const PATH_SIMPLIFICATION_TOLERANCE: f64 = 2.0;

/// Consecutive points closer than this are merged when a pen shape is
/// finished, map units. Absorbs double-click artifacts.
pub const PEN_DEDUP_EPSILON: f64 = 0.001;

/// Default zone fill opacity (0-1).
pub const DEFAULT_ZONE_OPACITY: f64 = 0.4;

/// Default label background opacity (0-1).
pub const DEFAULT_LABEL_BG_OPACITY: f64 = 0.7;

/// Label font sizes by tier, screen px.
pub const LABEL_SIZE_SMALL: f64 = 10.0;
pub const LABEL_SIZE_MEDIUM: f64 = 14.0;
pub const LABEL_SIZE_LARGE: f64 = 18.0;

/// Geometry offset applied to duplicated zones, map units.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Geometry offset applied to pasted zones, map units.
pub const PASTE_OFFSET: f64 = 30.0;

/// Maximum number of undo snapshots retained.
pub const MAX_HISTORY_SIZE: usize = 50;

/// Calibration picks closer than this are rejected, map px.
pub const CALIBRATION_MIN_MAP_DISTANCE: f64 = 1.0;

/// Calibration world coordinates closer than this are rejected, world units.
pub const CALIBRATION_MIN_WORLD_DISTANCE: f64 = 0.1;
