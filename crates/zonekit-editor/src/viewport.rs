//! Viewport and coordinate transformation for the editor canvas.
//!
//! Handles conversion between screen coordinates (viewport pixels, origin
//! top-left of the visible canvas) and map coordinates (raster-image pixels,
//! origin top-left of the loaded map). Both axes point the same way in both
//! spaces, so the transform is a uniform scale plus a pan offset with no
//! axis flip.
//!
//! ```text
//! map_x = (screen_x - pan_x) / zoom
//! map_y = (screen_y - pan_y) / zoom
//! ```

use std::fmt;

use zonekit_core::constants::{FIT_VIEW_MARGIN, MAX_ZOOM, MIN_ZOOM, SNAP_GRID_SIZE};

use crate::geometry::Point;

/// The viewport transformation state: zoom, pan, and grid snapping.
///
/// Owns the view state exclusively; pan/zoom/snap mutations go through this
/// API only.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    snap_enabled: bool,
    /// Snap grid pitch in map units, independent of zoom.
    grid_size: f64,
}

impl Viewport {
    /// Creates a viewport at 100% zoom with no pan offset.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            snap_enabled: false,
            grid_size: SNAP_GRID_SIZE,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level directly, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms by a relative delta (`new = zoom * (1 + delta)`), clamped.
    ///
    /// When an anchor screen position is given, the pan offset is adjusted
    /// so the map point under the anchor stays under it — this is what keeps
    /// wheel zoom centered on the cursor.
    pub fn zoom_by(&mut self, delta: f64, anchor: Option<(f64, f64)>) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * (1.0 + delta)).clamp(MIN_ZOOM, MAX_ZOOM);

        if let Some((ax, ay)) = anchor {
            let ratio = self.zoom / old_zoom;
            self.pan_x = ax - (ax - self.pan_x) * ratio;
            self.pan_y = ay - (ay - self.pan_y) * ratio;
        }
    }

    /// Gets the pan offset (X coordinate), screen px.
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate), screen px.
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in screen px.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts screen coordinates to map coordinates.
    pub fn screen_to_map(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts map coordinates to screen coordinates.
    pub fn map_to_screen(&self, map_x: f64, map_y: f64) -> (f64, f64) {
        (
            map_x * self.zoom + self.pan_x,
            map_y * self.zoom + self.pan_y,
        )
    }

    /// Fits the map into the viewport at 90% of the available space,
    /// centered. No-op when no map is loaded (zero dimensions).
    pub fn fit_to_view(
        &mut self,
        map_width: f64,
        map_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) {
        if map_width <= 0.0 || map_height <= 0.0 {
            return;
        }

        let scale_x = viewport_width / map_width;
        let scale_y = viewport_height / map_height;
        self.zoom = (scale_x.min(scale_y) * FIT_VIEW_MARGIN).clamp(MIN_ZOOM, MAX_ZOOM);

        self.pan_x = (viewport_width - map_width * self.zoom) / 2.0;
        self.pan_y = (viewport_height - map_height * self.zoom) / 2.0;
    }

    /// Whether grid snapping is enabled.
    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    /// Toggles grid snapping; returns the new state.
    pub fn toggle_snap(&mut self) -> bool {
        self.snap_enabled = !self.snap_enabled;
        self.snap_enabled
    }

    /// Sets grid snapping explicitly.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    /// Snap grid pitch, map units.
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Sets the snap grid pitch, map units.
    pub fn set_grid_size(&mut self, size: f64) {
        if size > 0.0 {
            self.grid_size = size;
        }
    }

    /// Snaps a map-space point to the nearest grid intersection when
    /// snapping is enabled; identity otherwise.
    pub fn snap_to_grid(&self, point: Point) -> Point {
        if !self.snap_enabled {
            return point;
        }

        Point::new(
            (point.x / self.grid_size).round() * self.grid_size,
            (point.y / self.grid_size).round() * self.grid_size,
        )
    }

    /// Resets to 100% zoom with no pan offset.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
