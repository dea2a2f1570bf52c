//! Two-point map calibration.
//!
//! Derives an affine map-pixel → world-unit transform (uniform scale plus
//! origin offset, no rotation) from two correspondences: two points picked
//! on the map and the matching world coordinates entered by the user. Each
//! correspondence yields an independent origin estimate; the two estimates
//! are averaged rather than trusting a single point.
//!
//! Maps commonly have their Y axis flipped relative to world coordinates;
//! the `invert_y` flag selects the sign convention.

use serde::{Deserialize, Serialize};

use zonekit_core::constants::{CALIBRATION_MIN_MAP_DISTANCE, CALIBRATION_MIN_WORLD_DISTANCE};
use zonekit_core::CalibrationError;

use crate::geometry::{distance, Point};

/// Which of the two reference points is being picked or entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickSlot {
    First,
    Second,
}

/// The solved map→world transform. The sole durable output of the
/// calibration workflow, consumed by the export layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCalibration {
    /// World units per map pixel, uniform in X and Y.
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub invert_y: bool,
}

impl MapCalibration {
    /// Applies the transform to a map-space point.
    pub fn map_to_world(&self, p: Point) -> Point {
        let x = self.origin_x + p.x * self.scale;
        let y = if self.invert_y {
            self.origin_y - p.y * self.scale
        } else {
            self.origin_y + p.y * self.scale
        };
        Point::new(x, y)
    }
}

/// Ephemeral calibration workflow state: two optional map picks, two
/// user-entered world coordinates, and the pending-pick marker. Exists only
/// while the calibration workflow is open.
///
/// A pending pick has no timeout — it is resolved by the next matching
/// pointer event or an explicit [`CalibrationSession::cancel_pick`].
#[derive(Debug, Clone, Default)]
pub struct CalibrationSession {
    map_p1: Option<Point>,
    map_p2: Option<Point>,
    world_p1: Option<Point>,
    world_p2: Option<Point>,
    picking: Option<PickSlot>,
    invert_y: bool,
}

impl CalibrationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts waiting for a map pick into the given slot.
    pub fn begin_pick(&mut self, slot: PickSlot) {
        self.picking = Some(slot);
    }

    /// Whether a pick is pending.
    pub fn is_picking(&self) -> bool {
        self.picking.is_some()
    }

    /// The slot awaiting a pick, if any.
    pub fn pending_pick(&self) -> Option<PickSlot> {
        self.picking
    }

    /// Resolves the pending pick with a map-space point. Returns false when
    /// no pick was pending.
    pub fn apply_pick(&mut self, point: Point) -> bool {
        match self.picking.take() {
            Some(PickSlot::First) => {
                self.map_p1 = Some(point);
                true
            }
            Some(PickSlot::Second) => {
                self.map_p2 = Some(point);
                true
            }
            None => false,
        }
    }

    /// Abandons a pending pick without recording a point.
    pub fn cancel_pick(&mut self) {
        self.picking = None;
    }

    pub fn map_point(&self, slot: PickSlot) -> Option<Point> {
        match slot {
            PickSlot::First => self.map_p1,
            PickSlot::Second => self.map_p2,
        }
    }

    /// Records a user-entered world coordinate.
    pub fn set_world_point(&mut self, slot: PickSlot, point: Point) {
        match slot {
            PickSlot::First => self.world_p1 = Some(point),
            PickSlot::Second => self.world_p2 = Some(point),
        }
    }

    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    pub fn set_invert_y(&mut self, invert: bool) {
        self.invert_y = invert;
    }

    /// Whether both correspondences are complete.
    pub fn is_ready(&self) -> bool {
        self.map_p1.is_some()
            && self.map_p2.is_some()
            && self.world_p1.is_some()
            && self.world_p2.is_some()
    }

    /// Clears all picks and entries.
    pub fn reset(&mut self) {
        *self = Self {
            invert_y: self.invert_y,
            ..Self::default()
        };
    }

    /// Solves the transform from the two correspondences.
    ///
    /// Rejects correspondences too close to yield a stable scale; the error
    /// carries a user-facing message and the session is left intact so the
    /// user can adjust and retry.
    pub fn solve(&self) -> Result<MapCalibration, CalibrationError> {
        let (map_p1, map_p2) = match (self.map_p1, self.map_p2) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(CalibrationError::MissingMapPoint),
        };
        let (world_p1, world_p2) = match (self.world_p1, self.world_p2) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(CalibrationError::MissingWorldPoint),
        };

        let dist_map = distance(map_p1, map_p2);
        if dist_map < CALIBRATION_MIN_MAP_DISTANCE {
            return Err(CalibrationError::MapPointsTooClose { distance: dist_map });
        }

        let dist_world = distance(world_p1, world_p2);
        if dist_world < CALIBRATION_MIN_WORLD_DISTANCE {
            return Err(CalibrationError::WorldPointsTooClose {
                distance: dist_world,
            });
        }

        let scale = dist_world / dist_map;

        let origin_x1 = world_p1.x - map_p1.x * scale;
        let origin_x2 = world_p2.x - map_p2.x * scale;

        let (origin_y1, origin_y2) = if self.invert_y {
            (
                world_p1.y + map_p1.y * scale,
                world_p2.y + map_p2.y * scale,
            )
        } else {
            (
                world_p1.y - map_p1.y * scale,
                world_p2.y - map_p2.y * scale,
            )
        };

        Ok(MapCalibration {
            scale,
            origin_x: (origin_x1 + origin_x2) / 2.0,
            origin_y: (origin_y1 + origin_y2) / 2.0,
            invert_y: self.invert_y,
        })
    }
}
