//! Error handling for ZoneKit.
//!
//! Recoverable domain failures carry user-presentable messages. Operations
//! that silently no-op on unknown zone ids do not appear here; they report
//! through return values instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised when applying a two-point map calibration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// One or both reference points have not been picked on the map.
    #[error("Both reference points must be picked on the map")]
    MissingMapPoint,

    /// One or both world coordinates have not been entered.
    #[error("Both world coordinates must be entered")]
    MissingWorldPoint,

    /// The picked map points are too close to derive a stable scale.
    #[error("Map points are too close together to calibrate accurately ({distance:.2} px apart)")]
    MapPointsTooClose { distance: f64 },

    /// The entered world coordinates are too close to derive a stable scale.
    #[error(
        "World coordinates are too close together to calibrate accurately ({distance:.2} units apart)"
    )]
    WorldPointsTooClose { distance: f64 },
}

/// Errors raised while reading or writing project files.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The file is not valid JSON or lacks the expected top-level structure.
    #[error("Invalid project file: {reason}")]
    InvalidFormat { reason: String },

    /// Underlying filesystem failure.
    #[error("Project I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
