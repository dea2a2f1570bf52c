//! Project file serialization.
//!
//! Projects are JSON: a version string, a creation timestamp, and the zone
//! collection verbatim. Loading is tolerant — unknown fields are ignored,
//! absent presentation fields fall back to defaults, and a record whose
//! shape payload is malformed is skipped with a warning rather than failing
//! the load, so one corrupt zone never takes the project down with it.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use zonekit_core::ProjectError;

use crate::model::Zone;

/// Project file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete project file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFile {
    pub version: String,
    pub created: DateTime<Utc>,
    pub zones: Vec<Zone>,
}

/// Raw parse target: zones stay as JSON values so one malformed record can
/// be skipped without rejecting the file.
#[derive(Debug, Deserialize)]
struct RawProjectFile {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    created: Option<DateTime<Utc>>,
    zones: Vec<serde_json::Value>,
}

impl ProjectFile {
    /// Wraps the current zone collection with fresh metadata.
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            created: Utc::now(),
            zones,
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project")
    }

    /// Parses a project from JSON, skipping malformed zone records.
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let raw: RawProjectFile =
            serde_json::from_str(json).map_err(|e| ProjectError::InvalidFormat {
                reason: e.to_string(),
            })?;

        let mut zones = Vec::with_capacity(raw.zones.len());
        for (index, value) in raw.zones.into_iter().enumerate() {
            match serde_json::from_value::<Zone>(value) {
                Ok(zone) if zone.shape.is_valid() => zones.push(zone),
                Ok(zone) => {
                    warn!(zone = %zone.id, index, "skipping zone with degenerate geometry");
                }
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed zone record");
                }
            }
        }

        Ok(Self {
            version: raw.version.unwrap_or_else(|| FILE_FORMAT_VERSION.to_string()),
            created: raw.created.unwrap_or_else(Utc::now),
            zones,
        })
    }

    /// Writes the project to a file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write project to {}", path.display()))
    }

    /// Reads a project from a file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project from {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse project file {}", path.display()))
    }
}
