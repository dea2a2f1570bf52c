//! # ZoneKit Core
//!
//! Shared foundation for the ZoneKit map-overlay zone editor:
//!
//! - **Constants**: interaction thresholds and presentation defaults
//! - **Errors**: domain error taxonomy (`thiserror`)
//! - **Types**: durable identifiers
//! - **Event bus**: typed publish/subscribe for decoupled component wiring
//!
//! The editing logic itself (geometry, viewport, tools, zone store) lives in
//! the `zonekit-editor` crate; this crate holds what both the editor and its
//! consumers (renderer, persistence, export) need to agree on.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{CalibrationError, ProjectError};
pub use event_bus::{
    EditorEvent, EventBus, EventCategory, EventFilter, SubscriptionId,
};
pub use types::ZoneId;
