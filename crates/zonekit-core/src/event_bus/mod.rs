//! # Event Bus Module
//!
//! Typed publish/subscribe channel between the editor core and its
//! consumers (renderer, zone list panel, history UI, export layer).
//!
//! Publishers emit typed events without knowing their subscribers;
//! subscribers register a filter and a handler. Dispatch is synchronous and
//! runs on the caller's thread — the editor core is single-threaded and
//! event-driven, so handlers complete before the next input event is
//! processed.
//!
//! ```rust
//! use zonekit_core::event_bus::{EventBus, EditorEvent, EventCategory, EventFilter, ZoneEvent};
//! use zonekit_core::ZoneId;
//!
//! let bus = EventBus::new();
//! let sub = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Zone]),
//!     |event| {
//!         if let EditorEvent::Zone(z) = event {
//!             println!("zone event: {:?}", z);
//!         }
//!     },
//! );
//!
//! bus.publish(EditorEvent::Zone(ZoneEvent::Created { id: ZoneId::new() }));
//! bus.unsubscribe(sub);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
