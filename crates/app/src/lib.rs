//! # smartbuilding-app
//!
//! Application layer — the building controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DoorControl` — open/lock doors, report door status
//!   - `LightControl` — switch lights, report light status
//!   - `FireAlarmSensor` — report fire-alarm status
//!   - `AlertTransport` — remote logging of alarms and engineer requests
//!   - `NotificationTransport` — email delivery
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `BuildingController` — validates and executes state transitions,
//!     aggregates status and raises engineer alerts
//!
//! ## Dependency rule
//! Depends on `smartbuilding-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
