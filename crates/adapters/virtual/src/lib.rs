//! # smartbuilding-adapter-virtual
//!
//! Virtual/demo collaborators for the building controller, used for testing
//! and demonstration.
//!
//! ## Provided collaborators
//!
//! | Collaborator | Port | Behaviour |
//! |--------------|------|-----------|
//! | [`VirtualDoors`] | `DoorControl` | Bank of doors, locked at start; faulted doors ignore commands |
//! | [`VirtualLights`] | `LightControl` | Bank of lights, off at start; faulted lights ignore commands |
//! | [`VirtualFireAlarm`] | `FireAlarmSensor` | Detector network reporting health only |
//! | [`TracingAlertTransport`] | `AlertTransport` | Logs alarms and engineer requests; can be taken offline |
//! | [`TracingNotifier`] | `NotificationTransport` | Logs emails and keeps an outbox |
//!
//! ## Dependency rule
//!
//! Depends on `smartbuilding-app` (port traits) and `smartbuilding-domain` only.

mod config;
mod devices;
mod transport;

use std::sync::Arc;

use smartbuilding_app::services::building_controller::BuildingControllerBuilder;

pub use config::VirtualConfig;
pub use devices::{DoorState, VirtualDoors, VirtualFireAlarm, VirtualLights};
pub use transport::{AlertRecord, Email, TracingAlertTransport, TracingNotifier};

/// A complete simulated building.
///
/// Handles are shared with the controller, so faults can be injected and
/// deliveries inspected while the controller is running.
pub struct VirtualBuilding {
    pub doors: Arc<VirtualDoors>,
    pub lights: Arc<VirtualLights>,
    pub fire_alarm: Arc<VirtualFireAlarm>,
    pub alerts: Arc<TracingAlertTransport>,
    pub notifier: Arc<TracingNotifier>,
}

impl VirtualBuilding {
    #[must_use]
    pub fn from_config(config: &VirtualConfig) -> Self {
        Self {
            doors: Arc::new(VirtualDoors::new(config.doors).with_faulted(&config.faulty_doors)),
            lights: Arc::new(VirtualLights::new(config.lights).with_faulted(&config.faulty_lights)),
            fire_alarm: Arc::new(
                VirtualFireAlarm::new(config.detectors).with_faulted(&config.faulty_detectors),
            ),
            alerts: Arc::new(TracingAlertTransport::new(config.alerts_online)),
            notifier: Arc::new(TracingNotifier::default()),
        }
    }

    /// Wire every collaborator of this building into `builder`.
    #[must_use]
    pub fn attach(&self, builder: BuildingControllerBuilder) -> BuildingControllerBuilder {
        builder
            .doors(Arc::clone(&self.doors))
            .lights(Arc::clone(&self.lights))
            .fire_alarm(Arc::clone(&self.fire_alarm))
            .alerts(Arc::clone(&self.alerts))
            .notifications(Arc::clone(&self.notifier))
    }
}

impl Default for VirtualBuilding {
    fn default() -> Self {
        Self::from_config(&VirtualConfig::default())
    }
}
