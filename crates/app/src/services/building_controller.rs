//! Building controller — the operating-state machine of a single building.
//!
//! Transitions are evaluated in a fixed priority order; the first matching
//! rule decides the outcome:
//!
//! 1. requesting the current state is a no-op
//! 2. `out of hours` during an emergency restores the last normal state
//! 3. `fire alarm` with lights, doors and alert transport available turns
//!    every light on, opens every door and logs the alarm (falling back to an
//!    email to operations if logging fails)
//! 4. `close` with doors and lights available locks the doors and switches
//!    the lights off, leaving the recorded state untouched
//! 5. `open` opens every door (if doors are wired) and fails when they refuse
//! 6. normal → normal is always allowed
//! 7. any emergency state may be entered directly
//! 8. everything else is rejected
//!
//! A rejected transition is reported as `false`, never as an error.

use smartbuilding_domain::error::{ControllerError, ValidationError};
use smartbuilding_domain::fault::{FaultSummary, detect_faults};
use smartbuilding_domain::id::BuildingId;
use smartbuilding_domain::record::ControllerRecord;
use smartbuilding_domain::state::OperatingState;

use crate::ports::{
    AlertTransport, DoorControl, FireAlarmSensor, LightControl, NotificationTransport,
};

/// Recipient of the fallback email sent when an alarm cannot be logged.
pub const OPERATIONS_ADDRESS: &str = "smartbuilding@uclan.ac.uk";

/// Subject of the fallback email sent when an alarm cannot be logged.
pub const ALARM_LOG_FAILURE_SUBJECT: &str = "failed to log alarm";

/// Request that secures the building without recording a new state.
const CLOSE_REQUEST: &str = "close";

/// Coordinates the operating state of one building with its collaborators.
///
/// Every collaborator is optional; an absent one is treated as unavailable
/// and the rules that need it are skipped.
pub struct BuildingController {
    record: ControllerRecord,
    doors: Option<Box<dyn DoorControl>>,
    lights: Option<Box<dyn LightControl>>,
    fire_alarm: Option<Box<dyn FireAlarmSensor>>,
    alerts: Option<Box<dyn AlertTransport>>,
    notifications: Option<Box<dyn NotificationTransport>>,
}

impl BuildingController {
    /// Create a builder for constructing a [`BuildingController`].
    #[must_use]
    pub fn builder() -> BuildingControllerBuilder {
        BuildingControllerBuilder::default()
    }

    /// Controller with no collaborators, starting `out of hours`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentity`] when `id` is absent.
    pub fn new(id: Option<&str>) -> Result<Self, ControllerError> {
        let id = BuildingId::parse(id)?;
        Self::builder().id(id).build()
    }

    /// Controller with no collaborators, starting in `start_state`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` when `id` is absent, or `InvalidStartState`
    /// when `start_state` is absent or not a normal state.
    pub fn with_start_state(
        id: Option<&str>,
        start_state: Option<&str>,
    ) -> Result<Self, ControllerError> {
        let id = BuildingId::parse(id)?;
        let start = OperatingState::parse_start(start_state)?;
        Self::builder().id(id).start_state(start).build()
    }

    /// The normalised building identifier.
    #[must_use]
    pub fn identity(&self) -> &BuildingId {
        self.record.identity()
    }

    /// Replace the building identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` when `id` is absent; the identifier is
    /// left unchanged in that case.
    pub fn set_identity(&mut self, id: Option<&str>) -> Result<(), ControllerError> {
        let id = BuildingId::parse(id)?;
        self.record.set_identity(id);
        Ok(())
    }

    /// The state the building is currently in.
    #[must_use]
    pub fn current_state(&self) -> OperatingState {
        self.record.current_state()
    }

    /// Read-only view of the whole record, e.g. for diagnostics snapshots.
    #[must_use]
    pub fn record(&self) -> &ControllerRecord {
        &self.record
    }

    /// Request a transition to `requested` (case-insensitive).
    ///
    /// Returns `true` when the request was accepted. A rejected request
    /// leaves the record untouched.
    #[tracing::instrument(
        skip(self),
        fields(building = %self.record.identity(), from = %self.record.current_state())
    )]
    pub fn set_current_state(&mut self, requested: &str) -> bool {
        let requested = requested.to_lowercase();
        let target = requested.parse::<OperatingState>().ok();
        let current = self.record.current_state();

        if target == Some(current) {
            return true;
        }

        if target == Some(OperatingState::OutOfHours) && current.is_emergency() {
            self.record.recover();
            tracing::info!(restored = %self.record.current_state(), "emergency ended");
            return true;
        }

        if target == Some(OperatingState::FireAlarm) && self.raise_fire_alarm() {
            return true;
        }

        if requested == CLOSE_REQUEST && self.secure_building() {
            return true;
        }

        if target == Some(OperatingState::Open) {
            return self.open_building();
        }

        let Some(state) = target else {
            tracing::debug!(%requested, "rejected unknown state");
            return false;
        };

        if state.is_emergency() || current.is_normal() {
            self.record.enter(state);
            tracing::info!(to = %state, "state changed");
            true
        } else {
            tracing::debug!(to = %state, "rejected transition out of emergency");
            false
        }
    }

    /// Concatenated light, door and fire-alarm status.
    ///
    /// When any status carries a fault marker the faulty subsystems are
    /// reported through the alert transport before returning. A failure of
    /// that report is logged and does not affect the returned string.
    #[tracing::instrument(skip(self), fields(building = %self.record.identity()))]
    pub fn status_report(&self) -> String {
        let light_status = self
            .lights
            .as_deref()
            .map(LightControl::status)
            .unwrap_or_default();
        let door_status = self
            .doors
            .as_deref()
            .map(DoorControl::status)
            .unwrap_or_default();
        let fire_status = self
            .fire_alarm
            .as_deref()
            .map(FireAlarmSensor::status)
            .unwrap_or_default();

        let faults = detect_faults(&light_status, &door_status, &fire_status);
        if !faults.is_empty() {
            self.request_engineer(&faults);
        }

        format!("{light_status}{door_status}{fire_status}")
    }

    fn raise_fire_alarm(&mut self) -> bool {
        let (Some(alerts), Some(lights), Some(doors)) = (
            self.alerts.as_deref(),
            self.lights.as_deref(),
            self.doors.as_deref(),
        ) else {
            tracing::debug!("fire alarm collaborators unavailable");
            return false;
        };

        lights.set_all_lights(true);
        doors.open_all_doors();

        if let Err(err) = alerts.log_fire_alarm(OperatingState::FireAlarm.as_str()) {
            tracing::warn!(%err, "failed to log fire alarm, notifying operations");
            self.notify_operations(ALARM_LOG_FAILURE_SUBJECT, &err.to_string());
        }

        self.record.enter(OperatingState::FireAlarm);
        tracing::warn!("fire alarm raised");
        true
    }

    fn secure_building(&self) -> bool {
        let (Some(doors), Some(lights)) = (self.doors.as_deref(), self.lights.as_deref()) else {
            tracing::debug!("door or light control unavailable, cannot close");
            return false;
        };

        doors.lock_all_doors();
        lights.set_all_lights(false);
        // TODO: decide whether `close` should also record `closed`; the
        // recorded state is currently left as is.
        tracing::info!("doors locked and lights off");
        true
    }

    fn open_building(&mut self) -> bool {
        if let Some(doors) = self.doors.as_deref()
            && !doors.open_all_doors()
        {
            tracing::warn!("doors failed to open, staying in current state");
            return false;
        }

        self.record.enter(OperatingState::Open);
        tracing::info!(to = %OperatingState::Open, "state changed");
        true
    }

    fn notify_operations(&self, subject: &str, body: &str) {
        let Some(notifications) = self.notifications.as_deref() else {
            tracing::warn!(subject, "notification transport unavailable, dropping email");
            return;
        };
        if let Err(err) = notifications.send_email(OPERATIONS_ADDRESS, subject, body) {
            tracing::warn!(%err, subject, "failed to email operations");
        }
    }

    fn request_engineer(&self, faults: &FaultSummary) {
        let Some(alerts) = self.alerts.as_deref() else {
            tracing::warn!(%faults, "alert transport unavailable, engineer request dropped");
            return;
        };
        if let Err(err) = alerts.log_engineer_required(&faults.to_string()) {
            tracing::warn!(%err, %faults, "failed to request engineer");
        }
    }
}

/// Step-by-step builder for [`BuildingController`].
#[derive(Default)]
pub struct BuildingControllerBuilder {
    id: Option<BuildingId>,
    start_state: Option<OperatingState>,
    doors: Option<Box<dyn DoorControl>>,
    lights: Option<Box<dyn LightControl>>,
    fire_alarm: Option<Box<dyn FireAlarmSensor>>,
    alerts: Option<Box<dyn AlertTransport>>,
    notifications: Option<Box<dyn NotificationTransport>>,
}

impl BuildingControllerBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<BuildingId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Start in `state` instead of `out of hours`. Must be a normal state.
    #[must_use]
    pub fn start_state(mut self, state: OperatingState) -> Self {
        self.start_state = Some(state);
        self
    }

    #[must_use]
    pub fn doors(mut self, doors: impl DoorControl + 'static) -> Self {
        self.doors = Some(Box::new(doors));
        self
    }

    #[must_use]
    pub fn lights(mut self, lights: impl LightControl + 'static) -> Self {
        self.lights = Some(Box::new(lights));
        self
    }

    #[must_use]
    pub fn fire_alarm(mut self, fire_alarm: impl FireAlarmSensor + 'static) -> Self {
        self.fire_alarm = Some(Box::new(fire_alarm));
        self
    }

    #[must_use]
    pub fn alerts(mut self, alerts: impl AlertTransport + 'static) -> Self {
        self.alerts = Some(Box::new(alerts));
        self
    }

    #[must_use]
    pub fn notifications(mut self, notifications: impl NotificationTransport + 'static) -> Self {
        self.notifications = Some(Box::new(notifications));
        self
    }

    /// Consume the builder, validate, and return a [`BuildingController`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` if no id was given, or `InvalidStartState`
    /// if the start state is an emergency state.
    pub fn build(self) -> Result<BuildingController, ControllerError> {
        let id = self.id.ok_or(ValidationError::InvalidIdentity)?;
        let record = ControllerRecord::new(id, self.start_state.unwrap_or_default())?;
        Ok(BuildingController {
            record,
            doors: self.doors,
            lights: self.lights,
            fire_alarm: self.fire_alarm,
            alerts: self.alerts,
            notifications: self.notifications,
        })
    }
}
