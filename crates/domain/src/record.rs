//! Controller record — identity plus current and last normal state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::BuildingId;
use crate::state::OperatingState;

/// The whole mutable state owned by a building controller.
///
/// `last_normal_state` is always a normal state. It follows
/// `current_state` whenever the building enters a normal state and is left
/// alone while an emergency is in progress, so that
/// [`recover`](Self::recover) can restore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr")]
pub struct ControllerRecord {
    identity: BuildingId,
    current_state: OperatingState,
    last_normal_state: OperatingState,
}

impl ControllerRecord {
    /// Create a record starting in `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStartState`] if `start` is an
    /// emergency state.
    pub fn new(identity: BuildingId, start: OperatingState) -> Result<Self, ValidationError> {
        if !start.is_normal() {
            return Err(ValidationError::InvalidStartState);
        }
        Ok(Self {
            identity,
            current_state: start,
            last_normal_state: start,
        })
    }

    #[must_use]
    pub fn identity(&self) -> &BuildingId {
        &self.identity
    }

    pub fn set_identity(&mut self, identity: BuildingId) {
        self.identity = identity;
    }

    #[must_use]
    pub fn current_state(&self) -> OperatingState {
        self.current_state
    }

    #[must_use]
    pub fn last_normal_state(&self) -> OperatingState {
        self.last_normal_state
    }

    /// Move to `state`, remembering it as the last normal state when it is one.
    pub fn enter(&mut self, state: OperatingState) {
        self.current_state = state;
        if state.is_normal() {
            self.last_normal_state = state;
        }
    }

    /// Leave an emergency by returning to the last normal state.
    pub fn recover(&mut self) {
        self.current_state = self.last_normal_state;
    }

    /// Whether an emergency is in progress.
    #[must_use]
    pub fn in_emergency(&self) -> bool {
        self.current_state.is_emergency()
    }
}

#[derive(Deserialize)]
struct RecordRepr {
    identity: BuildingId,
    current_state: OperatingState,
    last_normal_state: OperatingState,
}

impl TryFrom<RecordRepr> for ControllerRecord {
    type Error = ValidationError;

    fn try_from(repr: RecordRepr) -> Result<Self, Self::Error> {
        if !repr.last_normal_state.is_normal() {
            return Err(ValidationError::EmergencyLastNormalState);
        }
        if repr.current_state.is_normal() && repr.current_state != repr.last_normal_state {
            return Err(ValidationError::DivergentNormalState {
                current: repr.current_state.as_str(),
                last_normal: repr.last_normal_state.as_str(),
            });
        }
        Ok(Self {
            identity: repr.identity,
            current_state: repr.current_state,
            last_normal_state: repr.last_normal_state,
        })
    }
}
