//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! A rejected state transition is **not** an error: it is reported as a
//! `false` return from the controller and leaves the record untouched.

/// Invariant violations detected while building or mutating domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The building identifier was not supplied.
    #[error("building id cannot be absent")]
    InvalidIdentity,

    /// The requested start state is not one of the normal states.
    #[error(
        "BuildingController can only be initialised to the following states 'open', 'closed', 'out of hours'"
    )]
    InvalidStartState,

    /// A record claimed an emergency state as its last normal state.
    #[error("last normal state must be one of 'open', 'closed', 'out of hours'")]
    EmergencyLastNormalState,

    /// A record in a normal state disagreed with its last normal state.
    #[error("current state `{current}` does not match last normal state `{last_normal}`")]
    DivergentNormalState {
        current: &'static str,
        last_normal: &'static str,
    },
}

/// A string that does not name any operating state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised operating state `{0}`")]
pub struct UnknownStateError(pub String);

/// Top-level error returned by controller construction and identity updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_enumerate_normal_states_in_start_state_message() {
        let err = ValidationError::InvalidStartState;
        assert_eq!(
            err.to_string(),
            "BuildingController can only be initialised to the following states 'open', 'closed', 'out of hours'"
        );
    }

    #[test]
    fn should_display_validation_message_through_controller_error() {
        let err: ControllerError = ValidationError::InvalidIdentity.into();
        assert_eq!(err.to_string(), "building id cannot be absent");
        assert!(matches!(
            err,
            ControllerError::Validation(ValidationError::InvalidIdentity)
        ));
    }

    #[test]
    fn should_quote_offending_input_in_unknown_state_error() {
        let err = UnknownStateError("party".to_string());
        assert_eq!(err.to_string(), "unrecognised operating state `party`");
    }
}
