//! Fault detection over collaborator status strings.
//!
//! Status strings are opaque except for the [`FAULT_MARKER`] substring,
//! which flags a subsystem as needing an engineer.

use std::fmt;

/// Substring that marks a status string as faulty.
pub const FAULT_MARKER: &str = "FAULT";

/// A collaborator whose status contributes to the building report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Lights,
    Doors,
    FireAlarm,
}

impl Subsystem {
    /// Label used in fault summaries and as the status-string prefix.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lights => "Lights",
            Self::Doors => "Doors",
            Self::FireAlarm => "FireAlarm",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of faulty subsystems.
///
/// Renders as each label followed by a comma (`Lights,Doors,`), or as the
/// empty string when nothing is faulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultSummary(Vec<Subsystem>);

impl FaultSummary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn subsystems(&self) -> &[Subsystem] {
        &self.0
    }
}

impl fmt::Display for FaultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for subsystem in &self.0 {
            write!(f, "{subsystem},")?;
        }
        Ok(())
    }
}

/// Inspect the light, door and fire-alarm statuses (in that order) for faults.
#[must_use]
pub fn detect_faults(light_status: &str, door_status: &str, fire_status: &str) -> FaultSummary {
    let faulty = [
        (light_status, Subsystem::Lights),
        (door_status, Subsystem::Doors),
        (fire_status, Subsystem::FireAlarm),
    ]
    .into_iter()
    .filter(|(status, _)| status.contains(FAULT_MARKER))
    .map(|(_, subsystem)| subsystem)
    .collect();
    FaultSummary(faulty)
}
